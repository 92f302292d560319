use racevis_dataset::Dataset;
use racevis_dataset::record::Record;
use serde::Serialize;

use crate::axis;
use crate::axis::Tick;
use crate::config::ChartConfig;
use crate::legend::Legend;
use crate::legend::LegendEntry;
use crate::scale::ScaleError;
use crate::scale::Scales;
use crate::tooltip;
use crate::tooltip::Point;
use crate::tooltip::TooltipContent;
use crate::tooltip::TooltipState;

const DOT_RADIUS: f64 = 5.0;
const TICK_SIZE: f64 = 6.0;
const X_CAPTION: &str = "Year";
const Y_CAPTION: &str = "Time in Minutes";

/// Everything the page template needs to draw the chart, in pixels.
#[derive(Serialize, Debug)]
pub struct ChartView {
    width: u32,
    height: u32,
    title: Caption,
    subtitle: Caption,
    x_axis: AxisView,
    y_axis: AxisView,
    x_caption: Caption,
    y_caption: Caption,
    legend: LegendView,
    dots: Vec<Dot>,
    tooltip: TooltipView,
}

impl ChartView {
    pub fn new(dataset: &Dataset, config: &ChartConfig) -> Result<ChartView, ScaleError> {
        let scales = Scales::build(dataset, config)?;
        let padding = config.padding;
        let (width, height) = (f64::from(config.width), f64::from(config.height));
        let (x0, x1) = scales.x.range();
        let (y0, y1) = scales.y.range();

        let x_axis = AxisView {
            transform: format!("translate(0, {y1})"),
            domain_path: format!("M{x0},{TICK_SIZE}V0H{x1}V{TICK_SIZE}"),
            ticks: axis::year_ticks(&scales.x),
        };
        let y_axis = AxisView {
            transform: format!("translate({x0}, 0)"),
            domain_path: format!("M-{TICK_SIZE},{y0}H0V{y1}H-{TICK_SIZE}"),
            ticks: axis::time_ticks(&scales.y),
        };

        let dots = dataset
            .iter()
            .map(|record| Dot::new(record, &scales))
            .collect();

        let (legend_x, legend_y) = Legend::position(config);
        let legend = LegendView {
            transform: format!("translate({legend_x}, {legend_y})"),
            entries: Legend::from_records(dataset).entries(),
        };

        Ok(Self {
            width: config.width,
            height: config.height,
            title: Caption::new(width / 2.0, f64::from(padding.top) / 2.0, &config.title),
            subtitle: Caption::new(width / 2.0, f64::from(padding.top) / 2.0 + 20.0, &config.subtitle),
            x_axis,
            y_axis,
            x_caption: Caption::new(width / 2.0, height - 10.0, X_CAPTION),
            y_caption: Caption::new(-height / 2.0, 15.0, Y_CAPTION),
            legend,
            dots,
            tooltip: TooltipView::new(dataset)?,
        })
    }
}

#[derive(Serialize, Debug)]
struct Caption {
    x: f64,
    y: f64,
    text: String,
}

impl Caption {
    fn new(x: f64, y: f64, text: &str) -> Caption {
        Self {
            x: axis::round(x),
            y: axis::round(y),
            text: text.to_owned(),
        }
    }
}

#[derive(Serialize, Debug)]
struct AxisView {
    transform: String,
    domain_path: String,
    ticks: Vec<Tick>,
}

#[derive(Serialize, Debug)]
struct LegendView {
    transform: String,
    entries: Vec<LegendEntry>,
}

/// The tooltip settings the page script applies on hover and leave.
#[derive(Serialize, Debug, PartialEq)]
struct TooltipView {
    offset_x: f64,
    offset_y: f64,
    opacity: f64,
    hidden_opacity: f64,
}

impl TooltipView {
    /// Replays a hover at the pointer origin followed by a leave, so the
    /// page moves and fades the tooltip the same way `TooltipState` does.
    fn new(dataset: &Dataset) -> Result<TooltipView, ScaleError> {
        let record = dataset.iter().next().ok_or(ScaleError::EmptyDataset)?;

        let shown = TooltipState::Hidden.hover_enter(record, Point::default());
        let offset = shown.position().unwrap_or_default();
        let opacity = shown.opacity();
        let hidden = shown.hover_leave();

        Ok(Self {
            offset_x: offset.x,
            offset_y: offset.y,
            opacity,
            hidden_opacity: hidden.opacity(),
        })
    }
}

/// One marker of the scatter plot.
#[derive(Serialize, Debug)]
struct Dot {
    class: String,
    category: &'static str,
    cx: f64,
    cy: f64,
    r: f64,
    xvalue: i32,
    yvalue: String,
    tooltip: String,
    url: Option<String>,
}

impl Dot {
    fn new(record: &Record, scales: &Scales) -> Dot {
        let content = TooltipContent::for_record(record);

        Self {
            class: format!("dot {}", content.class),
            category: content.class,
            cx: axis::round(scales.x.apply(record.year_date())),
            cy: axis::round(scales.y.apply(record.time_date())),
            r: DOT_RADIUS,
            xvalue: record.year,
            yvalue: record.time_date().to_rfc3339(),
            tooltip: content.text(),
            url: tooltip::click(record).url().map(str::to_owned),
        }
    }
}
