use std::error::Error;
use std::fmt::Display;

use chrono::DateTime;
use chrono::Months;
use chrono::Utc;
use racevis_dataset::Dataset;

use crate::config::ChartConfig;

const YEAR: Months = Months::new(12);

/// A linear mapping from a time interval to a pixel interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    domain: (DateTime<Utc>, DateTime<Utc>),
    range: (f64, f64),
}

impl TimeScale {
    pub fn new(domain: (DateTime<Utc>, DateTime<Utc>), range: (f64, f64)) -> TimeScale {
        Self { domain, range }
    }

    pub fn domain(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Maps `value` into the range. A single-point domain maps every
    /// value to the middle of the range.
    pub fn apply(&self, value: DateTime<Utc>) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = (d1 - d0).num_milliseconds();

        if span == 0 {
            return (r0 + r1) / 2.0;
        }

        let t = (value - d0).num_milliseconds() as f64 / span as f64;
        r0 + t * (r1 - r0)
    }
}

/// The x (race year) and y (race time) scales of the chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scales {
    pub x: TimeScale,
    pub y: TimeScale,
}

impl Scales {
    /// Builds the scales from the dataset extents.
    ///
    /// The year domain is widened by one year on each side so that the
    /// boundary points are not drawn on the axes. The time range grows
    /// downwards, so faster times are drawn closer to the top.
    pub fn build(dataset: &Dataset, config: &ChartConfig) -> Result<Scales, ScaleError> {
        let padding = config.padding;

        let fits = |size: u32, before: u32, after: u32| {
            before.checked_add(after).is_some_and(|total| total < size)
        };

        if !fits(config.width, padding.left, padding.right)
            || !fits(config.height, padding.top, padding.bottom)
        {
            return Err(ScaleError::CanvasTooSmall {
                width: config.width,
                height: config.height,
            });
        }

        let (min_year, max_year) = dataset.year_extent().ok_or(ScaleError::EmptyDataset)?;
        let time_domain = dataset.time_extent().ok_or(ScaleError::EmptyDataset)?;

        let year_domain = (
            min_year
                .checked_sub_months(YEAR)
                .ok_or(ScaleError::DomainOutOfRange)?,
            max_year
                .checked_add_months(YEAR)
                .ok_or(ScaleError::DomainOutOfRange)?,
        );

        let x = TimeScale::new(
            year_domain,
            (
                f64::from(padding.left),
                f64::from(config.width - padding.right),
            ),
        );
        let y = TimeScale::new(
            time_domain,
            (
                f64::from(padding.top),
                f64::from(config.height - padding.bottom),
            ),
        );

        Ok(Self { x, y })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleError {
    /// There are no records to compute an extent from.
    EmptyDataset,

    /// The padded year domain is outside of the representable dates.
    DomainOutOfRange,

    /// The padding leaves no room for the plot area.
    CanvasTooSmall { width: u32, height: u32 },
}

impl Display for ScaleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScaleError::EmptyDataset => write!(f, "the dataset has no records to plot"),
            ScaleError::DomainOutOfRange => {
                write!(f, "the year domain is outside of the supported dates")
            }
            ScaleError::CanvasTooSmall { width, height } => write!(
                f,
                "the {width}x{height} canvas is too small for the configured padding"
            ),
        }
    }
}

impl Error for ScaleError {}
