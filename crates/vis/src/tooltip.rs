//! The pointer interaction with the chart markers.
//!
//! A single tooltip element is shared by all markers. Hovering a marker
//! fills the tooltip with the record details and moves it next to the
//! pointer, leaving the marker hides it, and clicking a marker opens the
//! record source when there is one.

use racevis_dataset::record::Record;

/// The horizontal distance between the pointer and the tooltip.
pub const POINTER_OFFSET_X: f64 = 10.0;

/// The vertical distance between the pointer and the tooltip.
pub const POINTER_OFFSET_Y: f64 = -28.0;

pub const VISIBLE_OPACITY: f64 = 0.9;
pub const HIDDEN_OPACITY: f64 = 0.0;

const SOURCE_HINT: &str = "(click to see source)";

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Point {
        Self { x, y }
    }
}

/// The text and styling of the tooltip for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipContent {
    pub lines: Vec<String>,
    pub class: &'static str,
}

impl TooltipContent {
    pub fn for_record(record: &Record) -> TooltipContent {
        let mut lines = vec![
            format!("{}: {}", record.name, record.nationality),
            format!("Year: {}, Time: {}", record.year, record.time),
            format!("Place: {}", record.place),
        ];

        if let Some(allegation) = record.allegation() {
            lines.push(allegation.to_owned());
        }

        if record.source_url().is_some() {
            lines.push(String::from(SOURCE_HINT));
        }

        Self {
            lines,
            class: record.category().class_name(),
        }
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum TooltipState<'a> {
    #[default]
    Hidden,
    Visible {
        record: &'a Record,
        position: Point,
    },
}

impl<'a> TooltipState<'a> {
    /// Shows the tooltip for `record`, replacing whatever was shown before.
    pub fn hover_enter(self, record: &'a Record, pointer: Point) -> TooltipState<'a> {
        TooltipState::Visible {
            record,
            position: Point::new(pointer.x + POINTER_OFFSET_X, pointer.y + POINTER_OFFSET_Y),
        }
    }

    pub fn hover_leave(self) -> TooltipState<'a> {
        TooltipState::Hidden
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, TooltipState::Visible { .. })
    }

    pub fn opacity(&self) -> f64 {
        match self {
            TooltipState::Hidden => HIDDEN_OPACITY,
            TooltipState::Visible { .. } => VISIBLE_OPACITY,
        }
    }

    /// Where the tooltip is drawn, `None` while it is hidden.
    pub fn position(&self) -> Option<Point> {
        match self {
            TooltipState::Hidden => None,
            TooltipState::Visible { position, .. } => Some(*position),
        }
    }

    pub fn content(&self) -> Option<TooltipContent> {
        match self {
            TooltipState::Hidden => None,
            TooltipState::Visible { record, .. } => Some(TooltipContent::for_record(record)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction<'a> {
    /// Open the link in a new browsing context.
    OpenSource(&'a str),
    None,
}

impl<'a> ClickAction<'a> {
    /// The link to open, if the click opens one.
    pub fn url(&self) -> Option<&'a str> {
        match self {
            ClickAction::OpenSource(url) => Some(*url),
            ClickAction::None => None,
        }
    }
}

pub fn click(record: &Record) -> ClickAction<'_> {
    match record.source_url() {
        Some(url) => ClickAction::OpenSource(url),
        None => ClickAction::None,
    }
}
