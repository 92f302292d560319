use std::fmt::Display;
use std::fmt::Formatter;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::error::RecordError;
use crate::time;

/// A race record as it appears in the source JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawRecord {
    pub time: String,
    pub place: u32,
    pub seconds: u32,
    pub name: String,
    pub year: i32,
    pub nationality: String,
    #[serde(default)]
    pub doping: String,
    #[serde(rename = "URL", default)]
    pub url: String,
}

/// A normalized race record.
///
/// The derived dates are computed once when the record is created and the
/// record is not mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub time: String,
    pub place: u32,
    pub seconds: u32,
    pub name: String,
    pub year: i32,
    pub nationality: String,
    pub doping: String,
    pub url: String,
    time_date: DateTime<Utc>,
    year_date: DateTime<Utc>,
}

impl Record {
    /// The race time anchored to the epoch day.
    pub fn time_date(&self) -> DateTime<Utc> {
        self.time_date
    }

    /// January 1 of the race year.
    pub fn year_date(&self) -> DateTime<Utc> {
        self.year_date
    }

    pub fn category(&self) -> Category {
        if self.doping.is_empty() {
            Category::NoDoping
        } else {
            Category::Doping
        }
    }

    /// The source link, if the record has one.
    pub fn source_url(&self) -> Option<&str> {
        if self.url.is_empty() {
            None
        } else {
            Some(&self.url)
        }
    }

    /// The doping allegation, if the record has one.
    pub fn allegation(&self) -> Option<&str> {
        match self.category() {
            Category::Doping => Some(&self.doping),
            Category::NoDoping => None,
        }
    }
}

impl TryFrom<RawRecord> for Record {
    type Error = RecordError;

    fn try_from(raw: RawRecord) -> Result<Self, Self::Error> {
        let time_date = time::parse_race_time(&raw.time)?;
        let year_date = time::year_start(raw.year)?;

        Ok(Self {
            time: raw.time,
            place: raw.place,
            seconds: raw.seconds,
            name: raw.name,
            year: raw.year,
            nationality: raw.nationality,
            doping: raw.doping,
            url: raw.url,
            time_date,
            year_date,
        })
    }
}

/// The doping allegation partition of the records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    NoDoping,
    Doping,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::NoDoping, Category::Doping];

    /// The CSS class that selects the category color.
    pub fn class_name(&self) -> &'static str {
        match self {
            Category::NoDoping => "no-doping",
            Category::Doping => "doping",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::NoDoping => write!(f, "No doping allegations"),
            Category::Doping => write!(f, "Doping allegations"),
        }
    }
}
