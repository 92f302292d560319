//! A library for reading cyclist race records.
//!
//! Records are decoded from a JSON array and normalized into [`Record`]
//! values whose race time and year are available as points in time.

mod time;

pub mod error;
pub mod record;

use std::fs::File;
use std::io::BufReader;
use std::io::Read;
use std::path::Path;

use chrono::DateTime;
use chrono::Utc;
use log::debug;
use log::info;

use crate::error::DatasetError;
use crate::error::Result;
use crate::record::RawRecord;
use crate::record::Record;

pub use crate::time::parse_race_time;
pub use crate::time::year_start;

/// A normalized, ordered sequence of race records.
///
/// The source order is preserved but carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Reads and normalizes the records of the JSON document at `path`.
    pub fn open(path: &Path) -> Result<Dataset> {
        debug!("reading race records from `{}`", path.display());

        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Dataset> {
        let raw: Vec<RawRecord> = serde_json::from_reader(reader)?;
        Self::from_raw(raw)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Dataset> {
        let raw: Vec<RawRecord> = serde_json::from_slice(bytes)?;
        Self::from_raw(raw)
    }

    /// Normalizes the raw records. The first invalid record aborts the load.
    pub fn from_raw(raw: Vec<RawRecord>) -> Result<Dataset> {
        let records = raw
            .into_iter()
            .enumerate()
            .map(|(index, raw)| {
                Record::try_from(raw).map_err(|source| DatasetError::Record { index, source })
            })
            .collect::<Result<Vec<Record>>>()?;

        info!("loaded {} race records", records.len());

        Ok(Self { records })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The `[min, max]` of the race years, `None` for an empty dataset.
    pub fn year_extent(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        extent(self.records.iter().map(Record::year_date))
    }

    /// The `[min, max]` of the race times, `None` for an empty dataset.
    pub fn time_extent(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        extent(self.records.iter().map(Record::time_date))
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;

    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

fn extent<I>(mut values: I) -> Option<(DateTime<Utc>, DateTime<Utc>)>
where
    I: Iterator<Item = DateTime<Utc>>,
{
    let first = values.next()?;

    Some(values.fold((first, first), |(min, max), value| {
        (min.min(value), max.max(value))
    }))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::error::RecordError;
    use crate::record::tests::raw_record;

    const CYCLISTS: &str = r#"[
        {"Time": "36:50", "Place": 1, "Seconds": 2210, "Name": "Marco Pantani", "Year": 1995,
         "Nationality": "ITA", "Doping": "Alleged drug use during 1995 due to high hematocrit levels",
         "URL": "https://en.wikipedia.org/wiki/Marco_Pantani#Alleged_drug_use"},
        {"Time": "37:15", "Place": 3, "Seconds": 2235, "Name": "Lance Armstrong", "Year": 2004,
         "Nationality": "USA", "Doping": "", "URL": ""},
        {"Time": "39:23", "Place": 35, "Seconds": 2363, "Name": "Nairo Quintana", "Year": 2015,
         "Nationality": "COL", "Doping": "", "URL": ""}
    ]"#;

    #[test]
    fn load_preserves_source_order() -> Result<()> {
        let dataset = Dataset::from_reader(Cursor::new(CYCLISTS))?;

        let names: Vec<&str> = dataset.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Marco Pantani", "Lance Armstrong", "Nairo Quintana"]);

        Ok(())
    }

    #[test]
    fn extents_cover_all_records() -> Result<()> {
        let dataset = Dataset::from_slice(CYCLISTS.as_bytes())?;

        let (min_year, max_year) = dataset.year_extent().unwrap();
        assert_eq!(min_year, year_start(1995).unwrap());
        assert_eq!(max_year, year_start(2015).unwrap());

        let (min_time, max_time) = dataset.time_extent().unwrap();
        assert_eq!(min_time, parse_race_time("36:50").unwrap());
        assert_eq!(max_time, parse_race_time("39:23").unwrap());

        Ok(())
    }

    #[test]
    fn empty_dataset_has_no_extent() {
        let dataset = Dataset::default();

        assert!(dataset.is_empty());
        assert_eq!(dataset.year_extent(), None);
        assert_eq!(dataset.time_extent(), None);
    }


    #[test]
    fn malformed_record_aborts_the_load() {
        let raw = vec![
            raw_record("36:50", 1995, "", ""),
            raw_record("36-50", 1996, "", ""),
        ];

        match Dataset::from_raw(raw) {
            Err(DatasetError::Record { index, source }) => {
                assert_eq!(index, 1);
                assert_eq!(source, RecordError::InvalidTime(String::from("36-50")));
            }
            other => panic!("expected a record error, got {other:?}"),
        }
    }

    #[test]
    fn invalid_json_is_reported() {
        let result = Dataset::from_slice(b"{\"Time\": \"36:50\"}");

        assert!(matches!(result, Err(DatasetError::Json(_))));
    }
}
