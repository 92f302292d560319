use racevis_dataset::record::Category;
use racevis_dataset::record::Record;
use serde::Serialize;

use crate::config::ChartConfig;

const LEGEND_WIDTH: f64 = 200.0;
const LEGEND_HALF_HEIGHT: f64 = 40.0;
const ENTRY_SPACING: f64 = 25.0;

/// The number of records in each category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Legend {
    no_doping: usize,
    doping: usize,
}

impl Legend {
    pub fn from_records<'a, I>(records: I) -> Legend
    where
        I: IntoIterator<Item = &'a Record>,
    {
        records
            .into_iter()
            .fold(Legend::default(), |mut legend, record| {
                match record.category() {
                    Category::NoDoping => legend.no_doping += 1,
                    Category::Doping => legend.doping += 1,
                }
                legend
            })
    }

    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::NoDoping => self.no_doping,
            Category::Doping => self.doping,
        }
    }

    pub fn total(&self) -> usize {
        self.no_doping + self.doping
    }

    pub fn entries(&self) -> Vec<LegendEntry> {
        Category::ALL
            .iter()
            .enumerate()
            .map(|(idx, category)| LegendEntry {
                class: category.class_name(),
                label: format!("{category} ({})", self.count(*category)),
                offset: idx as f64 * ENTRY_SPACING,
            })
            .collect()
    }

    /// The top left corner of the legend box.
    pub fn position(config: &ChartConfig) -> (f64, f64) {
        let x = f64::from(config.width) - f64::from(config.padding.right) - LEGEND_WIDTH;
        let y = f64::from(config.height) / 2.0 - LEGEND_HALF_HEIGHT;
        (x, y)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub class: &'static str,
    pub label: String,
    /// The vertical offset of the entry inside the legend box.
    pub offset: f64,
}
