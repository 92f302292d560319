use std::fs;
use std::path::Path;
use std::path::PathBuf;

use log::debug;
use log::info;
use racevis_dataset::Dataset;

use crate::chart::ChartView;
use crate::config::ChartConfig;
use crate::error::Result;
use crate::template::TemplateEngine;

/// The data visualization directory is structured as follows:
///
/// ./vis/index.html
///
/// The __index__ file is a self-contained page with the chart, its
/// stylesheet and the pointer interaction script.
pub struct VisLayout {
    root_path: PathBuf,
    index_file_path: PathBuf,
}

impl VisLayout {
    const MAIN_DIR_NAME: &str = "vis";
    const INDEX_FILE_NAME: &str = "index.html";

    pub fn init(path: &Path) -> Result<VisLayout> {
        let root_path = path.join(Self::MAIN_DIR_NAME);
        let index_file_path = root_path.join(Self::INDEX_FILE_NAME);

        fs::create_dir_all(&root_path)?;
        debug!("initialized the visualization directory `{}`", root_path.display());

        Ok(Self {
            root_path,
            index_file_path,
        })
    }

    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    pub fn index_file_path(&self) -> &Path {
        &self.index_file_path
    }

    /// Draws the dataset and writes the page. Generating the report again
    /// replaces the previous page.
    pub fn generate_report(&self, dataset: &Dataset, config: &ChartConfig) -> Result<()> {
        let chart = ChartView::new(dataset, config)?;

        let template = TemplateEngine::new(&self.index_file_path);
        template.render(&chart)?;

        info!(
            "rendered {} race records into `{}`",
            dataset.len(),
            self.index_file_path.display()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use racevis_dataset::record::RawRecord;

    use crate::error::VisError;
    use crate::scale::ScaleError;

    fn dataset() -> Dataset {
        Dataset::from_raw(vec![RawRecord {
            time: String::from("36:50"),
            place: 1,
            seconds: 2210,
            name: String::from("Marco Pantani"),
            year: 1995,
            nationality: String::from("ITA"),
            doping: String::new(),
            url: String::new(),
        }])
        .unwrap()
    }

    #[test]
    fn report_is_written_into_the_vis_directory() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let layout = VisLayout::init(dir.path())?;

        layout.generate_report(&dataset(), &ChartConfig::default())?;

        let expected = dir.path().join("vis").join("index.html");
        assert_eq!(layout.index_file_path(), expected);
        assert!(fs::read_to_string(expected)?.contains(r#"class="dot no-doping""#));

        Ok(())
    }

    #[test]
    fn generating_twice_replaces_the_page() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let layout = VisLayout::init(dir.path())?;
        let dataset = dataset();

        layout.generate_report(&dataset, &ChartConfig::default())?;
        layout.generate_report(&dataset, &ChartConfig::default())?;

        let page = fs::read_to_string(layout.index_file_path())?;
        assert_eq!(page.matches("<circle").count(), 1);

        Ok(())
    }

    #[test]
    fn empty_dataset_writes_nothing() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let layout = VisLayout::init(dir.path())?;

        let result = layout.generate_report(&Dataset::default(), &ChartConfig::default());

        assert!(matches!(
            result,
            Err(VisError::Scale(ScaleError::EmptyDataset))
        ));
        assert!(!layout.index_file_path().exists());

        Ok(())
    }
}
