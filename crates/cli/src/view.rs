use log::info;
use racevis_dataset::Dataset;
use racevis_vis::layout::VisLayout;

use crate::cli::PathExt;
use crate::cli::Source;
use crate::cli::ViewArgs;
use crate::error::CliError;
use crate::fetch::client::DataClient;

/// Loads the race records and renders them. Nothing is rendered when
/// the records cannot be loaded.
pub(crate) fn view(args: ViewArgs) -> Result<(), CliError> {
    let config = args.chart_config();
    let output_path = args.output_path.or_current_dir()?;

    info!(
        "racevis plots race records from: `{}` and generates a visual representation in: `{}`",
        args.source,
        output_path.display()
    );

    let dataset = load(&args.source)?;

    let vis = VisLayout::init(&output_path)?;
    vis.generate_report(&dataset, &config)?;

    Ok(())
}

pub(crate) fn load(source: &Source) -> Result<Dataset, CliError> {
    let dataset = match source {
        Source::Path(path) => Dataset::open(path)?,
        Source::Url(url) => DataClient::new().get_dataset(url)?,
    };

    Ok(dataset)
}
