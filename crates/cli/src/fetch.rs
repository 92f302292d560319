pub(crate) mod client;
pub(crate) mod error;

use log::info;

use crate::cli::DATASET_FILE_NAME;
use crate::cli::FetchArgs;
use crate::cli::PathExt;
use crate::error::CliError;
use crate::fetch::client::DataClient;

pub(crate) fn fetch(args: FetchArgs) -> Result<(), CliError> {
    let path = args.path.or_current_dir()?.join(DATASET_FILE_NAME);

    info!(
        "racevis fetches the race records from: `{}` into: `{}`",
        args.url,
        path.display()
    );

    let client = DataClient::new();
    let bytes = client.download(&args.url, &path)?;

    info!("stored {bytes} bytes of race records");

    Ok(())
}
