use std::error::Error;
use std::fmt::Display;

use racevis_dataset::error::DatasetError;
use racevis_vis::error::VisError;

use crate::fetch::error::FetchError;

#[derive(Debug)]
pub(crate) enum CliError {
    Fetch(FetchError),
    Dataset(DatasetError),
    Vis(VisError),
    Path(String),
}

impl From<FetchError> for CliError {
    fn from(error: FetchError) -> Self {
        CliError::Fetch(error)
    }
}

impl From<DatasetError> for CliError {
    fn from(error: DatasetError) -> Self {
        CliError::Dataset(error)
    }
}

impl From<VisError> for CliError {
    fn from(error: VisError) -> Self {
        CliError::Vis(error)
    }
}

impl Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cli_error = "CLI error:";

        match self {
            CliError::Fetch(error) => write!(f, "{cli_error} {error}"),
            CliError::Dataset(error) => write!(f, "{cli_error} {error}"),
            CliError::Vis(error) => write!(f, "{cli_error} {error}"),
            CliError::Path(error) => write!(f, "{cli_error} {error}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CliError::Fetch(error) => Some(error),
            CliError::Dataset(error) => Some(error),
            CliError::Vis(error) => Some(error),
            CliError::Path(_) => None,
        }
    }
}
