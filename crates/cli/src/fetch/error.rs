use std::error::Error;
use std::fmt::Display;
use std::io;

use racevis_dataset::error::DatasetError;
use reqwest::StatusCode;

pub(crate) type Result<T> = std::result::Result<T, FetchError>;

#[derive(Debug)]
pub(crate) enum FetchError {
    Http(reqwest::Error),
    Response {
        status_code: StatusCode,
        message: String,
    },
    Io(io::Error),
    Dataset(DatasetError),
}

impl Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fetch_error = "fetch error:";

        match self {
            FetchError::Http(error) => write!(f, "{fetch_error} HTTP request error: {error}"),
            FetchError::Response {
                status_code,
                message,
            } => write!(
                f,
                "{fetch_error} HTTP response error: status = {status_code}, message = {message}"
            ),
            FetchError::Io(error) => {
                write!(f, "{fetch_error} storing the race records failed: {error}")
            }
            FetchError::Dataset(error) => {
                write!(f, "{fetch_error} the response is not a valid dataset: {error}")
            }
        }
    }
}

impl Error for FetchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            FetchError::Http(error) => Some(error),
            FetchError::Response { .. } => None,
            FetchError::Io(error) => Some(error),
            FetchError::Dataset(error) => Some(error),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        FetchError::Http(error)
    }
}

impl From<io::Error> for FetchError {
    fn from(error: io::Error) -> Self {
        FetchError::Io(error)
    }
}

impl From<DatasetError> for FetchError {
    fn from(error: DatasetError) -> Self {
        FetchError::Dataset(error)
    }
}
