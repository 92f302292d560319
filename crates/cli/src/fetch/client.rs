use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use log::debug;
use racevis_dataset::Dataset;
use reqwest::StatusCode;
use reqwest::Url;
use reqwest::blocking::Client;

use crate::fetch::error::FetchError;
use crate::fetch::error::Result;

pub(crate) struct DataClient {
    client: Client,
}

impl DataClient {
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Downloads the JSON document without decoding it.
    pub fn get(&self, url: &Url) -> Result<Vec<u8>> {
        debug!("requesting `{url}`");

        let response = self.client.get(url.clone()).send()?;

        match response.status() {
            StatusCode::OK => {
                let body = response.bytes()?;
                Ok(body.to_vec())
            }
            status_code => {
                let message = response.text()?;
                let error = FetchError::Response {
                    status_code,
                    message,
                };
                Err(error)
            }
        }
    }

    pub fn get_dataset(&self, url: &Url) -> Result<Dataset> {
        let body = self.get(url)?;
        let dataset = Dataset::from_slice(&body)?;

        Ok(dataset)
    }

    /// Stores the JSON document at `path` once it decodes as a dataset.
    pub fn download(&self, url: &Url, path: &Path) -> Result<u64> {
        let body = self.get(url)?;
        Dataset::from_slice(&body)?;

        let mut writer = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;

        writer.write_all(&body)?;
        writer.flush()?;

        Ok(body.len() as u64)
    }
}
