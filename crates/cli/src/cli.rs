use std::env;
use std::fmt::Display;
use std::path::PathBuf;

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use racevis_vis::config::ChartConfig;
use racevis_vis::config::Padding;
use racevis_vis::config::parse_px;
use reqwest::Url;

use crate::error::CliError;

pub(crate) const DATASET_FILE_NAME: &str = "cyclist-data.json";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Plot the race records and generate a visual representation of them.
    View(ViewArgs),
    /// Fetch the race records and store them locally.
    Fetch(FetchArgs),
}

#[derive(Args)]
pub(crate) struct ViewArgs {
    /// Specify where to read the race records from.
    /// The value is either a path to a JSON file or an http(s) URL.
    #[arg(short, long, default_value = DATASET_FILE_NAME, value_parser(parse_source))]
    pub(crate) source: Source,

    /// Specify the path where the generated output will be created.
    /// If the output path is not specified then the current working
    /// directory is used.
    #[arg(short, long, value_parser(parse_path))]
    pub(crate) output_path: Option<PathBuf>,

    /// Specify the chart width in pixels, for example `920` or `920px`.
    #[arg(long, default_value = "920px", value_parser(parse_pixels))]
    pub(crate) width: u32,

    /// Specify the chart height in pixels, for example `630` or `630px`.
    #[arg(long, default_value = "630px", value_parser(parse_pixels))]
    pub(crate) height: u32,

    /// Specify the space in pixels between the chart border and the plot area.
    #[arg(long, default_value_t = ChartConfig::DEFAULT_PADDING)]
    pub(crate) padding: u32,
}

impl ViewArgs {
    pub(crate) fn chart_config(&self) -> ChartConfig {
        ChartConfig::new(self.width, self.height, Padding::uniform(self.padding))
    }
}

#[derive(Args)]
pub(crate) struct FetchArgs {
    /// Specify the URL of the race records JSON document.
    #[arg(short, long, value_parser(parse_url))]
    pub(crate) url: Url,

    /// Specify the directory where the race records will be stored.
    /// If the path is not specified then the current working directory is used.
    #[arg(short = 'f', long, value_parser(parse_path))]
    pub(crate) path: Option<PathBuf>,
}

/// The location of the race records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Source {
    Url(Url),
    Path(PathBuf),
}

impl Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Url(url) => write!(f, "{url}"),
            Source::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

fn parse_source(source: &str) -> Result<Source, String> {
    if source.starts_with("http://") || source.starts_with("https://") {
        parse_url(source).map(Source::Url)
    } else {
        Ok(Source::Path(PathBuf::from(source)))
    }
}

fn parse_url(url: &str) -> Result<Url, String> {
    Url::parse(url).map_err(|e| format!("The `{url}` URL is not valid: {e}."))
}

fn parse_pixels(value: &str) -> Result<u32, String> {
    match parse_px(value) {
        Some(px) if px > 0 => Ok(px),
        _ => Err(format!("The `{value}` value is not a pixel length.")),
    }
}

fn parse_path(path: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path);

    if !path.exists() {
        return Err(format!("The `{}` path does not exist.", path.display()));
    }

    if !path.is_dir() {
        return Err(format!(
            "The `{}` path must point to a directory.",
            path.display()
        ));
    }

    Ok(path)
}

pub(crate) trait PathExt {
    fn or_current_dir(self) -> Result<PathBuf, CliError>;
}

impl PathExt for Option<PathBuf> {
    fn or_current_dir(self) -> Result<PathBuf, CliError> {
        if let Some(path) = self {
            Ok(path)
        } else {
            env::current_dir().map_err(|e| CliError::Path(e.to_string()))
        }
    }
}
