// src/error.rs
//
// Typed failures per stage. The first three pipeline kinds are terminal for a
// run; coordinate parse failures live in geo::coords and never reach here.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("timed out after {after:?} fetching {url}")]
    Timeout { url: String, after: Duration },
    #[error("could not connect to {url}: {source}")]
    Connect {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("could not read page file {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum LocateError {
    #[error("wanted table #{wanted} with class `{class}`, page has {found}")]
    TooFewTables { class: String, wanted: usize, found: usize },
    #[error("no table with class `{class}` has a `{header}` header")]
    NoHeaderMatch { class: String, header: String },
    #[error("invalid selector `{0}`")]
    Selector(String),
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("invalid selector `{0}`")]
    Selector(String),
}

/// Terminal pipeline failures. Any of these ends the run with no artifact.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("network failure: {0}")]
    Network(#[from] FetchError),
    #[error("structure not found: {0}")]
    StructureNotFound(#[from] LocateError),
    #[error("extraction failure: {0}")]
    Extraction(#[from] ExtractError),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    #[error("could not serialize map markers: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no file URL for {}", .0.display())]
    FileUrl(PathBuf),
    #[error("could not open {url} in a browser: {source}")]
    Browser {
        url: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
    #[error("export failed: {0}")]
    Export(#[from] ExportError),
}

/// Command-line failures: bad arguments or a failed run.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0} (see --help)")]
    Usage(String),
    #[error(transparent)]
    Run(#[from] RunError),
}
