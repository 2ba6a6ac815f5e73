use std::path::PathBuf;

/// Failures that abort a single lookup. Each one is reported to the user and
/// never written to disk.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("{0}")]
    Input(String),

    #[error("request to {url} failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("response is not a JSON array of certificate records: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("cannot write {path}: {source}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, LookupError>;
