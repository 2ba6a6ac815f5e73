use std::path::PathBuf;

use crate::error::{LookupError, Result};

pub const DEFAULT_ENDPOINT: &str = "https://crt.sh/";

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the certificate-transparency search service
    pub base_url: String,
    pub timeout_secs: u64,
    /// Directory that `output/` and org result files are resolved against
    pub output_root: PathBuf,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: 30,
            output_root: PathBuf::from("."),
            user_agent: format!("ctlookup/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Config {
    /// Parse and validate `base_url`, making sure query strings can be appended to it.
    pub fn endpoint(&self) -> Result<url::Url> {
        let parsed = url::Url::parse(&self.base_url)
            .map_err(|e| LookupError::Input(format!("invalid endpoint '{}': {}", self.base_url, e)))?;
        match parsed.scheme() {
            "http" | "https" => Ok(parsed),
            other => Err(LookupError::Input(format!(
                "unsupported endpoint scheme '{}' (expected http or https)",
                other
            ))),
        }
    }
}
