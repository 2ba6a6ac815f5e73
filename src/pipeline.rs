use reqwest::Client;
use std::path::PathBuf;

use crate::config::Config;
use crate::discover::crtsh::{self, SearchRequest};
use crate::error::Result;
use crate::filter::clean_names;
use crate::output;

/// How a lookup finished when nothing went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// Nothing to write; `reason` is the message shown to the user.
    NoResults { reason: String },
    Saved { names: Vec<String>, path: PathBuf },
}

/// Build the query, fetch it, extract and clean names, and persist them.
pub async fn lookup(client: &Client, config: &Config, request: &SearchRequest) -> Result<LookupOutcome> {
    request.validate()?;
    let url = request.build_url(&config.endpoint()?);
    tracing::info!(kind = request.kind(), value = %request.value(), "starting lookup");

    let body = crtsh::fetch_body(client, &url).await?;
    if body.is_empty() {
        tracing::warn!(url = %url, "empty response body");
        return Ok(LookupOutcome::NoResults {
            reason: format!("No results found for {} {}", request.kind(), request.value()),
        });
    }

    let candidates = crtsh::extract_candidates(&body, request)?;
    tracing::debug!(candidates = candidates.len(), "extracted raw names");

    let names = clean_names(&candidates);
    if names.is_empty() {
        tracing::warn!(candidates = candidates.len(), "no names survived cleaning");
        return Ok(LookupOutcome::NoResults { reason: "No valid results found.".to_string() });
    }

    let path = output::output_path(&config.output_root, request);
    output::write_names(&path, &names)?;
    Ok(LookupOutcome::Saved { names, path })
}
