use std::fs;
use std::path::{Path, PathBuf};

use crate::discover::crtsh::SearchRequest;
use crate::error::{LookupError, Result};
use crate::utils::{ensure_dir, sanitize_org};

/// Where results for `request` end up, relative to `root`.
pub fn output_path(root: &Path, request: &SearchRequest) -> PathBuf {
    match request {
        SearchRequest::Domain(domain) => root.join("output").join(format!("domain.{}.txt", domain)),
        SearchRequest::Organization(org) => root.join(format!("org.{}.txt", sanitize_org(org))),
    }
}

/// Write names newline-joined, replacing any previous file. Parent directory is created if missing.
pub fn write_names(path: &Path, names: &[String]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent).map_err(|source| LookupError::Filesystem {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, names.join("\n")).map_err(|source| LookupError::Filesystem {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), count = names.len(), "wrote results");
    Ok(())
}
