use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;

static NON_ALNUM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z0-9]").unwrap());

pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Make an organization name safe for use in a file name.
pub fn sanitize_org(org: &str) -> String {
    NON_ALNUM_RE.replace_all(org, "_").into_owned()
}
