use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use std::collections::HashSet;

static WILDCARD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\.").unwrap());
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,4}").unwrap());

/// Remove every `*.` in the string, not only a leading one.
pub fn strip_wildcards(s: &str) -> Cow<'_, str> {
    WILDCARD_RE.replace_all(s, "")
}

/// Remove email-address-shaped substrings, keeping the text around them.
pub fn strip_emails(s: &str) -> Cow<'_, str> {
    EMAIL_RE.replace_all(s, "")
}

/// Clean a single candidate. `None` when nothing is left.
pub fn normalize_name(raw: &str) -> Option<String> {
    if raw.is_empty() {
        return None;
    }
    let no_wild = strip_wildcards(raw);
    let no_mail = strip_emails(&no_wild);
    let name = no_mail.trim().to_lowercase();
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Normalize, deduplicate and byte-wise sort raw candidate names.
pub fn clean_names<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for item in raw {
        if let Some(name) = normalize_name(item.as_ref()) {
            if seen.insert(name.clone()) {
                out.push(name);
            }
        }
    }
    out.sort();
    out
}
