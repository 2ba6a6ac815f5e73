use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{LookupError, Result};

/// What to look up in the CT search service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchRequest {
    Domain(String),
    Organization(String),
}

impl SearchRequest {
    pub fn value(&self) -> &str {
        match self {
            SearchRequest::Domain(v) | SearchRequest::Organization(v) => v,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            SearchRequest::Domain(_) => "domain",
            SearchRequest::Organization(_) => "organization",
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.value().is_empty() {
            let label = match self {
                SearchRequest::Domain(_) => "Domain name",
                SearchRequest::Organization(_) => "Organization name",
            };
            return Err(LookupError::Input(format!("{} is required.", label)));
        }
        Ok(())
    }

    /// Full search URL against `base`, always asking for JSON output.
    pub fn build_url(&self, base: &url::Url) -> String {
        let query = match self {
            // `%.` is the service's wildcard-subdomain syntax; the `%` itself must be escaped
            SearchRequest::Domain(domain) => {
                let q = format!("%.{}", domain);
                format!("q={}", urlencoding::encode(&q))
            }
            SearchRequest::Organization(org) => format!("O={}", urlencoding::encode(org)),
        };
        let mut url = base.clone();
        let full = match base.query().filter(|q| !q.is_empty()) {
            Some(existing) => format!("{}&{}&output=json", existing.trim_end_matches('&'), query),
            None => format!("{}&output=json", query),
        };
        url.set_query(Some(&full));
        url.set_fragment(None);
        url.to_string()
    }
}

/// `name_value` as it appears on the wire. Normally a newline-joined string,
/// but other JSON shapes have been seen in the wild.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum NameValue {
    Text(String),
    Other(Value),
}

/// One entry of the search response. Both fields are independently optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CertRecord {
    #[serde(default)]
    pub common_name: Option<Value>,
    #[serde(default)]
    pub name_value: Option<NameValue>,
}

impl CertRecord {
    pub fn common_name(&self) -> Option<&str> {
        self.common_name.as_ref().and_then(|v| v.as_str())
    }

    /// Push every candidate name carried by this record onto `out`.
    pub fn collect_names(&self, include_name_value: bool, out: &mut Vec<String>) {
        if let Some(cn) = self.common_name() {
            out.push(cn.to_string());
        }
        if !include_name_value {
            return;
        }
        match &self.name_value {
            Some(NameValue::Text(text)) => {
                // real newlines, plus the escaped `\n` form some responses carry
                for part in text.split('\n').flat_map(|line| line.split("\\n")) {
                    if !part.is_empty() {
                        out.push(part.to_string());
                    }
                }
            }
            Some(NameValue::Other(Value::Null)) | None => {}
            Some(NameValue::Other(other)) => out.push(other.to_string()),
        }
    }
}

/// GET `url` and return the body. An empty string means the service had no matches.
pub async fn fetch_body(client: &Client, url: &str) -> Result<String> {
    tracing::debug!(url = %url, "querying CT search");
    let resp = client.get(url).send().await.map_err(|source| LookupError::Fetch {
        url: url.to_string(),
        source,
    })?;
    let status = resp.status();
    if !status.is_success() {
        return Err(LookupError::Status { url: url.to_string(), status });
    }
    let txt = resp.text().await.map_err(|source| LookupError::Fetch {
        url: url.to_string(),
        source,
    })?;
    tracing::debug!(bytes = txt.len(), status = %status, "received CT search response");
    Ok(txt)
}

/// Parse a response body into its records.
pub fn parse_records(body: &str) -> Result<Vec<CertRecord>> {
    // crt.sh sometimes returns non-JSON or truncated output when overloaded
    Ok(serde_json::from_str(body)?)
}

/// Raw candidate names from a response body, duplicates and all.
/// Organization searches only look at `common_name`.
pub fn extract_candidates(body: &str, request: &SearchRequest) -> Result<Vec<String>> {
    let include_name_value = matches!(request, SearchRequest::Domain(_));
    let mut out = Vec::new();
    for record in parse_records(body)? {
        record.collect_names(include_name_value, &mut out);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crtsh() -> url::Url {
        url::Url::parse("https://crt.sh/").unwrap()
    }

    #[test]
    fn domain_url_uses_escaped_wildcard() {
        let req = SearchRequest::Domain("example.com".into());
        assert_eq!(req.build_url(&crtsh()), "https://crt.sh/?q=%25.example.com&output=json");
    }

    #[test]
    fn org_url_encodes_spaces_and_punctuation() {
        let req = SearchRequest::Organization("Example, Inc.".into());
        assert_eq!(req.build_url(&crtsh()), "https://crt.sh/?O=Example%2C%20Inc.&output=json");
    }

    #[test]
    fn domain_with_unsafe_chars_is_encoded() {
        let req = SearchRequest::Domain("a b&c".into());
        assert_eq!(req.build_url(&crtsh()), "https://crt.sh/?q=%25.a%20b%26c&output=json");
    }

    #[test]
    fn base_with_path() {
        let base = url::Url::parse("http://127.0.0.1:8080/search").unwrap();
        let req = SearchRequest::Domain("x.org".into());
        assert_eq!(req.build_url(&base), "http://127.0.0.1:8080/search?q=%25.x.org&output=json");
    }

    #[test]
    fn base_fragment_is_dropped() {
        let base = url::Url::parse("https://crt.sh/#top").unwrap();
        let req = SearchRequest::Domain("x.org".into());
        assert_eq!(req.build_url(&base), "https://crt.sh/?q=%25.x.org&output=json");
    }

    #[test]
    fn base_query_is_kept() {
        let base = url::Url::parse("https://crt.sh/?exclude=expired").unwrap();
        let req = SearchRequest::Organization("Acme".into());
        assert_eq!(req.build_url(&base), "https://crt.sh/?exclude=expired&O=Acme&output=json");
    }

    #[test]
    fn empty_value_is_input_error() {
        let err = SearchRequest::Domain(String::new()).validate().unwrap_err();
        assert_eq!(err.to_string(), "Domain name is required.");
        assert!(SearchRequest::Organization("Acme".into()).validate().is_ok());
    }

    #[test]
    fn extracts_common_name_and_split_name_value() {
        let body = r#"[{"common_name":"WWW.EXAMPLE.COM","name_value":"a.example.com\nb.Example.com"}]"#;
        let req = SearchRequest::Domain("example.com".into());
        let names = extract_candidates(body, &req).unwrap();
        assert_eq!(names, vec!["WWW.EXAMPLE.COM", "a.example.com", "b.Example.com"]);
    }

    #[test]
    fn escaped_newline_sequence_also_splits() {
        let body = r#"[{"name_value":"a.example.com\\nb.example.com"}]"#;
        let req = SearchRequest::Domain("example.com".into());
        assert_eq!(extract_candidates(body, &req).unwrap(), vec!["a.example.com", "b.example.com"]);
    }

    #[test]
    fn odd_shapes_do_not_fail() {
        let body = r#"[{"common_name":42,"name_value":["x.example.com"]},{"name_value":null},{}]"#;
        let req = SearchRequest::Domain("example.com".into());
        assert_eq!(extract_candidates(body, &req).unwrap(), vec![r#"["x.example.com"]"#]);
    }

    #[test]
    fn org_search_ignores_name_value() {
        let body = r#"[{"common_name":"foo.example.com","name_value":"bar.example.com"}]"#;
        let req = SearchRequest::Organization("Example".into());
        assert_eq!(extract_candidates(body, &req).unwrap(), vec!["foo.example.com"]);
    }

    #[test]
    fn malformed_body_is_parse_error() {
        let req = SearchRequest::Domain("example.com".into());
        assert!(matches!(extract_candidates("<html>busy</html>", &req), Err(LookupError::Parse(_))));
        assert!(matches!(extract_candidates(r#"[{"common_name":"a"#, &req), Err(LookupError::Parse(_))));
        assert!(matches!(extract_candidates(r#"{"common_name":"a"}"#, &req), Err(LookupError::Parse(_))));
    }
}
