pub mod crtsh;

pub use crtsh::{CertRecord, NameValue, SearchRequest};
