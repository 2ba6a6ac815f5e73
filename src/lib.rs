pub mod config;
pub mod discover;
pub mod error;
pub mod filter;
pub mod http_client;
pub mod output;
pub mod pipeline;
pub mod utils;

pub use crate::discover::SearchRequest;
pub use crate::error::LookupError;
pub use crate::pipeline::{lookup, LookupOutcome};
