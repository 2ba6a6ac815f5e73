use reqwest::{Client, ClientBuilder};
use std::time::Duration;

use crate::config::Config;

/// Build the client used for the single CT search request.
pub fn create_client(config: &Config) -> reqwest::Result<Client> {
    ClientBuilder::new()
        // Timeouts
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(10))

        // Compression
        .gzip(true)
        .brotli(true)

        .use_rustls_tls()

        // Redirects
        .redirect(reqwest::redirect::Policy::limited(5))

        .user_agent(config.user_agent.as_str())
        .build()
}
