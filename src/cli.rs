use clap::{CommandFactory, Parser};

use ctlookup::config::DEFAULT_ENDPOINT;

#[derive(clap::Parser, Debug)]
#[command(
    author,
    version,
    about = "Search crt.sh certificate database",
    long_about = "Search crt.sh certificate database.\n\n\
Exit status is 0 when help is shown, when a search completes (including searches with no results) \
and when a search fails with a reported error (bad input, network, HTTP status, unparsable response, \
unwritable output). A non-zero status means a fatal error before the search could run, or invalid \
command-line usage."
)]
pub struct Cli {
    /// Search Domain Name (e.g., hackerone.com)
    #[arg(short = 'd', long)]
    pub domain: Option<String>,

    /// Search Organization Name (e.g., "Sony Network Communications Inc.")
    #[arg(short = 'o', long)]
    pub org: Option<String>,

    /// Certificate-transparency search endpoint
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Request timeout in seconds (default: 30)
    #[arg(long, default_value_t = 30_u64)]
    pub timeout: u64,

    /// Enable detailed debug logging
    #[arg(long, default_value_t = false)]
    pub debug: bool,

    /// Enable verbose logging
    #[arg(long, default_value_t = false)]
    pub verbose: bool,
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}

pub fn print_help() -> std::io::Result<()> {
    Cli::command().print_help()
}
