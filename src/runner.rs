use std::path::PathBuf;

use crate::cli::{self, Cli};
use ctlookup::config::Config;
use ctlookup::{LookupOutcome, SearchRequest};

fn print_ascii_logo() {
    println!(r#"
        _   _             _
   ___| |_| | ___   ___ | | ___   _ _ __
  / __| __| |/ _ \ / _ \| |/ / | | | '_ \
 | (__| |_| | (_) | (_) |   <| |_| | |_) |
  \___|\__|_|\___/ \___/|_|\_\\__,_| .__/
                                   |_|
    "#);
}

fn init_logging(cli: &Cli) {
    use tracing_subscriber::EnvFilter;
    let crate_level = if cli.debug { "debug" } else if cli.verbose { "info" } else { "warn" };
    let filter_str = format!("ctlookup={crate},reqwest=info,hyper=info", crate = crate_level);
    let env_filter = EnvFilter::try_new(&filter_str).unwrap_or_else(|_| EnvFilter::new(crate_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .init();
}

/// Domain wins when both flags are given. Empty values count as not given.
fn request_from_cli(cli: &Cli) -> Option<SearchRequest> {
    let domain = cli.domain.as_deref().filter(|d| !d.is_empty());
    let org = cli.org.as_deref().filter(|o| !o.is_empty());
    match (domain, org) {
        (Some(domain), _) => Some(SearchRequest::Domain(domain.to_string())),
        (None, Some(org)) => Some(SearchRequest::Organization(org.to_string())),
        (None, None) => None,
    }
}

pub async fn run_from_cli(cli: Cli) -> anyhow::Result<()> {
    init_logging(&cli);
    print_ascii_logo();

    let Some(request) = request_from_cli(&cli) else {
        cli::print_help()?;
        return Ok(());
    };

    let config = Config {
        base_url: cli.endpoint.clone(),
        timeout_secs: cli.timeout,
        output_root: PathBuf::from("."),
        ..Config::default()
    };
    let client = ctlookup::http_client::create_client(&config)?;

    match ctlookup::lookup(&client, &config, &request).await {
        Ok(LookupOutcome::NoResults { reason }) => println!("{}", reason),
        Ok(LookupOutcome::Saved { names, path }) => {
            println!("\n{}\n", names.join("\n"));
            println!("\x1b[32m[+]\x1b[0m Total domains found: \x1b[31m{}\x1b[0m", names.len());
            println!("\x1b[32m[+]\x1b[0m Output saved in {}", path.display());
        }
        Err(e) => {
            tracing::debug!(error = ?e, "lookup failed");
            eprintln!("[-] Error searching {}: {}", request.kind(), e);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn domain_takes_precedence() {
        let cli = Cli::try_parse_from(["ctlookup", "-o", "Acme", "-d", "acme.com"]).unwrap();
        assert_eq!(request_from_cli(&cli), Some(SearchRequest::Domain("acme.com".into())));
    }

    #[test]
    fn org_only() {
        let cli = Cli::try_parse_from(["ctlookup", "-o", "Acme"]).unwrap();
        assert_eq!(request_from_cli(&cli), Some(SearchRequest::Organization("Acme".into())));
    }

    #[test]
    fn empty_domain_falls_back_to_org() {
        let cli = Cli::try_parse_from(["ctlookup", "-d", "", "-o", "Acme"]).unwrap();
        assert_eq!(request_from_cli(&cli), Some(SearchRequest::Organization("Acme".into())));
    }

    #[test]
    fn empty_values_mean_help() {
        let cli = Cli::try_parse_from(["ctlookup", "-d", ""]).unwrap();
        assert_eq!(request_from_cli(&cli), None);
        let cli = Cli::try_parse_from(["ctlookup", "-d", "", "-o", ""]).unwrap();
        assert_eq!(request_from_cli(&cli), None);
    }

    #[test]
    fn nothing_requested() {
        let cli = Cli::try_parse_from(["ctlookup"]).unwrap();
        assert_eq!(request_from_cli(&cli), None);
    }
}
