mod report;

use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use crate::report::Report;

const DEFAULT_URL: &str = "http://ordergroove.com/company";

/// Count the start tags of a web page and list the most frequent ones.
#[derive(Debug, Parser)]
#[command(name = "tagstats", version, about)]
struct Cli {
    /// Page to fetch
    #[arg(env = "TAGSTATS_URL", default_value = DEFAULT_URL)]
    url: String,

    /// How many of the most frequent tags to list
    #[arg(short = 'k', long = "top", env = "TAGSTATS_TOP", default_value_t = 5)]
    top: usize,

    /// Request timeout in seconds
    #[arg(long, env = "TAGSTATS_TIMEOUT_SECS", default_value_t = 10)]
    timeout_secs: u64,

    /// Largest response body to read; longer bodies are truncated
    #[arg(long, env = "TAGSTATS_MAX_BYTES", default_value_t = net::DEFAULT_MAX_BYTES)]
    max_bytes: usize,

    /// Log more on stderr (-v info, -vv debug, -vvv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn fetch_config(&self) -> net::FetchConfig {
        net::FetchConfig {
            timeout: Duration::from_secs(self.timeout_secs),
            max_bytes: self.max_bytes,
            ..net::FetchConfig::default()
        }
    }
}

fn default_log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(verbose)));
    // Also installs the `log` bridge, so records from the library crates show up here.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<Report> {
    let page = net::fetch_text(&cli.url, &cli.fetch_config()).context("could not fetch page")?;
    if !page.is_html() {
        log::warn!(
            target: "tagstats",
            "{} has content type {:?}; counting tags anyway",
            page.url,
            page.content_type
        );
    }
    let summary = stats::summarize(&page.body, cli.top);
    Ok(Report::new(cli.top, summary))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    log::debug!(target: "tagstats", "{cli:?}");

    match run(&cli) {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("tagstats: {err:#}");
            ExitCode::FAILURE
        }
    }
}
