//! tagcheck CLI
//!
//! Reads a URL list from CSV, scans every page concurrently for the marker
//! text, and writes summary and detail CSV reports.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

use tagcheck::config::ScanConfig;
use tagcheck::engine::{ConsoleProgress, run_scans};
use tagcheck::scan::{ChromiumRenderer, PageScanner};
use tagcheck::utils::{DEFAULT_CONCURRENCY, DEFAULT_PAGE_LOAD_TIMEOUT_SECS};
use tagcheck::{input, output};

#[derive(Parser, Debug)]
#[command(name = "tagcheck", version, about = "Audit web pages for a marker string")]
struct Args {
    /// Marker text to search for (falls back to the config file, then a prompt)
    #[arg(short, long)]
    marker: Option<String>,

    /// CSV file with a 'url' header column
    #[arg(long, default_value = "urls.csv")]
    urls: PathBuf,

    /// Output path for the summary table
    #[arg(long, default_value = "tag_check_results.csv")]
    summary_out: PathBuf,

    /// Output path for the detail table
    #[arg(long, default_value = "tag_check_details.csv")]
    details_out: PathBuf,

    /// Number of pages scanned in parallel
    #[arg(long, default_value_t = DEFAULT_CONCURRENCY)]
    concurrency: usize,

    /// Page load timeout in seconds
    #[arg(long, default_value_t = DEFAULT_PAGE_LOAD_TIMEOUT_SECS)]
    timeout: u64,

    /// Config file used to remember the marker between runs
    #[arg(long, default_value = "config.json")]
    config: PathBuf,

    /// Run the browser with a visible window
    #[arg(long)]
    headed: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .filter_module("chromiumoxide::handler", log::LevelFilter::Off)
        .filter_module("chromiumoxide::conn", log::LevelFilter::Off)
        .init();

    let args = Args::parse();

    let marker = input::resolve_marker(args.marker.as_deref(), &args.config)?;
    let urls = input::load_url_list(&args.urls)?;
    if urls.is_empty() {
        println!("no URLs found in {}", args.urls.display());
        return Ok(());
    }

    let config = ScanConfig::builder()
        .marker(&marker)
        .concurrency(args.concurrency)
        .page_load_timeout_secs(args.timeout)
        .headless(!args.headed)
        .build()?;

    println!("searching {} URLs for marker '{marker}'", urls.len());

    let renderer = ChromiumRenderer::new(&config);
    let concurrency = config.concurrency();
    let scanner = Arc::new(PageScanner::new(renderer, config)?);

    let outcome = run_scans(scanner, urls, concurrency, &ConsoleProgress).await;

    output::write_summary_csv(&args.summary_out, &outcome.summary)?;
    output::write_detail_csv(&args.details_out, &outcome.details)?;

    println!(
        "reports written to {} and {}",
        args.summary_out.display(),
        args.details_out.display()
    );

    Ok(())
}
