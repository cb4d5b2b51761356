//! Upwork Talent Finder
//!
//! Interactive CLI that looks up freelancers through the Scrape.do proxy
//! and falls back to a browsable Upwork search URL.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use finder::config::DEFAULT_ENDPOINT;
use finder::session::BANNER;
use finder::{
    run_session, ApiKeyStatus, Console, Finder, FinderConfig, SessionOptions, StdConsole,
    SystemBrowser,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "talent-finder")]
#[command(about = "Find Upwork freelancers through the Scrape.do API")]
#[command(version)]
struct Cli {
    /// Scrape.do API token
    #[arg(long, env = "SCRAPE_DO_TOKEN", hide_env_values = true)]
    api_key: Option<String>,

    /// Scraping proxy endpoint
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    timeout_secs: u64,

    /// Do not ask the proxy to render JavaScript
    #[arg(long)]
    no_render: bool,

    /// Directory for search_results_*.json files
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Never offer to open fallback URLs in a browser
    #[arg(long)]
    no_browser: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl From<Cli> for FinderConfig {
    fn from(cli: Cli) -> Self {
        FinderConfig {
            api_key: cli.api_key,
            endpoint: cli.endpoint,
            timeout_secs: cli.timeout_secs,
            render: !cli.no_render,
            output_dir: cli.output_dir,
            open_browser: !cli.no_browser,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "finder=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = FinderConfig::from(cli);
    config.validate()?;

    let mut console = StdConsole;
    console.print(BANNER)?;

    match config.api_key_status() {
        ApiKeyStatus::Configured(_) => {}
        ApiKeyStatus::Placeholder => {
            console.print("\n⚠️ IMPORTANT: the API key is still the shipped placeholder.")?;
            console.print("Pass your Scrape.do key with --api-key or SCRAPE_DO_TOKEN to use API features.")?;
            console.print("Continuing with Upwork URL generation only...")?;
        }
        ApiKeyStatus::Missing => {
            console.print("\n⚠️ IMPORTANT: no Scrape.do API key configured.")?;
            console.print("Pass one with --api-key or SCRAPE_DO_TOKEN to use API features.")?;
            console.print("Continuing with Upwork URL generation only...")?;
        }
    }

    let mut finder = Finder::from_config(&config).context("failed to set up the API client")?;
    let options = SessionOptions {
        output_dir: config.output_dir.clone(),
        open_browser: config.open_browser,
    };

    let searches = run_session(&mut finder, &mut console, &SystemBrowser, &options)?;
    console.print(&format!("\n✨ Finished after {} search(es).", searches))?;
    Ok(())
}
