//! Frontpage main entry point
//!
//! This is the command-line interface for the Frontpage article scraper.

use clap::Parser;
use frontpage::config::{load_config, normalize_homepage_url, Config};
use frontpage::crawler::run_scrape;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Frontpage: a homepage-driven article scraper
///
/// Frontpage fetches a website homepage, picks out links that look like
/// articles, extracts their content, optionally summarizes each article
/// against a local model endpoint, and writes JSON and CSV artifacts.
#[derive(Parser, Debug)]
#[command(name = "frontpage")]
#[command(version)]
#[command(about = "Scrape articles linked from a website homepage", long_about = None)]
struct Cli {
    /// Homepage URL to scrape (scheme optional, https assumed)
    #[arg(value_name = "URL")]
    homepage: String,

    /// Output directory for articles and run artifacts
    #[arg(short, long, default_value = "output")]
    out: PathBuf,

    /// Maximum number of articles to scrape (overrides MAX_ARTICLES)
    #[arg(short, long)]
    limit: Option<u32>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate configuration and show what would run without scraping
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let homepage = match normalize_homepage_url(&cli.homepage) {
        Ok(url) => url,
        Err(e) => {
            tracing::error!("Invalid homepage URL: {}", e);
            return Err(e.into());
        }
    };

    let mut config = match load_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };
    if let Some(limit) = cli.limit {
        config.fetch.max_articles = limit;
    }

    if cli.dry_run {
        handle_dry_run(&homepage, &cli.out, &config);
        return Ok(());
    }

    tracing::info!("Scraping {} into {}", homepage, cli.out.display());
    match run_scrape(homepage, cli.out, config).await {
        Ok(report) => {
            println!(
                "Saved {} of {} articles ({} failures) in {:.1}s",
                report.articles_saved,
                report.links_fetched,
                report.failures,
                report.elapsed_seconds
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!("Scrape failed: {}", e);
            Err(e.into())
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("frontpage=info,warn"),
            1 => EnvFilter::new("frontpage=debug,info"),
            2 => EnvFilter::new("frontpage=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: shows the effective configuration
fn handle_dry_run(homepage: &url::Url, out: &std::path::Path, config: &Config) {
    println!("=== Frontpage Dry Run ===\n");

    println!("Target:");
    println!("  Homepage: {}", homepage);
    println!("  Output directory: {}", out.display());

    println!("\nFetch:");
    println!("  Concurrent requests: {}", config.fetch.concurrent_requests);
    println!("  Download delay: {}s", config.fetch.download_delay);
    println!("  Retries: {}", config.fetch.retry_times);
    println!("  Timeout: {}s", config.fetch.download_timeout);
    if config.fetch.max_articles == 0 {
        println!("  Max articles: unlimited");
    } else {
        println!("  Max articles: {}", config.fetch.max_articles);
    }

    println!("\nSummarization:");
    println!("  Enabled: {}", config.summary.enabled);
    if config.summary.enabled {
        println!("  Endpoint: {}", config.summary.endpoint);
        println!("  Model: {}", config.summary.model);
        println!(
            "  Length: {}-{} characters",
            config.summary.min_length, config.summary.max_length
        );
    }

    println!("\nUpload:");
    println!("  Enabled: {}", config.upload.enabled);
    if config.upload.enabled {
        println!(
            "  Bucket: {}",
            config.upload.bucket.as_deref().unwrap_or("(not set)")
        );
        println!("  Region: {}", config.upload.region);
        println!(
            "  Key prefix: {}",
            config.upload.key_prefix.as_deref().unwrap_or("(timestamped)")
        );
    }

    println!("\n✓ Configuration is valid");
}
