// SPDX-License-Identifier: MPL-2.0
//! Writes `sitemap.xml` for the portfolio site.
//!
//! ```text
//! generate-sitemap [--site-url URL] [--output PATH] [--pages-dir DIR] [--ext EXT]...
//! ```

use iced_portfolio::config::{
    DEFAULT_PAGES_DIR, DEFAULT_PAGE_EXTENSIONS, DEFAULT_SITEMAP_OUTPUT, DEFAULT_SITE_URL,
};
use iced_portfolio::sitemap;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug)]
struct Args {
    site_url: String,
    output: PathBuf,
    pages_dir: PathBuf,
    extensions: Vec<String>,
}

fn parse_args(mut args: pico_args::Arguments) -> Result<Args, pico_args::Error> {
    let site_url: String = args
        .opt_value_from_str("--site-url")?
        .unwrap_or_else(|| DEFAULT_SITE_URL.to_string());
    let output = args
        .opt_value_from_str("--output")?
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SITEMAP_OUTPUT));
    let pages_dir = args
        .opt_value_from_str("--pages-dir")?
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PAGES_DIR));
    let mut extensions: Vec<String> = args.values_from_str("--ext")?;
    if extensions.is_empty() {
        extensions = DEFAULT_PAGE_EXTENSIONS.iter().map(|s| s.to_string()).collect();
    }

    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("ignoring unexpected arguments: {:?}", rest);
    }

    Ok(Args {
        site_url: site_url.trim_end_matches('/').to_string(),
        output,
        pages_dir,
        extensions,
    })
}

fn run(args: &Args) -> iced_portfolio::error::Result<usize> {
    log::info!("Generating sitemap...");

    let mut pages = sitemap::default_pages();
    sitemap::discover_pages(&args.pages_dir, &args.extensions, &mut pages)?;

    log::info!("Pages to include:");
    for page in &pages {
        log::info!("  {} (priority: {})", page.url(&args.site_url), page.priority);
    }

    let today = chrono::Utc::now().date_naive();
    let xml = sitemap::render(&args.site_url, &pages, today)?;
    sitemap::write_sitemap(&args.output, &xml)?;

    log::info!("Sitemap written to {}", args.output.display());
    log::info!("Total URLs: {}", pages.len());
    Ok(pages.len())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match parse_args(pico_args::Arguments::from_env()) {
        Ok(args) => args,
        Err(err) => {
            log::error!("invalid arguments: {err}");
            return ExitCode::from(2);
        }
    };

    match run(&args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("sitemap generation failed: {err}");
            ExitCode::FAILURE
        }
    }
}
