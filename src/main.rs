// ICS Year Planner
// Main entry point

mod cli;

use std::fs;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use ics_year_planner::models::event::Calendar;
use ics_year_planner::services::fetch::HttpFetcher;
use ics_year_planner::services::icalendar::ICalendarService;
use ics_year_planner::services::settings::SettingsService;
use ics_year_planner::GridRenderer;

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` wins over the `-v` count.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(cli: Cli) -> Result<()> {
    log::info!("Starting ICS Year Planner for {}", cli.year);

    let settings = SettingsService::load(cli.config.as_deref())?;
    let config = settings
        .into_renderer_config()
        .context("Invalid configuration")?;

    let fetcher = if cli.urls.is_empty() {
        None
    } else {
        Some(HttpFetcher::new()?)
    };

    let ics = ICalendarService::new();
    let mut calendars: Vec<Calendar> = Vec::new();

    if let Some(fetcher) = &fetcher {
        for url in &cli.urls {
            let content = fetcher.fetch_ics(url)?;
            calendars.push(ics.import_calendar(&HttpFetcher::redact_url(url), &content)?);
        }
    }
    for path in &cli.ics_files {
        calendars.push(ics.import_from_file(path)?);
    }

    let logo = load_logo(&cli, fetcher.as_ref(), HttpFetcher::new);

    let renderer = GridRenderer::new(config);
    let output = renderer
        .render(cli.year, &calendars, logo.as_deref())
        .context("Failed to render planner")?;

    fs::create_dir_all(&cli.output_dir)
        .with_context(|| format!("Failed to create output directory {:?}", cli.output_dir))?;
    let path = cli.output_dir.join(&output.file_name);
    fs::write(&path, &output.file_bytes)
        .with_context(|| format!("Failed to write {:?}", path))?;

    log::info!("Wrote {:?} ({} bytes)", path, output.file_bytes.len());
    println!("{}", path.display());
    Ok(())
}

/// The logo is optional: every failure, including building an HTTP client
/// for it, is logged and the render goes ahead without one.
fn load_logo(
    cli: &Cli,
    feed_fetcher: Option<&HttpFetcher>,
    connect: impl FnOnce() -> Result<HttpFetcher>,
) -> Option<Vec<u8>> {
    if let Some(path) = &cli.logo_file {
        return fs::read(path)
            .map_err(|err| log::warn!("Cannot read logo {:?}, rendering without it: {}", path, err))
            .ok();
    }

    let url = cli.logo_url.as_deref()?;
    match feed_fetcher {
        Some(fetcher) => fetcher.fetch_logo(url),
        None => match connect() {
            Ok(fetcher) => fetcher.fetch_logo(url),
            Err(err) => {
                log::warn!("Cannot fetch logo, rendering without it: {:#}", err);
                None
            }
        },
    }
}
