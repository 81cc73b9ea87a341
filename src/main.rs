use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use chrono::Utc;
use clap::{Parser, ValueEnum};
use colored::Colorize;
use console::Emoji;
use indicatif::{ProgressBar, ProgressStyle};
use log::LevelFilter;
use url::Url;

use podgrid::{
    App, DisplayState, NoopReporter, PODCAST_API_URL, ProgressEvent, ProgressReporter,
    ReqwestClient, SharedProgressReporter, render_html, render_terminal, write_html,
};

// Emoji with fallback for terminals without Unicode support
static SEARCH: Emoji<'_, '_> = Emoji("🔍 ", "[~] ");
static FOLDER: Emoji<'_, '_> = Emoji("📁 ", "");

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Coloured cards in the terminal
    Terminal,
    /// A standalone HTML page
    Html,
}

/// Browse the public podcast catalogue as a grid of cards
#[derive(Parser, Debug)]
#[command(name = "podgrid")]
#[command(about = "Browse the public podcast catalogue as a grid of cards")]
#[command(version)]
struct Args {
    /// Catalogue endpoint returning a JSON array of podcasts
    #[arg(long, default_value = PODCAST_API_URL)]
    endpoint: Url,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Terminal)]
    format: OutputFormat,

    /// Write HTML output to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Quiet mode - suppress the loading spinner
    #[arg(short, long)]
    quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Progress reporter driving an indicatif spinner while the catalogue loads
struct SpinnerReporter {
    spinner: ProgressBar,
}

impl SpinnerReporter {
    fn new() -> Self {
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.green} {wide_msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(style);
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));

        Self { spinner }
    }
}

impl ProgressReporter for SpinnerReporter {
    fn report(&self, event: ProgressEvent) {
        match event {
            ProgressEvent::FetchingPodcasts { url } => {
                self.spinner
                    .set_message(format!("{SEARCH}Loading podcasts from {}", url.cyan()));
            }
            ProgressEvent::PodcastsLoaded { count } => {
                self.spinner
                    .set_message(format!("{} podcasts loaded", count.to_string().green()));
            }
            ProgressEvent::LoadFailed { .. } => {
                self.spinner.set_message("Loading failed".red().to_string());
            }
            ProgressEvent::LoadSettled => self.spinner.finish_and_clear(),
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    if args.output.is_some() && args.format != OutputFormat::Html {
        bail!("--output is only supported with --format html");
    }

    let reporter: SharedProgressReporter = if args.quiet {
        NoopReporter::shared()
    } else {
        Arc::new(SpinnerReporter::new())
    };

    let mut app = App::new(ReqwestClient::new(), args.endpoint.as_str(), reporter);
    app.load().await;

    let screen = app.screen(Utc::now());

    match (args.format, &args.output) {
        (OutputFormat::Html, Some(path)) => {
            write_html(&screen, path).context("Failed to write HTML page")?;
            if !args.quiet {
                println!("{FOLDER}Output: {}", path.display().to_string().cyan());
            }
        }
        (OutputFormat::Html, None) => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(render_html(&screen).as_bytes())
                .context("Failed to write HTML to stdout")?;
        }
        (OutputFormat::Terminal, _) => print!("{}", render_terminal(&screen)),
    }

    if matches!(app.state(), DisplayState::Error(_)) {
        std::process::exit(1);
    }

    Ok(())
}
