//! Booking Dashboard CLI
//!
//! Headless companion to the desktop app: prints what the dashboard would
//! show and checks model files before they are handed to the window.
//!
//! ## Usage
//!
//! ```bash
//! # Print the built-in dashboard
//! bookingdash show
//!
//! # Print a dashboard from a model file, greeting someone by name
//! bookingdash show --model bookings.json --user Ada
//!
//! # Check a model file
//! bookingdash validate bookings.json
//!
//! # Write the built-in model as a starting point for a model file
//! bookingdash export > bookings.json
//! ```

use std::path::{Path, PathBuf};

use anyhow::Result;
use bookingdash_core::chart::format_tick;
use bookingdash_core::config::{load_model, to_json};
use bookingdash_core::{
    compose, sample_model, ChartLayout, DashboardError, DashboardModel, LayoutOptions,
};
use clap::{Parser, Subcommand};

/// Booking Dashboard - stats and charts for daily bookings
#[derive(Parser)]
#[command(name = "bookingdash")]
#[command(version = "0.1.0")]
#[command(about = "Booking Dashboard - inspect, validate and export dashboard models")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the dashboard as text
    Show {
        /// Model file (default: built-in sample)
        #[arg(short, long)]
        model: Option<PathBuf>,

        /// Name shown in the welcome heading
        #[arg(short, long)]
        user: Option<String>,
    },

    /// Check a model file for configuration errors
    Validate {
        /// Model file to check
        path: PathBuf,
    },

    /// Print the built-in sample model as JSON
    Export,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    match cli.command {
        Commands::Show { model, user } => {
            let model = match model {
                Some(path) => read_model(&path)?,
                None => sample_model().clone(),
            };
            let options = LayoutOptions {
                user_name: user,
                ..LayoutOptions::default()
            };
            print_dashboard(&model, &options)?;
        }

        Commands::Validate { path } => {
            let model = read_model(&path)?;
            compose(&model, &LayoutOptions::default())
                .map_err(|e| describe_failure(e, &path))?;
            println!(
                "OK: {} stats, {} line labels, {} bar labels",
                model.stats.len(),
                model.line.labels.len(),
                model.bar.labels.len()
            );
        }

        Commands::Export => {
            println!("{}", to_json(sample_model())?);
        }
    }

    Ok(())
}

fn read_model(path: &Path) -> Result<DashboardModel> {
    load_model(path).map_err(|e| describe_failure(e, path))
}

/// Malformed models and unreadable files are worded differently.
fn describe_failure(err: DashboardError, path: &Path) -> anyhow::Error {
    let what = if err.is_configuration() {
        "malformed model in"
    } else {
        "cannot read model file"
    };
    anyhow::Error::new(err).context(format!("{} {}", what, path.display()))
}

fn print_dashboard(model: &DashboardModel, options: &LayoutOptions) -> Result<()> {
    let layout = compose(model, options)?;

    println!("{}", layout.heading);
    println!();
    println!("Stats:");
    for card in &layout.cards {
        println!("  [{}] {}: {}", card.icon, card.title, card.display);
    }

    for panel in &layout.charts {
        println!();
        match &panel.chart {
            ChartLayout::Line(geometry) => {
                println!("{} (line):", panel.title);
                for (dataset, line) in model.line.datasets.iter().zip(&geometry.lines) {
                    println!("  {}", line.label);
                    for (label, value) in model.line.labels.iter().zip(&dataset.data) {
                        println!("    {}: {}", label, format_tick(*value));
                    }
                }
            }
            ChartLayout::Bar(geometry) => {
                println!("{} (bar):", panel.title);
                for entry in &geometry.legend {
                    println!("  {}", entry.label);
                    for bar in geometry.bars.iter().filter(|b| b.dataset == entry.label) {
                        println!("    {}: {}", bar.category, format_tick(bar.value));
                    }
                }
            }
        }
    }

    Ok(())
}
