#![allow(non_snake_case)]

mod app;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use bookingdash_core::config::load_model;
use bookingdash_core::{compose, sample_model, DashboardError, DashboardLayout, LayoutOptions};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

use crate::context::DashboardSettings;

/// Global dashboard settings, set once from the command line
static SETTINGS: OnceLock<DashboardSettings> = OnceLock::new();

/// Settings composed at startup, if startup got that far.
pub fn get_settings() -> Option<DashboardSettings> {
    SETTINGS.get().cloned()
}

/// Booking Dashboard - welcome screen with stats and charts
#[derive(Parser, Debug)]
#[command(name = "bookingdash-desktop")]
#[command(about = "Booking Dashboard - welcome screen with booking stats and charts")]
struct Args {
    /// Dashboard model file (JSON); defaults to the built-in sample
    #[arg(short, long)]
    model: Option<PathBuf>,

    /// Name shown in the welcome heading
    #[arg(short, long)]
    user: Option<String>,

    /// Show final numbers instead of counting up
    #[arg(long)]
    no_animate: bool,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    // A malformed model stops here, before any window opens
    let layout = match build_layout(&args) {
        Ok(layout) => layout,
        Err(e) => {
            let malformed = e
                .downcast_ref::<DashboardError>()
                .is_some_and(DashboardError::is_configuration);
            if malformed {
                tracing::error!("Dashboard model is malformed: {:#}", e);
            } else {
                tracing::error!("Cannot load dashboard model: {:#}", e);
            }
            return ExitCode::FAILURE;
        }
    };

    let _ = SETTINGS.set(DashboardSettings {
        layout,
        animate: !args.no_animate,
    });

    tracing::info!(
        model = ?args.model,
        animate = !args.no_animate,
        "Starting booking dashboard"
    );

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Booking Dashboard")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    ExitCode::SUCCESS
}

fn build_layout(args: &Args) -> Result<DashboardLayout> {
    let options = LayoutOptions {
        user_name: args.user.clone(),
        ..LayoutOptions::default()
    };
    let layout = match &args.model {
        Some(path) => {
            let model = load_model(path)
                .with_context(|| format!("loading model from {}", path.display()))?;
            compose(&model, &options)?
        }
        None => compose(sample_model(), &options)?,
    };
    Ok(layout)
}
