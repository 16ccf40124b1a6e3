//! Application entry point for the organic network animation viewer.
//!
//! This binary loads settings, seeds the animation core and delegates all
//! per-frame work to [`Viewer`] from the `viewer` module.

mod settings;
mod viewer;

use anyhow::Result;
use clap::Parser;
use organic_core::{OrganicNetwork, RandomSource};
use settings::ViewerConfig;
use std::path::PathBuf;
use viewer::Viewer;

#[derive(Parser)]
#[command(name = "organic_network_anim")]
#[command(about = "Animated procedural network of drifting, scrolling nodes")]
#[command(version)]
struct Cli {
    /// Config file path
    #[arg(long, default_value = "organic.toml")]
    config: PathBuf,

    /// Seed for layout and motion
    #[arg(short = 'S', long)]
    seed: Option<u64>,

    /// Window width
    #[arg(long)]
    width: Option<f32>,

    /// Window height
    #[arg(long)]
    height: Option<f32>,
}

/// Starts the native eframe application.
///
/// ### Returns
/// - `Ok(())` if the window closes normally.
/// - `Err` if the config is invalid or eframe fails to create the window.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("organic_core=info,organic_network_anim=info")
            }),
        )
        .init();

    let cli = Cli::parse();
    let settings = ViewerConfig::load(&cli.config)?;

    let seed = cli
        .seed
        .or(settings.window.seed)
        .unwrap_or_else(rand::random);
    let width = cli.width.unwrap_or(settings.window.width);
    let height = cli.height.unwrap_or(settings.window.height);
    tracing::info!(seed, width, height, "starting animation");

    let network = OrganicNetwork::new(
        settings.network,
        settings.styles.clone(),
        RandomSource::seeded(seed),
    )?;
    let viewer = Viewer::new(network, settings.window.padding);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(settings.window.title.clone())
            .with_inner_size([width, height]),
        ..Default::default()
    };

    eframe::run_native(
        &settings.window.title,
        options,
        Box::new(move |_cc| Ok(Box::new(viewer))),
    )
    .map_err(|e| anyhow::anyhow!("eframe failed: {e}"))
}
