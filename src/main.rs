#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use anyhow::Context as _;
use clap::Parser;
use cyclesight_core::Catalog;
use dioxus::desktop::{Config, WindowBuilder};

/// Global card catalog, set from command line before launch
static CATALOG: OnceLock<Arc<Catalog>> = OnceLock::new();

/// Get the active catalog (custom file or built-in)
pub fn catalog() -> Arc<Catalog> {
    CATALOG
        .get()
        .cloned()
        .unwrap_or_else(|| Arc::new(Catalog::standard()))
}

/// Cyclesight - card cycle tracker
#[derive(Parser, Debug)]
#[command(name = "cyclesight-desktop")]
#[command(about = "Cyclesight - deck cycle visualizer")]
struct Args {
    /// Load a custom card catalog from a JSON file (an array of cards)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Launch with a smaller window
    #[arg(long)]
    compact: bool,
}

fn load_catalog(args: &Args) -> anyhow::Result<Catalog> {
    match &args.catalog {
        Some(path) => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("opening catalog file {}", path.display()))?;
            Catalog::from_json_reader(file)
                .with_context(|| format!("parsing catalog file {}", path.display()))
        }
        None => Ok(Catalog::standard()),
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let catalog = match load_catalog(&args) {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("failed to load catalog: {:#}", e);
            std::process::exit(1);
        }
    };
    tracing::info!("catalog ready with {} cards", catalog.len());
    let _ = CATALOG.set(Arc::new(catalog));

    let (width, height) = if args.compact {
        (960.0, 640.0)
    } else {
        (1280.0, 860.0)
    };

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Cyclesight")
            .with_inner_size(dioxus::desktop::LogicalSize::new(width, height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
