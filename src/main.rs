#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;
mod viewport;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use folio_core::contact::{SubmitPolicy, DEFAULT_RESET_DELAY};
use folio_core::theme::{resolve_initial_theme, MemoryThemeStore, RedbThemeStore, Theme, ThemeStore};
use tracing_subscriber::EnvFilter;

use crate::context::AppConfig;

/// Folio - personal portfolio
#[derive(Parser, Debug)]
#[command(name = "folio-desktop")]
#[command(about = "Folio - a single-page personal portfolio")]
struct Args {
    /// Directory holding the preferences database
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Start with this theme instead of the saved one (light | dark)
    #[arg(long, value_parser = parse_theme)]
    theme: Option<Theme>,

    /// Delay before the contact form resets after sending
    #[arg(long, default_value_t = DEFAULT_RESET_DELAY.as_millis() as u64)]
    reset_delay_ms: u64,

    /// Validate every required field on submit, even untouched ones
    #[arg(long)]
    strict_validation: bool,

    /// Keep the theme in memory only
    #[arg(long)]
    ephemeral: bool,
}

fn parse_theme(s: &str) -> Result<Theme, String> {
    s.parse::<Theme>().map_err(|e| e.to_string())
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("folio")
}

fn open_theme_store(data_dir: &Path, ephemeral: bool) -> Arc<dyn ThemeStore> {
    if ephemeral {
        return Arc::new(MemoryThemeStore::new());
    }
    match RedbThemeStore::open(data_dir) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            tracing::warn!("Failed to open theme store in {:?}: {}", data_dir, e);
            Arc::new(MemoryThemeStore::new())
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);
    let theme_store = open_theme_store(&data_dir, args.ephemeral);
    let initial_theme = resolve_initial_theme(args.theme, theme_store.as_ref());

    let config = AppConfig {
        data_dir,
        initial_theme,
        reset_delay: Duration::from_millis(args.reset_delay_ms),
        submit_policy: if args.strict_validation {
            SubmitPolicy::RequireAll
        } else {
            SubmitPolicy::TouchedOnly
        },
        theme_store,
    };

    tracing::info!(
        "Starting with data dir {:?}, theme {}, reset delay {:?}, policy {:?}",
        config.data_dir,
        config.initial_theme,
        config.reset_delay,
        config.submit_policy
    );

    let window = Config::new()
        .with_window(
            WindowBuilder::new()
                .with_title(folio_core::PROFILE.name)
                .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 900.0))
                .with_resizable(true),
        )
        .with_background_color(theme::window_background(initial_theme));

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .with_context(config)
        .launch(app::App);

    Ok(())
}
