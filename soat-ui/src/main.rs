use std::path::PathBuf;

use clap::Parser;
use gpui::{App, Application};
use tracing::{debug, error};

use soat_ui::{
    components::WindowPreferences,
    config::{AppConfig, ConfigOverrides},
    gui, logging,
};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Desktop helper for drafting and comparing SOAT insurance quotes.
///
/// Settings come from `soat-quotes.toml` (or `--config`), with the flags
/// below taking precedence.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter: a bare level (`debug`) or an EnvFilter directive.
    #[arg(long)]
    log_level: Option<String>,

    /// Append log records to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Do not log to stdout.
    #[arg(long)]
    quiet: bool,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            log_level: self.log_level.clone(),
            log_file: self.log_file.clone(),
            quiet: self.quiet,
        }
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    logging::init_default_logging();

    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    config.apply_overrides(cli.overrides());
    logging::apply_config(&config)?;
    debug!(?config, "configuration loaded");

    let preferences = WindowPreferences::from(config.window);

    Application::new()
        .with_assets(gpui_component_assets::Assets)
        .run(move |cx: &mut App| {
            gui::setup_app(cx);
            if let Err(e) = gui::open_main_window(preferences, cx) {
                error!(error = %e, "failed to open main window");
                cx.quit();
            }
        });

    Ok(())
}
