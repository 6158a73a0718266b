mod app;
mod clipboard;
mod config;
mod constants;
mod input;
#[cfg(feature = "notifications")]
mod notification;
mod prefs;
mod rewrite;
mod tone;
mod ui;

use anyhow::Result;
use std::env;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::App;
use crate::config::Config;

fn setup_logging() {
    use std::fs::OpenOptions;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("debug,tonecraft=debug"));

    // Try to create a log file in the config directory
    let log_file = Config::config_dir()
        .ok()
        .map(|dir| dir.join("tonecraft.log"))
        .and_then(|path| {
            OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&path)
                .ok()
        });

    if let Some(file) = log_file {
        // Log to file
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::sync::Mutex::new(file))
                    .with_ansi(false),
            )
            .init();
    } else {
        // Fallback to stderr if file logging fails
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn print_usage() {
    eprintln!(
        r#"tonecraft - Rewrite emails in a chosen tone

Usage: tonecraft [command]

Commands:
    (none)      Start the editor
    init        Write a default configuration file
    help        Show this help message

Configuration file: ~/.config/tonecraft/config.toml
"#
    );
}

fn run_init() -> Result<()> {
    let config_path = Config::config_path()?;
    if config_path.exists() {
        println!("Configuration already exists at {}", config_path.display());
        return Ok(());
    }

    let config = Config::default();
    config.ensure_dirs()?;
    config.save()?;
    println!("Configuration written to {}", config_path.display());
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(|s| s.as_str()) {
        Some("help") | Some("--help") | Some("-h") => {
            print_usage();
            Ok(())
        }
        Some("init") => run_init(),
        Some(cmd) => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            std::process::exit(1);
        }
        None => {
            setup_logging();

            let config = Config::load()?;
            config.ensure_dirs()?;

            // Initialize theme from config
            crate::ui::theme::init_theme(config.ui.theme);

            let mut app = App::new(config)?;
            app.run().await
        }
    }
}
