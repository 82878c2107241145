// src/main.rs
use std::process::exit;
use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use tracing::{debug, Level};

use dorkfactory::cli::{display, App, Args};
use dorkfactory::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    // Usage errors exit with 1, help and version with 0
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    // Logs go to stderr so silent output stays pipeable
    let level = if args.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();

    let settings = Settings::load(args.config.as_deref())
        .context("Failed to load settings")?;

    if args.no_color || settings.defaults.no_color {
        display::disable_colors();
    }

    tokio::spawn(async {
        if tokio::signal::ctrl_c().await.is_ok() {
            eprintln!("\n{}", "Interrupted by user".red());
            exit(1);
        }
    });

    let mut app = App::new(settings)?;
    debug!("Starting with {:?}", app.session());

    if let Err(e) = app.run(&args).await {
        display::print_error(&e);
        exit(1);
    }

    Ok(())
}
