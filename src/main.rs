//! Crane - A modal terminal text editor.
//!
//! # Usage
//!
//! ```bash
//! crane notes.txt
//! crane --no-number src/main.rs
//! crane --theme light --save
//! ```

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;

use crane::app::App;
use crane::config::{
    ConfigFlags, ThemeMode, clear_config_flags, global_config_path, load_config_flags,
    local_override_path, parse_flag_tokens, save_config_flags,
};
use crane::highlight::{HighlightBackground, set_background_mode};

/// A modal, keyboard-driven terminal text editor
#[derive(Parser, Debug)]
#[command(name = "crane", version, about, long_about = None)]
struct Cli {
    /// File to edit (created on first save if missing)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Start with syntax highlighting off
    #[arg(long)]
    no_syntax: bool,

    /// Start with the line-number gutter hidden
    #[arg(long)]
    no_number: bool,

    /// Force syntax highlight theme background (light or dark)
    #[arg(long, value_enum, default_value = "auto")]
    theme: ThemeMode,

    /// Write log output to a file instead of stderr
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

/// Palette override for the highlighter; `auto` leaves detection to `COLORFGBG`.
const fn background_for(theme: ThemeMode) -> Option<HighlightBackground> {
    match theme {
        ThemeMode::Auto => None,
        ThemeMode::Light => Some(HighlightBackground::Light),
        ThemeMode::Dark => Some(HighlightBackground::Dark),
    }
}

/// Send logs to `log_file` when given, else stderr.
///
/// The editor owns the terminal while running, so stderr output only shows
/// up after exit.
fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    let log_file = effective
        .log_file
        .clone()
        .or_else(|| std::env::var_os("CRANE_LOG_FILE").map(PathBuf::from));
    init_logging(log_file.as_ref())?;
    tracing::debug!(?effective, "effective flags");

    set_background_mode(background_for(effective.theme.unwrap_or(cli.theme)));

    let mut app = App::new(cli.file)
        .with_syntax(!effective.no_syntax)
        .with_line_numbers(!effective.no_number);

    app.run().context("Application error")
}
