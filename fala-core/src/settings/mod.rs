//! Optional TOML settings. Nothing is read unless a path is passed explicitly,
//! so a bare invocation depends on no files and no environment.

pub mod config;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub use config::{SetupSettings, Settings, TtsSettings};

impl Settings {
    /// Load settings from a TOML file; missing keys keep their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {path:?}"))?;
        toml::from_str(&contents).with_context(|| format!("Failed to parse settings in {path:?}"))
    }

    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

/// Directory trace logs are written to (~/.fala/trace)
pub fn trace_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Failed to get home directory")?;
    Ok(home.join(".fala").join("trace"))
}

/// Route tracing for binary `name` to `~/.fala/trace/<name>.log`
pub fn setup_tracing(name: &str, verbose: bool) -> Result<PathBuf> {
    setup_tracing_in(&trace_dir()?, name, verbose)
}

fn setup_tracing_in(trace_dir: &Path, name: &str, verbose: bool) -> Result<PathBuf> {
    use tracing_subscriber::fmt;

    fs::create_dir_all(trace_dir)
        .with_context(|| format!("Failed to create directory: {trace_dir:?}"))?;

    let log_file = trace_dir.join(format!("{name}.log"));
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
        .with_context(|| format!("Failed to open log file {log_file:?}"))?;

    let level = if verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(EnvFilter::new(level))
        .try_init()?;

    info!("Tracing initialized to {:?}", log_file);
    Ok(log_file)
}
