use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use fala_core::settings::{setup_tracing, Settings};
use fala_setup::{installer_from, run_setup, ConsoleReporter};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "fala-setup")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Install the Python packages used by the narration pipeline")]
struct Args {
    /// Python interpreter whose pip is used
    #[arg(long)]
    python: Option<String>,

    /// Give up on a single package after this many seconds
    #[arg(long, value_name = "SECS")]
    timeout_secs: Option<u64>,

    /// Read package lists and installer options from a TOML settings file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(long)]
    verbose: bool,
}

// Exit status is always success: a partially provisioned environment is still usable.
fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            print!("{e}");
            return ExitCode::SUCCESS;
        }
    };
    let _ = setup_tracing("fala-setup", args.verbose);

    if let Err(e) = run(args) {
        warn!("Setup aborted: {e:?}");
        println!("⚠️  {e:#}");
    }
    ExitCode::SUCCESS
}

fn run(args: Args) -> Result<()> {
    let mut settings = Settings::load_or_default(args.config.as_deref())?.setup;
    if let Some(python) = args.python {
        settings.python = python;
    }
    if args.timeout_secs.is_some() {
        settings.timeout_secs = args.timeout_secs;
    }
    info!("Setup startup: python={}, timeout={:?}", settings.python, settings.timeout_secs);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let installer = installer_from(&settings);
    let mut reporter = ConsoleReporter::stdout();
    runtime.block_on(run_setup(&installer, &settings, &mut reporter));
    Ok(())
}
