use std::{process::Stdio, time::Duration};

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use super::error::InstallFailure;
use super::PackageInstaller;

pub const DEFAULT_PYTHON: &str = "python3";

const PIP_INSTALL: &[&str] = &["-m", "pip", "install"];

/// Installs packages with `<python> -m pip install <name>`, one process per package.
///
/// The `-m pip install` prefix can be swapped for another front end such as
/// `uv pip install` through [`PipInstaller::with_command`].
#[derive(Debug, Clone)]
pub struct PipInstaller {
    pub program: String,
    pub install_args: Vec<String>,
    pub extra_args: Vec<String>,
    pub timeout: Option<Duration>,
}

impl Default for PipInstaller {
    fn default() -> Self {
        Self::new(DEFAULT_PYTHON)
    }
}

impl PipInstaller {
    pub fn new(python: impl Into<String>) -> Self {
        Self::with_command(python, PIP_INSTALL.iter().copied())
    }

    pub fn with_command<I>(program: impl Into<String>, install_args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            program: program.into(),
            install_args: install_args.into_iter().map(Into::into).collect(),
            extra_args: Vec::new(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn args_for(&self, package: &str) -> Vec<String> {
        let mut args = self.install_args.clone();
        args.extend(self.extra_args.iter().cloned());
        args.push(package.to_string());
        args
    }
}

#[async_trait]
impl PackageInstaller for PipInstaller {
    async fn install(&self, package: &str) -> Result<(), InstallFailure> {
        let args = self.args_for(package);
        debug!(program = %self.program, ?args, "Spawning installer");

        // Installer output goes straight to the terminal
        let mut child = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()?;

        let status = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, child.wait())
                .await
                .map_err(|_| InstallFailure::TimedOut(limit))??,
            None => child.wait().await?,
        };

        if status.success() {
            Ok(())
        } else {
            Err(InstallFailure::ExitStatus(status.code()))
        }
    }
}
