//! Best-effort installation of the Python packages the narration pipeline
//! shells out to. Every package gets exactly one outcome, in plan order, and a
//! failure never stops the run.

pub mod catalog;
pub mod error;
pub mod pip;

use async_trait::async_trait;
use tracing::{info, warn};

pub use error::InstallFailure;
pub use pip::PipInstaller;

#[async_trait]
pub trait PackageInstaller: Send + Sync {
    async fn install(&self, package: &str) -> Result<(), InstallFailure>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageInstallTask {
    pub name: String,
    pub required: bool,
}

#[derive(Debug)]
pub struct PackageInstallOutcome {
    pub name: String,
    pub required: bool,
    pub succeeded: bool,
    pub failure: Option<InstallFailure>,
}

#[derive(Debug)]
pub enum InstallEvent<'a> {
    GroupStarted { required: bool, count: usize },
    Installing(&'a PackageInstallTask),
    Finished(&'a PackageInstallOutcome),
}

pub trait InstallReporter {
    fn report(&mut self, event: InstallEvent<'_>);
}

/// Reporter that discards events
pub struct Silent;

impl InstallReporter for Silent {
    fn report(&mut self, _event: InstallEvent<'_>) {}
}

/// Essential packages first, then optional ones, each group in the given order
pub fn plan<E, O>(essential: E, optional: O) -> Vec<PackageInstallTask>
where
    E: IntoIterator,
    E::Item: Into<String>,
    O: IntoIterator,
    O::Item: Into<String>,
{
    let essential = essential.into_iter().map(|name| PackageInstallTask {
        name: name.into(),
        required: true,
    });
    let optional = optional.into_iter().map(|name| PackageInstallTask {
        name: name.into(),
        required: false,
    });
    essential.chain(optional).collect()
}

pub async fn install_all(
    installer: &dyn PackageInstaller,
    tasks: &[PackageInstallTask],
    reporter: &mut dyn InstallReporter,
) -> Vec<PackageInstallOutcome> {
    let mut outcomes = Vec::with_capacity(tasks.len());
    let mut current_group = None;

    for task in tasks {
        if current_group != Some(task.required) {
            current_group = Some(task.required);
            let count = tasks.iter().filter(|t| t.required == task.required).count();
            reporter.report(InstallEvent::GroupStarted {
                required: task.required,
                count,
            });
        }

        reporter.report(InstallEvent::Installing(task));
        let result = installer.install(&task.name).await;

        let outcome = match result {
            Ok(()) => {
                info!(package = %task.name, "Installed");
                PackageInstallOutcome {
                    name: task.name.clone(),
                    required: task.required,
                    succeeded: true,
                    failure: None,
                }
            }
            Err(failure) => {
                warn!(package = %task.name, required = task.required, error = %failure, "Install failed");
                PackageInstallOutcome {
                    name: task.name.clone(),
                    required: task.required,
                    succeeded: false,
                    failure: Some(failure),
                }
            }
        };

        reporter.report(InstallEvent::Finished(&outcome));
        outcomes.push(outcome);
    }

    outcomes
}

/// Counts over a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InstallReport {
    pub essential_ok: usize,
    pub essential_failed: usize,
    pub optional_ok: usize,
    pub optional_failed: usize,
}

impl InstallReport {
    pub fn from_outcomes(outcomes: &[PackageInstallOutcome]) -> Self {
        outcomes.iter().fold(Self::default(), |mut report, o| {
            match (o.required, o.succeeded) {
                (true, true) => report.essential_ok += 1,
                (true, false) => report.essential_failed += 1,
                (false, true) => report.optional_ok += 1,
                (false, false) => report.optional_failed += 1,
            }
            report
        })
    }

    pub fn all_essential_failed(&self) -> bool {
        self.essential_ok == 0 && self.essential_failed > 0
    }

    pub fn any_failed(&self) -> bool {
        self.essential_failed + self.optional_failed > 0
    }
}
