use std::time::Duration;

use fala_core::install::{
    catalog, install_all, plan, InstallEvent, InstallReport, InstallReporter, PackageInstallOutcome,
    PackageInstaller, PipInstaller,
};
use fala_core::settings::SetupSettings;
use tracing::{info, warn};

/// Prints one status line per package in the style of a setup script
#[derive(Default)]
pub struct ConsoleReporter {
    lines: Vec<String>,
    echo: bool,
}

impl ConsoleReporter {
    pub fn stdout() -> Self {
        Self {
            lines: Vec::new(),
            echo: true,
        }
    }

    /// Reporter that only records, used by tests
    pub fn buffered() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn say(&mut self, line: impl Into<String>) {
        let line = line.into();
        if self.echo {
            println!("{line}");
        }
        self.lines.push(line);
    }
}

impl InstallReporter for ConsoleReporter {
    fn report(&mut self, event: InstallEvent<'_>) {
        match event {
            InstallEvent::GroupStarted { required: true, .. } => {
                self.say("📦 Installing essential packages...")
            }
            InstallEvent::GroupStarted { required: false, .. } => {
                self.say("\n📦 Trying optional packages...")
            }
            InstallEvent::Installing(_) => {}
            InstallEvent::Finished(outcome) => {
                let line = status_line(outcome);
                self.say(line);
            }
        }
    }
}

fn status_line(outcome: &PackageInstallOutcome) -> String {
    match (outcome.succeeded, outcome.required) {
        (true, _) => format!("✅ {} installed successfully", outcome.name),
        (false, true) => format!("❌ Failed to install {}", outcome.name),
        (false, false) => format!("⚠️  {} not available - using fallback", outcome.name),
    }
}

pub fn installer_from(settings: &SetupSettings) -> PipInstaller {
    let mut installer = PipInstaller::new(settings.python.clone())
        .with_timeout(settings.timeout_secs.map(Duration::from_secs));
    installer.extra_args = settings.pip_args.clone();
    installer
}

/// Runs every install and prints the closing banner. Never fails.
pub async fn run_setup(
    installer: &dyn PackageInstaller,
    settings: &SetupSettings,
    reporter: &mut ConsoleReporter,
) -> Vec<PackageInstallOutcome> {
    reporter.say("🔧 Configuring Python dependencies...");

    let tasks = plan(settings.essential.clone(), settings.optional.clone());
    info!("Installing {} packages", tasks.len());
    let outcomes = install_all(installer, &tasks, reporter).await;

    let report = InstallReport::from_outcomes(&outcomes);
    info!(?report, "Setup finished");
    if report.all_essential_failed() {
        warn!("Every essential package failed to install");
    } else if report.any_failed() {
        warn!("Some packages failed to install");
    }

    reporter.say("\n✅ Setup finished!");
    reporter.say(format!(
        "   essential: {} ok, {} failed | optional: {} ok, {} failed",
        report.essential_ok, report.essential_failed, report.optional_ok, report.optional_failed
    ));

    let mut hint = catalog::manual_install_hint().into_iter();
    if let Some(first) = hint.next() {
        reporter.say(format!("💡 {first}"));
    }
    for line in hint {
        reporter.say(line);
    }

    outcomes
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use fala_core::install::InstallFailure;

    struct FailEverything;

    #[async_trait]
    impl PackageInstaller for FailEverything {
        async fn install(&self, _package: &str) -> Result<(), InstallFailure> {
            Err(InstallFailure::ExitStatus(Some(1)))
        }
    }

    struct InstallEverything;

    #[async_trait]
    impl PackageInstaller for InstallEverything {
        async fn install(&self, _package: &str) -> Result<(), InstallFailure> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn failures_are_marked_and_optional_falls_back() {
        let mut reporter = ConsoleReporter::buffered();
        let outcomes =
            run_setup(&FailEverything, &SetupSettings::default(), &mut reporter).await;

        assert_eq!(outcomes.len(), 9);
        let lines = reporter.lines();
        assert!(lines.contains(&"❌ Failed to install torch".to_string()));
        assert!(lines.contains(&"⚠️  imagen-pytorch not available - using fallback".to_string()));
        assert!(lines.iter().any(|l| l.contains("Setup finished")));
        assert!(lines.last().unwrap().contains("git clone"));
    }

    #[tokio::test]
    async fn successes_are_marked() {
        let settings = SetupSettings {
            essential: vec!["gtts".to_string()],
            optional: vec![],
            ..SetupSettings::default()
        };
        let mut reporter = ConsoleReporter::buffered();
        let outcomes = run_setup(&InstallEverything, &settings, &mut reporter).await;

        assert_eq!(outcomes.len(), 1);
        assert!(outcomes[0].succeeded);
        assert!(reporter
            .lines()
            .contains(&"✅ gtts installed successfully".to_string()));
        assert!(!reporter.lines().iter().any(|l| l.contains("optional packages")));
    }

    #[test]
    fn installer_uses_settings() {
        let settings = SetupSettings {
            python: "python3.11".to_string(),
            timeout_secs: Some(30),
            pip_args: vec!["--user".to_string()],
            ..SetupSettings::default()
        };
        let installer = installer_from(&settings);
        assert_eq!(installer.program, "python3.11");
        assert_eq!(installer.timeout, Some(Duration::from_secs(30)));
        assert_eq!(installer.args_for("numpy"), vec!["-m", "pip", "install", "--user", "numpy"]);
    }
}
