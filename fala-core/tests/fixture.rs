use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;
use fala_core::{
    convert::Converter,
    install::{InstallFailure, PackageInstaller},
    tts::mock::{MockBehavior, MockSynthesizer},
};
use tempfile::TempDir;

pub struct Fixture {
    pub dir: TempDir,
    pub synthesizer: MockSynthesizer,
    pub converter: Converter<MockSynthesizer>,
}

impl Fixture {
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self::with_behavior(MockBehavior::Success)
    }

    #[allow(dead_code)]
    pub fn with_behavior(behavior: MockBehavior) -> Self {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let dir = TempDir::new().unwrap();
        let synthesizer = MockSynthesizer::new(behavior);
        let converter = Converter::new(synthesizer.clone());
        Self {
            dir,
            synthesizer,
            converter,
        }
    }

    #[allow(dead_code)]
    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }
}

/// Installer whose result per package is scripted up front
#[derive(Default)]
pub struct ScriptedInstaller {
    failing: HashSet<String>,
    crashing: HashSet<String>,
    pub attempts: Mutex<Vec<String>>,
}

impl ScriptedInstaller {
    #[allow(dead_code)]
    pub fn failing(mut self, names: &[&str]) -> Self {
        self.failing.extend(names.iter().map(|s| s.to_string()));
        self
    }

    #[allow(dead_code)]
    pub fn crashing(mut self, names: &[&str]) -> Self {
        self.crashing.extend(names.iter().map(|s| s.to_string()));
        self
    }

    #[allow(dead_code)]
    pub fn attempts(&self) -> Vec<String> {
        self.attempts.lock().unwrap().clone()
    }
}

#[async_trait]
impl PackageInstaller for ScriptedInstaller {
    async fn install(&self, package: &str) -> Result<(), InstallFailure> {
        self.attempts.lock().unwrap().push(package.to_string());
        if self.crashing.contains(package) {
            return Err(InstallFailure::Spawn(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "installer missing",
            )));
        }
        if self.failing.contains(package) {
            return Err(InstallFailure::ExitStatus(Some(1)));
        }
        Ok(())
    }
}
