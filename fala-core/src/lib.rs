pub mod convert;
pub mod install;
pub mod settings;
pub mod tts;

pub use convert::{ConversionError, ConversionRequest, ConversionResult, Converter};
pub use install::{install_all, PackageInstallOutcome, PackageInstallTask, PackageInstaller};
pub use settings::Settings;
pub use tts::{Synthesizer, SynthesisOptions};
