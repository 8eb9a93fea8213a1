pub mod chunk;
pub mod error;
pub mod google;
pub mod mock;
pub mod provider;
pub mod types;

pub use error::SynthesisError;
pub use google::{GoogleTranslateConfig, GoogleTranslateTts};
pub use provider::Synthesizer;
pub use types::{AudioData, AudioFormat, SynthesisOptions};
