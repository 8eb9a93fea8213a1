use serde::{Deserialize, Serialize};

pub const DEFAULT_LANGUAGE: &str = "pt";
pub const DEFAULT_TLD: &str = "com";

/// Container format of synthesized audio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AudioFormat {
    #[default]
    Mp3,
}

/// Audio data returned from TTS synthesis
#[derive(Debug, Clone)]
pub struct AudioData {
    pub bytes: Vec<u8>,
    pub format: AudioFormat,
}

impl AudioData {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Knobs passed to a synthesizer alongside the text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesisOptions {
    pub language: String,
    pub slow: bool,
    /// Top-level domain of the endpoint host, selects the regional accent
    pub tld: String,
}

impl Default for SynthesisOptions {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            slow: false,
            tld: DEFAULT_TLD.to_string(),
        }
    }
}
