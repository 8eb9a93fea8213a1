use serde::{Deserialize, Serialize};

use crate::convert::PREVIEW_CHARS;
use crate::install::{catalog, pip::DEFAULT_PYTHON};
use crate::tts::types::{DEFAULT_LANGUAGE, DEFAULT_TLD};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    #[serde(default)]
    pub tts: TtsSettings,
    #[serde(default)]
    pub setup: SetupSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TtsSettings {
    pub language: String,
    pub slow: bool,
    pub tld: String,
    pub preview_chars: usize,
    pub strip_markdown: bool,
}

impl Default for TtsSettings {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            slow: false,
            tld: DEFAULT_TLD.to_string(),
            preview_chars: PREVIEW_CHARS,
            strip_markdown: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SetupSettings {
    pub python: String,
    /// Per-package limit; unset waits for the installer indefinitely
    pub timeout_secs: Option<u64>,
    pub pip_args: Vec<String>,
    pub essential: Vec<String>,
    pub optional: Vec<String>,
}

impl Default for SetupSettings {
    fn default() -> Self {
        Self {
            python: DEFAULT_PYTHON.to_string(),
            timeout_secs: None,
            pip_args: Vec::new(),
            essential: catalog::essential(),
            optional: catalog::optional(),
        }
    }
}
