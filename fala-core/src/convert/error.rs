use std::path::PathBuf;

use thiserror::Error;

use crate::tts::SynthesisError;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("{0}")]
    Usage(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Synthesis(#[from] SynthesisError),

    #[error("{action} {path:?}: {source}")]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("output file was not created: {0:?}")]
    MissingOutput(PathBuf),

    #[error("output file is empty: {0:?}")]
    EmptyOutput(PathBuf),
}

impl ConversionError {
    /// Every conversion failure is terminal for the invocation
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// True when the failure happened during or after synthesis
    pub fn is_synthesis_failure(&self) -> bool {
        matches!(
            self,
            Self::Synthesis(_) | Self::Io { .. } | Self::MissingOutput(_) | Self::EmptyOutput(_)
        )
    }
}
