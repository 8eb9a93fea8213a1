//! Text to audio file conversion.
//!
//! A [`Converter`] owns a [`Synthesizer`] and turns a validated
//! [`ConversionRequest`] into a file on disk, reporting each stage through a
//! [`ProgressReporter`]. The written file is stat'ed afterwards and a missing
//! or empty file is a failure even when the synthesizer returned normally.

pub mod error;
pub mod events;
pub mod request;

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::tts::{Synthesizer, SynthesisOptions};

pub use error::ConversionError;
pub use events::{ConversionEvent, ProgressReporter, RecordingReporter};
pub use request::{preview, ConversionRequest, PREVIEW_CHARS};

/// Outcome of a finished conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResult {
    pub output_path: PathBuf,
    pub byte_size: u64,
    pub succeeded: bool,
}

pub struct Converter<S> {
    synthesizer: S,
    slow: bool,
    tld: String,
    preview_chars: usize,
}

impl<S: Synthesizer> Converter<S> {
    pub fn new(synthesizer: S) -> Self {
        let defaults = SynthesisOptions::default();
        Self {
            synthesizer,
            slow: defaults.slow,
            tld: defaults.tld,
            preview_chars: PREVIEW_CHARS,
        }
    }

    pub fn with_slow(mut self, slow: bool) -> Self {
        self.slow = slow;
        self
    }

    pub fn with_tld(mut self, tld: impl Into<String>) -> Self {
        self.tld = tld.into();
        self
    }

    pub fn with_preview_chars(mut self, preview_chars: usize) -> Self {
        self.preview_chars = preview_chars;
        self
    }

    pub async fn convert(
        &self,
        request: &ConversionRequest,
        reporter: &mut dyn ProgressReporter,
    ) -> Result<ConversionResult, ConversionError> {
        let output_path = request.output_path().to_path_buf();
        info!(
            output = ?output_path,
            language = request.language(),
            chars = request.text().chars().count(),
            "Starting conversion"
        );

        reporter.report(ConversionEvent::Received {
            text_preview: preview(request.text(), self.preview_chars),
            output_path: output_path.clone(),
            language: request.language().to_string(),
        });

        if let Some(dir) = request.parent_dir() {
            if !tokio::fs::try_exists(dir).await.unwrap_or(false) {
                reporter.report(ConversionEvent::CreatingDirectory(dir.to_path_buf()));
                tokio::fs::create_dir_all(dir)
                    .await
                    .map_err(|source| ConversionError::Io {
                        action: "Failed to create directory",
                        path: dir.to_path_buf(),
                        source,
                    })?;
                debug!(dir = ?dir, "Created output directory");
            }
        }

        let options = SynthesisOptions {
            language: request.language().to_string(),
            slow: self.slow,
            tld: self.tld.clone(),
        };

        reporter.report(ConversionEvent::SynthesisStarted {
            synthesizer: self.synthesizer.name().to_string(),
            chunks: self.synthesizer.chunk_count(request.text()),
        });

        let audio = self
            .synthesizer
            .synthesize(request.text(), &options)
            .await
            .inspect_err(|e| warn!(error = %e, "Synthesis failed"))?;

        reporter.report(ConversionEvent::SynthesisFinished { bytes: audio.len() });

        // An empty payload must not truncate whatever is already at the path
        if audio.is_empty() {
            warn!(output = ?output_path, "Synthesizer returned no audio");
            return Err(ConversionError::EmptyOutput(output_path));
        }

        tokio::fs::write(&output_path, &audio.bytes)
            .await
            .map_err(|source| ConversionError::Io {
                action: "Failed to write audio to",
                path: output_path.clone(),
                source,
            })?;
        reporter.report(ConversionEvent::Saved(output_path.clone()));

        let byte_size = match tokio::fs::metadata(&output_path).await {
            Ok(meta) if meta.is_file() => meta.len(),
            Ok(_) | Err(_) => {
                warn!(output = ?output_path, "Output missing after write");
                return Err(ConversionError::MissingOutput(output_path));
            }
        };
        if byte_size == 0 {
            warn!(output = ?output_path, "Output is empty after write");
            return Err(ConversionError::EmptyOutput(output_path));
        }

        reporter.report(ConversionEvent::Verified {
            path: output_path.clone(),
            bytes: byte_size,
        });
        info!(output = ?output_path, byte_size, "Conversion finished");

        Ok(ConversionResult {
            output_path,
            byte_size,
            succeeded: true,
        })
    }
}
