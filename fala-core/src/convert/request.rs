use std::path::{Path, PathBuf};

use crate::tts::types::DEFAULT_LANGUAGE;

use super::error::ConversionError;

/// Characters of input text echoed back in progress output
pub const PREVIEW_CHARS: usize = 100;

/// A validated text-to-audio job. Construct with [`ConversionRequest::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    text: String,
    output_path: PathBuf,
    language: String,
}

impl ConversionRequest {
    pub fn new(
        text: impl Into<String>,
        output_path: impl Into<PathBuf>,
        language: impl Into<String>,
    ) -> Result<Self, ConversionError> {
        let text = text.into();
        let output_path = output_path.into();
        let language = language.into();

        if text.trim().is_empty() {
            return Err(ConversionError::InvalidRequest(
                "text must not be empty".to_string(),
            ));
        }
        if output_path.as_os_str().is_empty() {
            return Err(ConversionError::InvalidRequest(
                "output path must not be empty".to_string(),
            ));
        }
        if names_directory(&output_path) {
            return Err(ConversionError::InvalidRequest(format!(
                "output path {output_path:?} is a directory"
            )));
        }
        if language.trim().is_empty() {
            return Err(ConversionError::InvalidRequest(
                "language must not be empty".to_string(),
            ));
        }

        Ok(Self {
            text,
            output_path,
            language,
        })
    }

    /// Request with the default Portuguese voice
    pub fn portuguese(
        text: impl Into<String>,
        output_path: impl Into<PathBuf>,
    ) -> Result<Self, ConversionError> {
        Self::new(text, output_path, DEFAULT_LANGUAGE)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Directory that must exist before the write, if the path has one
    pub fn parent_dir(&self) -> Option<&Path> {
        self.output_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
    }
}

fn names_directory(path: &Path) -> bool {
    let raw = path.as_os_str().to_string_lossy();
    raw.ends_with('/') || raw.ends_with(std::path::MAIN_SEPARATOR) || path.is_dir()
}

/// First `max_chars` characters of `text`, with `...` appended when cut
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}...", &text[..end]),
        None => text.to_string(),
    }
}
