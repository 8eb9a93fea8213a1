use async_trait::async_trait;

use super::error::SynthesisError;
use super::types::{AudioData, SynthesisOptions};

/// Trait for text-to-speech backends
#[async_trait]
pub trait Synthesizer: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &str;

    /// Number of requests `text` will be split into, used for progress output
    fn chunk_count(&self, text: &str) -> usize {
        usize::from(!text.trim().is_empty())
    }

    /// Synthesize text to encoded audio
    async fn synthesize(
        &self,
        text: &str,
        options: &SynthesisOptions,
    ) -> Result<AudioData, SynthesisError>;
}
