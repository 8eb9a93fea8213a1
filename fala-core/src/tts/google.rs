//! Google Translate text-to-speech implementation

use async_trait::async_trait;
use reqwest::header::{REFERER, USER_AGENT};
use reqwest::Client;
use tracing::debug;

use super::chunk::{split_text, MAX_CHUNK_CHARS};
use super::error::SynthesisError;
use super::provider::Synthesizer;
use super::types::{AudioData, AudioFormat, SynthesisOptions};

const BROWSER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/120.0 Safari/537.36";

#[derive(Debug, Clone)]
pub struct GoogleTranslateConfig {
    /// Overrides the `https://translate.google.<tld>` host, mainly for tests
    pub base_url: Option<String>,
    pub max_chunk_chars: usize,
}

impl Default for GoogleTranslateConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            max_chunk_chars: MAX_CHUNK_CHARS,
        }
    }
}

pub struct GoogleTranslateTts {
    config: GoogleTranslateConfig,
    client: Client,
}

impl GoogleTranslateTts {
    pub fn new(config: GoogleTranslateConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    fn endpoint(&self, tld: &str) -> String {
        let base = match &self.config.base_url {
            Some(base) => base.trim_end_matches('/').to_string(),
            None => format!("https://translate.google.{tld}"),
        };
        format!("{base}/translate_tts")
    }

    async fn fetch_chunk(
        &self,
        url: &str,
        chunk: &str,
        idx: usize,
        total: usize,
        options: &SynthesisOptions,
    ) -> Result<Vec<u8>, SynthesisError> {
        let speed = if options.slow { "0.24" } else { "1" };
        let total = total.to_string();
        let idx_param = idx.to_string();
        let textlen = chunk.chars().count().to_string();

        let response = self
            .client
            .get(url)
            .header(USER_AGENT, BROWSER_AGENT)
            .header(REFERER, "https://translate.google.com/")
            .query(&[
                ("ie", "UTF-8"),
                ("q", chunk),
                ("tl", options.language.as_str()),
                ("total", total.as_str()),
                ("idx", idx_param.as_str()),
                ("textlen", textlen.as_str()),
                ("client", "tw-ob"),
                ("ttsspeed", speed),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SynthesisError::Http { status, body });
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Err(SynthesisError::EmptyAudio { chunk: idx });
        }
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl Synthesizer for GoogleTranslateTts {
    fn name(&self) -> &str {
        "google-translate"
    }

    fn chunk_count(&self, text: &str) -> usize {
        split_text(text, self.config.max_chunk_chars).len()
    }

    async fn synthesize(
        &self,
        text: &str,
        options: &SynthesisOptions,
    ) -> Result<AudioData, SynthesisError> {
        let chunks = split_text(text, self.config.max_chunk_chars);
        if chunks.is_empty() {
            return Err(SynthesisError::EmptyText);
        }

        let url = self.endpoint(&options.tld);
        let total = chunks.len();
        let mut audio = Vec::new();

        // MP3 frames are self-delimiting, so parts can simply be appended.
        for (idx, chunk) in chunks.iter().enumerate() {
            debug!(idx, total, chars = chunk.chars().count(), "Requesting chunk");
            let part = self.fetch_chunk(&url, chunk, idx, total, options).await?;
            debug!(idx, bytes = part.len(), "Received chunk");
            audio.extend_from_slice(&part);
        }

        Ok(AudioData {
            bytes: audio,
            format: AudioFormat::Mp3,
        })
    }
}
