use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::error::SynthesisError;
use super::provider::Synthesizer;
use super::types::{AudioData, AudioFormat, SynthesisOptions};

/// Minimal MPEG-1 Layer III frame header, enough for tools to sniff the format
const FAKE_MP3_FRAME: [u8; 4] = [0xFF, 0xFB, 0x90, 0x64];

/// Mock behavior for the mock synthesizer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MockBehavior {
    /// Return a small MP3-looking payload
    #[default]
    Success,
    /// Fail every call with the given message
    AlwaysFail(String),
    /// Succeed but return zero bytes
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedCall {
    pub text: String,
    pub options: SynthesisOptions,
}

/// Mock synthesizer for testing
#[derive(Clone, Default)]
pub struct MockSynthesizer {
    behavior: Arc<Mutex<MockBehavior>>,
    calls: Arc<Mutex<Vec<CapturedCall>>>,
}

impl MockSynthesizer {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior: Arc::new(Mutex::new(behavior)),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> Vec<CapturedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Payload the `Success` behavior returns for `text`
    pub fn expected_audio(text: &str) -> Vec<u8> {
        let mut bytes = FAKE_MP3_FRAME.to_vec();
        bytes.extend_from_slice(text.as_bytes());
        bytes
    }
}

#[async_trait]
impl Synthesizer for MockSynthesizer {
    fn name(&self) -> &str {
        "mock"
    }

    async fn synthesize(
        &self,
        text: &str,
        options: &SynthesisOptions,
    ) -> Result<AudioData, SynthesisError> {
        self.calls.lock().unwrap().push(CapturedCall {
            text: text.to_string(),
            options: options.clone(),
        });

        let behavior = self.behavior.lock().unwrap().clone();
        match behavior {
            MockBehavior::Success => Ok(AudioData {
                bytes: Self::expected_audio(text),
                format: AudioFormat::Mp3,
            }),
            MockBehavior::AlwaysFail(message) => {
                Err(SynthesisError::Other(anyhow::anyhow!(message)))
            }
            MockBehavior::Empty => Ok(AudioData {
                bytes: Vec::new(),
                format: AudioFormat::Mp3,
            }),
        }
    }
}
