use std::path::PathBuf;

/// Progress notifications emitted while a conversion runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionEvent {
    Received {
        text_preview: String,
        output_path: PathBuf,
        language: String,
    },
    CreatingDirectory(PathBuf),
    SynthesisStarted {
        synthesizer: String,
        chunks: usize,
    },
    SynthesisFinished {
        bytes: usize,
    },
    Saved(PathBuf),
    Verified {
        path: PathBuf,
        bytes: u64,
    },
}

pub trait ProgressReporter {
    fn report(&mut self, event: ConversionEvent);
}

/// Collects events in memory
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub events: Vec<ConversionEvent>,
}

impl ProgressReporter for RecordingReporter {
    fn report(&mut self, event: ConversionEvent) {
        self.events.push(event);
    }
}
