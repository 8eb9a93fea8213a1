use fala_core::convert::{ConversionEvent, ProgressReporter};

/// Prints each conversion stage as a line on stdout
pub struct StdoutReporter;

impl ProgressReporter for StdoutReporter {
    fn report(&mut self, event: ConversionEvent) {
        for line in render(&event) {
            println!("{line}");
        }
    }
}

pub fn render(event: &ConversionEvent) -> Vec<String> {
    match event {
        ConversionEvent::Received {
            text_preview,
            output_path,
            language,
        } => vec![
            format!("Text received: {text_preview}"),
            format!("Output file: {}", output_path.display()),
            format!("Language: {language}"),
        ],
        ConversionEvent::CreatingDirectory(dir) => {
            vec![format!("Creating directory: {}", dir.display())]
        }
        ConversionEvent::SynthesisStarted {
            synthesizer,
            chunks,
        } => {
            let plural = if *chunks == 1 { "" } else { "s" };
            vec![format!(
                "Starting audio generation with {synthesizer} ({chunks} part{plural})..."
            )]
        }
        ConversionEvent::SynthesisFinished { bytes } => {
            vec![format!("Audio generated: {bytes} bytes")]
        }
        ConversionEvent::Saved(path) => vec![format!("Audio saved to {}", path.display())],
        ConversionEvent::Verified { bytes, .. } => {
            vec![format!("File created successfully: {bytes} bytes")]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn final_line_reports_size() {
        let lines = render(&ConversionEvent::Verified {
            path: PathBuf::from("/tmp/out/audio.mp3"),
            bytes: 5120,
        });
        assert_eq!(lines, vec!["File created successfully: 5120 bytes"]);
    }

    #[test]
    fn single_part_is_not_pluralised() {
        let lines = render(&ConversionEvent::SynthesisStarted {
            synthesizer: "mock".to_string(),
            chunks: 1,
        });
        assert_eq!(lines, vec!["Starting audio generation with mock (1 part)..."]);
    }
}
