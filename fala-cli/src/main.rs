use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use fala_core::convert::{ConversionError, ConversionRequest, ConversionResult, Converter};
use fala_core::settings::{setup_tracing, Settings};
use fala_core::tts::chunk::clean_text;
use fala_core::tts::{GoogleTranslateConfig, GoogleTranslateTts, Synthesizer};
use tracing::{error, info, warn};

mod progress;

use crate::progress::StdoutReporter;

const USAGE: &str = "Usage: fala-tts \"text\" output.mp3";

#[derive(Parser, Debug)]
#[command(name = "fala-tts")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Convert text to a Portuguese speech audio file")]
struct Args {
    /// Text to speak, taken literally even when it starts with `-`
    #[arg(allow_hyphen_values = true)]
    text: String,

    /// Where to write the audio; parent directories are created as needed
    #[arg(allow_hyphen_values = true)]
    output: PathBuf,

    /// Language code passed to the synthesizer
    #[arg(long, value_name = "CODE")]
    lang: Option<String>,

    /// Speak slowly
    #[arg(long)]
    slow: bool,

    /// Regional endpoint domain (e.g. com.br for a Brazilian accent)
    #[arg(long)]
    tld: Option<String>,

    /// Flatten newlines and drop markdown markers before synthesis
    #[arg(long)]
    strip_markdown: bool,

    /// Read defaults from a TOML settings file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(long)]
    verbose: bool,

    /// Ignored trailing arguments
    #[arg(hide = true)]
    extra: Vec<String>,
}

/// Effective options after merging flags over the settings file
#[derive(Debug, Clone, PartialEq, Eq)]
struct RunOptions {
    text: String,
    output: PathBuf,
    language: String,
    slow: bool,
    tld: String,
    preview_chars: usize,
}

impl RunOptions {
    fn resolve(args: Args, settings: Settings) -> Self {
        let tts = settings.tts;
        let strip = args.strip_markdown || tts.strip_markdown;
        let text = if strip {
            clean_text(&args.text)
        } else {
            args.text
        };
        Self {
            text,
            output: args.output,
            language: args.lang.unwrap_or(tts.language),
            slow: args.slow || tts.slow,
            tld: args.tld.unwrap_or(tts.tld),
            preview_chars: tts.preview_chars,
        }
    }
}

fn main() -> ExitCode {
    let argv: Vec<String> = std::env::args().collect();
    println!("TTS started with {} arguments", argv.len().saturating_sub(1));

    let args = match Args::try_parse_from(&argv) {
        Ok(args) => args,
        Err(e) => return handle_parse_error(e),
    };

    // Logging is best effort; the progress output on stdout does not depend on it
    let _ = setup_tracing("fala-tts", args.verbose);

    info!(
        "CLI startup: output={:?}, lang={:?}, slow={}, config={:?}",
        args.output, args.lang, args.slow, args.config
    );
    if !args.extra.is_empty() {
        warn!("Ignoring extra arguments: {:?}", args.extra);
    }

    let settings = match Settings::load_or_default(args.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            println!("ERROR: {e:#}");
            return ExitCode::from(1);
        }
    };
    let options = RunOptions::resolve(args, settings);

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            println!("ERROR: failed to start runtime: {e}");
            return ExitCode::from(1);
        }
    };

    let synthesizer = GoogleTranslateTts::new(GoogleTranslateConfig::default());
    match runtime.block_on(run(options, synthesizer)) {
        Ok(result) => {
            info!("Conversion succeeded: {:?}", result);
            ExitCode::SUCCESS
        }
        Err(e) => report_failure(&e),
    }
}

async fn run<S: Synthesizer>(
    options: RunOptions,
    synthesizer: S,
) -> Result<ConversionResult, ConversionError> {
    let request = ConversionRequest::new(options.text, options.output, options.language)?;
    let converter = Converter::new(synthesizer)
        .with_slow(options.slow)
        .with_tld(options.tld)
        .with_preview_chars(options.preview_chars);
    converter.convert(&request, &mut StdoutReporter).await
}

/// Anything that does not produce an audio file exits 1, help and version included
fn handle_parse_error(e: clap::Error) -> ExitCode {
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            print!("{e}");
            ExitCode::from(1)
        }
        _ => {
            let usage = ConversionError::Usage(USAGE.to_string());
            println!("ERROR: {usage}");
            ExitCode::from(usage.exit_code())
        }
    }
}

fn report_failure(e: &ConversionError) -> ExitCode {
    error!("Conversion failed: {e:?}");
    if e.is_synthesis_failure() {
        println!("ERROR generating audio: {e}");
    } else {
        println!("ERROR: {e}");
    }
    ExitCode::from(e.exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fala_core::tts::mock::{MockBehavior, MockSynthesizer};

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("fala-tts").chain(args.iter().copied()))
    }

    #[test]
    fn fewer_than_two_arguments_is_a_usage_error() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["/tmp/x.mp3"]).is_err());
        assert_eq!(handle_parse_error(parse(&["só texto"]).unwrap_err()), ExitCode::from(1));
    }

    #[test]
    fn help_and_version_do_not_count_as_success() {
        assert_eq!(handle_parse_error(parse(&["--help"]).unwrap_err()), ExitCode::from(1));
        assert_eq!(handle_parse_error(parse(&["--version"]).unwrap_err()), ExitCode::from(1));
        assert_eq!(handle_parse_error(parse(&[]).unwrap_err()), ExitCode::from(1));
    }

    #[test]
    fn text_starting_with_a_hyphen_is_taken_literally() {
        let args = parse(&["-5 graus hoje", "out.mp3"]).unwrap();
        assert_eq!(args.text, "-5 graus hoje");
        assert_eq!(args.output, PathBuf::from("out.mp3"));

        let args = parse(&["Olá", "-saida.mp3", "--slow"]).unwrap();
        assert_eq!(args.output, PathBuf::from("-saida.mp3"));
        assert!(args.slow);
    }

    #[tokio::test]
    async fn hyphen_text_is_synthesized() {
        let dir = tempfile::TempDir::new().unwrap();
        let output = dir.path().join("frio.mp3");
        let args = parse(&["-5 graus hoje", output.to_str().unwrap()]).unwrap();
        let options = RunOptions::resolve(args, Settings::default());

        let synthesizer = MockSynthesizer::new(MockBehavior::Success);
        run(options, synthesizer.clone()).await.unwrap();
        assert_eq!(synthesizer.calls()[0].text, "-5 graus hoje");
        assert!(output.exists());
    }

    #[test]
    fn extra_positionals_are_ignored() {
        let args = parse(&["Olá", "out.mp3", "sobra"]).unwrap();
        assert_eq!(args.text, "Olá");
        assert_eq!(args.extra, vec!["sobra"]);
    }

    #[test]
    fn defaults_resolve_to_portuguese() {
        let args = parse(&["Olá mundo", "out/audio.mp3"]).unwrap();
        let options = RunOptions::resolve(args, Settings::default());
        assert_eq!(options.language, "pt");
        assert!(!options.slow);
        assert_eq!(options.tld, "com");
        assert_eq!(options.text, "Olá mundo");
    }

    #[test]
    fn flags_override_settings() {
        let mut settings = Settings::default();
        settings.tts.language = "en".to_string();
        settings.tts.tld = "co.uk".to_string();

        let args = parse(&["oi", "a.mp3", "--lang", "pt-br", "--slow"]).unwrap();
        let options = RunOptions::resolve(args, settings);
        assert_eq!(options.language, "pt-br");
        assert_eq!(options.tld, "co.uk");
        assert!(options.slow);
    }

    #[test]
    fn strip_markdown_cleans_text() {
        let args = parse(&["**Olá**\nmundo", "a.mp3", "--strip-markdown"]).unwrap();
        let options = RunOptions::resolve(args, Settings::default());
        assert_eq!(options.text, "Olá mundo");
    }

    #[tokio::test]
    async fn run_writes_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let output = dir.path().join("out").join("audio.mp3");
        let args = parse(&["Olá mundo", output.to_str().unwrap()]).unwrap();
        let options = RunOptions::resolve(args, Settings::default());

        let result = run(options, MockSynthesizer::new(MockBehavior::Success))
            .await
            .unwrap();
        assert!(result.byte_size > 0);
        assert!(output.exists());
    }

    #[tokio::test]
    async fn run_failure_exits_one() {
        let dir = tempfile::TempDir::new().unwrap();
        let output = dir.path().join("audio.mp3");
        let args = parse(&["Olá", output.to_str().unwrap()]).unwrap();
        let options = RunOptions::resolve(args, Settings::default());

        let err = run(options, MockSynthesizer::new(MockBehavior::AlwaysFail("boom".into())))
            .await
            .unwrap_err();
        assert_eq!(report_failure(&err), ExitCode::from(1));
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn blank_text_fails_before_synthesis() {
        let synthesizer = MockSynthesizer::new(MockBehavior::Success);
        let args = parse(&["   ", "/tmp/x.mp3"]).unwrap();
        let options = RunOptions::resolve(args, Settings::default());

        let err = run(options, synthesizer.clone()).await.unwrap_err();
        assert!(matches!(err, ConversionError::InvalidRequest(_)));
        assert_eq!(synthesizer.call_count(), 0);
    }
}
