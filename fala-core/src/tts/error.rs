use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SynthesisError {
    #[error("no text to synthesize")]
    EmptyText,

    #[error("request to synthesis service failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("synthesis service returned {status}: {body}")]
    Http { status: StatusCode, body: String },

    #[error("synthesis service returned no audio for chunk {chunk}")]
    EmptyAudio { chunk: usize },

    #[error("{0}")]
    Other(anyhow::Error),
}
