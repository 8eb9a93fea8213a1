use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InstallFailure {
    #[error("installer could not be started: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("installer exited with {}", describe_code(.0))]
    ExitStatus(Option<i32>),

    #[error("installer timed out after {0:?}")]
    TimedOut(Duration),
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "a signal".to_string(),
    }
}
