use thiserror::Error;

pub mod launcher;
pub mod signal;

pub use launcher::{ChildProcess, ChildStatus, Launcher};

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("command not found: {0}")]
    CommandNotFound(String),
    #[error("permission denied: {0}")]
    PermissionDenied(String),
    #[error("failed to start {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to wait for {command}: {source}")]
    Wait {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("signal error: {0}")]
    SignalError(String),
}

impl ProcessError {
    pub(crate) fn from_spawn(command: &str, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => ProcessError::CommandNotFound(command.to_string()),
            std::io::ErrorKind::PermissionDenied => {
                ProcessError::PermissionDenied(command.to_string())
            }
            _ => ProcessError::Spawn {
                command: command.to_string(),
                source: err,
            },
        }
    }
}
