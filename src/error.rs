use thiserror::Error;

use crate::config::ConfigError;
use crate::process::ProcessError;

/// Failures that end the shell session. Anything a single command can do
/// wrong is a `CommandError` and is reported by the loop instead.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("cannot read input: {0}")]
    Input(#[source] std::io::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Process(#[from] ProcessError),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("flag error: {0}")]
    FlagError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        let err: ShellError = std::io::Error::new(std::io::ErrorKind::Other, "boom").into();
        assert!(matches!(err, ShellError::Io(_)));

        let err: ShellError = ProcessError::SignalError("no handler".into()).into();
        assert_eq!(err.to_string(), "signal error: no handler");

        let err = ShellError::Input(std::io::Error::new(std::io::ErrorKind::Other, "closed"));
        assert_eq!(err.to_string(), "cannot read input: closed");
    }
}
