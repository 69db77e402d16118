use std::fmt;
use std::process::{Child, Command, ExitStatus, Stdio};

use tracing::{debug, warn};

use super::{signal, ProcessError};
use crate::core::env::EnvironmentView;

/// How a launched child ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildStatus {
    Exited(i32),
    Signaled(i32),
}

impl ChildStatus {
    pub fn success(&self) -> bool {
        matches!(self, ChildStatus::Exited(0))
    }

    /// Shell-style status code: the exit code, or `128 + signo`.
    pub fn code(&self) -> i32 {
        match self {
            ChildStatus::Exited(code) => *code,
            ChildStatus::Signaled(signo) => 128 + signo,
        }
    }
}

impl From<ExitStatus> for ChildStatus {
    fn from(status: ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return ChildStatus::Exited(code);
        }
        terminated_by_signal(status)
    }
}

#[cfg(unix)]
fn terminated_by_signal(status: ExitStatus) -> ChildStatus {
    use std::os::unix::process::ExitStatusExt;
    match status.signal() {
        Some(signo) => ChildStatus::Signaled(signo),
        None => ChildStatus::Exited(-1),
    }
}

#[cfg(not(unix))]
fn terminated_by_signal(_status: ExitStatus) -> ChildStatus {
    ChildStatus::Exited(-1)
}

impl fmt::Display for ChildStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChildStatus::Exited(code) => write!(f, "exited with status {}", code),
            ChildStatus::Signaled(signo) => match signal::signal_name(*signo) {
                Some(name) => write!(f, "terminated by {}", name),
                None => write!(f, "terminated by signal {}", signo),
            },
        }
    }
}

/// A running external command.
///
/// Owns the OS handle until the exit status has been collected. Dropping a
/// child that was never waited on blocks until it exits, so a started
/// process is always reaped.
pub struct ChildProcess {
    command: String,
    child: Child,
    reaped: bool,
}

impl ChildProcess {
    pub fn spawn(command: &mut Command, name: &str) -> Result<Self, ProcessError> {
        let child = command
            .spawn()
            .map_err(|e| ProcessError::from_spawn(name, e))?;
        Ok(Self {
            command: name.to_string(),
            child,
            reaped: false,
        })
    }

    pub fn id(&self) -> u32 {
        self.child.id()
    }

    pub fn wait(mut self) -> Result<ChildStatus, ProcessError> {
        let status = self.child.wait().map_err(|e| ProcessError::Wait {
            command: self.command.clone(),
            source: e,
        })?;
        self.reaped = true;
        Ok(status.into())
    }
}

impl Drop for ChildProcess {
    fn drop(&mut self) {
        if !self.reaped {
            if let Err(e) = self.child.wait() {
                warn!(command = %self.command, error = %e, "could not reap child");
            }
        }
    }
}

/// Runs external commands in the foreground.
#[derive(Debug, Clone, Default)]
pub struct Launcher;

impl Launcher {
    pub fn new() -> Self {
        Self
    }

    /// Start `command` with `args`, handing it the full inherited
    /// environment and the shell's terminal, and block until it exits.
    ///
    /// There is no timeout: a child that never exits keeps the shell
    /// waiting.
    pub fn launch(
        &self,
        command: &str,
        args: &[String],
        env: &EnvironmentView,
    ) -> Result<ChildStatus, ProcessError> {
        let mut cmd = Command::new(command);
        cmd.args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .env_clear()
            .envs(env.vars());

        let child = ChildProcess::spawn(&mut cmd, command)?;
        debug!(command, pid = child.id(), "spawned child");

        let status = child.wait()?;
        debug!(command, code = status.code(), "child finished");
        Ok(status)
    }
}
