use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use signal_hook::consts::SIGQUIT;
use tracing::debug;

use crate::process::ProcessError;

/// Keeps keyboard signals aimed at the foreground child from killing the
/// shell. Children reset caught handlers on exec, so they still receive the
/// default action.
#[derive(Debug, Clone)]
pub struct SignalState {
    interrupted: Arc<AtomicBool>,
    quit: Arc<AtomicBool>,
}

impl SignalState {
    /// Returns whether SIGINT or SIGQUIT arrived since the last call, and
    /// clears the record.
    pub fn take_pending(&self) -> bool {
        let int = self.interrupted.swap(false, Ordering::SeqCst);
        let quit = self.quit.swap(false, Ordering::SeqCst);
        int || quit
    }

    #[cfg(test)]
    pub(crate) fn with_pending(interrupted: bool, quit: bool) -> Self {
        SignalState {
            interrupted: Arc::new(AtomicBool::new(interrupted)),
            quit: Arc::new(AtomicBool::new(quit)),
        }
    }
}

/// Install the handlers. May only be called once per process.
pub fn install() -> Result<SignalState, ProcessError> {
    let interrupted = Arc::new(AtomicBool::new(false));
    let quit = Arc::new(AtomicBool::new(false));

    let flag = Arc::clone(&interrupted);
    ctrlc::set_handler(move || {
        flag.store(true, Ordering::SeqCst);
    })
    .map_err(|e| ProcessError::SignalError(e.to_string()))?;

    signal_hook::flag::register(SIGQUIT, Arc::clone(&quit))
        .map_err(|e| ProcessError::SignalError(e.to_string()))?;

    debug!("installed SIGINT and SIGQUIT handlers");
    Ok(SignalState { interrupted, quit })
}

pub fn signal_name(signo: i32) -> Option<&'static str> {
    let name = match signo {
        libc::SIGHUP => "SIGHUP",
        libc::SIGINT => "SIGINT",
        libc::SIGQUIT => "SIGQUIT",
        libc::SIGILL => "SIGILL",
        libc::SIGABRT => "SIGABRT",
        libc::SIGFPE => "SIGFPE",
        libc::SIGKILL => "SIGKILL",
        libc::SIGSEGV => "SIGSEGV",
        libc::SIGPIPE => "SIGPIPE",
        libc::SIGALRM => "SIGALRM",
        libc::SIGTERM => "SIGTERM",
        libc::SIGBUS => "SIGBUS",
        libc::SIGUSR1 => "SIGUSR1",
        libc::SIGUSR2 => "SIGUSR2",
        _ => return None,
    };
    Some(name)
}
