use std::env;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use crate::core::commands::{Command, CommandContext, CommandError};
use crate::core::env::EnvironmentView;

static CWD_LOCK: Mutex<()> = Mutex::new(());

/// Serialises tests that read or change the process working directory and
/// puts the directory back when dropped.
pub(crate) struct CwdGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl CwdGuard {
    pub(crate) fn new() -> Self {
        let lock = CWD_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let original = env::current_dir().unwrap();
        Self {
            original,
            _lock: lock,
        }
    }

    pub(crate) fn enter(path: &Path) -> Self {
        let guard = Self::new();
        env::set_current_dir(path).unwrap();
        guard
    }

    pub(crate) fn original(&self) -> &Path {
        &self.original
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.original);
    }
}

/// Runs one built-in against an in-memory output buffer.
pub(crate) fn run_builtin(
    command: &dyn Command,
    args: &[&str],
) -> (Result<(), CommandError>, String) {
    let env = EnvironmentView::new();
    let mut out = Vec::new();
    let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
    let result = {
        let mut ctx = CommandContext::new(&mut out, &env);
        command.execute(&args, &mut ctx)
    };
    (result, String::from_utf8_lossy(&out).into_owned())
}
