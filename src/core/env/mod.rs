use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

/// Read-only window onto the process environment.
///
/// Nothing is cached: every call asks the operating system, so built-ins and
/// launched children always see the same block the process currently holds.
/// The shell itself never writes to it.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvironmentView;

impl EnvironmentView {
    pub fn new() -> Self {
        Self
    }

    /// Variables in the order the operating system hands them over.
    pub fn vars(&self) -> impl Iterator<Item = (OsString, OsString)> {
        env::vars_os()
    }

    /// `KEY=VALUE` lines, lossily decoded, in inherited order.
    pub fn entries(&self) -> impl Iterator<Item = String> {
        self.vars().map(|(key, value)| {
            format!("{}={}", key.to_string_lossy(), value.to_string_lossy())
        })
    }

    pub fn current_dir(&self) -> std::io::Result<PathBuf> {
        env::current_dir()
    }
}
