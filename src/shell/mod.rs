use std::io::{self, Stderr, Stdout, Write};

use tracing::{debug, info, warn};

mod executor;

pub use executor::{CommandHandler, ExecutionResult, Outcome};

use crate::{
    config::Config,
    core::{commands::BuiltinRegistry, env::EnvironmentView},
    error::ShellError,
    highlight::SyntaxHighlighter,
    input::{LineSource, ReadOutcome},
    process::{signal::SignalState, ChildStatus, Launcher},
};

pub const BANNER: &str = "\nniluSH\nType \"help\" for usage and list of available commands.";

/// The read-eval loop. Holds only what is fixed for the session; the working
/// directory and environment stay with the operating system.
pub struct Shell<O: Write = Stdout, E: Write = Stderr> {
    pub(crate) registry: BuiltinRegistry,
    pub(crate) launcher: Launcher,
    pub(crate) env: EnvironmentView,
    pub(crate) config: Config,
    pub(crate) highlighter: SyntaxHighlighter,
    pub(crate) signals: Option<SignalState>,
    pub(crate) out: O,
    pub(crate) err: E,
}

impl Shell {
    pub fn new(config: Config) -> Self {
        Self::with_writers(config, io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> Shell<O, E> {
    pub fn with_writers(config: Config, out: O, err: E) -> Self {
        Shell {
            registry: BuiltinRegistry::new(),
            launcher: Launcher::new(),
            env: EnvironmentView::new(),
            highlighter: SyntaxHighlighter::new(config.color),
            config,
            signals: None,
            out,
            err,
        }
    }

    pub fn with_signals(mut self, signals: SignalState) -> Self {
        self.signals = Some(signals);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn registry(&self) -> &BuiltinRegistry {
        &self.registry
    }

    pub fn highlighter(&self) -> SyntaxHighlighter {
        self.highlighter
    }

    pub fn into_writers(self) -> (O, E) {
        (self.out, self.err)
    }

    pub fn print_banner(&mut self) -> Result<(), ShellError> {
        writeln!(self.out, "{}", BANNER)?;
        self.out.flush()?;
        Ok(())
    }

    /// Reads and runs lines until the source reports end of input.
    ///
    /// Each line runs to completion, including any child it starts, before
    /// the next prompt. Command failures are reported and the loop carries
    /// on; only a broken input source ends it with an error.
    pub fn run(&mut self, source: &mut dyn LineSource) -> Result<(), ShellError> {
        loop {
            let prompt = self.config.prompt.clone();
            match source.read_line(&prompt)? {
                ReadOutcome::Line(line) => self.handle_line(&line),
                ReadOutcome::Interrupted => {
                    debug!("input line discarded");
                    continue;
                }
                ReadOutcome::Eof => {
                    info!("end of input");
                    break;
                }
            }
        }
        Ok(())
    }

    fn handle_line(&mut self, line: &str) {
        let result = self.execute_line(line);
        // Ctrl-C or Ctrl-\ during the line was aimed at the foreground child.
        let keyboard_signal = self
            .signals
            .as_ref()
            .is_some_and(SignalState::take_pending);

        match result {
            Ok(Outcome::External { command, status }) if !status.success() => {
                debug!(
                    command = %command,
                    code = status.code(),
                    keyboard_signal,
                    "non-zero exit"
                );
                let killed_by_user =
                    keyboard_signal && matches!(status, ChildStatus::Signaled(_));
                if self.config.report_status && !killed_by_user {
                    let message = format!("{}: {}", command, status);
                    self.report(&self.highlighter.highlight_status(&message));
                }
            }
            Ok(_) => {}
            Err(e) => {
                debug!(error = %e, "command failed");
                self.report(&self.highlighter.highlight_error(&e.to_string()));
            }
        }
    }

    fn report(&mut self, line: &str) {
        if let Err(e) = writeln!(self.err, "{}", line).and_then(|_| self.err.flush()) {
            warn!(error = %e, "cannot write to error stream");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::StreamSource;
    use crate::test_support::CwdGuard;
    use std::io::Cursor;

    fn run_script(script: &str) -> (Result<(), ShellError>, String, String, String) {
        let config = Config {
            color: false,
            ..Config::default()
        };
        let mut shell = Shell::with_writers(config, Vec::new(), Vec::new());
        let mut source = StreamSource::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        let result = shell.run(&mut source);
        let (out, err) = shell.into_writers();
        let (_, prompts) = source.into_inner();
        (
            result,
            String::from_utf8_lossy(&out).into_owned(),
            String::from_utf8_lossy(&err).into_owned(),
            String::from_utf8_lossy(&prompts).into_owned(),
        )
    }

    #[test]
    fn test_eof_ends_loop_cleanly() {
        let (result, out, err, prompts) = run_script("");
        assert!(result.is_ok());
        assert!(out.is_empty());
        assert!(err.is_empty());
        assert_eq!(prompts, ">");
    }

    #[test]
    fn test_one_prompt_per_line() {
        let (result, out, _, prompts) = run_script("echo a b c\n\n   \necho -ns a b c\n");
        assert!(result.is_ok());
        assert_eq!(out, "a b c\nabc\n");
        assert_eq!(prompts, ">>>>>");
    }

    #[test]
    fn test_failed_cd_keeps_directory() {
        let cwd = CwdGuard::new();
        let (result, out, err, _) = run_script("cd /definitely/not/a/real/path\npwd\n");
        assert!(result.is_ok());
        assert_eq!(out, format!("{}\n", cwd.original().display()));
        assert_eq!(err, "cd: /definitely/not/a/real/path: no such directory\n");
    }

    #[test]
    fn test_unknown_command_keeps_shell_responsive() {
        let (result, out, err, _) = run_script("zzzznotacommand\necho alive\n");
        assert!(result.is_ok());
        assert_eq!(out, "alive\n");
        assert_eq!(err, "zzzznotacommand: command not found\n");
    }

    #[test]
    fn test_many_builtins_then_eof() {
        let _cwd = CwdGuard::new();
        let script = "help\nbackup\npwd\necho x\nenv\nls\n".repeat(20);
        let (result, out, err, prompts) = run_script(&script);
        assert!(result.is_ok());
        assert!(err.is_empty(), "unexpected errors: {}", err);
        assert_eq!(out.matches("niluSH by").count(), 20);
        assert_eq!(prompts.len(), 20 * 6 + 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_is_reported() {
        let (result, _, err, _) = run_script("false\ntrue\n");
        assert!(result.is_ok());
        assert_eq!(err, "false: exited with status 1\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_quiet_suppresses_status() {
        let config = Config {
            color: false,
            report_status: false,
            ..Config::default()
        };
        let mut shell = Shell::with_writers(config, Vec::new(), Vec::new());
        let mut source = StreamSource::new(Cursor::new(b"false\n".to_vec()), std::io::sink());
        assert!(shell.run(&mut source).is_ok());
        let (_, err) = shell.into_writers();
        assert!(err.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_child_killed_from_keyboard_is_not_reported() {
        let config = Config {
            color: false,
            ..Config::default()
        };
        let script = b"sh -c kill${IFS}-TERM${IFS}$$\n".to_vec();

        let mut shell = Shell::with_writers(config.clone(), Vec::new(), Vec::new())
            .with_signals(SignalState::with_pending(true, false));
        let mut source = StreamSource::new(Cursor::new(script.clone()), std::io::sink());
        assert!(shell.run(&mut source).is_ok());
        let (_, err) = shell.into_writers();
        assert!(err.is_empty(), "unexpected report: {}", String::from_utf8_lossy(&err));

        let mut shell = Shell::with_writers(config, Vec::new(), Vec::new());
        let mut source = StreamSource::new(Cursor::new(script), std::io::sink());
        assert!(shell.run(&mut source).is_ok());
        let (_, err) = shell.into_writers();
        assert_eq!(String::from_utf8_lossy(&err), "sh: terminated by SIGTERM\n");
    }

    #[test]
    fn test_banner() {
        let mut shell = Shell::with_writers(Config::default(), Vec::new(), Vec::new());
        shell.print_banner().unwrap();
        let (out, _) = shell.into_writers();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\nniluSH\nType \"help\" for usage and list of available commands.\n"
        );
    }
}
