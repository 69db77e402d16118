use std::env;
use std::io::{self, IsTerminal};
use std::process::ExitCode;

use nilush::config::Config;
use nilush::error::ShellError;
use nilush::flags::Flags;
use nilush::input::{EditorSource, ShellCompleter, StreamSource};
use nilush::process::signal;
use nilush::shell::Shell;

fn main() -> ExitCode {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(e) = flags.parse(&args) {
        eprintln!("nilush: {}", e);
        flags.print_help();
        return ExitCode::from(2);
    }

    if flags.is_set("help") {
        flags.print_help();
        return ExitCode::SUCCESS;
    }

    if flags.is_set("version") {
        println!("niluSH {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    nilush::logging::init(flags.is_set("debug"));

    match run(&flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("nilush: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(flags: &Flags) -> Result<(), ShellError> {
    let mut config = Config::load(flags)?;
    config.color = config.color && io::stderr().is_terminal();

    let signals = signal::install()?;
    let mut shell = Shell::new(config).with_signals(signals);

    if shell.config().banner {
        shell.print_banner()?;
    }

    if io::stdin().is_terminal() {
        let completer = ShellCompleter::new(shell.registry().clone(), shell.highlighter());
        let mut source = EditorSource::new(completer)?;
        shell.run(&mut source)?;
        println!();
    } else {
        let stdin = io::stdin();
        let mut source = StreamSource::new(stdin.lock(), io::stdout());
        shell.run(&mut source)?;
    }

    Ok(())
}
