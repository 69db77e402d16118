use std::collections::BTreeMap;
use std::env;
use std::fs;

use rustyline::completion::Pair;

use crate::core::commands::BuiltinRegistry;

#[derive(Clone)]
enum Origin {
    Builtin(&'static str),
    Path,
}

/// Command-word candidates: the built-ins plus every executable found on
/// `PATH` when the list was last refreshed.
#[derive(Clone)]
pub struct CommandCompleter {
    commands: BTreeMap<String, Origin>,
}

impl CommandCompleter {
    pub fn new(builtins: &BuiltinRegistry) -> Self {
        let mut completer = Self {
            commands: BTreeMap::new(),
        };
        completer.refresh_commands(builtins);
        completer
    }

    pub fn refresh_commands(&mut self, builtins: &BuiltinRegistry) {
        self.commands.clear();
        self.add_path_commands();
        self.add_builtin_commands(builtins);
    }

    fn add_builtin_commands(&mut self, builtins: &BuiltinRegistry) {
        for name in builtins.names() {
            let summary = builtins.get(name).map(|cmd| cmd.summary()).unwrap_or("");
            self.commands
                .insert(name.to_string(), Origin::Builtin(summary));
        }
    }

    fn add_path_commands(&mut self) {
        let Some(path_var) = env::var_os("PATH") else {
            return;
        };
        for dir in env::split_paths(&path_var) {
            let Ok(entries) = fs::read_dir(dir) else {
                continue;
            };
            for entry in entries.filter_map(Result::ok) {
                let is_candidate = entry
                    .file_type()
                    .map(|t| t.is_file() || t.is_symlink())
                    .unwrap_or(false);
                if !is_candidate {
                    continue;
                }
                if let Some(name) = entry.file_name().to_str() {
                    self.commands.insert(name.to_string(), Origin::Path);
                }
            }
        }
    }

    pub fn complete_command(&self, input: &str) -> Vec<Pair> {
        self.commands
            .range(input.to_string()..)
            .take_while(|(name, _)| name.starts_with(input))
            .map(|(name, origin)| Pair {
                display: match origin {
                    Origin::Builtin(summary) => format!("{}  ({})", name, summary),
                    Origin::Path => name.clone(),
                },
                replacement: format!("{} ", name),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_are_candidates() {
        let completer = CommandCompleter::new(&BuiltinRegistry::new());
        let pairs = completer.complete_command("to");
        let touch = pairs
            .iter()
            .find(|p| p.replacement == "touch ")
            .expect("touch should be offered");
        assert!(touch.display.starts_with("touch  ("));
    }

    #[test]
    fn test_prefix_filtering() {
        let completer = CommandCompleter::new(&BuiltinRegistry::new());
        for pair in completer.complete_command("pw") {
            assert!(pair.replacement.starts_with("pw"));
        }
        assert!(completer.complete_command("zzzznotacommand").is_empty());
    }
}
