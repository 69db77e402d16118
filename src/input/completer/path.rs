use std::fs;
use std::path::{Path, PathBuf};

use rustyline::completion::Pair;

#[derive(Clone, Default)]
pub struct PathCompleter;

impl PathCompleter {
    pub fn new() -> Self {
        Self
    }

    /// Entries matching the partial path `incomplete`, sorted by name.
    /// Dot entries are offered only when the typed prefix starts with `.`.
    pub fn complete_path(&self, incomplete: &str) -> Vec<Pair> {
        let (dir, prefix, shown_dir) = split_input(incomplete);
        let Ok(entries) = fs::read_dir(&dir) else {
            return Vec::new();
        };

        let mut matches: Vec<Pair> = entries
            .filter_map(Result::ok)
            .filter_map(|entry| {
                let name = entry.file_name().to_str()?.to_string();
                if !name.starts_with(prefix) || (name.starts_with('.') && !prefix.starts_with('.')) {
                    return None;
                }
                let is_dir = entry.path().is_dir();
                Some(make_pair(shown_dir, &name, is_dir))
            })
            .collect();

        matches.sort_by(|a, b| a.display.cmp(&b.display));
        matches
    }
}

/// Splits `incomplete` into the directory to read, the file-name prefix to
/// match, and the directory part as the user typed it.
fn split_input(incomplete: &str) -> (PathBuf, &str, &str) {
    match incomplete.rfind('/') {
        Some(idx) => {
            let shown = &incomplete[..=idx];
            let dir = if shown == "/" {
                PathBuf::from("/")
            } else {
                Path::new(shown).to_path_buf()
            };
            (dir, &incomplete[idx + 1..], shown)
        }
        None => (PathBuf::from("."), incomplete, ""),
    }
}

fn make_pair(shown_dir: &str, name: &str, is_dir: bool) -> Pair {
    let full = format!("{}{}", shown_dir, name);
    if is_dir {
        Pair {
            display: format!("{}/", name),
            replacement: format!("{}/", full),
        }
    } else {
        Pair {
            display: name.to_string(),
            replacement: format!("{} ", full),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_input() {
        assert_eq!(split_input("src/ma"), (PathBuf::from("src/"), "ma", "src/"));
        assert_eq!(split_input("ma"), (PathBuf::from("."), "ma", ""));
        assert_eq!(split_input("/"), (PathBuf::from("/"), "", "/"));
    }

    #[test]
    fn test_complete_in_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("docs")).unwrap();
        fs::File::create(dir.path().join("draft.txt")).unwrap();
        fs::File::create(dir.path().join(".dotfile")).unwrap();

        let base = format!("{}/", dir.path().display());
        let pairs = PathCompleter::new().complete_path(&format!("{}d", base));
        let replacements: Vec<&str> = pairs.iter().map(|p| p.replacement.as_str()).collect();
        assert_eq!(
            replacements,
            [format!("{}docs/", base), format!("{}draft.txt ", base)]
        );

        let hidden = PathCompleter::new().complete_path(&format!("{}.d", base));
        assert_eq!(hidden.len(), 1);
        assert_eq!(hidden[0].display, ".dotfile");
    }

    #[test]
    fn test_missing_directory() {
        assert!(PathCompleter::new()
            .complete_path("/definitely/not/a/real/path/x")
            .is_empty());
    }
}
