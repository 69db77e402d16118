use std::path::{Path, PathBuf};

/// Expands a leading `~` or `~/` to the home directory. Anything else,
/// including `~user`, is returned as written.
#[derive(Clone, Default)]
pub struct PathExpander;

impl PathExpander {
    pub fn new() -> Self {
        Self
    }

    /// `None` only when the path needs the home directory and it cannot be
    /// determined.
    pub fn expand(&self, path: &str) -> Option<PathBuf> {
        if !self.is_home_path(path) {
            return Some(Path::new(path).to_path_buf());
        }
        let mut home = self.home_dir()?;
        let rest = path.strip_prefix("~/").unwrap_or_default();
        for part in rest.split('/').filter(|p| !p.is_empty()) {
            home.push(part);
        }
        Some(home)
    }

    pub fn is_home_path(&self, path: &str) -> bool {
        path == "~" || path.starts_with("~/")
    }

    pub fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_paths_untouched() {
        let expander = PathExpander::new();
        assert_eq!(expander.expand("/tmp"), Some(PathBuf::from("/tmp")));
        assert_eq!(expander.expand("rel/dir"), Some(PathBuf::from("rel/dir")));
        assert_eq!(expander.expand("~other"), Some(PathBuf::from("~other")));
        assert!(!expander.is_home_path("~other"));
    }

    #[test]
    fn test_tilde() {
        let expander = PathExpander::new();
        let Some(home) = dirs::home_dir() else {
            return;
        };
        assert_eq!(expander.expand("~"), Some(home.clone()));
        assert_eq!(expander.expand("~/a//b/"), Some(home.join("a").join("b")));
        assert!(expander.is_home_path("~/a"));
    }
}
