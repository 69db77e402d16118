use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::flags::Flags;

pub const DEFAULT_PROMPT: &str = ">";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(PathBuf),
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path}:{line}: expected `key = value`")]
    Malformed { path: PathBuf, line: usize },
    #[error("{path}:{line}: `{key}` expects true or false, got `{value}`")]
    InvalidBool {
        path: PathBuf,
        line: usize,
        key: String,
        value: String,
    },
}

/// Settings for one shell session. Read once at start-up; the environment is
/// never touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub prompt: String,
    pub banner: bool,
    pub color: bool,
    pub report_status: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            banner: true,
            color: true,
            report_status: true,
        }
    }
}

impl Config {
    /// `$XDG_CONFIG_HOME/nilush/config`, or the platform equivalent.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("nilush").join("config"))
    }

    /// Builds the session config: defaults, then the config file, then
    /// command-line flags.
    pub fn load(flags: &Flags) -> Result<Self, ConfigError> {
        let mut config = match flags.get_value("config") {
            Some(path) => Self::from_file(Path::new(path))?,
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };
        config.apply_flags(flags);
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound(path.to_path_buf())
            } else {
                ConfigError::Io {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;
        debug!(path = %path.display(), "loading config");
        Self::parse(&content, path)
    }

    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        for (idx, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (key, value) = line.split_once('=').ok_or_else(|| ConfigError::Malformed {
                path: path.to_path_buf(),
                line: idx + 1,
            })?;
            let key = key.trim();
            let value = unquote(value.trim());

            let parse_bool = |value: &str| match value {
                "true" | "yes" | "on" => Ok(true),
                "false" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidBool {
                    path: path.to_path_buf(),
                    line: idx + 1,
                    key: key.to_string(),
                    value: value.to_string(),
                }),
            };

            match key {
                "prompt" => config.prompt = value.to_string(),
                "banner" => config.banner = parse_bool(value)?,
                "color" => config.color = parse_bool(value)?,
                "report_status" => config.report_status = parse_bool(value)?,
                _ => warn!(key, line = idx + 1, "ignoring unknown config key"),
            }
        }

        Ok(config)
    }

    pub fn apply_flags(&mut self, flags: &Flags) {
        if flags.is_set("quiet") {
            self.banner = false;
            self.report_status = false;
        }
        if flags.is_set("no-color") {
            self.color = false;
        }
    }
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Result<Config, ConfigError> {
        Config::parse(content, Path::new("test-config"))
    }

    #[test]
    fn test_defaults() {
        let config = parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.prompt, ">");
        assert!(config.banner && config.color && config.report_status);
    }

    #[test]
    fn test_parse_keys() {
        let config = parse(
            "# niluSH settings\n\
             prompt = \"nilu> \"\n\
             \n\
             banner = false\n\
             color=off\n\
             report_status = yes\n",
        )
        .unwrap();
        assert_eq!(config.prompt, "nilu> ");
        assert!(!config.banner);
        assert!(!config.color);
        assert!(config.report_status);
    }

    #[test]
    fn test_unknown_key_is_ignored() {
        let config = parse("history = 100\n").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_malformed_line() {
        let err = parse("prompt = x\njust words\n").unwrap_err();
        assert!(matches!(err, ConfigError::Malformed { line: 2, .. }));
    }

    #[test]
    fn test_invalid_bool() {
        let err = parse("banner = maybe").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBool { ref key, .. } if key == "banner"));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config");
        fs::write(&path, "prompt = $\n").unwrap();
        assert_eq!(Config::from_file(&path).unwrap().prompt, "$");

        let missing = dir.path().join("missing");
        assert!(matches!(
            Config::from_file(&missing),
            Err(ConfigError::NotFound(_))
        ));
    }

    #[test]
    fn test_flags_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config");
        fs::write(&path, "banner = true\ncolor = true\n").unwrap();

        let mut flags = Flags::new();
        let args: Vec<String> = ["-q", "--no-color", "-c", path.to_str().unwrap()]
            .iter()
            .map(|s| s.to_string())
            .collect();
        flags.parse(&args).unwrap();

        let config = Config::load(&flags).unwrap();
        assert!(!config.banner);
        assert!(!config.color);
        assert!(!config.report_status);
    }
}
