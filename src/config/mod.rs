use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Placeholder token used when none is configured.
pub const DEFAULT_TOKEN: &str = "xoxc-xxx";

/// Persistent settings; every field can be overridden from the command line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub workspace: String,
    #[serde(default = "default_token")]
    pub token: String,
    #[serde(default)]
    pub auth_cookie: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_token() -> String {
    DEFAULT_TOKEN.to_string()
}
fn default_user_agent() -> String {
    "Mozilla/5.0 (X11; Linux x86_64; rv:89.0) Gecko/20100101 Firefox/89.0".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workspace: String::new(),
            token: default_token(),
            auth_cookie: String::new(),
            user_agent: default_user_agent(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".standup-timesheet")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("standup-timesheet.conf")
    }

    /// Load configuration from `path`, or return defaults if it does not exist
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("cannot read {}: {e}", path.display()))
        })?;

        // empty file = all defaults
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    /// Apply command-line overrides on top of the loaded values
    pub fn merge(
        mut self,
        workspace: Option<&String>,
        token: Option<&String>,
        auth_cookie: Option<&String>,
    ) -> Self {
        if let Some(w) = workspace {
            self.workspace = w.clone();
        }
        if let Some(t) = token {
            self.token = t.clone();
        }
        if let Some(c) = auth_cookie {
            self.auth_cookie = c.clone();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_conf(name: &str, content: &str) -> PathBuf {
        let mut path = env::temp_dir();
        path.push(format!("{name}_standup-timesheet.conf"));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn missing_file_gives_defaults() {
        let path = env::temp_dir().join("does_not_exist_standup-timesheet.conf");
        fs::remove_file(&path).ok();
        let cfg = Config::load(&path).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.token, DEFAULT_TOKEN);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let path = temp_conf("partial", "workspace: acme\nauth_cookie: abc\n");
        let cfg = Config::load(&path).unwrap();
        assert_eq!(cfg.workspace, "acme");
        assert_eq!(cfg.auth_cookie, "abc");
        assert_eq!(cfg.token, DEFAULT_TOKEN);
        assert!(cfg.user_agent.starts_with("Mozilla/5.0"));
        fs::remove_file(&path).ok();
    }

    #[test]
    fn invalid_yaml_is_a_config_error() {
        let path = temp_conf("invalid", "workspace: [unclosed\n");
        assert!(matches!(Config::load(&path), Err(AppError::Config(_))));
        fs::remove_file(&path).ok();
    }

    #[test]
    fn cli_values_override_file() {
        let cfg = Config {
            workspace: "file-ws".into(),
            token: "xoxc-file".into(),
            ..Config::default()
        };
        let ws = "cli-ws".to_string();
        let merged = cfg.merge(Some(&ws), None, None);
        assert_eq!(merged.workspace, "cli-ws");
        assert_eq!(merged.token, "xoxc-file");
        assert_eq!(merged.auth_cookie, "");
    }
}
