//! Configuration management for quill
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. CLI flag / QUILL_EDITOR environment variable (clap resolves both)
//! 2. Config file (~/.config/quill/config.toml)
//! 3. VISUAL / EDITOR environment variables
//! 4. Built-in default ("vi")

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Editor-related configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Command used to edit review bodies
    pub command: Option<String>,
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Editor configuration
    pub editor: EditorConfig,
}

impl Config {
    /// Load configuration from the default config file location
    ///
    /// Returns default config if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();

        if let Some(path) = config_path {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &PathBuf) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(Error::Io)?;
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Get the default config file path
    ///
    /// Returns `~/.config/quill/config.toml` on Unix
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("quill").join("config.toml"))
    }

    /// Apply CLI flag overrides
    pub fn with_cli_overrides(mut self, editor: Option<String>) -> Self {
        if let Some(command) = editor {
            self.editor.command = Some(command);
        }

        self
    }

    /// Load configuration with all overrides applied
    pub fn load_with_overrides(editor: Option<String>) -> Result<Self> {
        Ok(Self::load()?.with_cli_overrides(editor))
    }

    /// Resolve the command used to edit review bodies
    ///
    /// Falls back to VISUAL, then EDITOR, then "vi" when neither the
    /// CLI, the environment, nor the config file named an editor.
    pub fn editor_command(&self) -> String {
        if let Some(ref command) = self.editor.command {
            let command = command.trim();
            if !command.is_empty() {
                return command.to_string();
            }
        }

        for var in ["VISUAL", "EDITOR"] {
            if let Ok(command) = std::env::var(var) {
                let command = command.trim().to_string();
                if !command.is_empty() {
                    return command;
                }
            }
        }

        "vi".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override_wins() {
        let config = Config::default().with_cli_overrides(Some("nano".to_string()));
        assert_eq!(config.editor_command(), "nano");
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
[editor]
command = "code --wait"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.editor.command, Some("code --wait".to_string()));
        assert_eq!(config.editor_command(), "code --wait");
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.editor.command.is_none());
    }

    #[test]
    fn test_blank_configured_command_is_ignored() {
        let config = Config {
            editor: EditorConfig {
                command: Some("   ".to_string()),
            },
        };
        // Falls through to the environment or the built-in default,
        // never to an unrunnable blank command.
        assert!(!config.editor_command().trim().is_empty());
    }
}
