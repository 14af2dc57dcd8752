//! Configuration management for the xCAT client
//!
//! Handles loading, merging and validating the connection settings that end
//! up in a [`ClientConfig`]. Values come from a TOML file and are overridden
//! by environment variables and command-line flags.

use crate::client::ClientConfig;
use crate::error::{Result, XcatError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub mod defaults;

pub use defaults::*;

/// Persisted client configuration
///
/// ```toml
/// master = "https://mgmt.cluster:3001/xcatws"
/// token = "4f0e..."
/// insecure = true
/// timeout_secs = 30
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Management node base URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub master: Option<String>,

    /// xCAT auth token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Skip TLS certificate verification; unset means verify
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insecure: Option<bool>,

    /// Request timeout in seconds; unset means no timeout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Load configuration from the default location
    ///
    /// A missing file is not an error and yields an empty configuration.
    ///
    /// # Errors
    ///
    /// Fails if the config directory cannot be determined or the file exists
    /// but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load configuration from a specific path
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or is not valid TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| XcatError::ConfigRead {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        toml::from_str(&contents).map_err(|e| XcatError::InvalidConfig(e.to_string()))
    }

    /// Save configuration to a specific path
    ///
    /// # Errors
    ///
    /// Fails if the file or its parent directory cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| XcatError::ConfigWrite {
                path: parent.to_path_buf(),
                reason: e.to_string(),
            })?;
        }

        let contents =
            toml::to_string_pretty(self).map_err(|e| XcatError::SerializationError(e.to_string()))?;

        fs::write(path, contents).map_err(|e| XcatError::ConfigWrite {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        // Holds the auth token
        #[cfg(unix)]
        {
            use std::fs::Permissions;
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, Permissions::from_mode(0o600)).map_err(|e| {
                XcatError::ConfigWrite {
                    path: path.to_path_buf(),
                    reason: format!("Failed to set permissions: {e}"),
                }
            })?;
        }

        Ok(())
    }

    /// Get the path to the config file
    ///
    /// `$XDG_CONFIG_HOME/xcat/config.toml`, else `~/.config/xcat/config.toml`.
    ///
    /// # Errors
    ///
    /// Fails if neither `XDG_CONFIG_HOME` nor a home directory is available.
    pub fn config_path() -> Result<PathBuf> {
        let config_home = std::env::var("XDG_CONFIG_HOME")
            .ok()
            .filter(|path| !path.is_empty())
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")));

        config_home
            .ok_or_else(|| {
                XcatError::InvalidConfig(
                    "Could not determine config directory: XDG_CONFIG_HOME not set and no home directory found"
                        .to_string(),
                )
            })
            .map(|path| path.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Merge another config into this one, with other taking precedence
    pub fn merge(&mut self, other: &Self) {
        if let Some(master) = &other.master {
            self.master = Some(master.clone());
        }
        if let Some(token) = &other.token {
            self.token = Some(token.clone());
        }
        if let Some(insecure) = other.insecure {
            self.insecure = Some(insecure);
        }
        if let Some(timeout) = other.timeout_secs {
            self.timeout_secs = Some(timeout);
        }
    }

    /// Validate configuration
    ///
    /// # Errors
    ///
    /// [`XcatError::MissingMaster`] / [`XcatError::MissingToken`] when either
    /// is unset or empty, [`XcatError::InvalidConfig`] for a zero timeout.
    pub fn validate(&self) -> Result<()> {
        if self.master.as_deref().is_none_or(str::is_empty) {
            return Err(XcatError::MissingMaster);
        }

        if self.token.as_deref().is_none_or(str::is_empty) {
            return Err(XcatError::MissingToken);
        }

        if self.timeout_secs == Some(0) {
            return Err(XcatError::InvalidConfig(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Validated connection settings for [`crate::Client::from_config`]
    ///
    /// # Errors
    ///
    /// See [`Config::validate`].
    pub fn client_config(&self) -> Result<ClientConfig> {
        self.validate()?;

        let mut config = ClientConfig::new(
            self.master.clone().unwrap_or_default(),
            self.token.clone().unwrap_or_default(),
            self.insecure.unwrap_or(false),
        );
        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn complete() -> Config {
        Config {
            master: Some("https://mgmt:3001/xcatws".to_string()),
            token: Some("abc123".to_string()),
            insecure: None,
            timeout_secs: None,
        }
    }

    #[test]
    fn test_default_config_is_invalid() {
        let config = Config::default();
        assert!(matches!(config.validate(), Err(XcatError::MissingMaster)));
    }

    #[test]
    fn test_config_validation() {
        assert!(complete().validate().is_ok());

        let mut config = complete();
        config.token = Some(String::new());
        assert!(matches!(config.validate(), Err(XcatError::MissingToken)));

        let mut config = complete();
        config.timeout_secs = Some(0);
        assert!(matches!(config.validate(), Err(XcatError::InvalidConfig(_))));
    }

    #[test]
    fn test_merge_other_wins() {
        let mut base = complete();
        base.timeout_secs = Some(10);

        let overrides = Config {
            token: Some("from-cli".to_string()),
            insecure: Some(true),
            ..Default::default()
        };
        base.merge(&overrides);

        assert_eq!(base.master.as_deref(), Some("https://mgmt:3001/xcatws"));
        assert_eq!(base.token.as_deref(), Some("from-cli"));
        assert_eq!(base.insecure, Some(true));
        assert_eq!(base.timeout_secs, Some(10));
    }

    #[test]
    fn test_merge_can_turn_insecure_off() {
        let mut base = complete();
        base.insecure = Some(true);

        base.merge(&Config::default());
        assert_eq!(base.insecure, Some(true));

        base.merge(&Config {
            insecure: Some(false),
            ..Default::default()
        });
        assert_eq!(base.insecure, Some(false));
        assert!(!base.client_config().unwrap().insecure);
    }

    #[test]
    fn test_insecure_defaults_to_verify() {
        assert!(!complete().client_config().unwrap().insecure);
    }

    #[test]
    fn test_client_config_conversion() {
        let mut config = complete();
        config.insecure = Some(true);
        config.timeout_secs = Some(30);

        let client = config.client_config().unwrap();
        assert_eq!(client.master, "https://mgmt:3001/xcatws");
        assert_eq!(client.token, "abc123");
        assert!(client.insecure);
        assert_eq!(client.timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = complete();
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(&path).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o600);
        }
    }

    #[test]
    fn test_load_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "master = [not toml").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(XcatError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_load_missing_file_is_config_read() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, XcatError::ConfigRead { .. }));
    }
}
