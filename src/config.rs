use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::VaultError;

/// Keychain account that namespaces every secret this tool manages.
pub const ACCOUNT: &str = "vault";

const SECURITY_PATH: &str = "/usr/bin/security";
const TIMEOUT_SECS: u64 = 5;
const CONFIG_ENV: &str = "VAULT_CONFIG";
const CONFIG_DIR: &str = "vault";
const CONFIG_FILE: &str = "config.toml";
const SKILL_SUBDIR: [&str; 3] = [".claude", "skills", "vault"];

/// Process-wide settings. Built once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Path to the `security` binary.
    pub security_path: String,
    /// Upper bound on each `security` call.
    pub timeout_secs: u64,
    /// Directory `init` installs the skill document into. `None` means
    /// `~/.claude/skills/vault`.
    pub skill_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            security_path: SECURITY_PATH.into(),
            timeout_secs: TIMEOUT_SECS,
            skill_dir: None,
        }
    }
}

impl Config {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Resolve the skill directory, falling back to the per-user default.
    pub fn skill_dir(&self) -> Result<PathBuf, VaultError> {
        match &self.skill_dir {
            Some(dir) => Ok(dir.clone()),
            None => {
                let home = dirs::home_dir().ok_or(VaultError::HomeDirUnavailable)?;
                Ok(SKILL_SUBDIR.iter().fold(home, |p, part| p.join(part)))
            }
        }
    }
}

/// Parse a config file. Every field is optional.
pub fn read(path: &Path) -> Result<Config, VaultError> {
    let raw = std::fs::read_to_string(path)?;
    toml::from_str(&raw).map_err(|e| VaultError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load settings for this process.
///
/// `$VAULT_CONFIG` names a file that must exist. Otherwise
/// `<config dir>/vault/config.toml` is used when present, and defaults when not.
pub fn load() -> Result<Config, VaultError> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return read(Path::new(&path));
    }
    match default_path() {
        Some(path) if path.exists() => read(&path),
        _ => Ok(Config::default()),
    }
}

fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(CONFIG_DIR).join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, body: &str) -> PathBuf {
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.security_path, "/usr/bin/security");
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert!(config.skill_dir.is_none());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "timeout_secs = 10\n");
        let config = read(&path).unwrap();
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.security_path, "/usr/bin/security");
    }

    #[test]
    fn test_full_file() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "security_path = \"/opt/security\"\ntimeout_secs = 1\nskill_dir = \"/tmp/skills\"\n",
        );
        let config = read(&path).unwrap();
        assert_eq!(config.security_path, "/opt/security");
        assert_eq!(config.timeout(), Duration::from_secs(1));
        assert_eq!(config.skill_dir().unwrap(), PathBuf::from("/tmp/skills"));
    }

    #[test]
    fn test_unknown_key_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "account = \"someone-else\"\n");
        let err = read(&path).unwrap_err();
        assert!(matches!(err, VaultError::Config { .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = read(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, VaultError::Io(_)));
    }

    #[test]
    fn test_default_skill_dir_is_under_home() {
        if let Some(home) = dirs::home_dir() {
            let dir = Config::default().skill_dir().unwrap();
            assert_eq!(dir, home.join(".claude").join("skills").join("vault"));
        }
    }
}
