use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use crate::config::{Config, ACCOUNT};
use crate::error::VaultError;
use crate::runner::{CommandRunner, RunError, SystemRunner};
use crate::store::dump::parse_service_names;
use crate::store::{Result, Store};

/// Secret store backed by the macOS `security` tool.
///
/// Every item lives under the reserved account; the secret name is the item's
/// service. Each operation spawns exactly one `security` process and never
/// retries.
pub struct KeychainStore<R = SystemRunner> {
    runner: R,
    program: String,
    timeout: Duration,
}

impl KeychainStore {
    pub fn new(config: &Config) -> Self {
        Self::with_runner(SystemRunner, config)
    }
}

impl<R: CommandRunner> KeychainStore<R> {
    pub fn with_runner(runner: R, config: &Config) -> Self {
        Self {
            runner,
            program: config.security_path.clone(),
            timeout: config.timeout(),
        }
    }

    /// Runs `security` with `args`. Only the subcommand is ever logged.
    fn call(&self, args: &[&str]) -> std::result::Result<String, RunError> {
        let op = args.first().copied().unwrap_or_default();
        self.runner
            .run(&self.program, args, self.timeout)
            .and_then(|output| output.into_stdout())
            .inspect_err(|e| tracing::debug!(op, error = %e, "security call failed"))
    }
}

impl<R: CommandRunner> Store for KeychainStore<R> {
    fn get(&self, name: &str) -> Result<SecretString> {
        tracing::debug!(secret = name, "reading secret");
        let stdout = self
            .call(&["find-generic-password", "-a", ACCOUNT, "-s", name, "-w"])
            .map_err(|source| VaultError::NotFoundOrLocked {
                name: name.to_string(),
                source,
            })?;
        Ok(SecretString::new(stdout.trim_end().to_string()))
    }

    fn set(&self, name: &str, value: &SecretString) -> Result<()> {
        tracing::debug!(secret = name, "writing secret");
        self.call(&[
            "add-generic-password",
            "-a",
            ACCOUNT,
            "-s",
            name,
            "-w",
            value.expose_secret().as_str(),
            "-U",
        ])
        .map_err(|source| VaultError::WriteFailed {
            name: name.to_string(),
            source,
        })?;
        Ok(())
    }

    fn delete(&self, name: &str) -> Result<()> {
        tracing::debug!(secret = name, "deleting secret");
        self.call(&["delete-generic-password", "-a", ACCOUNT, "-s", name])
            .map_err(|source| VaultError::NotFound {
                name: name.to_string(),
                source,
            })?;
        Ok(())
    }

    fn list(&self) -> Result<Vec<String>> {
        let dump = self
            .call(&["dump-keychain"])
            .map_err(|source| VaultError::StoreUnavailable { source })?;
        let names = parse_service_names(&dump, ACCOUNT);
        tracing::debug!(count = names.len(), "listed secrets");
        Ok(names)
    }
}
