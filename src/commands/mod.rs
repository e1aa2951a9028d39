pub mod delete;
pub mod get;
pub mod init;
pub mod list;
pub mod set;

use anyhow::{bail, Result};

/// Reject names the keychain would accept but that can never be listed back.
fn check_key(key: &str) -> Result<()> {
    if key.is_empty() {
        bail!("Secret key name must not be empty.");
    }
    Ok(())
}
