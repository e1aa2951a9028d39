use anyhow::{Context, Result};
use secrecy::SecretString;

use crate::store::Store;

pub fn run(store: &impl Store, key: &str, value: Option<String>) -> Result<()> {
    super::check_key(key)?;

    let secret = match value {
        Some(value) => value,
        None => {
            let secret = rpassword::prompt_password(format!("Value for '{}': ", key))
                .context("Failed to read secret value")?;
            if secret.is_empty() {
                anyhow::bail!("Secret value must not be empty.");
            }
            secret
        }
    };

    store.set(key, &SecretString::new(secret))?;

    println!("Stored: {}", key);
    Ok(())
}
