use std::io::Write;

use anyhow::Result;
use secrecy::ExposeSecret;

use crate::store::Store;

/// Prints the bare value, without a trailing newline, so it pipes cleanly.
pub fn run(store: &impl Store, key: &str) -> Result<()> {
    super::check_key(key)?;
    let value = store.get(key)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(value.expose_secret().as_bytes())?;
    stdout.flush()?;
    Ok(())
}
