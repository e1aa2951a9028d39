use anyhow::Result;

use crate::store::Store;

pub fn run(store: &impl Store, key: &str) -> Result<()> {
    super::check_key(key)?;
    store.delete(key)?;
    println!("Deleted: {}", key);
    Ok(())
}
