use anyhow::Result;

use crate::store::Store;

pub fn run(store: &impl Store) -> Result<()> {
    let keys = store.list()?;
    if keys.is_empty() {
        println!("No secrets stored. Add one with: vault set <key> <value>");
    } else {
        for key in &keys {
            println!("{}", key);
        }
    }
    Ok(())
}
