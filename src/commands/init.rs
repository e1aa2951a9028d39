use anyhow::{Context, Result};

use crate::config::Config;
use crate::skill;

pub fn run(config: &Config) -> Result<()> {
    let dir = config.skill_dir()?;
    let path = skill::install(&dir)
        .with_context(|| format!("Failed to install skill to {}", dir.display()))?;
    println!("Installed skill to {}", path.display());
    Ok(())
}
