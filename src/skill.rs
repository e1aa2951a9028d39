use std::path::{Path, PathBuf};

use crate::error::VaultError;

const SKILL_FILE: &str = "SKILL.md";

/// Usage document for coding assistants, installed by `vault init`.
pub const SKILL_CONTENT: &str = include_str!("SKILL.md");

/// Write the skill document into `dir`, creating it if needed. Overwrites any
/// previous copy. Returns the path written.
pub fn install(dir: &Path) -> Result<PathBuf, VaultError> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(SKILL_FILE);
    std::fs::write(&path, SKILL_CONTENT)?;
    tracing::debug!(path = %path.display(), "installed skill");
    Ok(path)
}
