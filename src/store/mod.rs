pub mod dump;
pub mod keychain;
#[cfg(test)]
pub mod memory;

use crate::error::VaultError;
use secrecy::SecretString;

pub type Result<T> = std::result::Result<T, VaultError>;

/// Core abstraction for secret storage. Commands interact only with this trait.
pub trait Store {
    fn get(&self, name: &str) -> Result<SecretString>;
    fn set(&self, name: &str, value: &SecretString) -> Result<()>;
    fn delete(&self, name: &str) -> Result<()>;
    fn list(&self) -> Result<Vec<String>>;
}
