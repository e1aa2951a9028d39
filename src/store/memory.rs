//! In-memory `Store` for exercising commands without a keychain.

use std::cell::RefCell;
use std::collections::BTreeMap;

use secrecy::{ExposeSecret, SecretString};

use crate::error::VaultError;
use crate::runner::RunError;
use crate::store::{Result, Store};

const ITEM_NOT_FOUND: i32 = 44;

#[derive(Default)]
pub struct MemoryStore {
    secrets: RefCell<BTreeMap<String, String>>,
}

fn missing() -> RunError {
    RunError::Exited {
        code: Some(ITEM_NOT_FOUND),
        stderr: "The specified item could not be found in the keychain.".into(),
    }
}

impl Store for MemoryStore {
    fn get(&self, name: &str) -> Result<SecretString> {
        self.secrets
            .borrow()
            .get(name)
            .map(|v| SecretString::new(v.clone()))
            .ok_or_else(|| VaultError::NotFoundOrLocked {
                name: name.to_string(),
                source: missing(),
            })
    }

    fn set(&self, name: &str, value: &SecretString) -> Result<()> {
        self.secrets
            .borrow_mut()
            .insert(name.to_string(), value.expose_secret().clone());
        Ok(())
    }

    fn delete(&self, name: &str) -> Result<()> {
        match self.secrets.borrow_mut().remove(name) {
            Some(_) => Ok(()),
            None => Err(VaultError::NotFound {
                name: name.to_string(),
                source: missing(),
            }),
        }
    }

    fn list(&self) -> Result<Vec<String>> {
        Ok(self.secrets.borrow().keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands;

    #[test]
    fn test_set_twice_then_get_yields_latest() {
        let store = MemoryStore::default();
        commands::set::run(&store, "api-key", Some("v1".into())).unwrap();
        commands::set::run(&store, "api-key", Some("v2".into())).unwrap();
        assert_eq!(store.get("api-key").unwrap().expose_secret(), "v2");
        assert_eq!(store.list().unwrap(), vec!["api-key"]);
    }

    #[test]
    fn test_delete_missing_fails_with_not_found() {
        let store = MemoryStore::default();
        let err = commands::delete::run(&store, "missing").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<VaultError>(),
            Some(VaultError::NotFound { .. })
        ));
    }

    #[test]
    fn test_delete_then_get_fails() {
        let store = MemoryStore::default();
        commands::set::run(&store, "token", Some("abc".into())).unwrap();
        commands::delete::run(&store, "token").unwrap();
        assert!(matches!(
            store.get("token").unwrap_err(),
            VaultError::NotFoundOrLocked { .. }
        ));
    }

    #[test]
    fn test_commands_reject_empty_key_before_touching_store() {
        let store = MemoryStore::default();
        assert!(commands::set::run(&store, "", Some("v".into())).is_err());
        assert!(commands::get::run(&store, "").is_err());
        assert!(commands::delete::run(&store, "").is_err());
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_list_command_succeeds_on_empty_store() {
        let store = MemoryStore::default();
        commands::list::run(&store).unwrap();
    }
}
