use gloo_storage::{LocalStorage, Storage};
use log::debug;
use shared::ApiError;
use std::cell::RefCell;
use std::collections::HashMap;

/// Storage key holding the bearer token issued by `/auth/login`
pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// Durable string key-value store used for the session token.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), ApiError>;

    fn delete(&self, key: &str);
}

/// Browser `localStorage`
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorageBackend;

impl KeyValueStorage for LocalStorageBackend {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::get::<String>(key).ok()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ApiError> {
        LocalStorage::set(key, value).map_err(|e| {
            debug!("localStorage write for {} failed: {}", key, e);
            ApiError::Storage(e.to_string())
        })
    }

    fn delete(&self, key: &str) {
        LocalStorage::delete(key);
    }
}

/// In-process store for tests and hosts without `localStorage`
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ApiError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}
