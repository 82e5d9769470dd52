use std::collections::HashMap;

use super::Storage;
use crate::AppError;

/// In-process storage, mostly useful for tests.
///
/// A quota (in bytes, counting keys and values) plus disabled and read-only
/// switches let callers reproduce the failures a real browser-style store
/// can raise.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
    quota: Option<usize>,
    disabled: bool,
    read_only: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota: usize) -> Self {
        MemoryStorage {
            quota: Some(quota),
            ..Self::default()
        }
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn set_quota(&mut self, quota: Option<usize>) {
        self.quota = quota;
    }

    /// Reject writes and removals while reads keep working.
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn used_bytes_without(&self, key: &str) -> usize {
        self.items
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> crate::AppResult<Option<String>> {
        if self.disabled {
            return Err(AppError::StorageDisabled);
        }
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> crate::AppResult<()> {
        if self.disabled || self.read_only {
            return Err(AppError::StorageDisabled);
        }

        if let Some(quota) = self.quota {
            let needed = self.used_bytes_without(key) + key.len() + value.len();
            if needed > quota {
                return Err(AppError::QuotaExceeded);
            }
        }

        self.items.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> crate::AppResult<()> {
        if self.disabled || self.read_only {
            return Err(AppError::StorageDisabled);
        }
        self.items.remove(key);
        Ok(())
    }
}
