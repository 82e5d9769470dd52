pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// A persistent string key-value store.
pub trait Storage {
    /// Get a value by key, or `None` if the key is absent.
    fn get_item(&self, key: &str) -> crate::AppResult<Option<String>>;

    /// Overwrite the value stored under a key.
    fn set_item(&mut self, key: &str, value: &str) -> crate::AppResult<()>;

    /// Remove a key. Removing an absent key is not an error.
    fn remove_item(&mut self, key: &str) -> crate::AppResult<()>;
}

#[derive(Debug, Clone)]
pub enum AnyStorage {
    File(FileStorage),
    Memory(MemoryStorage),
}

impl Storage for AnyStorage {
    fn get_item(&self, key: &str) -> crate::AppResult<Option<String>> {
        match self {
            AnyStorage::File(file) => file.get_item(key),
            AnyStorage::Memory(memory) => memory.get_item(key),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> crate::AppResult<()> {
        match self {
            AnyStorage::File(file) => file.set_item(key, value),
            AnyStorage::Memory(memory) => memory.set_item(key, value),
        }
    }

    fn remove_item(&mut self, key: &str) -> crate::AppResult<()> {
        match self {
            AnyStorage::File(file) => file.remove_item(key),
            AnyStorage::Memory(memory) => memory.remove_item(key),
        }
    }
}

impl From<FileStorage> for AnyStorage {
    fn from(value: FileStorage) -> Self {
        AnyStorage::File(value)
    }
}

impl From<MemoryStorage> for AnyStorage {
    fn from(value: MemoryStorage) -> Self {
        AnyStorage::Memory(value)
    }
}
