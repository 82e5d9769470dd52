use std::fs;
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use anyhow::{bail, Context};

use super::Storage;
use crate::AppError;

/// Stores each key as a file of the same name inside one directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let dir: PathBuf = dir.into();

        if !dir.exists() {
            fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }

        if !dir.is_dir() {
            bail!("not a directory: {}", dir.display());
        }

        Ok(FileStorage { dir })
    }

    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> crate::AppResult<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key == "." || key == ".." {
            return Err(AppError::InvalidKey {
                key: key.to_owned(),
            });
        }
        Ok(self.dir.join(key))
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> crate::AppResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> crate::AppResult<()> {
        let path = self.path_for(key)?;

        // replace via rename so a crash never leaves a truncated value
        let tmp = self.dir.join(format!(".{key}.{}.tmp", std::process::id()));
        let written = fs::File::create(&tmp).and_then(|mut file| {
            file.write_all(value.as_bytes())?;
            file.sync_all()
        });
        if let Err(e) = written.and_then(|()| fs::rename(&tmp, &path)) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }

        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> crate::AppResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_missing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested").join("data");
        let storage = FileStorage::new(&dir).unwrap();
        assert!(storage.dir().is_dir());
    }

    #[test]
    fn rejects_file_as_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("plain");
        fs::write(&file, "x").unwrap();
        assert!(FileStorage::new(&file).is_err());
    }

    #[test]
    fn round_trips_values_on_disk() {
        let tmp = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(tmp.path()).unwrap();

        assert_eq!(storage.get_item("save-text.pastes").unwrap(), None);
        storage.set_item("save-text.pastes", "[]").unwrap();
        assert_eq!(
            fs::read_to_string(tmp.path().join("save-text.pastes")).unwrap(),
            "[]"
        );
        assert_eq!(
            storage.get_item("save-text.pastes").unwrap().as_deref(),
            Some("[]")
        );

        storage.remove_item("save-text.pastes").unwrap();
        storage.remove_item("save-text.pastes").unwrap();
        assert_eq!(storage.get_item("save-text.pastes").unwrap(), None);
    }

    #[test]
    fn overwrites_through_rename_without_leftovers() {
        let tmp = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(tmp.path()).unwrap();

        storage.set_item("save-text.pastes", &"x".repeat(4096)).unwrap();
        storage.set_item("save-text.pastes", "[]").unwrap();
        assert_eq!(
            storage.get_item("save-text.pastes").unwrap().as_deref(),
            Some("[]")
        );

        let names: Vec<String> = fs::read_dir(tmp.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["save-text.pastes"]);
    }

    #[test]
    fn failed_write_cleans_up_temp_file() {
        let tmp = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(tmp.path()).unwrap();
        storage.set_item("k", "old").unwrap();

        // a directory in the way makes the rename fail
        fs::remove_file(tmp.path().join("k")).unwrap();
        fs::create_dir(tmp.path().join("k")).unwrap();
        fs::write(tmp.path().join("k").join("child"), "x").unwrap();
        assert!(storage.set_item("k", "new").is_err());

        let leftovers = fs::read_dir(tmp.path())
            .unwrap()
            .filter(|entry| {
                entry
                    .as_ref()
                    .unwrap()
                    .file_name()
                    .to_string_lossy()
                    .ends_with(".tmp")
            })
            .count();
        assert_eq!(leftovers, 0);
    }

    #[test]
    fn rejects_keys_that_escape_the_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(tmp.path()).unwrap();
        for key in ["", "..", "a/b", "a\\b"] {
            assert!(matches!(
                storage.set_item(key, "v"),
                Err(AppError::InvalidKey { .. })
            ));
        }
    }
}
