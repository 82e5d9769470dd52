//! Local storage for short text pastes.
//!
//! [`PasteStore`] keeps every paste in one JSON array under a single key of a
//! [`Storage`] backend, and [`format`] derives snippets and readable
//! timestamps for display.

use anyhow::Context;
use chrono::{Local, Utc};

pub mod commands;
pub mod config;
pub mod format;
pub mod paste;
pub mod save;
pub mod storage;
pub mod store;

mod error;
pub use error::{AppError, AppResult};

pub use config::Config;
pub use paste::Paste;
pub use storage::{AnyStorage, FileStorage, MemoryStorage, Storage};
pub use store::PasteStore;

use config::StorageKind;

/// Loaded configuration together with the paste store it selects.
pub struct App {
    pub config: Config,
    pub store: PasteStore<AnyStorage>,
}

impl App {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let storage: AnyStorage = match config.storage.kind {
            StorageKind::File => {
                let dir = config.data_dir()?;
                FileStorage::new(dir)
                    .context("failed to open file storage")?
                    .into()
            }
            StorageKind::Memory => MemoryStorage::new().into(),
        };

        let store = PasteStore::with_id_strategy(storage, config.ids);

        Ok(App { config, store })
    }

    /// Format a stored timestamp using the configured display settings.
    pub fn format_date(&self, input: &str) -> String {
        let display = &self.config.display;
        if display.utc {
            format::format_date_in(input, &Utc, &display.date_format)
        } else {
            format::format_date_in(input, &Local, &display.date_format)
        }
    }
}
