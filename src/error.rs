use thiserror::Error;

pub type AppResult<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AppError {
    #[error("Paste content cannot be empty.")]
    EmptyContent,
    #[error("not found")]
    NotFound,
    #[error("storage quota exceeded")]
    QuotaExceeded,
    #[error("storage is disabled")]
    StorageDisabled,
    #[error("invalid storage key '{key}'")]
    InvalidKey { key: String },
    #[error("serialization error")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    #[error("IO error")]
    IO { source: std::io::Error },
}

impl From<std::io::Error> for AppError {
    fn from(source: std::io::Error) -> Self {
        match source.kind() {
            std::io::ErrorKind::NotFound => AppError::NotFound,
            std::io::ErrorKind::StorageFull => AppError::QuotaExceeded,
            std::io::ErrorKind::PermissionDenied | std::io::ErrorKind::ReadOnlyFilesystem => {
                AppError::StorageDisabled
            }
            _ => AppError::IO { source },
        }
    }
}
