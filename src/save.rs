//! Writing text to plain files.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

#[derive(Debug, Clone, Copy, Default)]
pub struct SaveOptions {
    /// Append to the file instead of overwriting it.
    pub append: bool,
    /// Add a `\n` if the text does not already end with one.
    pub ensure_trailing_newline: bool,
}

impl SaveOptions {
    /// Defaults for [`save_text_lines`], which ends files with a newline.
    pub fn for_lines() -> Self {
        SaveOptions {
            append: false,
            ensure_trailing_newline: true,
        }
    }
}

/// Write `text` to `path`, creating parent directories as needed.
pub fn save_text(
    text: &str,
    path: impl AsRef<Path>,
    options: &SaveOptions,
) -> crate::AppResult<PathBuf> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(options.append)
        .truncate(!options.append)
        .open(path)?;

    file.write_all(text.as_bytes())?;
    if options.ensure_trailing_newline && !text.ends_with('\n') {
        file.write_all(b"\n")?;
    }

    debug!(
        "saved {size} bytes to {path}",
        size = text.len(),
        path = path.display()
    );

    Ok(path.to_owned())
}

/// Join `lines` with `newline` and write them to `path`.
pub fn save_text_lines<I, L>(
    lines: I,
    path: impl AsRef<Path>,
    options: &SaveOptions,
    newline: &str,
) -> crate::AppResult<PathBuf>
where
    I: IntoIterator<Item = L>,
    L: AsRef<str>,
{
    let joined = lines
        .into_iter()
        .map(|line| line.as_ref().to_owned())
        .collect::<Vec<_>>()
        .join(newline);
    save_text(&joined, path, options)
}
