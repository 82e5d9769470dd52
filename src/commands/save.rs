use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;

use crate::save::{save_text, save_text_lines, SaveOptions};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Destination file path.
    pub path: PathBuf,

    /// Text fragments to write, one per line.
    #[arg(required_unless_present = "stdin")]
    pub content: Vec<String>,

    /// Read the content to write from standard input.
    #[arg(long, conflicts_with = "content")]
    pub stdin: bool,

    /// Append to the file instead of overwriting it.
    #[arg(long)]
    pub append: bool,

    /// Do not ensure a trailing newline is present in the output.
    #[arg(long)]
    pub no_trailing_newline: bool,

    /// Separator used when joining multiple fragments.
    #[arg(long, default_value = "\n")]
    pub newline: String,
}

pub fn run(args: &Args, mut input: impl Read) -> anyhow::Result<PathBuf> {
    let options = SaveOptions {
        append: args.append,
        ensure_trailing_newline: !args.no_trailing_newline,
    };

    let path = if args.stdin {
        let mut text = String::new();
        input
            .read_to_string(&mut text)
            .context("failed to read standard input")?;
        save_text(&text, &args.path, &options)?
    } else {
        save_text_lines(&args.content, &args.path, &options, &args.newline)?
    };

    Ok(path)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn args(path: PathBuf) -> Args {
        Args {
            path,
            content: Vec::new(),
            stdin: false,
            append: false,
            no_trailing_newline: false,
            newline: "\n".to_owned(),
        }
    }

    #[test]
    fn writes_content_arguments_as_lines() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("cli.txt");
        let args = Args {
            content: vec!["hello".into(), "world".into()],
            ..args(path.clone())
        };
        run(&args, std::io::empty()).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello\nworld\n");
    }

    #[test]
    fn writes_stdin() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("cli.txt");
        let args = Args {
            stdin: true,
            ..args(path.clone())
        };
        run(&args, "hello\nworld".as_bytes()).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello\nworld\n");
    }

    #[test]
    fn appends_without_trailing_newline() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("cli.txt");
        let args = Args {
            content: vec!["a".into()],
            append: true,
            no_trailing_newline: true,
            ..args(path.clone())
        };
        run(&args, std::io::empty()).unwrap();
        run(&args, std::io::empty()).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "aa");
    }
}
