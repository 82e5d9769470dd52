use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod check;
pub mod delete;
pub mod list;
pub mod new;
pub mod save;
pub mod show;

#[derive(Debug, Parser)]
#[command(name = "save-text", version, about = "Save and browse short text pastes")]
pub struct Cli {
    /// Path to a TOML config file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a new paste.
    New(new::Args),
    /// List saved pastes, newest first.
    List,
    /// Print the content of a paste.
    Show { id: String },
    /// Delete a paste.
    Delete { id: String },
    /// Check that paste storage is writable.
    Check,
    /// Save text to a file.
    Save(save::Args),
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_store_commands() {
        let cli = Cli::try_parse_from(["save-text", "--config", "c.toml", "show", "abc"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("c.toml")));
        assert!(matches!(cli.command, Command::Show { id } if id == "abc"));

        let cli = Cli::try_parse_from(["save-text", "delete", "abc", "--config", "c.toml"]).unwrap();
        assert!(matches!(cli.command, Command::Delete { .. }));
        assert!(cli.config.is_some());
    }

    #[test]
    fn new_requires_content_or_stdin() {
        assert!(Cli::try_parse_from(["save-text", "new"]).is_err());
        assert!(Cli::try_parse_from(["save-text", "new", "--stdin", "text"]).is_err());

        let cli = Cli::try_parse_from(["save-text", "new", "hello", "world"]).unwrap();
        let Command::New(args) = cli.command else { panic!("expected new") };
        assert_eq!(args.content, ["hello", "world"]);
        assert!(!args.stdin);
    }

    #[test]
    fn save_requires_content_or_stdin() {
        assert!(Cli::try_parse_from(["save-text", "save", "file.txt"]).is_err());
        assert!(Cli::try_parse_from(["save-text", "save", "file.txt", "--stdin", "content"]).is_err());

        let cli = Cli::try_parse_from(["save-text", "save", "out.txt", "--append", "a", "b"]).unwrap();
        let Command::Save(args) = cli.command else { panic!("expected save") };
        assert_eq!(args.path, PathBuf::from("out.txt"));
        assert_eq!(args.content, ["a", "b"]);
        assert!(args.append);
        assert_eq!(args.newline, "\n");
    }
}
