use std::io::{Read, Write};

use anyhow::Context;

use crate::App;

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Text of the paste; multiple arguments are joined with spaces.
    #[arg(required_unless_present = "stdin")]
    pub content: Vec<String>,

    /// Read the paste from standard input.
    #[arg(long, conflicts_with = "content")]
    pub stdin: bool,
}

pub fn run(
    app: &mut App,
    args: &Args,
    mut input: impl Read,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let content = if args.stdin {
        let mut buf = String::new();
        input
            .read_to_string(&mut buf)
            .context("failed to read standard input")?;
        buf
    } else {
        args.content.join(" ")
    };

    let paste = app.store.create_paste(&content)?;
    writeln!(out, "{}", paste.id)?;
    Ok(())
}
