use std::io::Write;

use anyhow::anyhow;

use crate::App;

pub fn run(app: &App, id: &str, out: &mut impl Write) -> anyhow::Result<()> {
    let paste = app
        .store
        .get_paste(id)
        .ok_or_else(|| anyhow!("paste not found: {id}"))?;

    writeln!(out, "{}", paste.content)?;
    Ok(())
}
