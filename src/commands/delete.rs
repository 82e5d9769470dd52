use std::io::Write;

use anyhow::bail;

use crate::App;

pub fn run(app: &mut App, id: &str, out: &mut impl Write) -> anyhow::Result<()> {
    if !app.store.delete_paste(id)? {
        bail!("paste not found: {id}");
    }

    writeln!(out, "deleted {id}")?;
    Ok(())
}
