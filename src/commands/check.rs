use std::io::Write;

use anyhow::bail;

use crate::App;

pub fn run(app: &mut App, out: &mut impl Write) -> anyhow::Result<()> {
    if !app.store.storage_available() {
        writeln!(out, "unavailable")?;
        bail!("paste storage is not writable");
    }

    writeln!(out, "available")?;
    Ok(())
}
