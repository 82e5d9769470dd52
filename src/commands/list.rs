use std::io::Write;

use crate::format::snippet_from;
use crate::App;

pub fn run(app: &App, out: &mut impl Write) -> anyhow::Result<()> {
    let pastes = app.store.list_pastes();

    if pastes.is_empty() {
        writeln!(out, "no pastes saved yet")?;
        return Ok(());
    }

    for paste in pastes {
        // blank first lines fall back to multi-line snippets
        let snippet = snippet_from(&paste.content).replace(['\r', '\n'], " ");
        writeln!(
            out,
            "{id}  {date}  {snippet}",
            id = paste.id,
            date = app.format_date(&paste.created_at),
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::commands::tests_support::memory_app;

    fn output(app: &App) -> String {
        let mut out = Vec::new();
        run(app, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn reports_empty_store() {
        assert_eq!(output(&memory_app()), "no pastes saved yet\n");
    }

    #[test]
    fn lists_newest_first_with_snippets() {
        let mut app = memory_app();
        let older = app
            .store
            .create_paste_at("first line\nsecond", Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap())
            .unwrap();
        let newer = app
            .store
            .create_paste_at("\n  indented", Utc.with_ymd_and_hms(2024, 1, 2, 9, 30, 0).unwrap())
            .unwrap();

        assert_eq!(
            output(&app),
            format!(
                "{}  2024-01-02 09:30  indented\n{}  2024-01-01 09:00  first line\n",
                newer.id, older.id
            )
        );
    }
}
