//! Rendering of the session history.

use std::io::Write;

use crate::domain::{AppError, History};

/// Write the history newest first, one block per entry.
pub fn render(history: &History, out: &mut impl Write) -> Result<(), AppError> {
    if history.is_empty() {
        writeln!(out, "No coaching plans generated yet.")?;
        return Ok(());
    }

    writeln!(out, "📚 Coaching History ({} plan(s))", history.len())?;
    for entry in history.view() {
        writeln!(out, "---")?;
        writeln!(out, "{} - {}", entry.timestamp, entry.feature)?;
        writeln!(out, "{} - {}", entry.sport, entry.position)?;
        writeln!(out, "{}", entry.response)?;
    }
    writeln!(out, "---")?;
    Ok(())
}
