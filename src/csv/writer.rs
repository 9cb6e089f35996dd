//! Writer für kommagetrennte Textdateien.

use super::CsvRow;
use anyhow::{Context, Result};
use std::path::Path;

/// Formatiert Zeilen als CSV-Text (eine Zeile pro `\n`, Felder per Komma).
///
/// Felder werden unverändert übernommen: kein Trimmen, kein Quoting.
pub fn format_csv(rows: &[CsvRow]) -> String {
    let mut output = String::new();
    for row in rows {
        output.push_str(&row.join(","));
        output.push('\n');
    }
    output
}

/// Schreibt Zeilen in eine Datei und überschreibt deren bisherigen Inhalt.
pub fn write_csv_file(path: &Path, rows: &[CsvRow]) -> Result<()> {
    std::fs::write(path, format_csv(rows))
        .with_context(|| format!("CSV-Datei nicht schreibbar: {}", path.display()))?;
    log::debug!("CSV geschrieben: {} Zeilen nach {}", rows.len(), path.display());
    Ok(())
}
