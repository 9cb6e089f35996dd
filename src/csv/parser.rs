//! Parser für kommagetrennte Textdateien.

use super::{CsvRow, CsvTable};
use anyhow::{Context, Result};
use std::path::Path;

/// Liest eine CSV-Datei vollständig ein.
///
/// Eine fehlende oder unlesbare Datei ist ein Fehler; was daraus folgt,
/// entscheidet der Aufrufer.
pub fn read_csv_file(path: &Path) -> Result<CsvTable> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("CSV-Datei nicht lesbar: {}", path.display()))?;
    let table = parse_csv_str(&content);
    log::debug!(
        "CSV gelesen: {} Zeilen aus {}",
        table.len(),
        path.display()
    );
    Ok(table)
}

/// Zerlegt CSV-Text in Zeilen aus getrimmten Feldern.
///
/// Leere (oder nur aus Whitespace bestehende) Zeilen werden übersprungen.
/// Ein abschließendes Komma erzeugt kein zusätzliches leeres Feld.
pub fn parse_csv_str(content: &str) -> CsvTable {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(split_line)
        .collect()
}

fn split_line(line: &str) -> CsvRow {
    let line = line.trim_end_matches(['\r', '\n']);
    let line = line.strip_suffix(',').unwrap_or(line);
    line.split(',').map(|field| field.trim().to_string()).collect()
}
