//! CSV Import/Export als rechteckige Text-Tabelle.
//!
//! Der Codec kennt kein Trajektorien-Format: er liefert Zeilen aus Textfeldern
//! und schreibt sie wieder zurück. Nur Komma als Trennzeichen, kein Quoting.
//! Ein Feld mit eingebettetem Komma wird beim Lesen in zwei Felder zerlegt.

pub mod parser;
pub mod writer;

pub use parser::{parse_csv_str, read_csv_file};
pub use writer::{format_csv, write_csv_file};

/// Eine CSV-Zeile (getrimmte Textfelder in Originalreihenfolge).
pub type CsvRow = Vec<String>;

/// Alle Zeilen einer CSV-Datei.
pub type CsvTable = Vec<CsvRow>;

/// Feste Codec-Konfiguration.
///
/// `has_header` wird nicht aus dem Inhalt geraten: ist es gesetzt, gilt
/// Zeile 0 immer als Kopfzeile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvOptions {
    /// Erste Zeile ist eine Kopfzeile
    pub has_header: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self { has_header: true }
    }
}

impl CsvOptions {
    /// Index der ersten Datenzeile.
    pub fn first_data_row(&self) -> usize {
        usize::from(self.has_header)
    }
}
