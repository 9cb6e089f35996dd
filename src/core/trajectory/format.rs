//! Abbildung Trajektorie ⇄ CSV-Tabelle.
//!
//! Zwei Formen werden erkannt:
//! - 4 Spalten: `x,y,z,velocity`
//! - 8 Spalten (erweitert): `x,y,z,<c1>,<c2>,<c3>,<c4>,velocity`, wobei c1..c4
//!   (typisch qx,qy,qz,qw) und die Kopfzeile unverändert durchgereicht werden.

use super::Trajectory;
use crate::core::point::ExtraColumns;
use crate::core::{TrajectoryPoint, TrajectoryRecord};
use crate::csv::{read_csv_file, write_csv_file, CsvOptions, CsvRow, CsvTable};
use anyhow::{bail, Context, Result};
use std::path::Path;

/// Kopfzeile für Dokumente im 4-Spalten-Format.
pub const PLAIN_HEADER: [&str; 4] = ["x", "y", "z", "velocity_ms"];

/// Ab dieser Spaltenzahl gilt eine Kopfzeile bzw. Zeile als erweitert.
const EXTENDED_MIN_COLUMNS: usize = 8;
/// Mindestspalten einer Datenzeile.
const PLAIN_MIN_COLUMNS: usize = 4;
/// Erste durchgereichte Spalte im erweiterten Format.
const EXTRA_FIRST_COLUMN: usize = 3;
/// Spalte der Geschwindigkeit im erweiterten Format.
const EXTENDED_VELOCITY_COLUMN: usize = 7;

impl Trajectory {
    /// Lädt eine Trajektorie aus einer CSV-Datei.
    ///
    /// Fehlerhafte Zeilen werden übersprungen. Fehlschlag nur, wenn die Datei
    /// nicht lesbar ist oder kein einziger Punkt übrig bleibt.
    pub fn load_from_csv(path: &Path, options: &CsvOptions) -> Result<Self> {
        let table = read_csv_file(path)?;
        let trajectory = Self::from_csv_rows(&table, options)
            .with_context(|| format!("Keine Trajektorie geladen aus {}", path.display()))?;

        log::info!(
            "Loaded trajectory: {} points ({}) from {}",
            trajectory.len(),
            if trajectory.is_extended() {
                "8 Spalten"
            } else {
                "4 Spalten"
            },
            path.display()
        );
        Ok(trajectory)
    }

    /// Dekodiert eine bereits gelesene CSV-Tabelle.
    pub fn from_csv_rows(table: &[CsvRow], options: &CsvOptions) -> Result<Self> {
        if table.is_empty() {
            bail!("CSV-Tabelle ist leer");
        }

        let mut trajectory = Self::new();
        if options.has_header {
            let header = table[0].clone();
            trajectory.extended = header.len() >= EXTENDED_MIN_COLUMNS;
            trajectory.header = Some(header);
        }

        let mut skipped = 0usize;
        for (line, row) in table.iter().enumerate().skip(options.first_data_row()) {
            match decode_row(row) {
                Some(record) => trajectory.records.push(record),
                None => {
                    skipped += 1;
                    log::debug!("CSV-Zeile {} übersprungen: {:?}", line + 1, row);
                }
            }
        }

        if skipped > 0 {
            log::warn!("{} fehlerhafte CSV-Zeilen übersprungen", skipped);
        }
        if trajectory.records.is_empty() {
            bail!("Keine gültigen Trajektorienpunkte gefunden");
        }

        trajectory.modified = false;
        Ok(trajectory)
    }

    /// Kodiert die Trajektorie als CSV-Tabelle inklusive Kopfzeile.
    pub fn to_csv_rows(&self) -> CsvTable {
        let mut table = Vec::with_capacity(self.records.len() + 1);

        match (&self.header, self.extended) {
            (Some(header), true) => table.push(header.clone()),
            _ => table.push(PLAIN_HEADER.iter().map(|s| s.to_string()).collect()),
        }

        for record in &self.records {
            table.push(self.encode_record(record));
        }
        table
    }

    /// Speichert die Trajektorie als CSV-Datei.
    ///
    /// Das Modified-Flag bleibt unberührt; der Aufrufer setzt es nach Erfolg
    /// zurück.
    pub fn save_to_csv(&self, path: &Path) -> Result<()> {
        write_csv_file(path, &self.to_csv_rows())?;
        log::info!(
            "Saved trajectory: {} points to {}",
            self.len(),
            path.display()
        );
        Ok(())
    }

    fn encode_record(&self, record: &TrajectoryRecord) -> CsvRow {
        let p = &record.point;
        let mut row = Vec::with_capacity(EXTENDED_MIN_COLUMNS);
        row.push(format_float(p.x));
        row.push(format_float(p.y));
        row.push(format_float(p.z));
        if self.extended {
            if let Some(extra) = &record.extra_columns {
                row.extend(extra.iter().cloned());
            }
        }
        row.push(format_float(p.velocity));
        row
    }
}

/// Dekodiert eine Datenzeile; `None` bei zu wenigen Spalten oder ungültigen Zahlen.
fn decode_row(row: &[String]) -> Option<TrajectoryRecord> {
    if row.len() < PLAIN_MIN_COLUMNS {
        return None;
    }
    let x = parse_float(&row[0])?;
    let y = parse_float(&row[1])?;
    let z = parse_float(&row[2])?;

    if row.len() >= EXTENDED_MIN_COLUMNS {
        let velocity = parse_float(&row[EXTENDED_VELOCITY_COLUMN])?;
        let extra: ExtraColumns = std::array::from_fn(|i| row[EXTRA_FIRST_COLUMN + i].clone());
        Some(TrajectoryRecord::extended(
            TrajectoryPoint::new(x, y, z, velocity),
            extra,
        ))
    } else {
        let velocity = parse_float(&row[3])?;
        Some(TrajectoryRecord::plain(TrajectoryPoint::new(x, y, z, velocity)))
    }
}

fn parse_float(field: &str) -> Option<f64> {
    field.parse::<f64>().ok()
}

fn format_float(value: f64) -> String {
    format!("{:.6}", value)
}
