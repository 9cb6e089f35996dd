//! Streckenbegrenzungen (linker/rechter Rand) als Referenz zur Trajektorie.
//!
//! Begrenzungsdateien kommen in mehreren Layouts vor. Die Erkennung probiert
//! die Layouts in fester Reihenfolge; die erste erfolgreiche Interpretation
//! gewinnt:
//! 1. getrennt: `lx,ly,lz,rx,ry,rz` (≥ 6 Spalten) oder `lx,ly,rx,ry` (≥ 4 Spalten)
//! 2. verschachtelt: `x,y,z[,side]` mit `left`/`L` bzw. `right`/`R`, sonst abwechselnd
//! 3. einzeln: `x,y[,z]`, alles auf den linken Rand

use super::Bounds2D;
use crate::csv::{read_csv_file, CsvOptions, CsvRow};
use anyhow::{bail, Context, Result};
use glam::DVec2;
use std::path::Path;

/// Ein Punkt auf einer Begrenzungslinie.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundaryPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl BoundaryPoint {
    /// Erstellt einen neuen Begrenzungspunkt.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Position in der Ebene.
    pub fn position_2d(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

/// Erkanntes Layout einer Begrenzungsdatei.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryLayout {
    /// Linker und rechter Rand in getrennten Spalten einer Zeile
    Separate,
    /// Ein Punkt pro Zeile, Seite per Typ-Spalte oder abwechselnd
    Interleaved,
    /// Nur eine Begrenzungslinie
    Single,
}

/// Linker und rechter Streckenrand.
#[derive(Debug, Clone)]
pub struct TrackBoundaries {
    left: Vec<BoundaryPoint>,
    right: Vec<BoundaryPoint>,
    /// Anzeige-Schalter für Frontends
    pub visible: bool,
}

impl Default for TrackBoundaries {
    fn default() -> Self {
        Self::new()
    }
}

impl TrackBoundaries {
    /// Erstellt leere, sichtbare Begrenzungen.
    pub fn new() -> Self {
        Self {
            left: Vec::new(),
            right: Vec::new(),
            visible: true,
        }
    }

    /// Linker Rand.
    pub fn left(&self) -> &[BoundaryPoint] {
        &self.left
    }

    /// Rechter Rand.
    pub fn right(&self) -> &[BoundaryPoint] {
        &self.right
    }

    /// Setzt den linken Rand.
    pub fn set_left(&mut self, points: Vec<BoundaryPoint>) {
        self.left = points;
    }

    /// Setzt den rechten Rand.
    pub fn set_right(&mut self, points: Vec<BoundaryPoint>) {
        self.right = points;
    }

    /// Entfernt beide Ränder.
    pub fn clear(&mut self) {
        self.left.clear();
        self.right.clear();
    }

    /// Gibt `true` zurück, wenn keiner der Ränder Punkte hat.
    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }

    /// Bounding-Box über beide Ränder; `(0,0)-(0,0)` wenn leer.
    pub fn bounds(&self) -> Bounds2D {
        Bounds2D::from_positions(
            self.left
                .iter()
                .chain(self.right.iter())
                .map(BoundaryPoint::position_2d),
        )
    }

    /// Lädt Begrenzungen aus einer CSV-Datei und erkennt dabei das Layout.
    pub fn load_from_csv(&mut self, path: &Path, options: &CsvOptions) -> Result<BoundaryLayout> {
        let table = read_csv_file(path)?;
        let layout = self
            .load_from_rows(&table, options)
            .with_context(|| format!("Keine Begrenzungen geladen aus {}", path.display()))?;
        log::info!(
            "Loaded track boundaries ({:?}): left {} / right {} points",
            layout,
            self.left.len(),
            self.right.len()
        );
        Ok(layout)
    }

    /// Interpretiert bereits gelesene CSV-Zeilen als Begrenzungen.
    ///
    /// Jeder Versuch beginnt mit leeren Rändern. Scheitern alle Layouts,
    /// bleiben die Ränder leer.
    pub fn load_from_rows(
        &mut self,
        table: &[CsvRow],
        options: &CsvOptions,
    ) -> Result<BoundaryLayout> {
        let data = table.get(options.first_data_row()..).unwrap_or_default();

        let attempts: [(BoundaryLayout, fn(&mut Self, &[CsvRow]) -> bool); 3] = [
            (BoundaryLayout::Separate, Self::read_separate),
            (BoundaryLayout::Interleaved, Self::read_interleaved),
            (BoundaryLayout::Single, Self::read_single),
        ];

        for (layout, read) in attempts {
            self.clear();
            if read(self, data) {
                return Ok(layout);
            }
        }
        self.clear();
        bail!("Kein bekanntes Begrenzungs-Layout erkannt")
    }

    fn read_separate(&mut self, rows: &[CsvRow]) -> bool {
        for row in rows {
            let parsed = if row.len() >= 6 {
                parse_floats::<6>(row).map(|[lx, ly, lz, rx, ry, rz]| {
                    (
                        BoundaryPoint::new(lx, ly, lz),
                        BoundaryPoint::new(rx, ry, rz),
                    )
                })
            } else if row.len() >= 4 {
                parse_floats::<4>(row).map(|[lx, ly, rx, ry]| {
                    (
                        BoundaryPoint::new(lx, ly, 0.0),
                        BoundaryPoint::new(rx, ry, 0.0),
                    )
                })
            } else {
                None
            };
            if let Some((left, right)) = parsed {
                self.left.push(left);
                self.right.push(right);
            }
        }
        !self.left.is_empty() && !self.right.is_empty()
    }

    fn read_interleaved(&mut self, rows: &[CsvRow]) -> bool {
        for (i, row) in rows.iter().enumerate() {
            if row.len() < 3 {
                continue;
            }
            let Some([x, y, z]) = parse_floats::<3>(row) else {
                continue;
            };
            let point = BoundaryPoint::new(x, y, z);
            match row.get(3).map(String::as_str) {
                Some("left" | "L") => self.left.push(point),
                Some("right" | "R") => self.right.push(point),
                Some(_) => {}
                None if i % 2 == 0 => self.left.push(point),
                None => self.right.push(point),
            }
        }
        !self.is_empty()
    }

    fn read_single(&mut self, rows: &[CsvRow]) -> bool {
        for row in rows {
            if row.len() < 2 {
                continue;
            }
            let Some([x, y]) = parse_floats::<2>(row) else {
                continue;
            };
            let z = match row.get(2) {
                Some(field) => match field.parse::<f64>() {
                    Ok(z) => z,
                    Err(_) => continue,
                },
                None => 0.0,
            };
            self.left.push(BoundaryPoint::new(x, y, z));
        }
        !self.left.is_empty()
    }
}

/// Parst die ersten `N` Felder; `None` wenn eines davon keine Zahl ist.
fn parse_floats<const N: usize>(row: &[String]) -> Option<[f64; N]> {
    let mut values = [0.0; N];
    for (value, field) in values.iter_mut().zip(row.get(..N)?) {
        *value = field.parse().ok()?;
    }
    Some(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csv::parse_csv_str;

    fn load(content: &str) -> (TrackBoundaries, Result<BoundaryLayout>) {
        let mut boundaries = TrackBoundaries::new();
        let result = boundaries.load_from_rows(&parse_csv_str(content), &CsvOptions::default());
        (boundaries, result)
    }

    #[test]
    fn test_separate_six_columns() {
        let (b, layout) =
            load("left_x,left_y,left_z,right_x,right_y,right_z\n0,1,2,3,4,5\n1,1,1,4,4,4\n");
        assert_eq!(layout.unwrap(), BoundaryLayout::Separate);
        assert_eq!(b.left().len(), 2);
        assert_eq!(b.right()[0], BoundaryPoint::new(3.0, 4.0, 5.0));
    }

    #[test]
    fn test_separate_four_columns_sets_z_zero() {
        let (b, layout) = load("lx,ly,rx,ry\n0,1,3,4\n");
        assert_eq!(layout.unwrap(), BoundaryLayout::Separate);
        assert_eq!(b.left()[0], BoundaryPoint::new(0.0, 1.0, 0.0));
        assert_eq!(b.right()[0], BoundaryPoint::new(3.0, 4.0, 0.0));
    }

    #[test]
    fn test_interleaved_with_side_column() {
        // 4. Spalte ist keine Zahl → getrenntes Layout scheitert
        let (b, layout) = load("x,y,z,side\n0,0,0,left\n1,1,0,R\n2,2,0,L\n3,3,0,unknown\n");
        assert_eq!(layout.unwrap(), BoundaryLayout::Interleaved);
        assert_eq!(b.left().len(), 2);
        assert_eq!(b.right().len(), 1);
    }

    #[test]
    fn test_interleaved_alternating_rows() {
        let (b, layout) = load("x,y,z\n0,0,0\n1,1,0\n2,2,0\n");
        assert_eq!(layout.unwrap(), BoundaryLayout::Interleaved);
        assert_eq!(b.left().len(), 2);
        assert_eq!(b.right().len(), 1);
        assert_eq!(b.right()[0].x, 1.0);
    }

    #[test]
    fn test_single_boundary_from_two_columns() {
        let (b, layout) = load("x,y\n0,0\n5,2\n");
        assert_eq!(layout.unwrap(), BoundaryLayout::Single);
        assert_eq!(b.left().len(), 2);
        assert!(b.right().is_empty());
        let bounds = b.bounds();
        assert_eq!(bounds.max, DVec2::new(5.0, 2.0));
    }

    #[test]
    fn test_unrecognized_content_fails_and_stays_empty() {
        let (b, layout) = load("a,b\nfoo,bar\n");
        assert!(layout.is_err());
        assert!(b.is_empty());
        assert_eq!(b.bounds(), Bounds2D::default());
    }
}
