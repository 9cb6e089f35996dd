//! Export von Lanelet-Rändern als 6-Spalten-Begrenzungs-CSV.

use super::Lanelet;
use crate::core::{BoundaryPoint, TrackBoundaries};
use crate::csv::{write_csv_file, CsvRow, CsvTable};
use anyhow::{bail, Result};
use std::path::Path;

/// Kopfzeile der exportierten Begrenzungsdatei.
pub const BOUNDARY_HEADER: [&str; 6] = [
    "left_x", "left_y", "left_z", "right_x", "right_y", "right_z",
];

/// Hängt die Ränder aller Lanelets in ihrer Reihenfolge aneinander.
pub fn combine_lanelets(lanelets: &[Lanelet]) -> TrackBoundaries {
    let to_points = |nodes: &[super::OsmNode]| {
        nodes
            .iter()
            .map(|n| BoundaryPoint::new(n.local_x, n.local_y, n.elevation))
            .collect::<Vec<_>>()
    };

    let mut boundaries = TrackBoundaries::new();
    boundaries.set_left(lanelets.iter().flat_map(|l| to_points(&l.left)).collect());
    boundaries.set_right(lanelets.iter().flat_map(|l| to_points(&l.right)).collect());
    boundaries
}

/// Baut die Begrenzungstabelle inklusive Kopfzeile.
///
/// Beide Ränder werden zeilenweise gepaart; der kürzere Rand wird mit seinem
/// letzten Punkt aufgefüllt. Fehlt ein Rand ganz, enthält die Tabelle nur
/// die Kopfzeile.
pub fn boundaries_to_rows(boundaries: &TrackBoundaries) -> CsvTable {
    let left = boundaries.left();
    let right = boundaries.right();

    let mut table = vec![BOUNDARY_HEADER.map(String::from).to_vec()];
    let (Some(last_left), Some(last_right)) = (left.last(), right.last()) else {
        return table;
    };

    let rows = left.len().max(right.len());
    for i in 0..rows {
        let l = left.get(i).unwrap_or(last_left);
        let r = right.get(i).unwrap_or(last_right);
        table.push(encode_pair(l, r));
    }
    table
}

/// Schreibt die Begrenzungen als 6-Spalten-CSV.
pub fn write_boundaries_csv(path: &Path, boundaries: &TrackBoundaries) -> Result<()> {
    if boundaries.left().is_empty() || boundaries.right().is_empty() {
        bail!("Begrenzungen unvollständig: linker und rechter Rand werden benötigt");
    }
    let table = boundaries_to_rows(boundaries);
    write_csv_file(path, &table)?;
    log::info!(
        "Begrenzungs-CSV geschrieben: {} Zeilen nach {}",
        table.len() - 1,
        path.display()
    );
    Ok(())
}

fn encode_pair(left: &BoundaryPoint, right: &BoundaryPoint) -> CsvRow {
    [left.x, left.y, left.z, right.x, right.y, right.z]
        .iter()
        .map(|v| format!("{:.6}", v))
        .collect()
}
