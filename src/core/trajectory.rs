//! Die zentrale Trajektorien-Datenstruktur: geordnete, index-adressierte Punkte.

mod format;

use super::{Bounds2D, TrajectoryError, TrajectoryPoint, TrajectoryRecord, VelocityRange};
use crate::csv::CsvRow;

pub use format::PLAIN_HEADER;

/// Geordnete Punktfolge einer Trajektorie.
///
/// Die Reihenfolge ist die Fahrreihenfolge. Gültige Indizes sind `0..len()`.
/// Jede Mutation setzt `modified`; zurückgesetzt wird das Flag nur von außen
/// (nach erfolgreichem Speichern) oder durch frisches Laden.
#[derive(Debug, Clone, Default)]
pub struct Trajectory {
    records: Vec<TrajectoryRecord>,
    /// Kopfzeile der Quelldatei (falls eine gelesen wurde)
    header: Option<CsvRow>,
    /// Quelle hatte eine Kopfzeile mit mindestens 8 Spalten; bleibt für das Dokument gesetzt
    extended: bool,
    modified: bool,
}

impl Trajectory {
    /// Erstellt eine leere Trajektorie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt eine unveränderte Trajektorie aus Punkten (4-Spalten-Format).
    pub fn from_points(points: impl IntoIterator<Item = TrajectoryPoint>) -> Self {
        Self {
            records: points.into_iter().map(TrajectoryRecord::plain).collect(),
            ..Self::default()
        }
    }

    // ── Lesen ───────────────────────────────────────────────────────

    /// Anzahl der Punkte.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Gibt `true` zurück, wenn keine Punkte vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Punkt an `index`, falls vorhanden.
    pub fn point(&self, index: usize) -> Option<&TrajectoryPoint> {
        self.records.get(index).map(|r| &r.point)
    }

    /// Datensatz (Punkt + Zusatzspalten) an `index`, falls vorhanden.
    pub fn record(&self, index: usize) -> Option<&TrajectoryRecord> {
        self.records.get(index)
    }

    /// Iterator über alle Punkte in Fahrreihenfolge.
    pub fn points(&self) -> impl ExactSizeIterator<Item = &TrajectoryPoint> + '_ {
        self.records.iter().map(|r| &r.point)
    }

    /// Kopie aller Punkte (Snapshot für Anzeige-Schichten).
    pub fn to_points(&self) -> Vec<TrajectoryPoint> {
        self.points().copied().collect()
    }

    /// Alle Datensätze.
    pub fn records(&self) -> &[TrajectoryRecord] {
        &self.records
    }

    /// Kopfzeile der Quelldatei.
    pub fn header(&self) -> Option<&[String]> {
        self.header.as_deref()
    }

    /// Ob das Dokument im erweiterten 8-Spalten-Format gespeichert wird.
    pub fn is_extended(&self) -> bool {
        self.extended
    }

    /// Ob seit dem Laden/Speichern mutiert wurde.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Setzt das Modified-Flag (z.B. nach erfolgreichem Speichern auf `false`).
    pub fn set_modified(&mut self, modified: bool) {
        self.modified = modified;
    }

    /// Bounding-Box über x/y aller Punkte.
    pub fn bounds(&self) -> Bounds2D {
        Bounds2D::from_positions(self.points().map(TrajectoryPoint::position_2d))
    }

    /// Min/Max der Geschwindigkeiten.
    pub fn velocity_range(&self) -> VelocityRange {
        VelocityRange::from_values(self.points().map(|p| p.velocity))
    }

    // ── Mutation ────────────────────────────────────────────────────

    /// Entfernt alle Punkte und vergisst das Quellformat.
    pub fn clear(&mut self) {
        self.records.clear();
        self.header = None;
        self.extended = false;
        self.modified = true;
    }

    /// Hängt einen Punkt an.
    pub fn push(&mut self, point: TrajectoryPoint) {
        self.records.push(TrajectoryRecord::plain(point));
        self.modified = true;
    }

    /// Fügt einen Punkt an `index` ein (`0..=len()`), nachfolgende rücken auf.
    pub fn insert(&mut self, index: usize, point: TrajectoryPoint) -> Result<(), TrajectoryError> {
        self.insert_record(index, TrajectoryRecord::plain(point))
    }

    /// Fügt einen kompletten Datensatz inklusive Zusatzspalten ein.
    pub fn insert_record(
        &mut self,
        index: usize,
        record: TrajectoryRecord,
    ) -> Result<(), TrajectoryError> {
        if index > self.records.len() {
            return Err(TrajectoryError::InsertOutOfRange {
                index,
                len: self.records.len(),
            });
        }
        self.records.insert(index, record);
        self.modified = true;
        Ok(())
    }

    /// Entfernt den Datensatz an `index` und gibt ihn zurück.
    pub fn remove_at(&mut self, index: usize) -> Result<TrajectoryRecord, TrajectoryError> {
        self.check_index(index)?;
        let removed = self.records.remove(index);
        self.modified = true;
        Ok(removed)
    }

    /// Ersetzt den Punkt an `index` vollständig (Zusatzspalten bleiben).
    pub fn update(&mut self, index: usize, point: TrajectoryPoint) -> Result<(), TrajectoryError> {
        self.check_index(index)?;
        self.records[index].point = point;
        self.modified = true;
        Ok(())
    }

    /// Verschiebt den Punkt an `index` in der Ebene; z und Geschwindigkeit bleiben.
    pub fn move_to(&mut self, index: usize, x: f64, y: f64) -> Result<(), TrajectoryError> {
        self.check_index(index)?;
        let point = &mut self.records[index].point;
        point.x = x;
        point.y = y;
        self.modified = true;
        Ok(())
    }

    /// Setzt die Geschwindigkeit eines Punkts.
    pub fn set_velocity(&mut self, index: usize, velocity: f64) -> Result<(), TrajectoryError> {
        self.check_index(index)?;
        self.records[index].point.velocity = velocity;
        self.modified = true;
        Ok(())
    }

    /// Setzt die Geschwindigkeit aller Punkte in `start..=end` auf `velocity`.
    pub fn set_velocity_range(
        &mut self,
        start: usize,
        end: usize,
        velocity: f64,
    ) -> Result<(), TrajectoryError> {
        self.check_range(start, end)?;
        for record in &mut self.records[start..=end] {
            record.point.velocity = velocity;
        }
        self.modified = true;
        Ok(())
    }

    /// Setzt ab `start` jede Geschwindigkeit einzeln aus `velocities`.
    ///
    /// Der gesamte Bereich wird vorab geprüft; bei ungültigem Bereich bleibt
    /// die Trajektorie unverändert.
    pub fn set_velocities(
        &mut self,
        start: usize,
        velocities: &[f64],
    ) -> Result<(), TrajectoryError> {
        let Some(last) = velocities.len().checked_sub(1) else {
            return Ok(());
        };
        self.check_range(start, start + last)?;
        for (record, &velocity) in self.records[start..].iter_mut().zip(velocities) {
            record.point.velocity = velocity;
        }
        self.modified = true;
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<(), TrajectoryError> {
        if index < self.records.len() {
            Ok(())
        } else {
            Err(TrajectoryError::IndexOutOfRange {
                index,
                len: self.records.len(),
            })
        }
    }

    fn check_range(&self, start: usize, end: usize) -> Result<(), TrajectoryError> {
        let len = self.records.len();
        if start > end || end >= len {
            return Err(TrajectoryError::InvalidRange { start, end, len });
        }
        Ok(())
    }
}
