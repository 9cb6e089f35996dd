//! Trajektorienpunkt und sein Datensatz inklusive durchgereichter Zusatzspalten.

use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// Anzahl der unmodellierten Spalten im erweiterten Format (qx, qy, qz, qw).
pub const EXTRA_COLUMN_COUNT: usize = 4;

/// Opake Zusatzspalten einer Zeile, unverändert aus der Quelldatei.
pub type ExtraColumns = [String; EXTRA_COLUMN_COUNT];

/// Ein Wegpunkt der Trajektorie.
///
/// `velocity` steht in der Einheit der Quelldatei (m/s). Ein Punkt hat keine
/// Identität außer seiner Position in der Sequenz.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub velocity: f64,
}

impl TrajectoryPoint {
    /// Erstellt einen neuen Punkt.
    pub fn new(x: f64, y: f64, z: f64, velocity: f64) -> Self {
        Self { x, y, z, velocity }
    }

    /// Position in der Ebene (x, y).
    pub fn position_2d(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Position im Raum (x, y, z).
    pub fn position(&self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }

    /// Kopie mit anderer Geschwindigkeit.
    pub fn with_velocity(self, velocity: f64) -> Self {
        Self { velocity, ..self }
    }
}

/// Punkt plus optionale Zusatzspalten aus einer erweiterten CSV-Zeile.
///
/// Punkt und Zusatzspalten leben im selben Datensatz, damit Einfügen und
/// Entfernen sie nie gegeneinander verschieben können.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrajectoryRecord {
    /// Geometrie und Geschwindigkeit
    pub point: TrajectoryPoint,
    /// Durchgereichte Spalten 3..7 einer 8-Spalten-Zeile
    pub extra_columns: Option<ExtraColumns>,
}

impl TrajectoryRecord {
    /// Datensatz ohne Zusatzspalten.
    pub fn plain(point: TrajectoryPoint) -> Self {
        Self {
            point,
            extra_columns: None,
        }
    }

    /// Datensatz mit Zusatzspalten.
    pub fn extended(point: TrajectoryPoint, extra_columns: ExtraColumns) -> Self {
        Self {
            point,
            extra_columns: Some(extra_columns),
        }
    }
}

impl From<TrajectoryPoint> for TrajectoryRecord {
    fn from(point: TrajectoryPoint) -> Self {
        Self::plain(point)
    }
}
