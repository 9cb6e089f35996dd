//! Min/Max-Scans über Positionen und Geschwindigkeiten.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Achsenparallele Bounding-Box in der x/y-Ebene.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds2D {
    pub min: DVec2,
    pub max: DVec2,
}

impl Bounds2D {
    /// Bounding-Box über alle Positionen; `(0,0)-(0,0)` wenn leer.
    pub fn from_positions(positions: impl IntoIterator<Item = DVec2>) -> Self {
        let mut iter = positions.into_iter();
        let Some(first) = iter.next() else {
            return Self::default();
        };
        iter.fold(
            Self {
                min: first,
                max: first,
            },
            |acc, p| Self {
                min: acc.min.min(p),
                max: acc.max.max(p),
            },
        )
    }

    /// Vereinigung zweier Boxen.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Breite und Höhe.
    pub fn size(&self) -> DVec2 {
        self.max - self.min
    }

    /// Mittelpunkt.
    pub fn center(&self) -> DVec2 {
        (self.min + self.max) * 0.5
    }
}

/// Wertebereich der Geschwindigkeiten.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct VelocityRange {
    pub min: f64,
    pub max: f64,
}

impl VelocityRange {
    /// Min/Max über alle Werte; `0..0` wenn leer.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        let mut iter = values.into_iter();
        let Some(first) = iter.next() else {
            return Self::default();
        };
        iter.fold(
            Self {
                min: first,
                max: first,
            },
            |acc, v| Self {
                min: acc.min.min(v),
                max: acc.max.max(v),
            },
        )
    }

    /// Spannweite `max - min`.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}
