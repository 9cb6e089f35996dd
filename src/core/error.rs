//! Fehler bei Index-Verletzungen auf der Trajektorie.

use thiserror::Error;

/// Verletzung einer Index-Invariante.
///
/// Das ist ein Programmierfehler des Aufrufers (z.B. ein Command gegen einen
/// Stand, zu dem er nicht passt). Er wird immer gemeldet, nie geklemmt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrajectoryError {
    #[error("Index {index} außerhalb der Trajektorie (Länge {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Einfüge-Index {index} ungültig (erlaubt 0..={len})")]
    InsertOutOfRange { index: usize, len: usize },

    #[error("Ungültiger Bereich {start}..={end} (Länge {len})")]
    InvalidRange { start: usize, end: usize, len: usize },

    #[error("Bereich {start}..={end} erwartet {expected} Ausgangswerte, vorhanden sind {actual}")]
    RangeValueMismatch {
        start: usize,
        end: usize,
        expected: usize,
        actual: usize,
    },
}
