use crate::app::EditCommand;
use std::path::PathBuf;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Trajektorie aus Datei laden
    LoadFile { path: PathBuf },
    /// Speichern; `None` = unter dem aktuellen Pfad
    SaveFile { path: Option<PathBuf> },
    /// Trajektorie leeren und History verwerfen
    ClearTrajectory,
    /// Bearbeitung über die History ausführen
    ExecuteEdit { command: EditCommand },
    /// Undo-Schritt
    Undo,
    /// Redo-Schritt
    Redo,
    /// Streckenbegrenzungen laden
    LoadBoundaries { path: PathBuf },
    /// Sichtbarkeit der Begrenzungen umschalten
    ToggleBoundariesVisibility,
    /// Punkt selektieren oder Selektion aufheben
    SelectPoint { index: Option<usize> },
    /// Abgelehnte Anfrage melden (keine Mutation)
    RejectRequest { reason: String },
}
