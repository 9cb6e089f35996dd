//! Application State — zentrale Datenhaltung einer Editor-Sitzung.

use super::EditHistory;
use crate::core::{TrackBoundaries, Trajectory};
use crate::shared::EditorOptions;
use std::path::PathBuf;

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktuell bearbeitete Trajektorie
    pub trajectory: Trajectory,
    /// Undo/Redo-History (Command-basiert)
    pub history: EditHistory,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Pfad der geladenen bzw. zuletzt gespeicherten Datei
    pub current_file_path: Option<PathBuf>,
    /// Streckenbegrenzungen als Referenz
    pub boundaries: TrackBoundaries,
    /// Ungespeicherte Änderungen vorhanden
    pub dirty: bool,
    /// Statusmeldung für die UI
    pub status_message: Option<String>,
    /// Aktuell selektierter Punkt
    pub selected_index: Option<usize>,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit vorgegebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            trajectory: Trajectory::new(),
            history: EditHistory::new_with_capacity(options.max_history),
            options,
            current_file_path: None,
            boundaries: TrackBoundaries::new(),
            dirty: false,
            status_message: None,
            selected_index: None,
        }
    }

    /// Gibt die Anzahl der Punkte zurück (für UI-Anzeige)
    pub fn point_count(&self) -> usize {
        self.trajectory.len()
    }

    /// Undo/Redo helpers
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
