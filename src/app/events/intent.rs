use std::path::PathBuf;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/CLI ohne direkte Mutationslogik.
///
/// Geschwindigkeiten stehen in m/s; die Umrechnung aus km/h ist Sache des
/// Frontends (siehe `shared::units`).
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Trajektorien-Datei wurde ausgewählt (Laden)
    FileSelected { path: PathBuf },
    /// Unter dem aktuellen Pfad speichern
    SaveRequested,
    /// Speicherpfad wurde ausgewählt (Speichern unter)
    SaveFilePathSelected { path: PathBuf },
    /// Trajektorie leeren (nicht rückgängig machbar)
    ClearRequested,
    /// Punkt wurde in der Ebene verschoben (Drag-Ende)
    PointMoved { index: usize, x: f64, y: f64 },
    /// Neuen Punkt an `index` einfügen
    PointAddRequested {
        index: usize,
        x: f64,
        y: f64,
        velocity: f64,
    },
    /// Punkt löschen
    PointDeleteRequested { index: usize },
    /// Geschwindigkeit eines Punkts setzen
    VelocityChangeRequested { index: usize, velocity: f64 },
    /// Geschwindigkeit eines Bereichs `start..=end` setzen
    RangeVelocityChangeRequested {
        start: usize,
        end: usize,
        velocity: f64,
    },
    /// Undo: Letzte Aktion rückgängig machen
    UndoRequested,
    /// Redo: Rückgängig gemachte Aktion wiederherstellen
    RedoRequested,
    /// Begrenzungs-Datei wurde ausgewählt
    BoundariesFileSelected { path: PathBuf },
    /// Sichtbarkeit der Begrenzungen umschalten
    ToggleBoundariesVisibility,
    /// Punkt selektieren (`None` hebt die Selektion auf)
    PointSelected { index: Option<usize> },
}
