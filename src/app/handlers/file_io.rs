//! Handler für Datei-Operationen (Laden, Speichern, Begrenzungen).

use crate::app::AppState;
use crate::core::Trajectory;
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Lädt eine Trajektorie aus dem übergebenen Pfad.
///
/// Bei Fehlschlag bleibt das bisherige Dokument unverändert. Laden ist nicht
/// rückgängig machbar: die History wird geleert.
pub fn load(state: &mut AppState, path: PathBuf) -> anyhow::Result<()> {
    let trajectory = match Trajectory::load_from_csv(&path, &state.options.csv_options()) {
        Ok(trajectory) => trajectory,
        Err(e) => {
            state.status_message = Some(format!("Laden fehlgeschlagen: {:#}", e));
            return Err(e);
        }
    };

    state.status_message = Some(format!(
        "{} Punkte geladen aus {}",
        trajectory.len(),
        path.display()
    ));
    state.trajectory = trajectory;
    state.history.clear();
    state.selected_index = None;
    state.dirty = false;
    state.current_file_path = Some(path);

    if let Some(boundaries_path) = state.options.boundaries_path.clone() {
        if let Err(e) = load_boundaries_from(state, &boundaries_path) {
            log::warn!("Begrenzungen nicht geladen: {:#}", e);
        }
    }
    Ok(())
}

/// Speichert die Trajektorie.
///
/// `None` speichert unter dem aktuell bekannten Pfad.
/// `Some(p)` speichert explizit unter dem neuen Pfad `p`.
pub fn save(state: &mut AppState, path: Option<PathBuf>) -> anyhow::Result<()> {
    let path = path
        .or_else(|| state.current_file_path.clone())
        .context("Kein Speicherpfad bekannt")?;

    if let Err(e) = state.trajectory.save_to_csv(&path) {
        state.status_message = Some(format!("Speichern fehlgeschlagen: {:#}", e));
        return Err(e);
    }

    state.trajectory.set_modified(false);
    state.dirty = false;
    state.status_message = Some(format!("Gespeichert: {}", path.display()));
    log::info!("File saved as: {}", path.display());
    state.current_file_path = Some(path);
    Ok(())
}

/// Lädt Streckenbegrenzungen aus dem übergebenen Pfad.
pub fn load_boundaries(state: &mut AppState, path: PathBuf) -> anyhow::Result<()> {
    load_boundaries_from(state, &path)
}

/// Schaltet die Sichtbarkeit der Begrenzungen um.
pub fn toggle_boundaries_visibility(state: &mut AppState) {
    state.boundaries.visible = !state.boundaries.visible;
}

fn load_boundaries_from(state: &mut AppState, path: &Path) -> anyhow::Result<()> {
    let layout = state
        .boundaries
        .load_from_csv(path, &state.options.csv_options())?;
    state.status_message = Some(format!(
        "Begrenzungen geladen ({:?}): links {}, rechts {}",
        layout,
        state.boundaries.left().len(),
        state.boundaries.right().len()
    ));
    Ok(())
}
