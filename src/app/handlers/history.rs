//! Handler für Undo/Redo-Operationen.

use super::editing::drop_stale_selection;
use crate::app::AppState;

/// Führt einen Undo-Schritt aus, falls vorhanden.
pub fn undo(state: &mut AppState) -> anyhow::Result<()> {
    let description = state.history.undo_description();
    if state.history.undo(&mut state.trajectory)? {
        let message = format!("Rückgängig: {}", description.unwrap_or_default());
        log::info!("{}", message);
        state.status_message = Some(message);
        state.dirty = true;
        drop_stale_selection(state);
    } else {
        log::debug!("Undo: nichts zu tun");
    }
    Ok(())
}

/// Führt einen Redo-Schritt aus, falls vorhanden.
pub fn redo(state: &mut AppState) -> anyhow::Result<()> {
    let description = state.history.redo_description();
    if state.history.redo(&mut state.trajectory)? {
        let message = format!("Wiederholt: {}", description.unwrap_or_default());
        log::info!("{}", message);
        state.status_message = Some(message);
        state.dirty = true;
        drop_stale_selection(state);
    } else {
        log::debug!("Redo: nichts zu tun");
    }
    Ok(())
}
