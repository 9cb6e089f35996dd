//! Handler für Punkt-Bearbeitung, Selektion und abgelehnte Anfragen.

use crate::app::{AppState, EditCommand};

/// Führt eine Bearbeitung über die History aus.
pub fn execute(state: &mut AppState, command: EditCommand) -> anyhow::Result<()> {
    let description = command.description();
    state
        .history
        .execute(command, &mut state.trajectory)
        .map_err(|e| {
            log::warn!("{} fehlgeschlagen: {}", description, e);
            e
        })?;

    state.dirty = true;
    drop_stale_selection(state);
    log::info!("{}", description);
    state.status_message = Some(description);
    Ok(())
}

/// Leert die Trajektorie. Nicht rückgängig machbar, die History wird verworfen.
pub fn clear_trajectory(state: &mut AppState) {
    state.trajectory.clear();
    state.history.clear();
    state.selected_index = None;
    state.dirty = true;
    state.status_message = Some("Trajektorie geleert".to_string());
    log::info!("Trajektorie geleert");
}

/// Setzt oder entfernt die Selektion.
pub fn select_point(state: &mut AppState, index: Option<usize>) {
    state.selected_index = index;
    let Some(i) = index else {
        return;
    };
    if let Some(point) = state.trajectory.point(i) {
        state.status_message = Some(format!(
            "Punkt {}: ({:.2}, {:.2}, {:.2}) v={:.2} km/h",
            i,
            point.x,
            point.y,
            point.z,
            crate::shared::ms_to_kmh(point.velocity)
        ));
    }
}

/// Meldet eine abgelehnte Anfrage.
pub fn reject(state: &mut AppState, reason: String) {
    log::warn!("Anfrage abgelehnt: {}", reason);
    state.status_message = Some(reason);
}

/// Hebt eine Selektion auf, die nach einer Mutation ins Leere zeigt.
pub(crate) fn drop_stale_selection(state: &mut AppState) {
    if state
        .selected_index
        .is_some_and(|i| i >= state.trajectory.len())
    {
        state.selected_index = None;
    }
}
