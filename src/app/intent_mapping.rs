//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Hier werden Edit-Commands mit den Ausgangswerten aus der Trajektorie
//! gebaut. Anfragen, die nicht zum aktuellen Stand passen, werden zu
//! `AppCommand::RejectRequest` und mutieren nichts.

use super::{AppCommand, AppIntent, AppState, EditCommand};
use crate::core::{TrajectoryError, TrajectoryPoint};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::FileSelected { path } => vec![AppCommand::LoadFile { path }],
        AppIntent::SaveRequested => vec![AppCommand::SaveFile { path: None }],
        AppIntent::SaveFilePathSelected { path } => {
            vec![AppCommand::SaveFile { path: Some(path) }]
        }
        AppIntent::ClearRequested => vec![
            AppCommand::SelectPoint { index: None },
            AppCommand::ClearTrajectory,
        ],
        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],
        AppIntent::BoundariesFileSelected { path } => vec![AppCommand::LoadBoundaries { path }],
        AppIntent::ToggleBoundariesVisibility => vec![AppCommand::ToggleBoundariesVisibility],

        AppIntent::PointSelected { index: None } => vec![AppCommand::SelectPoint { index: None }],
        AppIntent::PointSelected { index: Some(index) } => {
            if index < state.trajectory.len() {
                vec![AppCommand::SelectPoint { index: Some(index) }]
            } else {
                vec![reject(TrajectoryError::IndexOutOfRange {
                    index,
                    len: state.trajectory.len(),
                })]
            }
        }

        AppIntent::PointMoved { index, x, y } => {
            edit_or_reject(EditCommand::move_point_from(&state.trajectory, index, x, y))
        }
        AppIntent::PointAddRequested {
            index,
            x,
            y,
            velocity,
        } => {
            let len = state.trajectory.len();
            if index > len {
                return vec![reject(TrajectoryError::InsertOutOfRange { index, len })];
            }
            let point = TrajectoryPoint::new(x, y, state.options.new_point_z, velocity);
            vec![AppCommand::ExecuteEdit {
                command: EditCommand::AddPoint { index, point },
            }]
        }
        AppIntent::PointDeleteRequested { index } => {
            let min_points = state.options.min_points_for_delete;
            if state.trajectory.len() <= min_points {
                return vec![AppCommand::RejectRequest {
                    reason: format!(
                        "Punkt kann nicht gelöscht werden: mindestens {} Punkte erforderlich",
                        min_points
                    ),
                }];
            }
            let mut commands =
                edit_or_reject(EditCommand::remove_point_from(&state.trajectory, index));
            if state.selected_index == Some(index) {
                commands.insert(0, AppCommand::SelectPoint { index: None });
            }
            commands
        }
        AppIntent::VelocityChangeRequested { index, velocity } => {
            match EditCommand::change_velocity_from(&state.trajectory, index, velocity) {
                Ok(EditCommand::ChangeVelocity { old_velocity, .. })
                    if (old_velocity - velocity).abs() <= state.options.velocity_change_epsilon =>
                {
                    vec![AppCommand::RejectRequest {
                        reason: format!("Geschwindigkeit von Punkt {} unverändert", index),
                    }]
                }
                result => edit_or_reject(result),
            }
        }
        AppIntent::RangeVelocityChangeRequested {
            start,
            end,
            velocity,
        } => edit_or_reject(EditCommand::change_range_velocity_from(
            &state.trajectory,
            start,
            end,
            velocity,
        )),
    }
}

fn edit_or_reject(result: Result<EditCommand, TrajectoryError>) -> Vec<AppCommand> {
    match result {
        Ok(command) => vec![AppCommand::ExecuteEdit { command }],
        Err(e) => vec![reject(e)],
    }
}

fn reject(error: TrajectoryError) -> AppCommand {
    AppCommand::RejectRequest {
        reason: error.to_string(),
    }
}

#[cfg(test)]
mod tests;
