use crate::app::{AppCommand, AppIntent, AppState, EditCommand};
use crate::core::{Trajectory, TrajectoryPoint};

use super::map_intent_to_commands;

fn state_with_points(count: usize) -> AppState {
    let mut state = AppState::new();
    state.trajectory = Trajectory::from_points(
        (0..count).map(|i| TrajectoryPoint::new(i as f64, 0.0, 1.0, 5.0)),
    );
    state
}

#[test]
fn save_requested_maps_to_save_file_without_path() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::SaveRequested);

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::SaveFile { path: None }));
}

#[test]
fn point_moved_captures_old_position() {
    let state = state_with_points(3);

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointMoved {
            index: 2,
            x: 7.0,
            y: 8.0,
        },
    );

    assert_eq!(
        commands,
        vec![AppCommand::ExecuteEdit {
            command: EditCommand::MovePoint {
                index: 2,
                old_x: 2.0,
                old_y: 0.0,
                new_x: 7.0,
                new_y: 8.0,
            }
        }]
    );
}

#[test]
fn point_add_uses_configured_z() {
    let mut state = state_with_points(2);
    state.options.new_point_z = 6.5;

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointAddRequested {
            index: 2,
            x: 1.0,
            y: 2.0,
            velocity: 3.0,
        },
    );

    match &commands[..] {
        [AppCommand::ExecuteEdit {
            command: EditCommand::AddPoint { index: 2, point },
        }] => assert_eq!(*point, TrajectoryPoint::new(1.0, 2.0, 6.5, 3.0)),
        other => panic!("Unerwartete Commands: {other:?}"),
    }
}

#[test]
fn point_add_past_end_is_rejected() {
    let state = state_with_points(2);
    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointAddRequested {
            index: 3,
            x: 0.0,
            y: 0.0,
            velocity: 0.0,
        },
    );
    assert!(matches!(commands[..], [AppCommand::RejectRequest { .. }]));
}

#[test]
fn delete_with_two_points_is_rejected() {
    let state = state_with_points(2);
    let commands = map_intent_to_commands(&state, AppIntent::PointDeleteRequested { index: 0 });
    assert!(matches!(commands[..], [AppCommand::RejectRequest { .. }]));
}

#[test]
fn delete_of_selected_point_clears_selection_first() {
    let mut state = state_with_points(3);
    state.selected_index = Some(1);

    let commands = map_intent_to_commands(&state, AppIntent::PointDeleteRequested { index: 1 });

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], AppCommand::SelectPoint { index: None }));
    assert!(matches!(
        commands[1],
        AppCommand::ExecuteEdit {
            command: EditCommand::RemovePoint { index: 1, .. }
        }
    ));
}

#[test]
fn tiny_velocity_change_is_ignored() {
    let state = state_with_points(2);

    let commands = map_intent_to_commands(
        &state,
        AppIntent::VelocityChangeRequested {
            index: 0,
            velocity: 5.005,
        },
    );
    assert!(matches!(commands[..], [AppCommand::RejectRequest { .. }]));

    let commands = map_intent_to_commands(
        &state,
        AppIntent::VelocityChangeRequested {
            index: 0,
            velocity: 6.0,
        },
    );
    assert!(matches!(
        commands[..],
        [AppCommand::ExecuteEdit {
            command: EditCommand::ChangeVelocity { .. }
        }]
    ));
}

#[test]
fn invalid_range_is_rejected() {
    let state = state_with_points(3);
    let commands = map_intent_to_commands(
        &state,
        AppIntent::RangeVelocityChangeRequested {
            start: 2,
            end: 1,
            velocity: 1.0,
        },
    );
    assert!(matches!(commands[..], [AppCommand::RejectRequest { .. }]));
}

#[test]
fn select_out_of_range_is_rejected() {
    let state = state_with_points(1);
    let commands = map_intent_to_commands(&state, AppIntent::PointSelected { index: Some(1) });
    assert!(matches!(commands[..], [AppCommand::RejectRequest { .. }]));
}
