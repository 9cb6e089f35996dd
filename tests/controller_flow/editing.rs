use crate::make_state;
use trajectory_editor::{AppCommand, AppController, AppIntent, EditCommand, TrajectoryPoint};

#[test]
fn test_point_moved_executes_and_marks_dirty() {
    let mut controller = AppController::new();
    let mut state = make_state(3);

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointMoved {
                index: 1,
                x: 9.0,
                y: 9.0,
            },
        )
        .expect("PointMoved sollte funktionieren");

    assert_eq!(
        *state.trajectory.point(1).unwrap(),
        TrajectoryPoint::new(9.0, 9.0, 0.0, 5.0)
    );
    assert!(state.dirty);
    assert!(state.can_undo());
    assert_eq!(state.status_message.as_deref(), Some("Move point 1"));
}

#[test]
fn test_delete_rejected_at_minimum_point_count() {
    let mut controller = AppController::new();
    let mut state = make_state(2);

    controller
        .handle_intent(&mut state, AppIntent::PointDeleteRequested { index: 0 })
        .expect("Ablehnung ist kein Fehler");

    assert_eq!(state.point_count(), 2);
    assert!(!state.dirty);
    assert!(!state.can_undo());
    assert!(state
        .status_message
        .as_deref()
        .is_some_and(|m| m.contains("mindestens 2 Punkte")));
}

#[test]
fn test_delete_selected_point_clears_selection_and_undo_restores_point() {
    let mut controller = AppController::new();
    let mut state = make_state(4);

    controller
        .handle_intent(&mut state, AppIntent::PointSelected { index: Some(3) })
        .unwrap();
    assert_eq!(state.selected_index, Some(3));

    controller
        .handle_intent(&mut state, AppIntent::PointDeleteRequested { index: 3 })
        .unwrap();
    assert_eq!(state.point_count(), 3);
    assert_eq!(state.selected_index, None);

    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .unwrap();
    assert_eq!(state.point_count(), 4);
    assert_eq!(state.trajectory.point(3).unwrap().x, 3.0);
}

#[test]
fn test_point_add_uses_new_point_z_option() {
    let mut controller = AppController::new();
    let mut state = make_state(2);
    state.options.new_point_z = 6.5;

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointAddRequested {
                index: 1,
                x: 0.5,
                y: 0.0,
                velocity: 4.0,
            },
        )
        .unwrap();

    assert_eq!(
        *state.trajectory.point(1).unwrap(),
        TrajectoryPoint::new(0.5, 0.0, 6.5, 4.0)
    );
}

#[test]
fn test_small_velocity_change_is_ignored() {
    let mut controller = AppController::new();
    let mut state = make_state(2);

    controller
        .handle_intent(
            &mut state,
            AppIntent::VelocityChangeRequested {
                index: 0,
                velocity: 5.009,
            },
        )
        .unwrap();

    assert_eq!(state.trajectory.point(0).unwrap().velocity, 5.0);
    assert!(!state.can_undo());
}

#[test]
fn test_range_velocity_change_and_invalid_range() {
    let mut controller = AppController::new();
    let mut state = make_state(5);

    controller
        .handle_intent(
            &mut state,
            AppIntent::RangeVelocityChangeRequested {
                start: 1,
                end: 3,
                velocity: 2.0,
            },
        )
        .unwrap();
    let velocities: Vec<f64> = state.trajectory.points().map(|p| p.velocity).collect();
    assert_eq!(velocities, vec![5.0, 2.0, 2.0, 2.0, 5.0]);

    controller
        .handle_intent(
            &mut state,
            AppIntent::RangeVelocityChangeRequested {
                start: 3,
                end: 5,
                velocity: 1.0,
            },
        )
        .unwrap();
    assert_eq!(state.history.len(), 1);
}

#[test]
fn test_execute_command_directly() {
    let mut controller = AppController::new();
    let mut state = make_state(3);

    controller
        .handle_command(
            &mut state,
            AppCommand::ExecuteEdit {
                command: EditCommand::ChangeVelocity {
                    index: 0,
                    old_velocity: 5.0,
                    new_velocity: 8.0,
                },
            },
        )
        .unwrap();
    assert_eq!(state.trajectory.point(0).unwrap().velocity, 8.0);

    // Passt nicht zum Stand: Fehler statt Klemmen
    let result = controller.handle_command(
        &mut state,
        AppCommand::ExecuteEdit {
            command: EditCommand::RemovePoint {
                index: 7,
                record: Default::default(),
            },
        },
    );
    assert!(result.is_err());
    assert_eq!(state.history.len(), 1);
}
