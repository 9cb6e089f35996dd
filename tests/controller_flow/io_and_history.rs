use crate::{fixture, make_state};
use trajectory_editor::{AppController, AppIntent, AppState, EditorOptions};

#[test]
fn test_load_clears_history_and_dirty_flag() {
    let mut controller = AppController::new();
    let mut state = make_state(3);
    controller
        .handle_intent(
            &mut state,
            AppIntent::VelocityChangeRequested {
                index: 0,
                velocity: 9.0,
            },
        )
        .unwrap();
    assert!(state.dirty);

    controller
        .handle_intent(
            &mut state,
            AppIntent::FileSelected {
                path: fixture("plain_trajectory.csv"),
            },
        )
        .expect("Laden sollte funktionieren");

    assert_eq!(state.point_count(), 5);
    assert!(!state.dirty);
    assert!(!state.can_undo());
    assert_eq!(
        state.current_file_path.as_deref(),
        Some(fixture("plain_trajectory.csv").as_path())
    );
}

#[test]
fn test_failed_load_keeps_current_document() {
    let mut controller = AppController::new();
    let mut state = make_state(3);

    let result = controller.handle_intent(
        &mut state,
        AppIntent::FileSelected {
            path: fixture("does_not_exist.csv"),
        },
    );

    assert!(result.is_err());
    assert_eq!(state.point_count(), 3);
    assert!(state.current_file_path.is_none());
    assert!(state.status_message.is_some());
}

#[test]
fn test_save_as_then_save_clears_dirty_flag() {
    let mut controller = AppController::new();
    let mut state = make_state(3);
    controller
        .handle_intent(
            &mut state,
            AppIntent::PointMoved {
                index: 0,
                x: 1.0,
                y: 1.0,
            },
        )
        .unwrap();

    let path = std::env::temp_dir().join("trajectory_editor_controller_save.csv");
    controller
        .handle_intent(
            &mut state,
            AppIntent::SaveFilePathSelected { path: path.clone() },
        )
        .expect("Speichern unter sollte funktionieren");
    assert!(!state.dirty);
    assert!(!state.trajectory.is_modified());
    assert_eq!(state.current_file_path.as_ref(), Some(&path));

    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .unwrap();
    assert!(state.dirty);
    controller
        .handle_intent(&mut state, AppIntent::SaveRequested)
        .expect("Speichern sollte funktionieren");
    assert!(!state.dirty);

    let content = std::fs::read_to_string(&path).unwrap();
    let _ = std::fs::remove_file(&path);
    assert!(content.starts_with("x,y,z,velocity_ms\n0.000000,0.000000,"));
}

#[test]
fn test_undo_redo_on_empty_history_are_noops() {
    let mut controller = AppController::new();
    let mut state = make_state(2);

    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::RedoRequested)
        .unwrap();

    assert!(!state.dirty);
    assert_eq!(state.point_count(), 2);
    assert!(state.status_message.is_none());
}

#[test]
fn test_redo_status_names_command() {
    let mut controller = AppController::new();
    let mut state = make_state(3);
    controller
        .handle_intent(
            &mut state,
            AppIntent::VelocityChangeRequested {
                index: 2,
                velocity: 1.0,
            },
        )
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::RedoRequested)
        .unwrap();

    assert_eq!(
        state.status_message.as_deref(),
        Some("Wiederholt: Change velocity of point 2")
    );
    assert_eq!(state.trajectory.point(2).unwrap().velocity, 1.0);
}

#[test]
fn test_clear_discards_history() {
    let mut controller = AppController::new();
    let mut state = make_state(3);
    controller
        .handle_intent(&mut state, AppIntent::PointDeleteRequested { index: 0 })
        .unwrap();
    assert!(state.can_undo());

    controller
        .handle_intent(&mut state, AppIntent::ClearRequested)
        .unwrap();
    assert_eq!(state.point_count(), 0);
    assert!(!state.can_undo());
    assert!(state.dirty);
}

#[test]
fn test_boundaries_loaded_with_document_from_options() {
    let options = EditorOptions {
        boundaries_path: Some(fixture("boundaries_separate.csv")),
        ..EditorOptions::default()
    };
    let mut controller = AppController::new();
    let mut state = AppState::with_options(options);

    controller
        .handle_intent(
            &mut state,
            AppIntent::FileSelected {
                path: fixture("extended_trajectory.csv"),
            },
        )
        .unwrap();

    assert_eq!(state.boundaries.left().len(), 3);
    assert!(state.boundaries.visible);

    controller
        .handle_intent(&mut state, AppIntent::ToggleBoundariesVisibility)
        .unwrap();
    assert!(!state.boundaries.visible);
}

#[test]
fn test_load_boundaries_failure_keeps_previous() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_intent(
            &mut state,
            AppIntent::BoundariesFileSelected {
                path: fixture("boundaries_separate.csv"),
            },
        )
        .unwrap();
    assert!(!state.boundaries.is_empty());

    let result = controller.handle_intent(
        &mut state,
        AppIntent::BoundariesFileSelected {
            path: fixture("missing_boundaries.csv"),
        },
    );
    assert!(result.is_err());
    assert_eq!(state.boundaries.right().len(), 3);
}
