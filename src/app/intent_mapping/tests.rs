use super::map_intent_to_commands;
use crate::app::{AppCommand, AppIntent, AppState};
use crate::core::OverlayKind;

#[test]
fn exit_requested_maps_to_request_exit() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::ExitRequested);

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::RequestExit));
}

#[test]
fn drag_lifecycle_intents_map_one_to_one() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::VertexDragStarted { index: 2 });
    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        AppCommand::BeginVertexDrag { index: 2 }
    ));

    let commands = map_intent_to_commands(&state, AppIntent::VertexDragEnded);
    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::EndVertexDrag));
}

#[test]
fn overlay_toggle_maps_one_to_one() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::OverlayToggled {
            overlay: OverlayKind::NinePointCircle,
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        AppCommand::ToggleOverlay {
            overlay: OverlayKind::NinePointCircle
        }
    ));
}

#[test]
fn vertex_count_changed_maps_to_two_commands_in_order() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::VertexCountChanged { count: 5 });

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], AppCommand::EndVertexDrag));
    assert!(matches!(commands[1], AppCommand::SetVertexCount { count: 5 }));
}

#[test]
fn unchanged_vertex_count_maps_to_no_commands() {
    let state = AppState::new();
    let current = state.figure.vertex_count();

    let commands = map_intent_to_commands(&state, AppIntent::VertexCountChanged { count: current });

    assert!(commands.is_empty());
}

#[test]
fn figure_reset_ends_drag_first() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::FigureResetRequested);

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], AppCommand::EndVertexDrag));
    assert!(matches!(commands[1], AppCommand::ResetFigure));
}
