//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::ResetCameraRequested => vec![AppCommand::ResetCamera],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::CameraPan { delta } => vec![AppCommand::PanCamera { delta }],
        AppIntent::CameraZoom {
            factor,
            focus_world,
        } => vec![AppCommand::ZoomCamera {
            factor,
            focus_world,
        }],

        AppIntent::VertexDragStarted { index } => vec![AppCommand::BeginVertexDrag { index }],
        AppIntent::VertexDragMoved { world_pos } => {
            vec![AppCommand::UpdateVertexDrag { world_pos }]
        }
        AppIntent::VertexDragEnded => vec![AppCommand::EndVertexDrag],
        AppIntent::VertexHoverChanged { index } => vec![AppCommand::SetHoveredVertex { index }],

        AppIntent::OverlayToggled { overlay } => vec![AppCommand::ToggleOverlay { overlay }],
        AppIntent::VertexCountChanged { count } => {
            if count == state.figure.vertex_count() {
                // Slider meldet gelegentlich den unveränderten Wert
                return Vec::new();
            }
            // Laufenden Drag beenden bevor die Punkte neu aufgebaut werden
            vec![
                AppCommand::EndVertexDrag,
                AppCommand::SetVertexCount { count },
            ]
        }
        AppIntent::FigureResetRequested => {
            vec![AppCommand::EndVertexDrag, AppCommand::ResetFigure]
        }
    }
}

#[cfg(test)]
mod tests;
