//! Use-Case: Viewport-Größe.

use crate::app::AppState;

/// Aktualisiert die Viewport-Größe im View-State.
pub fn resize(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}
