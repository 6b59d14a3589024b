//! Handler für Figur-Mutationen: Drag, Hover, Overlays, Eckenzahl.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::OverlayKind;
use glam::DVec2;

/// Beginnt einen Drag auf dem Eckpunkt `index`.
pub fn begin_vertex_drag(state: &mut AppState, index: usize) {
    use_cases::drag::begin_drag(state, index);
}

/// Setzt den gezogenen Eckpunkt auf die Projektion der Mausposition.
pub fn update_vertex_drag(state: &mut AppState, world_pos: DVec2) {
    use_cases::drag::update_drag(state, world_pos);
}

/// Beendet einen laufenden Drag.
pub fn end_vertex_drag(state: &mut AppState) {
    use_cases::drag::end_drag(state);
}

/// Setzt den Hover-Eckpunkt (nur Darstellung).
pub fn set_hovered_vertex(state: &mut AppState, index: Option<usize>) {
    use_cases::drag::set_hover(state, index);
}

/// Schaltet die Sichtbarkeit eines Overlays um.
pub fn toggle_overlay(state: &mut AppState, overlay: OverlayKind) {
    use_cases::figure::toggle_overlay(state, overlay);
}

/// Setzt die Eckenzahl und baut die Figur neu auf.
pub fn set_vertex_count(state: &mut AppState, count: usize) {
    use_cases::figure::set_vertex_count(state, count);
}

/// Setzt die Figur auf gleichverteilte Ecken zurück.
pub fn reset_figure(state: &mut AppState) {
    use_cases::figure::reset_figure(state);
}
