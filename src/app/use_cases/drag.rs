//! Use-Case: Ziehen eines Eckpunkts entlang der Kreislinie.

use crate::app::AppState;
use glam::DVec2;

/// Beginnt einen Drag auf dem Eckpunkt `index`.
///
/// Ein bereits laufender Drag wird auf den neuen Index umgebunden — es gibt
/// nur einen Zeiger-Strom. Unbekannte Indizes werden ignoriert.
pub fn begin_drag(state: &mut AppState, index: usize) {
    if index >= state.figure.vertex_count() {
        log::warn!("Drag-Start auf unbekanntem Eckpunkt {index} ignoriert");
        return;
    }
    state.figure.drag_index = Some(index);
    log::debug!("Drag gestartet: Eckpunkt {index}");
}

/// Setzt den gezogenen Eckpunkt auf die Projektion der Mausposition auf die
/// Kreislinie.
///
/// Kein aktiver Drag oder Mauszeiger exakt auf dem Kreismittelpunkt
/// (Richtung unbestimmt): keine Mutation.
pub fn update_drag(state: &mut AppState, world_pos: DVec2) {
    let Some(index) = state.figure.drag_index else {
        return;
    };
    let Some(projected) = state.figure.circle.project(world_pos) else {
        return;
    };
    state.figure.points[index] = projected;
}

/// Beendet einen laufenden Drag (Maustaste los oder Viewport verlassen).
pub fn end_drag(state: &mut AppState) {
    if state.figure.drag_index.take().is_some() {
        log::debug!("Drag beendet");
    }
}

/// Setzt den Hover-Eckpunkt. Nur Darstellung, nie Geometrie.
pub fn set_hover(state: &mut AppState, index: Option<usize>) {
    state.figure.hover_index = index.filter(|&i| i < state.figure.vertex_count());
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn update_drag_projects_point_onto_circle() {
        let mut state = AppState::new();
        let before = state.figure.points.clone();
        let center = state.figure.circle.center;
        let radius = state.figure.circle.radius;

        begin_drag(&mut state, 1);
        update_drag(&mut state, center + DVec2::new(100.0, 120.0));

        let moved = state.figure.points[1];
        assert_relative_eq!(moved.distance(center), radius, max_relative = 1e-9);

        // Die anderen Ecken bleiben bitidentisch
        assert_eq!(state.figure.points[0], before[0]);
        assert_eq!(state.figure.points[2], before[2]);
    }

    #[test]
    fn update_drag_to_angle_lands_on_expected_position() {
        let mut state = AppState::new();
        let circle = state.figure.circle;
        let theta: f64 = 1.25;

        begin_drag(&mut state, 0);
        // Mausposition innerhalb des Kreises auf demselben Strahl
        update_drag(
            &mut state,
            circle.center + 40.0 * DVec2::new(theta.cos(), theta.sin()),
        );

        let expected = circle.point_at_angle(theta);
        assert_relative_eq!(state.figure.points[0].x, expected.x, epsilon = 1e-9);
        assert_relative_eq!(state.figure.points[0].y, expected.y, epsilon = 1e-9);
    }

    #[test]
    fn update_drag_without_active_index_is_a_no_op() {
        let mut state = AppState::new();
        let before = state.figure.points.clone();

        update_drag(&mut state, DVec2::new(10.0, 10.0));

        assert_eq!(state.figure.points, before);
    }

    #[test]
    fn update_drag_at_circle_center_is_skipped() {
        let mut state = AppState::new();
        let before = state.figure.points.clone();

        begin_drag(&mut state, 2);
        let center = state.figure.circle.center;
        update_drag(&mut state, center);

        assert_eq!(state.figure.points, before);
        // Drag bleibt aktiv, nur die Mutation entfällt
        assert_eq!(state.figure.drag_index, Some(2));
    }

    #[test]
    fn end_drag_stops_further_updates() {
        let mut state = AppState::new();

        begin_drag(&mut state, 1);
        end_drag(&mut state);
        let before = state.figure.points.clone();

        update_drag(&mut state, DVec2::new(500.0, 500.0));

        assert_eq!(state.figure.drag_index, None);
        assert_eq!(state.figure.points, before);
    }

    #[test]
    fn begin_drag_rebinds_active_target() {
        let mut state = AppState::new();

        begin_drag(&mut state, 0);
        begin_drag(&mut state, 2);

        assert_eq!(state.figure.drag_index, Some(2));
    }

    #[test]
    fn begin_drag_on_invalid_index_is_ignored() {
        let mut state = AppState::new();

        begin_drag(&mut state, 99);

        assert_eq!(state.figure.drag_index, None);
    }

    #[test]
    fn set_hover_validates_index() {
        let mut state = AppState::new();

        set_hover(&mut state, Some(1));
        assert_eq!(state.figure.hover_index, Some(1));

        set_hover(&mut state, Some(99));
        assert_eq!(state.figure.hover_index, None);

        set_hover(&mut state, None);
        assert_eq!(state.figure.hover_index, None);
    }
}
