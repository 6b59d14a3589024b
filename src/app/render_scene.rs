//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::core::{constructions, Circle};
use crate::shared::{RenderScene, VertexMarker};

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Wendet die Sichtbarkeits-Flags an und filtert degenerierte abgeleitete
/// Kreise (NaN, unendlicher oder nicht-positiver Radius) aus — der Renderer
/// bekommt nur Zeichenbares.
pub fn build(state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
    let figure = &state.figure;
    let tri = figure.leading_triangle();

    let polygon = figure.overlays.polygon.then(|| figure.points.clone());

    // Inkreis wird immer gezeichnet — bei n > 3 der Inkreis der ersten drei Ecken
    let incircle = drawable_circle(constructions::incircle(tri));

    let nine_point_circle = (figure.is_triangle() && figure.overlays.nine_point_circle)
        .then(|| constructions::nine_point_circle(tri))
        .and_then(drawable_circle);

    let markers = figure
        .points
        .iter()
        .enumerate()
        .map(|(index, &position)| VertexMarker {
            position,
            radius_px: marker_radius(state, index),
        })
        .collect();

    RenderScene {
        camera: state.view.camera.clone(),
        viewport_size,
        base_circle: figure.circle,
        polygon,
        incircle,
        nine_point_circle,
        markers,
        options: state.options.clone(),
    }
}

/// Radius eines Markers nach Zustand: gezogen > hover > normal.
fn marker_radius(state: &AppState, index: usize) -> f32 {
    if state.figure.drag_index == Some(index) {
        state.options.marker_radius_drag_px
    } else if state.figure.hover_index == Some(index) {
        state.options.marker_radius_hover_px
    } else {
        state.options.marker_radius_idle_px
    }
}

/// Filtert Kreise aus, die nicht gezeichnet werden können.
fn drawable_circle(circle: Circle) -> Option<Circle> {
    let finite = circle.center.is_finite() && circle.radius.is_finite();
    (finite && circle.radius > 0.0).then_some(circle)
}
