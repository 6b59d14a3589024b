//! Use-Cases: Eckenzahl, Overlays und Zurücksetzen der Figur.

use crate::app::AppState;
use crate::core::{InscribedFigure, OverlayKind};
use crate::shared::options::MAX_VERTEX_COUNT;

/// Setzt die Eckenzahl und verteilt die Ecken neu gleichmäßig.
/// Werte außerhalb [3, MAX_VERTEX_COUNT] werden geklemmt.
pub fn set_vertex_count(state: &mut AppState, count: usize) {
    let clamped = count.clamp(InscribedFigure::MIN_VERTICES, MAX_VERTEX_COUNT);
    if clamped != count {
        log::warn!("Eckenzahl {count} auf {clamped} geklemmt");
    }
    state.figure.set_vertex_count(clamped);
    log::info!("Figur mit {clamped} Ecken neu aufgebaut");
}

/// Setzt alle Ecken auf die gleichverteilten Startwinkel zurück.
pub fn reset_figure(state: &mut AppState) {
    state.figure.reset_points();
    log::info!("Figur zurückgesetzt");
}

/// Schaltet die Sichtbarkeit eines Overlays um.
/// Die Flags beeinflussen ausschließlich das Zeichnen.
pub fn toggle_overlay(state: &mut AppState, overlay: OverlayKind) {
    state.figure.overlays.toggle(overlay);
}
