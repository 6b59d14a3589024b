//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Ecken: {}", state.vertex_count()));

            ui.separator();

            ui.label(format!(
                "Zoom: {:.2}x | Position: ({:.1}, {:.1})",
                state.view.camera.zoom,
                state.view.camera.position.x,
                state.view.camera.position.y
            ));

            ui.separator();

            if let Some(index) = state.figure.drag_index {
                ui.label(format!("Ziehe Eckpunkt {}", index));
            } else if let Some(index) = state.figure.hover_index {
                ui.label(format!("Eckpunkt {}", index));
            } else {
                ui.label("Bereit");
            }
        });
    });
}
