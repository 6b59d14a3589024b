//! Pointer-Delta-Verarbeitung: Vertex-Drag-Updates und Kamera-Pan.

use super::{screen_pos_to_world, InputState, PrimaryDragMode, ViewportContext};
use crate::app::AppIntent;
use glam::DVec2;

impl InputState {
    /// Verarbeitet Maus-Bewegungs-Deltas für Vertex-Drag und Kamera-Pan.
    pub(crate) fn handle_pointer_delta(
        &mut self,
        ctx: &ViewportContext,
        events: &mut Vec<AppIntent>,
    ) {
        let pointer_delta = ctx.ui.input(|i| i.pointer.delta());
        if pointer_delta == egui::Vec2::ZERO {
            return;
        }

        let wpp = ctx.camera.world_per_pixel(ctx.viewport_size[1] as f64);

        if ctx.response.dragged_by(egui::PointerButton::Primary) {
            match self.primary_drag_mode {
                PrimaryDragMode::VertexDrag => {
                    if let Some(pointer_pos) = ctx.response.interact_pointer_pos() {
                        let world_pos = screen_pos_to_world(
                            pointer_pos,
                            ctx.response,
                            ctx.viewport_size,
                            ctx.camera,
                        );
                        events.push(AppIntent::VertexDragMoved { world_pos });
                    }
                }
                PrimaryDragMode::CameraPan | PrimaryDragMode::None => {
                    events.push(AppIntent::CameraPan {
                        delta: DVec2::new(
                            -pointer_delta.x as f64 * wpp,
                            -pointer_delta.y as f64 * wpp,
                        ),
                    });
                }
            }
        } else if ctx.response.dragged_by(egui::PointerButton::Middle)
            || ctx.response.dragged_by(egui::PointerButton::Secondary)
        {
            events.push(AppIntent::CameraPan {
                delta: DVec2::new(
                    -pointer_delta.x as f64 * wpp,
                    -pointer_delta.y as f64 * wpp,
                ),
            });
        }
    }
}
