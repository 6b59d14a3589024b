//! Drag-Beginn und -Ende: Vertex-Drag oder Kamera-Pan.

use super::{screen_pos_to_world, InputState, PrimaryDragMode, ViewportContext};
use crate::app::AppIntent;

impl InputState {
    /// Erkennt Drag-Beginn und bestimmt den Drag-Modus.
    ///
    /// Nur Vertex-Marker sind Drag-Ziele; ein Drag daneben verschiebt die
    /// Kamera.
    pub(crate) fn handle_drag_start(&mut self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if !ctx.response.drag_started_by(egui::PointerButton::Primary) {
            return;
        }

        // press_origin() liefert die exakte Klickposition vor der
        // Drag-Schwelle, interact_pointer_pos() wäre bereits um die
        // Drag-Erkennung verschoben.
        let hit = ctx
            .ui
            .input(|i| i.pointer.press_origin())
            .and_then(|pointer_pos| {
                let world_pos =
                    screen_pos_to_world(pointer_pos, ctx.response, ctx.viewport_size, ctx.camera);
                ctx.vertex_at(world_pos)
            });

        if let Some(index) = hit {
            events.push(AppIntent::VertexDragStarted { index });
            self.primary_drag_mode = PrimaryDragMode::VertexDrag;
        } else {
            self.primary_drag_mode = PrimaryDragMode::CameraPan;
        }
    }

    /// Beendet einen Drag beim Loslassen der Maustaste oder wenn der
    /// Mauszeiger das Viewport verlässt — sonst bliebe der Drag hängen.
    pub(crate) fn handle_drag_end(&mut self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        let released = ctx.response.drag_stopped_by(egui::PointerButton::Primary);
        let pointer_left = ctx
            .ui
            .input(|i| i.pointer.latest_pos())
            .map_or(true, |pos| !ctx.response.rect.contains(pos));

        let vertex_drag_active = self.primary_drag_mode == PrimaryDragMode::VertexDrag;
        if !released && !(pointer_left && vertex_drag_active) {
            return;
        }

        if vertex_drag_active {
            events.push(AppIntent::VertexDragEnded);
        }
        self.primary_drag_mode = PrimaryDragMode::None;
    }
}
