//! Hover-Erkennung über Vertex-Markern (nur Darstellung).

use super::{screen_pos_to_world, InputState, PrimaryDragMode, ViewportContext};
use crate::app::AppIntent;

impl InputState {
    /// Meldet Wechsel des Eckpunkts unter dem Mauszeiger.
    /// Während eines Drags wird kein Hover gemeldet.
    pub(crate) fn handle_hover(&mut self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        let hover = if self.primary_drag_mode == PrimaryDragMode::None {
            ctx.response.hover_pos().and_then(|pointer_pos| {
                let world_pos =
                    screen_pos_to_world(pointer_pos, ctx.response, ctx.viewport_size, ctx.camera);
                ctx.vertex_at(world_pos)
            })
        } else {
            None
        };

        if hover != self.last_hover {
            self.last_hover = hover;
            events.push(AppIntent::VertexHoverChanged { index: hover });
        }
    }
}
