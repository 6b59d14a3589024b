//! Viewport-Input-Handling: Maus-Events, Drag, Hover, Scroll → AppIntent.
//!
//! Aufgeteilt in phasenbasierte Submodule:
//! - `drag_primary` — Drag-Beginn und -Ende (Vertex-Drag oder Kamera-Pan)
//! - `pointer_delta` — Drag-Updates und Pan-Deltas während aktiver Drags
//! - `hover` — Hover-Erkennung über Vertex-Markern
//! - `zoom` — Scroll-Zoom auf Mausposition

mod drag_primary;
mod hover;
mod pointer_delta;
mod zoom;

use crate::app::AppIntent;
use crate::core::{Camera2D, InscribedFigure};
use crate::shared::EditorOptions;
use glam::DVec2;

/// Modus des primären (Links-)Drags im Viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum PrimaryDragMode {
    #[default]
    None,
    /// Ein Eckpunkt wird entlang der Kreislinie gezogen
    VertexDrag,
    CameraPan,
}

/// Bündelt die gemeinsamen Parameter für Viewport-Event-Verarbeitung.
pub(crate) struct ViewportContext<'a> {
    pub ui: &'a egui::Ui,
    pub response: &'a egui::Response,
    pub viewport_size: [f32; 2],
    pub camera: &'a Camera2D,
    pub figure: &'a InscribedFigure,
    pub options: &'a EditorOptions,
}

impl ViewportContext<'_> {
    /// Pick-Radius in Welteinheiten beim aktuellen Zoom.
    fn pick_radius_world(&self) -> f64 {
        self.options.vertex_pick_radius_px as f64
            * self.camera.world_per_pixel(self.viewport_size[1] as f64)
    }

    /// Eckpunkt unter `world_pos` innerhalb des Pick-Radius.
    /// Vertex-Marker sind die einzigen interaktiven Trefferflächen.
    fn vertex_at(&self, world_pos: DVec2) -> Option<usize> {
        self.figure
            .nearest_vertex(world_pos)
            .filter(|&(_, distance)| distance <= self.pick_radius_world())
            .map(|(index, _)| index)
    }
}

/// Verwaltet den Input-Zustand für das Viewport (Drag, Hover, Scroll).
#[derive(Default)]
pub struct InputState {
    pub(crate) primary_drag_mode: PrimaryDragMode,
    /// Zuletzt gemeldeter Hover-Index (meldet nur Wechsel, nicht jeden Frame)
    pub(crate) last_hover: Option<usize>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Diese Methode ist der zentrale UI→Intent-Einstieg für Maus-, Scroll-
    /// und Drag-Interaktionen im Viewport.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
        camera: &Camera2D,
        figure: &InscribedFigure,
        options: &EditorOptions,
    ) -> Vec<AppIntent> {
        let ctx = ViewportContext {
            ui,
            response,
            viewport_size,
            camera,
            figure,
            options,
        };

        let mut events = Vec::new();

        events.push(AppIntent::ViewportResized {
            size: viewport_size,
        });

        self.handle_drag_start(&ctx, &mut events);
        self.handle_pointer_delta(&ctx, &mut events);
        self.handle_drag_end(&ctx, &mut events);
        self.handle_hover(&ctx, &mut events);
        self.handle_scroll_zoom(&ctx, &mut events);

        events
    }
}

/// Rechnet eine Bildschirmposition in Weltkoordinaten um.
pub(crate) fn screen_pos_to_world(
    pointer_pos: egui::Pos2,
    response: &egui::Response,
    viewport_size: [f32; 2],
    camera: &Camera2D,
) -> DVec2 {
    let local = pointer_pos - response.rect.min;
    camera.screen_to_world(
        DVec2::new(local.x as f64, local.y as f64),
        DVec2::new(viewport_size[0] as f64, viewport_size[1] as f64),
    )
}
