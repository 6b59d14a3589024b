//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::EditorOptions;
use crate::core::{Camera2D, Circle};
use glam::DVec2;

/// Vertex-Marker mit zustandsabhängigem Radius (gezogen > hover > normal).
#[derive(Debug, Clone, Copy)]
pub struct VertexMarker {
    /// Position in Weltkoordinaten
    pub position: DVec2,
    /// Darstellungsradius in Screen-Pixeln
    pub radius_px: f32,
}

/// Read-only Daten für einen Render-Frame.
///
/// Abgeleitete Kreise sind hier bereits auf Zeichenbarkeit gefiltert:
/// `None` heißt ausgeblendet oder degeneriert (NaN, unendlicher oder
/// nicht-positiver Radius).
#[derive(Clone)]
pub struct RenderScene {
    /// Kamera-Zustand für diesen Frame
    pub camera: Camera2D,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Grundkreis — immer gezeichnet, zuunterst
    pub base_circle: Circle,
    /// Polygonzug über alle Eckpunkte (None = ausgeblendet)
    pub polygon: Option<Vec<DVec2>>,
    /// Inkreis der ersten drei Eckpunkte
    pub incircle: Option<Circle>,
    /// Neunpunktekreis (nur beim Dreieck)
    pub nine_point_circle: Option<Circle>,
    /// Vertex-Marker in Zeichenreihenfolge — zuoberst
    pub markers: Vec<VertexMarker>,
    /// Laufzeit-Optionen für Farben, Radien, Strichstärken
    pub options: EditorOptions,
}
