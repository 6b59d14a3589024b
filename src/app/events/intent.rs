use crate::core::OverlayKind;
use glam::DVec2;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Anwendung beenden
    ExitRequested,
    /// Kamera auf Standard zurücksetzen
    ResetCameraRequested,
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Kamera um Delta verschieben (Welt-Einheiten)
    CameraPan { delta: DVec2 },
    /// Kamera zoomen (optional auf einen Fokuspunkt)
    CameraZoom {
        factor: f64,
        focus_world: Option<DVec2>,
    },

    /// Drag-Lifecycle Start: Eckpunkt angefasst
    VertexDragStarted { index: usize },
    /// Drag-Lifecycle Update: Mauszeiger in Weltkoordinaten
    VertexDragMoved { world_pos: DVec2 },
    /// Drag-Lifecycle Ende (Maustaste los oder Viewport verlassen)
    VertexDragEnded,
    /// Eckpunkt unter dem Mauszeiger hat gewechselt (nur Darstellung)
    VertexHoverChanged { index: Option<usize> },

    /// Overlay-Sichtbarkeit umschalten
    OverlayToggled { overlay: OverlayKind },
    /// Eckenzahl der Figur ändern
    VertexCountChanged { count: usize },
    /// Figur auf gleichverteilte Ecken zurücksetzen
    FigureResetRequested,
}
