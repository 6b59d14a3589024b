use crate::core::OverlayKind;
use glam::DVec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Anwendung beenden
    RequestExit,
    /// Kamera auf Standard zurücksetzen
    ResetCamera,
    /// Stufenweise hineinzoomen
    ZoomIn,
    /// Stufenweise herauszoomen
    ZoomOut,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Kamera um Delta verschieben
    PanCamera { delta: DVec2 },
    /// Kamera zoomen (optional auf Fokuspunkt)
    ZoomCamera {
        factor: f64,
        focus_world: Option<DVec2>,
    },

    /// Drag auf Eckpunkt beginnen (bindet laufende Drags um)
    BeginVertexDrag { index: usize },
    /// Gezogenen Eckpunkt auf die Projektion der Mausposition setzen
    UpdateVertexDrag { world_pos: DVec2 },
    /// Laufenden Drag beenden
    EndVertexDrag,
    /// Hover-Eckpunkt setzen (nur Darstellung)
    SetHoveredVertex { index: Option<usize> },

    /// Overlay-Sichtbarkeit umschalten
    ToggleOverlay { overlay: OverlayKind },
    /// Eckenzahl setzen und Figur neu aufbauen
    SetVertexCount { count: usize },
    /// Figur auf gleichverteilte Ecken zurücksetzen
    ResetFigure,
}
