//! Application State — zentrale Datenhaltung.

use super::CommandLog;
use crate::core::{Camera2D, InscribedFigure};
use crate::shared::options::{FIGURE_MARGIN, FIGURE_SURFACE_SIZE};
use crate::shared::EditorOptions;

/// View-bezogener Anwendungszustand
#[derive(Default)]
pub struct ViewState {
    /// 2D-Kamera für die Ansicht
    pub camera: Camera2D,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            camera: Camera2D::new(),
            viewport_size: [0.0, 0.0],
        }
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Grundkreis mit einbeschriebener Figur — die einzige mutierbare Geometrie
    pub figure: InscribedFigure,
    /// View-State
    pub view: ViewState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Radien, Zoom-Grenzen)
    pub options: EditorOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt den Start-Zustand mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt den Start-Zustand: gleichverteilte Ecken, Kamera auf der
    /// Figurenmitte.
    pub fn with_options(options: EditorOptions) -> Self {
        let figure = InscribedFigure::from_surface(
            FIGURE_SURFACE_SIZE,
            FIGURE_SURFACE_SIZE,
            FIGURE_MARGIN,
            options.default_vertex_count,
        );

        let mut view = ViewState::new();
        view.camera.look_at(figure.circle.center);

        Self {
            figure,
            view,
            command_log: CommandLog::new(),
            options,
            should_exit: false,
        }
    }

    /// Gibt die Eckenzahl der Figur zurück (für UI-Anzeige)
    pub fn vertex_count(&self) -> usize {
        self.figure.vertex_count()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
