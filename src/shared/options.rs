//! Zentrale Konfiguration für Kreisfigur-Studio.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Zeichenfläche ───────────────────────────────────────────────────

/// Logische Kantenlänge der Zeichenfläche, aus der der Grundkreis abgeleitet wird.
pub const FIGURE_SURFACE_SIZE: f64 = 600.0;
/// Abstand der Kreislinie zum Rand der Zeichenfläche.
pub const FIGURE_MARGIN: f64 = 50.0;
/// Obergrenze der Eckenzahl (Slider im Eigenschaften-Panel).
pub const MAX_VERTEX_COUNT: usize = 12;
/// Standard-Eckenzahl beim Start (Dreieck).
pub const DEFAULT_VERTEX_COUNT: usize = 3;

// ── Kamera ──────────────────────────────────────────────────────────

/// Minimaler Zoom-Faktor.
pub const CAMERA_ZOOM_MIN: f64 = 0.1;
/// Maximaler Zoom-Faktor.
pub const CAMERA_ZOOM_MAX: f64 = 100.0;
/// Zoom-Schritt bei stufenweisem Zoom (Menü-Buttons).
pub const CAMERA_ZOOM_STEP: f64 = 1.2;
/// Zoom-Schritt bei Mausrad-Scroll.
pub const CAMERA_SCROLL_ZOOM_STEP: f64 = 1.1;

// ── Vertex-Marker ───────────────────────────────────────────────────

/// Marker-Radius in Screen-Pixeln (Ruhezustand).
pub const MARKER_RADIUS_IDLE_PX: f32 = 5.0;
/// Marker-Radius unter dem Mauszeiger.
pub const MARKER_RADIUS_HOVER_PX: f32 = 7.0;
/// Marker-Radius während des Ziehens.
pub const MARKER_RADIUS_DRAG_PX: f32 = 8.0;
/// Pick-Radius für Vertex-Treffer in Screen-Pixeln.
pub const VERTEX_PICK_RADIUS_PX: f32 = 12.0;

// ── Linien und Farben ───────────────────────────────────────────────

/// Strichstärke aller Umrisse in Screen-Pixeln.
pub const STROKE_WIDTH_PX: f32 = 2.0;
/// Farbe des Grundkreises (RGBA: Hellgrau).
pub const COLOR_BASE_CIRCLE: [f32; 4] = [0.78, 0.78, 0.78, 1.0];
/// Farbe des Polygonzugs (RGBA: Blau).
pub const COLOR_POLYGON: [f32; 4] = [0.25, 0.55, 1.0, 1.0];
/// Farbe des Inkreises (RGBA: Grün).
pub const COLOR_INCIRCLE: [f32; 4] = [0.35, 0.85, 0.45, 1.0];
/// Farbe des Neunpunktekreises (RGBA: Violett).
pub const COLOR_NINE_POINT: [f32; 4] = [0.75, 0.45, 1.0, 1.0];
/// Füllfarbe der Vertex-Marker (RGBA: Rot).
pub const COLOR_MARKER: [f32; 4] = [0.92, 0.22, 0.22, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `kreisfigur_studio.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Figur ───────────────────────────────────────────────────
    /// Eckenzahl beim Start
    pub default_vertex_count: usize,

    // ── Marker ──────────────────────────────────────────────────
    /// Marker-Radius im Ruhezustand (Screen-Pixel)
    pub marker_radius_idle_px: f32,
    /// Marker-Radius unter dem Mauszeiger
    pub marker_radius_hover_px: f32,
    /// Marker-Radius während des Ziehens
    pub marker_radius_drag_px: f32,
    /// Pick-Radius für Vertex-Treffer in Screen-Pixeln
    pub vertex_pick_radius_px: f32,

    // ── Linien und Farben ───────────────────────────────────────
    /// Strichstärke aller Umrisse in Screen-Pixeln
    pub stroke_width_px: f32,
    /// Farbe des Grundkreises (RGBA)
    pub color_base_circle: [f32; 4],
    /// Farbe des Polygonzugs
    pub color_polygon: [f32; 4],
    /// Farbe des Inkreises
    pub color_incircle: [f32; 4],
    /// Farbe des Neunpunktekreises
    pub color_nine_point: [f32; 4],
    /// Füllfarbe der Vertex-Marker
    pub color_marker: [f32; 4],

    // ── Kamera ──────────────────────────────────────────────────
    /// Minimaler Zoom-Faktor (konfigurierbar)
    pub camera_zoom_min: f64,
    /// Maximaler Zoom-Faktor (konfigurierbar)
    pub camera_zoom_max: f64,
    /// Zoom-Schritt bei Menü-Buttons
    pub camera_zoom_step: f64,
    /// Zoom-Schritt bei Mausrad-Scroll
    pub camera_scroll_zoom_step: f64,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            default_vertex_count: DEFAULT_VERTEX_COUNT,

            marker_radius_idle_px: MARKER_RADIUS_IDLE_PX,
            marker_radius_hover_px: MARKER_RADIUS_HOVER_PX,
            marker_radius_drag_px: MARKER_RADIUS_DRAG_PX,
            vertex_pick_radius_px: VERTEX_PICK_RADIUS_PX,

            stroke_width_px: STROKE_WIDTH_PX,
            color_base_circle: COLOR_BASE_CIRCLE,
            color_polygon: COLOR_POLYGON,
            color_incircle: COLOR_INCIRCLE,
            color_nine_point: COLOR_NINE_POINT,
            color_marker: COLOR_MARKER,

            camera_zoom_min: CAMERA_ZOOM_MIN,
            camera_zoom_max: CAMERA_ZOOM_MAX,
            camera_zoom_step: CAMERA_ZOOM_STEP,
            camera_scroll_zoom_step: CAMERA_SCROLL_ZOOM_STEP,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("kreisfigur_studio"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("kreisfigur_studio.toml")
    }
}
