//! 2D-Kamera für Pan und Zoom über der Zeichenfläche.

use glam::DVec2;

/// 2D-Kamera mit Pan und Zoom.
///
/// Y zeigt in Welt- wie Bildschirmkoordinaten nach unten, daher findet bei
/// der Umrechnung keine Achsen-Spiegelung statt.
#[derive(Debug, Clone)]
pub struct Camera2D {
    /// Position der Kamera in Welt-Koordinaten
    pub position: DVec2,
    /// Zoom-Level (1.0 = normal, 2.0 = doppelt so groß)
    pub zoom: f64,
}

impl Camera2D {
    /// Sichtbare Welt-Halbhöhe bei Zoom 1.0.
    pub const BASE_WORLD_EXTENT: f64 = 400.0;
    /// Minimaler Zoom-Faktor.
    pub const ZOOM_MIN: f64 = 0.1;
    /// Maximaler Zoom-Faktor.
    pub const ZOOM_MAX: f64 = 100.0;

    /// Erstellt eine neue Kamera
    pub fn new() -> Self {
        Self {
            position: DVec2::ZERO,
            zoom: 1.0,
        }
    }

    /// Zentriert die Kamera auf einen Punkt
    pub fn look_at(&mut self, target: DVec2) {
        self.position = target;
    }

    /// Verschiebt die Kamera (Pan)
    pub fn pan(&mut self, delta: DVec2) {
        self.position += delta;
    }

    /// Ändert den Zoom-Level innerhalb der eingebauten Grenzen
    pub fn zoom_by(&mut self, factor: f64) {
        self.zoom = (self.zoom * factor).clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
    }

    /// Ändert den Zoom-Level innerhalb konfigurierter Grenzen
    pub fn zoom_by_clamped(&mut self, factor: f64, min: f64, max: f64) {
        self.zoom = (self.zoom * factor).clamp(min, max);
    }

    /// Konvertiert Screen-Koordinaten zu Welt-Koordinaten.
    /// Berücksichtigt BASE_WORLD_EXTENT, Zoom und Aspekt-Ratio.
    pub fn screen_to_world(&self, screen_pos: DVec2, screen_size: DVec2) -> DVec2 {
        // Screen-Koordinaten zentrieren (-1 bis 1)
        let ndc = (screen_pos / screen_size) * 2.0 - DVec2::ONE;
        let aspect = screen_size.x / screen_size.y;
        DVec2::new(
            ndc.x * Self::BASE_WORLD_EXTENT * aspect / self.zoom,
            ndc.y * Self::BASE_WORLD_EXTENT / self.zoom,
        ) + self.position
    }

    /// Konvertiert Welt-Koordinaten zu Screen-Koordinaten (Umkehrung von
    /// `screen_to_world`).
    pub fn world_to_screen(&self, world_pos: DVec2, screen_size: DVec2) -> DVec2 {
        let aspect = screen_size.x / screen_size.y;
        let d = (world_pos - self.position) * self.zoom;
        let ndc = DVec2::new(
            d.x / (Self::BASE_WORLD_EXTENT * aspect),
            d.y / Self::BASE_WORLD_EXTENT,
        );
        (ndc + DVec2::ONE) / 2.0 * screen_size
    }

    /// Berechnet den Umrechnungsfaktor von Screen-Pixeln zu Welt-Einheiten.
    pub fn world_per_pixel(&self, viewport_height: f64) -> f64 {
        2.0 * Self::BASE_WORLD_EXTENT / (self.zoom * viewport_height.max(1.0))
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_camera_pan() {
        let mut camera = Camera2D::new();
        camera.pan(DVec2::new(10.0, 5.0));
        assert_relative_eq!(camera.position.x, 10.0);
        assert_relative_eq!(camera.position.y, 5.0);
    }

    #[test]
    fn test_camera_zoom_clamps() {
        let mut camera = Camera2D::new();
        camera.zoom_by(2.0);
        assert_relative_eq!(camera.zoom, 2.0);

        camera.zoom_by(0.5);
        assert_relative_eq!(camera.zoom, 1.0);

        camera.zoom_by(1e9);
        assert_relative_eq!(camera.zoom, Camera2D::ZOOM_MAX);
    }

    #[test]
    fn test_screen_to_world_center() {
        let mut camera = Camera2D::new();
        camera.look_at(DVec2::new(300.0, 300.0));
        let screen_size = DVec2::new(800.0, 600.0);
        // Bildschirm-Mitte → Kamera-Position
        let world = camera.screen_to_world(DVec2::new(400.0, 300.0), screen_size);
        assert_relative_eq!(world.x, 300.0, epsilon = 1e-9);
        assert_relative_eq!(world.y, 300.0, epsilon = 1e-9);
    }

    #[test]
    fn test_screen_to_world_zoom_scales_correctly() {
        let cam1 = Camera2D::new();
        let mut cam2 = Camera2D::new();
        cam2.zoom = 2.0;
        let screen_size = DVec2::new(800.0, 600.0);
        let corner = DVec2::new(800.0, 600.0);
        let w1 = cam1.screen_to_world(corner, screen_size);
        let w2 = cam2.screen_to_world(corner, screen_size);
        // Bei doppeltem Zoom ist der sichtbare Bereich halb so groß
        assert_relative_eq!(w2.x, w1.x / 2.0, epsilon = 1e-9);
        assert_relative_eq!(w2.y, w1.y / 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_world_to_screen_roundtrip() {
        let mut camera = Camera2D::new();
        camera.look_at(DVec2::new(300.0, 300.0));
        camera.zoom = 2.5;
        let screen_size = DVec2::new(1280.0, 720.0);

        let screen = DVec2::new(412.0, 97.0);
        let world = camera.screen_to_world(screen, screen_size);
        let back = camera.world_to_screen(world, screen_size);
        assert_relative_eq!(back.x, screen.x, epsilon = 1e-9);
        assert_relative_eq!(back.y, screen.y, epsilon = 1e-9);
    }

    #[test]
    fn test_world_per_pixel() {
        let mut camera = Camera2D::new();
        let wpp1 = camera.world_per_pixel(600.0);
        camera.zoom = 2.0;
        let wpp2 = camera.world_per_pixel(600.0);
        // Doppelter Zoom → halb so viele Welt-Einheiten pro Pixel
        assert_relative_eq!(wpp2, wpp1 / 2.0);
    }
}
