//! Grundkreis mit einbeschriebener, ziehbarer Eckpunkt-Folge.

use glam::DVec2;
use std::f64::consts::TAU;

/// Fester Kreis in Weltkoordinaten.
///
/// Wird einmal aus der Zeichenfläche abgeleitet und bleibt für die
/// Lebensdauer der Figur unverändert.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// Mittelpunkt in Weltkoordinaten
    pub center: DVec2,
    /// Radius (> 0)
    pub radius: f64,
}

impl Circle {
    /// Leitet den Kreis aus einer Zeichenfläche ab:
    /// Mittelpunkt = Flächenmitte, Radius = halbe kürzere Seite minus Rand.
    pub fn from_surface(width: f64, height: f64, margin: f64) -> Self {
        Self {
            center: DVec2::new(width / 2.0, height / 2.0),
            radius: width.min(height) / 2.0 - margin,
        }
    }

    /// Punkt auf der Kreislinie beim Winkel `theta` (Bogenmaß, 0 = rechts,
    /// y zeigt nach unten).
    pub fn point_at_angle(&self, theta: f64) -> DVec2 {
        self.center + self.radius * DVec2::new(theta.cos(), theta.sin())
    }

    /// Projiziert `p` entlang des Strahls Mittelpunkt→`p` auf die Kreislinie.
    ///
    /// `None` wenn `p` exakt auf dem Mittelpunkt liegt — die Richtung ist
    /// dann unbestimmt (Division durch Null).
    pub fn project(&self, p: DVec2) -> Option<DVec2> {
        let d = p - self.center;
        let len = d.length();
        if len == 0.0 {
            return None;
        }
        Some(self.center + d * (self.radius / len))
    }
}

/// Abgeleitetes Overlay, per Checkbox umschaltbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    /// Polygonzug über alle Eckpunkte
    Polygon,
    /// Neunpunktekreis (nur beim Dreieck)
    NinePointCircle,
}

/// Sichtbarkeits-Schalter für die Overlays.
/// Beeinflusst ausschließlich das Zeichnen, nie die Geometrie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayFlags {
    /// Polygonzug anzeigen
    pub polygon: bool,
    /// Neunpunktekreis anzeigen
    pub nine_point_circle: bool,
}

impl Default for OverlayFlags {
    fn default() -> Self {
        Self {
            polygon: true,
            nine_point_circle: false,
        }
    }
}

impl OverlayFlags {
    /// Schaltet die Sichtbarkeit eines Overlays um.
    pub fn toggle(&mut self, kind: OverlayKind) {
        match kind {
            OverlayKind::Polygon => self.polygon = !self.polygon,
            OverlayKind::NinePointCircle => self.nine_point_circle = !self.nine_point_circle,
        }
    }

    /// Gibt die aktuelle Sichtbarkeit eines Overlays zurück.
    pub fn is_visible(&self, kind: OverlayKind) -> bool {
        match kind {
            OverlayKind::Polygon => self.polygon,
            OverlayKind::NinePointCircle => self.nine_point_circle,
        }
    }
}

/// Kreis mit einbeschriebener, an die Kreislinie gebundener Eckpunkt-Folge.
///
/// Invariante: jeder Eckpunkt liegt nach jeder Mutation auf der Kreislinie,
/// erzwungen strukturell über `Circle::project`.
#[derive(Debug, Clone)]
pub struct InscribedFigure {
    /// Der feste Grundkreis
    pub circle: Circle,
    /// Eckpunkte in Zeichenreihenfolge (Index i verbindet zu i+1 mod n)
    pub points: Vec<DVec2>,
    /// Aktiv gezogener Eckpunkt
    pub drag_index: Option<usize>,
    /// Eckpunkt unter dem Mauszeiger (nur Darstellung)
    pub hover_index: Option<usize>,
    /// Sichtbarkeit der Overlays
    pub overlays: OverlayFlags,
}

impl InscribedFigure {
    /// Untergrenze der Eckenzahl.
    pub const MIN_VERTICES: usize = 3;

    /// Erstellt eine Figur mit `vertex_count` gleichverteilten Ecken.
    pub fn new(circle: Circle, vertex_count: usize) -> Self {
        let count = vertex_count.max(Self::MIN_VERTICES);
        Self {
            circle,
            points: evenly_spaced(&circle, count),
            drag_index: None,
            hover_index: None,
            overlays: OverlayFlags::default(),
        }
    }

    /// Erstellt eine Figur über einer Zeichenfläche.
    pub fn from_surface(width: f64, height: f64, margin: f64, vertex_count: usize) -> Self {
        Self::new(Circle::from_surface(width, height, margin), vertex_count)
    }

    /// Anzahl der Eckpunkte.
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück wenn die Figur ein Dreieck ist.
    pub fn is_triangle(&self) -> bool {
        self.points.len() == 3
    }

    /// Die ersten drei Eckpunkte.
    ///
    /// Grundlage aller Dreieckskonstruktionen — auch bei n > 3: der Inkreis
    /// der Figur ist der Inkreis ihrer ersten drei Ecken.
    pub fn leading_triangle(&self) -> [DVec2; 3] {
        [self.points[0], self.points[1], self.points[2]]
    }

    /// Setzt alle Ecken auf die gleichverteilten Startwinkel zurück und
    /// löscht Drag- und Hover-Zustand.
    pub fn reset_points(&mut self) {
        self.points = evenly_spaced(&self.circle, self.points.len());
        self.drag_index = None;
        self.hover_index = None;
    }

    /// Baut die Figur mit neuer Eckenzahl neu auf (gleichverteilt).
    pub fn set_vertex_count(&mut self, count: usize) {
        self.points = evenly_spaced(&self.circle, count.max(Self::MIN_VERTICES));
        self.drag_index = None;
        self.hover_index = None;
    }

    /// Nächstgelegener Eckpunkt zu `p` samt Distanz.
    pub fn nearest_vertex(&self, p: DVec2) -> Option<(usize, f64)> {
        self.points
            .iter()
            .enumerate()
            .map(|(index, point)| (index, point.distance(p)))
            .min_by(|lhs, rhs| lhs.1.total_cmp(&rhs.1))
    }
}

/// Gleichverteilte Punkte auf der Kreislinie: Winkel 2πk/n für k = 0..n.
fn evenly_spaced(circle: &Circle, count: usize) -> Vec<DVec2> {
    (0..count)
        .map(|k| circle.point_at_angle(TAU * k as f64 / count as f64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_circle_from_surface() {
        let circle = Circle::from_surface(400.0, 400.0, 50.0);
        assert_relative_eq!(circle.center.x, 200.0);
        assert_relative_eq!(circle.center.y, 200.0);
        assert_relative_eq!(circle.radius, 150.0);
    }

    #[test]
    fn test_initial_points_for_400x400_surface() {
        let figure = InscribedFigure::from_surface(400.0, 400.0, 50.0, 3);

        assert_relative_eq!(figure.points[0].x, 350.0, epsilon = 1e-9);
        assert_relative_eq!(figure.points[0].y, 200.0, epsilon = 1e-9);
        assert_relative_eq!(figure.points[1].x, 125.0, epsilon = 1e-9);
        assert_relative_eq!(figure.points[1].y, 329.903810567666, epsilon = 1e-9);
        assert_relative_eq!(figure.points[2].x, 125.0, epsilon = 1e-9);
        assert_relative_eq!(figure.points[2].y, 70.096189432334, epsilon = 1e-9);
    }

    #[test]
    fn test_initial_points_lie_on_circle_for_any_count() {
        for count in 3..=12 {
            let figure = InscribedFigure::from_surface(400.0, 400.0, 50.0, count);
            assert_eq!(figure.vertex_count(), count);
            for point in &figure.points {
                let distance = point.distance(figure.circle.center);
                assert_relative_eq!(distance, 150.0, max_relative = 1e-9);
            }
        }
    }

    #[test]
    fn test_project_pulls_point_onto_circle() {
        let circle = Circle::from_surface(400.0, 400.0, 50.0);
        let projected = circle.project(DVec2::new(300.0, 320.0)).unwrap();
        assert_relative_eq!(projected.x, 296.027659949672, epsilon = 1e-9);
        assert_relative_eq!(projected.y, 315.233191939606, epsilon = 1e-9);
        assert_relative_eq!(projected.distance(circle.center), 150.0, max_relative = 1e-9);
    }

    #[test]
    fn test_project_at_center_is_undefined() {
        let circle = Circle::from_surface(400.0, 400.0, 50.0);
        assert!(circle.project(circle.center).is_none());
    }

    #[test]
    fn test_vertex_count_below_minimum_is_raised() {
        let mut figure = InscribedFigure::from_surface(400.0, 400.0, 50.0, 3);
        figure.set_vertex_count(1);
        assert_eq!(figure.vertex_count(), InscribedFigure::MIN_VERTICES);
    }

    #[test]
    fn test_reset_points_clears_drag_and_hover() {
        let mut figure = InscribedFigure::from_surface(400.0, 400.0, 50.0, 3);
        figure.drag_index = Some(1);
        figure.hover_index = Some(2);
        figure.points[1] = figure.circle.point_at_angle(1.0);

        figure.reset_points();

        assert_eq!(figure.drag_index, None);
        assert_eq!(figure.hover_index, None);
        assert_relative_eq!(figure.points[1].x, 125.0, epsilon = 1e-9);
    }

    #[test]
    fn test_nearest_vertex_picks_closest() {
        let figure = InscribedFigure::from_surface(400.0, 400.0, 50.0, 3);
        let (index, distance) = figure.nearest_vertex(DVec2::new(340.0, 205.0)).unwrap();
        assert_eq!(index, 0);
        assert!(distance < 12.0);
    }
}
