//! Zeichnet Grundkreis, Polygon, abgeleitete Kreise und Vertex-Marker.
//!
//! Zeichenreihenfolge von unten nach oben: Grundkreis, Polygonzug, Inkreis,
//! Neunpunktekreis, Vertex-Marker. Spätere Elemente liegen sichtbar oben.

use crate::core::Circle;
use crate::shared::RenderScene;
use glam::DVec2;

/// Zeichnet die komplette Szene in das Viewport-Rechteck.
pub fn paint_scene(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
    paint_circle(painter, rect, scene, &scene.base_circle, scene.options.color_base_circle);

    if let Some(points) = &scene.polygon {
        let screen_points: Vec<egui::Pos2> = points
            .iter()
            .map(|&p| to_screen(scene, rect, p))
            .collect();
        painter.add(egui::Shape::closed_line(
            screen_points,
            egui::Stroke::new(scene.options.stroke_width_px, color32(scene.options.color_polygon)),
        ));
    }

    if let Some(incircle) = &scene.incircle {
        paint_circle(painter, rect, scene, incircle, scene.options.color_incircle);
    }

    if let Some(nine_point) = &scene.nine_point_circle {
        paint_circle(painter, rect, scene, nine_point, scene.options.color_nine_point);
    }

    for marker in &scene.markers {
        painter.circle_filled(
            to_screen(scene, rect, marker.position),
            marker.radius_px,
            color32(scene.options.color_marker),
        );
    }
}

/// Zeichnet einen Kreis-Umriss aus Weltkoordinaten.
fn paint_circle(
    painter: &egui::Painter,
    rect: egui::Rect,
    scene: &RenderScene,
    circle: &Circle,
    color: [f32; 4],
) {
    let center = to_screen(scene, rect, circle.center);
    let radius_px =
        (circle.radius / scene.camera.world_per_pixel(scene.viewport_size[1] as f64)) as f32;
    painter.circle_stroke(
        center,
        radius_px,
        egui::Stroke::new(scene.options.stroke_width_px, color32(color)),
    );
}

/// Rechnet eine Weltposition in eine Bildschirmposition innerhalb `rect` um.
fn to_screen(scene: &RenderScene, rect: egui::Rect, world: DVec2) -> egui::Pos2 {
    let size = DVec2::new(
        scene.viewport_size[0] as f64,
        scene.viewport_size[1] as f64,
    );
    let p = scene.camera.world_to_screen(world, size);
    rect.min + egui::vec2(p.x as f32, p.y as f32)
}

fn color32([r, g, b, a]: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (r * 255.0) as u8,
        (g * 255.0) as u8,
        (b * 255.0) as u8,
        (a * 255.0) as u8,
    )
}
