//! Eigenschaften-Panel (rechte Seitenleiste) für Figur und Overlays.

use crate::app::{AppIntent, AppState};
use crate::core::{constructions, InscribedFigure, OverlayKind};
use crate::shared::options::MAX_VERTEX_COUNT;

/// Rendert das Eigenschaften-Panel und gibt erzeugte Events zurück.
pub fn render_properties_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::right("properties_panel")
        .default_width(220.0)
        .min_width(180.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.heading("Figur");
            ui.separator();

            render_vertex_count_slider(ui, state, &mut events);
            ui.separator();
            render_overlay_toggles(ui, state, &mut events);
            ui.separator();
            render_derived_info(ui, state);

            ui.separator();
            if ui.button("Ecken neu verteilen").clicked() {
                events.push(AppIntent::FigureResetRequested);
            }
        });

    events
}

fn render_vertex_count_slider(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    let mut count = state.figure.vertex_count();
    ui.label("Ecken:");
    if ui
        .add(egui::Slider::new(
            &mut count,
            InscribedFigure::MIN_VERTICES..=MAX_VERTEX_COUNT,
        ))
        .changed()
    {
        events.push(AppIntent::VertexCountChanged { count });
    }
}

fn render_overlay_toggles(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    let mut show_polygon = state.figure.overlays.polygon;
    if ui.checkbox(&mut show_polygon, "Polygon anzeigen").changed() {
        events.push(AppIntent::OverlayToggled {
            overlay: OverlayKind::Polygon,
        });
    }

    // Neunpunktekreis ist eine reine Dreieckskonstruktion
    let mut show_nine_point = state.figure.overlays.nine_point_circle;
    if ui
        .add_enabled(
            state.figure.is_triangle(),
            egui::Checkbox::new(&mut show_nine_point, "Neunpunktekreis anzeigen"),
        )
        .changed()
    {
        events.push(AppIntent::OverlayToggled {
            overlay: OverlayKind::NinePointCircle,
        });
    }
}

fn render_derived_info(ui: &mut egui::Ui, state: &AppState) {
    let tri = state.figure.leading_triangle();

    let incircle = constructions::incircle(tri);
    ui.label(format!(
        "Inkreis-Mittelpunkt: ({:.1}, {:.1})",
        incircle.center.x, incircle.center.y
    ));
    ui.label(format!("Inkreis-Radius: {:.1}", incircle.radius));

    if state.figure.is_triangle() {
        let nine_point = constructions::nine_point_circle(tri);
        if nine_point.radius.is_finite() {
            ui.label(format!("Neunpunktekreis-Radius: {:.1}", nine_point.radius));
        } else {
            ui.label("Neunpunktekreis: degeneriert");
        }
    }
}
