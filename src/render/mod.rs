//! Renderer: zeichnet die RenderScene mit dem egui-Painter.

mod figure_renderer;

pub use figure_renderer::paint_scene;
