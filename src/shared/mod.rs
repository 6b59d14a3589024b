//! Gemeinsame Typen zwischen App- und Render-Schicht.

pub mod options;
pub mod render_scene;

pub use options::EditorOptions;
pub use render_scene::{RenderScene, VertexMarker};
