//! UI-Komponenten: Menü, Eigenschaften-Panel, Status-Bar, Input-Handling.

pub mod input;
pub mod menu;
pub mod properties;
pub mod status;

pub use input::InputState;
pub use menu::render_menu;
pub use properties::render_properties_panel;
pub use status::render_status_bar;
