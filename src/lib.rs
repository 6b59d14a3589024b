//! Kreisfigur-Studio Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, CommandLog, ViewState};
pub use core::{Camera2D, Circle, InscribedFigure, OverlayFlags, OverlayKind};
pub use shared::{EditorOptions, RenderScene, VertexMarker};
