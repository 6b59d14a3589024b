//! Kern-Geometrie: Grundkreis, einbeschriebene Figur, Konstruktionen, Kamera.

pub mod camera;
pub mod constructions;
pub mod figure;

pub use camera::Camera2D;
pub use figure::{Circle, InscribedFigure, OverlayFlags, OverlayKind};
