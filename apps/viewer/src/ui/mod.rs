//! UI layer for the viewer: app shell, page panels, and the egui display surface.

pub mod app;
pub mod pages;
pub mod surface;

pub use app::NavigatorApp;
