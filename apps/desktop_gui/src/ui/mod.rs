//! UI layer: app shell, panels, theme, and small widgets.

pub mod app;
pub mod panels;
pub mod theme;
pub mod widgets;

pub use app::MapBrowserApp;
