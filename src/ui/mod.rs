pub mod app;
pub mod theme;
mod widgets;

pub use app::render;
