//! RGB565 color compositor and premium UI renderer for small TFT panels.
//!
//! The core is pure integer color math (blend/darken/lighten over packed
//! 5-6-5 colors) and the gradient/glow effects built on it. Rendering goes
//! through the [`display::Surface`] trait, so the same screens draw onto a
//! panel driver on-device and onto the in-memory [`display::Framebuffer`]
//! in host tests.

pub mod config;
pub mod display;
pub mod ui;

pub use config::UiConfig;
pub use display::colors::{blend, darken, lighten, rgb565, Channels, Color};
pub use display::{Framebuffer, Surface, TextAnchor};
pub use ui::UiManager;

#[cfg(test)]
mod tests;
