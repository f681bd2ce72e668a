pub mod colors;
pub mod font5x7;
pub mod framebuffer;
pub mod traits;

pub use framebuffer::Framebuffer;
pub use traits::{Surface, TextAnchor};
