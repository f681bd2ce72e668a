/// Common drawing contract every render target must provide.
///
/// The compositor and screens depend only on these primitives, so color math
/// can run headless against the in-memory framebuffer as well as on a panel.
use anyhow::Result;

use super::colors::Color;

/// Where a text string is anchored relative to the given point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    TopLeft,
    TopCenter,
    TopRight,
    MiddleCenter,
}

pub trait Surface {
    fn width(&self) -> u16;
    fn height(&self) -> u16;
    fn clear(&mut self, color: Color) -> Result<()>;
    fn draw_pixel(&mut self, x: i32, y: i32, color: Color) -> Result<()>;
    fn draw_hline(&mut self, x: i32, y: i32, width: u16, color: Color) -> Result<()>;
    fn draw_rect(&mut self, x: i32, y: i32, width: u16, height: u16, color: Color) -> Result<()>;
    fn fill_rect(&mut self, x: i32, y: i32, width: u16, height: u16, color: Color) -> Result<()>;
    fn draw_circle(&mut self, cx: i32, cy: i32, radius: u16, color: Color) -> Result<()>;
    fn fill_circle(&mut self, cx: i32, cy: i32, radius: u16, color: Color) -> Result<()>;
    fn draw_round_rect(
        &mut self,
        x: i32,
        y: i32,
        width: u16,
        height: u16,
        corner: u16,
        color: Color,
    ) -> Result<()>;
    fn fill_round_rect(
        &mut self,
        x: i32,
        y: i32,
        width: u16,
        height: u16,
        corner: u16,
        color: Color,
    ) -> Result<()>;
    fn draw_text(
        &mut self,
        x: i32,
        y: i32,
        text: &str,
        color: Color,
        anchor: TextAnchor,
        scale: u8,
    ) -> Result<()>;
}
