// In-memory RGB565 render target.
//
// Holds exactly the pixels a panel driver would receive, so screens and
// effects can render headless. All primitives clip to the buffer bounds;
// out-of-range geometry is silently dropped, never an error.

use anyhow::Result;

use super::colors::Color;
use super::font5x7::{glyph, FONT_HEIGHT, FONT_WIDTH};
use super::traits::{Surface, TextAnchor};

pub struct Framebuffer {
    width: u16,
    height: u16,
    pixels: Vec<u16>,
}

impl Framebuffer {
    pub fn new(width: u16, height: u16) -> Self {
        log::debug!("allocating {}x{} framebuffer", width, height);
        Self {
            width,
            height,
            pixels: vec![0u16; width as usize * height as usize],
        }
    }

    /// Read back a pixel. Returns None outside the buffer.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(Color(
            self.pixels[y as usize * self.width as usize + x as usize],
        ))
    }

    pub fn pixels(&self) -> &[u16] {
        &self.pixels
    }

    fn set(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        self.pixels[y as usize * self.width as usize + x as usize] = color.0;
    }

    fn text_width(text: &str, scale: u8) -> i32 {
        // +1 per glyph for inter-character spacing
        text.chars().count() as i32 * (FONT_WIDTH as i32 * scale as i32 + 1)
    }

    fn draw_char(&mut self, x: i32, y: i32, c: char, color: Color, scale: u8) {
        let data = glyph(c);
        let scale = scale.max(1) as i32;

        for col in 0..FONT_WIDTH as i32 {
            for row in 0..FONT_HEIGHT as i32 {
                if (data[col as usize] >> row) & 1 == 1 {
                    for sx in 0..scale {
                        for sy in 0..scale {
                            self.set(x + col * scale + sx, y + row * scale + sy, color);
                        }
                    }
                }
            }
        }
    }

    /// One quarter-circle outline, used for rounded rect corners.
    /// Quadrants: 0 top-left, 1 top-right, 2 bottom-right, 3 bottom-left.
    fn corner_arc(&mut self, cx: i32, cy: i32, radius: u16, quadrant: u8, color: Color) {
        let mut x = radius as i32;
        let mut y = 0i32;
        let mut err = 0i32;

        while x >= y {
            match quadrant {
                0 => {
                    self.set(cx - x, cy - y, color);
                    self.set(cx - y, cy - x, color);
                }
                1 => {
                    self.set(cx + x, cy - y, color);
                    self.set(cx + y, cy - x, color);
                }
                2 => {
                    self.set(cx + x, cy + y, color);
                    self.set(cx + y, cy + x, color);
                }
                _ => {
                    self.set(cx - x, cy + y, color);
                    self.set(cx - y, cy + x, color);
                }
            }

            if err <= 0 {
                y += 1;
                err += 2 * y + 1;
            }
            if err > 0 {
                x -= 1;
                err -= 2 * x + 1;
            }
        }
    }

    /// Widest horizontal half-extent of a circle of `radius` at vertical
    /// offset `dy` from its center.
    fn circle_span(radius: u16, dy: i32) -> i32 {
        let r2 = radius as i32 * radius as i32;
        let mut dx = 0i32;
        while (dx + 1) * (dx + 1) + dy * dy <= r2 {
            dx += 1;
        }
        dx
    }
}

impl Surface for Framebuffer {
    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }

    fn clear(&mut self, color: Color) -> Result<()> {
        self.pixels.fill(color.0);
        Ok(())
    }

    fn draw_pixel(&mut self, x: i32, y: i32, color: Color) -> Result<()> {
        self.set(x, y, color);
        Ok(())
    }

    fn draw_hline(&mut self, x: i32, y: i32, width: u16, color: Color) -> Result<()> {
        for i in 0..width as i32 {
            self.set(x + i, y, color);
        }
        Ok(())
    }

    fn draw_rect(&mut self, x: i32, y: i32, width: u16, height: u16, color: Color) -> Result<()> {
        if width == 0 || height == 0 {
            return Ok(());
        }

        let w = width as i32;
        let h = height as i32;
        self.draw_hline(x, y, width, color)?;
        self.draw_hline(x, y + h - 1, width, color)?;
        for i in 0..h {
            self.set(x, y + i, color);
            self.set(x + w - 1, y + i, color);
        }
        Ok(())
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: u16, height: u16, color: Color) -> Result<()> {
        for row in 0..height as i32 {
            self.draw_hline(x, y + row, width, color)?;
        }
        Ok(())
    }

    fn draw_circle(&mut self, cx: i32, cy: i32, radius: u16, color: Color) -> Result<()> {
        let mut x = radius as i32;
        let mut y = 0i32;
        let mut err = 0i32;

        while x >= y {
            self.set(cx + x, cy + y, color);
            self.set(cx + y, cy + x, color);
            self.set(cx - y, cy + x, color);
            self.set(cx - x, cy + y, color);
            self.set(cx - x, cy - y, color);
            self.set(cx - y, cy - x, color);
            self.set(cx + y, cy - x, color);
            self.set(cx + x, cy - y, color);

            if err <= 0 {
                y += 1;
                err += 2 * y + 1;
            }
            if err > 0 {
                x -= 1;
                err -= 2 * x + 1;
            }
        }

        Ok(())
    }

    fn fill_circle(&mut self, cx: i32, cy: i32, radius: u16, color: Color) -> Result<()> {
        let r = radius as i32;
        for y in 0..=r {
            for x in 0..=r {
                if x * x + y * y <= r * r {
                    self.set(cx + x, cy + y, color);
                    self.set(cx - x, cy + y, color);
                    self.set(cx + x, cy - y, color);
                    self.set(cx - x, cy - y, color);
                }
            }
        }
        Ok(())
    }

    fn draw_round_rect(
        &mut self,
        x: i32,
        y: i32,
        width: u16,
        height: u16,
        corner: u16,
        color: Color,
    ) -> Result<()> {
        if width == 0 || height == 0 {
            return Ok(());
        }

        let w = width as i32;
        let h = height as i32;
        let r = (corner as i32).min(w / 2).min(h / 2);

        // Straight edges
        self.draw_hline(x + r, y, (w - 2 * r) as u16, color)?;
        self.draw_hline(x + r, y + h - 1, (w - 2 * r) as u16, color)?;
        for i in r..h - r {
            self.set(x, y + i, color);
            self.set(x + w - 1, y + i, color);
        }

        // Corner arcs
        let r16 = r as u16;
        self.corner_arc(x + r, y + r, r16, 0, color);
        self.corner_arc(x + w - 1 - r, y + r, r16, 1, color);
        self.corner_arc(x + w - 1 - r, y + h - 1 - r, r16, 2, color);
        self.corner_arc(x + r, y + h - 1 - r, r16, 3, color);
        Ok(())
    }

    fn fill_round_rect(
        &mut self,
        x: i32,
        y: i32,
        width: u16,
        height: u16,
        corner: u16,
        color: Color,
    ) -> Result<()> {
        if width == 0 || height == 0 {
            return Ok(());
        }

        let w = width as i32;
        let h = height as i32;
        let r = (corner as i32).min(w / 2).min(h / 2);

        self.fill_rect(x, y + r, width, (h - 2 * r) as u16, color)?;

        // Rounded caps, one scanline at a time
        for i in 0..r {
            let dy = r - i;
            let dx = Self::circle_span(r as u16, dy);
            let span = (w - 2 * r + 2 * dx) as u16;
            self.draw_hline(x + r - dx, y + i, span, color)?;
            self.draw_hline(x + r - dx, y + h - 1 - i, span, color)?;
        }
        Ok(())
    }

    fn draw_text(
        &mut self,
        x: i32,
        y: i32,
        text: &str,
        color: Color,
        anchor: TextAnchor,
        scale: u8,
    ) -> Result<()> {
        let scale = scale.max(1);
        let text_w = Self::text_width(text, scale);
        let text_h = FONT_HEIGHT as i32 * scale as i32;

        let (mut cursor_x, top_y) = match anchor {
            TextAnchor::TopLeft => (x, y),
            TextAnchor::TopCenter => (x - text_w / 2, y),
            TextAnchor::TopRight => (x - text_w, y),
            TextAnchor::MiddleCenter => (x - text_w / 2, y - text_h / 2),
        };

        let advance = FONT_WIDTH as i32 * scale as i32 + 1;
        for c in text.chars() {
            self.draw_char(cursor_x, top_y, c, color, scale);
            cursor_x += advance;
        }
        Ok(())
    }
}
