// Reusable UI widgets: glass cards, gradient cards, app icons.
//
// These are layout compositions over the compositor primitives; the color
// math itself lives in display::colors and ui::effects.

use core::f32::consts::PI;
use core::fmt::Write;

use anyhow::Result;

use crate::display::colors::{blend, darken, lighten, Color};
use crate::display::{Surface, TextAnchor};
use crate::ui::effects::draw_icon_glow;

/// Frosted glass card with an accent border glow.
pub struct GlassCard {
    x: i32,
    y: i32,
    width: u16,
    height: u16,
    accent: Color,
}

impl GlassCard {
    pub fn new(x: i32, y: i32, width: u16, height: u16, accent: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            accent,
        }
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<()> {
        if self.width < 20 || self.height < 4 {
            return Ok(());
        }

        let (x, y, w, h) = (self.x, self.y, self.width, self.height);

        // Outer glow
        let glow = darken(self.accent, 70);
        surface.draw_round_rect(x - 1, y - 1, w + 2, h + 2, 10, glow)?;

        // Card body
        surface.fill_round_rect(x, y, w, h, 8, Color::GLASS_BG)?;

        // Top highlight (glass reflection)
        surface.draw_hline(x + 8, y + 1, w - 16, Color::GLASS_HIGHLIGHT)?;

        // Accent border
        surface.draw_round_rect(x, y, w, h, 8, darken(self.accent, 40))?;

        // Inner shadow along the bottom
        surface.draw_hline(x + 8, y + h as i32 - 2, w - 16, Color::BLACK)?;
        Ok(())
    }
}

/// Card with a vertical gradient fill, drop shadow and optional selection ring.
pub struct PremiumCard {
    x: i32,
    y: i32,
    width: u16,
    height: u16,
    color: Color,
    selected: bool,
}

impl PremiumCard {
    const CORNER: i32 = 8;

    pub fn new(x: i32, y: i32, width: u16, height: u16, color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            color,
            selected: false,
        }
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        let (x, y, w, h) = (self.x, self.y, self.width, self.height);

        // Shadow layers for depth
        surface.fill_round_rect(x + 4, y + 4, w, h, 8, Color::BLACK)?;
        surface.fill_round_rect(x + 2, y + 2, w, h, 8, Color::SHADOW_GRAY)?;

        // Gradient fill, scanline by scanline with a curved corner inset
        let top = lighten(self.color, 20);
        let bottom = darken(self.color, 30);
        let h32 = h as i32;

        for i in 0..h32 {
            let alpha = (i * 255 / h32) as u8;
            let line = blend(bottom, top, alpha);

            if i < Self::CORNER || i > h32 - Self::CORNER {
                let inset = if i < Self::CORNER {
                    Self::CORNER - i
                } else {
                    i - (h32 - Self::CORNER)
                };
                let inset = inset * inset / Self::CORNER;
                let span = (w as i32 - inset * 2).max(0) as u16;
                surface.draw_hline(x + inset, y + i, span, line)?;
            } else {
                surface.draw_hline(x, y + i, w, line)?;
            }
        }

        // Highlight edge along the top
        if w > 20 {
            surface.draw_hline(x + 10, y + 1, w - 20, lighten(self.color, 40))?;
        }

        if self.selected {
            surface.draw_round_rect(x - 2, y - 2, w + 4, h + 4, 10, Color::HOT_PINK)?;
            surface.draw_round_rect(x - 1, y - 1, w + 2, h + 2, 9, Color::HOT_PINK)?;
        }
        Ok(())
    }
}

/// Circular app icon with glow, gradient fill, highlight arc and an
/// optional notification badge.
pub struct AppIcon {
    cx: i32,
    cy: i32,
    radius: u16,
    color: Color,
    label: &'static str,
    badge: u32,
    pressed: bool,
}

impl AppIcon {
    pub fn new(cx: i32, cy: i32, radius: u16, color: Color, label: &'static str) -> Self {
        Self {
            cx,
            cy,
            radius,
            color,
            label,
            badge: 0,
            pressed: false,
        }
    }

    pub fn set_badge(&mut self, badge: u32) {
        self.badge = badge;
    }

    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<()> {
        if self.radius == 0 {
            return Ok(());
        }

        let (cx, cy, radius) = (self.cx, self.cy, self.radius);

        if !self.pressed {
            draw_icon_glow(surface, cx, cy, radius, self.color)?;
        }

        // Drop shadow
        surface.fill_circle(cx + 2, cy + 2, radius, Color::BLACK)?;

        let (top, bottom) = if self.pressed {
            (darken(self.color, 20), darken(self.color, 40))
        } else {
            (lighten(self.color, 15), darken(self.color, 20))
        };

        // Gradient fill approximated with concentric rings
        for r in (1..=radius).rev() {
            let progress = ((radius - r) as u32 * 255 / radius as u32) as u8;
            let ring = blend(bottom, top, progress);
            surface.draw_circle(cx, cy, r, ring)?;
        }
        surface.fill_circle(cx, cy, radius - 1, blend(top, bottom, 128))?;

        // Highlight arc across the top
        if !self.pressed && radius > 4 {
            let highlight = lighten(self.color, 50);
            let arc_r = (radius - 4) as f32;
            let mut deg = -45i32;
            while deg <= 45 {
                let angle = deg as f32 * PI / 180.0;
                let hx = cx + (arc_r * libm::sinf(angle)) as i32;
                let hy = cy - (arc_r * libm::cosf(angle)) as i32;
                surface.draw_pixel(hx, hy, highlight)?;
                deg += 5;
            }
        }

        // Outer ring
        let ring = if self.pressed {
            Color::WHITE
        } else {
            darken(self.color, 10)
        };
        surface.draw_circle(cx, cy, radius, ring)?;

        // Label
        let text_color = if self.pressed { self.color } else { Color::WHITE };
        surface.draw_text(cx, cy, self.label, text_color, TextAnchor::MiddleCenter, 1)?;

        if self.badge > 0 {
            self.draw_badge(surface)?;
        }
        Ok(())
    }

    fn draw_badge<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<()> {
        let bx = self.cx + self.radius as i32 - 6;
        let by = self.cy - self.radius as i32 + 6;

        surface.fill_circle(bx, by, 10, darken(Color::HOT_PINK, 50))?;
        surface.fill_circle(bx, by, 8, Color::HOT_PINK)?;

        let mut label: heapless::String<4> = heapless::String::new();
        if self.badge > 99 {
            label.push_str("99+").ok();
        } else {
            write!(label, "{}", self.badge).ok();
        }
        surface.draw_text(bx, by, &label, Color::WHITE, TextAnchor::MiddleCenter, 1)?;
        Ok(())
    }
}
