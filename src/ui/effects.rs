// Gradient and glow effects.
//
// Everything here is a pure function of its inputs plus the surface it
// draws on. Animated effects take the current time in milliseconds as a
// plain parameter; nothing is retained between calls.

use anyhow::Result;

use crate::display::colors::{blend, darken, Color};
use crate::display::Surface;

/// Draw a top-to-bottom linear gradient, one scanline at a time.
/// Zero width or height is a no-op.
pub fn draw_vertical_gradient<S: Surface + ?Sized>(
    surface: &mut S,
    x: i32,
    y: i32,
    width: u16,
    height: u16,
    top: Color,
    bottom: Color,
) -> Result<()> {
    if width == 0 || height == 0 {
        return Ok(());
    }

    for i in 0..height as u32 {
        let alpha = (i * 255 / height as u32) as u8;
        let color = blend(bottom, top, alpha);
        surface.draw_hline(x, y + i as i32, width, color)?;
    }
    Ok(())
}

/// Concentric fading rings around a center point. The outermost ring
/// carries the most alpha, so intensity falls off toward the edge.
/// Zero radius is a no-op.
pub fn draw_radial_glow<S: Surface + ?Sized>(
    surface: &mut S,
    cx: i32,
    cy: i32,
    radius: u16,
    color: Color,
) -> Result<()> {
    if radius == 0 {
        return Ok(());
    }

    let mut r = radius as i32;
    while r > 0 {
        let alpha = (r * 60 / radius as i32) as u8;
        let ring = blend(color, Color::BLACK, alpha);
        surface.draw_circle(cx, cy, r as u16, ring)?;
        r -= 2;
    }
    Ok(())
}

/// Three dimmed outline rings just outside an icon's radius.
pub fn draw_icon_glow<S: Surface + ?Sized>(
    surface: &mut S,
    cx: i32,
    cy: i32,
    radius: u16,
    color: Color,
) -> Result<()> {
    for i in (1..=3u16).rev() {
        let ring = darken(color, 60 + (i as u8 * 10));
        surface.draw_circle(cx, cy, radius + i * 2, ring)?;
    }
    Ok(())
}

/// Expanding rings whose base radius breathes with wall-clock time.
/// Oscillates between 0.9x and 1.1x of `base_radius` with a period of
/// 2*pi*300 ms. Callers re-invoke per frame with the current timestamp.
pub fn draw_pulsing_glow<S: Surface + ?Sized>(
    surface: &mut S,
    cx: i32,
    cy: i32,
    base_radius: u16,
    color: Color,
    time_ms: u32,
) -> Result<()> {
    let pulse = 1.0 + 0.1 * libm::sinf(time_ms as f32 / 300.0);
    let radius = (base_radius as f32 * pulse) as i32;

    for i in 0..4i32 {
        let alpha = (80 - i * 20) as u8;
        let ring = blend(color, Color::BLACK, alpha);
        let r = radius + i * 3;
        if r > 0 {
            surface.draw_circle(cx, cy, r as u16, ring)?;
        }
    }
    Ok(())
}

/// Full-surface background wash: very dark gray at the top fading to black.
pub fn draw_premium_background<S: Surface + ?Sized>(surface: &mut S) -> Result<()> {
    let (w, h) = (surface.width(), surface.height());
    draw_vertical_gradient(surface, 0, 0, w, h, Color::SHADOW_GRAY, Color::BLACK)
}
