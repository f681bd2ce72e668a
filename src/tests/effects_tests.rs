// Gradient and glow rendering against the headless framebuffer

use crate::display::colors::{blend, Color};
use crate::display::Framebuffer;
use crate::ui::effects::{
    draw_premium_background, draw_pulsing_glow, draw_radial_glow, draw_vertical_gradient,
};

#[test]
fn test_uniform_gradient_when_endpoints_match() {
    let mut fb = Framebuffer::new(32, 32);
    draw_vertical_gradient(&mut fb, 0, 0, 32, 32, Color::CYBER_BLUE, Color::CYBER_BLUE).unwrap();

    assert!(fb.pixels().iter().all(|&p| p == Color::CYBER_BLUE.0));
}

#[test]
fn test_gradient_starts_at_top_color() {
    let mut fb = Framebuffer::new(16, 40);
    draw_vertical_gradient(&mut fb, 0, 0, 16, 40, Color::WHITE, Color::BLACK).unwrap();

    // Scanline 0 blends with alpha 0, which is exactly the top color
    assert_eq!(fb.pixel(8, 0), Some(Color::WHITE));
}

#[test]
fn test_gradient_rows_fade_monotonically() {
    let mut fb = Framebuffer::new(8, 64);
    draw_vertical_gradient(&mut fb, 0, 0, 8, 64, Color::WHITE, Color::BLACK).unwrap();

    let mut prev = fb.pixel(4, 0).unwrap().channels();
    for y in 1..64 {
        let cur = fb.pixel(4, y).unwrap().channels();
        assert!(cur.r <= prev.r && cur.g <= prev.g && cur.b <= prev.b);
        prev = cur;
    }
}

#[test]
fn test_gradient_rows_match_blend_formula() {
    let height = 48u16;
    let mut fb = Framebuffer::new(8, height);
    draw_vertical_gradient(
        &mut fb,
        0,
        0,
        8,
        height,
        Color::SUNRISE,
        Color::VIVID_PURPLE,
    )
    .unwrap();

    for i in 0..height as u32 {
        let alpha = (i * 255 / height as u32) as u8;
        let expected = blend(Color::VIVID_PURPLE, Color::SUNRISE, alpha);
        assert_eq!(fb.pixel(3, i as i32), Some(expected), "scanline {}", i);
    }
}

#[test]
fn test_degenerate_gradient_is_noop() {
    let mut fb = Framebuffer::new(16, 16);
    draw_vertical_gradient(&mut fb, 0, 0, 16, 0, Color::WHITE, Color::BLACK).unwrap();
    draw_vertical_gradient(&mut fb, 0, 0, 0, 16, Color::WHITE, Color::BLACK).unwrap();

    assert!(fb.pixels().iter().all(|&p| p == 0));
}

#[test]
fn test_radial_glow_zero_radius_is_noop() {
    let mut fb = Framebuffer::new(16, 16);
    draw_radial_glow(&mut fb, 8, 8, 0, Color::HOT_PINK).unwrap();

    assert!(fb.pixels().iter().all(|&p| p == 0));
}

#[test]
fn test_radial_glow_outer_ring_color() {
    let mut fb = Framebuffer::new(64, 64);
    draw_radial_glow(&mut fb, 32, 32, 20, Color::HOT_PINK).unwrap();

    // Outermost ring carries alpha r*60/r = 60
    let expected = blend(Color::HOT_PINK, Color::BLACK, 60);
    assert_eq!(fb.pixel(52, 32), Some(expected));
}

#[test]
fn test_radial_glow_fades_inward() {
    let mut fb = Framebuffer::new(64, 64);
    draw_radial_glow(&mut fb, 32, 32, 21, Color::WHITE).unwrap();

    // Rings step down by 2, so radius 21 and 19 are both drawn; the inner
    // one carries less alpha and is therefore darker.
    let outer = fb.pixel(32 + 21, 32).unwrap().channels();
    let inner = fb.pixel(32 + 19, 32).unwrap().channels();
    assert!(inner.r < outer.r && inner.g < outer.g && inner.b < outer.b);
}

#[test]
fn test_radial_glow_clips_offscreen_center() {
    let mut fb = Framebuffer::new(32, 32);
    // Center outside the surface; must clip, not panic
    draw_radial_glow(&mut fb, -10, -10, 15, Color::CYBER_BLUE).unwrap();
    draw_radial_glow(&mut fb, 40, 16, 15, Color::CYBER_BLUE).unwrap();
}

#[test]
fn test_pulsing_glow_is_deterministic() {
    let mut a = Framebuffer::new(64, 64);
    let mut b = Framebuffer::new(64, 64);
    draw_pulsing_glow(&mut a, 32, 32, 12, Color::CYBER_BLUE, 1234).unwrap();
    draw_pulsing_glow(&mut b, 32, 32, 12, Color::CYBER_BLUE, 1234).unwrap();

    assert_eq!(a.pixels(), b.pixels());
}

#[test]
fn test_pulsing_glow_radius_breathes() {
    // sin(pi/2) = 1 -> radius at 1.1x; time for that phase: 300 * pi/2 ~ 471
    let mut expanded = Framebuffer::new(64, 64);
    draw_pulsing_glow(&mut expanded, 32, 32, 20, Color::WHITE, 471).unwrap();

    // sin(3*pi/2) = -1 -> radius at 0.9x; time ~ 1414
    let mut contracted = Framebuffer::new(64, 64);
    draw_pulsing_glow(&mut contracted, 32, 32, 20, Color::WHITE, 1414).unwrap();

    assert_ne!(expanded.pixels(), contracted.pixels());

    // The expanded pass reaches rings the contracted pass never touches
    let ink_beyond = |fb: &Framebuffer| {
        (60..64).any(|x| fb.pixel(x, 32) != Some(Color::BLACK))
    };
    assert!(ink_beyond(&expanded));
    assert!(!ink_beyond(&contracted));
}

#[test]
fn test_premium_background_covers_surface() {
    let mut fb = Framebuffer::new(24, 48);
    draw_premium_background(&mut fb).unwrap();

    assert_eq!(fb.pixel(0, 0), Some(Color::SHADOW_GRAY));

    // Bottom row is nearly black, and never brighter than the top
    let top = fb.pixel(12, 0).unwrap().channels();
    let bottom = fb.pixel(12, 47).unwrap().channels();
    assert!(bottom.r <= top.r && bottom.g <= top.g && bottom.b <= top.b);
}
