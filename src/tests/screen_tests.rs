// Full-screen renders against the headless framebuffer

use crate::config::UiConfig;
use crate::display::colors::{blend, Color};
use crate::display::Framebuffer;
use crate::ui::screens::{HomeScreen, LockScreen, Screen};
use crate::ui::theme::Theme;
use crate::ui::{ActiveScreen, ButtonEvent, UiManager};

const PANEL_W: u16 = 240;
const PANEL_H: u16 = 320;

#[test]
fn test_lock_screen_background_and_button() {
    let mut fb = Framebuffer::new(PANEL_W, PANEL_H);
    let theme = Theme::default();

    let mut screen = LockScreen::new();
    screen.set_clock("12:34", "WED AUG 6");
    screen.set_status(true, 87);
    screen.draw(&mut fb, &theme, 0).unwrap();

    // Top scanline of the background gradient is the exact top color
    assert_eq!(fb.pixel(5, 0), Some(Color::MIDNIGHT_BLUE));

    // At time 0 the unlock border pulse sits at its midpoint
    let pulse = blend(Color::WHITE, Color::BLACK, 128);
    let cx = PANEL_W as i32 / 2;
    let button_y = PANEL_H as i32 - 50;
    assert_eq!(fb.pixel(cx, button_y), Some(pulse));

    // WiFi dot in the top-left corner
    assert_eq!(fb.pixel(20, 20), Some(Color::CYBER_BLUE));
}

#[test]
fn test_lock_screen_animates_with_time() {
    let theme = Theme::default();
    let mut screen = LockScreen::new();
    screen.set_clock("12:34", "WED AUG 6");

    let mut early = Framebuffer::new(PANEL_W, PANEL_H);
    screen.draw(&mut early, &theme, 0).unwrap();

    let mut late = Framebuffer::new(PANEL_W, PANEL_H);
    screen.draw(&mut late, &theme, 700).unwrap();

    assert_ne!(early.pixels(), late.pixels());
}

#[test]
fn test_home_screen_battery_thresholds() {
    let theme = Theme::default();
    let bx = PANEL_W as i32 - 45;

    for (percent, expected) in [
        (80u8, Color::SUNRISE),
        (35, Color::AMBER),
        (10, Color::HOT_PINK),
    ] {
        let mut fb = Framebuffer::new(PANEL_W, PANEL_H);
        let mut screen = HomeScreen::new();
        screen.set_clock("12:34");
        screen.set_status(true, percent);
        screen.draw(&mut fb, &theme, 0).unwrap();

        // Top-left corner of the battery icon outline
        assert_eq!(fb.pixel(bx, 5), Some(expected), "at {}%", percent);
    }
}

#[test]
fn test_home_screen_nav_highlight_follows_selection() {
    let theme = Theme::default();
    let nav_top = PANEL_H as i32 - 50;
    let probe_y = nav_top + 10;
    let next_x = PANEL_W as i32 - 90;

    let mut screen = HomeScreen::new();
    screen.set_clock("12:34");

    let mut fb = Framebuffer::new(PANEL_W, PANEL_H);
    screen.draw(&mut fb, &theme, 0).unwrap();
    assert_eq!(fb.pixel(50, probe_y), Some(Color::VIVID_PURPLE));
    assert_eq!(fb.pixel(next_x + 40, probe_y), Some(Color::GLASS_BG));

    screen.set_active_nav(1);
    let mut fb = Framebuffer::new(PANEL_W, PANEL_H);
    screen.draw(&mut fb, &theme, 0).unwrap();
    assert_eq!(fb.pixel(50, probe_y), Some(Color::GLASS_BG));
    assert_eq!(fb.pixel(next_x + 40, probe_y), Some(Color::HOT_PINK));
}

#[test]
fn test_manager_starts_locked_and_unlocks() {
    let mut ui = UiManager::new(UiConfig::default());
    assert_eq!(ui.active(), ActiveScreen::Lock);

    ui.handle_button_event(ButtonEvent::Button2Click);
    assert_eq!(ui.active(), ActiveScreen::Home);

    // Button 2 on the home screen cycles the nav selection instead
    ui.handle_button_event(ButtonEvent::Button2Click);
    assert_eq!(ui.active(), ActiveScreen::Home);
    assert_eq!(ui.home.active_nav(), 1);

    ui.handle_button_event(ButtonEvent::Button1Click);
    assert_eq!(ui.active(), ActiveScreen::Lock);
}

#[test]
fn test_manager_render_smoke() {
    let mut ui = UiManager::new(UiConfig::default());
    ui.lock.set_clock("09:15", "THU JAN 1");
    ui.lock.set_status(false, 42);

    let mut fb = Framebuffer::new(PANEL_W, PANEL_H);
    ui.render(&mut fb, 12345).unwrap();
    assert!(fb.pixels().iter().any(|&p| p != 0));

    ui.unlock();
    ui.home.set_clock("09:15");
    ui.render(&mut fb, 12345).unwrap();
    assert!(fb.pixels().iter().any(|&p| p != 0));
}

#[test]
fn test_animations_disabled_freezes_frames() {
    let config = UiConfig {
        show_animations: false,
        ..UiConfig::default()
    };
    let mut ui = UiManager::new(config);
    ui.lock.set_clock("12:34", "WED AUG 6");

    let mut a = Framebuffer::new(PANEL_W, PANEL_H);
    ui.render(&mut a, 1000).unwrap();
    let mut b = Framebuffer::new(PANEL_W, PANEL_H);
    ui.render(&mut b, 2000).unwrap();

    assert_eq!(a.pixels(), b.pixels());
}
