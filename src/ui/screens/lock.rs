// Lock screen: ambient glow orbs, glowing clock, pulsing unlock button.
//
// Layout is tuned for the 240x320 portrait panel; horizontal positions
// derive from the surface width so narrower targets stay centered.

use anyhow::Result;

use crate::display::colors::{blend, darken, Color};
use crate::display::{Surface, TextAnchor};
use crate::ui::effects::{draw_radial_glow, draw_vertical_gradient};
use crate::ui::theme::Theme;

use super::Screen;

pub struct LockScreen {
    time_text: heapless::String<8>,
    date_text: heapless::String<16>,
    wifi_connected: bool,
    battery_percent: u8,
}

impl LockScreen {
    pub fn new() -> Self {
        Self {
            time_text: heapless::String::new(),
            date_text: heapless::String::new(),
            wifi_connected: false,
            battery_percent: 100,
        }
    }

    pub fn set_clock(&mut self, time: &str, date: &str) {
        self.time_text.clear();
        self.time_text.push_str(time).ok();
        self.date_text.clear();
        self.date_text.push_str(date).ok();
    }

    pub fn set_status(&mut self, wifi_connected: bool, battery_percent: u8) {
        self.wifi_connected = wifi_connected;
        self.battery_percent = battery_percent.min(100);
    }
}

impl Default for LockScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for LockScreen {
    fn title(&self) -> &str {
        "Lock"
    }

    fn draw(&self, surface: &mut dyn Surface, _theme: &Theme, time_ms: u32) -> Result<()> {
        let w = surface.width();
        let h = surface.height() as i32;
        let cx = w as i32 / 2;

        // Background: dark blue fading to black
        draw_vertical_gradient(surface, 0, 0, w, h as u16, Color::MIDNIGHT_BLUE, Color::BLACK)?;

        // Ambient glow orbs drifting on slow sine paths
        let t = time_ms as f32 / 5000.0;

        let orb1_x = (w as i32 - 60) + (20.0 * libm::sinf(t)) as i32;
        let orb1_y = 80 + (15.0 * libm::cosf(t * 0.7)) as i32;
        draw_radial_glow(surface, orb1_x, orb1_y, 40, darken(Color::HOT_PINK, 70))?;

        let orb2_x = 60 + (15.0 * libm::sinf(t * 0.5 + 2.0)) as i32;
        let orb2_y = (h - 80) + (20.0 * libm::cosf(t * 0.8)) as i32;
        draw_radial_glow(surface, orb2_x, orb2_y, 50, darken(Color::CYBER_BLUE, 75))?;

        // Clock with a soft glow behind it
        let glow = darken(Color::WHITE, 80);
        surface.draw_text(cx + 1, 101, &self.time_text, glow, TextAnchor::MiddleCenter, 4)?;
        surface.draw_text(cx - 1, 99, &self.time_text, glow, TextAnchor::MiddleCenter, 4)?;
        surface.draw_text(
            cx,
            100,
            &self.time_text,
            Color::WHITE,
            TextAnchor::MiddleCenter,
            4,
        )?;

        surface.draw_text(
            cx,
            150,
            &self.date_text,
            Color::SUNRISE,
            TextAnchor::MiddleCenter,
            1,
        )?;

        // Divider that fades in from both ends
        for i in 0..120i32 {
            let alpha = if i < 60 { i * 4 } else { (120 - i) * 4 };
            let line = blend(Color::HOT_PINK, Color::BLACK, alpha.min(255) as u8);
            surface.draw_pixel(cx - 60 + i, 175, line)?;
        }

        // Branding
        surface.draw_text(
            cx,
            200,
            "OPERATOR",
            Color::HOT_PINK,
            TextAnchor::MiddleCenter,
            2,
        )?;
        surface.draw_text(
            cx,
            230,
            "BY BLACKROAD OS",
            darken(Color::CYBER_BLUE, 30),
            TextAnchor::MiddleCenter,
            1,
        )?;

        // Unlock button with a pulsing border
        let pulse = 128.0 + 127.0 * libm::sinf(time_ms as f32 / 400.0);
        let pulse_color = blend(Color::WHITE, Color::BLACK, pulse as u8);

        let button_y = h - 50;
        surface.draw_round_rect(cx - 62, button_y - 2, 124, 44, 22, darken(Color::WHITE, 70))?;
        surface.draw_round_rect(cx - 61, button_y - 1, 122, 42, 21, darken(Color::WHITE, 50))?;
        surface.draw_round_rect(cx - 60, button_y, 120, 40, 20, pulse_color)?;
        surface.draw_text(
            cx,
            button_y + 20,
            "TAP TO UNLOCK",
            Color::WHITE,
            TextAnchor::MiddleCenter,
            1,
        )?;

        // Status corners
        if self.wifi_connected {
            surface.fill_circle(20, 20, 5, Color::CYBER_BLUE)?;
            surface.draw_circle(20, 20, 7, darken(Color::CYBER_BLUE, 50))?;
        }

        let mut batt: heapless::String<8> = heapless::String::new();
        {
            use core::fmt::Write;
            write!(batt, "{}%", self.battery_percent).ok();
        }
        surface.draw_text(
            w as i32 - 15,
            15,
            &batt,
            Color::SUNRISE,
            TextAnchor::TopRight,
            1,
        )?;

        Ok(())
    }
}
