// Home screen: status bar, app icon row, bottom navigation.

use core::fmt::Write;

use anyhow::Result;

use crate::display::colors::{blend, darken, Color};
use crate::display::{Surface, TextAnchor};
use crate::ui::effects::{draw_icon_glow, draw_premium_background, draw_vertical_gradient};
use crate::ui::theme::Theme;
use crate::ui::widgets::AppIcon;

use super::Screen;

const STATUS_BAR_HEIGHT: u16 = 22;
const NAV_HEIGHT: u16 = 50;

pub struct HomeScreen {
    clock_text: heapless::String<8>,
    wifi_connected: bool,
    battery_percent: u8,
    active_nav: usize,
    unread_count: u32,
}

impl HomeScreen {
    pub fn new() -> Self {
        Self {
            clock_text: heapless::String::new(),
            wifi_connected: false,
            battery_percent: 100,
            active_nav: 0,
            unread_count: 0,
        }
    }

    pub fn set_clock(&mut self, time: &str) {
        self.clock_text.clear();
        self.clock_text.push_str(time).ok();
    }

    pub fn set_status(&mut self, wifi_connected: bool, battery_percent: u8) {
        self.wifi_connected = wifi_connected;
        self.battery_percent = battery_percent.min(100);
    }

    pub fn set_active_nav(&mut self, index: usize) {
        self.active_nav = index % 2;
    }

    pub fn active_nav(&self) -> usize {
        self.active_nav
    }

    pub fn set_unread_count(&mut self, count: u32) {
        self.unread_count = count;
    }

    fn draw_status_bar(&self, surface: &mut dyn Surface, theme: &Theme) -> Result<()> {
        let w = surface.width();

        draw_vertical_gradient(
            surface,
            0,
            0,
            w,
            STATUS_BAR_HEIGHT,
            Color::GLASS_BG,
            Color::SHADOW_GRAY,
        )?;
        surface.draw_hline(0, STATUS_BAR_HEIGHT as i32 - 1, w, Color::GLASS_HIGHLIGHT)?;

        // WiFi indicator
        if self.wifi_connected {
            surface.fill_circle(12, 11, 4, theme.colors.primary)?;
            surface.draw_circle(12, 11, 6, darken(theme.colors.primary, 60))?;
            surface.draw_text(20, 4, "WIFI", theme.colors.primary, TextAnchor::TopLeft, 1)?;
        } else {
            surface.draw_text(8, 4, "OFFLINE", theme.colors.error, TextAnchor::TopLeft, 1)?;
        }

        // Clock, centered
        surface.draw_text(
            w as i32 / 2,
            4,
            &self.clock_text,
            theme.colors.text_primary,
            TextAnchor::TopCenter,
            1,
        )?;

        // Battery, color-coded
        let batt_color = if self.battery_percent > 50 {
            theme.colors.text_secondary
        } else if self.battery_percent > 20 {
            theme.colors.warning
        } else {
            theme.colors.error
        };

        let mut label: heapless::String<8> = heapless::String::new();
        write!(label, "{}%", self.battery_percent).ok();
        surface.draw_text(w as i32 - 5, 4, &label, batt_color, TextAnchor::TopRight, 1)?;

        // Battery icon
        let bx = w as i32 - 45;
        surface.draw_rect(bx, 5, 16, 10, batt_color)?;
        surface.fill_rect(bx + 16, 7, 2, 6, batt_color)?;
        let fill = (self.battery_percent as i32 * 14 / 100).max(0) as u16;
        if fill > 0 {
            surface.fill_rect(bx + 1, 6, fill, 8, batt_color)?;
        }
        Ok(())
    }

    fn draw_app_row(&self, surface: &mut dyn Surface) -> Result<()> {
        let w = surface.width() as i32;
        let cy = surface.height() as i32 / 2 - 20;
        let spacing = w / 4;

        let mut chat = AppIcon::new(spacing, cy, 28, Color::HOT_PINK, "CHAT");
        chat.set_badge(self.unread_count);
        chat.draw(surface)?;

        AppIcon::new(spacing * 2, cy, 28, Color::CYBER_BLUE, "STATS").draw(surface)?;
        AppIcon::new(spacing * 3, cy, 28, Color::VIVID_PURPLE, "APPS").draw(surface)?;
        Ok(())
    }

    fn draw_bottom_nav(&self, surface: &mut dyn Surface) -> Result<()> {
        let w = surface.width();
        let nav_top = surface.height() as i32 - NAV_HEIGHT as i32;
        let button_y = nav_top + 5;
        let label_y = nav_top + 25;

        draw_vertical_gradient(
            surface,
            0,
            nav_top,
            w,
            NAV_HEIGHT,
            Color::SHADOW_GRAY,
            Color::GLASS_BG,
        )?;

        // Pink-to-purple accent along the top edge
        for i in 0..w as i32 {
            let alpha = (i * 255 / w as i32) as u8;
            let line = blend(Color::HOT_PINK, Color::VIVID_PURPLE, alpha);
            surface.draw_pixel(i, nav_top, darken(line, 50))?;
        }

        // Home button (left)
        if self.active_nav == 0 {
            draw_icon_glow(surface, 50, label_y, 18, Color::VIVID_PURPLE)?;
        }
        let home_fill = if self.active_nav == 0 {
            Color::VIVID_PURPLE
        } else {
            Color::GLASS_BG
        };
        surface.fill_round_rect(10, button_y, 80, 40, 8, home_fill)?;
        surface.draw_round_rect(10, button_y, 80, 40, 8, Color::VIVID_PURPLE)?;
        surface.draw_text(50, label_y, "HOME", Color::WHITE, TextAnchor::MiddleCenter, 1)?;

        // Center indicator dot
        let cx = w as i32 / 2;
        surface.fill_circle(cx, label_y, 6, Color::CYBER_BLUE)?;
        surface.draw_circle(cx, label_y, 8, darken(Color::CYBER_BLUE, 50))?;

        // Next button (right)
        let next_x = w as i32 - 90;
        if self.active_nav == 1 {
            draw_icon_glow(surface, next_x + 40, label_y, 18, Color::HOT_PINK)?;
        }
        let next_fill = if self.active_nav == 1 {
            Color::HOT_PINK
        } else {
            Color::GLASS_BG
        };
        surface.fill_round_rect(next_x, button_y, 80, 40, 8, next_fill)?;
        surface.draw_round_rect(next_x, button_y, 80, 40, 8, Color::HOT_PINK)?;
        surface.draw_text(
            next_x + 40,
            label_y,
            "NEXT",
            Color::WHITE,
            TextAnchor::MiddleCenter,
            1,
        )?;
        Ok(())
    }
}

impl Default for HomeScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for HomeScreen {
    fn title(&self) -> &str {
        "Home"
    }

    fn draw(&self, surface: &mut dyn Surface, theme: &Theme, _time_ms: u32) -> Result<()> {
        draw_premium_background(surface)?;
        self.draw_status_bar(surface, theme)?;
        self.draw_app_row(surface)?;
        self.draw_bottom_nav(surface)?;
        Ok(())
    }
}
