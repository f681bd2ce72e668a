pub mod effects;
pub mod screens;
pub mod theme;
pub mod widgets;

use anyhow::Result;

use crate::config::{ThemeKind, UiConfig};
use crate::display::Surface;
use screens::{HomeScreen, LockScreen, Screen};
use theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveScreen {
    Lock,
    Home,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
    Button1Click,
    Button2Click,
}

pub struct UiManager {
    config: UiConfig,
    theme: Theme,
    active: ActiveScreen,
    pub lock: LockScreen,
    pub home: HomeScreen,
}

impl UiManager {
    pub fn new(config: UiConfig) -> Self {
        let theme = match config.theme {
            ThemeKind::Midnight => Theme::default(),
            ThemeKind::HighContrast => Theme::high_contrast(),
        };
        log::info!(
            "UI manager ready (theme: {:?}, animations: {})",
            config.theme,
            config.show_animations
        );

        Self {
            config,
            theme,
            active: ActiveScreen::Lock,
            lock: LockScreen::new(),
            home: HomeScreen::new(),
        }
    }

    pub fn active(&self) -> ActiveScreen {
        self.active
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn unlock(&mut self) {
        if self.active != ActiveScreen::Home {
            log::info!("Unlocking");
            self.active = ActiveScreen::Home;
        }
    }

    pub fn lock_device(&mut self) {
        if self.active != ActiveScreen::Lock {
            log::info!("Locking");
            self.active = ActiveScreen::Lock;
        }
    }

    pub fn handle_button_event(&mut self, event: ButtonEvent) {
        match (self.active, event) {
            (ActiveScreen::Lock, ButtonEvent::Button2Click) => self.unlock(),
            (ActiveScreen::Home, ButtonEvent::Button1Click) => self.lock_device(),
            (ActiveScreen::Home, ButtonEvent::Button2Click) => {
                let next = (self.home.active_nav() + 1) % 2;
                log::info!("Nav -> {}", next);
                self.home.set_active_nav(next);
            }
            _ => {}
        }
    }

    /// Render the active screen. When animations are disabled in config the
    /// time-driven effects are frozen at phase zero.
    pub fn render(&self, surface: &mut dyn Surface, time_ms: u32) -> Result<()> {
        let t = if self.config.show_animations {
            time_ms
        } else {
            0
        };

        match self.active {
            ActiveScreen::Lock => self.lock.draw(surface, &self.theme, t),
            ActiveScreen::Home => self.home.draw(surface, &self.theme, t),
        }
    }
}
