// UI theme definitions

use crate::display::colors::Color;

#[derive(Debug, Clone, Copy)]
pub struct ColorTheme {
    pub background: Color,
    pub surface: Color,
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub border: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

impl Default for ColorTheme {
    fn default() -> Self {
        // Midnight theme with the Operator accent palette
        Self {
            background: Color::BLACK,
            surface: Color::GLASS_BG,          // Frosted card background
            primary: Color::CYBER_BLUE,        // Electric blue
            secondary: Color::VIVID_PURPLE,    // Rich purple
            accent: Color::HOT_PINK,           // Signature pink
            text_primary: Color::WHITE,
            text_secondary: Color::SUNRISE,    // Warm gold
            border: Color::GLASS_HIGHLIGHT,    // Subtle glass line
            success: Color::CYBER_BLUE,
            warning: Color::AMBER,
            error: Color::HOT_PINK,
        }
    }
}

pub struct Theme {
    pub colors: ColorTheme,
    pub brightness: u8,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            colors: ColorTheme::default(),
            brightness: 100,
        }
    }
}

impl Theme {
    pub fn high_contrast() -> Self {
        Self {
            colors: ColorTheme {
                background: Color::BLACK,
                surface: Color::BLACK,
                primary: Color::WHITE,
                secondary: Color(0xC618), // LIGHT_GRAY for some contrast
                accent: Color::YELLOW,    // Maximum visibility
                text_primary: Color::WHITE,
                text_secondary: Color::WHITE,
                border: Color::WHITE,
                success: Color::GREEN,
                warning: Color::YELLOW,
                error: Color::RED,
            },
            brightness: 100,
        }
    }
}
