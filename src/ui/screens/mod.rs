// Full-surface screen compositions

mod home;
mod lock;

pub use home::HomeScreen;
pub use lock::LockScreen;

use anyhow::Result;

use crate::display::Surface;
use crate::ui::theme::Theme;

pub trait Screen {
    fn title(&self) -> &str;

    /// Render one frame. `time_ms` drives any animated elements; passing a
    /// constant freezes them.
    fn draw(&self, surface: &mut dyn Surface, theme: &Theme, time_ms: u32) -> Result<()>;
}
