use crate::error::Result;
use image::RgbImage;
use tracing::info;

use super::r#trait::FeedDisplay;

/// Без окна: кадры отбрасываются, выход только по Ctrl+C
pub struct HeadlessDisplay;

impl HeadlessDisplay {
    pub fn new() -> Self {
        info!("Вывод кадров отключён, остановка по Ctrl+C");
        Self
    }
}

impl Default for HeadlessDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedDisplay for HeadlessDisplay {
    fn show(&mut self, _image: &RgbImage) -> Result<()> {
        Ok(())
    }

    fn quit_requested(&self) -> bool {
        false
    }
}
