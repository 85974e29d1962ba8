use crate::config::DisplayConfig;
use crate::error::{AssistError, Result};
use crate::types::WindowRegion;
use image::RgbImage;

use super::quit_key::QuitKeyMap;

/// Поверхность вывода кадров
pub trait FeedDisplay {
    fn show(&mut self, image: &RgbImage) -> Result<()>;

    /// Оператор попросил остановить цикл
    fn quit_requested(&self) -> bool;
}

/// Фабрика: окно minifb или заглушка без вывода
pub fn create_feed_display(
    config: &DisplayConfig,
    headless: bool,
    initial: &WindowRegion,
) -> Result<Box<dyn FeedDisplay>> {
    if headless || !config.enabled {
        return Ok(Box::new(super::headless::HeadlessDisplay::new()));
    }

    let quit_key = QuitKeyMap::get_key(&config.quit_key).map_err(AssistError::Display)?;
    Ok(Box::new(super::feed_window::FeedWindow::open(
        &config.title,
        initial.width as usize,
        initial.height as usize,
        quit_key,
    )?))
}
