use crate::error::{AssistError, Result};
use image::RgbImage;
use minifb::{Key, KeyRepeat, ScaleMode, Window, WindowOptions};
use tracing::info;

use super::r#trait::FeedDisplay;

/// Окно minifb с живым видео. Закрывается при Drop.
pub struct FeedWindow {
    window: Window,
    quit_key: Key,
    buffer: Vec<u32>,
}

impl FeedWindow {
    pub fn open(title: &str, width: usize, height: usize, quit_key: Key) -> Result<Self> {
        let window = Window::new(
            title,
            width.max(1),
            height.max(1),
            WindowOptions {
                resize: true,
                scale_mode: ScaleMode::AspectRatioStretch,
                ..WindowOptions::default()
            },
        )
        .map_err(|e| AssistError::Display(format!("не удалось открыть окно '{}': {}", title, e)))?;

        info!("Окно вывода '{}' открыто ({}x{}), выход по {:?}", title, width, height, quit_key);

        Ok(Self {
            window,
            quit_key,
            buffer: Vec::new(),
        })
    }
}

impl FeedDisplay for FeedWindow {
    fn show(&mut self, image: &RgbImage) -> Result<()> {
        self.buffer.clear();
        self.buffer.extend(to_argb(image));

        self.window
            .update_with_buffer(&self.buffer, image.width() as usize, image.height() as usize)
            .map_err(|e| AssistError::Display(e.to_string()))
    }

    fn quit_requested(&self) -> bool {
        quit_signal(
            self.window.is_open(),
            self.window.is_key_pressed(self.quit_key, KeyRepeat::No),
        )
    }
}

impl Drop for FeedWindow {
    fn drop(&mut self) {
        info!("Окно вывода закрыто");
    }
}

/// Выход по закрытию окна или по новому нажатию клавиши. Удержание не считается.
fn quit_signal(window_open: bool, key_pressed: bool) -> bool {
    !window_open || key_pressed
}

/// minifb ждёт пиксели в формате 0RGB
fn to_argb(image: &RgbImage) -> impl Iterator<Item = u32> + '_ {
    image
        .pixels()
        .map(|p| u32::from_be_bytes([0, p[0], p[1], p[2]]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn packs_pixels_as_0rgb() {
        let mut image = RgbImage::new(2, 1);
        image.put_pixel(0, 0, Rgb([0x12, 0x34, 0x56]));
        image.put_pixel(1, 0, Rgb([0xff, 0x00, 0x80]));

        let packed: Vec<u32> = to_argb(&image).collect();
        assert_eq!(packed, vec![0x0012_3456, 0x00ff_0080]);
    }

    #[test]
    fn quit_on_close_or_fresh_press() {
        assert!(!quit_signal(true, false));
        assert!(quit_signal(true, true));
        assert!(quit_signal(false, false));
    }
}
