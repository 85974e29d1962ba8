use crate::error::CaptureError;
use crate::types::{Frame, Point, WindowRegion};
use image::{Rgb, RgbImage};
use parking_lot::Mutex;
use tracing::info;

use super::r#trait::FrameSource;

const BACKGROUND: Rgb<u8> = Rgb([24, 48, 24]);
const TARGET: Rgb<u8> = Rgb([230, 20, 20]);

/// Верхний предел размера синтетического кадра, чтобы dry-run не ел память
const MAX_SIDE: u32 = 1600;

/// Источник для dry-run: тёмный кадр с красным диском в центре.
/// Радиус диска сжимается от `max_radius` до `min_radius` и начинается заново.
pub struct SyntheticFrameSource {
    max_radius: u32,
    min_radius: u32,
    frames_per_sweep: u64,
    tick: Mutex<u64>,
}

impl SyntheticFrameSource {
    pub fn new(max_radius: u32, min_radius: u32, frames_per_sweep: u64) -> Self {
        info!(
            "Инициализация SyntheticFrameSource: радиус {}..{} за {} кадров",
            max_radius, min_radius, frames_per_sweep
        );
        Self {
            max_radius: max_radius.max(min_radius),
            min_radius,
            frames_per_sweep: frames_per_sweep.max(1),
            tick: Mutex::new(0),
        }
    }

    fn radius_at(&self, tick: u64) -> u32 {
        let phase = tick % self.frames_per_sweep;
        let span = (self.max_radius - self.min_radius) as u64;
        self.max_radius - (span * phase / self.frames_per_sweep) as u32
    }
}

impl Default for SyntheticFrameSource {
    fn default() -> Self {
        Self::new(80, 15, 120)
    }
}

impl FrameSource for SyntheticFrameSource {
    fn capture(&self, region: &WindowRegion) -> Result<Frame, CaptureError> {
        if region.is_empty() {
            return Err(CaptureError::source_closed(format!(
                "синтетическая область пуста: {}",
                region
            )));
        }

        let tick = {
            let mut tick = self.tick.lock();
            let current = *tick;
            *tick += 1;
            current
        };

        let width = region.width.min(MAX_SIDE);
        let height = region.height.min(MAX_SIDE);
        let mut image = RgbImage::from_pixel(width, height, BACKGROUND);
        let center = Point::new((width / 2) as i32, (height / 2) as i32);
        paint_disc(&mut image, center, self.radius_at(tick), TARGET);

        Ok(Frame::new(image, Point::new(region.left, region.top)))
    }
}

/// Залитый диск; пиксели за краем изображения пропускаются
pub fn paint_disc(image: &mut RgbImage, center: Point, radius: u32, color: Rgb<u8>) {
    let r = radius as i64;
    let (width, height) = (image.width() as i64, image.height() as i64);

    for y in (center.y as i64 - r).max(0)..=(center.y as i64 + r).min(height - 1) {
        for x in (center.x as i64 - r).max(0)..=(center.x as i64 + r).min(width - 1) {
            let dx = x - center.x as i64;
            let dy = y - center.y as i64;
            if dx * dx + dy * dy <= r * r {
                image.put_pixel(x as u32, y as u32, color);
            }
        }
    }
}
