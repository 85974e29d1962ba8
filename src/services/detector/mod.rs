//! ColorMaskDetector: поиск цветной круглой цели в кадре.
//!
//! Кадр переводится в HSV, из него строится бинарная маска по диапазону цвета,
//! по маске ищутся окружности Хафа. Промах - обычный результат итерации, не ошибка.

mod params;
pub mod pipeline;

pub use params::HoughParams;

use crate::debug_if_enabled;
use crate::error::Result;
use crate::types::{ColorRange, DetectedCircle, Frame};

#[derive(Debug, Clone)]
pub struct ColorMaskDetector {
    params: HoughParams,
}

impl ColorMaskDetector {
    pub fn new(params: HoughParams) -> Self {
        Self { params }
    }

    /// Первая окружность, которую вернул OpenCV, с округлёнными координатами
    pub fn detect(&self, frame: &Frame, range: &ColorRange) -> Result<Option<DetectedCircle>> {
        if range.is_degenerate() {
            return Ok(None);
        }

        let rgb = pipeline::to_mat(frame.image())?;
        let mask = pipeline::color_mask(&rgb, range)?;
        if pipeline::is_blank(&mask)? {
            return Ok(None);
        }

        let circles = pipeline::find_circles(&mask, &self.params)?;
        debug_if_enabled!("Найдено окружностей в кадре: {}", circles.len());

        Ok(circles.first().map(|c| DetectedCircle {
            x: c.x.round() as i32,
            y: c.y.round() as i32,
            radius: c.radius.round().max(0.0) as u32,
        }))
    }
}

impl Default for ColorMaskDetector {
    fn default() -> Self {
        Self::new(HoughParams::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::frame_source::synthetic::paint_disc;
    use crate::types::Point;
    use image::{Rgb, RgbImage};

    const RED: Rgb<u8> = Rgb([255, 0, 0]);
    const BACKGROUND: Rgb<u8> = Rgb([20, 40, 20]);
    const SIDE: u32 = 520;

    fn frame_with_disc(cx: i32, cy: i32, r: u32) -> Frame {
        let mut image = RgbImage::from_pixel(SIDE, SIDE, BACKGROUND);
        paint_disc(&mut image, Point::new(cx, cy), r, RED);
        Frame::new(image, Point::default())
    }

    #[test]
    fn locates_disc_across_radius_window() {
        let detector = ColorMaskDetector::default();
        let mut misses = Vec::new();

        for r in (10..=199u32).step_by(9) {
            for &(cx, cy) in &[(260, 260), (253, 267), (266, 255)] {
                let found = detector
                    .detect(&frame_with_disc(cx, cy, r), &ColorRange::default())
                    .unwrap();

                let ok = found.is_some_and(|c| {
                    (c.x - cx).abs() <= 3
                        && (c.y - cy).abs() <= 3
                        && (c.radius as i32 - r as i32).abs() <= 3
                });
                if !ok {
                    misses.push(((cx, cy, r), found));
                }
            }
        }

        assert!(misses.is_empty(), "промахи: {:?}", misses);
    }

    #[test]
    fn frame_without_target_color_yields_none() {
        let mut image = RgbImage::from_pixel(400, 400, BACKGROUND);
        // синий диск вне красного диапазона
        paint_disc(&mut image, Point::new(200, 200), 40, Rgb([0, 0, 255]));
        let frame = Frame::new(image, Point::default());

        let found = ColorMaskDetector::default()
            .detect(&frame, &ColorRange::default())
            .unwrap();
        assert_eq!(found, None);
    }

    #[test]
    fn degenerate_range_never_matches() {
        let detector = ColorMaskDetector::default();
        let frame = frame_with_disc(200, 200, 30);
        let ranges = [
            ColorRange::new([10, 150, 150], [0, 255, 255]),
            ColorRange::new([0, 255, 150], [10, 150, 255]),
            ColorRange::new([0, 150, 255], [10, 255, 150]),
            ColorRange::new([179, 255, 255], [0, 0, 0]),
        ];

        for range in &ranges {
            assert_eq!(detector.detect(&frame, range).unwrap(), None, "{}", range);
        }
    }
}
