use image::{DynamicImage, RgbImage, RgbaImage};

use super::geometry::Point;

/// Один захваченный кадр: 3 канала по 8 бит.
/// Живёт ровно одну итерацию цикла.
#[derive(Debug, Clone)]
pub struct Frame {
    image: RgbImage,
    origin: Point,
}

impl Frame {
    pub fn new(image: RgbImage, origin: Point) -> Self {
        Self { image, origin }
    }

    /// Захват может прийти с альфа-каналом; вниз по конвейеру он не нужен
    pub fn from_rgba(image: RgbaImage, origin: Point) -> Self {
        Self {
            image: DynamicImage::ImageRgba8(image).to_rgb8(),
            origin,
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Экранная позиция левого верхнего пикселя
    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }

    /// Нижняя середина кадра с отступом от края, в пикселях кадра
    pub fn bottom_center(&self, bottom_offset: u32) -> Point {
        Point::new(
            (self.width() / 2) as i32,
            self.height().saturating_sub(bottom_offset) as i32,
        )
    }
}
