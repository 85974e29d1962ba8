use crate::types::DetectedCircle;
use image::{Rgb, RgbImage};

pub const MARKER_COLOR: Rgb<u8> = Rgb([0, 255, 0]);
pub const MARKER_THICKNESS: u32 = 4;
const CENTER_DOT_RADIUS: i64 = 2;

/// Кольцо по найденной окружности и точка в центре. Только для показа.
pub fn draw_marker(image: &mut RgbImage, circle: &DetectedCircle) {
    let half = (MARKER_THICKNESS / 2) as i64;
    let r = circle.radius as i64;
    let inner = (r - half).max(0);
    let outer = r + half;

    paint_where(image, circle, outer, |d2| d2 >= inner * inner && d2 <= outer * outer);
    paint_where(image, circle, CENTER_DOT_RADIUS, |d2| {
        d2 <= CENTER_DOT_RADIUS * CENTER_DOT_RADIUS
    });
}

fn paint_where(image: &mut RgbImage, circle: &DetectedCircle, reach: i64, inside: impl Fn(i64) -> bool) {
    let (width, height) = (image.width() as i64, image.height() as i64);
    let (cx, cy) = (circle.x as i64, circle.y as i64);

    for y in (cy - reach).max(0)..=(cy + reach).min(height - 1) {
        for x in (cx - reach).max(0)..=(cx + reach).min(width - 1) {
            let d2 = (x - cx).pow(2) + (y - cy).pow(2);
            if inside(d2) {
                image.put_pixel(x as u32, y as u32, MARKER_COLOR);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_and_center_are_painted() {
        let mut image = RgbImage::new(100, 100);
        let circle = DetectedCircle {
            x: 50,
            y: 50,
            radius: 20,
        };

        draw_marker(&mut image, &circle);

        assert_eq!(*image.get_pixel(70, 50), MARKER_COLOR);
        assert_eq!(*image.get_pixel(50, 31), MARKER_COLOR);
        assert_eq!(*image.get_pixel(50, 50), MARKER_COLOR);
        assert_eq!(*image.get_pixel(60, 50), Rgb([0, 0, 0]));
        assert_eq!(*image.get_pixel(90, 50), Rgb([0, 0, 0]));
    }

    #[test]
    fn marker_near_border_does_not_panic() {
        let mut image = RgbImage::new(30, 30);
        let circle = DetectedCircle {
            x: 2,
            y: 28,
            radius: 25,
        };

        draw_marker(&mut image, &circle);
        assert_eq!(*image.get_pixel(2, 3), MARKER_COLOR);
    }
}
