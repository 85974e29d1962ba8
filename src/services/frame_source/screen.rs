use crate::debug_if_enabled;
use crate::error::CaptureError;
use crate::types::{Frame, Point, WindowRegion};
use image::imageops;
use tracing::info;

use super::r#trait::FrameSource;

/// Захват через xcap: снимок монитора, на котором лежит окно, и обрезка по окну
pub struct ScreenFrameSource;

impl ScreenFrameSource {
    pub fn new() -> Self {
        info!("Инициализация ScreenFrameSource (xcap)");
        Self
    }
}

impl Default for ScreenFrameSource {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameSource for ScreenFrameSource {
    fn capture(&self, region: &WindowRegion) -> Result<Frame, CaptureError> {
        if region.is_empty() {
            return Err(CaptureError::source_closed(format!(
                "область захвата пуста: {}",
                region
            )));
        }

        let center_x = (region.left as i64 + region.width as i64 / 2) as i32;
        let center_y = (region.top as i64 + region.height as i64 / 2) as i32;

        let monitor = ::xcap::Monitor::from_point(center_x, center_y).map_err(|e| {
            CaptureError::source_closed(format!(
                "нет монитора под точкой ({}, {}): {}",
                center_x, center_y, e
            ))
        })?;

        let bounds = WindowRegion::new(monitor.x(), monitor.y(), monitor.width(), monitor.height());
        let visible = region.intersect(&bounds).ok_or_else(|| {
            CaptureError::source_closed(format!("область {} вне монитора {}", region, bounds))
        })?;

        let screenshot = monitor
            .capture_image()
            .map_err(|e| CaptureError::other(format!("снимок монитора не удался: {}", e)))?;

        let (x, y, width, height) =
            crop_rect(&visible, &bounds, screenshot.width(), screenshot.height())
                .ok_or_else(|| CaptureError::source_closed(format!("область {} пуста после масштабирования", visible)))?;

        debug_if_enabled!(
            "Захват {} -> {}x{} пикселей с монитора {}",
            visible,
            width,
            height,
            bounds
        );

        let cropped = imageops::crop_imm(&screenshot, x, y, width, height).to_image();
        Ok(Frame::from_rgba(cropped, Point::new(visible.left, visible.top)))
    }
}

/// Прямоугольник `visible` в пикселях снимка монитора.
/// Снимок может быть в физических пикселях, а границы монитора - в логических.
fn crop_rect(
    visible: &WindowRegion,
    monitor: &WindowRegion,
    image_width: u32,
    image_height: u32,
) -> Option<(u32, u32, u32, u32)> {
    if monitor.is_empty() {
        return None;
    }

    let scale_x = image_width as f64 / monitor.width as f64;
    let scale_y = image_height as f64 / monitor.height as f64;

    let x = ((visible.left - monitor.left) as f64 * scale_x).round() as u32;
    let y = ((visible.top - monitor.top) as f64 * scale_y).round() as u32;
    let x = x.min(image_width);
    let y = y.min(image_height);
    let width = ((visible.width as f64 * scale_x).round() as u32).min(image_width - x);
    let height = ((visible.height as f64 * scale_y).round() as u32).min(image_height - y);

    if width == 0 || height == 0 {
        return None;
    }

    Some((x, y, width, height))
}
