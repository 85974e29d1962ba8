//! Шаги OpenCV: RGB -> HSV -> маска по диапазону -> окружности Хафа.

use image::RgbImage;
use opencv::core::{self, Mat, Scalar, Vec3f, Vector};
use opencv::imgproc;
use opencv::prelude::*;
use smallvec::SmallVec;

use super::params::HoughParams;
use crate::types::ColorRange;

/// Окружность до округления
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleCandidate {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

pub type Circles = SmallVec<[CircleCandidate; 4]>;

/// Копия кадра в 8-битную трёхканальную матрицу
pub fn to_mat(image: &RgbImage) -> opencv::Result<Mat> {
    let mut mat = Mat::new_rows_cols_with_default(
        image.height() as i32,
        image.width() as i32,
        core::CV_8UC3,
        Scalar::all(0.0),
    )?;
    mat.data_bytes_mut()?.copy_from_slice(image.as_raw());
    Ok(mat)
}

/// Бинарная маска: 255 там, где HSV пикселя внутри диапазона
pub fn color_mask(rgb: &Mat, range: &ColorRange) -> opencv::Result<Mat> {
    let mut hsv = Mat::default();
    imgproc::cvt_color_def(rgb, &mut hsv, imgproc::COLOR_RGB2HSV)?;

    let mut mask = Mat::default();
    core::in_range(&hsv, &bound(range.lower), &bound(range.upper), &mut mask)?;
    Ok(mask)
}

pub fn is_blank(mask: &Mat) -> opencv::Result<bool> {
    Ok(core::count_non_zero(mask)? == 0)
}

/// Окружности в порядке, в котором их вернул OpenCV (сильные первыми)
pub fn find_circles(mask: &Mat, params: &HoughParams) -> opencv::Result<Circles> {
    let mut found = Vector::<Vec3f>::new();
    imgproc::hough_circles(
        mask,
        &mut found,
        imgproc::HOUGH_GRADIENT,
        params.dp,
        params.min_dist,
        params.edge_threshold,
        params.accumulator_threshold,
        params.min_radius as i32,
        params.max_radius as i32,
    )?;

    Ok(found
        .iter()
        .map(|c| CircleCandidate {
            x: c.0[0],
            y: c.0[1],
            radius: c.0[2],
        })
        .collect())
}

fn bound(hsv: [u8; 3]) -> Scalar {
    Scalar::new(hsv[0] as f64, hsv[1] as f64, hsv[2] as f64, 0.0)
}
