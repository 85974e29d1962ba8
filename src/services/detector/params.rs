use serde::{Deserialize, Serialize};

/// Параметры `HoughCircles` (метод HOUGH_GRADIENT)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoughParams {
    /// Во сколько раз аккумулятор грубее изображения
    pub dp: f64,
    /// Минимальное расстояние между центрами разных окружностей
    pub min_dist: f64,
    /// Верхний порог Canny (param1)
    pub edge_threshold: f64,
    /// Порог аккумулятора центров (param2)
    pub accumulator_threshold: f64,
    pub min_radius: u32,
    pub max_radius: u32,
}

impl Default for HoughParams {
    fn default() -> Self {
        Self {
            dp: 1.2,
            min_dist: 100.0,
            edge_threshold: 50.0,
            accumulator_threshold: 30.0,
            min_radius: 10,
            max_radius: 200,
        }
    }
}
