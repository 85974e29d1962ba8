use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Точка в целых пикселях
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Прямоугольник окна в экранных координатах
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowRegion {
    pub left: i32,
    pub top: i32,
    pub width: u32,
    pub height: u32,
}

impl WindowRegion {
    pub fn new(left: i32, top: i32, width: u32, height: u32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn right(&self) -> i64 {
        self.left as i64 + self.width as i64
    }

    pub fn bottom(&self) -> i64 {
        self.top as i64 + self.height as i64
    }

    /// Пересечение двух прямоугольников; `None`, если они не перекрываются
    pub fn intersect(&self, other: &WindowRegion) -> Option<WindowRegion> {
        let left = self.left.max(other.left);
        let top = self.top.max(other.top);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if right <= left as i64 || bottom <= top as i64 {
            return None;
        }

        Some(WindowRegion {
            left,
            top,
            width: (right - left as i64) as u32,
            height: (bottom - top as i64) as u32,
        })
    }
}

impl fmt::Display for WindowRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} @ ({}, {})",
            self.width, self.height, self.left, self.top
        )
    }
}

/// Найденная окружность в локальных координатах кадра
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DetectedCircle {
    pub x: i32,
    pub y: i32,
    pub radius: u32,
}

impl DetectedCircle {
    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl fmt::Display for DetectedCircle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "центр ({}, {}), радиус {}px", self.x, self.y, self.radius)
    }
}

/// Свайп: откуда, куда и за сколько
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gesture {
    pub start: Point,
    pub end: Point,
    pub duration: Duration,
}

impl Gesture {
    /// Бросок из точки `start` в центр цели; обе точки в пикселях кадра
    pub fn toward(start: Point, target: &DetectedCircle, duration: Duration) -> Self {
        Self {
            start,
            end: target.center(),
            duration,
        }
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration.as_millis() as u64
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} за {}мс", self.start, self.end, self.duration_ms())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gesture_ends_at_target_center() {
        let target = DetectedCircle {
            x: 210,
            y: 330,
            radius: 20,
        };

        let gesture = Gesture::toward(Point::new(200, 750), &target, Duration::from_millis(300));

        assert_eq!(gesture.start, Point::new(200, 750));
        assert_eq!(gesture.end, Point::new(210, 330));
        assert_eq!(gesture.duration_ms(), 300);
    }

    #[test]
    fn intersect_clips_to_overlap() {
        let monitor = WindowRegion::new(0, 0, 1920, 1080);
        let window = WindowRegion::new(1800, 1000, 400, 300);

        let clipped = window.intersect(&monitor).unwrap();
        assert_eq!(clipped, WindowRegion::new(1800, 1000, 120, 80));

        let outside = WindowRegion::new(2000, 0, 100, 100);
        assert!(outside.intersect(&monitor).is_none());
    }
}
