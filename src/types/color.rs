use serde::{Deserialize, Serialize};
use std::fmt;

/// Включающий диапазон HSV для маски цели
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRange {
    pub lower: [u8; 3],
    pub upper: [u8; 3],
}

impl ColorRange {
    pub fn new(lower: [u8; 3], upper: [u8; 3]) -> Self {
        Self { lower, upper }
    }

    /// Диапазон, у которого нижняя граница больше верхней хотя бы по одной компоненте
    pub fn is_degenerate(&self) -> bool {
        self.lower.iter().zip(self.upper.iter()).any(|(lo, hi)| lo > hi)
    }
}

impl Default for ColorRange {
    /// Насыщенный красный
    fn default() -> Self {
        Self {
            lower: [0, 150, 150],
            upper: [10, 255, 255],
        }
    }
}

impl fmt::Display for ColorRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HSV {:?}..={:?}", self.lower, self.upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_range_is_saturated_red() {
        let range = ColorRange::default();
        assert_eq!(range.lower, [0, 150, 150]);
        assert_eq!(range.upper, [10, 255, 255]);
        assert!(!range.is_degenerate());
    }

    #[test]
    fn any_inverted_component_is_degenerate() {
        assert!(ColorRange::new([0, 200, 0], [179, 100, 255]).is_degenerate());
        assert!(ColorRange::new([11, 0, 0], [10, 255, 255]).is_degenerate());
        assert!(!ColorRange::new([10, 10, 10], [10, 10, 10]).is_degenerate());
    }
}
