pub mod color;
pub mod frame;
pub mod geometry;

pub use color::ColorRange;
pub use frame::Frame;
pub use geometry::{DetectedCircle, Gesture, Point, WindowRegion};
