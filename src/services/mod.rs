pub mod action_dispatcher;
pub mod clock;
pub mod detection_loop;
pub mod detector;
pub mod display;
pub mod frame_source;
pub mod window_locator;

pub use action_dispatcher::create_action_dispatcher;
pub use clock::TokioClock;
pub use detection_loop::{DetectionLoop, LoopSettings};
pub use detector::ColorMaskDetector;
pub use display::create_feed_display;
pub use frame_source::create_frame_source;
pub use window_locator::create_window_locator;
