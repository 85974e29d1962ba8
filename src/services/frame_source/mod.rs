//! FrameSource: захват пикселей области экрана.
//!
//! Источник сам решает, закрылась ли область ([`CaptureErrorKind::SourceClosed`])
//! или захват сломался иначе. Результат всегда трёхканальный.
//!
//! [`CaptureErrorKind::SourceClosed`]: crate::error::CaptureErrorKind::SourceClosed

mod screen;
pub mod synthetic;
mod r#trait;

pub use self::r#trait::{create_frame_source, FrameSource};
