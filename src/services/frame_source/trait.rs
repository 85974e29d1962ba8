use crate::error::CaptureError;
use crate::types::{Frame, WindowRegion};

/// Источник кадров для заданной экранной области
pub trait FrameSource {
    fn capture(&self, region: &WindowRegion) -> Result<Frame, CaptureError>;
}

/// Фабрика источника кадров в зависимости от режима dry_run
pub fn create_frame_source(dry_run: bool) -> Box<dyn FrameSource> {
    if dry_run {
        Box::new(super::synthetic::SyntheticFrameSource::default())
    } else {
        Box::new(super::screen::ScreenFrameSource::new())
    }
}
