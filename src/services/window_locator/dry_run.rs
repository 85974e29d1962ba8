use crate::error::WindowError;
use crate::types::WindowRegion;
use tracing::info;

use super::r#trait::WindowLocator;

/// Эмуляция окна зеркала для dry-run: одно окно с фиксированной геометрией
pub struct DryRunLocator {
    title: String,
    region: WindowRegion,
}

impl DryRunLocator {
    pub fn new(title: String, region: WindowRegion) -> Self {
        info!("Dry-run режим - окно '{}' эмулируется как {}", title, region);
        Self { title, region }
    }
}

impl WindowLocator for DryRunLocator {
    fn locate(&self, title: &str) -> Result<WindowRegion, WindowError> {
        if title == self.title {
            Ok(self.region)
        } else {
            Err(WindowError::NotFound {
                title: title.to_string(),
            })
        }
    }
}
