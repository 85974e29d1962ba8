use crate::error::DispatchError;
use crate::types::Gesture;
use std::path::PathBuf;
use tracing::info;

use super::adb::swipe_args;
use super::r#trait::ActionDispatcher;

/// Вместо запуска adb пишет в лог команду, которая была бы выполнена
pub struct DryRunDispatcher {
    adb_path: PathBuf,
    serial: Option<String>,
}

impl DryRunDispatcher {
    pub fn new(adb_path: PathBuf, serial: Option<String>) -> Self {
        info!("Dry-run режим - свайпы на устройство не отправляются");
        Self { adb_path, serial }
    }
}

impl ActionDispatcher for DryRunDispatcher {
    fn swipe(&self, gesture: &Gesture) -> Result<(), DispatchError> {
        info!(
            "[DRY RUN] {:?} {} ({})",
            self.adb_path,
            swipe_args(self.serial.as_deref(), gesture).join(" "),
            gesture
        );
        Ok(())
    }
}
