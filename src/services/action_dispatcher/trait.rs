use crate::error::DispatchError;
use crate::types::Gesture;
use std::path::PathBuf;

/// Исполнитель жестов на устройстве
pub trait ActionDispatcher {
    fn swipe(&self, gesture: &Gesture) -> Result<(), DispatchError>;
}

/// Фабрика исполнителя: в dry_run команды только логируются
pub fn create_action_dispatcher(
    adb_path: PathBuf,
    serial: Option<String>,
    dry_run: bool,
) -> Box<dyn ActionDispatcher> {
    if dry_run {
        Box::new(super::dry_run::DryRunDispatcher::new(adb_path, serial))
    } else {
        Box::new(super::adb::AdbDispatcher::new(adb_path, serial))
    }
}
