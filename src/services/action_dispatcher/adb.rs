use crate::error::DispatchError;
use crate::types::Gesture;
use std::path::PathBuf;
use std::process::Command;
use tracing::{debug, info};

use super::r#trait::ActionDispatcher;

/// `adb [-s serial] shell input swipe x1 y1 x2 y2 ms`
pub struct AdbDispatcher {
    adb_path: PathBuf,
    serial: Option<String>,
}

impl AdbDispatcher {
    pub fn new(adb_path: PathBuf, serial: Option<String>) -> Self {
        info!(
            "Инициализация AdbDispatcher: {:?}, устройство: {}",
            adb_path,
            serial.as_deref().unwrap_or("по умолчанию")
        );
        Self { adb_path, serial }
    }

    pub fn swipe_args(&self, gesture: &Gesture) -> Vec<String> {
        swipe_args(self.serial.as_deref(), gesture)
    }
}

pub(super) fn swipe_args(serial: Option<&str>, gesture: &Gesture) -> Vec<String> {
    let mut args = Vec::with_capacity(11);
    if let Some(serial) = serial {
        args.push("-s".to_string());
        args.push(serial.to_string());
    }
    args.extend(["shell", "input", "swipe"].map(str::to_string));
    args.extend(
        [
            gesture.start.x as i64,
            gesture.start.y as i64,
            gesture.end.x as i64,
            gesture.end.y as i64,
            gesture.duration_ms() as i64,
        ]
        .map(|v| v.to_string()),
    );
    args
}

impl ActionDispatcher for AdbDispatcher {
    fn swipe(&self, gesture: &Gesture) -> Result<(), DispatchError> {
        let args = self.swipe_args(gesture);
        info!("Выполняем ADB swipe: {:?} {}", self.adb_path, args.join(" "));

        let output = Command::new(&self.adb_path)
            .args(&args)
            .output()
            .map_err(|source| DispatchError::Launch {
                path: self.adb_path.clone(),
                source,
            })?;

        if !output.status.success() {
            let mut stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            if stderr.is_empty() {
                stderr = String::from_utf8_lossy(&output.stdout).trim().to_string();
            }
            return Err(DispatchError::Failed {
                status: output.status,
                stderr,
            });
        }

        debug!("adb swipe завершился успешно");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point;
    use std::time::Duration;

    fn gesture() -> Gesture {
        Gesture {
            start: Point::new(240, 990),
            end: Point::new(251, 412),
            duration: Duration::from_millis(300),
        }
    }

    #[test]
    fn builds_swipe_command_line() {
        let dispatcher = AdbDispatcher::new(PathBuf::from("/opt/platform-tools/adb"), None);
        assert_eq!(
            dispatcher.swipe_args(&gesture()),
            vec!["shell", "input", "swipe", "240", "990", "251", "412", "300"]
        );
    }

    #[test]
    fn serial_goes_before_shell() {
        let args = swipe_args(Some("emulator-5554"), &gesture());
        assert_eq!(&args[..3], &["-s", "emulator-5554", "shell"]);
        assert_eq!(args.len(), 10);
    }

    #[test]
    fn missing_executable_is_launch_error() {
        let dispatcher = AdbDispatcher::new(PathBuf::from("/nonexistent/platform-tools/adb"), None);
        let err = dispatcher.swipe(&gesture()).unwrap_err();
        assert!(matches!(err, DispatchError::Launch { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_reported() {
        let dispatcher = AdbDispatcher::new(PathBuf::from("/bin/false"), None);
        let err = dispatcher.swipe(&gesture()).unwrap_err();
        assert!(matches!(err, DispatchError::Failed { status, .. } if !status.success()));
    }

    #[cfg(unix)]
    #[test]
    fn zero_exit_is_success() {
        let dispatcher = AdbDispatcher::new(PathBuf::from("/bin/true"), None);
        assert!(dispatcher.swipe(&gesture()).is_ok());
    }
}
