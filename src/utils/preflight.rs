use crate::config::Config;
use crate::error::{AssistError, Result};
use crate::utils::TransportFinder;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Проверить окружение перед запуском цикла. Возвращает абсолютный путь к adb.
///
/// Ничего не устанавливает: если чего-то не хватает, выходим с понятной ошибкой.
pub fn check_environment(config: &Config) -> Result<PathBuf> {
    info!("Предварительная проверка окружения...");

    check_graphical_session()?;

    let adb = TransportFinder::find_adb(&config.action.adb_path)?;
    check_executable(&adb)?;

    check_xdotool(config);

    info!("Предварительная проверка завершена успешно");
    Ok(adb)
}

#[cfg(target_os = "linux")]
fn check_graphical_session() -> Result<()> {
    let x11 = std::env::var_os("DISPLAY").is_some();
    let wayland = std::env::var_os("WAYLAND_DISPLAY").is_some();

    match (x11, wayland) {
        (false, false) => AssistError::preflight(
            "Нет графической сессии: не заданы DISPLAY и WAYLAND_DISPLAY",
        ),
        (false, true) => {
            warn!("Только Wayland: захват чужих окон может потребовать разрешения портала");
            Ok(())
        }
        _ => {
            info!("Графическая сессия обнаружена");
            Ok(())
        }
    }
}

#[cfg(not(target_os = "linux"))]
fn check_graphical_session() -> Result<()> {
    Ok(())
}

#[cfg(unix)]
fn check_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = std::fs::metadata(path).map_err(|e| {
        AssistError::Preflight(format!("Не удалось проверить {:?}: {}", path, e))
    })?;

    if metadata.permissions().mode() & 0o111 == 0 {
        return AssistError::preflight(format!(
            "{:?} не является исполняемым. Выполните: chmod +x {}",
            path,
            path.display()
        ));
    }

    info!("adb доступен: {:?}", path);
    Ok(())
}

#[cfg(not(unix))]
fn check_executable(path: &Path) -> Result<()> {
    info!("adb доступен: {:?}", path);
    Ok(())
}

fn check_xdotool(config: &Config) {
    if config.window.backend != "xdotool" {
        return;
    }

    match std::process::Command::new("xdotool").arg("version").output() {
        Ok(output) if output.status.success() => info!("xdotool доступен"),
        _ => warn!("xdotool не найден: поиск окна будет завершаться ошибкой"),
    }
}

/// Команды для установки недостающих зависимостей
pub fn get_setup_commands() -> Vec<String> {
    vec![
        "# Android platform-tools (adb):".to_string(),
        "sudo apt install android-sdk-platform-tools".to_string(),
        "".to_string(),
        "# Зеркалирование экрана устройства:".to_string(),
        "sudo apt install scrcpy".to_string(),
        "".to_string(),
        "# Для window.backend = \"xdotool\":".to_string(),
        "sudo apt install xdotool".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_commands() {
        let commands = get_setup_commands();
        assert!(!commands.is_empty());
        assert!(commands.iter().any(|cmd| cmd.contains("platform-tools")));
        assert!(commands.iter().any(|cmd| cmd.contains("scrcpy")));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_executable_adb_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let adb = dir.path().join("adb");
        std::fs::write(&adb, b"").unwrap();

        assert!(matches!(check_executable(&adb), Err(AssistError::Preflight(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_executable_adb_accepted() {
        assert!(check_executable(Path::new("/bin/sh")).is_ok());
    }
}
