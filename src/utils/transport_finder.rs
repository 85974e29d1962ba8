use crate::error::{AssistError, Result};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[cfg(windows)]
const ADB_NAMES: &[&str] = &["adb.exe", "adb"];
#[cfg(not(windows))]
const ADB_NAMES: &[&str] = &["adb"];

pub struct TransportFinder;

impl TransportFinder {
    /// Абсолютный путь к adb: указанный явно или найденный при "auto"
    pub fn find_adb(adb_path: &str) -> Result<PathBuf> {
        if adb_path != "auto" {
            let path = PathBuf::from(adb_path);
            if !path.is_absolute() {
                return AssistError::preflight(format!(
                    "Путь к adb должен быть абсолютным: {:?}",
                    path
                ));
            }
            return if path.is_file() {
                info!("Используется указанный adb: {:?}", path);
                Ok(path)
            } else {
                AssistError::preflight(format!("Указанный adb не найден: {:?}", path))
            };
        }

        Self::auto_find()
    }

    fn auto_find() -> Result<PathBuf> {
        info!("Ищем adb в PATH и Android SDK...");

        match Self::find_in(&Self::candidate_dirs()) {
            Some(path) => {
                info!("Найден adb: {:?}", path);
                Ok(path)
            }
            None => AssistError::preflight(
                "adb не найден. Установите Android platform-tools, \
                 добавьте их в PATH или укажите action.adb_path",
            ),
        }
    }

    fn candidate_dirs() -> Vec<PathBuf> {
        let mut dirs: Vec<PathBuf> = env::var_os("PATH")
            .map(|paths| env::split_paths(&paths).collect())
            .unwrap_or_default();

        for var in ["ANDROID_HOME", "ANDROID_SDK_ROOT"] {
            if let Some(sdk) = env::var_os(var) {
                dirs.push(PathBuf::from(sdk).join("platform-tools"));
            }
        }

        dirs
    }

    fn find_in(dirs: &[PathBuf]) -> Option<PathBuf> {
        for dir in dirs {
            for name in ADB_NAMES {
                let candidate = dir.join(name);
                if candidate.is_file() {
                    return Some(Self::absolutize(&candidate));
                }
                debug!("Нет adb в {:?}", dir);
            }
        }
        None
    }

    /// Относительные записи PATH превращаем в абсолютные
    fn absolutize(path: &Path) -> PathBuf {
        if path.is_absolute() {
            return path.to_path_buf();
        }
        path.canonicalize()
            .or_else(|_| env::current_dir().map(|cwd| cwd.join(path)))
            .unwrap_or_else(|_| path.to_path_buf())
    }
}
