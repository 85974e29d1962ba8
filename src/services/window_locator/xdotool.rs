use crate::debug_if_enabled;
use crate::error::WindowError;
use crate::types::WindowRegion;
use std::path::PathBuf;
use std::process::{Command, Output};
use tracing::debug;

use super::r#trait::WindowLocator;

/// Поиск окна через xdotool (X11 и XWayland)
pub struct XdotoolLocator {
    program: PathBuf,
}

impl XdotoolLocator {
    pub fn new() -> Self {
        Self::with_program("xdotool")
    }

    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn output(&self, args: &[&str]) -> Result<Output, WindowError> {
        Command::new(&self.program).args(args).output().map_err(|e| {
            debug!("xdotool не найден или не работает: {}", e);
            WindowError::Backend(format!("не удалось запустить {:?}: {}", self.program, e))
        })
    }

    fn run(&self, args: &[&str]) -> Result<String, WindowError> {
        let output = self.output(args)?;
        if !output.status.success() {
            return Err(WindowError::Backend(failure_text(&output)));
        }
        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }

    fn window_ids(&self, title: &str) -> Result<Vec<String>, WindowError> {
        let pattern = format!("^{}$", regex::escape(title));
        let output = self.output(&["search", "--onlyvisible", "--name", &pattern])?;

        if !output.status.success() {
            // search без совпадений молча выходит с кодом 1
            if output.stderr.iter().all(u8::is_ascii_whitespace) {
                debug!("xdotool search: окон '{}' нет", title);
                return Ok(Vec::new());
            }
            return Err(WindowError::Backend(failure_text(&output)));
        }

        Ok(String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect())
    }
}

impl Default for XdotoolLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowLocator for XdotoolLocator {
    fn locate(&self, title: &str) -> Result<WindowRegion, WindowError> {
        for id in self.window_ids(title)? {
            // regex-совпадение перепроверяем точным сравнением
            let name = self.run(&["getwindowname", &id])?;
            if name.trim_end_matches('\n') != title {
                debug_if_enabled!("Окно {} с заголовком '{}' отклонено", id, name.trim());
                continue;
            }

            let geometry = self.run(&["getwindowgeometry", "--shell", &id])?;
            let region = parse_geometry(&geometry).ok_or_else(|| {
                WindowError::Backend(format!("не удалось разобрать геометрию окна {}", id))
            })?;

            debug_if_enabled!("xdotool: окно {} -> {}", id, region);
            return Ok(region);
        }

        Err(WindowError::NotFound {
            title: title.to_string(),
        })
    }
}

fn failure_text(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    if stderr.is_empty() {
        format!("xdotool завершился с {}", output.status)
    } else {
        stderr
    }
}

/// Разбор вывода `xdotool getwindowgeometry --shell`
fn parse_geometry(output: &str) -> Option<WindowRegion> {
    let (mut x, mut y, mut width, mut height) = (None, None, None, None);

    for line in output.lines() {
        let Some((key, value)) = line.trim().split_once('=') else {
            continue;
        };
        match key {
            "X" => x = value.parse::<i32>().ok(),
            "Y" => y = value.parse::<i32>().ok(),
            "WIDTH" => width = value.parse::<u32>().ok(),
            "HEIGHT" => height = value.parse::<u32>().ok(),
            _ => {}
        }
    }

    Some(WindowRegion::new(x?, y?, width?, height?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_shell_geometry() {
        let output = "WINDOW=62914565\nX=1210\nY=64\nWIDTH=486\nHEIGHT=1053\nSCREEN=0\n";
        assert_eq!(
            parse_geometry(output),
            Some(WindowRegion::new(1210, 64, 486, 1053))
        );
    }

    #[test]
    fn negative_offsets_are_kept() {
        let output = "X=-20\nY=-5\nWIDTH=300\nHEIGHT=200\n";
        assert_eq!(parse_geometry(output), Some(WindowRegion::new(-20, -5, 300, 200)));
    }

    #[test]
    fn missing_xdotool_is_a_backend_error() {
        let locator = XdotoolLocator::with_program("/nonexistent/bin/xdotool");
        assert!(matches!(locator.locate("Pixel 7"), Err(WindowError::Backend(_))));
    }

    #[cfg(unix)]
    #[test]
    fn silent_search_failure_means_no_window() {
        // /bin/false ведёт себя как search без совпадений: код 1, пустой stderr
        let locator = XdotoolLocator::with_program("/bin/false");
        assert!(matches!(locator.locate("Pixel 7"), Err(WindowError::NotFound { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn search_failure_with_stderr_is_a_backend_error() {
        let locator = XdotoolLocator::with_program("/bin/ls");
        // ls не знает таких флагов и пишет об этом в stderr
        assert!(matches!(locator.locate("Pixel 7"), Err(WindowError::Backend(_))));
    }

    #[test]
    fn incomplete_geometry_is_rejected() {
        assert_eq!(parse_geometry("X=1\nY=2\nWIDTH=3\n"), None);
        assert_eq!(parse_geometry(""), None);
    }
}
