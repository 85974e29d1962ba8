use crate::debug_if_enabled;
use crate::error::WindowError;
use crate::types::WindowRegion;

use super::r#trait::WindowLocator;

/// Перечисление окон рабочего стола через xcap
pub struct DesktopWindowLocator;

impl DesktopWindowLocator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DesktopWindowLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowLocator for DesktopWindowLocator {
    fn locate(&self, title: &str) -> Result<WindowRegion, WindowError> {
        let windows = ::xcap::Window::all().map_err(|e| WindowError::Backend(e.to_string()))?;

        let candidates = windows.iter().filter(|w| !w.is_minimized()).map(|w| {
            (
                w.title().to_string(),
                WindowRegion::new(w.x(), w.y(), w.width(), w.height()),
            )
        });

        let region = pick_exact(candidates, title)?;
        debug_if_enabled!("Окно '{}' найдено: {}", title, region);
        Ok(region)
    }
}

/// Первое окно с заголовком, совпадающим с `title` символ в символ
pub(super) fn pick_exact<I>(windows: I, title: &str) -> Result<WindowRegion, WindowError>
where
    I: IntoIterator<Item = (String, WindowRegion)>,
{
    windows
        .into_iter()
        .find(|(candidate, _)| candidate == title)
        .map(|(_, region)| region)
        .ok_or_else(|| WindowError::NotFound {
            title: title.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn windows() -> Vec<(String, WindowRegion)> {
        vec![
            ("pixel 7".to_string(), WindowRegion::new(0, 0, 10, 10)),
            ("Pixel 7 - scrcpy".to_string(), WindowRegion::new(5, 5, 20, 20)),
            ("Pixel 7".to_string(), WindowRegion::new(100, 50, 480, 1040)),
            ("Pixel 7".to_string(), WindowRegion::new(900, 50, 480, 1040)),
        ]
    }

    #[test]
    fn matches_exact_title_only() {
        let region = pick_exact(windows(), "Pixel 7").unwrap();
        assert_eq!(region, WindowRegion::new(100, 50, 480, 1040));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let err = pick_exact(windows(), "PIXEL 7").unwrap_err();
        assert_eq!(
            err,
            WindowError::NotFound {
                title: "PIXEL 7".to_string()
            }
        );
    }

    #[test]
    fn substring_is_not_a_match() {
        assert!(pick_exact(windows(), "scrcpy").is_err());
    }
}
