use crate::config::Config;
use crate::error::WindowError;
use crate::types::WindowRegion;
use tracing::info;

/// Поиск окна по точному (регистрозависимому) заголовку
pub trait WindowLocator {
    fn locate(&self, title: &str) -> Result<WindowRegion, WindowError>;
}

/// Фабрика локатора по настройкам и флагу dry_run
pub fn create_window_locator(config: &Config, dry_run: bool) -> Box<dyn WindowLocator> {
    if dry_run {
        return Box::new(super::dry_run::DryRunLocator::new(
            config.window.title.clone(),
            config.dry_run.region,
        ));
    }

    match config.window.backend.as_str() {
        "xdotool" => {
            info!("Поиск окна через xdotool");
            Box::new(super::xdotool::XdotoolLocator::new())
        }
        _ => {
            info!("Поиск окна через xcap");
            Box::new(super::desktop::DesktopWindowLocator::new())
        }
    }
}
