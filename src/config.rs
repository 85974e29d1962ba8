use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::services::detector::HoughParams;
use crate::services::display::quit_key::QuitKeyMap;
use crate::types::{ColorRange, WindowRegion};

/// Максимальный тон в 8-битной шкале HSV
const MAX_HUE: u8 = 179;

/// HoughCircles поднимает dp меньше 1 до 1
const MIN_DP: f64 = 1.0;
const MAX_DP: f64 = 8.0;
const MAX_RADIUS: u32 = 4096;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub logging: LoggingConfig,
    pub window: WindowConfig,
    pub detection: DetectionConfig,
    pub action: ActionConfig,
    pub display: DisplayConfig,
    pub dry_run: DryRunConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WindowConfig {
    /// Точный заголовок окна зеркала (scrcpy называет окно моделью устройства)
    pub title: String,
    pub backend: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DetectionConfig {
    pub lower: [u8; 3],
    pub upper: [u8; 3],
    pub hough: HoughParams,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ActionConfig {
    /// Абсолютный путь к adb или "auto"
    pub adb_path: String,
    #[serde(default)]
    pub device_serial: Option<String>,
    /// Бросок только если радиус цели строго меньше
    pub radius_threshold: u32,
    pub gesture_duration_ms: u64,
    /// Отступ точки старта свайпа от нижнего края окна
    pub bottom_offset_px: u32,
    pub cooldown_ms: u64,
    /// Останавливать весь цикл на время паузы после броска
    pub block_during_cooldown: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub enabled: bool,
    pub title: String,
    pub quit_key: String,
    pub poll_interval_ms: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DryRunConfig {
    pub region: WindowRegion,
}

impl Default for Config {
    fn default() -> Self {
        let range = ColorRange::default();
        Self {
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "compact".to_string(),
            },
            window: WindowConfig {
                title: "Pixel 7".to_string(),
                backend: "xcap".to_string(),
            },
            detection: DetectionConfig {
                lower: range.lower,
                upper: range.upper,
                hough: HoughParams::default(),
            },
            action: ActionConfig {
                adb_path: "auto".to_string(),
                device_serial: None,
                radius_threshold: 30,
                gesture_duration_ms: 300,
                bottom_offset_px: 50,
                cooldown_ms: 5000,
                block_during_cooldown: true,
            },
            display: DisplayConfig {
                enabled: true,
                title: "Computer Vision Feed".to_string(),
                quit_key: "q".to_string(),
                poll_interval_ms: 1,
            },
            dry_run: DryRunConfig {
                region: WindowRegion::new(0, 0, 480, 1040),
            },
        }
    }
}

impl Config {
    /// Значения по умолчанию, поверх них TOML-файл (если есть), поверх него THROW_*
    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();

        let figment = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_path))
            .merge(Env::prefixed("THROW_").split("__"));

        let config: Config = figment
            .extract()
            .with_context(|| format!("Не удалось загрузить конфигурацию из {:?}", config_path))?;

        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        // Валидация настроек логирования
        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => anyhow::bail!("Неверный уровень логирования: {}", self.logging.level),
        }

        match self.logging.format.as_str() {
            "full" | "compact" => {}
            _ => anyhow::bail!("Неверный формат логирования: {}", self.logging.format),
        }

        // Валидация настроек окна
        if self.window.title.is_empty() {
            anyhow::bail!("Заголовок окна не может быть пустым");
        }

        match self.window.backend.as_str() {
            "xcap" | "xdotool" => {}
            _ => anyhow::bail!("Неверный способ поиска окна: {}", self.window.backend),
        }

        // Валидация диапазона цвета
        let range = self.color_range();
        if range.is_degenerate() {
            anyhow::bail!("Нижняя граница цвета больше верхней: {}", range);
        }
        if range.upper[0] > MAX_HUE {
            anyhow::bail!("Тон (H) не может быть больше {}: {}", MAX_HUE, range);
        }

        let hough = &self.detection.hough;
        if !(MIN_DP..=MAX_DP).contains(&hough.dp) {
            anyhow::bail!("dp должно быть от {} до {}: {}", MIN_DP, MAX_DP, hough.dp);
        }
        if !(hough.min_dist.is_finite() && hough.min_dist > 0.0) {
            anyhow::bail!("min_dist должно быть больше 0");
        }
        if !(hough.edge_threshold.is_finite() && hough.edge_threshold > 0.0) {
            anyhow::bail!("edge_threshold должно быть больше 0");
        }
        if !(hough.accumulator_threshold.is_finite() && hough.accumulator_threshold > 0.0) {
            anyhow::bail!("accumulator_threshold должно быть больше 0");
        }
        if hough.max_radius == 0 || hough.max_radius > MAX_RADIUS {
            anyhow::bail!(
                "max_radius должно быть от 1 до {}: {}",
                MAX_RADIUS,
                hough.max_radius
            );
        }
        if hough.min_radius > hough.max_radius {
            anyhow::bail!(
                "min_radius ({}) больше max_radius ({})",
                hough.min_radius,
                hough.max_radius
            );
        }

        // Валидация настроек действия
        if self.action.adb_path != "auto" && !Path::new(&self.action.adb_path).is_absolute() {
            anyhow::bail!(
                "adb_path должен быть абсолютным путём или \"auto\": {}",
                self.action.adb_path
            );
        }

        if self.action.gesture_duration_ms == 0 {
            anyhow::bail!("gesture_duration_ms должно быть больше 0");
        }

        if self.action.cooldown_ms == 0 {
            anyhow::bail!("cooldown_ms должно быть больше 0");
        }

        if self.action.radius_threshold == 0 {
            anyhow::bail!("radius_threshold должно быть больше 0");
        }

        // Валидация настроек вывода
        QuitKeyMap::get_key(&self.display.quit_key).map_err(anyhow::Error::msg)?;

        Ok(())
    }

    pub fn color_range(&self) -> ColorRange {
        ColorRange::new(self.detection.lower, self.detection.upper)
    }

    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.action.cooldown_ms)
    }

    pub fn gesture_duration(&self) -> Duration {
        Duration::from_millis(self.action.gesture_duration_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.display.poll_interval_ms)
    }
}
