//! WindowLocator: где сейчас окно зеркала устройства.
//!
//! Модуль отвечает ТОЛЬКО за поиск окна по точному заголовку и его геометрию.
//! Область не кэшируется: окно могут двигать и менять его размер, поэтому
//! цикл спрашивает её заново на каждой итерации.

mod desktop;
pub(crate) mod dry_run;
mod xdotool;
mod r#trait;

pub use self::r#trait::{create_window_locator, WindowLocator};
