//! ActionDispatcher: отправка жеста на устройство через внешний транспорт.
//!
//! Ошибка отправки возвращается вызывающему как [`DispatchError`] и только
//! логируется: пропущенный свайп повторится на одной из следующих итераций.
//!
//! [`DispatchError`]: crate::error::DispatchError

mod adb;
mod dry_run;
mod r#trait;

pub use self::r#trait::{create_action_dispatcher, ActionDispatcher};
