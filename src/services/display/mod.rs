//! Живое окно с аннотированным кадром и опрос клавиши выхода.

mod feed_window;
mod headless;
pub mod overlay;
pub mod quit_key;
mod r#trait;

pub use self::r#trait::{create_feed_display, FeedDisplay};
