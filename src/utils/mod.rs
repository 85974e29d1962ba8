pub mod preflight;
pub mod transport_finder;

pub use transport_finder::TransportFinder;

// ✅ Макросы условного логирования для горячего пути цикла
#[macro_export]
macro_rules! debug_if_enabled {
    ($($arg:tt)*) => {
        if tracing::enabled!(tracing::Level::DEBUG) {
            tracing::debug!($($arg)*);
        }
    };
}
