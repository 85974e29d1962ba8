use std::fmt;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssistError {
    #[error("Ошибка OpenCV: {0}")]
    Vision(#[from] opencv::Error),

    #[error("Ошибка окна вывода: {0}")]
    Display(String),

    #[error("Предварительная проверка не пройдена: {0}")]
    Preflight(String),
}

impl AssistError {
    pub fn preflight<T>(msg: impl Into<String>) -> Result<T> {
        Err(AssistError::Preflight(msg.into()))
    }
}

pub type Result<T> = std::result::Result<T, AssistError>;

/// Ошибки поиска окна зеркала
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WindowError {
    #[error("Окно '{title}' не найдено")]
    NotFound { title: String },

    #[error("Не удалось получить список окон: {0}")]
    Backend(String),
}

/// Вид ошибки захвата. Выставляется источником кадров, а не выводится из текста.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureErrorKind {
    /// Область захвата больше не существует (окно закрыто или ушло с экрана)
    SourceClosed,
    Other,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}: {message}")]
pub struct CaptureError {
    pub kind: CaptureErrorKind,
    pub message: String,
}

impl CaptureError {
    pub fn source_closed(message: impl Into<String>) -> Self {
        Self {
            kind: CaptureErrorKind::SourceClosed,
            message: message.into(),
        }
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self {
            kind: CaptureErrorKind::Other,
            message: message.into(),
        }
    }

    pub fn is_source_closed(&self) -> bool {
        self.kind == CaptureErrorKind::SourceClosed
    }
}

impl fmt::Display for CaptureErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureErrorKind::SourceClosed => write!(f, "источник захвата закрыт"),
            CaptureErrorKind::Other => write!(f, "ошибка захвата"),
        }
    }
}

/// Ошибки отправки жеста на устройство. Не прерывают цикл.
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Не удалось запустить {path:?}: {source}")]
    Launch {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Команда завершилась с {status}: {stderr}")]
    Failed { status: ExitStatus, stderr: String },
}
