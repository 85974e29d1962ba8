//! DetectionLoop: найти окно, снять кадр, найти цель, при готовности бросить.
//!
//! Вся изменяемая логика решений - это `LoopState`. Ожидания идут через `Clock`.

use crate::config::Config;
use crate::debug_if_enabled;
use crate::error::WindowError;
use crate::services::action_dispatcher::ActionDispatcher;
use crate::services::clock::Clock;
use crate::services::detector::ColorMaskDetector;
use crate::services::display::overlay::draw_marker;
use crate::services::display::FeedDisplay;
use crate::services::frame_source::FrameSource;
use crate::services::window_locator::WindowLocator;
use crate::types::{ColorRange, DetectedCircle, Gesture, Point};
use std::ops::ControlFlow;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{error, info, warn};

/// Параметры цикла, снятые с конфигурации один раз при старте
#[derive(Debug, Clone)]
pub struct LoopSettings {
    pub window_title: String,
    pub color_range: ColorRange,
    pub radius_threshold: u32,
    pub gesture_duration: Duration,
    pub bottom_offset: u32,
    pub cooldown: Duration,
    pub block_during_cooldown: bool,
    pub poll_interval: Duration,
}

impl LoopSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            window_title: config.window.title.clone(),
            color_range: config.color_range(),
            radius_threshold: config.action.radius_threshold,
            gesture_duration: config.gesture_duration(),
            bottom_offset: config.action.bottom_offset_px,
            cooldown: config.cooldown(),
            block_during_cooldown: config.action.block_during_cooldown,
            poll_interval: config.poll_interval(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Searching,
    /// После броска: новые броски запрещены до `since + cooldown`
    Cooldown { since: Instant },
}

/// Почему цикл остановился
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoopExit {
    Quit,
    WindowNotFound { title: String },
    WindowUnavailable(String),
    /// Окно закрыли или оно ушло с экрана
    SourceClosed,
    CaptureFailed(String),
    DetectionFailed(String),
    DisplayFailed(String),
}

impl LoopExit {
    pub fn message(&self) -> String {
        match self {
            LoopExit::Quit => "Остановлено оператором".to_string(),
            LoopExit::WindowNotFound { title } => {
                format!("Окно '{}' не найдено. Запущено ли зеркалирование экрана?", title)
            }
            LoopExit::WindowUnavailable(reason) => {
                format!("Не удалось найти окно: {}", reason)
            }
            LoopExit::SourceClosed => {
                "Окно зеркала закрыто, захватывать больше нечего".to_string()
            }
            LoopExit::CaptureFailed(reason) => format!("Ошибка захвата кадра: {}", reason),
            LoopExit::DetectionFailed(reason) => format!("Ошибка поиска цели: {}", reason),
            LoopExit::DisplayFailed(reason) => format!("Ошибка окна вывода: {}", reason),
        }
    }

    /// Записать причину остановки в лог с подходящим уровнем
    pub fn report(&self) {
        match self {
            LoopExit::Quit => info!("{}", self.message()),
            LoopExit::SourceClosed => warn!("{}", self.message()),
            _ => error!("{}", self.message()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopStats {
    pub cycles: u64,
    pub detections: u64,
    pub dispatches: u64,
    pub dispatch_failures: u64,
}

pub struct DetectionLoop {
    settings: LoopSettings,
    detector: ColorMaskDetector,
    locator: Box<dyn WindowLocator>,
    source: Box<dyn FrameSource>,
    dispatcher: Box<dyn ActionDispatcher>,
    display: Box<dyn FeedDisplay>,
    clock: Arc<dyn Clock>,
    state: LoopState,
    stats: LoopStats,
}

impl DetectionLoop {
    pub fn new(
        settings: LoopSettings,
        detector: ColorMaskDetector,
        locator: Box<dyn WindowLocator>,
        source: Box<dyn FrameSource>,
        dispatcher: Box<dyn ActionDispatcher>,
        display: Box<dyn FeedDisplay>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        info!(
            "DetectionLoop: окно '{}', цвет {}, порог радиуса {}px, пауза {:?}",
            settings.window_title, settings.color_range, settings.radius_threshold, settings.cooldown
        );

        Self {
            settings,
            detector,
            locator,
            source,
            dispatcher,
            display,
            clock,
            state: LoopState::Searching,
            stats: LoopStats::default(),
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn stats(&self) -> LoopStats {
        self.stats
    }

    /// Крутить циклы до первой причины остановки
    pub async fn run(&mut self) -> LoopExit {
        info!("Цикл обнаружения запущен");

        let exit = loop {
            if let ControlFlow::Break(exit) = self.run_cycle().await {
                break exit;
            }
        };

        let stats = self.stats();
        info!(
            "Цикл обнаружения остановлен: циклов {}, целей {}, бросков {}, ошибок отправки {}",
            stats.cycles, stats.detections, stats.dispatches, stats.dispatch_failures
        );
        exit
    }

    /// Одна итерация: окно -> кадр -> цель -> (бросок) -> показ -> пауза
    pub async fn run_cycle(&mut self) -> ControlFlow<LoopExit> {
        self.stats.cycles += 1;
        self.expire_cooldown();

        let region = match self.locator.locate(&self.settings.window_title) {
            Ok(region) => region,
            Err(WindowError::NotFound { title }) => {
                return ControlFlow::Break(LoopExit::WindowNotFound { title })
            }
            Err(e) => return ControlFlow::Break(LoopExit::WindowUnavailable(e.to_string())),
        };

        let frame = match self.source.capture(&region) {
            Ok(frame) => frame,
            Err(e) if e.is_source_closed() => {
                debug_if_enabled!("Источник закрыт: {}", e);
                return ControlFlow::Break(LoopExit::SourceClosed);
            }
            Err(e) => return ControlFlow::Break(LoopExit::CaptureFailed(e.to_string())),
        };

        debug_if_enabled!(
            "Кадр {}x{} из {}",
            frame.width(),
            frame.height(),
            frame.origin()
        );

        let detection = match self.detector.detect(&frame, &self.settings.color_range) {
            Ok(detection) => detection,
            Err(e) => return ControlFlow::Break(LoopExit::DetectionFailed(e.to_string())),
        };

        // Кадр может не совпадать с областью окна по размеру (HiDPI, край монитора),
        // поэтому точка старта считается в пикселях кадра, как и центр цели
        let launch = frame.bottom_center(self.settings.bottom_offset);
        let mut canvas = frame.into_image();

        if let Some(circle) = detection {
            self.stats.detections += 1;
            debug_if_enabled!("Цель: {}", circle);
            draw_marker(&mut canvas, &circle);
            self.try_dispatch(launch, &circle).await;
        }

        if let Err(e) = self.display.show(&canvas) {
            return ControlFlow::Break(LoopExit::DisplayFailed(e.to_string()));
        }

        self.clock.sleep(self.settings.poll_interval).await;

        if self.display.quit_requested() {
            return ControlFlow::Break(LoopExit::Quit);
        }

        ControlFlow::Continue(())
    }

    fn expire_cooldown(&mut self) {
        if let LoopState::Cooldown { since } = self.state {
            if self.clock.now().saturating_duration_since(since) >= self.settings.cooldown {
                info!("Пауза после броска закончилась");
                self.state = LoopState::Searching;
            }
        }
    }

    fn is_ready(&self, circle: &DetectedCircle) -> bool {
        // Чем меньше цель, тем она дальше: бросаем только по маленькой
        circle.radius < self.settings.radius_threshold && self.state == LoopState::Searching
    }

    async fn try_dispatch(&mut self, launch: Point, circle: &DetectedCircle) {
        if !self.is_ready(circle) {
            return;
        }

        let gesture = Gesture::toward(launch, circle, self.settings.gesture_duration);
        info!("Бросок: {} -> {} за {} мс", gesture.start, gesture.end, gesture.duration_ms());

        match self.dispatcher.swipe(&gesture) {
            Ok(()) => self.stats.dispatches += 1,
            Err(e) => {
                self.stats.dispatch_failures += 1;
                error!("Не удалось отправить свайп: {}", e);
            }
        }

        self.state = LoopState::Cooldown {
            since: self.clock.now(),
        };

        if self.settings.block_during_cooldown {
            self.clock.sleep(self.settings.cooldown).await;
        }
    }
}

impl Drop for DetectionLoop {
    fn drop(&mut self) {
        info!("DetectionLoop завершается в состоянии {:?}", self.state());
    }
}
