use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info, warn};
mod config;
mod error;
mod services;
mod types;
mod utils;

use config::Config;
use error::WindowError;
use services::detection_loop::LoopExit;
use services::{
    create_action_dispatcher,
    create_feed_display,
    create_frame_source,
    create_window_locator,
    ColorMaskDetector,
    DetectionLoop,
    LoopSettings,
    TokioClock,
};
use utils::TransportFinder;

#[derive(Parser, Debug)]
#[command(name = "throw-assist")]
#[command(about = "Находит цветную цель в окне зеркала устройства и бросает в неё свайпом через adb")]
struct Args {
    /// Путь к файлу конфигурации
    #[arg(short, long, default_value = "throw-assist.toml")]
    config: String,

    /// Режим сухого запуска (синтетические кадры, свайпы только в лог)
    #[arg(long)]
    dry_run: bool,

    /// Уровень логирования (перекрывает конфигурацию)
    #[arg(long)]
    log_level: Option<String>,

    /// Заголовок окна зеркала (перекрывает конфигурацию)
    #[arg(long)]
    window_title: Option<String>,

    /// Без окна вывода, остановка только по Ctrl+C
    #[arg(long)]
    headless: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Загрузка конфигурации и переопределения из командной строки
    let mut config = Config::load(&args.config)?;
    if let Some(level) = args.log_level.clone() {
        config.logging.level = level;
    }
    if let Some(title) = args.window_title.clone() {
        config.window.title = title;
    }
    config.validate()?;

    // Инициализация системы логирования
    init_tracing(&config.logging.level, &config.logging.format)?;

    info!("Запуск throw-assist v{}", env!("CARGO_PKG_VERSION"));
    info!("Конфигурация загружена из: {}", args.config);

    let adb_path = if args.dry_run {
        warn!("Режим сухого запуска - реальные действия отключены");
        TransportFinder::find_adb(&config.action.adb_path).unwrap_or_else(|e| {
            warn!("{}", e);
            PathBuf::from("adb")
        })
    } else {
        // Проверка окружения: adb и графическая сессия
        match utils::preflight::check_environment(&config) {
            Ok(path) => path,
            Err(e) => {
                error!("{}", e);
                for line in utils::preflight::get_setup_commands() {
                    info!("{}", line);
                }
                return Err(e.into());
            }
        }
    };

    let locator = create_window_locator(&config, args.dry_run);

    // Без окна зеркала цикл не запускаем
    let initial = match locator.locate(&config.window.title) {
        Ok(region) => region,
        Err(WindowError::NotFound { title }) => {
            LoopExit::WindowNotFound { title }.report();
            return Ok(());
        }
        Err(e) => {
            LoopExit::WindowUnavailable(e.to_string()).report();
            return Ok(());
        }
    };
    info!("Окно '{}' найдено: {}", config.window.title, initial);

    // Инициализация компонентов
    let display = create_feed_display(&config.display, args.headless, &initial)?;
    let source = create_frame_source(args.dry_run);
    let dispatcher = create_action_dispatcher(
        adb_path,
        config.action.device_serial.clone(),
        args.dry_run,
    );

    let mut detection_loop = DetectionLoop::new(
        LoopSettings::from_config(&config),
        ColorMaskDetector::new(config.detection.hough),
        locator,
        source,
        dispatcher,
        display,
        Arc::new(TokioClock),
    );

    info!("Все компоненты инициализированы");

    tokio::select! {
        exit = detection_loop.run() => exit.report(),
        result = signal::ctrl_c() => match result {
            Ok(()) => info!("Получен сигнал завершения (Ctrl+C)"),
            Err(err) => error!("Ошибка при ожидании сигнала завершения: {}", err),
        },
    }

    info!("Завершение работы...");

    // Окно вывода закрывается в Drop
    drop(detection_loop);

    info!("throw-assist завершил работу");
    Ok(())
}

fn init_tracing(level: &str, format: &str) -> Result<()> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))?;

    let registry = tracing_subscriber::registry().with(filter);

    match format {
        "full" => registry.with(fmt::layer()).init(),
        _ => registry.with(fmt::layer().compact()).init(),
    }

    Ok(())
}
