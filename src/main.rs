mod app;
mod config;
mod domain;
mod models;
mod ui;

use gpui::{App, Application};

use crate::config::AppConfig;
use crate::ui::FileAssets;

fn main() {
    let logger_env = env_logger::Env::default().filter_or("LOG_LEVEL", "info");
    env_logger::Builder::from_env(logger_env)
        .format_timestamp_millis()
        .init();

    if std::env::args().skip(1).any(|arg| arg == "--print-config-schema") {
        match config::schema_json() {
            Ok(schema) => println!("{}", schema),
            Err(e) => {
                log::error!("Cannot generate config schema: {:#}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{:#}", e);
            std::process::exit(1);
        }
    };

    Application::new()
        .with_assets(FileAssets::new())
        .run(move |cx: &mut App| {
            if let Err(e) = app::run(cx, config) {
                log::error!("Cannot start checkers board: {:#}", e);
                cx.quit();
            }
        });
}
