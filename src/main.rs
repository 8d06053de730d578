#![windows_subsystem = "windows"]

mod account;
mod app;
mod auth;
mod config;
mod error;
mod store;
mod widgets;

use account::{Notice, Screen};
use app::AppState;
use config::Config;
use store::SqlStore;

use eframe::NativeOptions;
use log::{error, info};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("CEO Platform login is starting.");

    let config = Config::load().unwrap_or_else(|err| {
        error!("{}; falling back to defaults", err);
        Config::default()
    });

    let store = match SqlStore::new(&config) {
        Ok(store) => store,
        Err(err) => {
            error!("Cannot start credential store: {}", err);
            return;
        }
    };

    let mut startup_notice = None;
    if config.create_schema {
        if let Err(err) = store.ensure_schema() {
            error!("Failed to prepare employer table: {}", err);
            startup_notice = Some(Notice::error("Database Error", format!("Error: {}", err)));
        }
    }

    let start = Screen::Login;
    let native_options = NativeOptions {
        window_builder: Some(Box::new(move |builder| {
            builder
                .with_inner_size(start.window_size())
                .with_resizable(false)
                .with_title(start.title())
        })),
        ..Default::default()
    };
    let result = eframe::run_native(
        start.title(),
        native_options,
        Box::new(move |_cc| {
            let mut app = AppState::new(Box::new(store));
            app.notice = startup_notice;
            Box::new(app)
        }),
    );
    if let Err(err) = result {
        error!("Window closed with error: {}", err);
    }
}
