//! CogniCare Frontend Entry Point

mod app;
mod auth;
mod chat;
mod checklist;
mod commands;
mod components;
mod config;
mod error;
mod markdown;
mod models;
mod myth;
mod platform;
mod store;
mod symptoms;

#[cfg(test)]
mod testing;

use config::ClientConfig;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = ClientConfig::from_page();
    let config = loaded.as_ref().cloned().unwrap_or_default();
    let _ = console_log::init_with_level(config.log_level());
    if let Err(err) = loaded {
        log::warn!("{}; using defaults", err);
    }

    log::info!("starting with {:?} updates", config.update_policy);
    app::mount_widgets(config);
}
