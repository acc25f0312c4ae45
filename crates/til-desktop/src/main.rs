//! Today I Learned desktop application
//!
//! Browse, filter, share and vote on facts stored in a Supabase table.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod bootstrap_config;
mod components;
mod services;
mod state;
mod theme;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use tracing_subscriber::EnvFilter;

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    let mut filter = EnvFilter::from_default_env();
    match "til=debug".parse() {
        Ok(directive) => filter = filter.add_directive(directive),
        Err(error) => eprintln!("Invalid log directive: {error}"),
    }
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Starting Today I Learned...");

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Today I Learned")
            .with_inner_size(LogicalSize::new(1280.0, 860.0)),
    );

    dioxus::LaunchBuilder::new().with_cfg(config).launch(app::App);
}
