// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

use slint::ComponentHandle;

pub mod ui;
use ui::*;

mod callback;
pub use callback::*;

mod config;
pub use config::AppConfig;

mod error;
pub use error::{Error, Result};

pub mod mvc;

#[cfg_attr(target_arch = "wasm32", wasm_bindgen(start))]
pub fn main() {
    // This provides better error messages in debug mode.
    // It's disabled in release mode so it doesn't bloat up the file size.
    #[cfg(all(debug_assertions, target_arch = "wasm32"))]
    console_error_panic_hook::set_once();

    if let Err(e) = run(&AppConfig::default()) {
        log::error!("Runtime error: {e}");
    }
}

/// Sets up logging, shows the todo window and runs the event loop until it is closed.
pub fn run(config: &AppConfig) -> Result<()> {
    init_logger(config)?;

    let main_window = init_with_config(config)?;
    log::info!("todo list started");

    main_window.run()?;
    Ok(())
}

/// Creates the todo window with the default configuration.
pub fn init() -> Result<MainWindow> {
    init_with_config(&AppConfig::default())
}

/// Creates the todo window, wired to an empty task store.
pub fn init_with_config(config: &AppConfig) -> Result<MainWindow> {
    let view_handle = MainWindow::new()?;

    view_handle.set_headline(config.headline.as_str().into());
    view_handle.global::<CreateTaskAdapter>().set_placeholder(config.placeholder.as_str().into());
    view_handle
        .global::<TaskListAdapter>()
        .set_empty_message(config.empty_message.as_str().into());

    let store = mvc::TaskStore::new(mvc::id_repo());

    let task_list_controller = mvc::TaskListController::new(
        store.clone(),
        task_list_adapter::create_controller_callbacks(&view_handle),
    );
    task_list_adapter::initialize_adapter(&view_handle, task_list_controller);

    let create_task_controller = mvc::CreateTaskController::new(
        store,
        create_task_adapter::create_controller_callbacks(&view_handle),
    );
    create_task_adapter::initialize_adapter(&view_handle, create_task_controller);

    Ok(view_handle)
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logger(config: &AppConfig) -> Result<()> {
    env_logger::Builder::default().filter_level(config.log_level).try_init()?;
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn init_logger(config: &AppConfig) -> Result<()> {
    let level = config.log_level.to_level().unwrap_or(log::Level::Error);
    console_log::init_with_level(level)?;
    log::set_max_level(config.log_level);
    Ok(())
}
