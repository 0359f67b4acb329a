//! FILENAME: app/src-tauri/src/lib.rs
// PURPOSE: Main library entry point (Tauri Bridge).
// CONTEXT: Wires the autoclicker commands, managed state, persisted settings
//          and the global stop shortcut into the Tauri application.

use std::path::PathBuf;
use std::sync::Mutex;

use engine::ClickerSettings;
use tauri::Manager;

pub mod api_types;
pub mod clicker;
pub mod commands;
pub mod logging;
pub mod overlay;
pub mod platform;
pub mod settings;
pub mod window;

pub use api_types::{CandidateWindow, SettingsData, StatusData, WindowInfo};
pub use clicker::{ClickPlan, ClickSession};
pub use logging::{get_log_path, init_log_file, next_seq, write_log};
pub use platform::WindowId;

#[cfg(test)]
mod tests;

// ============================================================================
// APPLICATION STATE
// ============================================================================

pub struct AppState {
    /// Current (always clamped) clicker settings.
    pub settings: Mutex<ClickerSettings>,
    /// Where settings persist; None until the config dir is resolved
    /// (and in tests that opt out of persistence).
    pub settings_path: Mutex<Option<PathBuf>>,
    /// The active click session, if any.
    pub session: Mutex<Option<clicker::ClickSession>>,
}

pub fn create_app_state() -> AppState {
    log_info!("SYS", "Creating AppState");
    AppState {
        settings: Mutex::new(ClickerSettings::default()),
        settings_path: Mutex::new(None),
        session: Mutex::new(None),
    }
}

pub fn run() {
    match init_log_file() {
        Ok(path) => {
            log_info!("SYS", "Tauri backend starting, log={}", path.display());
        }
        Err(e) => {
            eprintln!("[LOG_INIT] FAILED: {}", e);
            eprintln!("[LOG_INIT] Continuing with console-only logging");
        }
    }

    tauri::Builder::default()
        .plugin(tauri_plugin_global_shortcut::Builder::new().build())
        .manage(create_app_state())
        .setup(|app| {
            let state = app.state::<AppState>();

            // Load persisted settings before the first command can run.
            match app.path().app_config_dir() {
                Ok(dir) => {
                    let path = dir.join(settings::SETTINGS_FILE);
                    let loaded = settings::load_settings(&path);
                    *state.settings.lock().unwrap() = loaded;
                    *state.settings_path.lock().unwrap() = Some(path);
                }
                Err(e) => {
                    log_warn!("SYS", "No config dir, settings will not persist: {}", e);
                }
            }

            let stop_key = state.settings.lock().unwrap().stop_key.clone();
            if let Err(e) = clicker::register_stop_shortcut(app.handle(), &stop_key) {
                log_warn!("KEY", "{}", e);
            }

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Greeting command (main page form)
            commands::greet,
            // Settings commands
            settings::get_settings,
            settings::update_settings,
            // Window discovery commands
            window::find_target_window,
            window::list_candidate_windows,
            // Click session commands
            clicker::start_clicker,
            clicker::stop_clicker,
            clicker::get_status,
            // Logging commands
            logging::get_next_seq,
            logging::log_frontend_atomic,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
