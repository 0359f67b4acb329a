//! FILENAME: app/src-tauri/src/settings.rs
// PURPOSE: Settings commands and JSON persistence.
// CONTEXT: Settings live in AppState, persist to <app-config-dir>/settings.json
//          and apply to a running session in real time. Out-of-range values
//          are clamped, never rejected.

use std::fs;
use std::path::Path;

use engine::ClickerSettings;
use tauri::{AppHandle, State};

use crate::api_types::SettingsData;
use crate::{clicker, AppState};
use crate::{log_enter_info, log_exit_info, log_info, log_warn};

pub const SETTINGS_FILE: &str = "settings.json";

/// Read persisted settings. A missing or unreadable file yields defaults;
/// whatever is read gets clamped before use.
pub fn load_settings(path: &Path) -> ClickerSettings {
    match fs::read_to_string(path) {
        Ok(text) => match serde_json::from_str::<ClickerSettings>(&text) {
            Ok(settings) => {
                log_info!("CFG", "Loaded settings from {:?}", path);
                settings.clamped()
            }
            Err(e) => {
                log_warn!("CFG", "Settings file {:?} is invalid ({}), using defaults", path, e);
                ClickerSettings::default()
            }
        },
        // First run: no file yet.
        Err(_) => ClickerSettings::default(),
    }
}

pub fn save_settings(path: &Path, settings: &ClickerSettings) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create settings dir {:?}: {}", parent, e))?;
    }
    let json = serde_json::to_string_pretty(settings).map_err(|e| e.to_string())?;
    fs::write(path, json).map_err(|e| format!("Failed to write settings file {:?}: {}", path, e))
}

/// Clamp, store in state and persist. Returns the effective settings.
/// A persistence failure is logged and does not block the live update.
pub fn store_settings(state: &AppState, settings: ClickerSettings) -> ClickerSettings {
    let effective = settings.clamped();
    *state.settings.lock().unwrap() = effective.clone();

    if let Some(path) = state.settings_path.lock().unwrap().as_ref() {
        if let Err(e) = save_settings(path, &effective) {
            log_warn!("CFG", "Failed to persist settings: {}", e);
        }
    }

    effective
}

#[tauri::command]
pub fn get_settings(state: State<AppState>) -> SettingsData {
    state.settings.lock().unwrap().clone().into()
}

#[tauri::command]
pub fn update_settings(
    app: AppHandle,
    state: State<AppState>,
    settings: SettingsData,
) -> Result<SettingsData, String> {
    log_enter_info!(
        "CMD",
        "update_settings",
        "cps={} x={:.2} y={:.2} overlay={}",
        settings.cps,
        settings.relative_x,
        settings.relative_y,
        settings.show_overlay
    );

    let old_stop_key = state.settings.lock().unwrap().stop_key.clone();
    let effective = store_settings(&state, settings.into());

    // Adjustments are applied in real time while the bot is active.
    clicker::apply_settings(&app, &state, &effective);

    if effective.stop_key != old_stop_key {
        clicker::register_stop_shortcut(&app, &effective.stop_key)?;
    }

    log_exit_info!("CMD", "update_settings", "cps={}", effective.cps);
    Ok(effective.into())
}
