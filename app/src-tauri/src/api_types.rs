//! FILENAME: app/src-tauri/src/api_types.rs
// PURPOSE: Shared type definitions for Tauri API communication.
// CONTEXT: All structs use camelCase serialization for JavaScript interoperability.

use engine::{ClickerSettings, ScreenPoint};
use serde::{Deserialize, Serialize};

/// Settings payload exchanged with the frontend.
/// Mirrors `engine::ClickerSettings`; kept separate so the wire shape can
/// evolve without touching the engine crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsData {
    pub cps: u32,
    pub relative_x: f64,
    pub relative_y: f64,
    pub show_overlay: bool,
    pub stop_key: String,
}

impl Default for SettingsData {
    fn default() -> Self {
        ClickerSettings::default().into()
    }
}

impl From<ClickerSettings> for SettingsData {
    fn from(s: ClickerSettings) -> Self {
        SettingsData {
            cps: s.cps,
            relative_x: s.relative_x,
            relative_y: s.relative_y,
            show_overlay: s.show_overlay,
            stop_key: s.stop_key,
        }
    }
}

impl From<SettingsData> for ClickerSettings {
    fn from(d: SettingsData) -> Self {
        ClickerSettings {
            cps: d.cps,
            relative_x: d.relative_x,
            relative_y: d.relative_y,
            show_overlay: d.show_overlay,
            stop_key: d.stop_key,
        }
    }
}

/// The game window located by `find_target_window`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowInfo {
    /// Native window handle as an integer (opaque to the frontend).
    pub handle: isize,
    pub title: String,
}

/// A window listed by the "window not found" diagnostics panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateWindow {
    pub title: String,
}

/// Session status returned by start/stop/get_status.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusData {
    pub running: bool,
    /// Title of the window being clicked (None when stopped).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_title: Option<String>,
    /// Current click point in screen coordinates, for the overlay.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub click_point: Option<ScreenPoint>,
    /// Effective clicks per second (after clamping).
    pub cps: u32,
}

impl StatusData {
    pub fn stopped(cps: u32) -> Self {
        StatusData {
            running: false,
            window_title: None,
            click_point: None,
            cps,
        }
    }
}
