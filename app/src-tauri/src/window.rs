//! FILENAME: app/src-tauri/src/window.rs
// PURPOSE: Locate the Cookie Clicker game window.
// CONTEXT: The game's title is dynamic ("123 cookies - Cookie Clicker"),
//          so matching goes through engine::title. When nothing matches,
//          windows mentioning the game or Steam are surfaced as diagnostics.

use crate::api_types::{CandidateWindow, WindowInfo};
use crate::platform::{self, WindowId};
use crate::{log_info, log_warn};
use engine::{is_diagnostic_candidate, is_game_window_title};

pub const NOT_FOUND_MESSAGE: &str =
    "No window found with pattern 'X cookies - Cookie Clicker'. \
     Make sure Cookie Clicker is open (use borderless window mode if the game is fullscreen).";

/// First window whose title matches the game pattern.
pub fn match_game_window(windows: &[(WindowId, String)]) -> Option<(WindowId, String)> {
    windows
        .iter()
        .find(|(_, title)| is_game_window_title(title))
        .map(|(id, title)| (*id, title.clone()))
}

/// Titles worth showing when the game window was not found.
pub fn candidate_titles(windows: &[(WindowId, String)]) -> Vec<String> {
    windows
        .iter()
        .filter(|(_, title)| is_diagnostic_candidate(title))
        .map(|(_, title)| title.clone())
        .collect()
}

#[tauri::command]
pub fn find_target_window() -> Result<WindowInfo, String> {
    let windows = platform::list_windows()?;

    match match_game_window(&windows) {
        Some((id, title)) => {
            log_info!("WIN", "Game detected: '{}' (handle {})", title, id.0);
            Ok(WindowInfo { handle: id.0, title })
        }
        None => {
            log_warn!("WIN", "No window matches the game title pattern");
            for title in candidate_titles(&windows) {
                log_info!("WIN", "  relevant window: '{}'", title);
            }
            Err(NOT_FOUND_MESSAGE.to_string())
        }
    }
}

/// Windows for the "game not found" diagnostics panel.
#[tauri::command]
pub fn list_candidate_windows() -> Result<Vec<CandidateWindow>, String> {
    let windows = platform::list_windows()?;
    Ok(candidate_titles(&windows)
        .into_iter()
        .map(|title| CandidateWindow { title })
        .collect())
}
