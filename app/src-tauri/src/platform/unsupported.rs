//! FILENAME: app/src-tauri/src/platform/unsupported.rs
// PURPOSE: Stub platform layer for non-Windows builds.
// CONTEXT: Cookie Clicker automation targets the Windows build of the game;
//          other platforms get clear errors instead of a compile failure.

use engine::{ClickPoint, ClientSize, ScreenPoint};

use super::WindowId;

const UNSUPPORTED: &str = "window automation is only supported on Windows";

pub fn list_windows() -> Result<Vec<(WindowId, String)>, String> {
    Err(UNSUPPORTED.to_string())
}

pub fn client_size(_id: WindowId) -> Result<ClientSize, String> {
    Err(UNSUPPORTED.to_string())
}

pub fn client_to_screen(_id: WindowId, _point: ClickPoint) -> Result<ScreenPoint, String> {
    Err(UNSUPPORTED.to_string())
}

pub fn send_click(_id: WindowId, _point: ClickPoint) -> Result<(), String> {
    Err(UNSUPPORTED.to_string())
}

pub fn is_window_alive(_id: WindowId) -> bool {
    false
}
