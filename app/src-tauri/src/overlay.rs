//! FILENAME: app/src-tauri/src/overlay.rs
// PURPOSE: Visual overlay marking the click point on screen.
// CONTEXT: A tiny always-on-top, borderless, click-through webview window
//          centered on the click point. Repositioned live when the click
//          position changes while a session runs.

use crate::{log_info, log_warn};
use engine::{overlay_origin, ScreenPoint, OVERLAY_SIZE};
use tauri::{AppHandle, Manager, PhysicalPosition, WebviewUrl, WebviewWindowBuilder};

pub const OVERLAY_LABEL: &str = "click-overlay";

/// Create the overlay window (or move an existing one) centered on `point`.
pub fn show_overlay(app: &AppHandle, point: ScreenPoint) -> Result<(), String> {
    let (left, top) = overlay_origin(point);

    if let Some(existing) = app.get_webview_window(OVERLAY_LABEL) {
        return existing
            .set_position(PhysicalPosition::new(left, top))
            .map_err(|e| format!("Failed to move overlay: {}", e));
    }

    let window = WebviewWindowBuilder::new(
        app,
        OVERLAY_LABEL,
        WebviewUrl::App("overlay.html".into()),
    )
    .title("Click Overlay")
    .inner_size(OVERLAY_SIZE as f64, OVERLAY_SIZE as f64)
    .decorations(false)
    .transparent(true)
    .always_on_top(true)
    .skip_taskbar(true)
    .resizable(false)
    .focused(false)
    .shadow(false)
    .build()
    .map_err(|e| format!("Failed to create overlay window: {}", e))?;

    // Clicks must pass through the marker to the game underneath.
    window
        .set_ignore_cursor_events(true)
        .map_err(|e| format!("Failed to make overlay click-through: {}", e))?;
    window
        .set_position(PhysicalPosition::new(left, top))
        .map_err(|e| format!("Failed to position overlay: {}", e))?;

    log_info!("OVL", "Overlay shown at screen ({}, {})", point.x, point.y);
    Ok(())
}

/// Close the overlay if it exists. Errors are logged, not propagated;
/// a stuck overlay must never prevent the session from stopping.
pub fn close_overlay(app: &AppHandle) {
    if let Some(window) = app.get_webview_window(OVERLAY_LABEL) {
        if let Err(e) = window.close() {
            log_warn!("OVL", "Failed to close overlay: {}", e);
        }
    }
}
