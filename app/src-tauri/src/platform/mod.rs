//! FILENAME: app/src-tauri/src/platform/mod.rs
// PURPOSE: Native window access behind a platform-neutral surface.
// CONTEXT: The click worker holds a `WindowId` across threads; raw HWNDs are
//          only materialized inside the Windows implementation. The non-Windows
//          build keeps the crate compiling and returns a descriptive error
//          from every entry point.

/// A native window handle reduced to an integer so it is Send + Copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowId(pub isize);

#[cfg(windows)]
mod win32;
#[cfg(windows)]
pub use win32::{client_size, client_to_screen, is_window_alive, list_windows, send_click};

#[cfg(not(windows))]
mod unsupported;
#[cfg(not(windows))]
pub use unsupported::{client_size, client_to_screen, is_window_alive, list_windows, send_click};
