//! FILENAME: app/src-tauri/src/platform/win32.rs
// PURPOSE: Win32 implementation of window enumeration and synthetic clicks.
// CONTEXT: Clicks are delivered with SendMessage directly to the game window,
//          so the physical cursor never moves and the game does not need focus.

use engine::{click_lparam, ClickPoint, ClientSize, ScreenPoint, MK_LBUTTON};

use windows::Win32::Foundation::{HWND, LPARAM, POINT, RECT, WPARAM};
use windows::Win32::Graphics::Gdi::ClientToScreen;
use windows::Win32::UI::WindowsAndMessaging::{
    EnumWindows, GetClientRect, GetWindowTextW, IsWindow, IsWindowVisible, SendMessageW,
    WM_LBUTTONDOWN, WM_LBUTTONUP,
};

use super::WindowId;

fn hwnd(id: WindowId) -> HWND {
    HWND(id.0 as *mut core::ffi::c_void)
}

/// Every visible top-level window with a non-empty title.
pub fn list_windows() -> Result<Vec<(WindowId, String)>, String> {
    unsafe extern "system" fn enum_callback(
        handle: HWND,
        lparam: LPARAM,
    ) -> windows::core::BOOL {
        let windows_out = unsafe { &mut *(lparam.0 as *mut Vec<(WindowId, String)>) };

        if unsafe { IsWindowVisible(handle) }.as_bool() {
            let mut buf = [0u16; 512];
            let len = unsafe { GetWindowTextW(handle, &mut buf) };
            if len > 0 {
                let title = String::from_utf16_lossy(&buf[..len as usize]);
                windows_out.push((WindowId(handle.0 as isize), title));
            }
        }

        true.into()
    }

    let mut result: Vec<(WindowId, String)> = Vec::new();
    unsafe {
        EnumWindows(
            Some(enum_callback),
            LPARAM(&mut result as *mut Vec<(WindowId, String)> as isize),
        )
    }
    .map_err(|e| format!("EnumWindows failed: {}", e))?;

    Ok(result)
}

/// The window's client-area extent.
pub fn client_size(id: WindowId) -> Result<ClientSize, String> {
    let mut rect = RECT::default();
    unsafe { GetClientRect(hwnd(id), &mut rect) }
        .map_err(|e| format!("GetClientRect failed: {}", e))?;
    Ok(ClientSize {
        width: rect.right - rect.left,
        height: rect.bottom - rect.top,
    })
}

/// Convert a client-area click point to screen coordinates.
pub fn client_to_screen(id: WindowId, point: ClickPoint) -> Result<ScreenPoint, String> {
    let mut native = POINT { x: point.x, y: point.y };
    let ok = unsafe { ClientToScreen(hwnd(id), &mut native) };
    if !ok.as_bool() {
        return Err("ClientToScreen failed".to_string());
    }
    Ok(ScreenPoint { x: native.x, y: native.y })
}

/// Post a left-button down/up pair at the point, in client coordinates.
pub fn send_click(id: WindowId, point: ClickPoint) -> Result<(), String> {
    let lparam = LPARAM(click_lparam(point));
    let target = hwnd(id);
    unsafe {
        SendMessageW(target, WM_LBUTTONDOWN, Some(WPARAM(MK_LBUTTON)), Some(lparam));
        SendMessageW(target, WM_LBUTTONUP, Some(WPARAM(0)), Some(lparam));
    }
    Ok(())
}

/// Whether the handle still refers to a live window.
pub fn is_window_alive(id: WindowId) -> bool {
    unsafe { IsWindow(Some(hwnd(id))) }.as_bool()
}
