//! FILENAME: app/src-tauri/src/clicker.rs
// PURPOSE: Click session lifecycle - start/stop commands and the worker thread.
// CONTEXT: One worker thread per session paces synthetic clicks into the game
//          window. The worker re-reads its plan every iteration, so settings
//          changes apply in real time, and it self-stops when the target
//          window disappears.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use engine::{click_interval, click_point, ClickPoint, ClickerSettings};
use tauri::{AppHandle, Manager, State};
use tauri_plugin_global_shortcut::{GlobalShortcutExt, ShortcutState};

use crate::api_types::StatusData;
use crate::platform::{self, WindowId};
use crate::{log_enter_info, log_error, log_exit_info, log_info, log_warn};
use crate::{overlay, window, AppState};

/// Everything the worker needs for one click: target, position, pacing.
#[derive(Debug, Clone, Copy)]
pub struct ClickPlan {
    pub window: WindowId,
    pub point: ClickPoint,
    pub interval: Duration,
}

/// Derive a plan from a client-area size. Pure; the platform query lives in
/// `build_plan`.
pub fn plan_from_size(
    window: WindowId,
    size: engine::ClientSize,
    settings: &ClickerSettings,
) -> ClickPlan {
    ClickPlan {
        window,
        point: click_point(size, settings.relative_x, settings.relative_y),
        interval: click_interval(settings.cps),
    }
}

/// Measure the window and derive the plan.
pub fn build_plan(window: WindowId, settings: &ClickerSettings) -> Result<ClickPlan, String> {
    let size = platform::client_size(window)?;
    Ok(plan_from_size(window, size, settings))
}

/// A running (or just-finished) click session.
pub struct ClickSession {
    stop: Arc<AtomicBool>,
    running: Arc<AtomicBool>,
    plan: Arc<Mutex<ClickPlan>>,
    window_title: String,
    handle: Option<thread::JoinHandle<()>>,
}

impl ClickSession {
    /// Spawn the worker thread for `plan`.
    pub fn spawn(plan: ClickPlan, window_title: String) -> Result<Self, String> {
        let stop = Arc::new(AtomicBool::new(false));
        let running = Arc::new(AtomicBool::new(true));
        let shared_plan = Arc::new(Mutex::new(plan));

        let handle = {
            let stop = Arc::clone(&stop);
            let running = Arc::clone(&running);
            let shared_plan = Arc::clone(&shared_plan);
            thread::Builder::new()
                .name("click-worker".to_string())
                .spawn(move || worker_loop(stop, running, shared_plan))
                .map_err(|e| format!("Failed to spawn click worker: {}", e))?
        };

        Ok(ClickSession {
            stop,
            running,
            plan: shared_plan,
            window_title,
            handle: Some(handle),
        })
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }

    pub fn signal_stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    pub fn window(&self) -> WindowId {
        self.plan.lock().unwrap().window
    }

    pub fn window_title(&self) -> &str {
        &self.window_title
    }

    /// Swap the worker's plan; picked up on its next iteration.
    pub fn update_plan(&self, plan: ClickPlan) {
        *self.plan.lock().unwrap() = plan;
    }
}

impl Drop for ClickSession {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            // Worker exits at its next pacing boundary.
            let _ = handle.join();
        }
    }
}

fn worker_loop(stop: Arc<AtomicBool>, running: Arc<AtomicBool>, plan: Arc<Mutex<ClickPlan>>) {
    while !stop.load(Ordering::Relaxed) {
        let current = *plan.lock().unwrap();

        if !platform::is_window_alive(current.window) {
            log_warn!("CLICK", "Target window disappeared, stopping worker");
            break;
        }
        if let Err(e) = platform::send_click(current.window, current.point) {
            log_error!("CLICK", "send_click failed: {}", e);
            break;
        }

        thread::sleep(current.interval);
    }
    running.store(false, Ordering::Relaxed);
}

// ============================================================================
// SESSION COMMANDS
// ============================================================================

#[tauri::command]
pub fn start_clicker(app: AppHandle, state: State<AppState>) -> Result<StatusData, String> {
    log_enter_info!("CMD", "start_clicker");
    let settings = state.settings.lock().unwrap().clone();

    {
        let mut session = state.session.lock().unwrap();
        reconcile(&app, &mut session);
        if session.as_ref().map(|s| s.is_running()).unwrap_or(false) {
            // Already running: report status instead of double-starting.
            log_info!("CLICK", "start_clicker ignored, session already running");
            return Ok(current_status(&session, settings.cps));
        }

        let windows = platform::list_windows()?;
        let (window_id, title) =
            window::match_game_window(&windows).ok_or_else(|| window::NOT_FOUND_MESSAGE.to_string())?;
        log_info!("CLICK", "Game detected: '{}' (handle {})", title, window_id.0);

        let plan = build_plan(window_id, &settings)?;
        let screen = platform::client_to_screen(window_id, plan.point)?;

        *session = Some(ClickSession::spawn(plan, title)?);
        log_info!("CLICK", "Autoclicker started ({} CPS)", settings.cps);

        if settings.show_overlay {
            if let Err(e) = overlay::show_overlay(&app, screen) {
                // Overlay is cosmetic, the session keeps clicking without it.
                log_warn!("OVL", "{}", e);
            }
        }

        let status = current_status(&session, settings.cps);
        log_exit_info!("CMD", "start_clicker", "running={}", status.running);
        Ok(status)
    }
}

#[tauri::command]
pub fn stop_clicker(app: AppHandle, state: State<AppState>) -> StatusData {
    log_enter_info!("CMD", "stop_clicker");
    let cps = state.settings.lock().unwrap().cps;
    stop_session(&app, &state);
    StatusData::stopped(cps)
}

#[tauri::command]
pub fn get_status(app: AppHandle, state: State<AppState>) -> StatusData {
    let cps = state.settings.lock().unwrap().cps;
    let mut session = state.session.lock().unwrap();
    reconcile(&app, &mut session);
    current_status(&session, cps)
}

/// Stop and discard the current session, if any. Idempotent.
pub fn stop_session(app: &AppHandle, state: &AppState) {
    let mut session = state.session.lock().unwrap();
    if let Some(s) = session.as_ref() {
        s.signal_stop();
        log_info!("CLICK", "Autoclicker stopped");
    }
    // Dropping joins the worker at its next pacing boundary.
    *session = None;
    overlay::close_overlay(app);
}

/// Clean up after a worker that stopped on its own (window closed).
fn reconcile(app: &AppHandle, session: &mut Option<ClickSession>) {
    if let Some(s) = session.as_ref() {
        if !s.is_running() {
            log_info!("CLICK", "Session for '{}' ended on its own", s.window_title());
            *session = None;
            overlay::close_overlay(app);
        }
    }
}

/// Status snapshot for the frontend.
pub fn current_status(session: &Option<ClickSession>, cps: u32) -> StatusData {
    match session.as_ref().filter(|s| s.is_running()) {
        Some(s) => {
            let window_id = s.window();
            let point = s.plan.lock().unwrap().point;
            StatusData {
                running: true,
                window_title: Some(s.window_title().to_string()),
                // The game window may have moved; re-derive the screen point.
                click_point: platform::client_to_screen(window_id, point).ok(),
                cps,
            }
        }
        None => StatusData::stopped(cps),
    }
}

/// Apply new settings to a running session: rebuild the plan and move or
/// toggle the overlay. No-op when stopped.
pub fn apply_settings(app: &AppHandle, state: &AppState, settings: &ClickerSettings) {
    let session = state.session.lock().unwrap();
    let Some(s) = session.as_ref().filter(|s| s.is_running()) else {
        return;
    };

    let window_id = s.window();
    match build_plan(window_id, settings) {
        Ok(plan) => {
            let point = plan.point;
            s.update_plan(plan);

            if settings.show_overlay {
                match platform::client_to_screen(window_id, point) {
                    Ok(screen) => {
                        if let Err(e) = overlay::show_overlay(app, screen) {
                            log_warn!("OVL", "{}", e);
                        }
                    }
                    Err(e) => log_warn!("OVL", "Cannot position overlay: {}", e),
                }
            } else {
                overlay::close_overlay(app);
            }
        }
        Err(e) => log_warn!("CLICK", "Could not rebuild click plan: {}", e),
    }
}

// ============================================================================
// STOP KEY
// ============================================================================

/// Register `key` as the global stop shortcut, replacing any previous one.
pub fn register_stop_shortcut(app: &AppHandle, key: &str) -> Result<(), String> {
    let shortcuts = app.global_shortcut();
    shortcuts
        .unregister_all()
        .map_err(|e| format!("Failed to clear previous stop key: {}", e))?;

    shortcuts
        .on_shortcut(key, move |app_handle, _shortcut, event| {
            if event.state() == ShortcutState::Pressed {
                log_info!("KEY", "Stop key pressed");
                let state = app_handle.state::<AppState>();
                stop_session(app_handle, &state);
            }
        })
        .map_err(|e| format!("Failed to register stop key '{}': {}", key, e))?;

    log_info!("KEY", "Stop key registered: {}", key);
    Ok(())
}
