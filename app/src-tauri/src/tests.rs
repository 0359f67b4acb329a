#[cfg(test)]
use super::*;
use crate::clicker::plan_from_size;
use crate::window::{candidate_titles, match_game_window};
use engine::{ClickerSettings, ClientSize};
use std::time::Duration;

fn window_list(titles: &[&str]) -> Vec<(WindowId, String)> {
    titles
        .iter()
        .enumerate()
        .map(|(i, t)| (WindowId(i as isize + 1), t.to_string()))
        .collect()
}

#[test]
fn test_match_game_window_finds_first_match() {
    let windows = window_list(&[
        "Steam",
        "245 cookies - Cookie Clicker",
        "1,111 cookies - Cookie Clicker",
    ]);
    let (id, title) = match_game_window(&windows).unwrap();
    assert_eq!(id, WindowId(2));
    assert_eq!(title, "245 cookies - Cookie Clicker");
}

#[test]
fn test_match_game_window_none_when_absent() {
    let windows = window_list(&["Steam", "Notepad", "Cookie Clicker wiki - Browser"]);
    assert!(match_game_window(&windows).is_none());
}

#[test]
fn test_candidate_titles_keep_cookie_and_steam_windows() {
    let windows = window_list(&[
        "Steam",
        "Notepad",
        "Cookie Clicker wiki - Browser",
        "Calculator",
    ]);
    let candidates = candidate_titles(&windows);
    assert_eq!(candidates, vec!["Steam", "Cookie Clicker wiki - Browser"]);
}

#[test]
fn test_plan_from_size_uses_settings() {
    let settings = ClickerSettings { cps: 10, ..Default::default() };
    let plan = plan_from_size(
        WindowId(7),
        ClientSize { width: 1000, height: 1000 },
        &settings,
    );
    assert_eq!(plan.window, WindowId(7));
    assert_eq!(plan.point.x, 150);
    assert_eq!(plan.point.y, 390);
    assert_eq!(plan.interval, Duration::from_millis(100));
}

#[test]
fn test_settings_data_round_trip() {
    let settings = ClickerSettings { cps: 33, show_overlay: false, ..Default::default() };
    let data: SettingsData = settings.clone().into();
    assert_eq!(data.cps, 33);
    assert!(!data.show_overlay);

    let back: ClickerSettings = data.into();
    assert_eq!(back, settings);
}

#[test]
fn test_status_serializes_camel_case_and_skips_empty_fields() {
    let status = StatusData::stopped(15);
    let json = serde_json::to_string(&status).unwrap();
    assert!(json.contains("\"running\":false"));
    assert!(json.contains("\"cps\":15"));
    // Stopped status omits the optional fields entirely.
    assert!(!json.contains("windowTitle"));
    assert!(!json.contains("clickPoint"));
}
