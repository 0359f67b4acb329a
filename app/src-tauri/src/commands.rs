//! FILENAME: app/src-tauri/src/commands.rs
// PURPOSE: General application commands.
// CONTEXT: `greet` is the command the main page's form invokes; it echoes
//          the typed name back in a greeting.

use crate::{log_enter_info, log_exit_info};

#[tauri::command]
pub fn greet(name: String) -> String {
    log_enter_info!("CMD", "greet", "name={}", name);
    let reply = format!("Hello, {}! You've been greeted from Rust!", name);
    log_exit_info!("CMD", "greet");
    reply
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greet_contains_exact_name() {
        assert_eq!(
            greet("World".to_string()),
            "Hello, World! You've been greeted from Rust!"
        );
    }

    #[test]
    fn test_greet_empty_name() {
        // No input validation by design: an empty name still greets.
        assert_eq!(greet(String::new()), "Hello, ! You've been greeted from Rust!");
    }

    #[test]
    fn test_greet_preserves_unicode_and_whitespace() {
        assert_eq!(
            greet("  Žofia 🍪 ".to_string()),
            "Hello,   Žofia 🍪 ! You've been greeted from Rust!"
        );
    }
}
