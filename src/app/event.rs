// Keyboard event handling
//
// This module contains the keyboard event handler that processes
// user input and updates the application state accordingly.

use super::AppState;
use crossterm::event::KeyCode;

/// Handle keyboard events and update application state
///
/// Returns `true` if the application should continue running,
/// `false` if it should exit.
///
/// # Key Bindings
/// - `q`, `Q`, `Esc` - Quit the application
/// - `Left` / `Right` - Focus previous / next resource in the snapshot
/// - `Up` / `Down` - Select previous / next link in the graph
/// - `Enter` - Refocus on the selected link
/// - `Backspace`, `b` - Return to the previous focus
/// - `r`, `R` - Reload the snapshot now
/// - `+`, `=` - Slow down refresh
/// - `-`, `_` - Speed up refresh
pub fn handle_key_event(app: &mut AppState, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            app.running = false;
            false
        }
        KeyCode::Left => {
            app.focus_previous_resource();
            true
        }
        KeyCode::Right => {
            app.focus_next_resource();
            true
        }
        KeyCode::Up => {
            app.select_previous_link();
            true
        }
        KeyCode::Down => {
            app.select_next_link();
            true
        }
        KeyCode::Enter => {
            app.follow_selected_link();
            true
        }
        KeyCode::Backspace | KeyCode::Char('b') | KeyCode::Char('B') => {
            app.go_back();
            true
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            tracing::info!("Manual snapshot reload");
            app.reload();
            true
        }
        // + = slower refresh (increase interval)
        // - = faster refresh (decrease interval)
        KeyCode::Char('+') | KeyCode::Char('=') => {
            app.decrease_refresh_rate();
            true
        }
        KeyCode::Char('-') | KeyCode::Char('_') => {
            app.increase_refresh_rate();
            true
        }
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::sample_app;

    #[test]
    fn test_quit_keys() {
        let mut app = sample_app();

        assert!(app.running);
        let result = handle_key_event(&mut app, KeyCode::Char('q'));
        assert!(!result);
        assert!(!app.running);

        app.running = true;
        let result = handle_key_event(&mut app, KeyCode::Char('Q'));
        assert!(!result);
        assert!(!app.running);

        app.running = true;
        let result = handle_key_event(&mut app, KeyCode::Esc);
        assert!(!result);
        assert!(!app.running);
    }

    #[test]
    fn test_navigate_and_follow_link() {
        let mut app = sample_app();

        assert!(handle_key_event(&mut app, KeyCode::Down));
        assert_eq!(app.selected_link, Some(0));

        handle_key_event(&mut app, KeyCode::Enter);
        assert_eq!(app.focus.as_deref(), Some("emojivoto/deployment/voting"));

        handle_key_event(&mut app, KeyCode::Backspace);
        assert_eq!(app.focus.as_deref(), Some("emojivoto/deployment/web"));
    }

    #[test]
    fn test_cycle_focus_keys() {
        let mut app = sample_app();

        handle_key_event(&mut app, KeyCode::Right);
        assert_eq!(app.focus.as_deref(), Some("emojivoto/deployment/emoji"));

        handle_key_event(&mut app, KeyCode::Left);
        assert_eq!(app.focus.as_deref(), Some("emojivoto/deployment/web"));
    }

    #[test]
    fn test_refresh_rate_controls() {
        let mut app = sample_app();
        let initial_rate = app.refresh_config.refresh_ms;

        handle_key_event(&mut app, KeyCode::Char('-'));
        assert!(app.refresh_config.refresh_ms < initial_rate);

        handle_key_event(&mut app, KeyCode::Char('+'));
        assert_eq!(app.refresh_config.refresh_ms, initial_rate);
    }

    #[test]
    fn test_unbound_key_keeps_running() {
        let mut app = sample_app();
        assert!(handle_key_event(&mut app, KeyCode::Char('z')));
        assert!(app.running);
    }
}
