//! Keyboard event handling.

use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Handle a key event. Returns true once the picker is done.
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('d') => app.cancel(),
            KeyCode::Char('p') | KeyCode::Char('k') => app.move_up(),
            KeyCode::Char('n') | KeyCode::Char('j') => app.move_down(),
            _ => {}
        }
        return app.is_done();
    }

    match key.code {
        KeyCode::Esc => app.cancel(),
        KeyCode::Enter => app.confirm(),
        KeyCode::Up => app.move_up(),
        KeyCode::Down => app.move_down(),
        KeyCode::Backspace => app.pop_char(),
        KeyCode::Char(c) => app.push_char(c),
        _ => {}
    }

    app.is_done()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppState;
    use crossterm::event::KeyEventState;

    fn app() -> App {
        App::new(vec!["gamma".into(), "Beta".into(), "alpha".into()])
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn typing_then_enter_selects() {
        let mut app = app();
        assert!(!handle_key(&mut app, press(KeyCode::Char('a'))));
        assert!(!handle_key(&mut app, press(KeyCode::Char('l'))));
        assert!(handle_key(&mut app, press(KeyCode::Enter)));
        assert_eq!(app.state, AppState::Selected("alpha".into()));
    }

    #[test]
    fn escape_cancels() {
        let mut app = app();
        assert!(handle_key(&mut app, press(KeyCode::Esc)));
        assert_eq!(app.state, AppState::Cancelled);
    }

    #[test]
    fn ctrl_c_cancels_instead_of_typing() {
        let mut app = app();
        assert!(handle_key(&mut app, ctrl('c')));
        assert_eq!(app.state, AppState::Cancelled);
        assert!(app.query.is_empty());
    }

    #[test]
    fn ctrl_n_and_ctrl_p_move() {
        let mut app = app();
        handle_key(&mut app, ctrl('n'));
        handle_key(&mut app, ctrl('n'));
        assert_eq!(app.current(), Some("alpha"));
        handle_key(&mut app, ctrl('p'));
        assert_eq!(app.current(), Some("Beta"));
        handle_key(&mut app, press(KeyCode::Up));
        assert_eq!(app.current(), Some("gamma"));
    }

    #[test]
    fn backspace_edits_query() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('z')));
        assert!(app.matches.is_empty());
        handle_key(&mut app, press(KeyCode::Backspace));
        assert_eq!(app.matches.len(), 3);
    }

    #[test]
    fn key_release_is_ignored() {
        let mut app = app();
        let release = KeyEvent {
            code: KeyCode::Char('x'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert!(!handle_key(&mut app, release));
        assert!(app.query.is_empty());
    }
}
