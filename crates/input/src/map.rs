//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to game actions.
///
/// Arrow keys, WASD and HJKL all work; up rotates. Key releases are ignored.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        KeyCode::Left | KeyCode::Char('a' | 'A' | 'h' | 'H') => Some(GameAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('d' | 'D' | 'l' | 'L') => Some(GameAction::MoveRight),
        KeyCode::Down | KeyCode::Char('s' | 'S' | 'j' | 'J') => Some(GameAction::MoveDown),
        KeyCode::Up | KeyCode::Char('w' | 'W' | 'k' | 'K') => Some(GameAction::Rotate),
        KeyCode::Char('r' | 'R') => Some(GameAction::Restart),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    #[test]
    fn test_arrow_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(GameAction::MoveLeft)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Right)),
            Some(GameAction::MoveRight)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(GameAction::MoveDown)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Up)),
            Some(GameAction::Rotate)
        );
    }

    #[test]
    fn test_letter_aliases() {
        for (ch, action) in [
            ('a', GameAction::MoveLeft),
            ('H', GameAction::MoveLeft),
            ('d', GameAction::MoveRight),
            ('L', GameAction::MoveRight),
            ('s', GameAction::MoveDown),
            ('j', GameAction::MoveDown),
            ('W', GameAction::Rotate),
            ('k', GameAction::Rotate),
            ('r', GameAction::Restart),
        ] {
            assert_eq!(
                handle_key_event(KeyEvent::from(KeyCode::Char(ch))),
                Some(action),
                "key {}",
                ch
            );
        }
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_release_and_control_ignored() {
        let release = KeyEvent {
            code: KeyCode::Left,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(handle_key_event(release), None);

        let ctrl_d = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(ctrl_d), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }
}
