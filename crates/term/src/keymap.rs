//! Key mapping from terminal events to game commands.
//!
//! Gravity can point any way, so all four arrows translate the piece.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::types::{ClockDirection, Command, Direction};

/// Map a key press to a command.
pub fn map_key(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release || key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    let code = match key.code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    };
    match code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => {
            Some(Command::Move(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => {
            Some(Command::Move(Direction::Right))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => {
            Some(Command::Move(Direction::Down))
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => Some(Command::Move(Direction::Up)),

        KeyCode::Char('x') | KeyCode::Char('e') => Some(Command::Rotate(ClockDirection::Clockwise)),
        KeyCode::Char('z') | KeyCode::Char('y') => {
            Some(Command::Rotate(ClockDirection::CounterClockwise))
        }

        KeyCode::Char(' ') | KeyCode::Enter => Some(Command::HardDrop),
        KeyCode::Char('b') | KeyCode::Tab => Some(Command::RotateBoard),
        KeyCode::Char('p') | KeyCode::Esc => Some(Command::Pause),
        KeyCode::Char('r') => Some(Command::Restart),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn test_arrows_move_in_every_direction() {
        assert_eq!(map_key(key(KeyCode::Left)), Some(Command::Move(Direction::Left)));
        assert_eq!(map_key(key(KeyCode::Right)), Some(Command::Move(Direction::Right)));
        assert_eq!(map_key(key(KeyCode::Down)), Some(Command::Move(Direction::Down)));
        assert_eq!(map_key(key(KeyCode::Up)), Some(Command::Move(Direction::Up)));
        assert_eq!(
            map_key(key(KeyCode::Char('K'))),
            Some(Command::Move(Direction::Up))
        );
    }

    #[test]
    fn test_rotation_and_actions() {
        assert_eq!(
            map_key(key(KeyCode::Char('x'))),
            Some(Command::Rotate(ClockDirection::Clockwise))
        );
        assert_eq!(
            map_key(key(KeyCode::Char('Z'))),
            Some(Command::Rotate(ClockDirection::CounterClockwise))
        );
        assert_eq!(map_key(key(KeyCode::Char(' '))), Some(Command::HardDrop));
        assert_eq!(map_key(key(KeyCode::Tab)), Some(Command::RotateBoard));
        assert_eq!(map_key(key(KeyCode::Char('p'))), Some(Command::Pause));
        assert_eq!(map_key(key(KeyCode::Char('r'))), Some(Command::Restart));
        assert_eq!(map_key(key(KeyCode::Char('c'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(key(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(key(KeyCode::Char('c'))));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            None
        );
    }
}
