//! Key mapping from terminal events to game actions.

use crate::types::{Difficulty, GameAction};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if should_quit(key) {
        return Some(GameAction::Quit);
    }

    match key.code {
        // Flap / start
        KeyCode::Char(' ')
        | KeyCode::Up
        | KeyCode::Enter
        | KeyCode::Char('k')
        | KeyCode::Char('K') => Some(GameAction::Flap),

        // Restart
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),

        // Title screen menu
        KeyCode::Char(c @ '1'..='3') => {
            let index = c as usize - '1' as usize;
            Some(GameAction::SelectDifficulty(Difficulty::from_index(index)))
        }
        KeyCode::Char('t') | KeyCode::Char('T') => Some(GameAction::ToggleTheme),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Playfield size for a terminal of `cols` x `rows`; the bottom row is the status line.
pub fn playfield_size(cols: u16, rows: u16) -> (u16, u16) {
    (cols, rows.saturating_sub(1))
}

/// Map any terminal event (keys and resizes) to a game action.
pub fn map_event(event: &Event) -> Option<GameAction> {
    match event {
        Event::Key(key) => handle_key_event(*key),
        Event::Resize(cols, rows) => {
            let (width, height) = playfield_size(*cols, *rows);
            Some(GameAction::Resize { width, height })
        }
        _ => None,
    }
}
