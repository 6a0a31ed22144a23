use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use minesweep_core::Direction;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    Quit,
    Move(Direction),
    Sweep,
    Flag,
    ToggleDebug,
    ToggleHelp,
    ToggleAscii,
    NewGame,
    Tick,
}

pub fn msg_for_key(key: KeyEvent) -> Option<Msg> {
    use Msg::*;

    if key.kind == KeyEventKind::Release {
        return None;
    }

    Some(match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Quit,
        KeyCode::Char('q') => Quit,
        KeyCode::Up | KeyCode::Char('k') => Move(Direction::Up),
        KeyCode::Down | KeyCode::Char('j') => Move(Direction::Down),
        KeyCode::Left | KeyCode::Char('h') => Move(Direction::Left),
        KeyCode::Right | KeyCode::Char('l') => Move(Direction::Right),
        KeyCode::Enter | KeyCode::Char(' ') => Sweep,
        KeyCode::Char('f') => Flag,
        KeyCode::Char('d') => ToggleDebug,
        KeyCode::Char('?') => ToggleHelp,
        KeyCode::Char('a') => ToggleAscii,
        KeyCode::Char('r') => NewGame,
        _ => return None,
    })
}
