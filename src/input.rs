use crate::app::ViewMode;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    Quit,
    Refresh,
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    ScrollToTop,
    ScrollToBottom,
    None,
}

pub fn map_key(key: KeyEvent, view: ViewMode) -> Action {
    if key.kind != KeyEventKind::Press {
        return Action::None;
    }

    // Ctrl+C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('r') | KeyCode::F(5) if view != ViewMode::Loading => Action::Refresh,
        KeyCode::Up | KeyCode::Char('k') if view == ViewMode::Results => Action::MoveUp,
        KeyCode::Down | KeyCode::Char('j') if view == ViewMode::Results => Action::MoveDown,
        KeyCode::PageUp if view == ViewMode::Results => Action::PageUp,
        KeyCode::PageDown if view == ViewMode::Results => Action::PageDown,
        KeyCode::Home | KeyCode::Char('g') if view == ViewMode::Results => Action::ScrollToTop,
        KeyCode::End | KeyCode::Char('G') if view == ViewMode::Results => Action::ScrollToBottom,
        _ => Action::None,
    }
}
