use crate::app::{AppState, ViewMode};
use crate::tui::{error_page, footer, header, loading, results};
use ratatui::layout::{Constraint, Layout};
use ratatui::Frame;

/// Draws the header, then exactly one of the three views, then the footer.
pub fn render(f: &mut Frame, state: &AppState) {
    let chunks = Layout::vertical([
        Constraint::Length(2), // header
        Constraint::Min(1),    // body
        Constraint::Length(2), // footer
    ])
    .split(f.area());

    header::render(f, chunks[0], state);
    match state.view() {
        ViewMode::Loading => loading::render(f, chunks[1], state.spinner_frame),
        ViewMode::Error => error_page::render(f, chunks[1]),
        ViewMode::Results => results::render(f, chunks[1], state),
    }
    footer::render(f, chunks[2], state);
}
