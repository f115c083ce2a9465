use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

pub fn spinner_char(frame: usize) -> char {
    SPINNER[frame % SPINNER.len()]
}

/// Indeterminate progress indicator, centered in `area`.
pub fn render(f: &mut Frame, area: Rect, frame: usize) {
    let [_, middle, _] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);

    let line = Line::from(vec![
        Span::styled(
            format!("{} ", spinner_char(frame)),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(
            "Loading qualifying results",
            Style::default().fg(Color::DarkGray),
        ),
    ])
    .centered();

    f.render_widget(Paragraph::new(line), middle);
}
