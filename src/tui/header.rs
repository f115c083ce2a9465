use crate::app::AppState;
use crate::tui::loading::spinner_char;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let query = &state.config.query;
    let mut spans = vec![
        Span::styled(
            format!(" {} ", state.config.label),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("│ "),
        Span::styled(
            format!("{} · Round {}", query.season, query.round),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    if let Some(race) = &state.screen.race_name {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            race.clone(),
            Style::default().fg(Color::Yellow),
        ));
    }

    if state.screen.refreshing {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            spinner_char(state.spinner_frame).to_string(),
            Style::default().fg(Color::Yellow),
        ));
    }

    // Stale rows are still on screen after a failed refresh
    if state.screen.error && !state.screen.results.is_empty() {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            "! refresh failed",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    f.render_widget(header, area);
}
