use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub fn render(f: &mut Frame, area: Rect) {
    let [_, middle, _] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(3),
        Constraint::Min(0),
    ])
    .areas(area);

    let lines = vec![
        Line::from(vec![
            Span::styled("✗ ", Style::default().fg(Color::Red)),
            Span::styled(
                "Results unavailable",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        ])
        .centered(),
        Line::raw(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("r", Style::default().fg(Color::Cyan)),
            Span::styled(" to try again", Style::default().fg(Color::DarkGray)),
        ])
        .centered(),
    ];

    f.render_widget(Paragraph::new(lines), middle);
}
