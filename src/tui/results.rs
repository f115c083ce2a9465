use crate::app::AppState;
use crate::row::{render_row, RowDisplay, SessionTime, TimeAlign};
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Paragraph, Row, Table, TableState};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

const POSITION_COLOR: Color = Color::LightRed;
const TIME_WIDTH: u16 = 9;

pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    if state.screen.results.is_empty() {
        let para = Paragraph::new("No qualifying results for this round")
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(para, area);
        return;
    }

    let narrow = area.width < crate::app::NARROW_WIDTH_THRESHOLD;
    let rows: Vec<RowDisplay> = state.screen.results.iter().map(render_row).collect();

    // "44 Lewis Hamilton": number, a space, then the name
    let driver_width = rows
        .iter()
        .map(|r| r.number.len() + 1 + UnicodeWidthStr::width(r.driver_name.as_str()))
        .max()
        .unwrap_or(0)
        .max("Driver".len()) as u16;

    let mut widths = vec![Constraint::Length(3), Constraint::Length(driver_width)];
    if !narrow {
        widths.push(Constraint::Min(10));
    }
    widths.extend([Constraint::Length(TIME_WIDTH); 3]);

    let mut header_cells = vec![
        Cell::from(Line::from("Pos").right_aligned()),
        Cell::from("Driver"),
    ];
    if !narrow {
        header_cells.push(Cell::from("Constructor"));
    }
    header_cells.extend(["Q1", "Q2", "Q3"].map(|q| Cell::from(Line::from(q).centered())));
    let header = Row::new(header_cells).style(
        Style::default()
            .fg(POSITION_COLOR)
            .add_modifier(Modifier::BOLD),
    );

    let table_rows: Vec<Row> = rows.into_iter().map(|r| table_row(r, narrow)).collect();

    let table = Table::new(table_rows, widths)
        .header(header)
        .column_spacing(1)
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut table_state = TableState::default().with_selected(Some(state.cursor));
    f.render_stateful_widget(table, area, &mut table_state);
}

fn table_row(row: RowDisplay, narrow: bool) -> Row<'static> {
    let mut cells = vec![
        Cell::from(Line::from(row.position).right_aligned()).style(Style::default().fg(POSITION_COLOR)),
        Cell::from(Line::from(vec![
            Span::styled(row.number, Style::default().fg(POSITION_COLOR)),
            Span::raw(" "),
            Span::styled(
                row.driver_name,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ])),
    ];
    if !narrow {
        cells.push(Cell::from(row.constructor).style(Style::default().fg(Color::Gray)));
    }
    cells.push(Cell::from(Line::from(row.q1).right_aligned()));
    cells.push(time_cell(&row.q2));
    cells.push(time_cell(&row.q3));
    Row::new(cells)
}

fn time_cell(time: &SessionTime) -> Cell<'static> {
    let line = Line::from(time.display().to_string());
    match time.alignment() {
        TimeAlign::Right => Cell::from(line.right_aligned()),
        TimeAlign::Center => {
            Cell::from(line.centered()).style(Style::default().fg(Color::DarkGray))
        }
    }
}
