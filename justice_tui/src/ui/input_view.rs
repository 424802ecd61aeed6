//! Stat entry tab - editable attacker and defender sheets

use crate::app::{App, InputFocus};
use justice_core::FieldDef;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Stat sheets
            Constraint::Length(3), // Status line
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Percentage(50),
        ])
        .split(chunks[0]);

    draw_sheet(
        f,
        columns[0],
        " Attacker ",
        Color::Red,
        &app.attacker_entries,
        app.selected_attacker,
        app.input_focus == InputFocus::Attacker,
    );
    draw_sheet(
        f,
        columns[1],
        " Defender ",
        Color::Blue,
        &app.defender_entries,
        app.selected_defender,
        app.input_focus == InputFocus::Defender,
    );

    draw_status(f, app, chunks[1]);
}

fn draw_sheet(
    f: &mut Frame,
    area: Rect,
    title: &'static str,
    accent: Color,
    entries: &[(FieldDef, String)],
    selected: usize,
    focused: bool,
) {
    let mut lines: Vec<Line> = vec![Line::from("")];

    for (i, (def, text)) in entries.iter().enumerate() {
        let editing = focused && i == selected;

        let prefix = if editing {
            Span::styled(
                "> ",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::raw("  ")
        };

        let label_style = if editing {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        let shown = if editing {
            format!("{}_", text)
        } else {
            text.clone()
        };
        let value_style = if editing {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::White)
        };

        let mut spans = vec![
            prefix,
            Span::styled(format!("{:20}", def.label), label_style),
            Span::styled(format!("{:12}", shown), value_style),
        ];

        if text != def.default {
            spans.push(Span::styled(
                format!(" (default: {})", def.default),
                Style::default().fg(Color::DarkGray),
            ));
        }

        lines.push(Line::from(spans));
    }

    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(
                title,
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            )),
    );

    f.render_widget(paragraph, area);
}

fn draw_status(f: &mut Frame, app: &App, area: Rect) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        app.status.clone(),
        Style::default().fg(Color::White),
    )))
    .block(Block::default().borders(Borders::ALL).title(" Status "));

    f.render_widget(paragraph, area);
}
