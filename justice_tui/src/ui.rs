//! UI rendering

mod advice_view;
mod help_view;
mod input_view;
mod report_view;
mod volley_view;

use crate::app::{App, Tab};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Keybindings footer
        ])
        .split(f.area());

    draw_tabs(f, app, chunks[0]);

    match app.current_tab {
        Tab::Input => input_view::draw(f, app, chunks[1]),
        Tab::Report => report_view::draw(f, app, chunks[1]),
        Tab::Advice => advice_view::draw(f, app, chunks[1]),
        Tab::Volley => volley_view::draw(f, app, chunks[1]),
        Tab::Help => help_view::draw(f, app, chunks[1]),
    }

    draw_keybindings(f, app, chunks[2]);
}

fn draw_keybindings(f: &mut Frame, app: &App, area: Rect) {
    let tab_keys: &[(&str, &str)] = match app.current_tab {
        Tab::Input => &[
            ("↑/↓", "Select field"),
            ("←/→", "Switch side"),
            ("Enter/c", "Calculate"),
            ("r", "Reset"),
        ],
        Tab::Report => &[("↑/↓", "Scroll"), ("v", "Roll volley")],
        Tab::Advice => &[],
        Tab::Volley => &[("v/Enter", "Re-roll")],
        Tab::Help => &[],
    };
    let common_keys: &[(&str, &str)] = &[("Tab", "Next tab"), ("q", "Quit")];

    let mut spans: Vec<Span> = Vec::new();
    push_keys(
        &mut spans,
        tab_keys,
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        Style::default().fg(Color::White),
    );
    push_keys(
        &mut spans,
        common_keys,
        Style::default().fg(Color::Cyan),
        Style::default().fg(Color::Gray),
    );

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(" Keys "))
        .alignment(ratatui::layout::Alignment::Center);

    f.render_widget(paragraph, area);
}

fn push_keys(
    spans: &mut Vec<Span<'static>>,
    keys: &[(&str, &str)],
    key_style: Style,
    desc_style: Style,
) {
    for (key, desc) in keys {
        if !spans.is_empty() {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(format!("[{}]", key), key_style));
        spans.push(Span::styled(format!(" {}", desc), desc_style));
    }
}

fn draw_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Tab::all().iter().map(|t| Line::from(t.name())).collect();
    let selected = Tab::all()
        .iter()
        .position(|t| *t == app.current_tab)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Justice Calculator "),
        )
        .style(Style::default().fg(Color::Gray))
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .divider("|");

    f.render_widget(tabs, area);
}

pub fn progress_bar(current: f64, max: f64, width: u16, filled_color: Color) -> Paragraph<'static> {
    let percent = if max > 0.0 { (current / max).min(1.0) } else { 0.0 };
    let filled = (percent * width as f64) as usize;
    let empty = width as usize - filled;

    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(empty));
    Paragraph::new(bar).style(Style::default().fg(filled_color))
}

pub fn stat_line(name: &str, value: f64) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:20}", name), Style::default().fg(Color::Gray)),
        Span::styled(format!("{:.1}", value), Style::default().fg(Color::White)),
    ])
}
