//! Investment advice tab - ranked +100 stat suggestions for both sides

use crate::app::{AnalysisReport, App};
use justice_core::INVESTMENT_STEP;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let report = match &app.report {
        Some(report) => report,
        None => {
            let paragraph = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "No analysis yet.",
                    Style::default().fg(Color::DarkGray),
                )),
                Line::from(Span::styled(
                    "Fill in the Input tab and press 'c' or Enter.",
                    Style::default().fg(Color::DarkGray),
                )),
            ])
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Investment Advice "),
            );
            f.render_widget(paragraph, area);
            return;
        }
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Percentage(50),
        ])
        .split(area);

    draw_offense(f, report, chunks[0]);
    draw_defense(f, report, chunks[1]);
}

fn draw_offense(f: &mut Frame, report: &AnalysisReport, area: Rect) {
    let mut lines = header_lines("Expected damage gained per swing");

    for (i, s) in report.offensive.iter().enumerate() {
        lines.push(ranked_line(i, s.label(), s.gain_percent(), s.gain > 0.0));
    }

    if report.offensive.is_empty() {
        lines.push(Line::from(Span::styled(
            "  (no damage to improve)",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default().borders(Borders::ALL).title(Span::styled(
            " Offense ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
    );

    f.render_widget(paragraph, area);
}

fn draw_defense(f: &mut Frame, report: &AnalysisReport, area: Rect) {
    let mut lines = header_lines("Expected damage avoided per swing");

    for (i, s) in report.defensive.iter().enumerate() {
        lines.push(ranked_line(i, s.label(), s.gain_percent(), s.gain > 0.0));
    }

    if report.defensive.is_empty() {
        lines.push(Line::from(Span::styled(
            "  (no damage to avoid)",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default().borders(Borders::ALL).title(Span::styled(
            " Defense ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        )),
    );

    f.render_widget(paragraph, area);
}

fn header_lines(metric: &str) -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {} (+{:.0} points)", metric, INVESTMENT_STEP),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ]
}

fn ranked_line(index: usize, label: &str, gain_percent: f64, improves: bool) -> Line<'static> {
    let label_style = match index {
        0 => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        1 => Style::default().fg(Color::White),
        2 => Style::default().fg(Color::LightCyan),
        _ => Style::default().fg(Color::Gray),
    };
    let value_style = if improves {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    Line::from(vec![
        Span::styled(format!("  {}. ", index + 1), Style::default().fg(Color::Gray)),
        Span::styled(format!("{:18}", label), label_style),
        Span::styled(format!("{:+.3}%", gain_percent), value_style),
    ])
}
