//! Volley tab - one rolled burst of swings against the expected numbers

use crate::app::{AnalysisReport, App};
use crate::ui::progress_bar;
use justice_core::VolleyOutcome;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let (report, outcome) = match (&app.report, &app.volley) {
        (Some(report), Some(outcome)) => (report, outcome),
        _ => {
            let paragraph = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "No volley rolled yet.",
                    Style::default().fg(Color::DarkGray),
                )),
                Line::from(Span::styled(
                    "Calculate on the Input tab, then press 'v'.",
                    Style::default().fg(Color::DarkGray),
                )),
            ])
            .block(Block::default().borders(Borders::ALL).title(" Volley "));
            f.render_widget(paragraph, area);
            return;
        }
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9), // Rolled outcome
            Constraint::Length(3), // Damage bar
            Constraint::Min(0),    // Rolled vs expected
        ])
        .split(area);

    draw_outcome(f, outcome, chunks[0]);
    draw_damage_bar(f, report, outcome, chunks[1]);
    draw_comparison(f, report, outcome, chunks[2]);
}

fn draw_outcome(f: &mut Frame, outcome: &VolleyOutcome, area: Rect) {
    let kill_span = match outcome.swings_to_kill {
        Some(n) => Span::styled(format!("{}", n), Style::default().fg(Color::LightGreen)),
        None => Span::styled("survived the volley", Style::default().fg(Color::DarkGray)),
    };

    let lines = vec![
        Line::from(""),
        count_line("Swings rolled", format!("{}", outcome.swings)),
        count_line(
            "Landed",
            format!("{} ({:.0}%)", outcome.landed, outcome.landed_rate()),
        ),
        count_line(
            "Crits",
            format!("{} ({:.0}% of landed)", outcome.crits, outcome.crit_rate()),
        ),
        count_line("Total damage", format!("{:.0}", outcome.total_damage)),
        Line::from(vec![
            Span::styled(format!("{:20}", "Killed on swing"), Style::default().fg(Color::Gray)),
            kill_span,
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Volley Outcome "));

    f.render_widget(paragraph, area);
}

fn draw_damage_bar(f: &mut Frame, report: &AnalysisReport, outcome: &VolleyOutcome, area: Rect) {
    let enemy_hp = report.loadout.enemy_hp;
    let color = if outcome.swings_to_kill.is_some() {
        Color::LightGreen
    } else {
        Color::LightRed
    };

    let bar = progress_bar(outcome.total_damage, enemy_hp, area.width.saturating_sub(2), color)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Damage dealt vs {:.0} HP ", enemy_hp)),
        );

    f.render_widget(bar, area);
}

fn draw_comparison(f: &mut Frame, report: &AnalysisReport, outcome: &VolleyOutcome, area: Rect) {
    let d = &report.breakdown.details;
    // Expected damage per landed swing, with the block roll factored back out
    let expected_per_landed = report.breakdown.expected / d.hit_rate;

    let lines = vec![
        Line::from(""),
        versus_line("Hit rate", format!("{:.1}%", outcome.landed_rate()), format!("{:.1}%", d.hit_rate * 100.0)),
        versus_line("Crit rate", format!("{:.1}%", outcome.crit_rate()), format!("{:.1}%", d.crit_rate * 100.0)),
        versus_line(
            "Damage per landed",
            format!("{:.0}", outcome.avg_damage()),
            format!("{:.0}", expected_per_landed),
        ),
        Line::from(""),
        Line::from(Span::styled(
            "  Short volleys swing hard; expected values settle in over many swings.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Rolled vs Expected "));

    f.render_widget(paragraph, area);
}

fn count_line(name: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:20}", name), Style::default().fg(Color::Gray)),
        Span::styled(value, Style::default().fg(Color::White)),
    ])
}

fn versus_line(name: &str, rolled: String, expected: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:20}", name), Style::default().fg(Color::Gray)),
        Span::styled(format!("{:>10}", rolled), Style::default().fg(Color::White)),
        Span::styled("  vs  ", Style::default().fg(Color::DarkGray)),
        Span::styled(format!("{} expected", expected), Style::default().fg(Color::Gray)),
    ])
}
