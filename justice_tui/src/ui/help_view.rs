//! Help tab view

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, _app: &App, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "═══ Navigation ═══",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        key_line("1-5", "Jump to tab (Input/Report/Advice/Volley/Help)"),
        key_line("Tab / Shift+Tab", "Next/previous tab"),
        key_line("↑/k  ↓/j", "Select field / scroll"),
        key_line("q / Ctrl+C", "Quit"),
        key_line("?", "Open this help"),
        Line::from(Span::styled(
            "  On the Input tab digits type into fields; use Tab to change tabs there.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "═══ Input ═══",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        key_line("←/→  h/l", "Switch attacker/defender column"),
        key_line("0-9 . -", "Type into the selected field"),
        key_line("Backspace", "Delete the last character"),
        key_line("Enter / c", "Calculate, save fields, jump to the report"),
        key_line("r", "Reset every field to its default"),
        Line::from(""),
        Line::from(Span::styled(
            "═══ Analysis ═══",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        key_line("v", "Roll a fresh volley with the current numbers"),
        key_line("↑/↓", "Scroll the damage report"),
        Line::from(""),
        Line::from(Span::styled(
            "═══ Mechanics ═══",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Damage per swing:",
            Style::default().fg(Color::Yellow),
        )),
        Line::from("  (Physical + Elemental) × Skill% × (1 + Counter% − Reduction)"),
        Line::from("  Physical scales off attack minus the shield it must punch through"),
        Line::from(""),
        Line::from(Span::styled(
            "Mitigation:",
            Style::default().fg(Color::Yellow),
        )),
        Line::from("  Defense and resist follow diminishing-returns curves, never immunity"),
        Line::from("  Break and ignore subtract before the curve, floored at zero"),
        Line::from(""),
        Line::from(Span::styled(
            "Expected damage:",
            Style::default().fg(Color::Yellow),
        )),
        Line::from("  non-crit × (1 + crit rate × (crit factor − 1)) × hit rate"),
        Line::from("  This is the number the Advice tab optimizes"),
        Line::from(""),
        Line::from(Span::styled(
            "Investment advice:",
            Style::default().fg(Color::Yellow),
        )),
        Line::from("  Each candidate stat is probed +100 points, one at a time"),
        Line::from("  Gains are relative to the current expected damage"),
        Line::from(""),
        Line::from(Span::styled(
            "═══ Files ═══",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from("  justice_save.json       last-entered fields, written on every calculate"),
        Line::from("  justice_constants.toml  optional formula constant overrides"),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Help & Mechanics "));

    f.render_widget(paragraph, area);
}

fn key_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:20}", key),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(desc.to_string(), Style::default().fg(Color::White)),
    ])
}
