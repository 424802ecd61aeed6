//! Damage report tab - per-swing numbers and pipeline readouts

use crate::app::App;
use crate::ui::stat_line;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Percentage(50),
        ])
        .split(area);

    draw_report(f, app, chunks[0]);
    draw_formulas(f, app, chunks[1]);
}

fn draw_report(f: &mut Frame, app: &App, area: Rect) {
    let lines = match &app.report {
        Some(report) => {
            let b = &report.breakdown;
            let d = &b.details;
            let mut lines: Vec<Line> = vec![];

            lines.push(section_header("Per-Swing Damage"));
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled(format!("{:20}", "Non-crit hit"), Style::default().fg(Color::Gray)),
                Span::styled(format!("{:.1}", b.non_crit), Style::default().fg(Color::White)),
            ]));
            lines.push(Line::from(vec![
                Span::styled(format!("{:20}", "Critical hit"), Style::default().fg(Color::Gray)),
                Span::styled(format!("{:.1}", b.crit), Style::default().fg(Color::LightRed)),
            ]));
            lines.push(Line::from(vec![
                Span::styled(format!("{:20}", "Expected per swing"), Style::default().fg(Color::Gray)),
                Span::styled(
                    format!("{:.1}", b.expected),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ),
            ]));

            let enemy_hp = report.loadout.enemy_hp;
            let kill_span = match b.hits_to_kill(enemy_hp) {
                Some(n) => Span::styled(
                    format!("{} (at {:.0} HP)", n, enemy_hp),
                    Style::default().fg(Color::White),
                ),
                None => Span::styled("never (no damage)", Style::default().fg(Color::DarkGray)),
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{:20}", "Swings to kill"), Style::default().fg(Color::Gray)),
                kill_span,
            ]));
            lines.push(Line::from(""));

            lines.push(section_header("Chance Readouts"));
            lines.push(Line::from(""));
            lines.push(percent_line("Hit rate", d.hit_rate));
            lines.push(percent_line("Crit rate", d.crit_rate));
            lines.push(Line::from(vec![
                Span::styled(format!("{:20}", "Crit damage"), Style::default().fg(Color::Gray)),
                Span::styled(
                    format!("×{:.3}", d.crit_damage_factor),
                    Style::default().fg(Color::White),
                ),
            ]));
            lines.push(Line::from(""));

            lines.push(section_header("Pipeline Details"));
            lines.push(Line::from(""));
            lines.push(stat_line("Defense after break", d.rem_def));
            lines.push(percent_line("Defense reduction", d.def_reduction));
            lines.push(Line::from(vec![
                Span::styled(format!("{:20}", "Shield remaining"), Style::default().fg(Color::Gray)),
                Span::styled(format!("{:.1}", d.rem_shield), Style::default().fg(Color::White)),
                Span::styled(
                    format!(" ({})", d.shield_tier.label()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
            lines.push(stat_line("Resist after ignore", d.rem_res));
            lines.push(percent_line("Resist reduction", d.res_reduction));
            lines.push(stat_line("Attack term", d.atk_part));

            lines
        }
        None => vec![
            Line::from(""),
            Line::from(Span::styled(
                "No analysis yet.",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                "Fill in the Input tab and press 'c' or Enter.",
                Style::default().fg(Color::DarkGray),
            )),
        ],
    };

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Damage Report "),
        )
        .scroll((app.report_scroll as u16, 0));

    f.render_widget(paragraph, area);
}

fn draw_formulas(f: &mut Frame, app: &App, area: Rect) {
    let c = &app.constants;

    let lines = vec![
        section_header("Damage Formula"),
        Line::from(""),
        Line::from(Span::styled(
            "Damage = (Physical + Elemental) × Skill%",
            Style::default().fg(Color::Yellow),
        )),
        Line::from(Span::styled(
            format!(
                "  Physical  = max(0, {:.0} + {:.0} × AtkTerm) × (1 − DefRed)",
                c.damage.base_coeff, c.damage.scaling_coeff
            ),
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            format!(
                "  Elemental = {:.0} × ElemAtk × (1 − ResRed)",
                c.damage.scaling_coeff
            ),
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "  AtkTerm = Atk − Shield + Counter + SkillEnh − Resist − SkillRes",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        section_header("Mitigation Curves"),
        Line::from(""),
        Line::from(Span::styled("Defense:", Style::default().fg(Color::Yellow))),
        Line::from(Span::styled(
            format!("  DefRed = Def / (Def + {:.0})", c.mitigation.defense_constant),
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled("Resist:", Style::default().fg(Color::Yellow))),
        Line::from(Span::styled(
            format!("  ResRed = Res / (Res + {:.0})", c.mitigation.resist_constant),
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "  Def is after break, Res after ignore, both floored at 0",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        section_header("Hit & Crit"),
        Line::from(""),
        Line::from(Span::styled("Hit rate:", Style::default().fg(Color::Yellow))),
        Line::from(Span::styled(
            format!(
                "  Rate = {:.2} + {:.2} × Diff / (Diff + {:.0})",
                c.hit.base_rate, c.hit.scale, c.hit.constant
            ),
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "  Diff = Hit − Block",
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled("Crit rate:", Style::default().fg(Color::Yellow))),
        Line::from(Span::styled(
            format!(
                "  Curve = ({:.0} × Rem − {:.0}) / (Rem + {:.0})",
                c.crit.scale, c.crit.offset, c.crit.constant
            ),
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "  Rem = Crit − Crit Resist, curve is in percent",
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            format!(
                "  Both rates clamp to [{:.0}%, {:.0}%]",
                c.clamp.floor * 100.0,
                c.clamp.ceil * 100.0
            ),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        section_header("Shield Tiers"),
        Line::from(""),
        Line::from(Span::styled(
            "  Break ≥ Shield     → nothing remains",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "  Break ≥ Shield / 3 → half the difference remains",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "  Weaker break       → each point removes two shield",
            Style::default().fg(Color::White),
        )),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Formula Reference "),
    );

    f.render_widget(paragraph, area);
}

fn percent_line(name: &str, rate: f64) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:20}", name), Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{:.2}%", rate * 100.0),
            Style::default().fg(Color::White),
        ),
    ])
}

fn section_header(name: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("═══ {} ═══", name),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}
