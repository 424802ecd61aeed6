//! Example Duel - a command-line walkthrough of the justice damage model
//!
//! This demo shows:
//! - Evaluating one matchup through the full damage pipeline
//! - Ranking +100 investment options for both sides
//! - Rolling seeded volleys to see how real exchanges scatter
//! - Re-evaluating after taking the top suggestion

use justice_core::{
    calculate_damage, rank_defensive, rank_offensive, AttackerStats, DefenderStats, Loadout,
    VolleyOutcome, INVESTMENT_STEP,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const VOLLEY_SWINGS: u32 = 30;

fn banner(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("  {}", title);
    println!("{}", "=".repeat(60));
}

fn print_attacker(stats: &AttackerStats) {
    println!("  Attacker");
    println!("    Attack: {:.0}   Element Attack: {:.0}", stats.attack, stats.element_attack);
    println!("    Defense Break: {:.0}   Shield Break: {:.0}", stats.break_def, stats.break_shield);
    println!("    Counter: {:.0} ({:.1}%)", stats.kezhi, stats.kezhi_pct * 100.0);
    println!("    Hit: {:.0}   Crit: {:.0} (+{:.1}% dmg)", stats.hit, stats.crit, stats.crit_dmg_bonus * 100.0);
    println!("    Ignore Resist: {:.0}", stats.ignore_res);
}

fn print_defender(stats: &DefenderStats) {
    println!("  Defender");
    println!("    Defense: {:.0}   Shield: {:.0}", stats.defense, stats.shield);
    println!("    Element Resist: {:.0}   Resist: {:.0}", stats.element_res, stats.resist);
    println!("    Block: {:.0}   Crit Resist: {:.0}", stats.block, stats.crit_resist);
    println!("    Reduction: {:.1}%   Crit Defense: {:.1}%", stats.perma_reduction * 100.0, stats.crit_def * 100.0);
}

fn main() {
    banner("EXAMPLE DUEL");

    let loadout = Loadout::sample();
    print_attacker(&loadout.attacker);
    print_defender(&loadout.defender);
    println!("  Skill: {:.0}%   Enemy HP: {:.0}", loadout.skill_percent * 100.0, loadout.enemy_hp);

    banner("DAMAGE PIPELINE");

    let breakdown = loadout.evaluate();
    let d = &breakdown.details;

    println!("  Defense after break: {:.0} ({:.1}% reduction)", d.rem_def, d.def_reduction * 100.0);
    println!("  Shield remaining: {:.0} ({})", d.rem_shield, d.shield_tier.label());
    println!("  Resist after ignore: {:.0} ({:.1}% reduction)", d.rem_res, d.res_reduction * 100.0);
    println!("  Attack term: {:.0}", d.atk_part);
    println!();
    println!("  {}", breakdown.summary());
    match breakdown.hits_to_kill(loadout.enemy_hp) {
        Some(n) => println!("  Kills in {} swings on average", n),
        None => println!("  This matchup deals no damage"),
    }

    banner("OFFENSIVE ADVICE");

    let offensive = rank_offensive(&loadout.attacker, &loadout.defender, loadout.skill_percent);
    println!("  Expected damage gained per +{:.0} points:", INVESTMENT_STEP);
    for (i, s) in offensive.iter().enumerate() {
        println!("    {}. {:18} {:+.4}%", i + 1, s.label(), s.gain_percent());
    }

    banner("DEFENSIVE ADVICE");

    let defensive = rank_defensive(&loadout.attacker, &loadout.defender, loadout.skill_percent);
    println!("  Expected damage avoided per +{:.0} points:", INVESTMENT_STEP);
    for (i, s) in defensive.iter().enumerate() {
        println!("    {}. {:18} {:+.4}%", i + 1, s.label(), s.gain_percent());
    }

    banner("THREE VOLLEYS");

    let mut rng = ChaCha8Rng::seed_from_u64(42);
    for round in 1..=3 {
        let outcome = VolleyOutcome::run(&breakdown, loadout.enemy_hp, VOLLEY_SWINGS, &mut rng);
        let kill = match outcome.swings_to_kill {
            Some(n) => format!("killed on swing {}", n),
            None => "target survived".to_string(),
        };
        println!(
            "  Volley {}: {} swings, {} landed, {} crits, {:.0} damage, {}",
            round, outcome.swings, outcome.landed, outcome.crits, outcome.total_damage, kill
        );
    }

    banner("AFTER THE TOP INVESTMENT");

    if let Some(top) = offensive.first() {
        let bumped = top.stat.invest(&loadout.attacker, INVESTMENT_STEP);
        let after = calculate_damage(&bumped, &loadout.defender, loadout.skill_percent);
        println!("  {} +{:.0}:", top.label(), INVESTMENT_STEP);
        println!("    Expected per swing: {:.1} -> {:.1}", breakdown.expected, after.expected);
        println!("    Advertised gain: {:+.4}%", top.gain_percent());
    }

    println!();
}
