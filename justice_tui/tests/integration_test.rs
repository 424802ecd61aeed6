//! Integration test: Load defaults -> Evaluate -> Rank -> Persist -> Volley
//!
//! This test validates the full flow from field entry to the rolled volley.

use justice_core::{
    calculate_damage, rank_defensive, rank_offensive, DefensiveStat, Loadout, OffensiveStat,
    SavedFields, VolleyOutcome, INVESTMENT_STEP,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;
use std::fs;

/// Helper to print a separator
fn separator(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("  {}", title);
    println!("{}\n", "=".repeat(60));
}

#[test]
fn test_full_entry_to_volley_flow() {
    separator("INTEGRATION TEST: Defaults -> Evaluate -> Rank -> Persist -> Volley");

    // =========================================================================
    // STEP 1: Build the reference loadout from an empty save
    // =========================================================================
    separator("STEP 1: Loading Defaults");

    let empty = SavedFields::new();
    let loadout = Loadout::from_fields(&empty).expect("defaults must parse");

    println!("  Attack: {:.0}", loadout.attacker.attack);
    println!("  Defense: {:.0}", loadout.defender.defense);
    println!("  Skill: {:.0}%", loadout.skill_percent * 100.0);
    println!("  Enemy HP: {:.0}", loadout.enemy_hp);

    assert_eq!(loadout, Loadout::sample());

    // =========================================================================
    // STEP 2: Run the damage pipeline
    // =========================================================================
    separator("STEP 2: Evaluating the Matchup");

    let breakdown = loadout.evaluate();
    let details = &breakdown.details;

    println!("  Non-crit: {:.1}", breakdown.non_crit);
    println!("  Crit: {:.1}", breakdown.crit);
    println!("  Expected: {:.1}", breakdown.expected);
    println!("  Hit rate: {:.1}%", details.hit_rate * 100.0);
    println!("  Crit rate: {:.1}%", details.crit_rate * 100.0);
    println!("  Shield: {:.0} remaining ({})", details.rem_shield, details.shield_tier.label());

    assert!((breakdown.non_crit - 12322.93).abs() < 0.05);
    assert!((breakdown.crit - 19876.88).abs() < 0.05);
    assert!((breakdown.expected - 17343.33).abs() < 0.05);
    assert!((details.hit_rate - 1.0).abs() < f64::EPSILON);
    assert!((details.crit_rate - 0.664606).abs() < 1e-4);

    let swings = breakdown
        .hits_to_kill(loadout.enemy_hp)
        .expect("reference matchup deals damage");
    println!("  Swings to kill: {}", swings);
    assert_eq!(swings, 15);

    // =========================================================================
    // STEP 3: Rank offensive investments
    // =========================================================================
    separator("STEP 3: Offensive Advice");

    let offensive = rank_offensive(&loadout.attacker, &loadout.defender, loadout.skill_percent);

    for (i, s) in offensive.iter().enumerate() {
        println!("  {}. {:18} {:+.4}%", i + 1, s.label(), s.gain_percent());
    }

    assert_eq!(offensive.len(), 6);
    assert_eq!(offensive[0].stat, OffensiveStat::BreakDef);
    // Hit is already capped at 100%, so more hit buys nothing
    let last = offensive.last().expect("six candidates");
    assert_eq!(last.stat, OffensiveStat::Hit);
    assert!((last.gain - 0.0).abs() < f64::EPSILON);

    // =========================================================================
    // STEP 4: Rank defensive investments
    // =========================================================================
    separator("STEP 4: Defensive Advice");

    let defensive = rank_defensive(&loadout.attacker, &loadout.defender, loadout.skill_percent);

    for (i, s) in defensive.iter().enumerate() {
        println!("  {}. {:18} {:+.4}%", i + 1, s.label(), s.gain_percent());
    }

    assert_eq!(defensive.len(), 6);
    assert_eq!(defensive[0].stat, DefensiveStat::ElementRes);
    assert_eq!(defensive[5].stat, DefensiveStat::Block);

    // =========================================================================
    // STEP 5: Verify the top suggestion against a manual probe
    // =========================================================================
    separator("STEP 5: Probing the Top Offensive Suggestion");

    let top = &offensive[0];
    let probed_attacker = top.stat.invest(&loadout.attacker, INVESTMENT_STEP);
    let probed = calculate_damage(&probed_attacker, &loadout.defender, loadout.skill_percent);
    let manual_gain = (probed.expected - breakdown.expected) / breakdown.expected;

    println!("  {} +{:.0}: {:.1} -> {:.1} expected", top.label(), INVESTMENT_STEP, breakdown.expected, probed.expected);
    println!("  Advertised gain: {:+.4}%", top.gain_percent());
    println!("  Manual probe:    {:+.4}%", manual_gain * 100.0);

    assert!((manual_gain - top.gain).abs() < 1e-12);

    // =========================================================================
    // STEP 6: Persist the fields and reload them
    // =========================================================================
    separator("STEP 6: Saving and Reloading Fields");

    let path = env::temp_dir().join("justice_integration_save.json");
    let _ = fs::remove_file(&path);

    let mut saved = SavedFields::new();
    saved.set("attack", "12000".to_string());
    saved.set("crit", "5000".to_string());
    saved.save(&path).expect("save must succeed");

    println!("  Saved {} overrides to {:?}", saved.len(), path);

    let reloaded = SavedFields::load(&path).expect("reload must succeed");
    assert_eq!(reloaded.get("attack"), Some("12000"));
    assert_eq!(reloaded.get("crit"), Some("5000"));

    let reopened = Loadout::from_fields(&reloaded).expect("reloaded fields must parse");
    println!("  Reloaded attack: {:.0}", reopened.attacker.attack);
    assert!((reopened.attacker.attack - 12000.0).abs() < f64::EPSILON);
    assert!((reopened.attacker.crit - 5000.0).abs() < f64::EPSILON);
    // Untouched fields fall back to their defaults
    assert!((reopened.defender.defense - loadout.defender.defense).abs() < f64::EPSILON);

    let _ = fs::remove_file(&path);

    // =========================================================================
    // STEP 7: Roll a seeded volley
    // =========================================================================
    separator("STEP 7: Rolling a Volley");

    let mut rng = StdRng::seed_from_u64(42);
    let outcome = VolleyOutcome::run(&breakdown, loadout.enemy_hp, 30, &mut rng);

    println!("  Swings: {}", outcome.swings);
    println!("  Landed: {} ({:.0}%)", outcome.landed, outcome.landed_rate());
    println!("  Crits: {} ({:.0}% of landed)", outcome.crits, outcome.crit_rate());
    println!("  Total damage: {:.0}", outcome.total_damage);

    // Hit rate is capped at 100%, so every swing lands and the pool
    // cannot outlast the 30-swing cap. All crits kills on 14, none on 22.
    assert_eq!(outcome.landed, outcome.swings);
    let kill = outcome.swings_to_kill.expect("volley must finish the pool");
    println!("  Killed on swing: {}", kill);
    assert!((14..=22).contains(&kill));

    // =========================================================================
    // SUMMARY
    // =========================================================================
    separator("TEST COMPLETE - SUMMARY");

    println!("  Flow:");
    println!("    1. Defaults parsed into the reference loadout");
    println!("    2. Pipeline produced the pinned damage numbers");
    println!("    3. Offense advice put Defense Break first, capped Hit last");
    println!("    4. Defense advice put Element Resist first, Block last");
    println!("    5. Top suggestion matched a manual +{:.0} probe", INVESTMENT_STEP);
    println!("    6. Fields survived a save/load round trip");
    println!("    7. Seeded volley killed on swing {}", kill);

    println!("\n  Test passed successfully!");
}
