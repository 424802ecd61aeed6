//! Damage calculation - turning two attribute sheets into a DamageBreakdown

use super::{DamageBreakdown, DamageDetails};
use crate::attributes::{AttackerStats, DefenderStats};
use crate::formula::constants::{BASE_COEFF, SCALING_COEFF};
use crate::formula::{
    crit_damage_factor, crit_rate, defense_reduction, hit_rate, remaining_defense,
    remaining_resist, remaining_shield, resist_reduction, shield_tier,
};

/// Calculate damage for one attacker/defender matchup
///
/// `skill_percent` is the skill damage multiplier as a fraction (1.0 = 100%).
/// The evaluation is deterministic; the random hit/crit rolls live in the
/// volley simulation, not here.
pub fn calculate_damage(
    attacker: &AttackerStats,
    defender: &DefenderStats,
    skill_percent: f64,
) -> DamageBreakdown {
    // Step 1: Defense curve
    let rem_def = remaining_defense(defender.defense, attacker.break_def);
    let def_red = defense_reduction(defender.defense, attacker.break_def);

    // Step 2: Elemental resistance curve
    let rem_res = remaining_resist(defender.element_res, attacker.ignore_res);
    let res_red = resist_reduction(defender.element_res, attacker.ignore_res);

    // Step 3: Tiered shield absorption
    let tier = shield_tier(defender.shield, attacker.break_shield);
    let rem_shield = remaining_shield(defender.shield, attacker.break_shield);

    // Step 4: Net attack term, shield and resists taken off the top
    let atk_part = (attacker.attack - rem_shield) + (attacker.kezhi + attacker.skill_enhance)
        - (defender.resist + defender.skill_resist);

    // Step 5: Physical damage through the defense curve
    let phy_base = (BASE_COEFF + SCALING_COEFF * atk_part).max(0.0);
    let phy_final = phy_base * (1.0 - def_red);

    // Step 6: Elemental damage through the resist curve
    let ele_final = SCALING_COEFF * attacker.element_attack * (1.0 - res_red);

    // Step 7: Skill scaling
    let base_damage = (phy_final + ele_final) * skill_percent;

    // Step 8: Flat multiplier, counter strength against permanent reduction
    let multiplier = (1.0 + attacker.kezhi_pct - defender.perma_reduction).max(0.0);
    let non_crit = base_damage * multiplier;

    // Step 9: Hit and crit odds, then the three per-swing readouts
    let hit = hit_rate(attacker.hit, defender.block);
    let crit_chance = crit_rate(attacker.crit, defender.crit_resist, attacker.extra_crit_rate);
    let crit_factor = crit_damage_factor(attacker.crit_dmg_bonus, defender.crit_def);

    let crit = non_crit * crit_factor;
    let expected = non_crit * (1.0 + crit_chance * (crit_factor - 1.0)) * hit;

    DamageBreakdown {
        non_crit,
        crit,
        expected,
        details: DamageDetails {
            rem_def,
            rem_shield,
            rem_res,
            shield_tier: tier,
            atk_part,
            def_reduction: def_red,
            res_reduction: res_red,
            hit_rate: hit,
            crit_rate: crit_chance,
            crit_damage_factor: crit_factor,
        },
    }
}
