//! Hit rate, crit rate, and crit damage - opposed-rating curves
//!
//! Hit and crit both pit an attacker rating against a defender rating and
//! push the difference through a saturating curve, then clamp to [0.05, 1.0]:
//! a fight is never a guaranteed miss and never guaranteed to crit below
//! the cap.
//!
//! Examples:
//! - 2300 hit vs 2000 block: raw 1.0186, clamped to 1.0
//! - equal hit and block: exactly 0.95
//! - 4500 crit vs 2700 crit resist: curve 61.46, so 61.5% before extras

use super::constants::{
    CRIT_CONST, CRIT_OFFSET, CRIT_SCALE, HIT_BASE, HIT_CONST, HIT_DENOM_EPSILON, HIT_SCALE,
    RATE_CEIL, RATE_FLOOR,
};

/// Chance for a swing to land, from hit vs block
pub fn hit_rate(hit: f64, block: f64) -> f64 {
    let diff = hit - block;
    let mut denom = diff + HIT_CONST;
    // A hit difference of exactly -5950 zeroes the denominator; substitute a
    // tiny value and let the clamp absorb the blown-up result
    if denom == 0.0 {
        denom = HIT_DENOM_EPSILON;
    }
    (HIT_BASE + HIT_SCALE * diff / denom).clamp(RATE_FLOOR, RATE_CEIL)
}

/// Chance for a landed swing to crit, from crit vs crit resist plus any flat
/// bonus crit rate
pub fn crit_rate(crit: f64, crit_resist: f64, extra_crit_rate: f64) -> f64 {
    let rem = crit - crit_resist;
    // The branch must short-circuit before the division: at exactly -1548 the
    // denominator is zero
    let curve = if rem <= -CRIT_CONST {
        0.0
    } else {
        (CRIT_SCALE * rem - CRIT_OFFSET) / (rem + CRIT_CONST)
    };
    (curve / 100.0 + extra_crit_rate).clamp(RATE_FLOOR, RATE_CEIL)
}

/// Damage multiplier applied on a crit, floored at 1.0 so a crit never deals
/// less than a normal hit
pub fn crit_damage_factor(crit_dmg_bonus: f64, crit_def: f64) -> f64 {
    ((1.0 + crit_dmg_bonus) - crit_def).max(1.0)
}
