//! DamageBreakdown - outcome of one damage evaluation

use crate::formula::ShieldTier;
use serde::{Deserialize, Serialize};

/// Result of evaluating one attacker/defender matchup
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DamageBreakdown {
    /// Damage of a landed, non-critical swing
    pub non_crit: f64,
    /// Damage of a landed, critical swing
    pub crit: f64,
    /// Probability-weighted damage per swing over hit and crit outcomes
    pub expected: f64,
    /// Every intermediate stage, for auditing the formula
    pub details: DamageDetails,
}

impl DamageBreakdown {
    /// Swings needed to deplete the given hit-point pool, by expectation
    ///
    /// `None` when expected damage is not positive (the matchup cannot kill).
    pub fn hits_to_kill(&self, enemy_hp: f64) -> Option<u64> {
        if self.expected > 0.0 {
            Some((enemy_hp / self.expected).ceil() as u64)
        } else {
            None
        }
    }

    /// Extra damage a crit adds over a normal hit
    pub fn crit_bonus(&self) -> f64 {
        self.crit - self.non_crit
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        format!(
            "{:.0} per hit ({:.0} on crit), {:.0} expected at {:.1}% hit / {:.1}% crit",
            self.non_crit,
            self.crit,
            self.expected,
            self.details.hit_rate * 100.0,
            self.details.crit_rate * 100.0,
        )
    }
}

/// Intermediate quantities of the damage pipeline, stage by stage
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DamageDetails {
    /// Defense left after break_def
    pub rem_def: f64,
    /// Shield left after the tiered break_shield absorption
    pub rem_shield: f64,
    /// Elemental resistance left after ignore_res
    pub rem_res: f64,
    /// Which shield regime applied
    pub shield_tier: ShieldTier,
    /// Net attack term feeding the physical base damage
    pub atk_part: f64,
    /// Physical damage reduction fraction from the defense curve
    pub def_reduction: f64,
    /// Elemental damage reduction fraction from the resist curve
    pub res_reduction: f64,
    /// Chance for a swing to land, clamped to [0.05, 1.0]
    pub hit_rate: f64,
    /// Chance for a landed swing to crit, clamped to [0.05, 1.0]
    pub crit_rate: f64,
    /// Damage multiplier on a crit, floored at 1.0
    pub crit_damage_factor: f64,
}
