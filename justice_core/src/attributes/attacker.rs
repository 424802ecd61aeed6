//! Attacker attribute sheet and offensive investment candidates

use serde::{Deserialize, Serialize};

/// Offensive attributes for one side of a matchup
///
/// All values are plain ratings or fractions as they appear on the character
/// screen. Nothing is validated here; the formula stages clamp where the game
/// does.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AttackerStats {
    /// Attack rating
    pub attack: f64,
    /// Defense-breaking rating, subtracts from the defender's defense
    pub break_def: f64,
    /// Shield-breaking rating, eats the defender's shield in tiers
    pub break_shield: f64,
    /// Elemental attack rating
    pub element_attack: f64,
    /// Counter rating, adds directly into the attack term
    pub kezhi: f64,
    /// Flat skill enhancement added to the attack term
    pub skill_enhance: f64,
    /// Hit rating, opposed by the defender's block
    pub hit: f64,
    /// Crit rating, opposed by the defender's crit resist
    pub crit: f64,
    /// Bonus crit damage as a fraction (0.713 = +71.3%)
    pub crit_dmg_bonus: f64,
    /// Flat crit rate added after the curve (0.05 = +5%)
    pub extra_crit_rate: f64,
    /// Counter strength as a fraction, offsets the defender's flat reduction
    pub kezhi_pct: f64,
    /// Elemental resistance ignored, subtracts from the defender's element_res
    pub ignore_res: f64,
}

/// The fixed set of offensive stats worth probing for investment advice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OffensiveStat {
    Attack,
    BreakDef,
    ElementAttack,
    Hit,
    Crit,
    Kezhi,
}

impl OffensiveStat {
    pub fn all() -> &'static [OffensiveStat] {
        &[
            OffensiveStat::Attack,
            OffensiveStat::BreakDef,
            OffensiveStat::ElementAttack,
            OffensiveStat::Hit,
            OffensiveStat::Crit,
            OffensiveStat::Kezhi,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            OffensiveStat::Attack => "Attack",
            OffensiveStat::BreakDef => "Defense Break",
            OffensiveStat::ElementAttack => "Element Attack",
            OffensiveStat::Hit => "Hit",
            OffensiveStat::Crit => "Crit",
            OffensiveStat::Kezhi => "Counter",
        }
    }

    /// Return a copy of `stats` with `amount` added to this one stat
    pub fn invest(&self, stats: &AttackerStats, amount: f64) -> AttackerStats {
        let mut bumped = *stats;
        match self {
            OffensiveStat::Attack => bumped.attack += amount,
            OffensiveStat::BreakDef => bumped.break_def += amount,
            OffensiveStat::ElementAttack => bumped.element_attack += amount,
            OffensiveStat::Hit => bumped.hit += amount,
            OffensiveStat::Crit => bumped.crit += amount,
            OffensiveStat::Kezhi => bumped.kezhi += amount,
        }
        bumped
    }
}
