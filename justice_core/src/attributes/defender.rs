//! Defender attribute sheet and defensive investment candidates

use serde::{Deserialize, Serialize};

/// Defensive attributes for the other side of a matchup
///
/// The enemy hit-point pool is deliberately not part of this sheet: it never
/// enters the damage formula and is carried by the caller for the
/// hits-to-kill readout only.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DefenderStats {
    /// Defense rating, opposed by the attacker's break_def
    pub defense: f64,
    /// Shield pool, eaten by the attacker's break_shield in tiers
    pub shield: f64,
    /// Elemental resistance rating, opposed by the attacker's ignore_res
    pub element_res: f64,
    /// Resist rating, subtracts from the attack term
    pub resist: f64,
    /// Block rating, opposed by the attacker's hit
    pub block: f64,
    /// Crit resist rating, opposed by the attacker's crit
    pub crit_resist: f64,
    /// Always-on damage reduction as a fraction (0.25 = -25%)
    pub perma_reduction: f64,
    /// Flat skill resist subtracted from the attack term
    pub skill_resist: f64,
    /// Crit damage defense as a fraction, offsets crit_dmg_bonus
    pub crit_def: f64,
}

/// The fixed set of defensive stats worth probing for investment advice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DefensiveStat {
    Defense,
    Shield,
    ElementRes,
    Resist,
    Block,
    CritResist,
}

impl DefensiveStat {
    pub fn all() -> &'static [DefensiveStat] {
        &[
            DefensiveStat::Defense,
            DefensiveStat::Shield,
            DefensiveStat::ElementRes,
            DefensiveStat::Resist,
            DefensiveStat::Block,
            DefensiveStat::CritResist,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            DefensiveStat::Defense => "Defense",
            DefensiveStat::Shield => "Shield",
            DefensiveStat::ElementRes => "Element Resist",
            DefensiveStat::Resist => "Resist",
            DefensiveStat::Block => "Block",
            DefensiveStat::CritResist => "Crit Resist",
        }
    }

    /// Return a copy of `stats` with `amount` added to this one stat
    pub fn invest(&self, stats: &DefenderStats, amount: f64) -> DefenderStats {
        let mut bumped = *stats;
        match self {
            DefensiveStat::Defense => bumped.defense += amount,
            DefensiveStat::Shield => bumped.shield += amount,
            DefensiveStat::ElementRes => bumped.element_res += amount,
            DefensiveStat::Resist => bumped.resist += amount,
            DefensiveStat::Block => bumped.block += amount,
            DefensiveStat::CritResist => bumped.crit_resist += amount,
        }
        bumped
    }
}
