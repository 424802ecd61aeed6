//! Loadout - a complete matchup ready to evaluate

use super::{fields, ConfigError, SavedFields};
use crate::attributes::{AttackerStats, DefenderStats};
use crate::damage::{calculate_damage, DamageBreakdown};
use serde::{Deserialize, Serialize};

/// Both attribute sheets plus the two scalars that ride alongside them
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Loadout {
    pub attacker: AttackerStats,
    pub defender: DefenderStats,
    /// Skill damage multiplier as a fraction (1.0 = 100%)
    pub skill_percent: f64,
    /// Enemy hit points, only used for the hits-to-kill readout
    pub enemy_hp: f64,
}

impl Loadout {
    /// Build a loadout from saved field values
    ///
    /// Missing fields fall back to their registry defaults; an unparseable
    /// value fails the whole build so a half-formed matchup never computes.
    /// The skill field is entered as a percentage and divided down here.
    pub fn from_fields(saved: &SavedFields) -> Result<Loadout, ConfigError> {
        Ok(Loadout {
            attacker: AttackerStats {
                attack: fields::ATTACK.parse_from(saved)?,
                break_def: fields::BREAK_DEF.parse_from(saved)?,
                break_shield: fields::BREAK_SHIELD.parse_from(saved)?,
                element_attack: fields::ELEMENT_ATTACK.parse_from(saved)?,
                kezhi: fields::KEZHI.parse_from(saved)?,
                skill_enhance: fields::SKILL_ENHANCE.parse_from(saved)?,
                hit: fields::HIT.parse_from(saved)?,
                crit: fields::CRIT.parse_from(saved)?,
                crit_dmg_bonus: fields::CRIT_DMG_BONUS.parse_from(saved)?,
                extra_crit_rate: fields::EXTRA_CRIT_RATE.parse_from(saved)?,
                kezhi_pct: fields::KEZHI_PCT.parse_from(saved)?,
                ignore_res: fields::IGNORE_RES.parse_from(saved)?,
            },
            defender: DefenderStats {
                defense: fields::DEFENSE.parse_from(saved)?,
                shield: fields::SHIELD.parse_from(saved)?,
                element_res: fields::ELEMENT_RES.parse_from(saved)?,
                resist: fields::RESIST.parse_from(saved)?,
                block: fields::BLOCK.parse_from(saved)?,
                crit_resist: fields::CRIT_RESIST.parse_from(saved)?,
                perma_reduction: fields::PERMA_REDUCTION.parse_from(saved)?,
                skill_resist: fields::SKILL_RESIST.parse_from(saved)?,
                crit_def: fields::CRIT_DEF.parse_from(saved)?,
            },
            skill_percent: fields::SKILL_PCT.parse_from(saved)? / 100.0,
            enemy_hp: fields::ENEMY_HP.parse_from(saved)?,
        })
    }

    /// The stock matchup, the same numbers the field defaults carry
    pub fn sample() -> Loadout {
        Loadout {
            attacker: AttackerStats {
                attack: 11194.0,
                break_def: 9000.0,
                break_shield: 349.0,
                element_attack: 3600.0,
                kezhi: 4000.0,
                skill_enhance: 0.0,
                hit: 2300.0,
                crit: 4500.0,
                crit_dmg_bonus: 0.713,
                extra_crit_rate: 0.05,
                kezhi_pct: 0.161,
                ignore_res: 2000.0,
            },
            defender: DefenderStats {
                defense: 9800.0,
                shield: 2000.0,
                element_res: 2500.0,
                resist: 4500.0,
                block: 2000.0,
                crit_resist: 2700.0,
                perma_reduction: 0.25,
                skill_resist: 200.0,
                crit_def: 0.1,
            },
            skill_percent: 1.0,
            enemy_hp: 260000.0,
        }
    }

    /// Evaluate this matchup
    pub fn evaluate(&self) -> DamageBreakdown {
        calculate_damage(&self.attacker, &self.defender, self.skill_percent)
    }
}
