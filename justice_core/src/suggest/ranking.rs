//! Marginal-gain ranking over the fixed investment candidates
//!
//! Each candidate stat gets the same flat bump, the matchup is re-evaluated,
//! and candidates are sorted by how much the expected damage moved:
//! - offensive probes bump the attacker and want expected damage UP
//! - defensive probes bump the defender and want expected damage DOWN
//!
//! Gains are fractions of the unprobed baseline, so a gain of 0.007 reads as
//! "+0.7% expected damage per 100 points".

use super::INVESTMENT_STEP;
use crate::attributes::{AttackerStats, DefenderStats, DefensiveStat, OffensiveStat};
use crate::damage::calculate_damage;
use serde::{Deserialize, Serialize};

/// One ranked offensive investment option
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OffensiveSuggestion {
    /// Which stat the probe bumped
    pub stat: OffensiveStat,
    /// Fractional change in expected damage (0.007 = +0.7%)
    pub gain: f64,
}

impl OffensiveSuggestion {
    pub fn label(&self) -> &'static str {
        self.stat.label()
    }

    /// Gain as a percentage for display
    pub fn gain_percent(&self) -> f64 {
        self.gain * 100.0
    }
}

/// One ranked defensive investment option
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DefensiveSuggestion {
    /// Which stat the probe bumped
    pub stat: DefensiveStat,
    /// Fractional reduction in expected damage taken (0.007 = -0.7%)
    pub gain: f64,
}

impl DefensiveSuggestion {
    pub fn label(&self) -> &'static str {
        self.stat.label()
    }

    /// Gain as a percentage for display
    pub fn gain_percent(&self) -> f64 {
        self.gain * 100.0
    }
}

/// Rank attacker stats by expected-damage gain per INVESTMENT_STEP points
///
/// Returns an empty list when the baseline is zero or not finite, since
/// relative gain is meaningless without a positive baseline.
pub fn rank_offensive(
    attacker: &AttackerStats,
    defender: &DefenderStats,
    skill_percent: f64,
) -> Vec<OffensiveSuggestion> {
    let baseline = calculate_damage(attacker, defender, skill_percent).expected;
    if !baseline.is_finite() || baseline <= 0.0 {
        return Vec::new();
    }

    let mut out: Vec<OffensiveSuggestion> = OffensiveStat::all()
        .iter()
        .map(|stat| {
            let probed = stat.invest(attacker, INVESTMENT_STEP);
            let expected = calculate_damage(&probed, defender, skill_percent).expected;
            OffensiveSuggestion {
                stat: *stat,
                gain: (expected - baseline) / baseline,
            }
        })
        .collect();

    // Stable sort keeps candidate order on exact ties
    out.sort_by(|a, b| b.gain.total_cmp(&a.gain));
    out
}

/// Rank defender stats by expected-damage reduction per INVESTMENT_STEP points
pub fn rank_defensive(
    attacker: &AttackerStats,
    defender: &DefenderStats,
    skill_percent: f64,
) -> Vec<DefensiveSuggestion> {
    let baseline = calculate_damage(attacker, defender, skill_percent).expected;
    if !baseline.is_finite() || baseline <= 0.0 {
        return Vec::new();
    }

    let mut out: Vec<DefensiveSuggestion> = DefensiveStat::all()
        .iter()
        .map(|stat| {
            let probed = stat.invest(defender, INVESTMENT_STEP);
            let expected = calculate_damage(attacker, &probed, skill_percent).expected;
            DefensiveSuggestion {
                stat: *stat,
                gain: (baseline - expected) / baseline,
            }
        })
        .collect();

    // Stable sort keeps candidate order on exact ties
    out.sort_by(|a, b| b.gain.total_cmp(&a.gain));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_attacker() -> AttackerStats {
        AttackerStats {
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
        }
    }

    fn reference_defender() -> DefenderStats {
        DefenderStats {
            defense: 9800.0,
            shield: 2000.0,
            element_res: 2500.0,
            resist: 4500.0,
            block: 2000.0,
            crit_resist: 2700.0,
            perma_reduction: 0.25,
            skill_resist: 200.0,
            crit_def: 0.1,
        }
    }

    #[test]
    fn test_offensive_ranking_order() {
        let ranked = rank_offensive(&reference_attacker(), &reference_defender(), 1.0);

        let order: Vec<OffensiveStat> = ranked.iter().map(|s| s.stat).collect();
        assert_eq!(
            order,
            vec![
                OffensiveStat::BreakDef,
                OffensiveStat::Attack,
                OffensiveStat::Kezhi,
                OffensiveStat::Crit,
                OffensiveStat::ElementAttack,
                OffensiveStat::Hit,
            ]
        );
    }

    #[test]
    fn test_offensive_tie_keeps_candidate_order() {
        // Attack and Kezhi both add 100 straight into the attack term, so
        // their probes are numerically identical. Attack is declared first
        // and must stay first.
        let ranked = rank_offensive(&reference_attacker(), &reference_defender(), 1.0);

        assert_eq!(ranked[1].stat, OffensiveStat::Attack);
        assert_eq!(ranked[2].stat, OffensiveStat::Kezhi);
        assert!((ranked[1].gain - ranked[2].gain).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hit_gain_is_zero_when_rate_capped() {
        // 2300 hit vs 2000 block is already past the 100% cap; 100 more hit
        // buys nothing.
        let ranked = rank_offensive(&reference_attacker(), &reference_defender(), 1.0);

        let hit = ranked.last().unwrap();
        assert_eq!(hit.stat, OffensiveStat::Hit);
        assert!((hit.gain - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_defensive_ranking_order() {
        let ranked = rank_defensive(&reference_attacker(), &reference_defender(), 1.0);

        let order: Vec<DefensiveStat> = ranked.iter().map(|s| s.stat).collect();
        assert_eq!(
            order,
            vec![
                DefensiveStat::ElementRes,
                DefensiveStat::CritResist,
                DefensiveStat::Defense,
                DefensiveStat::Shield,
                DefensiveStat::Resist,
                DefensiveStat::Block,
            ]
        );
    }

    #[test]
    fn test_defensive_tie_keeps_candidate_order() {
        // Shield and Resist both take 100 straight off the attack term
        let ranked = rank_defensive(&reference_attacker(), &reference_defender(), 1.0);

        assert_eq!(ranked[3].stat, DefensiveStat::Shield);
        assert_eq!(ranked[4].stat, DefensiveStat::Resist);
        assert!((ranked[3].gain - ranked[4].gain).abs() < f64::EPSILON);
    }

    #[test]
    fn test_defensive_gains_are_positive_reductions() {
        let ranked = rank_defensive(&reference_attacker(), &reference_defender(), 1.0);

        for suggestion in &ranked {
            assert!(
                suggestion.gain > 0.0,
                "{} should reduce expected damage",
                suggestion.label()
            );
        }
    }

    #[test]
    fn test_ranking_is_idempotent() {
        let attacker = reference_attacker();
        let defender = reference_defender();

        let first = rank_offensive(&attacker, &defender, 1.0);
        let second = rank_offensive(&attacker, &defender, 1.0);
        assert_eq!(first, second);

        let first = rank_defensive(&attacker, &defender, 1.0);
        let second = rank_defensive(&attacker, &defender, 1.0);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_when_baseline_is_zero() {
        // Reduction past the counter floor kills the multiplier and with it
        // every relative gain
        let defender = DefenderStats {
            perma_reduction: 1.5,
            ..reference_defender()
        };

        assert!(rank_offensive(&reference_attacker(), &defender, 1.0).is_empty());
        assert!(rank_defensive(&reference_attacker(), &defender, 1.0).is_empty());
    }

    #[test]
    fn test_gain_percent_scales_for_display() {
        let suggestion = OffensiveSuggestion {
            stat: OffensiveStat::Attack,
            gain: 0.0123,
        };
        assert!((suggestion.gain_percent() - 1.23).abs() < 1e-12);
    }
}
