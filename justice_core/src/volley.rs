//! Volley simulation - roll a burst of swings with the matchup's odds
//!
//! The damage evaluation is deterministic; this is the one place the hit and
//! crit rates are actually rolled, to show how a short exchange can swing
//! around the expected value.

use crate::damage::DamageBreakdown;
use rand::Rng;

/// Outcome of one simulated volley
#[derive(Debug, Clone, Copy)]
pub struct VolleyOutcome {
    /// Swings thrown before the volley ended
    pub swings: u32,
    /// Swings that got past the block roll
    pub landed: u32,
    /// Landed swings that crit
    pub crits: u32,
    /// Total damage dealt
    pub total_damage: f64,
    /// Swing on which the enemy hp pool emptied, if it did
    pub swings_to_kill: Option<u32>,
}

impl VolleyOutcome {
    /// Swing up to `max_swings` times at a pool of `enemy_hp` hit points
    ///
    /// The volley stops early once the pool is empty.
    pub fn run(
        breakdown: &DamageBreakdown,
        enemy_hp: f64,
        max_swings: u32,
        rng: &mut impl Rng,
    ) -> Self {
        let mut outcome = VolleyOutcome {
            swings: 0,
            landed: 0,
            crits: 0,
            total_damage: 0.0,
            swings_to_kill: None,
        };

        let mut remaining = enemy_hp;

        while outcome.swings < max_swings && remaining > 0.0 {
            outcome.swings += 1;

            // Block roll first, then the crit roll only for landed swings
            if rng.gen::<f64>() >= breakdown.details.hit_rate {
                continue;
            }
            outcome.landed += 1;

            let damage = if rng.gen::<f64>() < breakdown.details.crit_rate {
                outcome.crits += 1;
                breakdown.crit
            } else {
                breakdown.non_crit
            };

            outcome.total_damage += damage;
            remaining -= damage;

            if remaining <= 0.0 {
                outcome.swings_to_kill = Some(outcome.swings);
            }
        }

        outcome
    }

    /// Share of swings that landed, as a percentage
    pub fn landed_rate(&self) -> f64 {
        if self.swings > 0 {
            self.landed as f64 / self.swings as f64 * 100.0
        } else {
            0.0
        }
    }

    /// Share of landed swings that crit, as a percentage
    pub fn crit_rate(&self) -> f64 {
        if self.landed > 0 {
            self.crits as f64 / self.landed as f64 * 100.0
        } else {
            0.0
        }
    }

    /// Average damage per landed swing
    pub fn avg_damage(&self) -> f64 {
        if self.landed > 0 {
            self.total_damage / self.landed as f64
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::damage::calculate_damage;
    use crate::config::Loadout;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn capped_breakdown() -> DamageBreakdown {
        // Reference matchup, hit rate capped at 1.0
        let loadout = Loadout::sample();
        calculate_damage(&loadout.attacker, &loadout.defender, loadout.skill_percent)
    }

    #[test]
    fn test_same_seed_same_volley() {
        let breakdown = capped_breakdown();

        let mut rng = StdRng::seed_from_u64(42);
        let first = VolleyOutcome::run(&breakdown, 260000.0, 30, &mut rng);

        let mut rng = StdRng::seed_from_u64(42);
        let second = VolleyOutcome::run(&breakdown, 260000.0, 30, &mut rng);

        assert_eq!(first.swings, second.swings);
        assert_eq!(first.landed, second.landed);
        assert_eq!(first.crits, second.crits);
        assert_eq!(first.swings_to_kill, second.swings_to_kill);
        assert!((first.total_damage - second.total_damage).abs() < f64::EPSILON);
    }

    #[test]
    fn test_capped_hit_rate_lands_every_swing() {
        let breakdown = capped_breakdown();

        let mut rng = StdRng::seed_from_u64(7);
        let outcome = VolleyOutcome::run(&breakdown, f64::INFINITY, 50, &mut rng);

        assert_eq!(outcome.swings, 50);
        assert_eq!(outcome.landed, 50);
        assert!((outcome.landed_rate() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_floored_hit_rate_still_lands_some_swings() {
        let loadout = Loadout::sample();
        let mut attacker = loadout.attacker;
        attacker.hit = 0.0;
        let mut defender = loadout.defender;
        defender.block = 5000.0;
        let breakdown = calculate_damage(&attacker, &defender, loadout.skill_percent);
        assert!((breakdown.details.hit_rate - 0.05).abs() < f64::EPSILON);

        let mut rng = StdRng::seed_from_u64(42);
        let outcome = VolleyOutcome::run(&breakdown, f64::INFINITY, 2000, &mut rng);

        // 2000 swings at 5%: about 100 land, wide band for sampling noise
        assert_eq!(outcome.swings, 2000);
        assert!((40..=200).contains(&outcome.landed));
    }

    #[test]
    fn test_volley_stops_at_the_kill() {
        let breakdown = capped_breakdown();

        // Every landed swing deals at least non_crit, so one swing kills
        let mut rng = StdRng::seed_from_u64(42);
        let outcome = VolleyOutcome::run(&breakdown, breakdown.non_crit / 2.0, 30, &mut rng);

        assert_eq!(outcome.swings, 1);
        assert_eq!(outcome.swings_to_kill, Some(1));
    }

    #[test]
    fn test_zero_damage_never_kills() {
        let loadout = Loadout::sample();
        let mut defender = loadout.defender;
        defender.perma_reduction = 1.5;
        let breakdown = calculate_damage(&loadout.attacker, &defender, 1.0);

        let mut rng = StdRng::seed_from_u64(42);
        let outcome = VolleyOutcome::run(&breakdown, 260000.0, 30, &mut rng);

        assert_eq!(outcome.swings, 30);
        assert_eq!(outcome.swings_to_kill, None);
        assert!((outcome.total_damage - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rate_helpers_on_empty_volley() {
        let breakdown = capped_breakdown();

        let mut rng = StdRng::seed_from_u64(42);
        // Already-empty pool means no swings at all
        let outcome = VolleyOutcome::run(&breakdown, 0.0, 30, &mut rng);

        assert_eq!(outcome.swings, 0);
        assert!((outcome.landed_rate() - 0.0).abs() < f64::EPSILON);
        assert!((outcome.crit_rate() - 0.0).abs() < f64::EPSILON);
        assert!((outcome.avg_damage() - 0.0).abs() < f64::EPSILON);
    }
}
