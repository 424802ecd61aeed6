//! Shield absorption - piecewise tiers on break_shield vs shield
//!
//! Shield-breaking investment pays out in three discrete regimes rather than
//! a smooth curve:
//! - break past the full shield value: nothing remains
//! - break past one third of it: half of the difference remains
//! - below one third: the shield loses two points per break point
//!
//! The tier boundaries at `shield` and `shield / 3` are exact game rules and
//! must not be smoothed.

use serde::{Deserialize, Serialize};

/// Which shield regime a matchup falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShieldTier {
    /// break_shield >= shield, nothing remains
    Broken,
    /// break_shield >= shield / 3, half the difference remains
    Cracked,
    /// Weak break, every break point removes two shield points
    Intact,
}

impl ShieldTier {
    pub fn label(&self) -> &'static str {
        match self {
            ShieldTier::Broken => "Broken",
            ShieldTier::Cracked => "Cracked",
            ShieldTier::Intact => "Intact",
        }
    }
}

/// Classify the matchup into its shield regime
pub fn shield_tier(shield: f64, break_shield: f64) -> ShieldTier {
    if break_shield >= shield {
        ShieldTier::Broken
    } else if break_shield >= shield / 3.0 {
        ShieldTier::Cracked
    } else {
        ShieldTier::Intact
    }
}

/// Shield value still absorbing attack after break_shield is applied
pub fn remaining_shield(shield: f64, break_shield: f64) -> f64 {
    let rem = match shield_tier(shield, break_shield) {
        ShieldTier::Broken => 0.0,
        ShieldTier::Cracked => 0.5 * (shield - break_shield),
        ShieldTier::Intact => shield - 2.0 * break_shield,
    };
    rem.max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_break() {
        assert_eq!(shield_tier(300.0, 300.0), ShieldTier::Broken);
        let rem = remaining_shield(300.0, 300.0);
        assert!((rem - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_break_above_shield() {
        let rem = remaining_shield(300.0, 500.0);
        assert!((rem - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_partial_break_at_third() {
        // Exactly shield / 3 lands in the partial tier
        assert_eq!(shield_tier(300.0, 100.0), ShieldTier::Cracked);
        let rem = remaining_shield(300.0, 100.0);
        assert!((rem - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_weak_break_just_below_third() {
        // One point below the boundary switches tiers
        assert_eq!(shield_tier(300.0, 99.0), ShieldTier::Intact);
        let rem = remaining_shield(300.0, 99.0);
        assert!((rem - 102.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_no_break() {
        let rem = remaining_shield(2000.0, 0.0);
        assert!((rem - 2000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_small_values() {
        let rem = remaining_shield(10.0, 3.0);
        assert!((rem - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_never_negative() {
        let rem = remaining_shield(-50.0, 0.0);
        assert!((rem - 0.0).abs() < f64::EPSILON);
    }
}
