//! Formula stages - mitigation curves, shield tiers, hit and crit rates

mod mitigation;
mod rates;
mod shield;

pub use mitigation::{
    defense_needed_for_reduction, defense_reduction, remaining_defense, remaining_resist,
    resist_reduction,
};
pub use rates::{crit_damage_factor, crit_rate, hit_rate};
pub use shield::{remaining_shield, shield_tier, ShieldTier};

/// Tuned formula constants
///
/// Every value here is a game-design constant and is reproduced exactly.
pub mod constants {
    /// Flat damage added before the attack term
    pub const BASE_COEFF: f64 = 2273.0;

    /// Multiplier on both damage terms, fixed at 1.0 as a tuning point
    pub const SCALING_COEFF: f64 = 1.0;

    /// Defense curve constant: reduction hits 50% at this much remaining defense
    pub const DEF_CONST: f64 = 10552.0;

    /// Elemental resist curve constant, same shape as the defense curve
    pub const RES_CONST: f64 = 1965.0;

    /// Hit rate at zero hit difference
    pub const HIT_BASE: f64 = 0.95;

    /// Hit difference scaling
    pub const HIT_SCALE: f64 = 1.43;

    /// Hit curve denominator offset
    pub const HIT_CONST: f64 = 5950.0;

    /// Substituted when the hit denominator is exactly zero, so the division
    /// never fails; the clamp absorbs the huge result
    pub const HIT_DENOM_EPSILON: f64 = 0.001;

    /// Crit curve numerator scale
    pub const CRIT_SCALE: f64 = 115.0;

    /// Crit curve numerator offset
    pub const CRIT_OFFSET: f64 = 1230.0;

    /// Crit curve denominator offset, also the cutoff below which the curve is 0
    pub const CRIT_CONST: f64 = 1548.0;

    /// Floor for hit and crit rates
    pub const RATE_FLOOR: f64 = 0.05;

    /// Ceiling for hit and crit rates
    pub const RATE_CEIL: f64 = 1.0;
}
