//! Defense and elemental resist mitigation with diminishing returns
//!
//! Both curves share the same hyperbolic shape:
//! `Reduction = Remaining / (Remaining + CONSTANT)`
//!
//! Mitigation approaches 100% asymptotically as the remaining rating grows
//! and never reaches it. Breaking stats subtract from the rating before the
//! curve is applied, which is why break investment stays valuable long after
//! raw attack has flattened out.

use super::constants::{DEF_CONST, RES_CONST};

/// Defense left after the attacker's break_def is applied
pub fn remaining_defense(defense: f64, break_def: f64) -> f64 {
    (defense - break_def).max(0.0)
}

/// Physical damage reduction fraction from the defense curve
///
/// # Examples
/// - 10552 remaining defense: 50% reduction
/// - 0 remaining defense: 0% reduction
pub fn defense_reduction(defense: f64, break_def: f64) -> f64 {
    let rem = remaining_defense(defense, break_def);
    rem / (rem + DEF_CONST)
}

/// Elemental resistance left after the attacker's ignore_res is applied
pub fn remaining_resist(element_res: f64, ignore_res: f64) -> f64 {
    (element_res - ignore_res).max(0.0)
}

/// Elemental damage reduction fraction from the resist curve
pub fn resist_reduction(element_res: f64, ignore_res: f64) -> f64 {
    let rem = remaining_resist(element_res, ignore_res);
    rem / (rem + RES_CONST)
}

/// Calculate how much raw defense is needed to reach a target reduction
/// percentage against an attacker with the given break_def
pub fn defense_needed_for_reduction(break_def: f64, target_reduction_percent: f64) -> f64 {
    if target_reduction_percent <= 0.0 {
        return break_def.max(0.0);
    }
    if target_reduction_percent >= 100.0 {
        return f64::INFINITY;
    }

    // Solving: reduction = rem / (rem + C)
    // reduction * rem + reduction * C = rem
    // reduction * C = rem * (1 - reduction)
    // rem = (reduction * C) / (1 - reduction)

    let reduction = target_reduction_percent / 100.0;
    break_def.max(0.0) + (reduction * DEF_CONST) / (1.0 - reduction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_break_exceeds_defense() {
        let red = defense_reduction(5000.0, 9000.0);
        assert!((red - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_half_value_point() {
        // Remaining defense equal to the curve constant gives exactly 50%
        let red = defense_reduction(DEF_CONST, 0.0);
        assert!((red - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_reduction_monotonic_in_defense() {
        let low = defense_reduction(2000.0, 0.0);
        let high = defense_reduction(20000.0, 0.0);
        assert!(high > low);
        assert!(high < 1.0);
    }

    #[test]
    fn test_resist_curve_shape() {
        // 500 remaining resist: 500 / (500 + 1965) = 20.28%
        let red = resist_reduction(2500.0, 2000.0);
        assert!((red - 0.2028).abs() < 0.001);
    }

    #[test]
    fn test_defense_needed() {
        // Against no break, 50% needs exactly the curve constant
        let needed = defense_needed_for_reduction(0.0, 50.0);
        assert!((needed - DEF_CONST).abs() < 0.1);

        // Verify round trip
        let red = defense_reduction(needed, 0.0);
        assert!((red - 0.5).abs() < 1e-9);

        // Break shifts the requirement up one-for-one
        let needed_vs_break = defense_needed_for_reduction(9000.0, 50.0);
        assert!((needed_vs_break - (DEF_CONST + 9000.0)).abs() < 0.1);
    }

    #[test]
    fn test_defense_needed_extremes() {
        assert!((defense_needed_for_reduction(1000.0, 0.0) - 1000.0).abs() < f64::EPSILON);
        assert!(defense_needed_for_reduction(0.0, 100.0).is_infinite());
    }
}
