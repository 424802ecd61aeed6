//! Formula constants configuration
//!
//! A data view of the same numbers compiled into `formula::constants`, for
//! display surfaces and TOML overrides of the reference readout.

use serde::{Deserialize, Serialize};

/// The damage formula constants, grouped by stage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormulaConstants {
    pub damage: DamageConstants,
    pub mitigation: MitigationConstants,
    pub hit: HitConstants,
    pub crit: CritConstants,
    pub clamp: ClampConstants,
}

impl Default for FormulaConstants {
    fn default() -> Self {
        FormulaConstants {
            damage: DamageConstants::default(),
            mitigation: MitigationConstants::default(),
            hit: HitConstants::default(),
            crit: CritConstants::default(),
            clamp: ClampConstants::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DamageConstants {
    /// Flat base added before the attack term
    #[serde(default = "default_base_coeff")]
    pub base_coeff: f64,
    /// Multiplier on the attack term and the elemental term
    #[serde(default = "default_scaling_coeff")]
    pub scaling_coeff: f64,
}

impl Default for DamageConstants {
    fn default() -> Self {
        DamageConstants {
            base_coeff: 2273.0,
            scaling_coeff: 1.0,
        }
    }
}

fn default_base_coeff() -> f64 {
    2273.0
}
fn default_scaling_coeff() -> f64 {
    1.0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MitigationConstants {
    /// Defense curve: reduction = defense / (defense + constant)
    #[serde(default = "default_defense_constant")]
    pub defense_constant: f64,
    /// Resist curve: reduction = resist / (resist + constant)
    #[serde(default = "default_resist_constant")]
    pub resist_constant: f64,
}

impl Default for MitigationConstants {
    fn default() -> Self {
        MitigationConstants {
            defense_constant: 10552.0,
            resist_constant: 1965.0,
        }
    }
}

fn default_defense_constant() -> f64 {
    10552.0
}
fn default_resist_constant() -> f64 {
    1965.0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HitConstants {
    /// Hit rate at zero hit/block difference
    #[serde(default = "default_hit_base_rate")]
    pub base_rate: f64,
    /// Slope on the hit/block difference
    #[serde(default = "default_hit_scale")]
    pub scale: f64,
    /// Denominator constant added to the difference
    #[serde(default = "default_hit_constant")]
    pub constant: f64,
    /// Stand-in denominator when the difference cancels the constant
    #[serde(default = "default_denom_epsilon")]
    pub denom_epsilon: f64,
}

impl Default for HitConstants {
    fn default() -> Self {
        HitConstants {
            base_rate: 0.95,
            scale: 1.43,
            constant: 5950.0,
            denom_epsilon: 0.001,
        }
    }
}

fn default_hit_base_rate() -> f64 {
    0.95
}
fn default_hit_scale() -> f64 {
    1.43
}
fn default_hit_constant() -> f64 {
    5950.0
}
fn default_denom_epsilon() -> f64 {
    0.001
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CritConstants {
    /// Multiplier on the remaining crit rating
    #[serde(default = "default_crit_scale")]
    pub scale: f64,
    /// Flat amount taken off the scaled rating
    #[serde(default = "default_crit_offset")]
    pub offset: f64,
    /// Denominator constant, also the cutoff below which the curve is zero
    #[serde(default = "default_crit_constant")]
    pub constant: f64,
}

impl Default for CritConstants {
    fn default() -> Self {
        CritConstants {
            scale: 115.0,
            offset: 1230.0,
            constant: 1548.0,
        }
    }
}

fn default_crit_scale() -> f64 {
    115.0
}
fn default_crit_offset() -> f64 {
    1230.0
}
fn default_crit_constant() -> f64 {
    1548.0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClampConstants {
    /// Lower clamp on both the hit and crit rates
    #[serde(default = "default_rate_floor")]
    pub floor: f64,
    /// Upper clamp on both the hit and crit rates
    #[serde(default = "default_rate_ceil")]
    pub ceil: f64,
}

impl Default for ClampConstants {
    fn default() -> Self {
        ClampConstants {
            floor: 0.05,
            ceil: 1.0,
        }
    }
}

fn default_rate_floor() -> f64 {
    0.05
}
fn default_rate_ceil() -> f64 {
    1.0
}
