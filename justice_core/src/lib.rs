//! justice_core - PVP damage model for the justice calculator
//!
//! This library provides:
//! - AttackerStats / DefenderStats: The two flat attribute sheets
//! - calculate_damage: The full damage pipeline with an audited breakdown
//! - rank_offensive / rank_defensive: Marginal-gain investment advice
//! - SavedFields / Loadout: The flat settings file and the matchup built from it
//! - VolleyOutcome: A seeded burst of swings rolled with the matchup's odds

pub mod attributes;
pub mod config;
pub mod damage;
pub mod formula;
pub mod suggest;
pub mod volley;

// Re-export core types for convenience
pub use attributes::{AttackerStats, DefenderStats, DefensiveStat, OffensiveStat};
pub use config::{ConfigError, FieldDef, FormulaConstants, Loadout, SavedFields, SAVE_FILE};
pub use damage::{calculate_damage, DamageBreakdown, DamageDetails};
pub use formula::ShieldTier;
pub use suggest::{
    rank_defensive, rank_offensive, DefensiveSuggestion, OffensiveSuggestion, INVESTMENT_STEP,
};
pub use volley::VolleyOutcome;
