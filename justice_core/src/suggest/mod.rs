//! Investment advice - rank which stat a flat bump helps the most

mod ranking;

pub use ranking::{rank_defensive, rank_offensive, DefensiveSuggestion, OffensiveSuggestion};

/// Flat amount added to one stat per probe
pub const INVESTMENT_STEP: f64 = 100.0;
