//! Damage evaluation - the full pipeline and its audited result

mod breakdown;
mod calculation;

pub use breakdown::{DamageBreakdown, DamageDetails};
pub use calculation::calculate_damage;
