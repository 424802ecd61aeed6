//! Attribute sheets - the flat numeric records a matchup is computed from

mod attacker;
mod defender;

pub use attacker::{AttackerStats, OffensiveStat};
pub use defender::{DefenderStats, DefensiveStat};
