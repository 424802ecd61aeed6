//! Field registry - every calculator input with its save key, label, and
//! default value
//!
//! The defaults double as the stock matchup: loading an empty save and
//! pressing calculate reproduces the reference numbers.

use super::{ConfigError, SavedFields};

/// One input field of the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    /// Stable key used in the save file
    pub key: &'static str,
    /// Display label
    pub label: &'static str,
    /// Default value, kept as entered text like everything else in the save
    pub default: &'static str,
}

impl FieldDef {
    const fn new(key: &'static str, label: &'static str, default: &'static str) -> FieldDef {
        FieldDef {
            key,
            label,
            default,
        }
    }

    /// Parse this field's value from a save, falling back to the default
    pub fn parse_from(&self, saved: &SavedFields) -> Result<f64, ConfigError> {
        let raw = saved.get(self.key).unwrap_or(self.default);
        match raw.trim().parse::<f64>() {
            Ok(value) => Ok(value),
            Err(_) => Err(ConfigError::InvalidNumber {
                key: self.key,
                value: raw.to_string(),
            }),
        }
    }
}

pub const ATTACK: FieldDef = FieldDef::new("attack", "Attack", "11194");
pub const BREAK_DEF: FieldDef = FieldDef::new("break_def", "Defense Break", "9000");
pub const BREAK_SHIELD: FieldDef = FieldDef::new("break_shield", "Shield Break", "349");
pub const ELEMENT_ATTACK: FieldDef = FieldDef::new("element_attack", "Element Attack", "3600");
pub const KEZHI: FieldDef = FieldDef::new("kezhi", "Counter", "4000");
pub const SKILL_ENHANCE: FieldDef = FieldDef::new("skill_enhance", "Skill Enhance", "0");
pub const HIT: FieldDef = FieldDef::new("hit", "Hit", "2300");
pub const CRIT: FieldDef = FieldDef::new("crit", "Crit", "4500");
pub const CRIT_DMG_BONUS: FieldDef = FieldDef::new("crit_dmg_bonus", "Crit Damage Bonus", "0.713");
pub const EXTRA_CRIT_RATE: FieldDef = FieldDef::new("extra_crit_rate", "Extra Crit Rate", "0.05");
pub const KEZHI_PCT: FieldDef = FieldDef::new("kezhi_pct", "Counter Strength", "0.161");
pub const IGNORE_RES: FieldDef = FieldDef::new("ignore_res", "Ignore Resist", "2000");
pub const SKILL_PCT: FieldDef = FieldDef::new("skill_pct", "Skill Damage %", "100");

pub const DEFENSE: FieldDef = FieldDef::new("defense", "Defense", "9800");
pub const SHIELD: FieldDef = FieldDef::new("shield", "Shield", "2000");
pub const ELEMENT_RES: FieldDef = FieldDef::new("element_res", "Element Resist", "2500");
pub const RESIST: FieldDef = FieldDef::new("resist", "Resist", "4500");
pub const BLOCK: FieldDef = FieldDef::new("block", "Block", "2000");
pub const CRIT_RESIST: FieldDef = FieldDef::new("crit_resist", "Crit Resist", "2700");
pub const PERMA_REDUCTION: FieldDef = FieldDef::new("perma_reduction", "Permanent Reduction", "0.25");
pub const SKILL_RESIST: FieldDef = FieldDef::new("skill_resist", "Skill Resist", "200");
pub const CRIT_DEF: FieldDef = FieldDef::new("crit_def", "Crit Defense", "0.1");
pub const ENEMY_HP: FieldDef = FieldDef::new("hp", "Enemy HP", "260000");

/// Attacker-side fields in display order
pub const ATTACKER_FIELDS: &[FieldDef] = &[
    ATTACK,
    BREAK_DEF,
    BREAK_SHIELD,
    ELEMENT_ATTACK,
    KEZHI,
    SKILL_ENHANCE,
    HIT,
    CRIT,
    CRIT_DMG_BONUS,
    EXTRA_CRIT_RATE,
    KEZHI_PCT,
    IGNORE_RES,
    SKILL_PCT,
];

/// Defender-side fields in display order
pub const DEFENDER_FIELDS: &[FieldDef] = &[
    DEFENSE,
    SHIELD,
    ELEMENT_RES,
    RESIST,
    BLOCK,
    CRIT_RESIST,
    PERMA_REDUCTION,
    SKILL_RESIST,
    CRIT_DEF,
    ENEMY_HP,
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_all_defaults_parse_as_numbers() {
        for def in ATTACKER_FIELDS.iter().chain(DEFENDER_FIELDS) {
            assert!(
                def.default.parse::<f64>().is_ok(),
                "default for {} does not parse",
                def.key
            );
        }
    }

    #[test]
    fn test_save_keys_are_unique() {
        let keys: BTreeSet<&str> = ATTACKER_FIELDS
            .iter()
            .chain(DEFENDER_FIELDS)
            .map(|def| def.key)
            .collect();

        assert_eq!(keys.len(), ATTACKER_FIELDS.len() + DEFENDER_FIELDS.len());
    }

    #[test]
    fn test_parse_from_prefers_saved_value() {
        let mut saved = SavedFields::new();
        saved.set("attack", "12000");

        let value = ATTACK.parse_from(&saved).unwrap();
        assert!((value - 12000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_from_falls_back_to_default() {
        let saved = SavedFields::new();

        let value = ATTACK.parse_from(&saved).unwrap();
        assert!((value - 11194.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_from_trims_whitespace() {
        let mut saved = SavedFields::new();
        saved.set("hit", "  2400 ");

        let value = HIT.parse_from(&saved).unwrap();
        assert!((value - 2400.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_from_reports_bad_value_with_key() {
        let mut saved = SavedFields::new();
        saved.set("crit", "lots");

        let err = CRIT.parse_from(&saved).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("crit"));
        assert!(message.contains("lots"));
    }
}
