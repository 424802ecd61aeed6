//! Application state

use justice_core::{
    config::{load_toml, ATTACKER_FIELDS, DEFENDER_FIELDS},
    rank_defensive, rank_offensive, ConfigError, DamageBreakdown, DefensiveSuggestion, FieldDef,
    FormulaConstants, Loadout, OffensiveSuggestion, SavedFields, VolleyOutcome, SAVE_FILE,
};
use rand::SeedableRng;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Optional TOML override for the constants shown in the report
const CONSTANTS_FILE: &str = "justice_constants.toml";

/// Swings per volley roll
const VOLLEY_SWINGS: u32 = 30;

/// Longest accepted field entry, keeps the input panel aligned
const MAX_ENTRY_LEN: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Input,
    Report,
    Advice,
    Volley,
    Help,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Input, Tab::Report, Tab::Advice, Tab::Volley, Tab::Help]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Input => "Input",
            Tab::Report => "Report",
            Tab::Advice => "Advice",
            Tab::Volley => "Volley",
            Tab::Help => "Help",
        }
    }
}

/// Which attribute column holds the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFocus {
    Attacker,
    Defender,
}

/// Everything one calculation produces
pub struct AnalysisReport {
    pub loadout: Loadout,
    pub breakdown: DamageBreakdown,
    pub offensive: Vec<OffensiveSuggestion>,
    pub defensive: Vec<DefensiveSuggestion>,
}

pub struct App {
    pub current_tab: Tab,
    /// Attacker fields with their current entry text, in display order
    pub attacker_entries: Vec<(FieldDef, String)>,
    /// Defender fields with their current entry text, in display order
    pub defender_entries: Vec<(FieldDef, String)>,
    pub input_focus: InputFocus,
    pub selected_attacker: usize,
    pub selected_defender: usize,
    pub report: Option<AnalysisReport>,
    pub volley: Option<VolleyOutcome>,
    pub constants: FormulaConstants,
    pub status: String,
    pub save_path: PathBuf,
    pub report_scroll: usize,
    pub rng: rand::rngs::StdRng,
}

impl App {
    pub fn new() -> Self {
        Self::with_save_path(PathBuf::from(SAVE_FILE))
    }

    /// Build the app around a specific save file location
    pub fn with_save_path(save_path: PathBuf) -> Self {
        let (saved, mut status) = match SavedFields::load(&save_path) {
            Ok(saved) if saved.is_empty() => {
                (saved, "No save found, showing defaults. Press 'c' to calculate.".to_string())
            }
            Ok(saved) => {
                let status = format!("Loaded {} saved fields. Press 'c' to calculate.", saved.len());
                (saved, status)
            }
            Err(err) => (SavedFields::new(), format!("Save file ignored: {}", err)),
        };

        let constants = match load_toml::<FormulaConstants>(Path::new(CONSTANTS_FILE)) {
            Ok(constants) => constants,
            Err(ConfigError::IoError(err)) if err.kind() == ErrorKind::NotFound => {
                FormulaConstants::default()
            }
            Err(err) => {
                status = format!("Constants file ignored: {}", err);
                FormulaConstants::default()
            }
        };

        let attacker_entries = ATTACKER_FIELDS
            .iter()
            .map(|def| (*def, entry_text(&saved, def)))
            .collect();
        let defender_entries = DEFENDER_FIELDS
            .iter()
            .map(|def| (*def, entry_text(&saved, def)))
            .collect();

        App {
            current_tab: Tab::Input,
            attacker_entries,
            defender_entries,
            input_focus: InputFocus::Attacker,
            selected_attacker: 0,
            selected_defender: 0,
            report: None,
            volley: None,
            constants,
            status,
            save_path,
            report_scroll: 0,
            rng: rand::rngs::StdRng::seed_from_u64(42),
        }
    }

    pub fn next_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        let next_idx = (current_idx + 1) % tabs.len();
        self.current_tab = tabs[next_idx];
    }

    pub fn prev_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        let prev_idx = if current_idx == 0 {
            tabs.len() - 1
        } else {
            current_idx - 1
        };
        self.current_tab = tabs[prev_idx];
    }

    pub fn set_tab(&mut self, index: usize) {
        let tabs = Tab::all();
        if index < tabs.len() {
            self.current_tab = tabs[index];
        }
    }

    pub fn on_up(&mut self) {
        match self.current_tab {
            Tab::Input => match self.input_focus {
                InputFocus::Attacker => {
                    if self.selected_attacker > 0 {
                        self.selected_attacker -= 1;
                    }
                }
                InputFocus::Defender => {
                    if self.selected_defender > 0 {
                        self.selected_defender -= 1;
                    }
                }
            },
            Tab::Report => {
                if self.report_scroll > 0 {
                    self.report_scroll -= 1;
                }
            }
            _ => {}
        }
    }

    pub fn on_down(&mut self) {
        match self.current_tab {
            Tab::Input => match self.input_focus {
                InputFocus::Attacker => {
                    if self.selected_attacker < self.attacker_entries.len().saturating_sub(1) {
                        self.selected_attacker += 1;
                    }
                }
                InputFocus::Defender => {
                    if self.selected_defender < self.defender_entries.len().saturating_sub(1) {
                        self.selected_defender += 1;
                    }
                }
            },
            Tab::Report => {
                self.report_scroll += 1;
            }
            _ => {}
        }
    }

    pub fn on_left(&mut self) {
        if self.current_tab == Tab::Input {
            self.input_focus = InputFocus::Attacker;
        }
    }

    pub fn on_right(&mut self) {
        if self.current_tab == Tab::Input {
            self.input_focus = InputFocus::Defender;
        }
    }

    pub fn on_enter(&mut self) {
        match self.current_tab {
            Tab::Input => self.calculate(),
            Tab::Volley => self.roll_volley(),
            _ => {}
        }
    }

    /// Route typed characters: digits edit the focused field on the input
    /// tab, everything else acts as a hotkey
    pub fn on_char(&mut self, c: char) {
        if self.current_tab == Tab::Input && (c.is_ascii_digit() || c == '.' || c == '-') {
            self.push_entry_char(c);
            return;
        }

        match c {
            '1' => self.set_tab(0),
            '2' => self.set_tab(1),
            '3' => self.set_tab(2),
            '4' => self.set_tab(3),
            '5' => self.set_tab(4),
            'c' => self.calculate(),
            'r' => self.reset_defaults(),
            'v' => self.roll_volley(),
            '?' => self.current_tab = Tab::Help,
            _ => {}
        }
    }

    pub fn on_backspace(&mut self) {
        if self.current_tab == Tab::Input {
            self.current_entry_mut().pop();
        }
    }

    fn push_entry_char(&mut self, c: char) {
        let entry = self.current_entry_mut();
        if entry.len() < MAX_ENTRY_LEN {
            entry.push(c);
        }
    }

    fn current_entry_mut(&mut self) -> &mut String {
        match self.input_focus {
            InputFocus::Attacker => &mut self.attacker_entries[self.selected_attacker].1,
            InputFocus::Defender => &mut self.defender_entries[self.selected_defender].1,
        }
    }

    /// Parse every field, persist the raw entries, then evaluate
    ///
    /// The save only happens once all fields parse, so a typo never
    /// clobbers the last good save.
    pub fn calculate(&mut self) {
        let mut saved = SavedFields::new();
        for (def, value) in self.attacker_entries.iter().chain(&self.defender_entries) {
            saved.set(def.key, value.clone());
        }

        let loadout = match Loadout::from_fields(&saved) {
            Ok(loadout) => loadout,
            Err(err) => {
                self.status = format!("Calculation error: {}", err);
                return;
            }
        };

        if let Err(err) = saved.save(&self.save_path) {
            self.status = format!("Save failed: {}", err);
            return;
        }

        let breakdown = loadout.evaluate();
        let offensive = rank_offensive(&loadout.attacker, &loadout.defender, loadout.skill_percent);
        let defensive = rank_defensive(&loadout.attacker, &loadout.defender, loadout.skill_percent);

        self.report = Some(AnalysisReport {
            loadout,
            breakdown,
            offensive,
            defensive,
        });
        self.volley = None;
        self.report_scroll = 0;
        self.current_tab = Tab::Report;
        self.status = "Analysis complete (settings saved)".to_string();
    }

    /// Put every field back to its registry default
    pub fn reset_defaults(&mut self) {
        for (def, value) in self
            .attacker_entries
            .iter_mut()
            .chain(self.defender_entries.iter_mut())
        {
            *value = def.default.to_string();
        }
        self.report = None;
        self.volley = None;
        self.report_scroll = 0;
        self.status = "Fields reset to defaults".to_string();
    }

    /// Roll a fresh volley with the current report's odds
    pub fn roll_volley(&mut self) {
        let (breakdown, enemy_hp) = match &self.report {
            Some(report) => (report.breakdown, report.loadout.enemy_hp),
            None => {
                self.status = "Calculate first ('c') before rolling a volley".to_string();
                return;
            }
        };

        let outcome = VolleyOutcome::run(&breakdown, enemy_hp, VOLLEY_SWINGS, &mut self.rng);
        self.status = format!(
            "Rolled {} swings: {} landed, {} crits",
            outcome.swings, outcome.landed, outcome.crits
        );
        self.volley = Some(outcome);
        self.current_tab = Tab::Volley;
    }
}

fn entry_text(saved: &SavedFields, def: &FieldDef) -> String {
    saved.get(def.key).unwrap_or(def.default).to_string()
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
