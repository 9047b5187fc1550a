//! Catalog of every way Monday can kill you.
use log::warn;

use crate::constants::LOG_UNKNOWN_DEATH;

/// Death cause ids and their descriptions, in catalog order.
pub const DEATH_CAUSES: [(&str, &str); 51] = [
    ("oversleeping", "Overslept and missed the bus"),
    ("mob_hit", "Smashed stereo containing mob boss's CD"),
    ("anvil", "Found government secrets and met an anvil"),
    ("electrocution", "Tried to get Pop-Tart out with a fork"),
    ("broken_jaw", "Broke jaw on frozen pizza"),
    ("no_hygiene", "Didn't brush teeth before packing bag"),
    ("skip_breakfast", "Skipped the most important meal of the day"),
    ("unwashed_breakfast", "Ate breakfast with unwashed hands"),
    ("starvation", "Forgot school supplies and starved to death"),
    ("psycho", "Met a psycho in a rubber mask"),
    ("mcdonalds_fry", "Heart attack from one McDonald's fry"),
    ("sun_blindness", "Blinded by sun while crossing street"),
    ("live_tuna", "Eaten by live tuna sandwich at airport"),
    ("iraq_guards", "Mistaken for assassin in Iraq"),
    ("donkey_kong", "Thrown into oblivion by Donkey Kong"),
    ("hostage_fail", "Failed to help TI-83 hostage situation"),
    ("walk_texas", "Tried walking home from Texas"),
    ("book_indigestion", "Severe indigestion from eating alien book"),
    ("math_fail", "Failed basic math in Area 51"),
    ("toilet_flush", "Flushed down Area 51 toilet"),
    ("toilet_drink", "Drank from Area 51 toilet"),
    ("toxic_nap", "Napped in toxic Area 51 bathroom"),
    ("alien_blood", "Dissolved by alien's acidic blood"),
    ("ymca_smack", "Smacked for singing YMCA with aliens"),
    ("alien_dance", "Died of embarrassment dancing with aliens"),
    ("final_loser", "Gave up at the very end"),
    ("hand_falls_off", "Hand fell off writing essay"),
    ("reject_girl", "Said 'hell no' to the girl"),
    ("methane_gas", "Choked on methane gas in library"),
    ("mad_cow", "Got mad cow disease from beef taco"),
    ("salmonella", "Got salmonella from chicken"),
    ("seizure", "Had seizure from computer screen"),
    ("acid_face", "Face fell in hydrochloric acid"),
    ("refused_donut", "Refused to give donut to linebacker"),
    ("monday_revenge", "Hit with Monday's best shot"),
    ("car_accident", "Ran to bus without looking both ways"),
    ("cement", "Sat in wet cement at bus stop"),
    ("spiteful_driver", "Mooned the bus driver"),
    ("bad_neighborhood", "Fell asleep on bus in bad neighborhood"),
    ("lost_forever", "Got lost in school halls forever"),
    ("brain_overheat", "Brain overheated from studying"),
    ("computer_explosion", "Computer exploded checking email"),
    ("choked_tongue", "Choked on tongue during speed debate"),
    ("gameboy_rage", "Died from Gameboy rage after batteries died"),
    ("annie_cd", "Jumped from bus after hearing Annie soundtrack"),
    ("buffalo_stampede", "Run down by raging buffalo with dream girl"),
    ("alien_abduction", "Abducted by aliens walking home"),
    ("bus_window", "Thrown out bus window for no reason"),
    ("quit_early", "Tried to go home early"),
    ("airport_quit", "Tried to go home from airport"),
    ("texas_karma", "Bad karma caught up in Texas"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeathEntry {
    pub id: &'static str,
    pub description: &'static str,
    pub discovered: bool,
    pub count: u32,
}

/// What happened when a death was recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathRecord {
    /// First time this cause was seen; carries its description.
    Discovered(&'static str),
    Repeated,
    Unknown,
}

/// Lifetime tally of deaths, in fixed catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeathCatalog {
    entries: Vec<DeathEntry>,
}

impl Default for DeathCatalog {
    fn default() -> Self {
        Self {
            entries: DEATH_CAUSES
                .iter()
                .map(|&(id, description)| DeathEntry {
                    id,
                    description,
                    discovered: false,
                    count: 0,
                })
                .collect(),
        }
    }
}

impl DeathCatalog {
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&DeathEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut DeathEntry> {
        self.entries.iter_mut().find(|entry| entry.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DeathEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn discovered(&self) -> usize {
        self.entries.iter().filter(|entry| entry.discovered).count()
    }

    /// Record one occurrence of a death cause.
    ///
    /// Unknown ids are reported and ignored so a stray id can never damage
    /// the catalog.
    pub fn record(&mut self, id: &str) -> DeathRecord {
        let Some(entry) = self.get_mut(id) else {
            warn!(target: LOG_UNKNOWN_DEATH, "death cause '{id}' not found in catalog");
            return DeathRecord::Unknown;
        };
        entry.count = entry.count.saturating_add(1);
        if entry.discovered {
            DeathRecord::Repeated
        } else {
            entry.discovered = true;
            DeathRecord::Discovered(entry.description)
        }
    }

    /// Forget every discovery and count.
    pub fn reset(&mut self) {
        for entry in &mut self.entries {
            entry.discovered = false;
            entry.count = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_ids_are_unique() {
        let ids: HashSet<_> = DEATH_CAUSES.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids.len(), DEATH_CAUSES.len());
    }

    #[test]
    fn first_record_discovers_then_counts() {
        let mut catalog = DeathCatalog::default();
        assert_eq!(
            catalog.record("anvil"),
            DeathRecord::Discovered("Found government secrets and met an anvil")
        );
        assert_eq!(catalog.record("anvil"), DeathRecord::Repeated);
        assert_eq!(catalog.record("anvil"), DeathRecord::Repeated);
        let entry = catalog.get("anvil").unwrap();
        assert!(entry.discovered);
        assert_eq!(entry.count, 3);
        assert_eq!(catalog.discovered(), 1);
    }

    #[test]
    fn unknown_cause_leaves_catalog_untouched() {
        let mut catalog = DeathCatalog::default();
        catalog.record("cement");
        let before = catalog.clone();
        assert_eq!(catalog.record("stubbed_toe"), DeathRecord::Unknown);
        assert_eq!(catalog, before);
    }

    #[test]
    fn reset_forgets_everything() {
        let mut catalog = DeathCatalog::default();
        catalog.record("psycho");
        catalog.record("seizure");
        catalog.reset();
        assert_eq!(catalog, DeathCatalog::default());
        assert_eq!(catalog.len(), DEATH_CAUSES.len());
    }
}
