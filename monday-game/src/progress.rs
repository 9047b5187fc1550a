//! Lifetime statistics and the death catalog.
use crate::constants::HINT_RUNGS;
use crate::deaths::{DeathCatalog, DeathRecord};

/// Counters that survive between sessions (except `choices_count`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsRecord {
    pub times_played: u32,
    pub times_won: u32,
    pub times_good_ending: u32,
    pub hints_seen: u8, // 0..=HINT_RUNGS
    pub total_choices: u32,
    /// Choices made in the current playthrough; never persisted.
    pub choices_count: u32,
}

/// In-memory progress: stats plus the death catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressStore {
    pub stats: StatsRecord,
    pub deaths: DeathCatalog,
}

impl ProgressStore {
    pub fn begin_playthrough(&mut self) {
        self.stats.times_played = self.stats.times_played.saturating_add(1);
        self.stats.choices_count = 0;
    }

    pub fn count_choice(&mut self) {
        self.stats.choices_count = self.stats.choices_count.saturating_add(1);
        self.stats.total_choices = self.stats.total_choices.saturating_add(1);
    }

    /// Raise `hints_seen` to `rung`. Returns whether anything changed.
    pub fn unlock_hint(&mut self, rung: u8) -> bool {
        let rung = rung.min(HINT_RUNGS);
        if self.stats.hints_seen >= rung {
            return false;
        }
        self.stats.hints_seen = rung;
        true
    }

    pub fn record_death(&mut self, id: &str) -> DeathRecord {
        self.deaths.record(id)
    }

    pub fn record_win(&mut self, good_ending: bool) {
        if good_ending {
            self.stats.times_good_ending = self.stats.times_good_ending.saturating_add(1);
        }
        self.stats.times_won = self.stats.times_won.saturating_add(1);
    }

    /// Back to first-run defaults.
    pub fn reset(&mut self) {
        self.stats = StatsRecord::default();
        self.deaths.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playthrough_resets_session_choices_only() {
        let mut store = ProgressStore::default();
        store.begin_playthrough();
        store.count_choice();
        store.count_choice();
        store.begin_playthrough();
        store.count_choice();
        assert_eq!(store.stats.times_played, 2);
        assert_eq!(store.stats.choices_count, 1);
        assert_eq!(store.stats.total_choices, 3);
    }

    #[test]
    fn hints_never_go_down() {
        let mut store = ProgressStore::default();
        assert!(store.unlock_hint(2));
        assert!(!store.unlock_hint(1));
        assert_eq!(store.stats.hints_seen, 2);
        assert!(store.unlock_hint(9));
        assert_eq!(store.stats.hints_seen, HINT_RUNGS);
    }

    #[test]
    fn good_ending_also_counts_as_win() {
        let mut store = ProgressStore::default();
        store.record_win(false);
        store.record_win(true);
        assert_eq!(store.stats.times_won, 2);
        assert_eq!(store.stats.times_good_ending, 1);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut store = ProgressStore::default();
        store.begin_playthrough();
        store.record_death("mad_cow");
        store.unlock_hint(3);
        store.reset();
        assert_eq!(store, ProgressStore::default());
    }
}
