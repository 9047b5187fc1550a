//! Per-playthrough flags that decide which branches are reachable.
use crate::constants::{JACKPOT, SNOOZE_LIMIT};
use crate::scene::{Condition, Effect};

/// Mutable record for a single run through the day.
///
/// Created fresh when a playthrough begins and thrown away afterwards;
/// nothing here is ever persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub running: bool,
    pub snooze_count: u8,
    pub pants_wet: bool,
    pub cash: u32, // 0 or JACKPOT
    pub device_confiscated: bool,
    pub insists_on_going_home: u8,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            running: true,
            snooze_count: 0,
            pants_wet: false,
            cash: 0,
            device_confiscated: false,
            insists_on_going_home: 0,
        }
    }
}

impl GameState {
    #[must_use]
    pub const fn has_jackpot(&self) -> bool {
        self.cash == JACKPOT
    }

    #[must_use]
    pub const fn snoozed_out(&self) -> bool {
        self.snooze_count >= SNOOZE_LIMIT
    }

    /// Start a new playthrough, keeping only the `running` flag.
    pub fn restart(&mut self) {
        *self = Self {
            running: self.running,
            ..Self::default()
        };
    }

    /// Evaluate a branch or narration condition.
    #[must_use]
    pub fn satisfies(&self, condition: &Condition) -> bool {
        match condition {
            Condition::Jackpot => self.has_jackpot(),
            Condition::PantsWet => self.pants_wet,
            Condition::DeviceConfiscated => self.device_confiscated,
            Condition::SnoozedOut => self.snoozed_out(),
            Condition::Insisted(times) => self.insists_on_going_home >= *times,
            Condition::Not(inner) => !self.satisfies(inner),
            Condition::All(all) => all.iter().all(|c| self.satisfies(c)),
            Condition::Any(any) => any.iter().any(|c| self.satisfies(c)),
        }
    }

    /// Apply an effect that touches only per-run flags.
    ///
    /// Returns `false` for effects that belong to the progress store or the
    /// menu hub, leaving the state untouched.
    pub fn apply(&mut self, effect: &Effect) -> bool {
        match effect {
            Effect::Snooze => self.snooze_count = self.snooze_count.saturating_add(1),
            Effect::WetPants => self.pants_wet = true,
            Effect::CollectJackpot => self.cash = JACKPOT,
            Effect::ConfiscateDevice => self.device_confiscated = true,
            Effect::InsistOnGoingHome => {
                self.insists_on_going_home = self.insists_on_going_home.saturating_add(1);
            }
            Effect::Quit => self.running = false,
            Effect::BeginPlaythrough
            | Effect::UnlockHint(_)
            | Effect::ReportStats
            | Effect::ClearProgress => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_is_running_and_broke() {
        let state = GameState::default();
        assert!(state.running);
        assert_eq!(state.cash, 0);
        assert!(!state.has_jackpot());
        assert!(!state.snoozed_out());
    }

    #[test]
    fn restart_clears_flags_but_keeps_running() {
        let mut state = GameState::default();
        state.apply(&Effect::CollectJackpot);
        state.apply(&Effect::WetPants);
        state.apply(&Effect::ConfiscateDevice);
        state.apply(&Effect::InsistOnGoingHome);
        state.restart();
        assert_eq!(state, GameState::default());

        state.apply(&Effect::Quit);
        state.restart();
        assert!(!state.running);
    }

    #[test]
    fn snoozing_hits_the_limit() {
        let mut state = GameState::default();
        for _ in 0..SNOOZE_LIMIT {
            assert!(!state.satisfies(&Condition::SnoozedOut));
            state.apply(&Effect::Snooze);
        }
        assert!(state.satisfies(&Condition::SnoozedOut));
    }

    #[test]
    fn compound_conditions() {
        let mut state = GameState::default();
        let lucky = Condition::Any(&[
            Condition::Jackpot,
            Condition::Not(&Condition::DeviceConfiscated),
        ]);
        assert!(state.satisfies(&lucky));
        state.apply(&Effect::ConfiscateDevice);
        assert!(!state.satisfies(&lucky));
        state.apply(&Effect::CollectJackpot);
        assert!(state.satisfies(&Condition::All(&[
            Condition::Jackpot,
            Condition::DeviceConfiscated
        ])));
        assert!(!state.satisfies(&Condition::Insisted(1)));
        state.apply(&Effect::InsistOnGoingHome);
        assert!(state.satisfies(&Condition::Insisted(1)));
        assert!(!state.satisfies(&Condition::Insisted(2)));
    }

    #[test]
    fn hub_effects_are_not_state_effects() {
        let mut state = GameState::default();
        assert!(!state.apply(&Effect::UnlockHint(2)));
        assert!(!state.apply(&Effect::ReportStats));
        assert_eq!(state, GameState::default());
    }
}
