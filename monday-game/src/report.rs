//! The POINTLESS INFO screen: lifetime stats read back to the player.
use crate::constants::{DEFAULT_WAIT_SECS, FEWEST_GOOD_ENDING_CHOICES, JACKPOT_GOOD_ENDING_CHOICES};
use crate::progress::ProgressStore;

/// One step of the report. Waits are in seconds before pacing.
#[derive(Debug, Clone, PartialEq)]
pub enum Cue {
    Say(String),
    Wait(f32),
    Pause,
}

fn once_or_times(count: u32, punctuation: &str) -> String {
    if count == 1 {
        format!("ONCE{punctuation}")
    } else {
        format!("{count} TIMES{punctuation}")
    }
}

const fn plural(count: u32) -> &'static str {
    if count == 1 { "" } else { "S" }
}

/// Veterans sit through shorter pauses: 18% less per ten plays, at most 90%.
fn wait_coefficient(times_played: u32) -> f32 {
    let tens = (times_played / 10).min(5) as f32;
    1.0 - tens * 0.18
}

/// Build the report for `store`.
#[must_use]
pub fn stats_report(store: &ProgressStore) -> Vec<Cue> {
    let stats = &store.stats;
    let coefficient = wait_coefficient(stats.times_played);
    let mut cues = Vec::new();
    let say = |cues: &mut Vec<Cue>, text: String| cues.push(Cue::Say(text));
    let wait = |cues: &mut Vec<Cue>, secs: f32| cues.push(Cue::Wait(secs * coefficient));

    say(&mut cues, "\nHERE'S SOME USELESS INFORMATION.".into());
    cues.push(Cue::Pause);
    say(
        &mut cues,
        format!("YOU HAVE PLAYED THIS GAME {}", once_or_times(stats.times_played, ".")),
    );
    wait(&mut cues, 1.0);
    if stats.times_played == 0 {
        say(&mut cues, "WHAT ARE YOU WAITING FOR? START THE GAME.".into());
        if stats.hints_seen > 0 {
            wait(&mut cues, 1.0);
            say(
                &mut cues,
                "\nWAIT! YOU CHECKED OUT HINTS BEFORE EVEN TRYING THE GAME?? HOW LAME. ┑(￣Д ￣)┍"
                    .into(),
            );
            wait(&mut cues, 4.0);
        }
        return cues;
    }

    if stats.choices_count > 0 {
        say(
            &mut cues,
            format!(
                "YOU HAVE MADE {} CHOICE{} THIS ROUND.",
                stats.choices_count,
                plural(stats.choices_count)
            ),
        );
    }
    wait(&mut cues, 1.0);
    if stats.total_choices > 0 && stats.total_choices != stats.choices_count {
        say(
            &mut cues,
            format!(
                "YOU HAVE MADE {} CHOICE{}{}.",
                stats.total_choices,
                plural(stats.total_choices),
                if stats.choices_count == 0 { "" } else { ", IN TOTAL" }
            ),
        );
    }
    wait(&mut cues, 1.0);
    let suspicious = if stats.times_won > stats.times_played { " >_> <_<" } else { "" };
    say(
        &mut cues,
        format!("YOU HAVE WON {}{suspicious}", once_or_times(stats.times_won, ".")),
    );
    wait(&mut cues, 1.0);
    if stats.hints_seen > 0 {
        let hints = u32::from(stats.hints_seen);
        let count = if hints == 1 { "ONLY ONE".to_string() } else { hints.to_string() };
        say(&mut cues, format!("YOU HAVE VIEWED {count} HINT{}.", plural(hints)));
    }
    wait(&mut cues, 1.5);

    if stats.times_good_ending > 0 {
        say(
            &mut cues,
            format!(
                "AND YOU ACTUALLY WON {} NOT THAT FAKE PARTICIPATION MEDAL WIN.",
                once_or_times(stats.times_good_ending, "!")
            ),
        );
        wait(&mut cues, 1.0);
        if stats.total_choices == FEWEST_GOOD_ENDING_CHOICES {
            say(
                &mut cues,
                "WOW! YOU SMASHED THE GOOD ENDING IN THE MINIMUM POSSIBLE CHOICES!".into(),
            );
            wait(&mut cues, 3.0);
            say(&mut cues, "YOU ROCK!!!".into());
            wait(&mut cues, 4.0);
        } else if stats.total_choices == JACKPOT_GOOD_ENDING_CHOICES {
            say(
                &mut cues,
                "WOW! YOU FORCED THE GOOD ENDING IN ALMOST THE LEAST AMOUNT OF CHOICES!".into(),
            );
            say(&mut cues, "THINK YOU CAN DO IT IN LESS?".into());
            wait(&mut cues, 3.0);
        }
        if stats.hints_seen == 0 {
            say(
                &mut cues,
                "HOLY CRAP! AND YOU DID IT WITHOUT ANY HINTS! IMPRESSIVE!!".into(),
            );
            cues.push(Cue::Wait(DEFAULT_WAIT_SECS));
        }
    }

    let discovered = store.deaths.discovered();
    if discovered == 0 {
        wait(&mut cues, 1.0);
        say(
            &mut cues,
            "\nYOU HAVEN'T DISCOVERED ANY DEATHS YET. WHAT KIND OF MONDAY PLAYER ARE YOU?".into(),
        );
        say(
            &mut cues,
            "THERE ARE SO MANY WAYS TO DIE, AND YOU HAVEN'T FOUND A SINGLE ONE! ¯\\_(ツ)_/¯".into(),
        );
    } else {
        if discovered == store.deaths.len() {
            wait(&mut cues, 1.0);
            say(
                &mut cues,
                "\nINCREDIBLE! YOU'VE DISCOVERED EVERY POSSIBLE WAY TO DIE!".into(),
            );
            say(
                &mut cues,
                "YOU ARE THE ULTIMATE MASTER OF MONDAY MAYHEM! (╯°□°）╯︵ ┻━┻".into(),
            );
        }
        say(
            &mut cues,
            format!(
                "\nYOU'VE DISCOVERED {discovered} UNIQUE WAY{} TO DIE!",
                if discovered == 1 { "" } else { "S" }
            ),
        );
        wait(&mut cues, 1.0);
        for entry in store.deaths.iter().filter(|entry| entry.discovered) {
            say(
                &mut cues,
                format!(
                    "- {} {}",
                    entry.description.to_uppercase(),
                    once_or_times(entry.count, "")
                ),
            );
            wait(&mut cues, 0.5);
        }
        wait(&mut cues, 1.0);
    }

    if stats.times_won == 0 {
        if stats.total_choices > 20 {
            say(&mut cues, "\nYOU'RE WELL ON YOUR WAY. KEEP GOING!".into());
        } else {
            say(&mut cues, "\nKEEP ON TRYING.".into());
        }
    } else if stats.times_good_ending == 0 {
        say(&mut cues, "YOU'RE GETTING THE HANG OF IT.".into());
    }
    wait(&mut cues, 1.0);
    cues
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(cues: &[Cue]) -> Vec<&str> {
        cues.iter()
            .filter_map(|cue| match cue {
                Cue::Say(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn first_run_report_is_short() {
        let cues = stats_report(&ProgressStore::default());
        assert_eq!(
            lines(&cues),
            [
                "\nHERE'S SOME USELESS INFORMATION.",
                "YOU HAVE PLAYED THIS GAME 0 TIMES.",
                "WHAT ARE YOU WAITING FOR? START THE GAME.",
            ]
        );
    }

    #[test]
    fn hints_before_playing_are_mocked() {
        let mut store = ProgressStore::default();
        store.unlock_hint(1);
        let cues = stats_report(&store);
        assert!(lines(&cues).iter().any(|line| line.contains("HOW LAME")));
    }

    #[test]
    fn lists_discovered_deaths_in_catalog_order() {
        let mut store = ProgressStore::default();
        store.begin_playthrough();
        store.record_death("cement");
        store.record_death("oversleeping");
        store.record_death("oversleeping");
        let cues = stats_report(&store);
        let text = lines(&cues);
        assert!(text.contains(&"YOU HAVE PLAYED THIS GAME ONCE."));
        assert!(text.contains(&"\nYOU'VE DISCOVERED 2 UNIQUE WAYS TO DIE!"));
        let oversleeping = text
            .iter()
            .position(|l| *l == "- OVERSLEPT AND MISSED THE BUS 2 TIMES")
            .unwrap();
        let cement = text
            .iter()
            .position(|l| *l == "- SAT IN WET CEMENT AT BUS STOP ONCE")
            .unwrap();
        assert!(oversleeping < cement);
        assert!(text.contains(&"\nKEEP ON TRYING."));
    }

    #[test]
    fn minimum_choice_good_ending_is_celebrated() {
        let mut store = ProgressStore::default();
        store.begin_playthrough();
        for _ in 0..FEWEST_GOOD_ENDING_CHOICES {
            store.count_choice();
        }
        store.record_win(true);
        let text = stats_report(&store);
        let text = lines(&text);
        assert!(text.contains(&"YOU HAVE MADE 40 CHOICES THIS ROUND."));
        assert!(text.contains(&"AND YOU ACTUALLY WON ONCE! NOT THAT FAKE PARTICIPATION MEDAL WIN."));
        assert!(text.contains(&"WOW! YOU SMASHED THE GOOD ENDING IN THE MINIMUM POSSIBLE CHOICES!"));
        assert!(text.contains(&"HOLY CRAP! AND YOU DID IT WITHOUT ANY HINTS! IMPRESSIVE!!"));
        assert!(!text.iter().any(|l| l.contains("IN TOTAL")));
    }

    #[test]
    fn waits_shrink_for_veterans() {
        assert!((wait_coefficient(0) - 1.0).abs() < f32::EPSILON);
        assert!((wait_coefficient(25) - 0.64).abs() < 1e-6);
        assert!((wait_coefficient(500) - 0.1).abs() < 1e-6);
    }
}
