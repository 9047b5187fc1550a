//! Plaintext save payload: JSON schema, legacy CSV fallback and merging.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::constants::HINT_RUNGS;
use crate::progress::ProgressStore;

/// Whitelisted progress fields as written to the envelope.
///
/// Every field is optional on the way in so that partial or older payloads
/// merge onto the in-memory defaults instead of replacing them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedProgress {
    #[serde(default, alias = "times_played", skip_serializing_if = "Option::is_none")]
    pub times_played: Option<u32>,
    #[serde(default, alias = "times_won", skip_serializing_if = "Option::is_none")]
    pub times_won: Option<u32>,
    #[serde(
        default,
        alias = "times_good_ending",
        alias = "timesGoodEnding",
        skip_serializing_if = "Option::is_none"
    )]
    pub times_good_endings: Option<u32>,
    #[serde(default, alias = "hints_seen", skip_serializing_if = "Option::is_none")]
    pub hints_seen: Option<u8>,
    #[serde(default, alias = "total_choices", skip_serializing_if = "Option::is_none")]
    pub total_choices: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deaths: Option<BTreeMap<String, SavedDeath>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedDeath {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discovered: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

/// Which format a payload was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadFormat {
    Structured,
    Legacy,
}

#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("payload is neither structured JSON nor a legacy stat list")]
    Unreadable,
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SavedProgress {
    #[must_use]
    pub fn capture(store: &ProgressStore) -> Self {
        let stats = &store.stats;
        let deaths = store
            .deaths
            .iter()
            .map(|entry| {
                (
                    entry.id.to_string(),
                    SavedDeath {
                        discovered: Some(entry.discovered),
                        count: Some(entry.count),
                    },
                )
            })
            .collect();
        Self {
            times_played: Some(stats.times_played),
            times_won: Some(stats.times_won),
            times_good_endings: Some(stats.times_good_ending),
            hints_seen: Some(stats.hints_seen),
            total_choices: Some(stats.total_choices),
            deaths: Some(deaths),
        }
    }

    /// Encode for encryption.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_bytes(&self) -> Result<Vec<u8>, PayloadError> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Decode a decrypted payload, trying a JSON object first and the
    /// comma-separated legacy list second.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::Unreadable`] when neither format parses.
    pub fn parse(bytes: &[u8]) -> Result<(Self, PayloadFormat), PayloadError> {
        if let Ok(value) = serde_json::from_slice::<serde_json::Value>(bytes) {
            // Arrays would otherwise fill the fields by position.
            if value.is_object() {
                let saved = serde_json::from_value(value)?;
                return Ok((saved, PayloadFormat::Structured));
            }
        }
        let text = std::str::from_utf8(bytes).map_err(|_| PayloadError::Unreadable)?;
        Self::parse_legacy(text)
            .map(|saved| (saved, PayloadFormat::Legacy))
            .ok_or(PayloadError::Unreadable)
    }

    /// `timesPlayed,timesWon,timesGoodEnding[,hintsSeen[,totalChoices]]`
    fn parse_legacy(text: &str) -> Option<Self> {
        let values = text
            .trim()
            .split(',')
            .map(|field| field.trim().parse::<u32>())
            .collect::<Result<Vec<_>, _>>()
            .ok()?;
        if values.len() < 3 {
            return None;
        }
        let field = |index: usize| values.get(index).copied().unwrap_or(0);
        Some(Self {
            times_played: Some(field(0)),
            times_won: Some(field(1)),
            times_good_endings: Some(field(2)),
            hints_seen: Some(u8::try_from(field(3)).unwrap_or(HINT_RUNGS)),
            total_choices: Some(field(4)),
            deaths: None,
        })
    }

    /// Deep-merge onto `store`: present fields overwrite, absent ones and
    /// catalog entries missing from the payload are kept, unknown death ids
    /// are ignored.
    pub fn merge_into(&self, store: &mut ProgressStore) {
        let stats = &mut store.stats;
        if let Some(value) = self.times_played {
            stats.times_played = value;
        }
        if let Some(value) = self.times_won {
            stats.times_won = value;
        }
        if let Some(value) = self.times_good_endings {
            stats.times_good_ending = value;
        }
        if let Some(value) = self.hints_seen {
            stats.hints_seen = value.min(HINT_RUNGS);
        }
        if let Some(value) = self.total_choices {
            stats.total_choices = value;
        }
        let Some(deaths) = &self.deaths else {
            return;
        };
        for (id, saved) in deaths {
            let Some(entry) = store.deaths.get_mut(id) else {
                log::debug!("ignoring saved death cause '{id}' missing from catalog");
                continue;
            };
            if let Some(discovered) = saved.discovered {
                entry.discovered = discovered;
            }
            if let Some(count) = saved.count {
                entry.count = count;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_three_fields_fill_missing_with_zero() {
        let (saved, format) = SavedProgress::parse(b"3,1,0").unwrap();
        assert_eq!(format, PayloadFormat::Legacy);
        let mut store = ProgressStore::default();
        saved.merge_into(&mut store);
        assert_eq!(store.stats.times_played, 3);
        assert_eq!(store.stats.times_won, 1);
        assert_eq!(store.stats.times_good_ending, 0);
        assert_eq!(store.stats.hints_seen, 0);
        assert_eq!(store.stats.total_choices, 0);
    }

    #[test]
    fn legacy_five_fields() {
        let (saved, _) = SavedProgress::parse(b" 9, 4 ,1,2,120\n").unwrap();
        assert_eq!(saved.hints_seen, Some(2));
        assert_eq!(saved.total_choices, Some(120));
    }

    #[test]
    fn garbage_is_unreadable() {
        for payload in [&b"3,1"[..], b"", b"a,b,c", b"3", b"null", b"\xff\xfe", b"[3,1,0]"] {
            assert!(
                matches!(SavedProgress::parse(payload), Err(PayloadError::Unreadable)),
                "{payload:?}"
            );
        }
    }

    #[test]
    fn json_array_is_not_a_save() {
        assert!(SavedProgress::parse(br#"[3, 1, 0, 2, 40]"#).is_err());
        assert!(SavedProgress::parse(br#"{"timesPlayed": [3]}"#).is_err());
    }

    #[test]
    fn structured_uses_camel_case_keys() {
        let mut store = ProgressStore::default();
        store.stats.times_good_ending = 2;
        store.record_death("seizure");
        let json: serde_json::Value =
            serde_json::from_slice(&SavedProgress::capture(&store).to_bytes().unwrap()).unwrap();
        assert_eq!(json["timesGoodEndings"], 2);
        assert_eq!(json["deaths"]["seizure"]["count"], 1);
        assert_eq!(json["deaths"]["seizure"]["discovered"], true);
        assert!(json.get("choicesCount").is_none());
    }

    #[test]
    fn snake_case_saves_still_load() {
        let payload = br#"{"times_played": 7, "times_won": 2, "times_good_ending": 1,
            "hints_seen": 3, "total_choices": 88,
            "deaths": {"anvil": {"discovered": true, "description": "old text", "count": 4}}}"#;
        let (saved, format) = SavedProgress::parse(payload).unwrap();
        assert_eq!(format, PayloadFormat::Structured);
        let mut store = ProgressStore::default();
        saved.merge_into(&mut store);
        assert_eq!(store.stats.times_played, 7);
        assert_eq!(store.stats.times_good_ending, 1);
        assert_eq!(store.stats.total_choices, 88);
        assert_eq!(store.deaths.get("anvil").unwrap().count, 4);
        assert_eq!(
            store.deaths.get("anvil").unwrap().description,
            "Found government secrets and met an anvil"
        );
    }

    #[test]
    fn partial_payload_keeps_catalog() {
        let mut store = ProgressStore::default();
        store.record_death("cement");
        store.record_death("cement");
        store.record_death("psycho");
        let catalog = store.deaths.clone();

        let (saved, _) = SavedProgress::parse(br#"{"timesPlayed": 5}"#).unwrap();
        saved.merge_into(&mut store);
        assert_eq!(store.stats.times_played, 5);
        assert_eq!(store.deaths, catalog);
    }

    #[test]
    fn unknown_and_partial_death_entries() {
        let mut store = ProgressStore::default();
        store.record_death("cement");
        let (saved, _) = SavedProgress::parse(
            br#"{"deaths": {"cement": {"count": 9},
                "dropped_in_v0": {"discovered": true, "count": 1}}}"#,
        )
        .unwrap();
        saved.merge_into(&mut store);
        let cement = store.deaths.get("cement").unwrap();
        assert!(cement.discovered);
        assert_eq!(cement.count, 9);
        assert!(!store.deaths.contains("dropped_in_v0"));
        assert_eq!(store.deaths.discovered(), 1);
    }

    #[test]
    fn oversized_hint_rung_is_clamped() {
        let (saved, _) = SavedProgress::parse(br#"{"hintsSeen": 12}"#).unwrap();
        let mut store = ProgressStore::default();
        saved.merge_into(&mut store);
        assert_eq!(store.stats.hints_seen, HINT_RUNGS);
    }
}
