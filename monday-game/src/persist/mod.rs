//! Encrypted, schema-tolerant persistence for the [`ProgressStore`].
//!
//! A save is the JSON [`SavedProgress`] sealed by [`Cipher`] and handed to a
//! [`StorageBackend`] as one opaque blob. Loading never fails the game:
//! anything unreadable resets progress to defaults.
mod cipher;
mod payload;
mod storage;

pub use cipher::{Cipher, CipherError};
pub use payload::{PayloadError, PayloadFormat, SavedDeath, SavedProgress};
pub use storage::{
    BridgeStorage, FileStorage, KeyValueBridge, MemoryBridge, StorageBackend, StorageError,
};

use log::{debug, info, warn};

use crate::constants::{LOG_LOAD_RESET, LOG_PERSIST_DISABLED, SAVE_PASSPHRASE};
use crate::progress::ProgressStore;

type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("storage backend failed: {0}")]
    Storage(#[source] BoxedError),
    #[error(transparent)]
    Cipher(#[from] CipherError),
    #[error(transparent)]
    Payload(#[from] PayloadError),
}

impl PersistError {
    fn storage(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Box::new(error))
    }
}

/// What [`Persistence::load`] found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Built without encryption; nothing was read.
    Disabled,
    /// No save yet.
    Missing,
    Restored(PayloadFormat),
    /// The save was unreadable and progress went back to defaults.
    Reset,
}

#[derive(Debug)]
pub struct Persistence<S: StorageBackend> {
    storage: S,
    cipher: Option<Cipher>,
}

impl<S: StorageBackend> Persistence<S> {
    /// Wrap `storage` with the game's save key.
    ///
    /// When encryption is compiled out this logs once and every later call
    /// becomes a no-op.
    pub fn new(storage: S) -> Self {
        let cipher = Cipher::from_passphrase(SAVE_PASSPHRASE);
        if cipher.is_none() {
            warn!(
                target: LOG_PERSIST_DISABLED,
                "encryption unavailable; progress will not be saved"
            );
        }
        Self { storage, cipher }
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.cipher.is_some()
    }

    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Seal the whitelisted fields of `store` and overwrite the blob.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding, encryption or the backend write fails.
    /// Callers log it and keep playing.
    pub fn save(&self, store: &ProgressStore) -> Result<(), PersistError> {
        let Some(cipher) = &self.cipher else {
            return Ok(());
        };
        let bytes = SavedProgress::capture(store).to_bytes()?;
        let token = cipher.seal(&bytes)?;
        self.storage
            .write(token.as_bytes())
            .map_err(PersistError::storage)?;
        debug!(
            "saved progress: played={} won={} choices={}",
            store.stats.times_played, store.stats.times_won, store.stats.total_choices
        );
        Ok(())
    }

    /// Merge the saved blob into `store`.
    ///
    /// A read, decryption or parse failure resets `store` to defaults.
    pub fn load(&self, store: &mut ProgressStore) -> LoadOutcome {
        let Some(cipher) = &self.cipher else {
            return LoadOutcome::Disabled;
        };
        match self.read_saved(cipher) {
            Ok(None) => {
                info!("no saved progress found");
                LoadOutcome::Missing
            }
            Ok(Some((saved, format))) => {
                saved.merge_into(store);
                info!("restored progress ({format:?}), played {} times", store.stats.times_played);
                LoadOutcome::Restored(format)
            }
            Err(error) => {
                warn!(target: LOG_LOAD_RESET, "saved progress unreadable, starting fresh: {error}");
                store.reset();
                LoadOutcome::Reset
            }
        }
    }

    fn read_saved(
        &self,
        cipher: &Cipher,
    ) -> Result<Option<(SavedProgress, PayloadFormat)>, PersistError> {
        let Some(blob) = self.storage.read().map_err(PersistError::storage)? else {
            return Ok(None);
        };
        let plaintext = cipher.open(&blob)?;
        Ok(Some(SavedProgress::parse(&plaintext)?))
    }

    /// Reset `store` and erase the stored blob.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot erase; `store` is reset anyway.
    pub fn clear(&self, store: &mut ProgressStore) -> Result<(), PersistError> {
        store.reset();
        if self.cipher.is_none() {
            return Ok(());
        }
        self.storage.erase().map_err(PersistError::storage)
    }
}

#[cfg(all(test, feature = "encryption"))]
mod tests {
    use super::*;
    use crate::constants::BRIDGE_KEY;

    fn persistence() -> (Persistence<BridgeStorage<MemoryBridge>>, MemoryBridge) {
        let bridge = MemoryBridge::default();
        (Persistence::new(BridgeStorage::new(bridge.clone())), bridge)
    }

    fn seal(plaintext: &[u8]) -> String {
        Cipher::from_passphrase(SAVE_PASSPHRASE)
            .unwrap()
            .seal(plaintext)
            .unwrap()
    }

    #[test]
    fn save_then_load_restores_everything_but_session_choices() {
        let (persistence, _) = persistence();
        let mut store = ProgressStore::default();
        store.begin_playthrough();
        store.count_choice();
        store.unlock_hint(2);
        store.record_death("cement");
        store.record_win(true);
        persistence.save(&store).unwrap();

        let mut loaded = ProgressStore::default();
        assert_eq!(
            persistence.load(&mut loaded),
            LoadOutcome::Restored(PayloadFormat::Structured)
        );
        assert_eq!(loaded.deaths, store.deaths);
        assert_eq!(loaded.stats.times_good_ending, 1);
        assert_eq!(loaded.stats.hints_seen, 2);
        assert_eq!(loaded.stats.total_choices, 1);
        assert_eq!(loaded.stats.choices_count, 0);
    }

    #[test]
    fn missing_save_leaves_defaults() {
        let (persistence, _) = persistence();
        let mut store = ProgressStore::default();
        assert_eq!(persistence.load(&mut store), LoadOutcome::Missing);
        assert_eq!(store, ProgressStore::default());
    }

    #[test]
    fn corrupted_blob_resets() {
        let (persistence, bridge) = persistence();
        bridge.insert(BRIDGE_KEY, "this is not a token");
        let mut store = ProgressStore::default();
        store.begin_playthrough();
        assert_eq!(persistence.load(&mut store), LoadOutcome::Reset);
        assert_eq!(store, ProgressStore::default());
    }

    #[test]
    fn legacy_token_loads() {
        let (persistence, bridge) = persistence();
        bridge.insert(BRIDGE_KEY, seal(b"3,1,0"));
        let mut store = ProgressStore::default();
        assert_eq!(
            persistence.load(&mut store),
            LoadOutcome::Restored(PayloadFormat::Legacy)
        );
        assert_eq!(store.stats.times_played, 3);
        assert_eq!(store.stats.times_won, 1);
    }

    #[test]
    fn undecodable_plaintext_resets() {
        let (persistence, bridge) = persistence();
        bridge.insert(BRIDGE_KEY, seal(b"3,1"));
        let mut store = ProgressStore::default();
        store.record_death("anvil");
        assert_eq!(persistence.load(&mut store), LoadOutcome::Reset);
        assert_eq!(store.deaths.discovered(), 0);
    }

    #[test]
    fn clear_erases_blob_and_resets() {
        let (persistence, bridge) = persistence();
        let mut store = ProgressStore::default();
        store.begin_playthrough();
        persistence.save(&store).unwrap();
        assert!(bridge.get(BRIDGE_KEY).is_some());

        persistence.clear(&mut store).unwrap();
        assert!(bridge.get(BRIDGE_KEY).is_none());
        assert_eq!(store, ProgressStore::default());
        let mut reloaded = ProgressStore::default();
        assert_eq!(persistence.load(&mut reloaded), LoadOutcome::Missing);
    }
}

#[cfg(all(test, not(feature = "encryption")))]
mod disabled_tests {
    use super::*;
    use crate::constants::BRIDGE_KEY;

    #[test]
    fn without_encryption_everything_is_a_no_op() {
        let bridge = MemoryBridge::default();
        bridge.insert(BRIDGE_KEY, "garbage");
        let persistence = Persistence::new(BridgeStorage::new(bridge.clone()));
        assert!(!persistence.is_enabled());

        let mut store = ProgressStore::default();
        store.begin_playthrough();
        let before = store.clone();
        assert_eq!(persistence.load(&mut store), LoadOutcome::Disabled);
        assert_eq!(store, before);

        persistence.save(&store).unwrap();
        assert_eq!(bridge.get(BRIDGE_KEY).as_deref(), Some("garbage"));

        persistence.clear(&mut store).unwrap();
        assert_eq!(store, ProgressStore::default());
        assert_eq!(bridge.get(BRIDGE_KEY).as_deref(), Some("garbage"));
    }
}
