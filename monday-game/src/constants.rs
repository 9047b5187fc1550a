//! Centralized tuning constants for MONDAY.
//!
//! Gameplay thresholds and persistence identifiers live here so they can
//! only change through reviewed code, never through external assets.

// Gameplay -----------------------------------------------------------------
/// Cash awarded by Ed McMahon when your pants are dry.
pub const JACKPOT: u32 = 10_000_000;
/// Successful snoozes allowed before the next one oversleeps.
pub const SNOOZE_LIMIT: u8 = 2;
/// Number of rungs on the hint ladder.
pub const HINT_RUNGS: u8 = 4;
/// Fewest counted choices that reach the good ending.
pub const FEWEST_GOOD_ENDING_CHOICES: u32 = 40;
/// Counted choices on the jackpot route to the good ending.
pub const JACKPOT_GOOD_ENDING_CHOICES: u32 = 42;

// Persistence --------------------------------------------------------------
/// Passphrase hashed into the save file key.
pub(crate) const SAVE_PASSPHRASE: &str = "monday_secret_key_2025";
/// Default save file for the file backend.
pub const DEFAULT_SAVE_FILE: &str = "monday_save.dat";
/// Key used with host key/value bridges.
pub const BRIDGE_KEY: &str = "monday_stats";

// Narration ----------------------------------------------------------------
pub(crate) const DEFAULT_PAUSE_PROMPT: &str = "Press Enter to continue...";
pub(crate) const CHOICE_PROMPT: &str = "Enter your choice: ";
pub(crate) const INVALID_CHOICE: &str = "Invalid choice. Try again.";
pub(crate) const DEFAULT_WAIT_SECS: f32 = 2.0;
pub(crate) const CREDITS_LINE_SECS: f32 = 0.8;

// Logging keys -------------------------------------------------------------
pub(crate) const LOG_SAVE_FAILED: &str = "persist.save-failed";
pub(crate) const LOG_LOAD_RESET: &str = "persist.load-reset";
pub(crate) const LOG_UNKNOWN_DEATH: &str = "catalog.unknown-death";
pub(crate) const LOG_PERSIST_DISABLED: &str = "persist.disabled";
