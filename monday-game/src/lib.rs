//! MONDAY Game Engine
//!
//! Platform-agnostic core for MONDAY, a text adventure about surviving the
//! worst day of the week. This crate holds the story graph, choice dispatch,
//! per-run state and encrypted lifetime progress, with no terminal or
//! browser dependencies.

pub mod constants;
pub mod deaths;
pub mod dispatch;
pub mod engine;
pub mod graph;
pub mod host;
pub mod persist;
pub mod progress;
pub mod report;
pub mod scene;
pub mod script;
pub mod state;

// Re-export commonly used types
pub use deaths::{DEATH_CAUSES, DeathCatalog, DeathEntry, DeathRecord};
pub use dispatch::{choose, parse_selection, render};
pub use engine::{Engine, EngineConfig, EngineError};
pub use graph::{GraphError, SceneGraph};
pub use host::{Host, HostError, ScriptedHost};
pub use persist::{
    BridgeStorage, Cipher, CipherError, FileStorage, KeyValueBridge, LoadOutcome, MemoryBridge,
    PayloadError, PayloadFormat, PersistError, Persistence, SavedDeath, SavedProgress,
    StorageBackend, StorageError,
};
pub use progress::{ProgressStore, StatsRecord};
pub use report::{Cue, stats_report};
pub use scene::{Beat, Choice, Condition, Effect, Exit, Menu, Outcome, Scene, SceneId};
pub use script::{CREDITS, SCRIPT};
pub use state::GameState;
