//! Drives the story: narration, effects, exits and scoring.
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::constants::{CREDITS_LINE_SECS, DEFAULT_PAUSE_PROMPT, HINT_RUNGS, LOG_SAVE_FAILED};
use crate::deaths::DeathRecord;
use crate::dispatch;
use crate::graph::{GraphError, SceneGraph};
use crate::host::{Host, HostError};
use crate::persist::{LoadOutcome, PersistError, Persistence, StorageBackend};
use crate::progress::ProgressStore;
use crate::report::{Cue, stats_report};
use crate::scene::{Beat, Effect, Exit, Outcome, Scene, SceneId};
use crate::script::{CREDITS, SCRIPT};
use crate::state::GameState;

const GAME_OVER: &str = "\n---GAME--OVER---\nMONDAY HAS CLAIMED ANOTHER VICTIM!\n\nTRY AGAIN!";
const RETURN_PROMPT: &str = "Press Enter to return to the main menu...";

/// Runtime knobs, loadable from JSON.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Multiplier applied to every pacing delay; 0 disables them.
    pub pace: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { pace: 1.0 }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error(transparent)]
    Host(#[from] HostError),
}

impl EngineError {
    /// The player went away; not a failure.
    #[must_use]
    pub const fn is_input_closed(&self) -> bool {
        matches!(self, Self::Host(HostError::InputClosed))
    }
}

/// The game: scene graph, per-run state and lifetime progress.
#[derive(Debug)]
pub struct Engine<S: StorageBackend> {
    graph: SceneGraph,
    persistence: Persistence<S>,
    progress: ProgressStore,
    state: GameState,
    config: EngineConfig,
}

impl<S: StorageBackend> Engine<S> {
    /// Engine over the built-in story.
    ///
    /// # Errors
    ///
    /// Returns an error if the story fails validation.
    pub fn new(storage: S, config: EngineConfig) -> Result<Self, GraphError> {
        Self::with_script(SCRIPT, storage, config)
    }

    /// Engine over a custom scene table.
    ///
    /// # Errors
    ///
    /// Returns an error if `script` fails validation.
    pub fn with_script(
        script: &'static [Scene],
        storage: S,
        config: EngineConfig,
    ) -> Result<Self, GraphError> {
        Ok(Self {
            graph: SceneGraph::new(script)?,
            persistence: Persistence::new(storage),
            progress: ProgressStore::default(),
            state: GameState::default(),
            config,
        })
    }

    /// Merge saved progress into memory. Call once before playing.
    pub fn load(&mut self) -> LoadOutcome {
        self.persistence.load(&mut self.progress)
    }

    #[must_use]
    pub const fn progress(&self) -> &ProgressStore {
        &self.progress
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub const fn persistence(&self) -> &Persistence<S> {
        &self.persistence
    }

    #[must_use]
    pub const fn config(&self) -> EngineConfig {
        self.config
    }

    #[must_use]
    pub const fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    /// Wipe saved and in-memory progress, then save the fresh defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored blob cannot be erased or rewritten.
    /// Progress is reset and the write is attempted either way.
    pub fn clear_progress(&mut self) -> Result<(), PersistError> {
        let erased = self.persistence.clear(&mut self.progress);
        let saved = self.persistence.save(&self.progress);
        erased.and(saved)
    }

    /// Play from the title screen until the player quits.
    ///
    /// # Errors
    ///
    /// Returns host failures (including closed input) and lookup errors.
    pub async fn run<H: Host + ?Sized>(&mut self, host: &mut H) -> Result<(), EngineError> {
        self.run_from(SceneId::Title, host).await
    }

    /// Play from `start` until the player quits.
    ///
    /// # Errors
    ///
    /// Returns host failures (including closed input) and lookup errors.
    pub async fn run_from<H: Host + ?Sized>(
        &mut self,
        start: SceneId,
        host: &mut H,
    ) -> Result<(), EngineError> {
        let mut current = start;
        while self.state.running {
            current = self.enter(current, host).await?;
        }
        host.output("Thanks for playing!").await?;
        Ok(())
    }

    /// Narrate `id`, apply its effects and resolve where it leads.
    ///
    /// # Errors
    ///
    /// Returns host failures and [`GraphError::Missing`] for unknown ids.
    pub async fn enter<H: Host + ?Sized>(
        &mut self,
        id: SceneId,
        host: &mut H,
    ) -> Result<SceneId, EngineError> {
        let scene = self.graph.scene(id)?;
        debug!("entering {id}");

        for effect in scene.effects.iter().filter(|effect| effect.on_entry()) {
            self.apply(*effect, host).await?;
        }

        let mut beats = Vec::with_capacity(scene.beats.len());
        self.flatten(scene.beats, &mut beats);
        for beat in beats {
            match *beat {
                Beat::Say(text) => host.output(text).await?,
                Beat::Pause => host.pause(DEFAULT_PAUSE_PROMPT).await?,
                Beat::PauseWith(prompt) => host.pause(prompt).await?,
                Beat::Wait(secs) => self.wait(host, secs).await,
                Beat::When(..) => {}
            }
        }

        for effect in scene.effects.iter().filter(|effect| !effect.on_entry()) {
            self.apply(*effect, host).await?;
        }

        let next = match scene.exit {
            Exit::Next(next) => next,
            Exit::Branch {
                when,
                then,
                otherwise,
            } => {
                if self.state.satisfies(&when) {
                    then
                } else {
                    otherwise
                }
            }
            Exit::Menu(menu) => {
                let choice = dispatch::choose(host, &menu).await?;
                if menu.counted {
                    self.progress.count_choice();
                    self.save();
                }
                choice.target
            }
            Exit::Outcome(outcome) => {
                self.conclude(outcome, host).await?;
                SceneId::MainMenu
            }
            Exit::Return => SceneId::MainMenu,
        };
        Ok(next)
    }

    /// Print the stats report outside the menu loop, without pauses.
    ///
    /// # Errors
    ///
    /// Returns host failures.
    pub async fn show_stats<H: Host + ?Sized>(&self, host: &mut H) -> Result<(), EngineError> {
        self.report(host, false).await
    }

    async fn report<H: Host + ?Sized>(
        &self,
        host: &mut H,
        interactive: bool,
    ) -> Result<(), EngineError> {
        for cue in stats_report(&self.progress) {
            match cue {
                Cue::Say(text) => host.output(&text).await?,
                Cue::Wait(secs) => self.wait(host, secs).await,
                Cue::Pause if interactive => host.pause(DEFAULT_PAUSE_PROMPT).await?,
                Cue::Pause => {}
            }
        }
        Ok(())
    }

    /// Conditional beats resolved against the current state, in order.
    fn flatten(&self, beats: &'static [Beat], out: &mut Vec<&'static Beat>) {
        for beat in beats {
            match beat {
                Beat::When(condition, inner) => {
                    if self.state.satisfies(condition) {
                        self.flatten(inner, out);
                    }
                }
                _ => out.push(beat),
            }
        }
    }

    async fn wait<H: Host + ?Sized>(&self, host: &mut H, secs: f32) {
        let secs = secs * self.config.pace;
        if secs > 0.0 {
            host.delay(secs).await;
        }
    }

    fn save(&self) {
        if let Err(error) = self.persistence.save(&self.progress) {
            warn!(target: LOG_SAVE_FAILED, "could not save progress: {error}");
        }
    }

    async fn apply<H: Host + ?Sized>(
        &mut self,
        effect: Effect,
        host: &mut H,
    ) -> Result<(), EngineError> {
        match effect {
            Effect::BeginPlaythrough => {
                self.progress.begin_playthrough();
                self.state.restart();
                info!("playthrough {} begins", self.progress.stats.times_played);
            }
            Effect::UnlockHint(rung) => {
                if self.progress.unlock_hint(rung) {
                    self.save();
                }
            }
            Effect::ReportStats => self.report(host, true).await?,
            Effect::ClearProgress => {
                if let Err(error) = self.clear_progress() {
                    warn!(target: LOG_SAVE_FAILED, "could not reset saved progress: {error}");
                }
                host.output("Save cleared.").await?;
            }
            Effect::Quit => {
                self.save();
                let stats = &self.progress.stats;
                if stats.times_played == 0 {
                    host.output("\n     LOSER\n   YOU DIDN'T\n EVEN START YET").await?;
                } else {
                    host.output("\nTHANKS FOR PLAYING MONDAY!").await?;
                    if stats.times_good_ending > 0 {
                        host.output("YOU'RE A CHAMPION!!\n").await?;
                    }
                }
                self.state.apply(&effect);
                self.wait(host, 1.0).await;
            }
            Effect::Snooze
            | Effect::WetPants
            | Effect::CollectJackpot
            | Effect::ConfiscateDevice
            | Effect::InsistOnGoingHome => {
                self.state.apply(&effect);
            }
        }
        Ok(())
    }

    async fn conclude<H: Host + ?Sized>(
        &mut self,
        outcome: Outcome,
        host: &mut H,
    ) -> Result<(), EngineError> {
        match outcome {
            Outcome::Death(cause) => {
                info!(
                    "death '{cause}' after {} choices",
                    self.progress.stats.choices_count
                );
                if let DeathRecord::Discovered(description) = self.progress.record_death(cause) {
                    host.output(&format!("\nNew death discovered: {description}"))
                        .await?;
                }
                self.save();
                host.output(GAME_OVER).await?;
                host.pause(DEFAULT_PAUSE_PROMPT).await?;
            }
            Outcome::StandardWin | Outcome::GoodEnding => {
                let good = outcome == Outcome::GoodEnding;
                info!(
                    "{} after {} choices",
                    if good { "good ending" } else { "credits" },
                    self.progress.stats.choices_count
                );
                self.progress.record_win(good);
                self.save();
                self.roll_credits(host).await?;
            }
        }
        Ok(())
    }

    async fn roll_credits<H: Host + ?Sized>(&mut self, host: &mut H) -> Result<(), EngineError> {
        for line in CREDITS {
            host.output(line).await?;
            self.wait(host, CREDITS_LINE_SECS).await;
        }
        let stats = &self.progress.stats;
        if stats.times_good_ending == 0 {
            return Ok(());
        }
        let hints_seen = stats.hints_seen;
        host.output("").await?;
        if hints_seen == 0 {
            host.output("HEY...").await?;
            self.wait(host, 5.0).await;
            host.output(
                "WE WANTED TO TAKE A MOMENT TO COMMEND YOU ON YOUR GRIT AND PERSEVERANCE",
            )
            .await?;
            self.wait(host, 3.0).await;
            host.output(
                "WHICH YOU UTILIZED TO THEIR FULLEST TO COMPLETE MONDAY WITHOUT *ANY* HINTS!",
            )
            .await?;
            self.wait(host, 6.0).await;
            host.output("\n\n\tWELL DONE CHAMP! (GOLF CLAP)").await?;
        } else if hints_seen < HINT_RUNGS {
            host.output(
                "CONGRATS, YOU WON WITHOUT PEEKING AT ALL THE HINTS!\nEITHER YOU'RE LUCKY, A GENIUS, OR YOU REALLY NEED TO GET OUT OF MY HEAD.",
            )
            .await?;
        }
        host.output("").await?;
        host.pause(RETURN_PROMPT).await?;
        Ok(())
    }
}
