//! Validated lookup table over the story script.
use std::collections::{BTreeMap, BTreeSet, VecDeque};

use crate::deaths::DEATH_CAUSES;
use crate::scene::{Exit, Outcome, Scene, SceneId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("scene {0} is defined more than once")]
    Duplicate(SceneId),
    #[error("scene {0} is not defined")]
    Missing(SceneId),
    #[error("scene {from} leads to undefined scene {to}")]
    DanglingTarget { from: SceneId, to: SceneId },
    #[error("scene {0} has a menu without choices")]
    EmptyMenu(SceneId),
    #[error("scene {scene} ends in unknown death cause '{cause}'")]
    UnknownDeath { scene: SceneId, cause: &'static str },
}

/// Scenes keyed by id. Construction checks every edge, so a lookup can only
/// fail for ids that were never part of the script.
#[derive(Debug, Clone)]
pub struct SceneGraph {
    scenes: BTreeMap<SceneId, &'static Scene>,
}

impl SceneGraph {
    /// Index and validate `script`.
    ///
    /// # Errors
    ///
    /// Returns the first duplicate id, dangling target, empty menu or
    /// unknown death cause found.
    pub fn new(script: &'static [Scene]) -> Result<Self, GraphError> {
        let mut scenes = BTreeMap::new();
        for scene in script {
            if scenes.insert(scene.id, scene).is_some() {
                return Err(GraphError::Duplicate(scene.id));
            }
        }
        for scene in script {
            match scene.exit {
                Exit::Menu(menu) if menu.choices.is_empty() => {
                    return Err(GraphError::EmptyMenu(scene.id));
                }
                Exit::Outcome(Outcome::Death(cause))
                    if !DEATH_CAUSES.iter().any(|(id, _)| *id == cause) =>
                {
                    return Err(GraphError::UnknownDeath {
                        scene: scene.id,
                        cause,
                    });
                }
                _ => {}
            }
            if let Some(to) = scene.targets().into_iter().find(|t| !scenes.contains_key(t)) {
                return Err(GraphError::DanglingTarget { from: scene.id, to });
            }
        }
        Ok(Self { scenes })
    }

    /// # Errors
    ///
    /// Returns [`GraphError::Missing`] if `id` is not in the script.
    pub fn scene(&self, id: SceneId) -> Result<&'static Scene, GraphError> {
        self.scenes.get(&id).copied().ok_or(GraphError::Missing(id))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    pub fn scenes(&self) -> impl Iterator<Item = &'static Scene> + '_ {
        self.scenes.values().copied()
    }

    /// Every scene reachable from `start`, following all exits.
    #[must_use]
    pub fn reachable_from(&self, start: SceneId) -> BTreeSet<SceneId> {
        let mut seen = BTreeSet::new();
        let mut queue = VecDeque::from([start]);
        while let Some(id) = queue.pop_front() {
            if !seen.insert(id) {
                continue;
            }
            if let Some(scene) = self.scenes.get(&id) {
                queue.extend(scene.targets());
            }
        }
        seen
    }

    /// Death causes some scene can end in.
    #[must_use]
    pub fn death_causes(&self) -> BTreeSet<&'static str> {
        self.scenes
            .values()
            .filter_map(|scene| match scene.exit {
                Exit::Outcome(Outcome::Death(cause)) => Some(cause),
                _ => None,
            })
            .collect()
    }
}
