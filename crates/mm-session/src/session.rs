//! Narrative session management.
//!
//! A `NarrativeSession` owns the only mutable state of a playthrough: the
//! player's name, their trait scores, and the scene they are in. The scene
//! repository is shared read-only, so one repository can back many sessions.

use std::fmt;
use std::sync::Arc;

use mm_core::{Scene, SceneId, SceneRepository};
use uuid::Uuid;

use crate::config::SessionConfig;
use crate::error::{SessionError, SessionResult};
use crate::mbti;
use crate::traits::TraitScores;

/// Unique identifier of a session, used to tell sessions apart in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Generate a new random session ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// A single playthrough of a story.
#[derive(Debug)]
pub struct NarrativeSession {
    id: SessionId,
    repository: Arc<SceneRepository>,
    player_name: String,
    scores: TraitScores,
    current: Arc<Scene>,
    turns: u32,
}

impl NarrativeSession {
    /// Start a session at the configured entry scene.
    ///
    /// Without an explicit entry the lowest scene id in the story is used.
    pub fn new(repository: Arc<SceneRepository>, config: SessionConfig) -> SessionResult<Self> {
        let entry = match config.entry_scene {
            Some(id) => id,
            None => repository.entry_scene_id().ok_or(SessionError::EmptyStory)?,
        };
        let current = repository.get(entry)?;
        let id = SessionId::new();

        tracing::debug!(session = %id, entry = %entry, player = %config.player_name, "session started");

        Ok(Self {
            id,
            repository,
            player_name: config.player_name,
            scores: config.baseline,
            current,
            turns: 0,
        })
    }

    /// This session's identifier.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// The story this session plays.
    pub fn repository(&self) -> &SceneRepository {
        &self.repository
    }

    /// The player character's display name.
    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    /// The scene the player is in.
    pub fn current_scene(&self) -> &Scene {
        &self.current
    }

    /// Identifier of the scene the player is in.
    pub fn current_scene_id(&self) -> SceneId {
        self.current.id()
    }

    /// Current trait scores.
    pub fn trait_scores(&self) -> TraitScores {
        self.scores
    }

    /// Four-letter personality label for the current scores.
    pub fn mbti_label(&self) -> String {
        mbti::resolve(&self.scores)
    }

    /// Number of choices made so far.
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Take the choice at the 1-based `choice_index` in the current scene.
    ///
    /// On success the choice's effect has been applied and the target scene
    /// is returned as the new current scene. On failure nothing changes: the
    /// player stays in the same scene with the same scores.
    pub fn advance(&mut self, choice_index: i64) -> SessionResult<&Scene> {
        let interactive = self.current.interactive();
        let available = interactive.choice_count();
        let choice = usize::try_from(choice_index)
            .ok()
            .and_then(|i| interactive.choice(i))
            .ok_or_else(|| {
                tracing::debug!(session = %self.id, index = choice_index, available, "choice out of range");
                SessionError::InvalidChoiceIndex {
                    index: choice_index,
                    available,
                }
            })?;

        let from = self.current.id();
        let target = choice.target();
        let next = self.repository.get(target).map_err(|_| {
            tracing::warn!(session = %self.id, from = %from, target = %target, "dangling scene reference");
            SessionError::DanglingSceneReference { from, target }
        })?;

        self.scores.apply_effect(choice.effect());
        self.current = next;
        self.turns += 1;

        tracing::debug!(
            session = %self.id,
            from = %from,
            to = %target,
            choice = choice_index,
            scores = %self.scores,
            "advanced"
        );
        Ok(&self.current)
    }
}
