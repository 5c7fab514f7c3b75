//! Configuration for a narrative session.

use mm_core::{AXIS_COUNT, SceneId};

use crate::traits::TraitScores;

/// Name used when the player does not pick one.
pub const DEFAULT_PLAYER_NAME: &str = "MC";

/// Configuration for a narrative session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Display name of the player character.
    pub player_name: String,
    /// Scores the session starts with.
    pub baseline: TraitScores,
    /// Scene to start in. `None` picks the lowest scene id in the story.
    pub entry_scene: Option<SceneId>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            player_name: DEFAULT_PLAYER_NAME.to_string(),
            baseline: TraitScores::default(),
            entry_scene: None,
        }
    }
}

impl SessionConfig {
    /// Set the player name.
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = name.into();
        self
    }

    /// Set the starting scores (clamped to the valid range).
    pub fn with_baseline(mut self, values: [i32; AXIS_COUNT]) -> Self {
        self.baseline = TraitScores::new(values);
        self
    }

    /// Start in a specific scene.
    pub fn with_entry_scene(mut self, scene: SceneId) -> Self {
        self.entry_scene = Some(scene);
        self
    }
}
