//! Error types for the narrative session.

use mm_core::{CoreError, SceneId};
use thiserror::Error;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur while playing a story.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The player picked a choice outside `1..=available`.
    #[error("invalid choice {index}: pick a number from 1 to {available}")]
    InvalidChoiceIndex {
        /// The rejected input.
        index: i64,
        /// Number of choices in the current scene.
        available: usize,
    },

    /// A choice points at a scene that is not in the repository.
    #[error("scene {from} leads to scene {target}, which does not exist")]
    DanglingSceneReference {
        /// Scene the transition started from.
        from: SceneId,
        /// The missing target.
        target: SceneId,
    },

    /// The story has no scenes to start from.
    #[error("story has no scenes")]
    EmptyStory,

    /// Scene repository error.
    #[error("{0}")]
    Core(#[from] CoreError),
}
