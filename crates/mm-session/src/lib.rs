//! Narrative session, trait scoring, and personality resolution for Mood Mystery.
//!
//! A [`NarrativeSession`] walks a shared [`mm_core::SceneRepository`]: each turn
//! the player picks a 1-based choice, its effect is added to the four
//! [`TraitScores`] (clamped to -10..=10), and the story moves to the choice's
//! target scene. At the end [`mbti::resolve`] turns the scores into a
//! four-letter label.

/// Session configuration.
pub mod config;
/// Error types for the session engine.
pub mod error;
/// Four-letter label resolution.
pub mod mbti;
/// Narrative session state and transitions.
pub mod session;
/// Personality axes and clamped scores.
pub mod traits;

pub use config::SessionConfig;
pub use error::{SessionError, SessionResult};
pub use session::{NarrativeSession, SessionId};
pub use traits::{Axis, SCORE_MAX, SCORE_MIN, TraitScores};
