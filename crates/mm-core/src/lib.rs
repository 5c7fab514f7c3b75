//! Scene graph model and scene repository for Mood Mystery.
//!
//! A story is a set of [`Scene`]s, each ending in a single decision point whose
//! [`Choice`]s point at other scenes. The [`SceneRepository`] loads a story
//! once, validates its schema, and is read-only afterwards, so any number of
//! sessions may share it.

/// Error types used throughout the crate.
pub mod error;
/// Wire schema of story files.
pub mod record;
/// Loading and indexing of scenes.
pub mod repository;
/// Immutable scene, dialogue, and choice records.
pub mod scene;

/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export the story file schema.
pub use record::SceneRecord;
/// Re-export repository types.
pub use repository::{DanglingReference, JsonFile, JsonReader, JsonStr, SceneRepository, SceneSource};
/// Re-export scene model types.
pub use scene::{AXIS_COUNT, Choice, DialogueLine, Effect, InteractiveSegment, Scene, SceneId};
