use std::path::PathBuf;

use crate::scene::SceneId;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while loading or querying scene data.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A scene record is missing a required field or a field has the wrong type.
    #[error("malformed scene data{}: {reason}", scene_label(.scene_id))]
    MalformedSceneData {
        /// The offending scene, if its identifier could be read.
        scene_id: Option<SceneId>,
        /// What was wrong with the record.
        reason: String,
    },

    /// No scene with the requested identifier exists in the repository.
    #[error("scene not found: {0}")]
    SceneNotFound(SceneId),

    /// The scene source could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// Path of the source that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

impl CoreError {
    pub(crate) fn malformed(scene_id: Option<SceneId>, reason: impl Into<String>) -> Self {
        Self::MalformedSceneData {
            scene_id,
            reason: reason.into(),
        }
    }
}

fn scene_label(scene_id: &Option<SceneId>) -> String {
    match scene_id {
        Some(id) => format!(" in scene {id}"),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_message_names_scene() {
        let err = CoreError::malformed(Some(SceneId(7)), "missing field `setting`");
        assert_eq!(
            err.to_string(),
            "malformed scene data in scene 7: missing field `setting`"
        );
    }

    #[test]
    fn malformed_message_without_scene() {
        let err = CoreError::malformed(None, "expected a JSON array");
        assert_eq!(err.to_string(), "malformed scene data: expected a JSON array");
    }
}
