//! The scene repository: every scene of a story, indexed by identifier.

use std::collections::{BTreeSet, HashMap};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::Value;

use crate::error::{CoreError, CoreResult};
use crate::record::SceneRecord;
use crate::scene::{Scene, SceneId};

/// Something that can produce the scene records of a story.
///
/// The repository does not care whether records come from a file, a network
/// response, or a constant compiled into the binary.
pub trait SceneSource {
    /// Produce every scene record in load order.
    fn scene_records(self) -> CoreResult<Vec<SceneRecord>>;
}

impl SceneSource for Vec<SceneRecord> {
    fn scene_records(self) -> CoreResult<Vec<SceneRecord>> {
        Ok(self)
    }
}

/// A story held in memory as JSON text.
#[derive(Debug, Clone, Copy)]
pub struct JsonStr<'a>(pub &'a str);

impl SceneSource for JsonStr<'_> {
    fn scene_records(self) -> CoreResult<Vec<SceneRecord>> {
        let value: Value = serde_json::from_str(self.0)
            .map_err(|e| CoreError::malformed(None, format!("invalid JSON: {e}")))?;
        records_from_value(value)
    }
}

/// A story read from any byte stream.
#[derive(Debug)]
pub struct JsonReader<R>(pub R);

impl<R: Read> SceneSource for JsonReader<R> {
    fn scene_records(self) -> CoreResult<Vec<SceneRecord>> {
        let value: Value = serde_json::from_reader(self.0)
            .map_err(|e| CoreError::malformed(None, format!("invalid JSON: {e}")))?;
        records_from_value(value)
    }
}

/// A story stored in a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFile(pub PathBuf);

impl SceneSource for JsonFile {
    fn scene_records(self) -> CoreResult<Vec<SceneRecord>> {
        let text = std::fs::read_to_string(&self.0).map_err(|source| CoreError::Io {
            path: self.0.clone(),
            source,
        })?;
        JsonStr(&text).scene_records()
    }
}

/// Decode each array element on its own so a failure can name its scene.
fn records_from_value(value: Value) -> CoreResult<Vec<SceneRecord>> {
    let Value::Array(items) = value else {
        return Err(CoreError::malformed(
            None,
            "expected a JSON array of scene records",
        ));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(position, item)| {
            let scene_id = item
                .get("scene_id")
                .and_then(Value::as_u64)
                .and_then(|id| u32::try_from(id).ok())
                .map(SceneId);
            serde_json::from_value(item).map_err(|e| {
                let reason = match scene_id {
                    Some(_) => e.to_string(),
                    None => format!("record #{}: {e}", position + 1),
                };
                CoreError::malformed(scene_id, reason)
            })
        })
        .collect()
}

/// A dangling edge of the scene graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DanglingReference {
    /// Scene holding the choice.
    pub scene: SceneId,
    /// 1-based position of the choice.
    pub choice: usize,
    /// The identifier that does not exist.
    pub target: SceneId,
}

/// Read-only collection of every scene in a story.
///
/// Scenes are stored behind [`Arc`] so sessions can hold on to the current
/// scene without borrowing the repository.
#[derive(Debug, Clone, Default)]
pub struct SceneRepository {
    scenes: HashMap<SceneId, Arc<Scene>>,
    load_order: Vec<SceneId>,
}

impl SceneRepository {
    /// Build a repository from any scene source.
    ///
    /// Fails on the first malformed record or duplicate identifier; no partial
    /// repository is ever returned. Choice targets are not checked here, see
    /// [`SceneRepository::validate_references`].
    pub fn load(source: impl SceneSource) -> CoreResult<Self> {
        let records = source.scene_records()?;
        let mut repo = Self::default();

        for record in records {
            let scene = record.into_scene()?;
            let id = scene.id();
            if repo.scenes.contains_key(&id) {
                return Err(CoreError::malformed(Some(id), "duplicate scene id"));
            }
            repo.load_order.push(id);
            repo.scenes.insert(id, Arc::new(scene));
        }

        tracing::debug!(scenes = repo.len(), "scene repository loaded");
        Ok(repo)
    }

    /// Load a story from JSON text.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        Self::load(JsonStr(json))
    }

    /// Load a story from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> CoreResult<Self> {
        Self::load(JsonFile(path.as_ref().to_path_buf()))
    }

    /// Look up a scene.
    pub fn get(&self, id: SceneId) -> CoreResult<Arc<Scene>> {
        self.scenes
            .get(&id)
            .cloned()
            .ok_or(CoreError::SceneNotFound(id))
    }

    /// Whether a scene with this identifier exists.
    pub fn contains(&self, id: SceneId) -> bool {
        self.scenes.contains_key(&id)
    }

    /// Number of scenes.
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// Whether the story has no scenes at all.
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Scene identifiers in load order.
    pub fn scene_ids(&self) -> &[SceneId] {
        &self.load_order
    }

    /// Scenes in load order.
    pub fn scenes(&self) -> impl Iterator<Item = &Scene> {
        self.load_order
            .iter()
            .filter_map(|id| self.scenes.get(id))
            .map(|scene| scene.as_ref())
    }

    /// The lowest scene identifier, used as the default entry point.
    pub fn entry_scene_id(&self) -> Option<SceneId> {
        self.scenes.keys().min().copied()
    }

    /// Every choice whose target is missing, in load and choice order.
    pub fn dangling_references(&self) -> Vec<DanglingReference> {
        self.scenes()
            .flat_map(|scene| {
                scene
                    .targets()
                    .enumerate()
                    .filter(move |(_, target)| !self.contains(*target))
                    .map(move |(i, target)| DanglingReference {
                        scene: scene.id(),
                        choice: i + 1,
                        target,
                    })
            })
            .collect()
    }

    /// Sorted, de-duplicated identifiers referenced by choices but absent from
    /// the repository. Empty when the graph is closed.
    pub fn validate_references(&self) -> Vec<SceneId> {
        self.dangling_references()
            .into_iter()
            .map(|r| r.target)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Serialize the story back into its JSON file format.
    pub fn to_json(&self) -> CoreResult<String> {
        let records: Vec<SceneRecord> = self.scenes().map(SceneRecord::from).collect();
        serde_json::to_string_pretty(&records)
            .map_err(|e| CoreError::malformed(None, format!("cannot serialize story: {e}")))
    }
}
