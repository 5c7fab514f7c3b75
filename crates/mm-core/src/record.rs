//! Wire schema of a story file.
//!
//! A story is a JSON array of [`SceneRecord`]s. Records are a plain mirror of
//! the file format; [`SceneRecord::into_scene`] checks the rules serde cannot
//! express and produces the immutable [`Scene`].

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::scene::{Choice, DialogueLine, Effect, InteractiveSegment, Scene, SceneId};

/// One scene as stored in a story file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneRecord {
    /// Unique scene identifier.
    pub scene_id: SceneId,
    /// Participating speakers, either a list or a comma-delimited string.
    pub speakers: SpeakerSet,
    /// Setting or background reference.
    pub setting: String,
    /// Dialogue lines played before the decision point.
    #[serde(default)]
    pub dialogues: Vec<DialogueRecord>,
    /// The decision point closing the scene.
    pub interactive: InteractiveRecord,
}

/// Speaker set in either of the two accepted spellings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpeakerSet {
    /// `["MC", "Tusk"]`
    List(Vec<String>),
    /// `"MC, Tusk"`
    Delimited(String),
}

impl SpeakerSet {
    /// Normalized speaker names with surrounding whitespace and blanks removed.
    pub fn names(&self) -> Vec<String> {
        let raw: Vec<&str> = match self {
            Self::List(names) => names.iter().map(String::as_str).collect(),
            Self::Delimited(joined) => joined.split(',').collect(),
        };
        raw.into_iter()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// A dialogue line as stored in a story file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueRecord {
    /// Who speaks.
    pub speaker: String,
    /// What is said.
    pub text: String,
}

/// A decision point as stored in a story file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractiveRecord {
    /// Who asks.
    pub speaker: String,
    /// The question.
    pub prompt: String,
    /// Available answers; must not be empty.
    pub choices: Vec<ChoiceRecord>,
}

/// A choice as stored in a story file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceRecord {
    /// Answer text.
    pub response: String,
    /// Exactly four score deltas.
    pub effect: Effect,
    /// Identifier of the next scene.
    #[serde(rename = "sceneReference", alias = "scene_reference")]
    pub scene_reference: SceneId,
}

impl SceneRecord {
    /// Validate the record and build the immutable scene.
    pub fn into_scene(self) -> CoreResult<Scene> {
        let id = self.scene_id;
        if self.interactive.choices.is_empty() {
            return Err(CoreError::malformed(
                Some(id),
                "interactive segment has no choices",
            ));
        }

        let interactive = self.interactive.choices.into_iter().fold(
            InteractiveSegment::new(self.interactive.speaker, self.interactive.prompt),
            |segment, choice| {
                segment.with_choice(Choice::new(
                    choice.response,
                    choice.effect,
                    choice.scene_reference,
                ))
            },
        );

        let scene = self
            .speakers
            .names()
            .into_iter()
            .fold(Scene::new(id, self.setting, interactive), Scene::with_speaker);

        Ok(self
            .dialogues
            .into_iter()
            .map(|line| DialogueLine::new(line.speaker, line.text))
            .fold(scene, Scene::with_dialogue))
    }
}

impl From<&Scene> for SceneRecord {
    fn from(scene: &Scene) -> Self {
        let interactive = scene.interactive();
        Self {
            scene_id: scene.id(),
            speakers: SpeakerSet::List(scene.speakers().to_vec()),
            setting: scene.setting().to_string(),
            dialogues: scene
                .dialogues()
                .iter()
                .map(|line| DialogueRecord {
                    speaker: line.speaker().to_string(),
                    text: line.text().to_string(),
                })
                .collect(),
            interactive: InteractiveRecord {
                speaker: interactive.speaker().to_string(),
                prompt: interactive.prompt().to_string(),
                choices: interactive
                    .choices()
                    .iter()
                    .map(|choice| ChoiceRecord {
                        response: choice.response().to_string(),
                        effect: choice.effect(),
                        scene_reference: choice.target(),
                    })
                    .collect(),
            },
        }
    }
}
