//! Immutable scene graph records.
//!
//! Everything in this module is built once while a story is loaded and is
//! only read afterwards. Fields are private and exposed through accessors so a
//! scene cannot be edited once it sits in a repository.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of personality axes an effect vector carries.
pub const AXIS_COUNT: usize = 4;

/// Stable integer key of a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SceneId(pub u32);

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-axis score deltas applied when a choice is taken, in IE, SN, FT, PJ order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Effect(pub [i32; AXIS_COUNT]);

impl Effect {
    /// An effect that leaves every axis unchanged.
    pub const NONE: Self = Self([0; AXIS_COUNT]);

    /// The raw deltas.
    pub fn deltas(&self) -> [i32; AXIS_COUNT] {
        self.0
    }

    /// Whether every delta is zero.
    pub fn is_neutral(&self) -> bool {
        self.0.iter().all(|d| *d == 0)
    }
}

impl From<[i32; AXIS_COUNT]> for Effect {
    fn from(deltas: [i32; AXIS_COUNT]) -> Self {
        Self(deltas)
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [ie, sn, ft, pj] = self.0;
        write!(f, "[{ie}, {sn}, {ft}, {pj}]")
    }
}

/// A single non-interactive line of dialogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogueLine {
    speaker: String,
    text: String,
}

impl DialogueLine {
    /// Create a dialogue line.
    pub fn new(speaker: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            text: text.into(),
        }
    }

    /// Who speaks the line.
    pub fn speaker(&self) -> &str {
        &self.speaker
    }

    /// The spoken text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for DialogueLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.speaker, self.text)
    }
}

/// One selectable answer at a decision point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    response: String,
    effect: Effect,
    target: SceneId,
}

impl Choice {
    /// Create a choice leading to `target`.
    pub fn new(response: impl Into<String>, effect: impl Into<Effect>, target: SceneId) -> Self {
        Self {
            response: response.into(),
            effect: effect.into(),
            target,
        }
    }

    /// Text shown to the player.
    pub fn response(&self) -> &str {
        &self.response
    }

    /// Score deltas applied when this choice is taken.
    pub fn effect(&self) -> Effect {
        self.effect
    }

    /// Scene the story moves to. May not exist in the repository.
    pub fn target(&self) -> SceneId {
        self.target
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (effect {}, next scene {})",
            self.response, self.effect, self.target
        )
    }
}

/// The decision point presented after a scene's dialogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractiveSegment {
    speaker: String,
    prompt: String,
    choices: Vec<Choice>,
}

impl InteractiveSegment {
    /// Create a decision point with no choices yet.
    pub fn new(speaker: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            prompt: prompt.into(),
            choices: Vec::new(),
        }
    }

    /// Add a choice.
    pub fn with_choice(mut self, choice: Choice) -> Self {
        self.choices.push(choice);
        self
    }

    /// Who asks the question.
    pub fn speaker(&self) -> &str {
        &self.speaker
    }

    /// The question put to the player.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// All choices in presentation order.
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// Number of selectable choices.
    pub fn choice_count(&self) -> usize {
        self.choices.len()
    }

    /// Look up a choice by its 1-based position.
    pub fn choice(&self, index: usize) -> Option<&Choice> {
        index.checked_sub(1).and_then(|i| self.choices.get(i))
    }
}

/// A node of the narrative graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    id: SceneId,
    speakers: Vec<String>,
    setting: String,
    dialogues: Vec<DialogueLine>,
    interactive: InteractiveSegment,
}

impl Scene {
    /// Create a scene with no speakers and no dialogue.
    pub fn new(id: SceneId, setting: impl Into<String>, interactive: InteractiveSegment) -> Self {
        Self {
            id,
            speakers: Vec::new(),
            setting: setting.into(),
            dialogues: Vec::new(),
            interactive,
        }
    }

    /// Add a participating speaker.
    pub fn with_speaker(mut self, speaker: impl Into<String>) -> Self {
        self.speakers.push(speaker.into());
        self
    }

    /// Append a dialogue line.
    pub fn with_dialogue(mut self, line: DialogueLine) -> Self {
        self.dialogues.push(line);
        self
    }

    /// The scene's identifier.
    pub fn id(&self) -> SceneId {
        self.id
    }

    /// Characters taking part in the scene.
    pub fn speakers(&self) -> &[String] {
        &self.speakers
    }

    /// Setting or background reference.
    pub fn setting(&self) -> &str {
        &self.setting
    }

    /// Dialogue lines in playback order.
    pub fn dialogues(&self) -> &[DialogueLine] {
        &self.dialogues
    }

    /// The decision point closing the scene.
    pub fn interactive(&self) -> &InteractiveSegment {
        &self.interactive
    }

    /// Targets of every choice, in choice order.
    pub fn targets(&self) -> impl Iterator<Item = SceneId> + '_ {
        self.interactive.choices.iter().map(Choice::target)
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Scene {} [{}]", self.id, self.setting)?;
        writeln!(f, "Speakers: {}", self.speakers.join(", "))?;
        for line in &self.dialogues {
            writeln!(f, "  {line}")?;
        }
        write!(
            f,
            "{} asks: {}",
            self.interactive.speaker, self.interactive.prompt
        )?;
        for (i, choice) in self.interactive.choices.iter().enumerate() {
            write!(f, "\n  {}. {choice}", i + 1)?;
        }
        Ok(())
    }
}
