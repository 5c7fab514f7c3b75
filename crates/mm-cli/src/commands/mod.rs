pub mod check;
pub mod list;
pub mod mbti;
pub mod play;
pub mod show;

use std::path::Path;

use colored::Colorize;
use mm_core::{Scene, SceneRepository};
use mm_session::{Axis, SCORE_MAX, SCORE_MIN, TraitScores, mbti::resolve};

/// Load a story file, turning load errors into a printable message.
fn load_story(path: &Path) -> Result<SceneRepository, String> {
    tracing::debug!(path = %path.display(), "loading story");
    SceneRepository::from_path(path).map_err(|e| e.to_string())
}

/// Print a scene: setting, dialogue, then the numbered choices.
fn print_scene(scene: &Scene) {
    println!(
        "  {} {}",
        format!("Scene {}", scene.id()).bold(),
        format!("[{}]", scene.setting()).dimmed()
    );
    if !scene.speakers().is_empty() {
        println!("  {}", scene.speakers().join(", ").dimmed());
    }
    println!();

    for line in scene.dialogues() {
        println!("  {}: {}", line.speaker().cyan(), line.text());
    }
    if !scene.dialogues().is_empty() {
        println!();
    }

    let interactive = scene.interactive();
    println!("  {}: {}", interactive.speaker().cyan(), interactive.prompt());
    for (i, choice) in interactive.choices().iter().enumerate() {
        println!("    {}. {}", i + 1, choice.response());
    }
}

/// One bar per axis from -10 to 10 with the score marked, then the label.
fn print_dashboard(player: &str, scores: &TraitScores) {
    println!("  {}", format!("{player} Revealed!").bold());
    println!();

    for axis in Axis::ALL {
        let score = scores.get(axis);
        let bar: String = (SCORE_MIN..=SCORE_MAX)
            .map(|cell| match cell {
                c if c == score => 'o',
                0 => '|',
                _ => '-',
            })
            .collect();
        println!("  {:<28} [{}] {:+}", axis.to_string(), bar, score);
    }

    println!();
    println!("  Type: {}", resolve(scores).bold().yellow());
}
