use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::Arc;

use colored::Colorize;
use mm_core::{AXIS_COUNT, Scene, SceneId};
use mm_session::{NarrativeSession, SessionConfig};

pub fn run(
    story: &Path,
    name: &str,
    entry: Option<u32>,
    baseline: Option<&[i32]>,
) -> Result<(), String> {
    let repository = Arc::new(super::load_story(story)?);

    let mut config = SessionConfig::default().with_player_name(name);
    if let Some(id) = entry {
        config = config.with_entry_scene(SceneId(id));
    }
    if let Some(values) = baseline {
        let values: [i32; AXIS_COUNT] = values
            .try_into()
            .map_err(|_| format!("baseline needs {AXIS_COUNT} values, got {}", values.len()))?;
        config = config.with_baseline(values);
    }

    let mut session = NarrativeSession::new(repository, config)
        .map_err(|e| format!("failed to start session: {e}"))?;

    println!("  Type a choice number, or 'quit' to stop.\n");
    super::print_scene(session.current_scene());

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    while !is_ending(session.current_scene()) {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
            break;
        }

        let Ok(index) = input.parse::<i64>() else {
            println!("{}\n", format!("'{input}' is not a choice number").yellow());
            continue;
        };

        match session.advance(index) {
            Ok(scene) => {
                println!();
                super::print_scene(scene);
            }
            Err(e) => println!("{}\n", e.to_string().yellow()),
        }
    }

    if is_ending(session.current_scene()) {
        println!("\n  {}\n", "The End.".bold());
    } else {
        println!();
    }
    super::print_dashboard(session.player_name(), &session.trait_scores());

    Ok(())
}

/// A scene whose every choice leads back to itself closes the story.
fn is_ending(scene: &Scene) -> bool {
    scene.targets().all(|target| target == scene.id())
}
