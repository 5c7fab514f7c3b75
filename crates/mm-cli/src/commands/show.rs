use std::path::Path;

use colored::Colorize;
use mm_core::SceneId;

pub fn run(story: &Path, scene: u32) -> Result<(), String> {
    let repository = super::load_story(story)?;
    let scene = repository.get(SceneId(scene)).map_err(|e| e.to_string())?;

    super::print_scene(&scene);
    println!();

    for (i, choice) in scene.interactive().choices().iter().enumerate() {
        let target = if repository.contains(choice.target()) {
            choice.target().to_string().normal()
        } else {
            format!("{} (missing)", choice.target()).red()
        };
        println!(
            "  {}. effect {} -> scene {}",
            i + 1,
            choice.effect(),
            target
        );
    }

    Ok(())
}
