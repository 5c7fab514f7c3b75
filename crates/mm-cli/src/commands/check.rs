use std::path::Path;

pub fn run(story: &Path) -> Result<(), String> {
    let repository = super::load_story(story)?;

    let entry = repository
        .entry_scene_id()
        .map_or_else(|| "none".to_string(), |id| id.to_string());
    println!("  {} scenes, entry scene {entry}", repository.len());

    let dangling = repository.dangling_references();
    if dangling.is_empty() {
        println!("  All checks passed.");
        return Ok(());
    }

    for reference in &dangling {
        println!(
            "  scene {} choice {} leads to missing scene {}",
            reference.scene, reference.choice, reference.target
        );
    }

    let missing = repository.validate_references().len();
    Err(format!(
        "{} dangling reference{} to {missing} missing scene{}",
        dangling.len(),
        if dangling.len() == 1 { "" } else { "s" },
        if missing == 1 { "" } else { "s" },
    ))
}
