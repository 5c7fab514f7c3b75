use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(story: &Path) -> Result<(), String> {
    let repository = super::load_story(story)?;

    if repository.is_empty() {
        println!("  No scenes found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Setting", "Speakers", "Lines", "Choices"]);

    for scene in repository.scenes() {
        let speakers = if scene.speakers().is_empty() {
            "—".to_string()
        } else {
            scene.speakers().join(", ")
        };
        table.add_row(vec![
            scene.id().to_string(),
            scene.setting().to_string(),
            speakers,
            scene.dialogues().len().to_string(),
            scene.interactive().choice_count().to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} scenes", repository.len());

    Ok(())
}
