use mm_core::AXIS_COUNT;
use mm_session::TraitScores;

pub fn run(scores: [i32; AXIS_COUNT]) -> Result<(), String> {
    super::print_dashboard("You", &TraitScores::new(scores));
    Ok(())
}
