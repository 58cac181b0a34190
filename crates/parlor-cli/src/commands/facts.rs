use std::path::Path;

pub fn run(file: &Path, room: Option<&str>, root: &str) -> Result<(), String> {
    let room = super::load_room(file, room)?;

    if room.item(root).is_none() {
        return Err(format!("item not found: \"{root}\""));
    }

    super::print_facts(&room.facts_from(root));
    Ok(())
}
