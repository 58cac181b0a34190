use std::path::Path;

pub fn run(file: &Path, room: Option<&str>) -> Result<(), String> {
    let room = super::load_room(file, room)?;
    super::print_items(&room);
    Ok(())
}
