use std::path::Path;

pub fn run(file: &Path, room: Option<&str>) -> Result<(), String> {
    let room = super::load_room(file, room)?;

    println!("  All checks passed for '{}'.", room.name());
    println!(
        "  {} items, {} relationships",
        room.items().len() - 1,
        room.relationships().len()
    );

    Ok(())
}
