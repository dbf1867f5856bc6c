use habitrack_core::habit::{catalog, HabitCategory};

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(catalog::definitions())?);
        return Ok(());
    }

    for category in HabitCategory::ALL {
        println!("{}:", category.as_str());
        for def in catalog::by_category(category) {
            println!("  {:<20} {}", def.id, def.name);
        }
        println!();
    }
    Ok(())
}
