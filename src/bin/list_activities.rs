//! Print the activity reference table
//! Usage: cargo run --bin list_activities -- [category]

use sportcalc::activities::ActivityTable;
use sportcalc::config;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let category = args.get(1).map(|s| s.as_str());

    let path = config::activities_path();
    println!("Dataset: {}", path.display());

    let table = ActivityTable::load(&path)?;

    match category {
        None => {
            println!("{} activities in {} categories:", table.len(), table.categories().len());
            for category in table.categories() {
                println!("  {} ({})", category, table.by_category(category).len());
            }
        }
        Some(category) => {
            let activities = table.by_category(category);
            if activities.is_empty() {
                println!("No activities found for category: {}", category);
                return Ok(());
            }
            println!("{}:", category);
            for activity in activities {
                println!("  [{}] {}", activity.id, activity.label());
            }
        }
    }

    Ok(())
}
