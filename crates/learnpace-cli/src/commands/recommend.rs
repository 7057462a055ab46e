//! The `learnpace recommend` command.

use anyhow::Result;

use learnpace_core::model::PaceCategory;
use learnpace_core::recommender::recommend_label;

pub fn execute(pace: String, format: String) -> Result<()> {
    let bundle = recommend_label(&pace);

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(bundle)?);
        return Ok(());
    }

    match pace.parse::<PaceCategory>() {
        Ok(category) => println!("Recommendations for {category} learners:"),
        Err(_) => println!("Unknown pace '{pace}', showing medium recommendations:"),
    }
    for (key, value) in bundle.entries() {
        println!("- {key}: {value}");
    }

    Ok(())
}
