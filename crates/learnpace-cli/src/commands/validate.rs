//! The `learnpace validate` command.

use std::path::PathBuf;

use anyhow::Result;

use learnpace_core::parser;

pub fn execute(records_path: PathBuf) -> Result<()> {
    let loaded = parser::load_records(&records_path)?;
    println!(
        "Records: {} ({} students)",
        records_path.display(),
        loaded.requests.len()
    );

    for skipped in &loaded.skipped {
        println!(
            "  [{}] WARNING: file skipped: {}",
            skipped.path.display(),
            skipped.error
        );
    }

    let warnings = parser::validate_requests(&loaded.requests);
    for w in &warnings {
        println!("  [{}] WARNING: {}", w.request, w.message);
    }

    let total = loaded.skipped.len() + warnings.len();
    if total == 0 {
        println!("All records valid.");
    } else {
        println!("\n{total} warning(s) found.");
    }

    if !loaded.skipped.is_empty() {
        anyhow::bail!(
            "{} record file(s) could not be parsed",
            loaded.skipped.len()
        );
    }

    Ok(())
}
