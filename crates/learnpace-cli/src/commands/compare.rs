//! The `learnpace compare` command.

use std::path::PathBuf;

use anyhow::Result;

use learnpace_core::report::{AnalysisReport, PaceChange};

pub fn execute(
    baseline_path: PathBuf,
    current_path: PathBuf,
    fail_on_slowdown: bool,
    format: String,
) -> Result<()> {
    let baseline = AnalysisReport::load_json(&baseline_path)?;
    let current = AnalysisReport::load_json(&current_path)?;

    let report = current.compare(&baseline);

    match format.as_str() {
        "markdown" | "md" => {
            println!("{}", report.to_markdown());
        }
        "json" => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        _ => {
            println!(
                "Comparison: {} slowed down, {} sped up, {} unchanged",
                report.slowed_down.len(),
                report.sped_up.len(),
                report.unchanged
            );
            print_changes("Slowed down", &report.slowed_down);
            print_changes("Sped up", &report.sped_up);

            if report.new_students > 0 {
                println!("\n{} new student(s)", report.new_students);
            }
            if report.removed_students > 0 {
                println!("{} removed student(s)", report.removed_students);
            }
        }
    }

    if fail_on_slowdown && report.has_slowdowns() {
        std::process::exit(1);
    }

    Ok(())
}

fn print_changes(title: &str, changes: &[PaceChange]) {
    if changes.is_empty() {
        return;
    }
    println!("\n{title}:");
    for c in changes {
        println!(
            "  {} ({}) {} -> {} (accuracy {:+.2})",
            c.student_id, c.course_id, c.baseline_pace, c.current_pace, c.accuracy_delta
        );
    }
}
