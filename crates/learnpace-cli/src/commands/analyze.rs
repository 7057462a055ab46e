//! The `learnpace analyze` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use learnpace_core::analysis::AnalysisResult;
use learnpace_core::config::load_config_from;
use learnpace_core::model::PaceCategory;
use learnpace_core::parser;
use learnpace_core::report::AnalysisReport;

pub fn execute(
    records_path: PathBuf,
    course_filter: Option<String>,
    format: String,
    save: bool,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let mut config = load_config_from(config_path.as_deref())?;
    if let Some(dir) = output {
        config.output_dir = dir;
    }
    let analyzer = config.analyzer()?;

    let mut requests = parser::load_records(&records_path)?
        .into_complete()
        .with_context(|| format!("failed to load records from {}", records_path.display()))?;

    if let Some(filter) = &course_filter {
        let courses: Vec<&str> = filter.split(',').map(|s| s.trim()).collect();
        requests.retain(|r| courses.contains(&r.course_id.as_str()));
    }

    if requests.is_empty() {
        println!("No student records found.");
        return Ok(());
    }

    tracing::info!("analyzing {} student record(s)", requests.len());

    // Fail on the first malformed record rather than reporting a partial batch.
    let results = requests
        .iter()
        .map(|r| {
            analyzer
                .analyze(&r.student_id, &r.course_id, &r.record)
                .with_context(|| {
                    format!(
                        "invalid record for student {} in course {}",
                        r.student_id, r.course_id
                    )
                })
        })
        .collect::<Result<Vec<_>>>()?;

    let report = AnalysisReport::new(results);

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        "markdown" | "md" => println!("{}", to_markdown(&report)),
        _ => {
            for result in &report.results {
                print_result(result);
            }
            print_summary(&report);
        }
    }

    if save {
        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H%M%S");
        let path = config.output_dir.join(format!("report-{timestamp}.json"));
        report.save_json(&path)?;
        eprintln!("Report saved to: {}", path.display());
    }

    Ok(())
}

fn print_result(result: &AnalysisResult) {
    println!(
        "\nStudent Learning Analysis: {} ({})",
        result.student_id, result.course_id
    );
    println!("=======================");
    println!("Learning Pace: {}", result.learning_pace);
    println!("Accuracy: {:.2}%", result.accuracy);
    println!("\nRecommendations:");
    for (key, value) in result.recommendations.entries() {
        println!("- {key}: {value}");
    }
}

fn print_summary(report: &AnalysisReport) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["Course", "Students", "Slow", "Medium", "Fast", "Accuracy"]);

    for (course, stats) in &report.summary.per_course {
        let count = |pace: PaceCategory| stats.per_pace.get(&pace).copied().unwrap_or(0);
        table.add_row(vec![
            Cell::new(course),
            Cell::new(stats.students),
            Cell::new(count(PaceCategory::Slow)),
            Cell::new(count(PaceCategory::Medium)),
            Cell::new(count(PaceCategory::Fast)),
            Cell::new(format!("{:.2}%", stats.mean_accuracy)),
        ]);
    }

    println!("\n{table}");
    println!(
        "{} student(s), mean accuracy {:.2}%",
        report.summary.total, report.summary.mean_accuracy
    );
}

fn to_markdown(report: &AnalysisReport) -> String {
    let mut md = String::new();
    md.push_str("| Student | Course | Pace | Accuracy | Content | Extra resources | Exercises | Session |\n");
    md.push_str("|---------|--------|------|----------|---------|-----------------|-----------|---------|\n");
    for r in &report.results {
        let rec = &r.recommendations;
        md.push_str(&format!(
            "| {} | {} | {} | {:.2}% | {} | {} | {} | {} |\n",
            r.student_id,
            r.course_id,
            r.learning_pace,
            r.accuracy,
            rec.content_type,
            rec.extra_resources,
            rec.practice_exercises,
            rec.session_duration
        ));
    }
    md
}
