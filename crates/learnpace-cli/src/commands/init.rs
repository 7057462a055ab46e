//! The `learnpace init` command.

use anyhow::Result;

use learnpace_core::parser::{sample_request, to_toml_string};

pub fn execute() -> Result<()> {
    if std::path::Path::new("learnpace.toml").exists() {
        println!("learnpace.toml already exists, skipping.");
    } else {
        std::fs::write("learnpace.toml", SAMPLE_CONFIG)?;
        println!("Created learnpace.toml");
    }

    std::fs::create_dir_all("records")?;
    let example_path = std::path::Path::new("records/example.toml");
    if example_path.exists() {
        println!("records/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, to_toml_string(&[sample_request()])?)?;
        println!("Created records/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Add your students to records/example.toml");
    println!("  2. Run: learnpace validate --records records");
    println!("  3. Run: learnpace analyze --records records");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# learnpace configuration

output_dir = "./learnpace-results"

# Relative weight of each signal in the pace score. Must sum to 1.0.
[weights]
time = 0.3
accuracy = 0.5
engagement = 0.2
"#;
