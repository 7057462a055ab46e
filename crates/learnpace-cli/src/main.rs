//! learnpace CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "learnpace", version, about = "Learning pace analysis and recommendations")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze student records and print pace and recommendations
    Analyze {
        /// Path to a .toml/.json record file or a directory of them
        #[arg(long)]
        records: PathBuf,

        /// Only analyze these courses (comma-separated)
        #[arg(long)]
        course: Option<String>,

        /// Output format: text, json, markdown
        #[arg(long, default_value = "text")]
        format: String,

        /// Save a JSON report into the configured output directory
        #[arg(long)]
        save: bool,

        /// Override the output directory for saved reports
        #[arg(long)]
        output: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Compare two analysis reports
    Compare {
        /// Baseline report JSON
        #[arg(long)]
        baseline: PathBuf,

        /// Current report JSON
        #[arg(long)]
        current: PathBuf,

        /// Exit code 1 if any student slowed down
        #[arg(long)]
        fail_on_slowdown: bool,

        /// Output format: text, json, markdown
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Validate student record files
    Validate {
        /// Path to a record file or directory
        #[arg(long)]
        records: PathBuf,
    },

    /// Show the recommendations for a pace category
    Recommend {
        /// Pace category: slow, medium, fast
        #[arg(long)]
        pace: String,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Create starter config and example record file
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("learnpace=info".parse().expect("static directive")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze {
            records,
            course,
            format,
            save,
            output,
            config,
        } => commands::analyze::execute(records, course, format, save, output, config),
        Commands::Compare {
            baseline,
            current,
            fail_on_slowdown,
            format,
        } => commands::compare::execute(baseline, current, fail_on_slowdown, format),
        Commands::Validate { records } => commands::validate::execute(records),
        Commands::Recommend { pace, format } => commands::recommend::execute(pace, format),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
