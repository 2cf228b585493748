mod cmd;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sdd",
    about = "Domain detection and delegation routing for SDD workflows",
    version,
    propagate_version = true
)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect engineering domains in task text and suggest a delegation strategy
    Detect {
        /// Read input text from a file
        #[arg(long)]
        file: Option<PathBuf>,

        /// Use a literal text argument as input
        #[arg(long, conflicts_with = "file")]
        text: Option<String>,

        /// Show the score of every domain, zeros included
        #[arg(long, short = 'v')]
        verbose: bool,
    },

    /// Validate a Markdown artifact against its checklist battery
    Validate {
        /// Artifact kind: spec, plan, or tasks
        kind: String,

        /// Artifact file to validate
        #[arg(long)]
        file: PathBuf,

        /// Demote PASS to WARN when warnings exceed --max-warnings
        #[arg(long)]
        strict: bool,

        /// Warning budget for strict mode
        #[arg(long, default_value = "0")]
        max_warnings: usize,
    },

    /// Assign a department to an agent-purpose description
    Department {
        /// Read the purpose description from a file
        #[arg(long)]
        file: Option<PathBuf>,

        /// Use a literal text argument as the purpose description
        #[arg(long, conflicts_with = "file")]
        text: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Detect {
            file,
            text,
            verbose,
        } => cmd::detect::run(file.as_deref(), text.as_deref(), verbose, cli.json),
        Commands::Validate {
            kind,
            file,
            strict,
            max_warnings,
        } => cmd::validate::run(&kind, &file, strict, max_warnings, cli.json),
        Commands::Department { file, text } => {
            cmd::department::run(file.as_deref(), text.as_deref(), cli.json)
        }
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            // Print the full error chain (anyhow's alternate Display)
            eprintln!("error: {e:#}");
            std::process::exit(1);
        }
    }
}
