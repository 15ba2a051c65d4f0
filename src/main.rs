use crate::config::GeneratorConfig;
use crate::generator::Generator;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod config;
mod generator;
mod pool;

/// Generates a CSV fixture of weighted-random (user_id, message) pairs for
/// stress-testing downstream CSV consumers.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Number of data rows to generate
    #[arg(long, default_value_t = 5_000_000)]
    rows: u64,

    /// Destination path for the generated file
    #[arg(long, short = 'o', default_value = "large_input.csv")]
    output: PathBuf,

    /// Number of unique base user ids (user_1 .. user_N)
    #[arg(long, default_value_t = 10_000)]
    users: u32,

    /// Seed the random number generator for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GeneratorConfig {
        rows: cli.rows,
        output: cli.output,
        unique_users: cli.users,
        seed: cli.seed,
        ..GeneratorConfig::default()
    };

    println!(
        "Generating {} rows for '{}'...",
        config.rows,
        config.output.display()
    );

    let mut generator = Generator::new(&config)?;
    generator.write_to_path(&config.output)?;

    println!("Done. CSV file has been generated successfully!");
    Ok(())
}
