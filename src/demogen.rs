//! Demo dataset generator for the office plan tool.
//!
//! Writes a JSON file with sample offices and bookings so the GUI and
//! integration tests can run without a backend.
//!
//! Usage:
//!   demogen [-seed N] [-week YYYY-MM-DD] [-o FILE]

use anyhow::Result;
use chrono::NaiveDate;
use std::env;

use officeplan::sample;

struct Config {
    seed: u64,
    anchor: NaiveDate,
    output_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: 42,
            anchor: chrono::Local::now().date_naive(),
            output_file: "demo_data.json".to_string(),
        }
    }
}

fn parse_args() -> Result<Config> {
    let args: Vec<String> = env::args().collect();
    let mut config = Config::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-seed" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-seed requires an argument");
                }
                config.seed = args[i].parse()?;
            }
            "-week" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-week requires a YYYY-MM-DD argument");
                }
                config.anchor = NaiveDate::parse_from_str(&args[i], "%Y-%m-%d")?;
            }
            "-o" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-o requires an argument");
                }
                config.output_file = args[i].clone();
            }
            "-h" | "--help" => {
                println!("Usage: demogen [-seed N] [-week YYYY-MM-DD] [-o FILE]");
                std::process::exit(0);
            }
            other => anyhow::bail!("unknown argument: {}", other),
        }
        i += 1;
    }

    Ok(config)
}

fn main() -> Result<()> {
    env_logger::init();

    let config = parse_args()?;
    let data = sample::generate(config.anchor, config.seed);

    let json = serde_json::to_string_pretty(&data)?;
    std::fs::write(&config.output_file, json)?;

    println!(
        "Wrote {} offices and {} bookings to {}",
        data.offices.len(),
        data.bookings.len(),
        config.output_file
    );

    Ok(())
}
