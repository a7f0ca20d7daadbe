use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use polysecret::recovery::document::ShareDocument;
use polysecret::recovery::lagrange::{Outcome, reconstruct};
use tracing::{Level, info};
use tracing_subscriber::fmt;

#[derive(Parser)]
#[command(name = "polysecret")]
#[command(about = "Recover a threshold secret from polynomial shares")]
#[command(version)]
struct Cli {
    /// Share document (JSON)
    #[arg(default_value = "data/input.json")]
    input: PathBuf,

    /// Number of leading digits shown for each decoded share
    #[arg(long, default_value_t = 20)]
    digits: usize,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let file = File::open(&cli.input)
        .with_context(|| format!("could not open {}", cli.input.display()))?;
    let document = ShareDocument::from_reader(BufReader::new(file))
        .with_context(|| format!("could not parse {}", cli.input.display()))?;

    info!(path = %cli.input.display(), "loaded share document");

    println!("Parsed data:");
    println!("n (number of points): {}", document.keys.n);
    println!("k (minimum required): {}", document.keys.k);
    println!("Polynomial degree: {}", document.degree());
    println!();

    let points = document.points().context("could not decode shares")?;

    println!("Points (first few digits shown):");
    for (share, point) in document.shares.iter().zip(&points) {
        println!(
            "({}, {} base {}) = ({}, {})",
            share.x,
            share.value,
            share.base,
            point.x,
            preview(&point.y.to_string(), cli.digits)
        );
    }
    println!();

    let outcome = reconstruct(&points, document.keys.k).context("reconstruction failed")?;

    match outcome {
        Outcome::Recovered(secret) => {
            println!(
                "Constant term (secret) using first {} points: {}",
                document.keys.k, secret
            );
        }
        Outcome::InsufficientPoints { required, provided } => {
            eprintln!("Warning: not enough points, need {required} but only {provided} given.");
        }
    }

    Ok(())
}

/// Shortens a decimal string to `width` characters followed by `...`.
fn preview(digits: &str, width: usize) -> String {
    if digits.len() > width {
        format!("{}...", &digits[..width])
    } else {
        digits.to_owned()
    }
}
