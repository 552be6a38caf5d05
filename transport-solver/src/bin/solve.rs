//! Batch solver binary
//!
//! Usage: `nwcm-solve <problem.toml> [config.toml]`
//!
//! Reads a problem, computes the North West Corner solution and prints it as
//! JSON on stdout. Values are parsed as decimals so fractional input stays
//! exact.

use anyhow::{bail, Context};
use rust_decimal::Decimal;
use serde::Serialize;
use transport_solver::{Config, NorthWestCornerSolver, Solution, TransportProblem};

#[derive(Serialize)]
struct Report<'a> {
    sources: Vec<String>,
    destinations: Vec<String>,
    degenerate: bool,
    #[serde(flatten)]
    solution: &'a Solution<Decimal>,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let Some(problem_path) = args.next() else {
        bail!("usage: nwcm-solve <problem.toml> [config.toml]");
    };

    // Load configuration
    let config = match args.next() {
        Some(path) => Config::from_file(&path)
            .with_context(|| format!("failed to load config from {}", path))?,
        None => Config::from_env().context("failed to load config from environment")?,
    };

    tracing::info!(
        "Starting {} v{}",
        config.service_name,
        config.service_version
    );

    let problem: TransportProblem<Decimal> = TransportProblem::from_file(&problem_path)
        .with_context(|| format!("failed to load problem from {}", problem_path))?;

    let solver = NorthWestCornerSolver::new(config.validation.clone());
    let solution = solver
        .solve(&problem)
        .with_context(|| format!("failed to solve {}", problem_path))?;

    tracing::info!("Total cost: {}", solution.total_cost);

    let report = Report {
        sources: solution.source_labels(&config.labels),
        destinations: solution.destination_labels(&config.labels),
        degenerate: solution.is_degenerate(),
        solution: &solution,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
