use anyhow::{Context, Result};
use c4stream::estimators::{Estimator, EstimatorParams};
use c4stream::timing::Timings;
use c4stream::Graph;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "c4stream")]
#[command(about = "Streaming 4-cycle estimation over KONECT edge lists", long_about = None)]
struct Cli {
    /// KONECT edge-list file
    input: PathBuf,

    /// Number of repetitions per estimator
    #[arg(long, global = true, default_value_t = EstimatorParams::default().reps)]
    reps: usize,

    /// Seed for reproducible runs
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Print a JSON summary instead of plain lines
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    /// Print the timer table to stderr after the run
    #[arg(long, global = true, default_value_t = false)]
    timings: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ensemble of reservoir-induced samplers
    Eis {
        /// Total edge budget
        #[arg(long, default_value_t = EstimatorParams::default().k)]
        k: usize,

        /// Ensemble size
        #[arg(long, default_value_t = EstimatorParams::default().s)]
        s: usize,
    },
    /// Node-hash threshold sampling
    Nis {
        /// Edge budget
        #[arg(long, default_value_t = EstimatorParams::default().k)]
        k: usize,
    },
    /// Two-pass reservoir baseline
    Multipass {
        /// Edge budget
        #[arg(long, default_value_t = EstimatorParams::default().k)]
        k: usize,
    },
    /// Exact statistics of the whole graph
    Exact,
}

#[derive(Serialize)]
struct EstimateSummary<'a> {
    input: &'a str,
    n: usize,
    m: usize,
    estimator: Estimator,
    reps: usize,
    seed: Option<u64>,
    estimates: &'a [u64],
    mean: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    timings: Option<&'a Timings>,
}

#[derive(Serialize)]
struct ExactSummary<'a> {
    input: &'a str,
    n: usize,
    m: usize,
    max_degree: usize,
    degeneracy: usize,
    squares: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    timings: Option<&'a Timings>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let start = Instant::now();
    let mut timings = Timings::new();

    let graph = timings
        .time("IO", || Graph::read_konect(&cli.input))
        .with_context(|| format!("Failed to load {}", cli.input.display()))?;

    let base = EstimatorParams {
        reps: cli.reps,
        seed: cli.seed,
        ..EstimatorParams::default()
    };
    let selected = match cli.command {
        Commands::Eis { k, s } => {
            let params = EstimatorParams { k, s, ..base };
            Some((params, params.eis()))
        }
        Commands::Nis { k } => {
            let params = EstimatorParams { k, ..base };
            Some((params, params.nis()))
        }
        Commands::Multipass { k } => {
            let params = EstimatorParams { k, ..base };
            Some((params, params.multipass_baseline()))
        }
        Commands::Exact => None,
    };
    match selected {
        Some((params, estimator)) => {
            run_estimator(&cli, &graph, &params, estimator, &mut timings)?;
        }
        None => run_exact(&cli, &graph, &mut timings)?,
    }

    timings.record("main", start.elapsed());
    if cli.timings {
        eprint!("{}", timings.report());
    }
    Ok(())
}

fn run_estimator(
    cli: &Cli,
    graph: &Graph,
    params: &EstimatorParams,
    estimator: Estimator,
    timings: &mut Timings,
) -> Result<()> {
    estimator
        .validate()
        .with_context(|| format!("Invalid parameters for {}", estimator.name()))?;

    let estimates = timings
        .time(estimator.name(), || params.run(graph, estimator))
        .with_context(|| format!("{} failed", estimator.name()))?;

    if cli.json {
        let mean = if estimates.is_empty() {
            0.0
        } else {
            estimates.iter().map(|&e| u128::from(e)).sum::<u128>() as f64 / estimates.len() as f64
        };
        let input = cli.input.display().to_string();
        let summary = EstimateSummary {
            input: &input,
            n: graph.n(),
            m: graph.m(),
            estimator,
            reps: params.reps,
            seed: params.seed,
            estimates: &estimates,
            mean,
            timings: cli.timings.then_some(&*timings),
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        for estimate in &estimates {
            println!("{}", estimate);
        }
    }
    Ok(())
}

fn run_exact(cli: &Cli, graph: &Graph, timings: &mut Timings) -> Result<()> {
    let degeneracy = timings.time("degeneracy", || graph.compute_degeneracy());
    let squares = timings.time("exact", || graph.exact_square_count());

    if cli.json {
        let input = cli.input.display().to_string();
        let summary = ExactSummary {
            input: &input,
            n: graph.n(),
            m: graph.m(),
            max_degree: graph.max_degree(),
            degeneracy,
            squares,
            timings: cli.timings.then_some(&*timings),
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("n: {}", graph.n());
        println!("m: {}", graph.m());
        println!("max degree: {}", graph.max_degree());
        println!("degeneracy: {}", degeneracy);
        println!("squares: {}", squares);
    }
    Ok(())
}
