use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use u_cpusched::models::ProcessSpec;
use u_cpusched::policies::Policy;
use u_cpusched::report::{render_comparison, render_outcome};
use u_cpusched::simulation::{SimulationOutcome, SimulationRequest, Simulator};
use u_cpusched::workload::WorkloadGenerator;
use u_cpusched::SimulationError;

#[derive(Parser)]
#[command(author, version, about = "Simulate FCFS, SJF, SRT and Round-Robin CPU scheduling", long_about = None)]
struct Cli {
    /// Process as ARRIVAL:BURST (repeatable; ids follow the given order)
    #[arg(short, long = "process", value_parser = parse_process, allow_hyphen_values = true)]
    processes: Vec<ProcessSpec>,

    /// JSON request file ({"processes": [...], "policy": ...})
    #[arg(short, long, conflicts_with_all = ["processes", "random"])]
    input: Option<PathBuf>,

    /// Generate N random processes instead
    #[arg(long, value_name = "N", conflicts_with = "processes")]
    random: Option<usize>,

    /// Seed for --random
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Scheduling policy: fcfs, sjf, srt, rr, rr:<Q> or all
    #[arg(short = 's', long, value_parser = parse_policy, default_value = "fcfs", conflicts_with = "input")]
    policy: PolicyArg,

    /// Round-Robin time quantum (for `rr` and `all`)
    #[arg(short, long, default_value_t = 2, conflicts_with = "input")]
    quantum: i64,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PolicyArg {
    /// A fully specified policy
    One(Policy),
    /// Round-Robin with the `--quantum` value
    RoundRobin,
    /// Every policy on the same workload
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn parse_process(s: &str) -> Result<ProcessSpec, SimulationError> {
    let invalid = || SimulationError::InvalidProcessSpec(s.to_string());
    let (arrival, burst) = s.split_once(':').ok_or_else(invalid)?;
    let arrival = arrival.trim().parse().map_err(|_| invalid())?;
    let burst = burst.trim().parse().map_err(|_| invalid())?;
    Ok(ProcessSpec::new(arrival, burst))
}

fn parse_policy(s: &str) -> Result<PolicyArg, SimulationError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "all" => Ok(PolicyArg::All),
        "rr" => Ok(PolicyArg::RoundRobin),
        _ => s.parse().map(PolicyArg::One),
    }
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let simulator = Simulator::new();

    let outcomes = if let Some(path) = &cli.input {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let request: SimulationRequest = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        info!("loaded {} process(es) from {}", request.processes.len(), path.display());
        vec![simulator.run(request)?]
    } else {
        let processes = workload(&cli)?;
        let policy = match cli.policy {
            PolicyArg::All => None,
            PolicyArg::RoundRobin => Some(Policy::RoundRobin {
                quantum: cli.quantum,
            }),
            PolicyArg::One(policy) => Some(policy),
        };
        match policy {
            Some(policy) => vec![simulator.run(SimulationRequest::new(processes, policy))?],
            None => simulator.compare(&processes, cli.quantum)?,
        }
    };

    print_outcomes(&outcomes, cli.format)
}

fn workload(cli: &Cli) -> Result<Vec<ProcessSpec>> {
    if let Some(count) = cli.random {
        let mut rng = StdRng::seed_from_u64(cli.seed);
        let processes = WorkloadGenerator::new(count).generate(&mut rng);
        info!("generated {count} random process(es) with seed {}", cli.seed);
        return Ok(processes);
    }
    if cli.processes.is_empty() {
        bail!("no processes given (use --process ARRIVAL:BURST, --input FILE or --random N)");
    }
    Ok(cli.processes.clone())
}

fn print_outcomes(outcomes: &[SimulationOutcome], format: Format) -> Result<()> {
    match format {
        Format::Json => {
            let json = if let [single] = outcomes {
                serde_json::to_string_pretty(single)?
            } else {
                serde_json::to_string_pretty(outcomes)?
            };
            println!("{json}");
        }
        Format::Text => {
            for outcome in outcomes {
                println!("{}", render_outcome(outcome));
            }
            if outcomes.len() > 1 {
                print!("{}", render_comparison(outcomes));
            }
        }
    }
    Ok(())
}
