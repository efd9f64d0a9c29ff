use std::path::PathBuf;

use clap::Parser;

use ohhell_bench::config::BenchmarkConfig;
use ohhell_bench::logging::init_logging;
use ohhell_bench::tournament::TournamentRunner;

/// Tournament harness for Oh Hell bots.
#[derive(Debug, Parser)]
#[command(
    name = "ohhell-bench",
    author,
    version,
    about = "Deterministic Oh Hell tournament harness"
)]
struct Cli {
    /// Path to the YAML configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "bench/bench.yaml")]
    config: PathBuf,

    /// Override the run identifier.
    #[arg(long, value_name = "RUN_ID")]
    run_id: Option<String>,

    /// Override the number of matches to play.
    #[arg(long, value_name = "MATCHES")]
    matches: Option<usize>,

    /// Override the RNG seed for match generation.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Exit after validating the configuration (no tournament is run).
    #[arg(long)]
    validate_only: bool,

    /// Print the standings as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = BenchmarkConfig::from_path(&cli.config)?;

    if let Some(run_id) = cli.run_id {
        config.run_id = run_id;
    }

    if let Some(matches) = cli.matches {
        config.matches = matches;
    }

    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }

    config.validate()?;

    let agent_count = config.agents.len();
    let run_id = config.run_id.clone();
    let matches = config.matches;

    eprintln!(
        "Loaded configuration '{run_id}' with {agent_count} agent{} ({matches} matches)",
        if agent_count == 1 { "" } else { "s" }
    );

    let logging_guard = init_logging(&config.logging)?;
    let runner = TournamentRunner::new(config)?;

    if cli.validate_only {
        eprintln!("Validation-only mode: tournament execution skipped.");
        return Ok(());
    }

    let summary = runner.run()?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", summary.render_table());
    }
    if let Some(path) = logging_guard.log_path.as_ref() {
        eprintln!("Log written to {}", path.display());
    }

    Ok(())
}
