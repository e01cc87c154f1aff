#![allow(clippy::cast_precision_loss)]

use clap::{Args, CommandFactory, Parser, Subcommand};
use log::{info, warn};
use np_bench::error::{Error, Result};
use np_bench::harness::config::{load_strategy_file, RunConfig};
use np_bench::harness::generate::{self, GraphParams, SatParams};
use np_bench::harness::orchestrator::Orchestrator;
use np_bench::harness::problem::ProblemKind;
use np_bench::harness::summary::BatchSummary;
use np_bench::strategy::Strategy;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use tikv_jemalloc_ctl::{epoch, stats};

/// Defines the command-line interface for the benchmark.
///
/// Uses `clap` for parsing arguments.
#[derive(Parser, Debug)]
#[command(
    name = "np-bench",
    version,
    about = "Benchmarks exhaustive SAT and Hamiltonian cycle searches"
)]
pub(crate) struct Cli {
    /// Specifies the subcommand to execute (`run`, `generate` or `completions`).
    #[clap(subcommand)]
    pub command: Commands,
}

/// Enumerates the available subcommands.
#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Solve every instance of a file (or of every file under a directory)
    /// with each enabled strategy and write one CSV per strategy.
    Run {
        /// Instance file, or a directory searched recursively for instance files.
        #[arg(short, long)]
        input: PathBuf,

        /// The problem to solve. Taken from the strategy file's `Selection`, or
        /// detected from the input's first `p` line, when omitted.
        #[arg(short, long, value_enum)]
        problem: Option<ProblemKind>,

        /// Directory the result files are written to.
        #[arg(short, long, default_value = "results")]
        results: PathBuf,

        /// JSON strategy file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Comma-separated strategies to enable. Takes precedence over `--config`.
        #[arg(long, value_enum, value_delimiter = ',')]
        strategy: Vec<Strategy>,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Write a file of seeded random instances.
    Generate {
        #[clap(subcommand)]
        target: GenerateTarget,
    },

    /// Generate shell completion scripts.
    Completions {
        /// The shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Kinds of instance the generator can write.
#[derive(Subcommand, Debug)]
pub(crate) enum GenerateTarget {
    /// Random k-CNF formulas.
    Sat {
        #[arg(long, default_value_t = 10)]
        count: usize,
        #[arg(long, default_value_t = 8)]
        vars: usize,
        #[arg(long, default_value_t = 20)]
        clauses: usize,
        /// Literals per clause.
        #[arg(long, default_value_t = 3)]
        width: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Output file; standard output when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Random undirected graphs.
    Graph {
        #[arg(long, default_value_t = 10)]
        count: usize,
        #[arg(long, default_value_t = 7)]
        vertices: usize,
        /// Probability of each possible edge.
        #[arg(long, default_value_t = 0.5)]
        density: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Output file; standard output when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Defines common command-line options for runs.
#[derive(Args, Debug, Default, Clone)]
pub(crate) struct CommonOptions {
    /// Enable debug output, providing more verbose logging during the run.
    #[arg(short, long, default_value_t = false)]
    pub(crate) debug: bool,

    /// Check every witness against its instance and fail the run on a mismatch.
    #[arg(short, long, default_value_t = false)]
    pub(crate) verify: bool,

    /// Print a per-strategy summary table after each input file.
    #[arg(short, long, default_value_t = false)]
    pub(crate) stats: bool,
}

impl Cli {
    /// Whether debug logging was requested.
    pub(crate) fn debug(&self) -> bool {
        matches!(
            &self.command,
            Commands::Run {
                common: CommonOptions { debug: true, .. },
                ..
            }
        )
    }
}

/// Dispatches a parsed command line.
///
/// # Errors
///
/// Any configuration, parse, verification or I/O error of the command.
pub(crate) fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Run {
            input,
            problem,
            results,
            config,
            strategy,
            common,
        } => {
            let run_config =
                resolve_config(&input, problem, &results, config.as_deref(), strategy, &common)?;
            if input.is_dir() {
                solve_dir(&run_config, &common)
            } else {
                solve_file(&run_config, &common).map(|_| ())
            }
        }
        Commands::Generate { target } => generate_instances(target),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "np-bench", &mut io::stdout());
            Ok(())
        }
    }
}

/// Builds the run configuration from the command line, the strategy file
/// and, as a last resort, the input file itself.
///
/// # Errors
///
/// Every configuration fault: an unreadable or invalid strategy file, no
/// strategy enabled, or no way to tell which problem to solve.
pub(crate) fn resolve_config(
    input: &Path,
    problem: Option<ProblemKind>,
    results: &Path,
    config: Option<&Path>,
    strategy: Vec<Strategy>,
    common: &CommonOptions,
) -> Result<RunConfig> {
    let selection = config.map(load_strategy_file).transpose()?;

    let strategies = if strategy.is_empty() {
        selection
            .as_ref()
            .map(|s| s.strategies.clone())
            .ok_or_else(|| {
                Error::Config("no strategy enabled: pass --strategy or --config".to_string())
            })?
    } else {
        strategy
    };

    let problem = match problem.or_else(|| selection.as_ref().and_then(|s| s.problem)) {
        Some(problem) => problem,
        None if input.is_file() => ProblemKind::detect(input)?,
        None => {
            return Err(Error::Config(format!(
                "cannot detect the problem of {}; pass --problem",
                input.display()
            )));
        }
    };

    Ok(RunConfig::new(problem, input, results, strategies)?.with_verify(common.verify))
}

fn is_instance_file(path: &Path, problem: ProblemKind) -> bool {
    let Some(ext) = path.extension() else {
        return false;
    };
    match problem {
        ProblemKind::Sat => ext == "cnf",
        ProblemKind::Hamilton => ext == "graph" || ext == "txt",
    }
}

/// Runs every instance file under `config.input()`, in path order.
///
/// # Arguments
/// * `config` - The run configuration; its input is the directory to walk.
/// * `common` - Common options, such as statistics printing.
///
/// # Errors
///
/// The first error of any file's run.
pub(crate) fn solve_dir(config: &RunConfig, common: &CommonOptions) -> Result<()> {
    let mut files = 0;

    for entry in walkdir::WalkDir::new(config.input())
        .sort_by_file_name()
        .into_iter()
        .filter_map(std::result::Result::ok)
    {
        let file_path = entry.path();
        if !file_path.is_file() {
            continue;
        }
        if !is_instance_file(file_path, config.problem()) {
            info!("skipping {}", file_path.display());
            continue;
        }

        solve_file(&config.for_input(file_path), common)?;
        files += 1;
    }

    if files == 0 {
        warn!(
            "no {} instance files found under {}",
            config.problem(),
            config.input().display()
        );
    }
    Ok(())
}

/// Runs one instance file and, if requested, prints its statistics.
///
/// # Errors
///
/// See [`Orchestrator::run_to_csv`].
pub(crate) fn solve_file(config: &RunConfig, common: &CommonOptions) -> Result<Vec<BatchSummary>> {
    let summaries = Orchestrator::new(config.clone()).run_to_csv()?;
    if common.stats {
        print_stats(config.input(), &summaries);
    }
    Ok(summaries)
}

fn generate_instances(target: GenerateTarget) -> Result<()> {
    match target {
        GenerateTarget::Sat {
            count,
            vars,
            clauses,
            width,
            seed,
            output,
        } => {
            let instances = generate::sat_instances(&SatParams {
                count,
                vars,
                clauses,
                width,
                seed,
            })?;
            write_generated(output.as_deref(), &instances)
        }
        GenerateTarget::Graph {
            count,
            vertices,
            density,
            seed,
            output,
        } => {
            let instances = generate::graph_instances(&GraphParams {
                count,
                vertices,
                density,
                seed,
            })?;
            write_generated(output.as_deref(), &instances)
        }
    }
}

fn write_generated<T: std::fmt::Display>(output: Option<&Path>, instances: &[T]) -> Result<()> {
    match output {
        Some(path) => {
            generate::write_instances(BufWriter::new(File::create(path)?), instances)?;
            info!("wrote {} instances to {}", instances.len(), path.display());
            Ok(())
        }
        None => generate::write_instances(io::stdout().lock(), instances),
    }
}

/// Helper function to print a single statistic line in a formatted table row.
///
/// # Arguments
/// * `label` - The description of the statistic.
/// * `value` - The value of the statistic, implementing `std::fmt::Display`.
pub(crate) fn stat_line(label: &str, value: impl std::fmt::Display) {
    println!("|  {label:<28} {value:>18}  |");
}

/// Helper function to print a statistic line that includes a rate (value/second).
///
/// # Arguments
/// * `label` - The description of the statistic.
/// * `value` - The raw count for the statistic.
/// * `elapsed` - The elapsed time in seconds, used to calculate the rate.
pub(crate) fn stat_line_with_rate(label: &str, value: usize, elapsed: f64) {
    let rate = if elapsed > 0.0 {
        value as f64 / elapsed
    } else {
        0.0
    };
    println!("|  {label:<20} {value:>12} ({rate:>9.0}/sec)  |");
}

/// Allocated and resident memory in MiB, as seen by jemalloc.
fn memory_mib() -> std::result::Result<(f64, f64), tikv_jemalloc_ctl::Error> {
    epoch::advance()?;
    let allocated = stats::allocated::read()?;
    let resident = stats::resident::read()?;
    Ok((
        allocated as f64 / (1024.0 * 1024.0),
        resident as f64 / (1024.0 * 1024.0),
    ))
}

/// Prints a summary table of one input file's run, one section per strategy.
///
/// # Arguments
/// * `input` - The instance file the summaries belong to.
/// * `summaries` - One `BatchSummary` per strategy that ran.
pub(crate) fn print_stats(input: &Path, summaries: &[BatchSummary]) {
    println!("\n=======================[ Run Statistics ]============================");
    stat_line("Input", input.file_name().map_or_else(
        || input.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    ));

    for summary in summaries {
        let total = summary.total_time.as_secs_f64();
        let (witness_label, strong_label) = match summary.problem {
            ProblemKind::Sat => ("Satisfiable", None),
            ProblemKind::Hamilton => ("With Hamiltonian path", Some("With Hamiltonian cycle")),
        };

        println!(
            "=======================[ {:^19} ]============================",
            summary.strategy.label()
        );
        stat_line_with_rate("Instances", summary.instances, total);
        stat_line(witness_label, summary.witnesses);
        if let Some(label) = strong_label {
            stat_line(label, summary.strong_witnesses);
        }
        stat_line("Total time (s)", format!("{total:.6}"));
        stat_line("Mean time (s)", format!("{:.6}", summary.mean_seconds()));
        stat_line(
            "Slowest instance",
            summary
                .slowest_instance
                .map_or_else(|| "-".to_string(), |id| id.to_string()),
        );
        stat_line("Slowest time (s)", format!("{:.6}", summary.slowest.into_inner()));
    }

    println!("=====================================================================");
    match memory_mib() {
        Ok((allocated, resident)) => {
            stat_line("Memory usage (MiB)", format!("{allocated:.2}"));
            stat_line("Resident memory (MiB)", format!("{resident:.2}"));
        }
        Err(e) => warn!("memory statistics unavailable: {e}"),
    }
    println!("=====================================================================");
}
