use clap::{Parser, Subcommand, ValueEnum};
use hn_graph::{CheckOptions, ComponentAlgorithm, ConnectivityReport, DiagnosticKind, check_with};
use hn_project::{NetworkFile, ProjectError};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "hn-cli")]
#[command(about = "HydroNet CLI - Hydraulic network topology checks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a network for open ends, cyclic connections and disjoint parts
    Check {
        /// Path to the network YAML/JSON file
        network_path: PathBuf,
        /// Connected-component algorithm (overrides the file's `check` section)
        #[arg(long, value_enum)]
        algorithm: Option<Algorithm>,
        /// Output format for the diagnostics
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Show node/element counts and degree statistics
    Summary {
        /// Path to the network YAML/JSON file
        network_path: PathBuf,
    },
    /// Export the network topology as a Graphviz digraph
    Dot {
        /// Path to the network YAML/JSON file
        network_path: PathBuf,
        /// Output DOT file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Algorithm {
    UnionFind,
    Closure,
}

impl From<Algorithm> for ComponentAlgorithm {
    fn from(alg: Algorithm) -> Self {
        match alg {
            Algorithm::UnionFind => ComponentAlgorithm::UnionFind,
            Algorithm::Closure => ComponentAlgorithm::TransitiveClosure,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Project(#[from] ProjectError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

type CliResult<T> = Result<T, CliError>;

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check {
            network_path,
            algorithm,
            format,
        } => cmd_check(&network_path, algorithm, format),
        Commands::Summary { network_path } => cmd_summary(&network_path),
        Commands::Dot {
            network_path,
            output,
        } => cmd_dot(&network_path, output.as_deref()),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn load(network_path: &Path) -> CliResult<NetworkFile> {
    tracing::info!(path = %network_path.display(), "loading network");
    Ok(hn_project::load(network_path)?)
}

fn cmd_check(
    network_path: &Path,
    algorithm: Option<Algorithm>,
    format: OutputFormat,
) -> CliResult<ExitCode> {
    let file = load(network_path)?;
    let options = CheckOptions {
        algorithm: algorithm.map_or(file.check.algorithm, ComponentAlgorithm::from),
    };

    let network = file.network();
    let report = check_with(&network, &options);

    match format {
        OutputFormat::Text => print_report(&file, &report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(if report.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(2)
    })
}

fn print_report(file: &NetworkFile, report: &ConnectivityReport) {
    println!("Checking network: {}", file.name);
    if report.is_valid() {
        println!("✓ Network is valid");
        return;
    }

    for diagnostic in report {
        println!("  {}", diagnostic);
    }
    println!(
        "✗ {} problem(s): {} open end(s), {} cyclic connection(s), {} disjoint network(s)",
        report.len(),
        report.count(DiagnosticKind::OpenEnd),
        report.count(DiagnosticKind::InvalidCyclicConnection),
        report.count(DiagnosticKind::DisconnectedComponent)
    );
}

fn cmd_summary(network_path: &Path) -> CliResult<ExitCode> {
    let file = load(network_path)?;
    let summary = file.network().summary();

    println!("Network: {}", file.name);
    println!("  Nodes:         {}", summary.node_count);
    println!("  Flow elements: {}", summary.element_count);
    println!("  Max degree:    {}", summary.max_degree);
    println!("  Open ends:     {}", summary.open_end_count);
    Ok(ExitCode::SUCCESS)
}

fn cmd_dot(network_path: &Path, output: Option<&Path>) -> CliResult<ExitCode> {
    let file = load(network_path)?;
    let dot = file.to_dot(&file.network());

    if let Some(path) = output {
        std::fs::write(path, dot)?;
        println!("✓ Wrote {} edges to {}", file.elements.len(), path.display());
    } else {
        print!("{}", dot);
    }
    Ok(ExitCode::SUCCESS)
}
