//! Contact graph CLI: builds, analyzes and samples contact graphs
//!
//! Reads a directory of per-owner CSV exports and prints the analysis as tables
//! or JSON.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use contactgraph::{
    build_graph, load_directory, save_snapshot, top_companies, AdjacencyGraph, AnalysisConfig,
    AnalysisPipeline, AnalysisReport, CompanyCount, DegreeReport, SampleStatistics,
    SamplingConfig, SamplingReport, StageOutcome,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "contactgraph", version, about = "Contact graph analysis CLI")]
struct Cli {
    /// YAML configuration file
    #[arg(long, global = true, env = "CONTACTGRAPH_CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Args)]
struct SamplingArgs {
    /// Maximum steps per walk
    #[arg(long)]
    max_steps: Option<usize>,

    /// Number of walks to sample
    #[arg(long)]
    examples: Option<usize>,

    /// RNG seed for reproducible walks
    #[arg(long)]
    seed: Option<u64>,
}

impl SamplingArgs {
    fn apply(&self, config: &mut SamplingConfig) {
        if let Some(max_steps) = self.max_steps {
            config.max_steps = max_steps;
        }
        if let Some(examples) = self.examples {
            config.num_examples = examples;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Run every stage and print the full report
    Analyze {
        /// Directory of CSV exports
        #[arg(long)]
        input: Option<PathBuf>,

        /// Snapshot to sample walks from
        #[arg(long)]
        snapshot: Option<PathBuf>,

        /// Sample the freshly built graph instead of a snapshot
        #[arg(long, conflicts_with = "snapshot")]
        no_snapshot: bool,

        /// Also write the built graph as a snapshot
        #[arg(long)]
        emit_snapshot: Option<PathBuf>,

        /// Degree thresholds, comma separated
        #[arg(long = "threshold", value_delimiter = ',')]
        thresholds: Vec<usize>,

        /// Number of companies to rank
        #[arg(long)]
        top: Option<usize>,

        /// Do not print the adjacency mapping
        #[arg(long)]
        hide_graph: bool,

        #[command(flatten)]
        sampling: SamplingArgs,
    },
    /// Build the graph and write it as a JSON snapshot
    Build {
        /// Directory of CSV exports
        #[arg(long)]
        input: Option<PathBuf>,

        /// Snapshot file to write
        #[arg(long, default_value = "adjacency_list.json")]
        output: PathBuf,
    },
    /// Sample random walks from a snapshot
    Sample {
        /// Snapshot to sample walks from
        #[arg(long)]
        snapshot: Option<PathBuf>,

        #[command(flatten)]
        sampling: SamplingArgs,
    },
    /// Rank companies across all exports
    Companies {
        /// Directory of CSV exports
        #[arg(long)]
        input: Option<PathBuf>,

        /// Number of companies to rank
        #[arg(long)]
        top: Option<usize>,
    },
}

fn main() {
    let Cli {
        config,
        format,
        verbose,
        command,
    } = Cli::parse();
    init_tracing(verbose);

    let result = load_config(config.as_deref()).and_then(|mut config| match command {
        Commands::Analyze {
            input,
            snapshot,
            no_snapshot,
            emit_snapshot,
            thresholds,
            top,
            hide_graph,
            sampling,
        } => {
            if let Some(input) = input {
                config.input_dir = input;
            }
            if no_snapshot {
                config.snapshot_path = None;
            } else if snapshot.is_some() {
                config.snapshot_path = snapshot;
            }
            if emit_snapshot.is_some() {
                config.emit_snapshot = emit_snapshot;
            }
            if !thresholds.is_empty() {
                config.thresholds = thresholds;
            }
            if let Some(top) = top {
                config.top_companies = top;
            }
            sampling.apply(&mut config.sampling);
            run_analyze(config, &format, hide_graph)
        }
        Commands::Build { input, output } => {
            if let Some(input) = input {
                config.input_dir = input;
            }
            run_build(&config, &output)
        }
        Commands::Sample { snapshot, sampling } => {
            config.snapshot_path = snapshot
                .or(config.snapshot_path)
                .or_else(|| Some(PathBuf::from("adjacency_list.json")));
            sampling.apply(&mut config.sampling);
            run_sample(config, &format)
        }
        Commands::Companies { input, top } => {
            if let Some(input) = input {
                config.input_dir = input;
            }
            if let Some(top) = top {
                config.top_companies = top;
            }
            run_companies(&config, &format)
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> anyhow::Result<AnalysisConfig> {
    match path {
        Some(path) => {
            let config = AnalysisConfig::from_yaml_file(path)
                .with_context(|| format!("loading config {}", path.display()))?;
            tracing::debug!("Loaded config from {:?}", path);
            Ok(config)
        }
        None => Ok(AnalysisConfig::default()),
    }
}

fn run_analyze(config: AnalysisConfig, format: &OutputFormat, hide_graph: bool) -> anyhow::Result<()> {
    let report = AnalysisPipeline::new(config).run();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Table => print_report(&report, hide_graph),
    }
    Ok(())
}

fn run_build(config: &AnalysisConfig, output: &Path) -> anyhow::Result<()> {
    let exports = load_directory(&config.input_dir)?;
    let graph = build_graph(&exports);
    save_snapshot(&graph, output)?;

    println!(
        "Wrote {} node(s), {} relationship(s) to {}",
        graph.node_count(),
        graph.edge_count(),
        output.display()
    );
    Ok(())
}

fn run_sample(config: AnalysisConfig, format: &OutputFormat) -> anyhow::Result<()> {
    let pipeline = AnalysisPipeline::new(config);
    let mut warnings = Vec::new();
    let sampling = pipeline.sample(None, &mut warnings);

    match format {
        OutputFormat::Json => {
            let json = serde_json::json!({ "sampling": sampling, "warnings": warnings });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Table => {
            print_warnings(&warnings);
            print_stage("Sampling", &sampling, print_sampling);
        }
    }
    Ok(())
}

fn run_companies(config: &AnalysisConfig, format: &OutputFormat) -> anyhow::Result<()> {
    let exports = load_directory(&config.input_dir)?;
    let companies = top_companies(&exports, config.top_companies);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&companies)?),
        OutputFormat::Table => print_companies(&companies),
    }
    Ok(())
}

fn print_report(report: &AnalysisReport, hide_graph: bool) {
    print_warnings(&report.warnings);

    if let StageOutcome::Failed(e) = &report.ingest {
        eprintln!("Ingest failed: {}", e);
    }
    print_stage("Graph", &report.graph, |graph| print_graph(graph, hide_graph));
    print_stage("Degree analysis", &report.degrees, print_degrees);
    print_stage("Company ranking", &report.companies, |companies| print_companies(companies));
    if let StageOutcome::Completed(path) = &report.snapshot {
        println!("\nSnapshot written to {}", path.display());
    }
    print_stage("Sampling", &report.sampling, print_sampling);
}

fn print_stage<T>(name: &str, outcome: &StageOutcome<T>, print: impl FnOnce(&T)) {
    match outcome {
        StageOutcome::Completed(value) => print(value),
        StageOutcome::Skipped(reason) => println!("\n{} skipped: {}", name, reason),
        StageOutcome::Failed(e) => eprintln!("\n{} failed: {}", name, e),
    }
}

fn print_warnings(warnings: &[String]) {
    for warning in warnings {
        eprintln!("Warning: {}", warning);
    }
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}

fn print_graph(graph: &AdjacencyGraph, hide_graph: bool) {
    println!("Total people: {}", graph.node_count());
    if hide_graph {
        return;
    }

    let mut table = new_table(vec!["Person", "Connections"]);
    for (person, connections) in graph.iter() {
        let names: Vec<&str> = connections.iter().map(|c| c.as_str()).collect();
        table.add_row(vec![person.to_string(), names.join(", ")]);
    }
    println!("{}", table);
}

fn print_degrees(report: &DegreeReport) {
    let mut ranking = new_table(vec!["Person", "Degree"]);
    for entry in &report.ranking {
        ranking.add_row(vec![entry.identity.to_string(), entry.degree.to_string()]);
    }
    println!("\n{}", ranking);
    println!("Average Degree: {:.2}", report.average_degree);

    let mut thresholds = new_table(vec!["Degree", "People"]);
    for threshold in &report.thresholds {
        thresholds.add_row(vec![format!("> {}", threshold.threshold), threshold.count.to_string()]);
    }
    println!("{}", thresholds);
}

fn print_companies(companies: &[CompanyCount]) {
    println!("\nTop {} Companies Across All Exports:", companies.len());
    let mut table = new_table(vec!["Company", "Connections"]);
    for company in companies {
        table.add_row(vec![company.company.clone(), company.connections.to_string()]);
    }
    println!("{}", table);
}

fn print_sampling(report: &SamplingReport) {
    for (idx, trial) in report.trials.iter().enumerate() {
        let walk: Vec<&str> = trial.walk.iter().map(|n| n.as_str()).collect();
        let pruned: Vec<&str> = trial.pruned.iter().map(|n| n.as_str()).collect();
        println!("\nExample {}: {} to {} ({:?})", idx + 1, trial.start, trial.end, trial.outcome);
        println!("   Random Walk : {}", walk.join(" , "));
        println!("   Pruned Path : {}", pruned.join(" , "));
    }

    let (Some(walk), Some(pruned)) = (&report.walk_statistics, &report.pruned_statistics) else {
        println!("\nNo walks were sampled");
        return;
    };

    println!("\nSTATISTICAL SUMMARY (max {} steps)", report.max_steps);
    let mut table = new_table(vec!["Metric", "Walk Length", "Pruned Path Length"]);
    table.add_row(vec!["Total Examples".to_string(), walk.count.to_string(), pruned.count.to_string()]);
    let rows: [(&str, fn(&SampleStatistics) -> String); 6] = [
        ("Average", |s| format!("{:.2}", s.mean)),
        ("Minimum", |s| s.min.to_string()),
        ("Maximum", |s| s.max.to_string()),
        ("Median", |s| s.median.to_string()),
        ("Mode", |s| s.mode.to_string()),
        ("Std Dev", |s| s.stdev.map_or_else(|| "n/a".to_string(), |d| format!("{:.2}", d))),
    ];
    for (metric, value) in rows {
        table.add_row(vec![metric.to_string(), value(walk), value(pruned)]);
    }
    println!("{}", table);
}
