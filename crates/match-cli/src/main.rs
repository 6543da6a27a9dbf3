//! `interview-match` CLI — build interview schedules from availability files.
//!
//! ## Usage
//!
//! ```sh
//! # Schedule from a request file, JSON report on stdout
//! interview-match schedule -i request.json
//!
//! # Read the request from stdin and print a table
//! cat request.json | interview-match schedule --format table
//!
//! # Write the report to a file
//! interview-match schedule -i request.json -o schedule.json
//!
//! # List compatible recruiter/candidate pairs
//! interview-match graph -i request.json
//!
//! # Show pipeline diagnostics on stderr (RUST_LOG overrides -v)
//! interview-match -v schedule -i request.json
//! ```
//!
//! A request looks like:
//!
//! ```json
//! {
//!   "recruiters": [{"participant_id": "r@corp", "start": "09:00", "end": "10:00"}],
//!   "candidates": [{"participant_id": "c@mail", "start": "09:30", "end": "11:00"}]
//! }
//! ```

use std::io::{self, IsTerminal, Read};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use match_engine::interval::format_clock;
use match_engine::{group_slots, CompatibilityGraph, Role, ScheduleReport, ScheduleRequest};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const NO_SLOTS_NOTICE: &str = "No valid interview slots found.";

#[derive(Parser)]
#[command(
    name = "interview-match",
    version,
    about = "Match recruiters and candidates by availability"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a one-to-one interview schedule
    Schedule {
        /// Input request file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// List compatible recruiter/candidate pairs
    Graph {
        /// Input request file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Table,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Schedule {
            input,
            output,
            format,
        } => {
            let request = read_request(input.as_deref())?;
            let report = match_engine::schedule(request).context("Failed to build schedule")?;

            if report.entries.is_empty() {
                eprintln!("{}", NO_SLOTS_NOTICE);
            }

            let rendered = match format {
                Format::Json => {
                    let mut json = serde_json::to_string_pretty(&report)?;
                    json.push('\n');
                    json
                }
                Format::Table => render_table(&report),
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Graph { input } => {
            let request = read_request(input.as_deref())?;
            let recruiters = group_slots(Role::Recruiter, &request.recruiters)
                .context("Invalid recruiter availability")?;
            let candidates = group_slots(Role::Candidate, &request.candidates)
                .context("Invalid candidate availability")?;
            let graph = CompatibilityGraph::build(recruiters, candidates);

            if graph.edge_count() == 0 {
                eprintln!("{}", NO_SLOTS_NOTICE);
            }
            print!("{}", render_graph(&graph));
        }
    }

    Ok(())
}

/// Install a stderr subscriber; `RUST_LOG` takes precedence over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn read_request(path: Option<&str>) -> Result<ScheduleRequest> {
    debug!(source = path.unwrap_or("stdin"), "reading availability request");
    let raw = read_input(path)?;
    serde_json::from_str(&raw).context("Failed to parse availability request")
}

/// Plain-text schedule: one aligned row per interview, then a summary.
fn render_table(report: &ScheduleReport) -> String {
    let recruiter_width = report
        .entries
        .iter()
        .map(|e| e.recruiter_id.len())
        .chain(["Recruiter".len()])
        .max()
        .unwrap_or_default();
    let candidate_width = report
        .entries
        .iter()
        .map(|e| e.candidate_id.len())
        .chain(["Candidate".len()])
        .max()
        .unwrap_or_default();

    let mut out = format!(
        "{:<rw$}  {:<cw$}  {:<8}  {}\n",
        "Recruiter",
        "Candidate",
        "Start",
        "End",
        rw = recruiter_width,
        cw = candidate_width
    );
    for entry in &report.entries {
        out.push_str(&format!(
            "{:<rw$}  {:<cw$}  {:<8}  {}\n",
            entry.recruiter_id,
            entry.candidate_id,
            format_clock(entry.start),
            format_clock(entry.end),
            rw = recruiter_width,
            cw = candidate_width
        ));
    }

    out.push_str(&format!(
        "\nScheduled: {}  Matched: {}  Compatible pairs: {}\n",
        report.entries.len(),
        report.matched_pairs,
        report.edge_count
    ));
    if report.skipped_count() > 0 {
        out.push_str(&format!("Skipped (no common window): {}\n", report.skipped_count()));
    }
    if !report.unmatched_recruiters.is_empty() {
        out.push_str(&format!(
            "Unmatched recruiters: {}\n",
            report.unmatched_recruiters.join(", ")
        ));
    }
    if !report.unmatched_candidates.is_empty() {
        out.push_str(&format!(
            "Unmatched candidates: {}\n",
            report.unmatched_candidates.join(", ")
        ));
    }
    out
}

/// Edge list followed by participants that have no compatible counterpart.
fn render_graph(graph: &CompatibilityGraph) -> String {
    let mut out = String::new();
    for (r, c) in graph.edges() {
        out.push_str(&format!(
            "{} -> {}\n",
            graph.recruiters()[r].id,
            graph.candidates()[c].id
        ));
    }
    for participant in graph.isolated_recruiters().chain(graph.isolated_candidates()) {
        out.push_str(&format!("isolated {}: {}\n", participant.role, participant.id));
    }
    out
}

/// Raw request text from `path`, or from stdin when no path is given.
fn read_input(path: Option<&str>) -> Result<String> {
    let Some(path) = path else {
        let mut raw = String::new();
        io::stdin()
            .read_to_string(&mut raw)
            .context("Failed to read availability request from stdin")?;
        return Ok(raw);
    };
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read availability request file: {path}"))
}

/// Rendered report to `path`, or to stdout when no path is given.
fn write_output(path: Option<&str>, rendered: &str) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("Failed to write schedule report file: {path}")),
        None => {
            print!("{rendered}");
            Ok(())
        }
    }
}
