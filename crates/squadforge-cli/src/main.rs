//! SquadForge command line.
//!
//! Loads a roster JSON document and a request TOML file, runs one exact
//! squad optimization and prints the selected eleven.
//!
//! Run with: squadforge --roster players.json --request request.toml

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

use squadforge_config::RequestConfig;
use squadforge_core::{PositionGroup, Roster, Selection};
use squadforge_milp::SquadSolver;

#[derive(Debug, Parser)]
#[command(name = "squadforge", version, about = "Exact MILP squad optimizer")]
struct Cli {
    /// Roster JSON file (array of player records).
    #[arg(long)]
    roster: PathBuf,

    /// Request TOML file; defaults apply when omitted.
    #[arg(long)]
    request: Option<PathBuf>,

    /// Print the raw JSON result instead of the human summary.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{} {message}", "error:".bright_red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let roster = Roster::from_json_file(&cli.roster).map_err(|e| e.to_string())?;

    let config = match &cli.request {
        Some(path) => RequestConfig::load(path).map_err(|e| e.to_string())?,
        None => RequestConfig::default(),
    };
    let request = config.into_request().map_err(|e| e.to_string())?;

    let selection = SquadSolver::new()
        .solve(&roster, &request)
        .map_err(|e| e.to_string())?;

    if cli.json {
        let doc = serde_json::to_string_pretty(&selection).map_err(|e| e.to_string())?;
        println!("{doc}");
    } else {
        print_summary(&selection);
    }
    Ok(())
}

fn print_summary(selection: &Selection) {
    if !selection.status.is_optimal() {
        println!(
            "{} no squad satisfies the given constraints ({})",
            "✗".bright_red(),
            selection.status
        );
        println!("  try relaxing the budget or age band, or removing locked players");
        return;
    }

    println!("{} optimal squad found", "✓".bright_green());
    if let (Some(cost), Some(age)) = (selection.total_budget, selection.average_age) {
        println!(
            "  weekly cost {} | average age {:.1}",
            format!("€{:.1}M", cost / 1_000_000.0).bright_cyan(),
            age
        );
    }

    for group in PositionGroup::ALL {
        let mut line = selection
            .players()
            .iter()
            .filter(|p| p.role.group_hint() == group)
            .collect::<Vec<_>>();
        if line.is_empty() {
            continue;
        }
        line.sort_by(|a, b| a.role.cmp(&b.role).then(a.name.cmp(&b.name)));
        println!("  {}", group.bright_white().bold());
        for p in line {
            println!(
                "    {:<4} {:<24} {:>5.1}  €{:.2}M",
                p.role.to_string(),
                p.name,
                p.rating,
                p.wage_eur / 1_000_000.0
            );
        }
    }
}
