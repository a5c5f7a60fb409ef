mod report;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use minimax_agents::{select, Agent, GreedyAgent, MinimaxAgent, RandomAgent};
use minimax_core::{tree, Tree};
use serde_json::Value;
use std::io::{self, Write};
use std::path::PathBuf;

/// Positions are arbitrary JSON values, scores are integers.
type Document = Tree<Value, i64>;

#[derive(Parser, Debug)]
#[command(name = "minimax", version, about = "Pick the best move from a two-ply decision tree")]
struct Args {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the position of the chosen candidate, or `none`
    Select {
        /// Tree document (JSON); reads stdin when absent or `-`
        file: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value_t = AgentKind::Minimax)]
        agent: AgentKind,

        /// Seed for the random agent
        #[arg(long)]
        seed: Option<u64>,

        /// Also print the tree as it stands after selection
        #[arg(long)]
        emit_tree: bool,
    },
    /// Show how every candidate was scored
    Explain {
        /// Tree document (JSON); reads stdin when absent or `-`
        file: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum AgentKind {
    Minimax,
    Greedy,
    Random,
}

impl AgentKind {
    fn build(self, seed: Option<u64>) -> Box<dyn Agent<Value, i64>> {
        if seed.is_some() && self != AgentKind::Random {
            log::warn!("--seed only applies to the random agent, ignoring it");
        }
        match self {
            AgentKind::Minimax => Box::new(MinimaxAgent::new()),
            AgentKind::Greedy => Box::new(GreedyAgent::new()),
            AgentKind::Random => match seed {
                Some(seed) => Box::new(RandomAgent::seeded(seed)),
                None => Box::new(RandomAgent::new()),
            },
        }
    }
}

fn init_logging(debug: bool) {
    let level = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, level),
    )
    .target(env_logger::Target::Stderr)
    .init();
}

fn read_document(file: Option<&PathBuf>) -> Result<Document> {
    match file {
        Some(path) if path.as_os_str() != "-" => {
            log::debug!("reading tree from {}", path.display());
            Ok(tree::load(path)?)
        }
        _ => {
            log::debug!("reading tree from stdin");
            tree::from_reader(io::stdin().lock()).context("failed to parse tree from stdin")
        }
    }
}

fn run_select(
    file: Option<&PathBuf>,
    kind: AgentKind,
    seed: Option<u64>,
    emit_tree: bool,
) -> Result<()> {
    let mut document = read_document(file)?;
    let mut agent = kind.build(seed);
    log::info!("{} choosing among {} candidates", agent.name(), document.len());

    let choice = agent.best_move(&mut document);

    let mut stdout = io::stdout().lock();
    match choice {
        Some(position) => writeln!(stdout, "{}", position)?,
        None => writeln!(stdout, "none")?,
    }
    if emit_tree {
        writeln!(stdout, "{}", tree::to_json_string(&document)?)?;
    }
    Ok(())
}

fn run_explain(file: Option<&PathBuf>) -> Result<()> {
    let document = read_document(file)?;
    let selection = select(&document);

    let mut stdout = io::stdout().lock();
    match selection {
        Some(selection) => report::write_selection(&mut stdout, &document, &selection)?,
        None => writeln!(stdout, "none")?,
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.debug);

    let result = match &args.command {
        Command::Select {
            file,
            agent,
            seed,
            emit_tree,
        } => run_select(file.as_ref(), *agent, *seed, *emit_tree),
        Command::Explain { file } => run_explain(file.as_ref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
