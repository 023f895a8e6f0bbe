//! `gridsearch`: animate BFS, DFS, uniform-cost or A* search on a square
//! grid in the terminal, or run it in batch mode and print the statistics.

use std::io;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

use gridsearch_core::{Algorithm, Cell, Context, SearchConfig};
use gridsearch_paths::view::FlagGrid;
use gridsearch_paths::{Pacing, ResultSummary, StepObservation, run, run_with};
use gridsearch_term::render::{Terminal, spawn_key_watcher};
use gridsearch_term::setup::{parse_cell, place};
use gridsearch_term::stats::StatsPanel;

#[derive(Parser, Debug)]
#[command(name = "gridsearch")]
#[command(about = "Watch classic path searches explore a grid")]
struct Args {
    /// Grid side length
    #[arg(long, default_value_t = 10)]
    size: i32,

    /// bfs, dfs, ucs or astar
    #[arg(long, short, default_value = "astar")]
    algorithm: String,

    /// A* heuristic: manhattan or euclidean
    #[arg(long)]
    heuristic: Option<String>,

    /// Start cell as ROW,COL (random when omitted)
    #[arg(long, value_parser = parse_cell)]
    start: Option<Cell>,

    /// Goal cell as ROW,COL (random when omitted)
    #[arg(long, value_parser = parse_cell)]
    goal: Option<Cell>,

    /// Pause after every step, in milliseconds
    #[arg(long, default_value_t = 100)]
    delay_ms: u64,

    /// Seed for random start/goal placement
    #[arg(long)]
    seed: Option<u64>,

    /// Run without animation and print the statistics
    #[arg(long)]
    batch: bool,

    /// Print the result summary as JSON (implies --batch)
    #[arg(long)]
    json: bool,

    /// More log output (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8, live: bool) {
    let from_env = std::env::var_os(EnvFilter::DEFAULT_ENV).is_some();
    // Log lines would tear through the animation unless asked for.
    if live && verbose == 0 && !from_env {
        return;
    }
    let filter = if from_env {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        })
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn config(args: &Args) -> Result<SearchConfig, Box<dyn std::error::Error>> {
    let (start, goal) = match args.seed {
        Some(seed) => place(&mut StdRng::seed_from_u64(seed), args.size, args.start, args.goal)?,
        None => place(&mut rand::rng(), args.size, args.start, args.goal)?,
    };
    let config = SearchConfig::from_selectors(
        start,
        goal,
        args.size,
        &args.algorithm,
        args.heuristic.as_deref(),
    )?
    .with_delay_ms(args.delay_ms);
    config.validate()?;
    Ok(config)
}

fn header(config: &SearchConfig) -> String {
    let name = match config.algorithm {
        Algorithm::AStar => format!("{} ({})", config.algorithm, config.heuristic()),
        other => other.to_string(),
    };
    format!(
        "{name} on {n}x{n}: {} -> {}   [q/Esc to stop]",
        config.start,
        config.goal,
        n = config.size
    )
}

fn progress(obs: &StepObservation) -> String {
    let mut line = format!(
        "current {}  visited {}  frontier {}",
        obs.current,
        obs.visited.len(),
        obs.frontier.len()
    );
    if let Some(g) = obs.path_cost {
        line.push_str(&format!("  g={g}"));
    }
    if let (Some(h), Some(f)) = (obs.heuristic, obs.total_cost) {
        line.push_str(&format!("  h={h:.2}  f={f:.2}"));
    }
    line
}

fn batch(config: &SearchConfig, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let summary = run_with(
        config,
        &mut |_: &StepObservation| {},
        &mut Pacing::none(),
        &Context::new(),
    );
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", StatsPanel(&summary));
    }
    Ok(())
}

fn live(config: &SearchConfig) -> Result<ResultSummary, Box<dyn std::error::Error>> {
    let mut term = Terminal::init()?;
    let mut grid = FlagGrid::new(config.size, config.start, config.goal);
    let header = header(config);
    term.draw(&grid, &header, &[])?;

    let ctx = Context::new();
    let stop = Context::new();
    let watcher = spawn_key_watcher(ctx.clone(), stop.clone());

    let mut draw_err: Option<io::Error> = None;
    let summary = run(
        config,
        &mut |obs: &StepObservation| {
            if draw_err.is_some() {
                return;
            }
            grid.apply_step(obs);
            if let Err(e) = term.draw(&grid, &header, &[progress(obs)]) {
                log::error!("drawing failed: {e}");
                draw_err = Some(e);
                ctx.cancel();
            }
        },
        &ctx,
    );

    stop.cancel();
    match watcher.join() {
        Ok(res) => res?,
        Err(_) => log::warn!("key watcher panicked"),
    }
    if let Some(e) = draw_err {
        return Err(e.into());
    }

    grid.apply_result(&summary);
    let mut footer: Vec<String> = StatsPanel(&summary)
        .to_string()
        .lines()
        .map(str::to_owned)
        .collect();
    footer.push(String::new());
    footer.push("press any key to exit".to_owned());
    term.draw(&grid, &header, &footer)?;
    term.wait_key()?;
    Ok(summary)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let batch_mode = args.batch || args.json;
    init_logging(args.verbose, !batch_mode);

    let config = config(&args)?;
    log::info!(
        "{} from {} to {} on a {}x{} grid",
        config.algorithm,
        config.start,
        config.goal,
        config.size,
        config.size
    );

    if batch_mode {
        return batch(&config, args.json);
    }
    let summary = live(&config)?;
    println!("{}", StatsPanel(&summary));
    Ok(())
}
