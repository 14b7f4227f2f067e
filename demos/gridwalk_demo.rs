//! Terminal demo: generate a maze, then walk it with each traversal.
//!
//! Run: cargo run --bin gridwalk-demo -- --size 21 --generation recursive-division

use std::collections::BTreeSet;
use std::sync::mpsc;
use std::thread;

use clap::Parser;
use gridwalk_core::{Context, Event, Grid, NoopSink, Pos};
use gridwalk_mazes::Generation;
use gridwalk_paths::{SearchOutcome, Traversal};
use gridwalk_run::{RunConfig, RunController, RunError, RunRequest};

#[derive(Parser)]
#[clap(version, about = "Maze generation and grid search in the terminal")]
struct Cli {
    /// Side length of the grid.
    #[clap(short, long, default_value_t = 21)]
    size: i32,
    /// Maze generator: randomized-frontier or recursive-division.
    #[clap(short, long, default_value = "randomized-frontier")]
    generation: Generation,
    /// Run only this traversal instead of all four.
    #[clap(short, long)]
    traversal: Option<Traversal>,
    /// Seed for the maze generator.
    #[clap(long)]
    seed: Option<u64>,
    /// Milliseconds to hold each step.
    #[clap(long, default_value_t = 0)]
    pace_ms: u64,
    /// Cancel a traversal once it has visited this many cells.
    #[clap(long)]
    max_visits: Option<usize>,
}

/// What one traversal produced, as seen from the receiving end.
struct Walk {
    outcome: SearchOutcome,
    visited: BTreeSet<Pos>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), RunError> {
    let controller = RunController::new();
    let mut config = RunConfig::paced(cli.pace_ms);
    config.seed = cli.seed;

    let report = controller.run(
        RunRequest::Generate {
            size: cli.size,
            generation: cli.generation,
        },
        &config,
        &mut NoopSink,
        Context::new(),
    )?;
    let Some(maze) = report.maze() else {
        return Ok(());
    };

    let corner = (cli.size - 2).max(0);
    let grid = Grid::new(cli.size, Pos::new(1, 1), Pos::new(corner, corner))
        .with_walls(maze.walls.iter().copied());
    println!("{} maze, {} walls", cli.generation, grid.walls().len());

    let traversals = match cli.traversal {
        Some(t) => vec![t],
        None => Traversal::ALL.to_vec(),
    };
    for traversal in traversals {
        let walk = walk(&controller, &grid, traversal, &config, cli.max_visits)?;
        println!();
        println!(
            "{traversal}: {:?}, path {}, visited {}{}",
            walk.outcome.status,
            walk.outcome.path_len(),
            walk.outcome.visited_count,
            if traversal.is_optimal() { " (shortest)" } else { "" }
        );
        print!("{}", render(&grid, &walk));
    }
    Ok(())
}

/// Run one traversal on a worker thread, draining its events here and
/// cancelling it once `max_visits` is reached.
fn walk(
    controller: &RunController,
    grid: &Grid,
    traversal: Traversal,
    config: &RunConfig,
    max_visits: Option<usize>,
) -> Result<Walk, RunError> {
    let ctx = Context::new();
    let (tx, rx) = mpsc::channel::<Event>();

    thread::scope(|s| {
        let worker = {
            let ctx = ctx.clone();
            s.spawn(move || {
                let mut tx = tx;
                let mut ctl = config.control(ctx);
                controller.traverse(grid, traversal, &mut tx, &mut ctl)
            })
        };

        let mut visited = BTreeSet::new();
        for event in rx {
            if let Event::Visit(p) = event {
                visited.insert(p);
                if max_visits.is_some_and(|max| visited.len() >= max) && !ctx.is_done() {
                    log::info!("{traversal}: visit budget reached, cancelling");
                    ctx.cancel();
                }
            }
        }

        let outcome = worker
            .join()
            .unwrap_or_else(|panic| std::panic::resume_unwind(panic))?;
        Ok(Walk { outcome, visited })
    })
}

fn render(grid: &Grid, walk: &Walk) -> String {
    let path: BTreeSet<Pos> = walk.outcome.path.iter().copied().collect();
    let mut out = String::new();
    for row in 0..grid.size() {
        for col in 0..grid.size() {
            let p = Pos::new(row, col);
            let c = if p == grid.start() {
                'S'
            } else if p == grid.target() {
                'T'
            } else if grid.is_blocked(p) {
                '#'
            } else if path.contains(&p) {
                '*'
            } else if walk.visited.contains(&p) {
                '.'
            } else {
                ' '
            };
            out.push(c);
        }
        out.push('\n');
    }
    out
}
