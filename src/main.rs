use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use a_maze_ing::{
    config::{MazeConfig, parse_config},
    flaw::flaw_maze,
    generators::{generate_maze, get_rng},
    maze::{CellState, NoopSink, PatternOutcome, StepSink},
    output::write_output_file,
    render::{AnimationSink, render_ascii},
    solvers::{replay_path, solve_astar},
};

/// Delay between animation frames.
const FRAME_DELAY: Duration = Duration::from_millis(10);

/// The terminal belongs to the renderer, so logs go to a file next to the
/// binary's working directory.
fn init_tracing() -> tracing_appender::non_blocking::WorkerGuard {
    let file_appender = tracing_appender::rolling::never(".", "a-maze-ing.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .init();
    guard
}

fn run(config_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let config: MazeConfig = parse_config(config_path)?;
    tracing::info!(
        width = config.width,
        height = config.height,
        algorithm = %config.algorithm,
        perfect = config.perfect,
        "configuration loaded"
    );

    let mut rng = get_rng(config.seed);
    let mut animation;
    let mut noop = NoopSink;
    let sink: &mut dyn StepSink = if config.animations {
        animation = AnimationSink::new(FRAME_DELAY, config.entry, config.exit);
        &mut animation
    } else {
        &mut noop
    };

    let (mut grid, pattern) = generate_maze(&config, &mut rng, sink);
    if pattern == PatternOutcome::TooSmall {
        tracing::warn!(
            width = config.width,
            height = config.height,
            "maze too small for the '42' pattern, skipping pattern"
        );
        eprintln!("Maze too small for the '42' pattern, skipping pattern.");
    }

    if !config.perfect {
        flaw_maze(&mut grid, &mut rng, sink);
    }

    let solution = solve_astar(&grid, config.entry, config.exit);
    if solution.is_empty() && config.entry != config.exit {
        tracing::info!("entry and exit are disconnected, path is empty");
    }

    // Mark the solved route on the grid before the final render.
    if let Some(route) = replay_path(&grid, config.entry, &solution) {
        for coord in route {
            grid[coord].state = CellState::Path;
        }
    }

    println!(
        "{}",
        render_ascii(&grid, Some(config.entry), Some(config.exit))
    );
    let shown_path = if solution.is_empty() { "-" } else { solution.as_str() };
    println!("Path: {shown_path}");

    if let Some(output_file) = &config.output_file {
        write_output_file(output_file, &grid, config.entry, config.exit, &solution)?;
        tracing::info!(file = %output_file.display(), "output file written");
    }

    Ok(())
}

fn main() -> ExitCode {
    let _guard = init_tracing();

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let config_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("config.txt"));

    match run(&config_path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "run failed");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
