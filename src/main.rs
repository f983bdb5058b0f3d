use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cell_life::config::Config;
use cell_life::config::Prompter;
use cell_life::pattern::parse_pattern;
use cell_life::render::TextRenderer;
use cell_life::world::World;

#[derive(Parser)]
#[command(name = "clg")]
#[command(version)]
#[command(about = "Cell life game: a zero-player, edge-limited life automaton")]
struct Cli {
    /// Number of rows. Zero or negative means 10
    #[arg(short, long, allow_negative_numbers = true)]
    rows: Option<i64>,

    /// Number of columns. Zero or negative means 10
    #[arg(short, long, allow_negative_numbers = true)]
    cols: Option<i64>,

    /// Number of generations to evolve. Zero or negative means 10
    #[arg(short, long, allow_negative_numbers = true)]
    generations: Option<i64>,

    /// Seed for the random initial grid, for reproducible runs
    #[arg(long, conflicts_with_all = ["empty", "pattern"])]
    seed: Option<u64>,

    /// Start from an all-dead grid instead of a random one
    #[arg(long, conflicts_with = "pattern")]
    empty: bool,

    /// Start from a text pattern (rows of 1/0 or */.). Sets rows and columns
    #[arg(short, long, conflicts_with_all = ["rows", "cols"])]
    pattern: Option<PathBuf>,

    /// Prefix every printed row with two spaces
    #[arg(long)]
    indent: bool,

    /// Never prompt: missing values fall back to their defaults
    #[arg(long)]
    no_prompt: bool,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr, stdout is reserved for the grids
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let pattern = match &cli.pattern {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read pattern {}", path.display()))?;
            let grid = parse_pattern(&text)
                .with_context(|| format!("Failed to parse pattern {}", path.display()))?;

            Some(grid)
        }
        None => None,
    };

    let config = match &pattern {
        Some(grid) => {
            let known = (Some(grid.rows() as i64), Some(grid.cols() as i64));
            let (_, _, generations) = answers(known, cli.generations, cli.no_prompt)?;

            Config::with_dimensions(grid.rows(), grid.cols(), generations)
        }
        None => {
            let (rows, cols, generations) =
                answers((cli.rows, cli.cols), cli.generations, cli.no_prompt)?;

            Config::normalized(rows, cols, generations)
        }
    };

    info!(
        rows = config.rows,
        cols = config.cols,
        generations = config.generations,
        "starting run"
    );

    let mut world = World::new(config);

    match (pattern, cli.empty) {
        (Some(grid), _) => {
            world.seed_grid(grid)?;
        }
        (None, true) => {
            world.seed_dead().context("Failed to allocate the colony")?;
        }
        (None, false) => {
            let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
            info!(seed, "seeding random colony");

            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            world
                .seed_random(&mut rng)
                .context("Failed to allocate the colony")?;
        }
    }

    let stdout = io::stdout().lock();
    let mut renderer = if cli.indent {
        TextRenderer::indented(stdout)
    } else {
        TextRenderer::new(stdout)
    };

    world.run(&mut renderer).context("Evolution failed")?;

    Ok(())
}

/// Fill in `(rows, cols, generations)`, prompting on stderr for whatever the command line left out.
/// With `no_prompt`, missing values are 0 and end up as defaults.
fn answers(
    (rows, cols): (Option<i64>, Option<i64>),
    generations: Option<i64>,
    no_prompt: bool,
) -> io::Result<(i64, i64, i64)> {
    let complete = rows.is_some() && cols.is_some() && generations.is_some();

    if no_prompt || complete {
        return Ok((
            rows.unwrap_or(0),
            cols.unwrap_or(0),
            generations.unwrap_or(0),
        ));
    }

    let mut prompter = Prompter::new(io::stdin().lock(), io::stderr());
    prompter.banner()?;
    prompter.fill(rows, cols, generations)
}
