use std::io;

use thiserror::Error;
use tracing::debug;
use tracing::info;

use crate::Generation;
use crate::config::Config;
use crate::grid::Grid;
use crate::grid::GridError;
use crate::grid::RandomSource;
use crate::neighbors::count_live_neighbors;
use crate::render::Renderer;
use crate::rules::next_state;
use crate::topology::classify;

/// Compute the next generation of `grid`.
///
/// `grid` is only ever read, and the result is written to a fresh grid, so every neighbor count
/// sees the previous generation in full.
pub fn evolve(grid: &Grid) -> Result<Grid, GridError> {
    let (rows, cols) = (grid.rows(), grid.cols());
    let mut next = Grid::dead(rows, cols)?;

    for coord in grid.coords() {
        let class = classify(coord, rows, cols);
        let neighbors = count_live_neighbors(grid, coord, class);

        if next_state(neighbors, class) {
            next.set(coord, true)?;
        }
    }

    Ok(next)
}

/// Where a [`World`] is in its run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No grid yet
    Uninitialized,

    /// Holding the initial grid
    Seeded,

    /// Holding generation `n`, with more to go
    Evolving(Generation),

    /// All configured generations have run
    Done,
}

#[derive(Debug, Error)]
pub enum WorldError {
    #[error("World has not been seeded")]
    NotSeeded,

    #[error("All {generations} generations have already run")]
    Finished { generations: Generation },

    #[error("Seed grid is {got_rows}x{got_cols}, expected {rows}x{cols}")]
    DimensionMismatch {
        rows: usize,
        cols: usize,
        got_rows: usize,
        got_cols: usize,
    },

    #[error("Grid error: {0}")]
    Grid(#[from] GridError),

    #[error("Render error: {0}")]
    Render(#[from] io::Error),
}

/// Runs a grid through `config.generations` steps.
///
/// ```notrust
/// Uninitialized --seed--> Seeded --step--> Evolving(1) --step--> ... --step--> Done
/// ```
///
/// A zero generation config goes straight from `Seeded` to `Done` on `run`.
pub struct World {
    config: Config,
    grid: Option<Grid>,
    phase: Phase,
}

impl World {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            grid: None,
            phase: Phase::Uninitialized,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The current generation, if seeded
    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    /// Number of steps taken so far
    pub fn generation(&self) -> Generation {
        match self.phase {
            Phase::Uninitialized | Phase::Seeded => 0,
            Phase::Evolving(n) => n,
            Phase::Done => self.config.generations,
        }
    }

    /// Seed with a grid where every cell is dead
    pub fn seed_dead(&mut self) -> Result<&Grid, WorldError> {
        let grid = Grid::dead(self.config.rows, self.config.cols)?;
        Ok(self.install(grid))
    }

    /// Seed by drawing every cell from `source`
    pub fn seed_random<S>(&mut self, source: &mut S) -> Result<&Grid, WorldError>
    where
        S: RandomSource + ?Sized,
    {
        let grid = Grid::random(self.config.rows, self.config.cols, source)?;
        Ok(self.install(grid))
    }

    /// Seed with an explicit grid, which must match the configured dimensions
    pub fn seed_grid(&mut self, grid: Grid) -> Result<&Grid, WorldError> {
        let (rows, cols) = (self.config.rows, self.config.cols);

        if (grid.rows(), grid.cols()) != (rows, cols) {
            return Err(WorldError::DimensionMismatch {
                rows,
                cols,
                got_rows: grid.rows(),
                got_cols: grid.cols(),
            });
        }

        Ok(self.install(grid))
    }

    fn install(&mut self, grid: Grid) -> &Grid {
        debug!(
            rows = grid.rows(),
            cols = grid.cols(),
            live = grid.live_count(),
            "seeded"
        );

        self.phase = Phase::Seeded;
        self.grid.insert(grid)
    }

    /// Advance by one generation and return the new grid.
    ///
    /// The previous grid is dropped once the new one is complete.
    pub fn step(&mut self) -> Result<&Grid, WorldError> {
        let n = match self.phase {
            Phase::Uninitialized => return Err(WorldError::NotSeeded),
            Phase::Done => {
                return Err(WorldError::Finished {
                    generations: self.config.generations,
                });
            }
            Phase::Seeded if self.config.generations == 0 => {
                return Err(WorldError::Finished { generations: 0 });
            }
            Phase::Seeded => 1,
            Phase::Evolving(n) => n + 1,
        };

        let current = self.grid.as_ref().ok_or(WorldError::NotSeeded)?;
        let next = evolve(current)?;

        debug!(generation = n, live = next.live_count(), "evolved");

        self.phase = if n >= self.config.generations {
            Phase::Done
        } else {
            Phase::Evolving(n)
        };

        Ok(self.grid.insert(next))
    }

    /// Show the initial grid, then step through every remaining generation, showing each one.
    pub fn run<R>(&mut self, renderer: &mut R) -> Result<(), WorldError>
    where
        R: Renderer + ?Sized,
    {
        self.run_until(renderer, || true)
    }

    /// Like `run`, but `keep_going` is checked between generations. Returning `false` stops the
    /// run early, leaving the world in its current phase.
    pub fn run_until<R, F>(&mut self, renderer: &mut R, mut keep_going: F) -> Result<(), WorldError>
    where
        R: Renderer + ?Sized,
        F: FnMut() -> bool,
    {
        match self.phase {
            Phase::Uninitialized => return Err(WorldError::NotSeeded),
            Phase::Seeded => {
                let grid = self.grid.as_ref().ok_or(WorldError::NotSeeded)?;
                renderer.initial(grid)?;

                if self.config.generations == 0 {
                    self.phase = Phase::Done;
                }
            }
            Phase::Evolving(_) | Phase::Done => {}
        }

        while self.phase != Phase::Done {
            if !keep_going() {
                info!(generation = self.generation(), "run stopped early");
                return Ok(());
            }

            self.step()?;

            let n = self.generation();
            let grid = self.grid.as_ref().ok_or(WorldError::NotSeeded)?;
            renderer.generation(n, grid)?;
        }

        info!(
            generations = self.config.generations,
            live = self.grid.as_ref().map_or(0, Grid::live_count),
            "run complete"
        );

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::grid::Coord;
    use crate::pattern::parse_pattern;
    use crate::render::Recorder;

    fn config(rows: usize, cols: usize, generations: Generation) -> Config {
        Config {
            rows,
            cols,
            generations,
        }
    }

    #[test]
    fn lone_center_cell_dies() {
        let grid = parse_pattern("0 0 0\n0 1 0\n0 0 0").unwrap();

        assert!(evolve(&grid).unwrap().is_all_dead());
    }

    #[test]
    fn full_two_by_two_dies() {
        let grid = parse_pattern("1 1\n1 1").unwrap();

        assert!(evolve(&grid).unwrap().is_all_dead());
    }

    #[test]
    fn dead_cell_is_born_from_two_limited_neighbors() {
        // The top left corner sees exactly 2 live neighbors
        let grid = parse_pattern("0 1 0\n1 0 0\n0 0 0").unwrap();
        let next = evolve(&grid).unwrap();

        assert_eq!(next.get(Coord::new(0, 0)), Some(true));
    }

    #[test]
    fn evolve_does_not_touch_input() {
        let grid = parse_pattern("1 1 0\n0 1 1\n1 0 1").unwrap();
        let before = grid.clone();

        let _ = evolve(&grid).unwrap();

        assert_eq!(grid, before);
    }

    #[test]
    fn step_before_seed_fails() {
        let mut world = World::new(config(3, 3, 1));

        assert!(matches!(world.step(), Err(WorldError::NotSeeded)));
        assert_eq!(world.phase(), Phase::Uninitialized);
    }

    #[test]
    fn phases_follow_the_run() {
        let mut world = World::new(config(3, 3, 2));
        world.seed_dead().unwrap();
        assert_eq!(world.phase(), Phase::Seeded);

        world.step().unwrap();
        assert_eq!(world.phase(), Phase::Evolving(1));

        world.step().unwrap();
        assert_eq!(world.phase(), Phase::Done);
        assert_eq!(world.generation(), 2);

        assert!(matches!(
            world.step(),
            Err(WorldError::Finished { generations: 2 })
        ));
    }

    #[test]
    fn step_with_zero_generations_leaves_phase_alone() {
        let mut world = World::new(config(2, 2, 0));
        world.seed_dead().unwrap();

        assert!(matches!(
            world.step(),
            Err(WorldError::Finished { generations: 0 })
        ));
        assert_eq!(world.phase(), Phase::Seeded);
        assert!(world.grid().is_some_and(Grid::is_all_dead));
    }

    #[test]
    fn seeding_an_unallocatable_grid_fails() {
        let mut world = World::new(Config::normalized(i64::MAX, i64::MAX, 1));

        assert!(matches!(
            world.seed_dead(),
            Err(WorldError::Grid(GridError::Allocation { .. }))
        ));
        assert_eq!(world.phase(), Phase::Uninitialized);
        assert!(world.grid().is_none());
    }

    #[test]
    fn seed_grid_checks_dimensions() {
        let mut world = World::new(config(3, 3, 1));
        let res = world.seed_grid(Grid::dead(2, 3).unwrap());

        assert!(matches!(
            res,
            Err(WorldError::DimensionMismatch {
                rows: 3,
                cols: 3,
                got_rows: 2,
                got_cols: 3
            })
        ));
        assert_eq!(world.phase(), Phase::Uninitialized);
    }

    #[test]
    fn run_renders_every_generation() {
        let mut world = World::new(config(4, 5, 3));
        world.seed_dead().unwrap();

        let mut recorder = Recorder::default();
        world.run(&mut recorder).unwrap();

        assert!(recorder.initial.is_some());
        let numbers: Vec<Generation> = recorder.generations.iter().map(|(n, _)| *n).collect();
        assert_eq!(numbers, [1, 2, 3]);
        assert_eq!(world.phase(), Phase::Done);
    }

    #[test]
    fn zero_generations_only_renders_initial() {
        let mut world = World::new(config(2, 2, 0));
        world.seed_dead().unwrap();

        let mut recorder = Recorder::default();
        world.run(&mut recorder).unwrap();

        assert!(recorder.initial.is_some());
        assert!(recorder.generations.is_empty());
        assert_eq!(world.phase(), Phase::Done);
    }

    #[test]
    fn run_until_stops_between_generations() {
        let mut world = World::new(config(3, 3, 10));
        world.seed_dead().unwrap();

        let mut budget = 4;
        let mut recorder = Recorder::default();
        world
            .run_until(&mut recorder, || {
                budget -= 1;
                budget >= 0
            })
            .unwrap();

        assert_eq!(recorder.generations.len(), 4);
        assert_eq!(world.phase(), Phase::Evolving(4));

        // Picking the run back up continues where it stopped, without a second initial grid
        let mut rest = Recorder::default();
        world.run(&mut rest).unwrap();

        assert!(rest.initial.is_none());
        assert_eq!(rest.generations.first().map(|(n, _)| *n), Some(5));
        assert_eq!(rest.generations.len(), 6);
    }
}
