use std::io;
use std::io::Write;

use crate::Generation;
use crate::grid::Grid;

const INITIAL_HEADER: &str = "The initial colony:";
const GENERATION_HEADER: &str = "Generation: ";

/// Row prefix used by [`TextRenderer::indented`]
const INDENT: &str = "  ";

/// Something that gets shown every grid of a run, in order.
pub trait Renderer {
    /// Called once, with the seeded grid, before any evolution happens
    fn initial(&mut self, grid: &Grid) -> io::Result<()>;

    /// Called after each step. `generation` starts at 1.
    fn generation(&mut self, generation: Generation, grid: &Grid) -> io::Result<()>;
}

/// Serialize a grid as text: `1` for alive, `0` for dead, cells separated by a single space and
/// every row terminated by `\n`.
pub fn render_grid(grid: &Grid) -> String {
    render_rows(grid, "")
}

fn render_rows(grid: &Grid, prefix: &str) -> String {
    // "1 " per cell, minus the last space, plus the newline
    let mut fb = String::with_capacity(grid.rows() * (prefix.len() + 2 * grid.cols()));

    for row in grid.iter_rows() {
        fb.push_str(prefix);

        for (i, &alive) in row.iter().enumerate() {
            if i > 0 {
                fb.push(' ');
            }
            fb.push(if alive { '1' } else { '0' });
        }

        fb.push('\n');
    }

    fb
}

/// Writes each grid as text, with a header line before it.
///
/// ```notrust
/// The initial colony:
///
/// 0 1
/// 1 0
///
/// Generation: 1
///
/// 0 0
/// 0 0
/// ```
pub struct TextRenderer<W> {
    out: W,
    prefix: &'static str,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, prefix: "" }
    }

    /// Like `new`, but every row is prefixed with two spaces
    pub fn indented(out: W) -> Self {
        Self {
            out,
            prefix: INDENT,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn initial(&mut self, grid: &Grid) -> io::Result<()> {
        write!(self.out, "{INITIAL_HEADER}\n\n")?;
        self.out.write_all(render_rows(grid, self.prefix).as_bytes())?;
        self.out.flush()
    }

    fn generation(&mut self, generation: Generation, grid: &Grid) -> io::Result<()> {
        write!(self.out, "\n{GENERATION_HEADER}{generation}\n\n")?;
        self.out.write_all(render_rows(grid, self.prefix).as_bytes())?;
        self.out.flush()
    }
}

/// Keeps every grid it's shown. Handy to inspect a run after the fact.
#[derive(Debug, Default)]
pub struct Recorder {
    pub initial: Option<Grid>,
    pub generations: Vec<(Generation, Grid)>,
}

impl Renderer for Recorder {
    fn initial(&mut self, grid: &Grid) -> io::Result<()> {
        self.initial = Some(grid.clone());
        Ok(())
    }

    fn generation(&mut self, generation: Generation, grid: &Grid) -> io::Result<()> {
        self.generations.push((generation, grid.clone()));
        Ok(())
    }
}
