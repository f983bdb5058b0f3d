use std::collections::VecDeque;
use std::io;
use std::io::BufRead;
use std::io::Write;

use tracing::warn;

use crate::Generation;

/// Replaces any rows, cols or generations value that isn't positive
pub const DEFAULT_VALUE: u32 = 10;

pub const BANNER: &str = "clg (Cell life game) 1.0";

pub const COLS_PROMPT: &str = "Number of columns (c>0): ";
pub const ROWS_PROMPT: &str = "Number of rows (r>0): ";
pub const GENS_PROMPT: &str = "Number of generations (g>0): ";

/// Everything a run needs to know up front. Built once, never changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub rows: usize,
    pub cols: usize,
    pub generations: Generation,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: DEFAULT_VALUE as usize,
            cols: DEFAULT_VALUE as usize,
            generations: DEFAULT_VALUE,
        }
    }
}

impl Config {
    /// Build a config from raw user input.
    ///
    /// Zero or negative values are not an error: each one is swapped for [`DEFAULT_VALUE`] on its
    /// own, so `(0, 5, -3)` gives a 10x5 grid run for 10 generations.
    pub fn normalized(rows: i64, cols: i64, generations: i64) -> Self {
        Self {
            rows: positive_or_default("rows", rows) as usize,
            cols: positive_or_default("cols", cols) as usize,
            generations: positive_or_default("generations", generations),
        }
    }

    /// Config for a grid whose size is already known, e.g. one read from a pattern
    pub fn with_dimensions(rows: usize, cols: usize, generations: i64) -> Self {
        Self {
            rows,
            cols,
            generations: positive_or_default("generations", generations),
        }
    }
}

fn positive_or_default(field: &str, value: i64) -> u32 {
    match u32::try_from(value) {
        Ok(v) if v > 0 => v,
        // Larger than any grid we could allocate anyway
        Err(_) if value > 0 => u32::MAX,
        _ => {
            warn!("{field} = {value} is not positive, using {DEFAULT_VALUE}");
            DEFAULT_VALUE
        }
    }
}

/// Asks for config values interactively.
///
/// Answers are read as whitespace separated integers, and a single line may answer several
/// questions at once (`10 20 5` answers all three). A missing or unreadable answer counts as `0`,
/// which [`Config::normalized`] then turns into the default.
pub struct Prompter<R, W> {
    input: R,
    prompts: W,
    pending: VecDeque<String>,
    eof: bool,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, prompts: W) -> Self {
        Self {
            input,
            prompts,
            pending: VecDeque::new(),
            eof: false,
        }
    }

    pub fn banner(&mut self) -> io::Result<()> {
        write!(self.prompts, "{BANNER}\n\n")?;
        self.prompts.flush()
    }

    /// Print `prompt` and read the next integer answer
    pub fn ask(&mut self, prompt: &str) -> io::Result<i64> {
        write!(self.prompts, "{prompt}")?;
        self.prompts.flush()?;

        let Some(token) = self.next_token()? else {
            warn!("No answer to \"{}\", assuming 0", prompt.trim_end());
            return Ok(0);
        };

        match token.parse::<i64>() {
            Ok(n) => Ok(n),
            Err(e) => {
                warn!("Can't read \"{token}\" as a number ({e}), assuming 0");
                Ok(0)
            }
        }
    }

    /// Ask for every value in `(cols, rows, generations)` that isn't already known, in that order.
    /// Returns `(rows, cols, generations)`.
    pub fn fill(
        &mut self,
        rows: Option<i64>,
        cols: Option<i64>,
        generations: Option<i64>,
    ) -> io::Result<(i64, i64, i64)> {
        let cols = match cols {
            Some(c) => c,
            None => self.ask(COLS_PROMPT)?,
        };
        let rows = match rows {
            Some(r) => r,
            None => self.ask(ROWS_PROMPT)?,
        };
        let generations = match generations {
            Some(g) => g,
            None => self.ask(GENS_PROMPT)?,
        };

        Ok((rows, cols, generations))
    }

    fn next_token(&mut self) -> io::Result<Option<String>> {
        while self.pending.is_empty() && !self.eof {
            let mut line = String::new();

            if self.input.read_line(&mut line)? == 0 {
                self.eof = true;
            }

            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }

        Ok(self.pending.pop_front())
    }
}
