pub mod config;
pub mod grid;
pub mod neighbors;
pub mod pattern;
pub mod render;
pub mod rules;
pub mod topology;
pub mod world;

mod parse_util;

/// Generation numbers, starting at 1 for the first evolved grid
pub type Generation = u32;

/// Signed row/column displacement used by the neighbor tables
pub type CellOffset = isize;
