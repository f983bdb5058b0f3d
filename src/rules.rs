use std::fmt;

use crate::topology::TopologyClass;

/// Neighbor counts that leave a cell alive, one bit per count.
///
/// ```notrust
/// count:   8765_43210
/// ```
///
/// Bit `i` set means "alive with `i` live neighbors". Counts past 8 can't happen.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    alive: u16,
}

/// Corner and edge cells: dead below 2 and at exactly 3, alive otherwise.
pub const LIMITED: Thresholds = Thresholds::new(0b1_1111_0100);

/// Interior cells: dead below 3 and at exactly 5, alive otherwise.
pub const INTERIOR: Thresholds = Thresholds::new(0b1_1101_1000);

impl Thresholds {
    /// Any bit past the 8th is ignored
    pub const fn new(alive: u16) -> Self {
        Self {
            alive: alive & 0x1FF,
        }
    }

    /// The thresholds that apply to a cell of the given class
    pub const fn for_class(class: TopologyClass) -> Self {
        if class.is_limited() { LIMITED } else { INTERIOR }
    }

    pub const fn is_alive(self, neighbors: u8) -> bool {
        neighbors <= 8 && self.alive & (1 << neighbors) != 0
    }
}

impl fmt::Debug for Thresholds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Thresholds({self})")
    }
}

/// Lists the surviving counts, e.g. `2,4,5,6,7,8`
impl fmt::Display for Thresholds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;

        for n in (0..=8).filter(|&n| self.is_alive(n)) {
            if !first {
                f.write_str(",")?;
            }
            write!(f, "{n}")?;
            first = false;
        }

        Ok(())
    }
}

/// Decide whether a cell lives in the next generation.
///
/// Only the neighbor count and the cell's class matter. The cell's own current state is not an
/// input, so a dead cell and a live cell with the same surroundings end up in the same state.
pub fn next_state(neighbors: u8, class: TopologyClass) -> bool {
    debug_assert!(
        neighbors <= class.max_neighbors(),
        "{class} cell can't have {neighbors} neighbors"
    );

    Thresholds::for_class(class).is_alive(neighbors)
}
