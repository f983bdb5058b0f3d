use crate::CellOffset;
use crate::grid::Coord;
use crate::grid::Grid;
use crate::topology::Corner;
use crate::topology::Side;
use crate::topology::TopologyClass;

type Offsets<const N: usize> = [(CellOffset, CellOffset); N];

// Each table lists, as `(dr, dc)`, only the neighbors that lie inside the grid for that position.
//
//   (-1,-1) (-1, 0) (-1,+1)
//   ( 0,-1)    x    ( 0,+1)
//   (+1,-1) (+1, 0) (+1,+1)

const TOP_LEFT: Offsets<3> = [(1, 0), (0, 1), (1, 1)];
const TOP_RIGHT: Offsets<3> = [(1, 0), (0, -1), (1, -1)];
const BOTTOM_LEFT: Offsets<3> = [(-1, 0), (0, 1), (-1, 1)];
const BOTTOM_RIGHT: Offsets<3> = [(-1, 0), (0, -1), (-1, -1)];

const TOP: Offsets<5> = [(1, 0), (0, 1), (1, 1), (0, -1), (1, -1)];
const LEFT: Offsets<5> = [(1, 0), (0, 1), (1, 1), (-1, 0), (-1, 1)];
const BOTTOM: Offsets<5> = [(0, -1), (0, 1), (-1, -1), (-1, 0), (-1, 1)];
const RIGHT: Offsets<5> = [(-1, 0), (1, 0), (-1, -1), (0, -1), (1, -1)];

const MOORE: Offsets<8> = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
];

/// The neighbor offsets that apply to a cell of the given class
pub fn offsets(class: TopologyClass) -> &'static [(CellOffset, CellOffset)] {
    match class {
        TopologyClass::Corner(Corner::TopLeft) => &TOP_LEFT,
        TopologyClass::Corner(Corner::TopRight) => &TOP_RIGHT,
        TopologyClass::Corner(Corner::BottomLeft) => &BOTTOM_LEFT,
        TopologyClass::Corner(Corner::BottomRight) => &BOTTOM_RIGHT,
        TopologyClass::Edge(Side::Top) => &TOP,
        TopologyClass::Edge(Side::Left) => &LEFT,
        TopologyClass::Edge(Side::Bottom) => &BOTTOM,
        TopologyClass::Edge(Side::Right) => &RIGHT,
        TopologyClass::Interior => &MOORE,
    }
}

/// Count the live neighbors of `coord`, as seen by a cell of class `class`.
///
/// On a grid with a single row or column some offsets of a class point off the grid. Those count
/// as dead. On any other grid the tables never leave the grid.
pub fn count_live_neighbors(grid: &Grid, coord: Coord, class: TopologyClass) -> u8 {
    let (rows, cols) = (grid.rows(), grid.cols());

    let mut n = 0;

    for &(dr, dc) in offsets(class) {
        let Some(neighbor) = coord.offset(dr, dc, rows, cols) else {
            debug_assert!(
                grid.is_degenerate(),
                "{class} offset ({dr}, {dc}) from {coord} left a {rows}x{cols} grid"
            );
            continue;
        };

        if grid.get(neighbor) == Some(true) {
            n += 1;
        }
    }

    n
}
