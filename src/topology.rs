use std::fmt;

use crate::grid::Coord;

/// The four grid corners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// The four grid sides, not counting their corners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Left,
    Bottom,
    Right,
}

/// Where a cell sits on the grid. This decides which neighbors it has and which thresholds apply
/// to it.
///
/// A class is never stored, it's cheap to recompute from the coordinate and the grid dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TopologyClass {
    Corner(Corner),
    Edge(Side),
    Interior,
}

impl TopologyClass {
    /// Upper bound on the live neighbor count of a cell of this class
    pub const fn max_neighbors(self) -> u8 {
        match self {
            TopologyClass::Corner(_) => 3,
            TopologyClass::Edge(_) => 5,
            TopologyClass::Interior => 8,
        }
    }

    /// Corner and edge cells are "limited": they have fewer than 8 possible neighbors
    pub const fn is_limited(self) -> bool {
        !matches!(self, TopologyClass::Interior)
    }
}

impl fmt::Display for TopologyClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TopologyClass::Corner(c) => write!(f, "corner ({c:?})"),
            TopologyClass::Edge(s) => write!(f, "edge ({s:?})"),
            TopologyClass::Interior => f.write_str("interior"),
        }
    }
}

/// Classify `coord` on a `rows x cols` grid.
///
/// Corners are checked first, then edges, in declaration order. On a grid with a single row or
/// column a cell touches several boundaries, and this ordering is what picks its class.
pub fn classify(coord: Coord, rows: usize, cols: usize) -> TopologyClass {
    debug_assert!(
        coord.row < rows && coord.col < cols,
        "{coord} is outside a {rows}x{cols} grid"
    );

    let Coord { row, col } = coord;

    let top = row == 0;
    let bottom = row == rows - 1;
    let left = col == 0;
    let right = col == cols - 1;

    match (top, bottom, left, right) {
        (true, _, true, _) => TopologyClass::Corner(Corner::TopLeft),
        (true, _, _, true) => TopologyClass::Corner(Corner::TopRight),
        (_, true, true, _) => TopologyClass::Corner(Corner::BottomLeft),
        (_, true, _, true) => TopologyClass::Corner(Corner::BottomRight),
        (true, _, _, _) => TopologyClass::Edge(Side::Top),
        (_, _, true, _) => TopologyClass::Edge(Side::Left),
        (_, true, _, _) => TopologyClass::Edge(Side::Bottom),
        (_, _, _, true) => TopologyClass::Edge(Side::Right),
        _ => TopologyClass::Interior,
    }
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn corners() {
        let (rows, cols) = (4, 5);

        assert_eq!(
            classify(Coord::new(0, 0), rows, cols),
            TopologyClass::Corner(Corner::TopLeft)
        );
        assert_eq!(
            classify(Coord::new(0, 4), rows, cols),
            TopologyClass::Corner(Corner::TopRight)
        );
        assert_eq!(
            classify(Coord::new(3, 0), rows, cols),
            TopologyClass::Corner(Corner::BottomLeft)
        );
        assert_eq!(
            classify(Coord::new(3, 4), rows, cols),
            TopologyClass::Corner(Corner::BottomRight)
        );
    }

    #[test]
    fn edges_and_interior() {
        let (rows, cols) = (4, 5);

        assert_eq!(
            classify(Coord::new(0, 2), rows, cols),
            TopologyClass::Edge(Side::Top)
        );
        assert_eq!(
            classify(Coord::new(2, 0), rows, cols),
            TopologyClass::Edge(Side::Left)
        );
        assert_eq!(
            classify(Coord::new(3, 1), rows, cols),
            TopologyClass::Edge(Side::Bottom)
        );
        assert_eq!(
            classify(Coord::new(1, 4), rows, cols),
            TopologyClass::Edge(Side::Right)
        );
        assert_eq!(classify(Coord::new(1, 1), rows, cols), TopologyClass::Interior);
        assert_eq!(classify(Coord::new(2, 3), rows, cols), TopologyClass::Interior);
    }

    #[test]
    fn degenerate_grids_resolve_corners_first() {
        // 1x1: every boundary at once
        assert_eq!(
            classify(Coord::new(0, 0), 1, 1),
            TopologyClass::Corner(Corner::TopLeft)
        );

        // 1xN: the far end is top right, the middle is a top edge
        assert_eq!(
            classify(Coord::new(0, 2), 1, 3),
            TopologyClass::Corner(Corner::TopRight)
        );
        assert_eq!(
            classify(Coord::new(0, 1), 1, 3),
            TopologyClass::Edge(Side::Top)
        );

        // Nx1: the middle is a left edge
        assert_eq!(
            classify(Coord::new(1, 0), 3, 1),
            TopologyClass::Edge(Side::Left)
        );
        assert_eq!(
            classify(Coord::new(2, 0), 3, 1),
            TopologyClass::Corner(Corner::BottomLeft)
        );
    }

    proptest! {
        #[test]
        fn boundary_cells_are_limited(
            rows in 2usize..20,
            cols in 2usize..20,
            r in 0usize..20,
            c in 0usize..20,
        ) {
            let coord = Coord::new(r % rows, c % cols);
            let class = classify(coord, rows, cols);

            let on_boundary = coord.row == 0
                || coord.col == 0
                || coord.row == rows - 1
                || coord.col == cols - 1;

            prop_assert_eq!(class.is_limited(), on_boundary);
        }

        #[test]
        fn corner_class_matches_corner_coords(rows in 2usize..20, cols in 2usize..20) {
            for coord in [
                Coord::new(0, 0),
                Coord::new(0, cols - 1),
                Coord::new(rows - 1, 0),
                Coord::new(rows - 1, cols - 1),
            ] {
                prop_assert!(matches!(classify(coord, rows, cols), TopologyClass::Corner(_)));
            }
        }
    }
}
