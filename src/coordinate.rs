use serde::{Deserialize, Serialize};

/// A (row, column) square address. Values are arbitrary integers; whether a
/// coordinate actually lies on a given board is checked by
/// `Board::is_within_bounds`, not here.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Debug)]
pub struct Coordinate {
    pub row: i32,
    pub column: i32,
}

impl Coordinate {
    pub fn new(row: i32, column: i32) -> Self {
        Coordinate { row, column }
    }
}

/// Shorthand for `Coordinate::new`, handy when building positions.
pub fn coord(row: i32, column: i32) -> Coordinate {
    Coordinate::new(row, column)
}
