use serde::{Deserialize, Serialize};

use crate::piece::PieceKind;

/// The shape of a displacement, independent of distance or piece. Derived
/// fresh from the (Δrow, Δcol) of every query, never stored.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub enum Pattern {
    Vertical,
    Horizontal,
    Diagonal,
    Knight,
    Unknown,
}

impl Pattern {
    /// Classify a displacement (`to` minus `from`). First match wins:
    /// equal nonzero magnitudes are diagonal, a zero row delta is a move
    /// along a rank (horizontal), a zero column delta a move along a file
    /// (vertical), the (1,2)/(2,1) L-shape is a knight jump. Everything
    /// else — including zero displacement — is unknown.
    pub fn classify(d_row: i32, d_col: i32) -> Pattern {
        if d_row.abs() == d_col.abs() && d_row != 0 {
            Pattern::Diagonal
        } else if d_row == 0 && d_col != 0 {
            Pattern::Horizontal
        } else if d_col == 0 && d_row != 0 {
            Pattern::Vertical
        } else if d_row.abs() + d_col.abs() == 3 && d_row != 0 && d_col != 0 {
            Pattern::Knight
        } else {
            Pattern::Unknown
        }
    }

    /// Geometric compatibility only: can this kind of piece ever move in
    /// this pattern, ignoring distance limits and obstructions? Pawns pass
    /// the diagonal and vertical filters here; the capture-only and
    /// direction rules are applied later by the engine.
    pub fn allows(self, kind: PieceKind) -> bool {
        use PieceKind::*;
        match self {
            Pattern::Knight => matches!(kind, Knight),
            Pattern::Diagonal => matches!(kind, Pawn | Bishop | Queen | King),
            Pattern::Horizontal => matches!(kind, Rook | Queen | King),
            Pattern::Vertical => matches!(kind, Pawn | Rook | Queen | King),
            Pattern::Unknown => false,
        }
    }
}
