// =============================================================================
// Move legality engine
//
// Answers one question: may the piece standing on `from` move to `to` on this
// board? The decision pipeline short-circuits in a fixed order — destination
// bounds, displacement pattern, pattern/kind compatibility, path obstruction
// and target validity, then the pawn and king special cases. Every check is a
// pure read of the board; committing a move (occupancy updates, captures, the
// has_moved flag) is the caller's job via Board::apply_move.
//
// Coordinate system: row 0 = White's back rank, rows grow toward Black.
// Vertical = along a file (row changes), horizontal = along a rank.
// =============================================================================

use crate::board::Board;
use crate::coordinate::Coordinate;
use crate::pattern::Pattern;
use crate::piece::{Color, Piece, PieceKind};

/// Decide whether `piece`, standing on `from`, may move to `to`.
///
/// The caller guarantees that `from` actually holds `piece`; the engine does
/// not verify it. Any input at all maps to a boolean — out-of-bounds targets,
/// zero displacements, and shapes no piece can make are simply `false`.
pub fn can_move(piece: &Piece, from: Coordinate, to: Coordinate, board: &Board) -> bool {
    if !board.is_within_bounds(to) {
        return false;
    }

    let d_row = to.row - from.row;
    let d_col = to.column - from.column;

    let pattern = Pattern::classify(d_row, d_col);
    if pattern == Pattern::Unknown {
        return false;
    }
    if !pattern.allows(piece.kind()) {
        return false;
    }
    if !path_clear(piece, pattern, from, to, board) {
        return false;
    }
    kind_allows(piece, pattern, d_row, d_col, to, board)
}

/// Is the path from `from` to `to` free of illegal obstruction, and is the
/// destination a square `piece` may land on?
///
/// The destination is open when it is empty, holds an opposing piece
/// (a capture), or holds `piece`'s never-moved castling partner. Knight
/// jumps have no intermediate squares; sliding patterns are walked one
/// square at a time and any occupant strictly between the endpoints blocks
/// the move.
pub fn path_clear(
    piece: &Piece,
    pattern: Pattern,
    from: Coordinate,
    to: Coordinate,
    board: &Board,
) -> bool {
    if !destination_open(piece, to, board) {
        return false;
    }

    match pattern {
        Pattern::Knight => true,
        Pattern::Vertical | Pattern::Horizontal | Pattern::Diagonal => {
            let step_row = (to.row - from.row).signum();
            let step_col = (to.column - from.column).signum();
            let mut square = Coordinate::new(from.row + step_row, from.column + step_col);
            while board.is_within_bounds(square) {
                if square == to {
                    return true;
                }
                if board.piece_at(square).is_some() {
                    return false;
                }
                square = Coordinate::new(square.row + step_row, square.column + step_col);
            }
            // The walk ran off the board without reaching `to`.
            false
        }
        Pattern::Unknown => false,
    }
}

fn destination_open(piece: &Piece, to: Coordinate, board: &Board) -> bool {
    match board.piece_at(to) {
        None => true,
        Some(occupant) if occupant.color() != piece.color() => true,
        Some(occupant) => castling_pair(piece, occupant),
    }
}

/// A same-color king/rook pair where neither has ever moved. This is the
/// engine's entire notion of castling eligibility; it deliberately does not
/// ask whether the king is in check or crosses an attacked square.
fn castling_pair(mover: &Piece, occupant: &Piece) -> bool {
    mover.color() == occupant.color()
        && !mover.has_moved()
        && !occupant.has_moved()
        && matches!(
            (mover.kind(), occupant.kind()),
            (PieceKind::King, PieceKind::Rook) | (PieceKind::Rook, PieceKind::King)
        )
}

/// Piece-kind exceptions, applied only after the pattern, compatibility, and
/// path checks have all passed.
fn kind_allows(
    piece: &Piece,
    pattern: Pattern,
    d_row: i32,
    d_col: i32,
    to: Coordinate,
    board: &Board,
) -> bool {
    match piece.kind() {
        PieceKind::Pawn => match pattern {
            // Diagonal pawn moves are capture-only.
            Pattern::Diagonal => board
                .piece_at(to)
                .map(|target| target.color() != piece.color())
                .unwrap_or(false),
            Pattern::Vertical => pawn_advance_allowed(piece, d_row),
            _ => true,
        },
        PieceKind::King => {
            if d_row.abs() <= 1 && d_col.abs() <= 1 {
                return true;
            }
            // The only sanctioned multi-square king move is the horizontal
            // slide onto its castling partner.
            pattern == Pattern::Horizontal
                && board
                    .piece_at(to)
                    .map(|occupant| castling_pair(piece, occupant))
                    .unwrap_or(false)
        }
        _ => true,
    }
}

/// White pawns advance toward increasing rows, Black toward decreasing ones.
/// Two squares are allowed only while the pawn has never moved.
fn pawn_advance_allowed(piece: &Piece, d_row: i32) -> bool {
    let forward = match piece.color() {
        Color::White => d_row > 0,
        Color::Black => d_row < 0,
    };
    if !forward {
        return false;
    }
    if piece.has_moved() {
        d_row.abs() == 1
    } else {
        d_row.abs() <= 2
    }
}
