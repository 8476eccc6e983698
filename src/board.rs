use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;
use crate::piece::{Color, Piece, PieceKind};

/// A rectangular grid holding at most one piece per square. The legality
/// engine only reads it; committing moves (and the piece removal that a
/// capture implies) goes through [`Board::apply_move`], which belongs to
/// the game loop, not the engine.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Board {
    rows: i32,
    columns: i32,
    squares: Vec<Option<Piece>>,
}

impl Board {
    /// An empty board of the given size. Useful for setting up test positions.
    pub fn new(rows: i32, columns: i32) -> Self {
        Board {
            rows,
            columns,
            squares: vec![None; (rows * columns) as usize],
        }
    }

    /// The classic 8×8 opening position. White occupies rows 0–1, Black
    /// rows 6–7; row 0 column 0 is White's queenside rook corner.
    pub fn standard() -> Self {
        let mut board = Board::new(8, 8);

        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        for (col, &kind) in back_rank.iter().enumerate() {
            board.put_piece_at(Piece::new(kind, Color::White), Coordinate::new(0, col as i32));
            board.put_piece_at(Piece::new(kind, Color::Black), Coordinate::new(7, col as i32));
        }
        for col in 0..8 {
            board.put_piece_at(Piece::new(PieceKind::Pawn, Color::White), Coordinate::new(1, col));
            board.put_piece_at(Piece::new(PieceKind::Pawn, Color::Black), Coordinate::new(6, col));
        }

        board
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn columns(&self) -> i32 {
        self.columns
    }

    pub fn is_within_bounds(&self, at: Coordinate) -> bool {
        (0..self.rows).contains(&at.row) && (0..self.columns).contains(&at.column)
    }

    fn index(&self, at: Coordinate) -> usize {
        (at.row * self.columns + at.column) as usize
    }

    pub fn piece_at(&self, at: Coordinate) -> Option<&Piece> {
        if !self.is_within_bounds(at) {
            return None;
        }
        self.squares[self.index(at)].as_ref()
    }

    pub fn piece_at_mut(&mut self, at: Coordinate) -> Option<&mut Piece> {
        if !self.is_within_bounds(at) {
            return None;
        }
        let index = self.index(at);
        self.squares[index].as_mut()
    }

    /// Place a piece, replacing whatever occupied the square.
    pub fn put_piece_at(&mut self, piece: Piece, at: Coordinate) {
        if self.is_within_bounds(at) {
            let index = self.index(at);
            self.squares[index] = Some(piece);
        }
    }

    pub fn remove_piece_at(&mut self, at: Coordinate) -> Option<Piece> {
        if !self.is_within_bounds(at) {
            return None;
        }
        let index = self.index(at);
        self.squares[index].take()
    }

    /// Commit a move the caller has already vetted with the engine: relocate
    /// the mover, drop a captured piece, and mark `has_moved`. When the
    /// destination holds a same-color king/rook partner the two pieces swap
    /// squares instead (the castle completion the engine's path rules admit).
    pub fn apply_move(&mut self, from: Coordinate, to: Coordinate) {
        let mut mover = match self.remove_piece_at(from) {
            Some(piece) => piece,
            None => return,
        };
        mover.set_has_moved();

        let castle_partner = self
            .piece_at(to)
            .filter(|occupant| occupant.color() == mover.color())
            .is_some();

        if castle_partner {
            if let Some(mut partner) = self.remove_piece_at(to) {
                partner.set_has_moved();
                self.put_piece_at(partner, from);
            }
        }
        // A differently-colored occupant is simply overwritten: captured.
        self.put_piece_at(mover, to);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::coord;
    use crate::piece::PieceIdentity;

    #[test]
    fn placed_pieces_can_be_looked_up() {
        let mut board = Board::new(8, 8);
        let pawn = Piece::from_identity(PieceIdentity::BLACK_PAWN);
        board.put_piece_at(pawn, coord(2, 2));
        assert_eq!(board.piece_at(coord(2, 2)), Some(&pawn));
        assert_eq!(board.piece_at(coord(2, 3)), None);

        let knight = Piece::from_identity(PieceIdentity::BLACK_KNIGHT);
        let bishop = Piece::from_identity(PieceIdentity::WHITE_BISHOP);
        board.put_piece_at(knight, coord(3, 5));
        board.put_piece_at(bishop, coord(2, 6));
        assert_eq!(board.piece_at(coord(3, 5)), Some(&knight));
        assert_eq!(board.piece_at(coord(2, 6)), Some(&bishop));
    }

    #[test]
    fn bounds_cover_the_whole_grid_and_nothing_else() {
        let board = Board::new(8, 8);
        assert!(board.is_within_bounds(coord(0, 0)));
        assert!(board.is_within_bounds(coord(7, 7)));
        assert!(!board.is_within_bounds(coord(-1, 0)));
        assert!(!board.is_within_bounds(coord(0, 8)));
        assert!(!board.is_within_bounds(coord(8, 0)));

        let narrow = Board::new(3, 5);
        assert!(narrow.is_within_bounds(coord(2, 4)));
        assert!(!narrow.is_within_bounds(coord(3, 4)));
        assert!(!narrow.is_within_bounds(coord(2, 5)));
    }

    #[test]
    fn out_of_bounds_lookups_are_empty_not_panics() {
        let mut board = Board::new(8, 8);
        assert_eq!(board.piece_at(coord(-3, 12)), None);
        assert_eq!(board.remove_piece_at(coord(9, 9)), None);
        // Placement off the board is a no-op.
        board.put_piece_at(Piece::from_identity(PieceIdentity::WHITE_PAWN), coord(-1, -1));
    }

    #[test]
    fn standard_setup_places_thirty_two_pieces() {
        let board = Board::standard();
        let mut count = 0;
        for row in 0..8 {
            for col in 0..8 {
                if board.piece_at(coord(row, col)).is_some() {
                    count += 1;
                }
            }
        }
        assert_eq!(count, 32);
        assert_eq!(
            board.piece_at(coord(0, 4)).map(|p| p.identity()),
            Some(PieceIdentity::WHITE_KING)
        );
        assert_eq!(
            board.piece_at(coord(7, 3)).map(|p| p.identity()),
            Some(PieceIdentity::BLACK_QUEEN)
        );
        assert!(board
            .piece_at(coord(6, 0))
            .map(|p| p.kind() == PieceKind::Pawn && p.color() == Color::Black)
            .unwrap_or(false));
    }

    #[test]
    fn apply_move_relocates_and_marks_moved() {
        let mut board = Board::new(8, 8);
        board.put_piece_at(Piece::from_identity(PieceIdentity::WHITE_ROOK), coord(2, 5));
        board.apply_move(coord(2, 5), coord(6, 5));
        assert_eq!(board.piece_at(coord(2, 5)), None);
        let rook = board.piece_at(coord(6, 5)).unwrap();
        assert_eq!(rook.identity(), PieceIdentity::WHITE_ROOK);
        assert!(rook.has_moved());
    }

    #[test]
    fn apply_move_captures_opposing_occupant() {
        let mut board = Board::new(8, 8);
        board.put_piece_at(Piece::from_identity(PieceIdentity::WHITE_QUEEN), coord(2, 2));
        board.put_piece_at(Piece::from_identity(PieceIdentity::BLACK_KNIGHT), coord(4, 4));
        board.apply_move(coord(2, 2), coord(4, 4));
        let queen = board.piece_at(coord(4, 4)).unwrap();
        assert_eq!(queen.identity(), PieceIdentity::WHITE_QUEEN);
        assert_eq!(board.piece_at(coord(2, 2)), None);
    }

    #[test]
    fn apply_move_swaps_castling_partners() {
        let mut board = Board::new(8, 8);
        board.put_piece_at(Piece::from_identity(PieceIdentity::WHITE_KING), coord(0, 4));
        board.put_piece_at(Piece::from_identity(PieceIdentity::WHITE_ROOK), coord(0, 0));
        board.apply_move(coord(0, 4), coord(0, 0));

        let rook = board.piece_at(coord(0, 4)).unwrap();
        let king = board.piece_at(coord(0, 0)).unwrap();
        assert_eq!(rook.identity(), PieceIdentity::WHITE_ROOK);
        assert_eq!(king.identity(), PieceIdentity::WHITE_KING);
        assert!(rook.has_moved() && king.has_moved());
    }
}
