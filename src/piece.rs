use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

/// What a piece *is* — its color and kind — independent of where it stands
/// or whether it has moved. There are exactly twelve identities; see
/// [`PieceIdentity::ALL`].
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct PieceIdentity {
    pub color: Color,
    pub kind: PieceKind,
}

impl PieceIdentity {
    pub const WHITE_PAWN: PieceIdentity = PieceIdentity { color: Color::White, kind: PieceKind::Pawn };
    pub const WHITE_ROOK: PieceIdentity = PieceIdentity { color: Color::White, kind: PieceKind::Rook };
    pub const WHITE_KNIGHT: PieceIdentity = PieceIdentity { color: Color::White, kind: PieceKind::Knight };
    pub const WHITE_BISHOP: PieceIdentity = PieceIdentity { color: Color::White, kind: PieceKind::Bishop };
    pub const WHITE_QUEEN: PieceIdentity = PieceIdentity { color: Color::White, kind: PieceKind::Queen };
    pub const WHITE_KING: PieceIdentity = PieceIdentity { color: Color::White, kind: PieceKind::King };
    pub const BLACK_PAWN: PieceIdentity = PieceIdentity { color: Color::Black, kind: PieceKind::Pawn };
    pub const BLACK_ROOK: PieceIdentity = PieceIdentity { color: Color::Black, kind: PieceKind::Rook };
    pub const BLACK_KNIGHT: PieceIdentity = PieceIdentity { color: Color::Black, kind: PieceKind::Knight };
    pub const BLACK_BISHOP: PieceIdentity = PieceIdentity { color: Color::Black, kind: PieceKind::Bishop };
    pub const BLACK_QUEEN: PieceIdentity = PieceIdentity { color: Color::Black, kind: PieceKind::Queen };
    pub const BLACK_KING: PieceIdentity = PieceIdentity { color: Color::Black, kind: PieceKind::King };

    /// The full catalog, one entry per color × kind.
    pub const ALL: [PieceIdentity; 12] = [
        Self::WHITE_PAWN, Self::WHITE_ROOK, Self::WHITE_KNIGHT,
        Self::WHITE_BISHOP, Self::WHITE_QUEEN, Self::WHITE_KING,
        Self::BLACK_PAWN, Self::BLACK_ROOK, Self::BLACK_KNIGHT,
        Self::BLACK_BISHOP, Self::BLACK_QUEEN, Self::BLACK_KING,
    ];
}

/// A piece on the board: an identity plus a move-history flag. The flag
/// starts false and flips to true exactly once, when the game loop commits
/// the piece's first move; nothing ever clears it.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct Piece {
    identity: PieceIdentity,
    has_moved: bool,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color) -> Self {
        Piece::from_identity(PieceIdentity { color, kind })
    }

    pub fn from_identity(identity: PieceIdentity) -> Self {
        Piece {
            identity,
            has_moved: false,
        }
    }

    pub fn identity(&self) -> PieceIdentity {
        self.identity
    }

    pub fn color(&self) -> Color {
        self.identity.color
    }

    pub fn kind(&self) -> PieceKind {
        self.identity.kind
    }

    pub fn has_moved(&self) -> bool {
        self.has_moved
    }

    /// One-way transition; there is no way to unset it.
    pub fn set_has_moved(&mut self) {
        self.has_moved = true;
    }
}
