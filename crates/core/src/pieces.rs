//! Pieces module - Tetromino shapes and the shape catalog
//!
//! Every piece kind owns a literal, precomputed list of rotation states. The
//! tables are not derived by rotating coordinates: together with the simple
//! horizontal kick list they reproduce the classic kick behavior exactly.

use crate::rng::Randomizer;
use crate::types::{Color, PieceKind};

/// Offset of a single mino relative to piece origin
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from piece origin
pub type PieceShape = [MinoOffset; 4];

/// An immutable catalog entry: kind, rotation states and display color.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub rotations: &'static [PieceShape],
    pub color: Color,
}

impl Piece {
    /// Shape for a rotation index, wrapping out-of-range indices.
    pub fn shape(&self, rotation: usize) -> &'static PieceShape {
        &self.rotations[rotation % self.rotations.len()]
    }

    /// Number of distinct rotation states (1 for O, 4 otherwise).
    pub fn rotation_count(&self) -> usize {
        self.rotations.len()
    }
}

static I_PIECE: Piece = Piece {
    kind: PieceKind::I,
    color: Color::Cyan,
    rotations: &[
        [(-1, 0), (0, 0), (1, 0), (2, 0)],
        [(0, -1), (0, 0), (0, 1), (0, 2)],
        [(-1, 1), (0, 1), (1, 1), (2, 1)],
        [(1, -1), (1, 0), (1, 1), (1, 2)],
    ],
};

static O_PIECE: Piece = Piece {
    kind: PieceKind::O,
    color: Color::Yellow,
    rotations: &[[(0, 0), (1, 0), (0, 1), (1, 1)]],
};

static T_PIECE: Piece = Piece {
    kind: PieceKind::T,
    color: Color::Magenta,
    rotations: &[
        [(-1, 0), (0, 0), (1, 0), (0, 1)],
        [(0, -1), (0, 0), (0, 1), (-1, 0)],
        [(-1, 0), (0, 0), (1, 0), (0, -1)],
        [(0, -1), (0, 0), (0, 1), (1, 0)],
    ],
};

static S_PIECE: Piece = Piece {
    kind: PieceKind::S,
    color: Color::Green,
    rotations: &[
        [(-1, 1), (0, 1), (0, 0), (1, 0)],
        [(0, -1), (0, 0), (1, 0), (1, 1)],
        [(-1, 1), (0, 1), (0, 0), (1, 0)],
        [(0, -1), (0, 0), (1, 0), (1, 1)],
    ],
};

static Z_PIECE: Piece = Piece {
    kind: PieceKind::Z,
    color: Color::Red,
    rotations: &[
        [(-1, 0), (0, 0), (0, 1), (1, 1)],
        [(1, -1), (1, 0), (0, 0), (0, 1)],
        [(-1, 0), (0, 0), (0, 1), (1, 1)],
        [(1, -1), (1, 0), (0, 0), (0, 1)],
    ],
};

static J_PIECE: Piece = Piece {
    kind: PieceKind::J,
    color: Color::Blue,
    rotations: &[
        [(-1, 0), (0, 0), (1, 0), (1, 1)],
        [(0, -1), (0, 0), (0, 1), (-1, 1)],
        [(-1, -1), (-1, 0), (0, 0), (1, 0)],
        [(1, -1), (0, -1), (0, 0), (0, 1)],
    ],
};

static L_PIECE: Piece = Piece {
    kind: PieceKind::L,
    color: Color::White,
    rotations: &[
        [(-1, 0), (0, 0), (1, 0), (-1, 1)],
        [(0, -1), (0, 0), (0, 1), (-1, -1)],
        [(-1, 0), (0, 0), (1, 0), (1, -1)],
        [(0, -1), (0, 0), (0, 1), (1, 1)],
    ],
};

/// Get the catalog entry for a piece kind
pub fn piece_for(kind: PieceKind) -> &'static Piece {
    match kind {
        PieceKind::I => &I_PIECE,
        PieceKind::O => &O_PIECE,
        PieceKind::T => &T_PIECE,
        PieceKind::S => &S_PIECE,
        PieceKind::Z => &Z_PIECE,
        PieceKind::J => &J_PIECE,
        PieceKind::L => &L_PIECE,
    }
}

/// Uniformly pick one of the seven kinds using the injected randomizer.
pub fn random_piece<R: Randomizer + ?Sized>(rng: &mut R) -> &'static Piece {
    let idx = rng.next_range(PieceKind::ALL.len() as u32) as usize % PieceKind::ALL.len();
    piece_for(PieceKind::ALL[idx])
}

/// Index of the rotation state after `current`, wrapping around.
pub fn next_rotation_index(piece: &Piece, current: usize) -> usize {
    (current + 1) % piece.rotation_count()
}
