//! Piece types and rotation shapes for the standard seven-piece catalog.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Piece {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

#[derive(
    Clone, Copy, PartialEq, Eq, Debug, Hash, Default, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// 4x4 occupancy masks, one per rotation. Bit 15 is the top-left cell of the
/// bounding box; bits are read row-major.
const BLOCKS: [[u16; 4]; 7] = [
    [0x0F00, 0x2222, 0x00F0, 0x4444], // I
    [0x44C0, 0x8E00, 0x6440, 0x0E20], // J
    [0x4460, 0x0E80, 0xC440, 0x2E00], // L
    [0xCC00, 0xCC00, 0xCC00, 0xCC00], // O
    [0x06C0, 0x8C40, 0x6C00, 0x4620], // S
    [0x0E40, 0x4C40, 0x4E00, 0x4640], // T
    [0x0C60, 0x4C80, 0xC600, 0x2640], // Z
];

/// Decode a mask into (column, row) offsets from the anchor, top row first.
const fn decode(blocks: u16) -> [(i8, i8); 4] {
    let mut cells = [(0i8, 0i8); 4];
    let mut found = 0;
    let mut bit = 0;
    while bit < 16 {
        if blocks & (0x8000u16 >> bit) != 0 && found < 4 {
            cells[found] = ((bit % 4) as i8, (bit / 4) as i8);
            found += 1;
        }
        bit += 1;
    }
    cells
}

const CELLS: [[[(i8, i8); 4]; 4]; 7] = {
    let mut table = [[[(0i8, 0i8); 4]; 4]; 7];
    let mut piece = 0;
    while piece < 7 {
        let mut rot = 0;
        while rot < 4 {
            table[piece][rot] = decode(BLOCKS[piece][rot]);
            rot += 1;
        }
        piece += 1;
    }
    table
};

impl Piece {
    pub const ALL: [Piece; 7] = [
        Piece::I,
        Piece::J,
        Piece::L,
        Piece::O,
        Piece::S,
        Piece::T,
        Piece::Z,
    ];

    /// Cell value written into the board for this piece. Never zero.
    #[inline(always)]
    pub const fn id(self) -> u8 {
        self as u8 + 1
    }

    pub fn from_id(id: u8) -> Option<Self> {
        id.checked_sub(1)
            .and_then(|index| Self::ALL.get(index as usize).copied())
    }

    /// Side length of the bounding box.
    #[inline(always)]
    pub const fn size(self) -> i32 {
        match self {
            Piece::I => 4,
            Piece::O => 2,
            _ => 3,
        }
    }

    pub const fn blocks(self, rotation: Rotation) -> u16 {
        BLOCKS[self as usize][rotation.index()]
    }

    /// (dx, dy) offsets of the four minos relative to the anchor.
    /// dy grows downward.
    #[inline(always)]
    pub const fn cells(self, rotation: Rotation) -> [(i8, i8); 4] {
        CELLS[self as usize][rotation.index()]
    }

    pub fn letter(self) -> char {
        match self {
            Piece::I => 'I',
            Piece::J => 'J',
            Piece::L => 'L',
            Piece::O => 'O',
            Piece::S => 'S',
            Piece::T => 'T',
            Piece::Z => 'Z',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        let upper = letter.to_ascii_uppercase();
        Self::ALL.into_iter().find(|piece| piece.letter() == upper)
    }
}
