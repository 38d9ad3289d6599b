//! Pure checkers domain types and board geometry.
//! No GPUI dependencies - this is the domain layer.

use std::fmt;

/// Squares along one edge of the board
pub const BOARD_SIZE: u8 = 8;

/// Playable (dark) squares in each row
pub const SLOTS_PER_ROW: u8 = 4;

/// Total number of playable squares
pub const SLOT_COUNT: u8 = BOARD_SIZE * SLOTS_PER_ROW;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Team {
    Light,
    Dark,
}

impl Team {
    pub fn name(self) -> &'static str {
        match self {
            Team::Light => "Light",
            Team::Dark => "Dark",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PieceKind {
    Man,
    King,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Piece {
    pub team: Team,
    pub kind: PieceKind,
}

impl Piece {
    pub fn man(team: Team) -> Self {
        Self {
            team,
            kind: PieceKind::Man,
        }
    }

    pub fn king(team: Team) -> Self {
        Self {
            team,
            kind: PieceKind::King,
        }
    }

    pub fn is_king(&self) -> bool {
        self.kind == PieceKind::King
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            PieceKind::Man => "man",
            PieceKind::King => "king",
        };
        write!(f, "{} {}", self.team.name(), kind)
    }
}

/// A slot index outside `0..SLOT_COUNT`
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct InvalidSlot {
    pub index: usize,
}

impl fmt::Display for InvalidSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "slot index {} is outside the playable range 0..{}",
            self.index, SLOT_COUNT
        )
    }
}

impl std::error::Error for InvalidSlot {}

/// One of the 32 playable squares, numbered row-major from the top-left.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct SlotIndex(u8);

impl SlotIndex {
    #[allow(dead_code)] // Reserved for callers holding raw slot numbers
    pub fn new(index: u8) -> Result<Self, InvalidSlot> {
        if index < SLOT_COUNT {
            Ok(Self(index))
        } else {
            Err(InvalidSlot {
                index: index as usize,
            })
        }
    }

    /// All playable slots in ascending order
    pub fn all() -> impl Iterator<Item = SlotIndex> {
        (0..SLOT_COUNT).map(SlotIndex)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Grid cell of this slot. Even rows start their playable squares on
    /// column 1, odd rows on column 0.
    pub fn coordinate(self) -> BoardCoordinate {
        let row = self.0 / SLOTS_PER_ROW;
        let offset = (self.0 % SLOTS_PER_ROW) * 2;
        let column = if row % 2 == 0 { offset + 1 } else { offset };
        BoardCoordinate { row, column }
    }
}

impl TryFrom<usize> for SlotIndex {
    type Error = InvalidSlot;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        u8::try_from(index)
            .ok()
            .filter(|&i| i < SLOT_COUNT)
            .map(SlotIndex)
            .ok_or(InvalidSlot { index })
    }
}

impl fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Zero-based grid cell, row 0 at the top
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct BoardCoordinate {
    pub row: u8,
    pub column: u8,
}

impl BoardCoordinate {
    pub fn new(row: u8, column: u8) -> Option<Self> {
        (row < BOARD_SIZE && column < BOARD_SIZE).then_some(Self { row, column })
    }

    pub fn is_playable(&self) -> bool {
        (self.row + self.column) % 2 == 1
    }

    /// Inverse of [`SlotIndex::coordinate`]; `None` for unplayable squares
    pub fn slot(&self) -> Option<SlotIndex> {
        if self.is_playable() {
            Some(SlotIndex(self.row * SLOTS_PER_ROW + self.column / 2))
        } else {
            None
        }
    }
}

impl fmt::Display for BoardCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}, column {}", self.row, self.column)
    }
}

/// Map a raw slot number to its grid cell, rejecting anything outside `0..32`
#[allow(dead_code)] // Reserved for callers outside the board view
pub fn slot_to_coordinate(index: usize) -> Result<BoardCoordinate, InvalidSlot> {
    SlotIndex::try_from(index).map(SlotIndex::coordinate)
}
