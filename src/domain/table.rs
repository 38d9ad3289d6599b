//! Piece placement over the 32 playable slots.
//!
//! The text layout lists one symbol per slot in slot order:
//! `.` empty, `l`/`L` light man/king, `d`/`D` dark man/king.
//! Whitespace and `/` are ignored so rows can be separated for readability.

use std::fmt;
use std::str::FromStr;

use super::checkers::{Piece, PieceKind, SLOT_COUNT, SLOTS_PER_ROW, SlotIndex, Team};

/// Rows of men each side starts with
const STARTING_ROWS: u8 = 3;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Table {
    slots: [Option<Piece>; SLOT_COUNT as usize],
}

impl Table {
    pub fn empty() -> Self {
        Self {
            slots: [None; SLOT_COUNT as usize],
        }
    }

    /// Dark men on the top three rows, Light men on the bottom three
    pub fn standard() -> Self {
        let mut table = Self::empty();
        let per_side = STARTING_ROWS * SLOTS_PER_ROW;
        for slot in SlotIndex::all() {
            if slot.get() < per_side {
                table.set(slot, Some(Piece::man(Team::Dark)));
            } else if slot.get() >= SLOT_COUNT - per_side {
                table.set(slot, Some(Piece::man(Team::Light)));
            }
        }
        table
    }

    pub fn get(&self, slot: SlotIndex) -> Option<Piece> {
        self.slots[slot.get() as usize]
    }

    pub fn set(&mut self, slot: SlotIndex, piece: Option<Piece>) {
        self.slots[slot.get() as usize] = piece;
    }

    /// Remove and return the piece on `slot`
    pub fn take(&mut self, slot: SlotIndex) -> Option<Piece> {
        self.slots[slot.get() as usize].take()
    }

    /// Occupied slots in ascending order
    pub fn occupied(&self) -> impl Iterator<Item = (SlotIndex, Piece)> + '_ {
        SlotIndex::all().filter_map(|slot| self.get(slot).map(|piece| (slot, piece)))
    }

    pub fn count(&self, team: Team) -> usize {
        self.occupied().filter(|(_, p)| p.team == team).count()
    }
}

fn piece_symbol(piece: Option<Piece>) -> char {
    match piece {
        None => '.',
        Some(Piece { team: Team::Light, kind: PieceKind::Man }) => 'l',
        Some(Piece { team: Team::Light, kind: PieceKind::King }) => 'L',
        Some(Piece { team: Team::Dark, kind: PieceKind::Man }) => 'd',
        Some(Piece { team: Team::Dark, kind: PieceKind::King }) => 'D',
    }
}

fn symbol_piece(symbol: char) -> Option<Option<Piece>> {
    match symbol {
        '.' => Some(None),
        'l' => Some(Some(Piece::man(Team::Light))),
        'L' => Some(Some(Piece::king(Team::Light))),
        'd' => Some(Some(Piece::man(Team::Dark))),
        'D' => Some(Some(Piece::king(Team::Dark))),
        _ => None,
    }
}

/// Rows are separated by `/`
impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in SlotIndex::all() {
            if slot.get() > 0 && slot.get() % SLOTS_PER_ROW == 0 {
                f.write_str("/")?;
            }
            write!(f, "{}", piece_symbol(self.get(slot)))?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseTableError {
    /// Number of slot symbols found
    WrongLength(usize),
    UnknownSymbol { symbol: char, slot: usize },
}

impl fmt::Display for ParseTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseTableError::WrongLength(n) => {
                write!(f, "expected {} slot symbols, found {}", SLOT_COUNT, n)
            }
            ParseTableError::UnknownSymbol { symbol, slot } => {
                write!(f, "unknown symbol {:?} at slot {}", symbol, slot)
            }
        }
    }
}

impl std::error::Error for ParseTableError {}

impl FromStr for Table {
    type Err = ParseTableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .collect();

        if symbols.len() != SLOT_COUNT as usize {
            return Err(ParseTableError::WrongLength(symbols.len()));
        }

        let mut table = Table::empty();
        for (slot, (&symbol, index)) in symbols.iter().zip(SlotIndex::all()).enumerate() {
            let piece =
                symbol_piece(symbol).ok_or(ParseTableError::UnknownSymbol { symbol, slot })?;
            table.set(index, piece);
        }
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(i: u8) -> SlotIndex {
        SlotIndex::new(i).unwrap()
    }

    #[test]
    fn test_standard_setup() {
        let table = Table::standard();
        assert_eq!(table.count(Team::Dark), 12);
        assert_eq!(table.count(Team::Light), 12);
        assert_eq!(table.get(slot(0)), Some(Piece::man(Team::Dark)));
        assert_eq!(table.get(slot(11)), Some(Piece::man(Team::Dark)));
        assert_eq!(table.get(slot(12)), None);
        assert_eq!(table.get(slot(19)), None);
        assert_eq!(table.get(slot(20)), Some(Piece::man(Team::Light)));
    }

    #[test]
    fn test_display_standard() {
        assert_eq!(
            Table::standard().to_string(),
            "dddd/dddd/dddd/..../..../llll/llll/llll"
        );
    }

    #[test]
    fn test_parse_layout() {
        let table: Table = "D... .... .... .... .... .... .... ...L".parse().unwrap();
        assert_eq!(table.get(slot(0)), Some(Piece::king(Team::Dark)));
        assert_eq!(table.get(slot(31)), Some(Piece::king(Team::Light)));
        assert_eq!(table.occupied().count(), 2);

        let round_trip: Table = Table::standard().to_string().parse().unwrap();
        assert_eq!(round_trip, Table::standard());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "dddd".parse::<Table>(),
            Err(ParseTableError::WrongLength(4))
        );
        let bad = "dddx/dddd/dddd/..../..../llll/llll/llll";
        assert_eq!(
            bad.parse::<Table>(),
            Err(ParseTableError::UnknownSymbol { symbol: 'x', slot: 3 })
        );
    }

    #[test]
    fn test_take() {
        let mut table = Table::standard();
        assert_eq!(table.take(slot(11)), Some(Piece::man(Team::Dark)));
        assert_eq!(table.take(slot(11)), None);
        assert_eq!(table.get(slot(11)), None);
        assert_eq!(table.count(Team::Dark), 11);
    }
}
