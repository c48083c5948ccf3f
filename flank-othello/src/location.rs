//! Code for working with [`Location`]s on the Othello board.

use crate::{EDGE_LENGTH, NUM_SPACES};
use derive_more::{Display, Error, From, Into};
use itertools::Itertools;
use std::fmt::{self, Formatter, Write};

/// A location on the Othello board, as zero-based row and column.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct Location {
    row: u8,
    col: u8,
}

/// A set of locations on the Othello board, which can be iterated (in row-major order) to
/// retrieve them.
/// Bit `row * 8 + col` is set for each member.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Ord, From, Into)]
pub struct MoveList(u64);

impl Location {
    /// Build a location from row and column coordinates.
    /// Returns None if the coordinates are off the board.
    pub fn from_coords(row: usize, col: usize) -> Option<Self> {
        if row >= EDGE_LENGTH || col >= EDGE_LENGTH {
            None
        } else {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        }
    }

    /// Convert from a row-major square index.
    #[inline]
    pub fn from_index(index: usize) -> Self {
        assert!(index < NUM_SPACES);
        Self {
            row: (index / EDGE_LENGTH) as u8,
            col: (index % EDGE_LENGTH) as u8,
        }
    }

    /// Convert into a row-major square index.
    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * EDGE_LENGTH + self.col as usize
    }

    /// Get the row and column coordinates.
    #[inline]
    pub fn to_coords(self) -> (usize, usize) {
        (self.row as usize, self.col as usize)
    }

    #[inline]
    pub fn row(self) -> usize {
        self.row as usize
    }

    #[inline]
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Step `(d_row, d_col)` away from this location, or None when that leaves the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if row < 0 || col < 0 {
            return None;
        }
        Self::from_coords(row as usize, col as usize)
    }

    /// Iterate over every location on the board in row-major order.
    pub fn all() -> impl Iterator<Item = Location> {
        (0..NUM_SPACES).map(Self::from_index)
    }

    #[inline]
    fn mask(self) -> u64 {
        1 << self.to_index()
    }
}

/// Convert this [`Location`] into string notation ("D3").
impl fmt::Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_char((b'A' + self.col) as char)?;
        f.write_char((b'1' + self.row) as char)
    }
}

/// Reasons a coordinate string can fail to name a location.
#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
pub enum ParseLocationError {
    #[display(fmt = "Input should consist of only two characters.")]
    WrongLength,
    #[display(fmt = "Column must be a letter between A and H.")]
    BadColumn,
    #[display(fmt = "Row must be a number between 1 and 8.")]
    BadRow,
}

/// Build a [`Location`] from 1-indexed string notation ("D3", "h8").
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (col_char, row_char) = match (chars.next(), chars.next(), chars.next()) {
            (Some(col), Some(row), None) => (col.to_ascii_uppercase(), row),
            _ => return Err(ParseLocationError::WrongLength),
        };

        let col = "ABCDEFGH"
            .find(col_char)
            .ok_or(ParseLocationError::BadColumn)?;
        let row = "12345678".find(row_char).ok_or(ParseLocationError::BadRow)?;

        Self::from_coords(row, col).ok_or(ParseLocationError::BadRow)
    }
}

impl MoveList {
    /// Returns whether `loc` is in this list.
    #[inline]
    pub fn contains(self, loc: Location) -> bool {
        self.0 & loc.mask() != 0
    }

    /// Add `loc` to this list.
    #[inline]
    pub fn insert(&mut self, loc: Location) {
        self.0 |= loc.mask();
    }

    /// Returns whether the list is empty.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The first location in row-major order, if any.
    #[inline]
    pub fn first(self) -> Option<Location> {
        if self.is_empty() {
            None
        } else {
            Some(Location::from_index(self.0.trailing_zeros() as usize))
        }
    }
}

impl ExactSizeIterator for MoveList {
    fn len(&self) -> usize {
        self.0.count_ones() as usize
    }
}

impl Iterator for MoveList {
    type Item = Location;

    fn next(&mut self) -> Option<Location> {
        let next_move = self.first()?;
        self.0 ^= next_move.mask();
        Some(next_move)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl FromIterator<Location> for MoveList {
    fn from_iter<I: IntoIterator<Item = Location>>(iter: I) -> Self {
        let mut list = MoveList::default();
        for loc in iter {
            list.insert(loc);
        }
        list
    }
}

impl fmt::Display for MoveList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.into_iter().join(", "))
    }
}
