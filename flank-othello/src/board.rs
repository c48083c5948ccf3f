//! Tile-level Othello rules on an 8x8 grid.
//!
//! Cells hold `-1` (black), `0` (empty) or `+1` (white), so negating a cell swaps its
//! color and summing the grid gives the material score. Rows and columns are zero-based,
//! row-major, with the upper-left corner at `(0, 0)`.

use crate::game::Player;
use crate::location::{Location, MoveList};
use crate::{utils, EDGE_LENGTH, NUM_SPACES};
use derive_more::{Display, Error};
use std::fmt;

/// The eight scan directions as `(d_row, d_col)`.
const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The contents of one space on the board.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[repr(i8)]
pub enum Cell {
    Black = -1,
    Empty = 0,
    White = 1,
}

impl Cell {
    /// The numeric value of this cell: -1, 0 or +1.
    #[inline]
    pub fn value(self) -> i8 {
        self as i8
    }

    /// The player owning this cell, if any.
    #[inline]
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Black => Some(Player::Black),
            Cell::White => Some(Player::White),
            Cell::Empty => None,
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Black => 'X',
            Cell::White => 'O',
            Cell::Empty => '.',
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

/// Why a move could not be applied.
#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
pub enum MoveError {
    #[display(fmt = "Invalid move. Please choose a blank tile.")]
    Occupied,
    #[display(fmt = "Invalid move. Your move must result in at least one tile being flipped.")]
    NoFlips,
}

/// The tiles on an Othello board.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Board {
    cells: [[Cell; EDGE_LENGTH]; EDGE_LENGTH],
}

impl Default for Board {
    /// Gets the starting position.
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard starting position: white on D4 and E5, black on E4 and D5.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.cells[3][3] = Cell::White;
        board.cells[3][4] = Cell::Black;
        board.cells[4][3] = Cell::Black;
        board.cells[4][4] = Cell::White;
        board
    }

    /// A board with no tiles on it.
    pub const fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; EDGE_LENGTH]; EDGE_LENGTH],
        }
    }

    #[inline]
    pub fn get(&self, loc: Location) -> Cell {
        self.cells[loc.row()][loc.col()]
    }

    /// Overwrite a single cell, without applying any rules.
    #[inline]
    pub fn set(&mut self, loc: Location, cell: Cell) {
        self.cells[loc.row()][loc.col()] = cell;
    }

    /// Number of opposing tiles between `loc` and the nearest `player` tile in direction
    /// `(d_row, d_col)`. Zero if the run is empty, or ends at an empty cell or the edge.
    fn anchored_run(&self, loc: Location, (d_row, d_col): (i8, i8), player: Player) -> usize {
        let own = Cell::from(player);
        let opponent = Cell::from(!player);
        let mut run = 0;
        let mut cursor = loc.offset(d_row, d_col);

        while let Some(next) = cursor {
            match self.get(next) {
                cell if cell == opponent => run += 1,
                cell if cell == own => return run,
                _ => return 0,
            }
            cursor = next.offset(d_row, d_col);
        }

        0
    }

    /// Whether `player` may place a tile at `loc`. Never changes the board.
    pub fn is_legal_move(&self, loc: Location, player: Player) -> bool {
        self.get(loc) == Cell::Empty
            && DIRECTIONS
                .iter()
                .any(|&dir| self.anchored_run(loc, dir, player) > 0)
    }

    /// The tiles that would flip if `player` placed a tile at `loc`.
    /// Empty when the move is illegal.
    pub fn flips(&self, loc: Location, player: Player) -> MoveList {
        let mut flips = MoveList::default();
        if self.get(loc) != Cell::Empty {
            return flips;
        }

        for &(d_row, d_col) in DIRECTIONS.iter() {
            let run = self.anchored_run(loc, (d_row, d_col), player);
            let mut cursor = loc;
            for _ in 0..run {
                // A counted run never crosses the edge.
                match cursor.offset(d_row, d_col) {
                    Some(next) => cursor = next,
                    None => break,
                }
                flips.insert(cursor);
            }
        }

        flips
    }

    /// Place a `player` tile at `loc` and flip every captured run, returning how many
    /// tiles flipped. An illegal move leaves the board untouched.
    pub fn apply_move(&mut self, loc: Location, player: Player) -> Result<u8, MoveError> {
        if self.get(loc) != Cell::Empty {
            return Err(MoveError::Occupied);
        }

        let flips = self.flips(loc, player);
        if flips.is_empty() {
            return Err(MoveError::NoFlips);
        }

        let flipped = flips.len() as u8;
        for tile in flips {
            self.set(tile, player.into());
        }
        self.set(loc, player.into());

        Ok(flipped)
    }

    /// Like [`Board::apply_move`], but returns the resulting board.
    #[inline]
    pub fn play(mut self, loc: Location, player: Player) -> Result<Self, MoveError> {
        self.apply_move(loc, player)?;
        Ok(self)
    }

    /// Every location where `player` may move.
    pub fn legal_moves(&self, player: Player) -> MoveList {
        Location::all()
            .filter(|&loc| self.is_legal_move(loc, player))
            .collect()
    }

    /// Whether `player` has at least one legal move.
    pub fn has_any_legal_move(&self, player: Player) -> bool {
        Location::all().any(|loc| self.is_legal_move(loc, player))
    }

    /// Sum of every cell: # white tiles - # black tiles.
    pub fn material_score(&self) -> i8 {
        self.cell_iter().map(Cell::value).sum()
    }

    /// Material score from `player`'s point of view: # own tiles - # opponent tiles.
    #[inline]
    pub fn score_for(&self, player: Player) -> i8 {
        player.sign() * self.material_score()
    }

    /// Number of tiles `player` has on the board.
    pub fn count(&self, player: Player) -> u8 {
        self.count_cells(player.into())
    }

    pub fn count_empty(&self) -> u8 {
        self.count_cells(Cell::Empty)
    }

    fn count_cells(&self, target: Cell) -> u8 {
        self.cell_iter().filter(|&cell| cell == target).count() as u8
    }

    /// Every cell in row-major order.
    fn cell_iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().flat_map(|row| row.iter().copied())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(self.cell_iter().map(Cell::symbol), f)
    }
}

/// Reasons a board string can fail to parse.
#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
pub enum ParseBoardError {
    #[display(fmt = "expected {} cells, found {}", NUM_SPACES, found)]
    WrongLength { found: usize },
    #[display(fmt = "unrecognized cell {:?}", found)]
    InvalidCell { found: char },
}

/// Parse a board from 64 cells in row-major order: `X` for black, `O` for white,
/// `.` or `-` for empty. Whitespace is ignored.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Self::empty();
        let mut found = 0;

        for symbol in s.chars().filter(|c| !c.is_whitespace()) {
            let cell = match symbol.to_ascii_uppercase() {
                'X' => Cell::Black,
                'O' => Cell::White,
                '.' | '-' => Cell::Empty,
                _ => return Err(ParseBoardError::InvalidCell { found: symbol }),
            };

            if found < NUM_SPACES {
                board.set(Location::from_index(found), cell);
            }
            found += 1;
        }

        if found != NUM_SPACES {
            return Err(ParseBoardError::WrongLength { found });
        }

        Ok(board)
    }
}
