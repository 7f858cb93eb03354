//! Board locations and the standard notation numbering
//!
//! Checkers notation numbers only the dark (playable) squares, 1 through 32,
//! walking them row-major from the top of the board. Light squares have no
//! number. This module holds the value type for a board square and the
//! bidirectional mapping between `(row, col)` coordinates and that numbering.
//!
//! The mapping is the exchange format the rest of the game is built on: moves
//! travel over the wire as notation numbers, and the rendering layer converts
//! them back to grid coordinates through this module.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::{COLS, ROWS, SQUARE_COUNT};
use crate::error::{CheckersError, CheckersResult};

/// A square on the checkers board, addressed by row and column.
///
/// Plain value type: freely copyable, compared and hashed by `(row, col)`.
/// Construction is unchecked; whether a location is on the board and playable
/// is a property queried afterwards, not an invariant of the type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Location {
    pub row: i8,
    pub col: i8,
}

impl Location {
    /// Create a location at the given row and column
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Is this location on the board?
    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.row >= 0 && self.row < ROWS && self.col >= 0 && self.col < COLS
    }

    /// Is this a dark square, i.e. one that can hold a piece?
    ///
    /// Dark squares are those where row and column parities differ.
    #[inline]
    pub const fn is_playable(self) -> bool {
        self.is_on_board() && self.row % 2 != self.col % 2
    }

    /// The 1-based notation number of this square, or `None` for a light
    /// square or a location outside the board.
    pub fn notation(self) -> Option<u8> {
        if self.is_playable() {
            Some((((self.row * ROWS + self.col) / 2) + 1) as u8)
        } else {
            None
        }
    }

    /// Convert a notation number back to its board location.
    ///
    /// Exact inverse of [`Location::notation`] for `n` in
    /// `1..=SQUARE_COUNT`; anything outside that range is an
    /// [`CheckersError::InvalidSquare`] error.
    ///
    /// Consecutive notation numbers alternate between the two halves of a
    /// row pair, so the inverse picks the flat board index piecewise on
    /// `n % ROWS`. The rule below is derived for an 8-wide board; it is kept
    /// parametric on the constants, but a different board width needs the
    /// derivation redone.
    pub fn from_notation(n: u8) -> CheckersResult<Self> {
        if n < 1 || n > SQUARE_COUNT {
            return Err(CheckersError::InvalidSquare { notation: n });
        }

        let n = n as i8;
        let idx = if n % ROWS > ROWS / 2 || n % ROWS == 0 {
            n * 2 - 2
        } else {
            n * 2 - 1
        };

        Ok(Self {
            row: idx / ROWS,
            col: idx % COLS,
        })
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
