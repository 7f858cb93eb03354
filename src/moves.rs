//! Move representation
//!
//! A checkers move is an ordered sequence of notation numbers: the square the
//! piece left, any intermediate landing squares of a capture chain, and the
//! final square. A simple move has two entries; a multi-capture visits more.
//!
//! Legality (adjacency, forced captures, promotion) is the rule engine's job
//! and is deliberately not checked here. This type only carries the sequence
//! and answers structural questions about it: endpoints, jump classification
//! and the short textual form used for display and the wire.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::SQUARE_COUNT;
use crate::error::{CheckersError, CheckersResult};
use crate::location::Location;

/// Textual form of a move with no positions
const BLANK_MOVE: &str = "...";

/// A single checkers move, including multi-leg capture chains.
///
/// Built once by its owner (rule engine or UI) through the constructors and
/// [`Move::push`], then read. Nothing here mutates after the build phase;
/// concurrent appends to one instance must be serialized by the owner.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Move {
    positions: Vec<u8>,
}

impl Move {
    /// Create an empty move
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a move from notation numbers, origin first.
    ///
    /// More than two entries means the move contains jumps.
    pub fn from_notations(positions: &[u8]) -> Self {
        Self {
            positions: positions.to_vec(),
        }
    }

    /// Create a move from board locations, origin first.
    ///
    /// Each location is converted to its notation number; a light square or
    /// an off-board location is a [`CheckersError::NotPlayable`] error.
    pub fn from_locations(locations: &[Location]) -> CheckersResult<Self> {
        let mut mv = Self::new();
        for loc in locations {
            mv.push_location(*loc)?;
        }
        Ok(mv)
    }

    /// Append one position to the end of the move
    pub fn push(&mut self, position: u8) {
        self.positions.push(position);
    }

    /// Append several positions to the end of the move
    pub fn extend_from(&mut self, positions: &[u8]) {
        self.positions.extend_from_slice(positions);
    }

    /// Append a board location, converted to its notation number
    pub fn push_location(&mut self, location: Location) -> CheckersResult<()> {
        match location.notation() {
            Some(n) => {
                self.positions.push(n);
                Ok(())
            }
            None => Err(CheckersError::NotPlayable {
                row: location.row,
                col: location.col,
            }),
        }
    }

    /// The notation number at the given zero-based index
    pub fn get(&self, index: usize) -> CheckersResult<u8> {
        self.positions
            .get(index)
            .copied()
            .ok_or(CheckersError::OutOfRange {
                index,
                len: self.positions.len(),
            })
    }

    /// The board location at the given zero-based index
    pub fn location_at(&self, index: usize) -> CheckersResult<Location> {
        Location::from_notation(self.get(index)?)
    }

    /// Number of positions in this move
    pub fn count(&self) -> usize {
        self.positions.len()
    }

    /// Does this move contain no positions?
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// The raw ordered notation sequence.
    ///
    /// This is the full serialization of a multi-leg chain; the short
    /// notation collapses it to its endpoints.
    pub fn positions(&self) -> &[u8] {
        &self.positions
    }

    /// The square the move originated at, if any
    pub fn origin(&self) -> Option<u8> {
        self.positions.first().copied()
    }

    /// The final square of the move, if any
    pub fn destination(&self) -> Option<u8> {
        self.positions.last().copied()
    }

    /// The origin as a board location.
    ///
    /// `None` when the move is empty or the stored number is not a valid
    /// notation index.
    pub fn origin_location(&self) -> Option<Location> {
        self.origin().and_then(|n| Location::from_notation(n).ok())
    }

    /// The destination as a board location, under the same conditions as
    /// [`Move::origin_location`]
    pub fn destination_location(&self) -> Option<Location> {
        self.destination()
            .and_then(|n| Location::from_notation(n).ok())
    }

    /// Is this a jumping (capture) move?
    ///
    /// A chain of more than two positions is always a jump. With exactly two,
    /// the move is a jump iff origin and destination are more than one row or
    /// column apart. Fewer than two positions is never a jump.
    pub fn is_jump(&self) -> bool {
        if self.positions.len() > 2 {
            return true;
        }

        match (self.origin_location(), self.destination_location()) {
            (Some(origin), Some(destination)) => {
                (origin.row - destination.row).abs() > 1
                    || (origin.col - destination.col).abs() > 1
            }
            _ => false,
        }
    }

    /// The short textual form of this move: `"..."` when empty, otherwise
    /// `"{origin}-{destination}"`, with `x` in place of `-` for a jump.
    ///
    /// Intermediate legs of a capture chain are not shown; use
    /// [`Move::positions`] when the full chain matters.
    pub fn to_short_notation(&self) -> String {
        match (self.origin(), self.destination()) {
            (Some(origin), Some(destination)) => {
                let sep = if self.is_jump() { 'x' } else { '-' };
                format!("{origin}{sep}{destination}")
            }
            _ => BLANK_MOVE.to_string(),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_short_notation())
    }
}

impl FromStr for Move {
    type Err = CheckersError;

    /// Parse the short notation form: `"..."`, `"12-16"` or `"12x19"`.
    ///
    /// The short form only carries endpoints, so a parsed jump chain comes
    /// back as a two-position move.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == BLANK_MOVE {
            return Ok(Self::new());
        }

        let parse_square = |text: &str| -> CheckersResult<u8> {
            let n: u8 = text
                .trim()
                .parse()
                .map_err(|_| CheckersError::ParseMove {
                    input: s.to_string(),
                })?;
            if n < 1 || n > SQUARE_COUNT {
                return Err(CheckersError::InvalidSquare { notation: n });
            }
            Ok(n)
        };

        let (from, to) = s
            .split_once(['-', 'x'])
            .ok_or_else(|| CheckersError::ParseMove {
                input: s.to_string(),
            })?;

        Ok(Self {
            positions: vec![parse_square(from)?, parse_square(to)?],
        })
    }
}
