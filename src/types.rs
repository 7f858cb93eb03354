//! Square contents and move validation outcomes
//!
//! Plain closed enums exchanged with the rule engine and the rendering layer.
//! Match on them exhaustively; new variants are intentionally breaking.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What a board square holds
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Piece {
    /// Not a playable square (light square)
    #[default]
    Illegal,
    /// Empty playable square
    None,
    /// Black man
    Black,
    /// White man
    White,
    /// Black king
    BlackKing,
    /// White king
    WhiteKing,
}

/// Outcome of validating a move, produced by the rule engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveStatus {
    /// The move is legal and complete
    Legal,
    /// The move is not allowed
    Illegal,
    /// The move is legal so far but further capture legs are still required
    Incomplete,
}
