//! Board geometry constants
//!
//! Centralizes the dimensions of the checkers board. Everything else in the
//! crate derives its coordinate math from these values rather than hard-coded
//! literals, so a non-standard board size only needs changes here (the
//! notation inverse in `location.rs` documents its own assumptions).

/// Number of rows on the board
pub const ROWS: i8 = 8;

/// Number of columns on the board
pub const COLS: i8 = 8;

/// Number of playable (dark) squares: half of all squares
pub const SQUARE_COUNT: u8 = (ROWS as u8 * COLS as u8) / 2;
