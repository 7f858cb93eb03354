//! Checkers board coordinates, notation and move representation
//!
//! Shared logic for a networked checkers game: the mapping between `(row,
//! col)` grid coordinates and the standard 1-32 playable-square numbering,
//! and the move type that carries single moves and multi-leg capture chains.
//! The rule engine, the board rendering control and the network layer all
//! exchange positions through these types.
//!
//! Move legality is out of scope here; this crate never fabricates a
//! geometrically inconsistent coordinate and surfaces every conversion
//! failure to the caller.

pub mod constants;
pub mod error;
pub mod location;
pub mod moves;
pub mod types;

pub use error::{CheckersError, CheckersResult};
pub use location::Location;
pub use moves::Move;
pub use types::{MoveStatus, Piece};
