//! Error type shared by board parsing, board validation and strategy selection.
//!
//! Running out of frontier is not an error: strategies report it through
//! [`crate::strategies::Outcome::Exhausted`].

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// A board token could not be read as a tile number.
    #[error("invalid tile token '{token}' at position {position}")]
    InvalidToken { token: String, position: usize },

    #[error("expected {expected} tiles, found {found}")]
    WrongLength { expected: usize, found: usize },

    #[error("tile value {value} is outside 0..=8")]
    TileOutOfRange { value: u8 },

    /// The board has no hole (tile `0`), so no successor can be generated.
    #[error("board has no hole tile (0)")]
    MissingHole,

    #[error("tile {value} appears more than once")]
    DuplicateTile { value: u8 },

    #[error("unknown strategy '{0}' (expected dfs, bfs, bds, ucs, aso, asm, rbfs or 1-6)")]
    UnknownStrategy(String),

    #[error("strategy '{0}' is not implemented")]
    NotImplemented(&'static str),
}
