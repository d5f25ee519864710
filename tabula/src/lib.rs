/// All things related to Bitboards.
pub mod bitboard;
/// Squares on a chessboard (including files and ranks).
pub mod square;
/// Attack-table generation for leapers and sliders, and table text emission.
pub mod tables;

pub use bitboard::*;
pub use square::*;
pub use tables::*;

/// Re-exports all the things you'll need.
pub mod prelude {
    pub use crate::bitboard::*;
    pub use crate::square::*;
    pub use crate::tables::*;
}
