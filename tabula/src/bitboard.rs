use std::{fmt, ops::Not};

use anyhow::{anyhow, bail, Result};

use super::{File, Rank, Square};

/// A [`Bitboard`] represents a set of squares on the board as a 64-bit mask.
///
/// Bit `b` being set means the property being tracked (here: "attacked or
/// reachable from some origin") holds for square `b`.
///
/// Bit index 0 is the least-significant bit (LSB = 2^0)
/// Bit index 63 is the most-significant bit (MSB = 2^63)
///
/// The encoding follows [Little-Endian Rank-File Mapping (LERF)](https://www.chessprogramming.org/Square_Mapping_Considerations#Little-Endian_Rank-File_Mapping),
/// so a bitboard of the first rank looks like this in binary:
/// ```text
/// 00000000
/// 00000000
/// 00000000
/// 00000000
/// 00000000
/// 00000000
/// 00000000
/// 11111111
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Bitboard(pub(crate) u64);

impl Bitboard {
    pub const FILE_A: Self = Self(0x0101010101010101);
    pub const FILE_H: Self = Self(0x8080808080808080);
    pub const NOT_FILE_A: Self = Self(0xfefefefefefefefe);
    pub const NOT_FILE_H: Self = Self(0x7f7f7f7f7f7f7f7f);
    pub const RANK_1: Self = Self(0x00000000000000FF);
    pub const RANK_8: Self = Self(0xFF00000000000000);
    pub const EMPTY_BOARD: Self = Self(0x0000000000000000);
    pub const FULL_BOARD: Self = Self(0xFFFFFFFFFFFFFFFF);
    pub const EDGES: Self = Self(0xFF818181818181FF);
    pub const CORNERS: Self = Self(0x8100000000000081);

    /// Constructs a new [`Bitboard`] from the provided bit pattern.
    ///
    /// # Example
    /// ```
    /// # use tabula::Bitboard;
    /// let board = Bitboard::new(255);
    /// assert_eq!(board.to_hex_string(), "0x00000000000000FF");
    /// ```
    pub const fn new(bits: u64) -> Self {
        Self(bits)
    }

    /// Constructs a new [`Bitboard`] with only the bit of the provided [`Square`] set.
    ///
    /// # Example
    /// ```
    /// # use tabula::{Bitboard, Square};
    /// let board = Bitboard::from_square(Square::from_index_unchecked(63));
    /// assert_eq!(board.to_hex_string(), "0x8000000000000000");
    /// ```
    pub const fn from_square(square: Square) -> Self {
        Self(1 << square.index())
    }

    /// Constructs a new [`Bitboard`] with an entire column of bits set.
    ///
    /// # Example
    /// ```
    /// # use tabula::{Bitboard, File};
    /// let board = Bitboard::from_file(File::F);
    /// assert_eq!(board.to_hex_string(), "0x2020202020202020");
    /// ```
    pub const fn from_file(file: File) -> Self {
        Self(Self::FILE_A.0 << file.0)
    }

    /// Constructs a new [`Bitboard`] with an entire row of bits set.
    ///
    /// # Example
    /// ```
    /// # use tabula::{Bitboard, Rank};
    /// let board = Bitboard::from_rank(Rank::SEVEN);
    /// assert_eq!(board.to_hex_string(), "0x00FF000000000000");
    /// ```
    pub const fn from_rank(rank: Rank) -> Self {
        Self(Self::RANK_1.0 << (rank.0 * 8))
    }

    /// Constructs a new [`Bitboard`] from the provided string.
    ///
    /// The string may be a binary or hexadecimal number, optionally prefixed
    /// with `0b` or `0x`.
    ///
    /// # Example
    /// ```
    /// # use tabula::Bitboard;
    /// let board1 = Bitboard::from_str("0x00FF000000000000").unwrap();
    /// let board2 = Bitboard::from_str("00FF000000000000").unwrap();
    /// assert_eq!(board1, board2);
    /// ```
    pub fn from_str(bits: &str) -> Result<Self> {
        let bits = bits.to_lowercase();

        if bits.len() == 64 || bits.len() == 66 {
            let bits = bits.trim_start_matches("0b");
            let bits = u64::from_str_radix(bits, 2).map_err(|_| {
                anyhow!("Invalid Bitboard string: Expected binary digits, got {bits}")
            })?;
            Ok(Self::new(bits))
        } else if bits.len() == 16 || bits.len() == 18 {
            let bits = bits.trim_start_matches("0x");
            let bits = u64::from_str_radix(bits, 16).map_err(|_| {
                anyhow!("Invalid Bitboard string: Expected hexadecimal digits, got {bits}")
            })?;
            Ok(Self::new(bits))
        } else {
            bail!("Invalid Bitboard string: Invalid length {}. Length must be either 64 (binary) or 16 (hexadecimal)", bits.len())
        }
    }

    /// Returns the inner `u64` of this [`Bitboard`].
    pub const fn inner(&self) -> u64 {
        self.0
    }

    /// Checks if this [`Bitboard`] is empty, or all zeros.
    ///
    /// # Example
    /// ```
    /// # use tabula::Bitboard;
    /// assert!(Bitboard::new(0x0).is_empty());
    /// assert!(!Bitboard::CORNERS.is_empty());
    /// ```
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Toggles the bit corresponding to the provided [`Square`] to `1` (on).
    ///
    /// # Example
    /// ```
    /// # use tabula::{Bitboard, Square};
    /// let mut board = Bitboard::default();
    /// board.set(Square::from_index_unchecked(14));
    /// assert_eq!(board.to_hex_string(), "0x0000000000004000");
    /// ```
    pub fn set(&mut self, square: Square) {
        *self |= Self::from_square(square);
    }

    /// Gets the value of the bit corresponding to the provided [`Square`].
    ///
    /// # Example
    /// ```
    /// # use tabula::{Bitboard, Square};
    /// let board = Bitboard::FILE_A;
    /// assert!(board.get(Square::from_index_unchecked(16)));
    /// ```
    pub const fn get(&self, square: Square) -> bool {
        self.0 & (1 << square.index()) != 0
    }

    /// Yields the total number of `1`s in this [`Bitboard`].
    ///
    /// In other words, this function determines how many bits are activated.
    ///
    /// # Example
    /// ```
    /// # use tabula::Bitboard;
    /// let board = Bitboard::RANK_1;
    /// assert_eq!(board.population(), 8);
    /// ```
    pub const fn population(&self) -> u32 {
        self.0.count_ones()
    }

    /// Returns the lowest non-zero bit of this [`Bitboard`], as a [`Square`].
    pub const fn lsb(&self) -> Option<Square> {
        if self.is_empty() {
            None
        } else {
            Some(Square(self.0.trailing_zeros() as u8))
        }
    }

    /// Clears the lowest non-zero bit from `self`, if there is a square to clear.
    pub fn clear_lsb(&mut self) {
        self.0 &= self.0.wrapping_sub(1);
    }

    /// Shifts this [`Bitboard`] by one rank up.
    ///
    /// If already at the final rank (8), returns an empty board.
    ///
    /// # Example
    /// ```
    /// # use tabula::Bitboard;
    /// assert_eq!(Bitboard::RANK_1.north(), Bitboard::new(0xFF00));
    /// assert_eq!(Bitboard::RANK_8.north(), Bitboard::EMPTY_BOARD);
    /// ```
    pub const fn north(self) -> Self {
        Self(self.0 << 8)
    }

    /// Shifts this [`Bitboard`] by one rank down.
    ///
    /// If already at the first rank (1), returns an empty board.
    pub const fn south(self) -> Self {
        Self(self.0 >> 8)
    }

    /// Shifts this [`Bitboard`] by one file up.
    ///
    /// If already at the final file (h), returns an empty board.
    ///
    /// # Example
    /// ```
    /// # use tabula::Bitboard;
    /// assert_eq!(Bitboard::FILE_A.east(), Bitboard::new(0x0202020202020202));
    /// assert_eq!(Bitboard::FILE_H.east(), Bitboard::EMPTY_BOARD);
    /// ```
    pub const fn east(self) -> Self {
        // Post-shift mask
        Self((self.0 << 1) & Self::NOT_FILE_A.0)
    }

    /// Shifts this [`Bitboard`] by one file down.
    ///
    /// If already at the first file (a), returns an empty board.
    pub const fn west(self) -> Self {
        // Post-shift mask
        Self((self.0 >> 1) & Self::NOT_FILE_H.0)
    }

    /// Returns a [`BitboardIter`] to iterate over all of the set bits as [`Square`]s.
    pub const fn iter(&self) -> BitboardIter {
        BitboardIter { bb: *self }
    }

    /// Formats this [`Bitboard`] as a hexadecimal string.
    pub fn to_hex_string(&self) -> String {
        format!("0x{:0>16X}", self.0)
    }
}

macro_rules! impl_bitwise_op {
    // Impl op and op_assign for Self
    ($op:tt, $op_assign:tt, $func:ident, $func_assign:ident, $op_tok:tt) => {
        impl std::ops::$op for Bitboard {
            type Output = Self;
            fn $func(self, rhs: Self) -> Self::Output {
                Self(self.0 $op_tok rhs.0)
            }
        }

        impl std::ops::$op_assign for Bitboard {
            fn $func_assign(&mut self, rhs: Self) {
                *self = *self $op_tok rhs;
            }
        }
    };
}

impl_bitwise_op!(BitAnd, BitAndAssign, bitand, bitand_assign, &);
impl_bitwise_op!(BitOr, BitOrAssign, bitor, bitor_assign, |);
impl_bitwise_op!(BitXor, BitXorAssign, bitxor, bitxor_assign, ^);

impl Not for Bitboard {
    type Output = Self;
    fn not(self) -> Self::Output {
        Self(!self.0)
    }
}

impl fmt::LowerHex for Bitboard {
    /// Formats this [`Bitboard`] as a 16-character lowercase hexadecimal string, including the `0x` prefix.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:0>16x}", self.0)
    }
}

impl fmt::Display for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Allocate just enough capacity
        let mut board = String::with_capacity(136);

        for rank in Rank::iter().rev() {
            for file in File::iter() {
                let square = Square::new(file, rank);
                let occupant = if self.get(square) { 'X' } else { '.' };

                board += &format!("{occupant} ");
            }
            board += "\n";
        }

        write!(f, "{board}")
    }
}

impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{self}", self.to_hex_string())
    }
}

pub struct BitboardIter {
    bb: Bitboard,
}

impl Iterator for BitboardIter {
    type Item = Square;
    fn next(&mut self) -> Option<Self::Item> {
        let next = self.bb.lsb()?;
        self.bb.clear_lsb();
        Some(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.bb.population() as usize;
        (size, Some(size))
    }
}

impl ExactSizeIterator for BitboardIter {}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = BitboardIter;
    fn into_iter(self) -> Self::IntoIter {
        BitboardIter { bb: self }
    }
}

impl IntoIterator for &Bitboard {
    type Item = Square;
    type IntoIter = BitboardIter;
    fn into_iter(self) -> Self::IntoIter {
        BitboardIter { bb: *self }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_bitboard_to_string() {
        let expected = ". . . . . . . . \n\
                        . . . . . . . . \n\
                        . . . . . . . . \n\
                        . . . . . . . . \n\
                        . . . . . . . . \n\
                        . . . . . . . . \n\
                        X X X X X X X X \n\
                        . . . . . . . . \n";
        assert_eq!(Bitboard::new(0xFF00).to_string(), expected);

        let board = Bitboard::new(0xFF00) | Bitboard::from_file(File::C);
        let expected = ". . X . . . . . \n\
                        . . X . . . . . \n\
                        . . X . . . . . \n\
                        . . X . . . . . \n\
                        . . X . . . . . \n\
                        . . X . . . . . \n\
                        X X X X X X X X \n\
                        . . X . . . . . \n";
        assert_eq!(board.to_string(), expected);
    }

    #[test]
    fn test_bitboard_masking() {
        let file_a = Bitboard::FILE_A;
        let full_board = Bitboard::FULL_BOARD;
        let expected = Bitboard::NOT_FILE_A;

        assert_eq!(file_a ^ full_board, expected);
    }

    #[test]
    fn test_bitboard_from_str() {
        let bits = "0x0101010101010101";
        let board = Bitboard::from_str(bits).unwrap();
        assert_eq!(board, Bitboard::FILE_A);

        let bits = "0101010101010101";
        let board = Bitboard::from_str(bits).unwrap();
        assert_eq!(board, Bitboard::FILE_A);

        let bits = "0b0000000100000001000000010000000100000001000000010000000100000001";
        let board = Bitboard::from_str(bits).unwrap();
        assert_eq!(board, Bitboard::FILE_A);

        let bits = "0000000200000002000000020000000200000002000000010000000100000001";
        let board = Bitboard::from_str(bits);
        assert!(board.is_err());

        let bits = "x0awdk";
        let board = Bitboard::from_str(bits);
        assert!(board.is_err());

        let bits = "";
        let board = Bitboard::from_str(bits);
        assert!(board.is_err());
    }

    #[test]
    fn test_bitboard_iteration() {
        let board = Bitboard::CORNERS;
        let indices = board.iter().map(|sq| sq.index()).collect::<Vec<_>>();
        assert_eq!(indices, [0, 7, 56, 63]);
    }

    #[test]
    fn test_bitboard_shifts_drop_off_the_edge() {
        assert_eq!(Bitboard::RANK_8.north(), Bitboard::EMPTY_BOARD);
        assert_eq!(Bitboard::RANK_1.south(), Bitboard::EMPTY_BOARD);
        assert_eq!(Bitboard::FILE_H.east(), Bitboard::EMPTY_BOARD);
        assert_eq!(Bitboard::FILE_A.west(), Bitboard::EMPTY_BOARD);
    }
}
