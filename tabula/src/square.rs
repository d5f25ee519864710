use std::{
    fmt,
    ops::{Index, IndexMut},
};

use anyhow::{bail, Result};

use super::Bitboard;

/// Represents a single square on an `8x8` chess board.
///
/// Internally encoded using the following bit pattern:
/// ```text
///     00 000 000
///      |  |   |
///      |  |   +- Represents the File.
///      |  +- Represents the Rank.
///      +- Unused.
/// ```
///
/// This is [Little-Endian Rank-File Mapping](https://www.chessprogramming.org/Square_Mapping_Considerations#Little-Endian_Rank-File_Mapping),
/// so `square = file + rank * 8`, with bit index 0 being `a1`.
///
/// This rank-major encoding is the sole indexing contract of this crate:
/// every generated table and every consumer of those tables must index
/// squares this way.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(transparent)]
pub struct Square(pub(crate) u8);

impl Square {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 63;
    pub const COUNT: usize = 64;

    const FILE_MASK: u8 = 0b0000_0111;

    /// Returns an iterator over all 64 squares, in index order (`a1` first).
    ///
    /// # Example
    /// ```
    /// # use tabula::Square;
    /// let mut iter = Square::iter();
    /// assert_eq!(iter.len(), 64);
    /// assert_eq!(iter.next().unwrap().index(), 0);
    /// assert_eq!(iter.last().unwrap().index(), 63);
    /// ```
    pub fn iter() -> impl ExactSizeIterator<Item = Self> + DoubleEndedIterator<Item = Self> {
        (Self::MIN..=Self::MAX).map(Self)
    }

    /// Creates a new [`Square`] from the provided [`File`] and [`Rank`].
    ///
    /// # Example
    /// ```
    /// # use tabula::{Square, File, Rank};
    /// let c4 = Square::new(File::C, Rank::FOUR);
    /// assert_eq!(c4.index(), 26);
    /// ```
    pub const fn new(file: File, rank: Rank) -> Self {
        // least-significant file mapping
        Self(file.0 ^ rank.0 << 3)
    }

    /// Creates a new [`Square`] from the provided index value.
    ///
    /// The provided `index` must be `[0, 63]` or else an error is returned.
    ///
    /// # Example
    /// ```
    /// # use tabula::Square;
    /// let sq = Square::from_index(26);
    /// assert!(sq.is_ok());
    /// assert!(Square::from_index(64).is_err());
    /// ```
    pub fn from_index(index: usize) -> Result<Self> {
        if index > Self::MAX as usize {
            bail!(
                "Invalid index for Square: Must be between [{}, {}]. Got {index}",
                Self::MIN,
                Self::MAX
            );
        }
        Ok(Self(index as u8))
    }

    /// Creates a new [`Square`] from the provided index value, without error checking.
    ///
    /// # Panics
    ///
    /// If `index` is greater than `63` with debug assertions enabled.
    pub const fn from_index_unchecked(index: usize) -> Self {
        debug_assert!(index < 64, "Index must be between [0,64)");
        Self(index as u8)
    }

    /// Fetches the inner index value of the [`Square`], which is represented as a [`u8`].
    pub const fn inner(&self) -> u8 {
        self.0
    }

    /// Fetches the [`File`] of this [`Square`].
    ///
    /// # Example
    /// ```
    /// # use tabula::{Square, File, Rank};
    /// let c4 = Square::new(File::C, Rank::FOUR);
    /// assert_eq!(c4.file(), File::C);
    /// ```
    pub const fn file(&self) -> File {
        File(self.0 & Self::FILE_MASK) // Same as % 8
    }

    /// Fetches the [`Rank`] of this [`Square`].
    ///
    /// # Example
    /// ```
    /// # use tabula::{Square, File, Rank};
    /// let c4 = Square::new(File::C, Rank::FOUR);
    /// assert_eq!(c4.rank(), Rank::FOUR);
    /// ```
    pub const fn rank(&self) -> Rank {
        Rank(self.0 >> 3) // Same as / 8
    }

    /// Fetches the inner index value of the [`Square`], casted to a [`usize`].
    ///
    /// Useful when using a [`Square`] to index into things.
    pub const fn index(&self) -> usize {
        self.inner() as usize
    }

    /// Attempt to offset this [`Square`] by the provided deltas.
    ///
    /// Returns [`None`] if either resulting coordinate would fall off the board,
    /// so a candidate that fails the bounds filter can never reach bit-packing.
    ///
    /// # Example
    /// ```
    /// # use tabula::{Square, File, Rank};
    /// let c4 = Square::new(File::C, Rank::FOUR);
    /// assert_eq!(c4.offset(1, 2), Some(Square::new(File::D, Rank::SIX)));
    /// assert_eq!(c4.offset(-3, 0), None);
    /// ```
    pub fn offset(&self, file_delta: i8, rank_delta: i8) -> Option<Self> {
        let file = self.file().offset(file_delta)?;
        let rank = self.rank().offset(rank_delta)?;

        Some(Self::new(file, rank))
    }

    /// Constructs a [`Bitboard`] with only this [`Square`]'s bit set.
    ///
    /// # Example
    /// ```
    /// # use tabula::{Bitboard, Square};
    /// let a2 = Square::from_index_unchecked(8);
    /// assert_eq!(a2.bitboard(), Bitboard::new(0x100));
    /// ```
    pub const fn bitboard(&self) -> Bitboard {
        Bitboard::from_square(*self)
    }
}

impl<T> Index<Square> for [T; Square::COUNT] {
    type Output = T;
    fn index(&self, index: Square) -> &Self::Output {
        &self[index.index()]
    }
}

impl<T> IndexMut<Square> for [T; Square::COUNT] {
    fn index_mut(&mut self, index: Square) -> &mut Self::Output {
        &mut self[index.index()]
    }
}

impl fmt::Display for Square {
    /// Formats this [`Square`] in algebraic notation (`a1` through `h8`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self, self.0)
    }
}

/// A file (column) on a chess board, from `a` (0) to `h` (7).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(transparent)]
pub struct File(pub(crate) u8);

impl File {
    pub const A: Self = Self(0);
    pub const B: Self = Self(1);
    pub const C: Self = Self(2);
    pub const D: Self = Self(3);
    pub const E: Self = Self(4);
    pub const F: Self = Self(5);
    pub const G: Self = Self(6);
    pub const H: Self = Self(7);

    pub const MIN: u8 = 0;
    pub const MAX: u8 = 7;
    pub const COUNT: usize = 8;

    /// Returns an iterator over all files, `a` through `h`.
    pub fn iter() -> impl ExactSizeIterator<Item = Self> + DoubleEndedIterator<Item = Self> {
        (Self::MIN..=Self::MAX).map(Self)
    }

    /// Construct a new [`File`] from the provided value.
    pub fn new(file: u8) -> Result<Self> {
        if file > Self::MAX {
            bail!(
                "Invalid u8 for File: Must be between [{}, {}]. Got {file}",
                Self::MIN,
                Self::MAX
            );
        }
        Ok(Self(file))
    }

    /// Construct a new [`File`] from the provided value, without error checking.
    pub const fn new_unchecked(file: u8) -> Self {
        debug_assert!(file <= File::MAX, "File must be between [0,8)");
        Self(file)
    }

    /// Fetches the inner value of this [`File`].
    pub const fn inner(&self) -> u8 {
        self.0
    }

    /// Attempt to offset this [`File`] by the provided `delta`.
    ///
    /// If `self + delta` would exceed the bounds of this [`File`], then [`None`] is returned.
    ///
    /// # Example
    /// ```
    /// # use tabula::File;
    /// assert_eq!(File::C.offset(1), Some(File::D));
    /// assert_eq!(File::A.offset(-1), None);
    /// ```
    pub fn offset(self, delta: i8) -> Option<Self> {
        let bits = self.0.checked_add_signed(delta)?;
        (bits <= Self::MAX).then_some(Self(bits))
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", (b'a' + self.0) as char)
    }
}

impl fmt::Debug for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self, self.0)
    }
}

/// A rank (row) on a chess board, from `1` (0) to `8` (7).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(transparent)]
pub struct Rank(pub(crate) u8);

impl Rank {
    pub const ONE: Self = Self(0);
    pub const TWO: Self = Self(1);
    pub const THREE: Self = Self(2);
    pub const FOUR: Self = Self(3);
    pub const FIVE: Self = Self(4);
    pub const SIX: Self = Self(5);
    pub const SEVEN: Self = Self(6);
    pub const EIGHT: Self = Self(7);

    pub const MIN: u8 = 0;
    pub const MAX: u8 = 7;
    pub const COUNT: usize = 8;

    /// Returns an iterator over all ranks, `1` through `8`.
    pub fn iter() -> impl ExactSizeIterator<Item = Self> + DoubleEndedIterator<Item = Self> {
        (Self::MIN..=Self::MAX).map(Self)
    }

    /// Construct a new [`Rank`] from the provided value.
    pub fn new(rank: u8) -> Result<Self> {
        if rank > Self::MAX {
            bail!(
                "Invalid u8 for Rank: Must be between [{}, {}]. Got {rank}",
                Self::MIN,
                Self::MAX
            );
        }
        Ok(Self(rank))
    }

    /// Construct a new [`Rank`] from the provided value, without error checking.
    pub const fn new_unchecked(rank: u8) -> Self {
        debug_assert!(rank <= Rank::MAX, "Rank must be between [0,8)");
        Self(rank)
    }

    /// Fetches the inner value of this [`Rank`].
    pub const fn inner(&self) -> u8 {
        self.0
    }

    /// Attempt to offset this [`Rank`] by the provided `delta`.
    ///
    /// If `self + delta` would exceed the bounds of this [`Rank`], then [`None`] is returned.
    ///
    /// # Example
    /// ```
    /// # use tabula::Rank;
    /// assert_eq!(Rank::FOUR.offset(1), Some(Rank::FIVE));
    /// assert_eq!(Rank::ONE.offset(-1), None);
    /// ```
    pub fn offset(self, delta: i8) -> Option<Self> {
        let bits = self.0.checked_add_signed(delta)?;
        (bits <= Self::MAX).then_some(Self(bits))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0 + 1)
    }
}

impl fmt::Debug for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self, self.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_square_packing_is_rank_major() {
        // square = file + rank * 8
        for square in Square::iter() {
            let repacked = Square::new(square.file(), square.rank());
            assert_eq!(square, repacked);
            assert_eq!(
                square.index(),
                square.file().inner() as usize + square.rank().inner() as usize * 8
            );
        }
    }

    #[test]
    fn test_square_offset_bounds() {
        let a1 = Square::from_index_unchecked(0);
        assert_eq!(a1.offset(-1, 0), None);
        assert_eq!(a1.offset(0, -1), None);
        assert_eq!(a1.offset(1, 2), Some(Square::new(File::B, Rank::THREE)));

        let h8 = Square::from_index_unchecked(63);
        assert_eq!(h8.offset(1, 0), None);
        assert_eq!(h8.offset(0, 1), None);
        assert_eq!(h8.offset(-2, -1), Some(Square::new(File::F, Rank::SEVEN)));
    }

    #[test]
    fn test_square_from_index() {
        assert!(Square::from_index(0).is_ok());
        assert!(Square::from_index(63).is_ok());
        assert!(Square::from_index(64).is_err());
    }

    #[test]
    fn test_file_and_rank_construction() {
        assert_eq!(File::new(2).unwrap(), File::C);
        assert!(File::new(8).is_err());
        assert_eq!(File::new_unchecked(7), File::H);

        assert_eq!(Rank::new(3).unwrap(), Rank::FOUR);
        assert!(Rank::new(8).is_err());
        assert_eq!(Rank::new_unchecked(0), Rank::ONE);
    }

    #[test]
    fn test_square_display() {
        assert_eq!(Square::new(File::A, Rank::ONE).to_string(), "a1");
        assert_eq!(Square::new(File::E, Rank::FOUR).to_string(), "e4");
        assert_eq!(Square::new(File::H, Rank::EIGHT).to_string(), "h8");
    }
}
