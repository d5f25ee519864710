use std::{fmt, io::Write};

use super::{Bitboard, File, Rank, Square};

/// Width of a [`Bitboard`], in bits.
pub const BOARD_BITS: u32 = 64;

/// Width of a single rank, in squares (and therefore bits).
pub const FILES_PER_RANK: u32 = 8;

/// Deltas for the movement of the Knight, as `(file, rank)` pairs.
pub const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

/// Deltas for the movement of the King, as `(file, rank)` pairs.
pub const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// One of the eight compass directions a sliding piece can travel in.
///
/// Each direction is a unit `(file, rank)` delta; the four orthogonals are
/// the Rook's directions and the four diagonals are the Bishop's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// All eight directions, in the order their tables are emitted.
    pub const ALL: [Self; 8] = [
        Self::North,
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
    ];

    /// The unit `(file, rank)` delta for this [`Direction`].
    ///
    /// # Example
    /// ```
    /// # use tabula::Direction;
    /// assert_eq!(Direction::North.delta(), (0, 1));
    /// assert_eq!(Direction::SouthWest.delta(), (-1, -1));
    /// ```
    pub const fn delta(&self) -> (i8, i8) {
        match self {
            Self::North => (0, 1),
            Self::NorthEast => (1, 1),
            Self::East => (1, 0),
            Self::SouthEast => (1, -1),
            Self::South => (0, -1),
            Self::SouthWest => (-1, -1),
            Self::West => (-1, 0),
            Self::NorthWest => (-1, 1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "north",
            Self::NorthEast => "northeast",
            Self::East => "east",
            Self::SouthEast => "southeast",
            Self::South => "south",
            Self::SouthWest => "southwest",
            Self::West => "west",
            Self::NorthWest => "northwest",
        };
        write!(f, "{name}")
    }
}

/// Generates the attack table for a "Leaper" piece.
/// Leapers may "leap" or "jump" to a square a fixed delta away.
///
/// In standard chess, the Leapers are the King and Knight.
pub fn generate_leaper_table(deltas: &[(i8, i8)]) -> [Bitboard; Square::COUNT] {
    let mut table = [Bitboard::default(); Square::COUNT];

    for square in Square::iter() {
        // All reachable squares from `square`.
        // Starts empty: a piece cannot "move to" the square it is already on.
        let mut movement = Bitboard::default();

        for (df, dr) in deltas {
            // If shifting by the delta stays on the board, add it to the mask.
            // `offset` returning `None` is the bounds filter.
            if let Some(shifted) = square.offset(*df, *dr) {
                movement.set(shifted);
            }
        }

        table[square] = movement;
    }

    table
}

/// Generates the Knight's attack table.
pub fn knight_attack_table() -> [Bitboard; Square::COUNT] {
    generate_leaper_table(&KNIGHT_DELTAS)
}

/// Generates the King's attack table.
pub fn king_attack_table() -> [Bitboard; Square::COUNT] {
    generate_leaper_table(&KING_DELTAS)
}

/// Generates the open-board ray table for a single [`Direction`].
///
/// Each entry holds every square from the origin (exclusive) to the board
/// edge along `direction`. There is no occupancy concept here: these are
/// "super-slider" rays for a fully open board, meant to be intersected with
/// occupancy masks by whatever consumes the tables.
pub fn generate_ray_table(direction: Direction) -> [Bitboard; Square::COUNT] {
    let (df, dr) = direction.delta();
    let mut table = [Bitboard::default(); Square::COUNT];

    for square in Square::iter() {
        let mut movement = Bitboard::default();

        // Walk outward until the ray falls off the board. For a unit delta
        // the coordinates leave [0,8) monotonically, so stopping at the
        // first `None` visits exactly the in-bounds steps 1..=7.
        let mut ray = square;
        while let Some(shifted) = ray.offset(df, dr) {
            movement.set(shifted);
            ray = shifted;
        }

        table[square] = movement;
    }

    table
}

/// Computes the west ray of `square` in closed form, without iteration.
///
/// Algebraically equal to `generate_ray_table(Direction::West)[square]`, and
/// cross-checked against it for all 64 squares in the tests. Kept both as a
/// faster single-entry path and as an independent check on the generator.
pub fn west_ray(square: Square) -> Bitboard {
    let sq = square.inner() as u32;

    // All bits strictly below the origin's bit.
    let below_origin = (u64::MAX >> 1) >> (BOARD_BITS - 1 - sq);

    // All bits in every rank strictly below the origin's rank. `sq | 7`
    // rounds the square up to the last file of its rank; on the final rank
    // the left shift wraps to zero, which the wrapping subtraction absorbs.
    let below_rank = (2u64 << (sq | (FILES_PER_RANK - 1))).wrapping_sub(1) >> FILES_PER_RANK;

    // What remains is exactly the origin's own rank, west of the origin.
    Bitboard::new(below_origin - below_rank)
}

/// Writes `table` to `out` as text, one rank of 8 entries per line.
///
/// Every entry is a zero-padded lowercase hex literal with a trailing comma,
/// so the 8 lines can be pasted verbatim into an array initializer. A
/// `// <name>` header precedes the block and a blank line follows it.
pub fn write_table(
    name: &str,
    table: &[Bitboard; Square::COUNT],
    out: &mut impl Write,
) -> std::io::Result<()> {
    writeln!(out, "// {name}")?;

    for rank in Rank::iter() {
        let row = File::iter()
            .map(|file| format!("{:x},", table[Square::new(file, rank)]))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(out, "{row}")?;
    }

    writeln!(out)
}
