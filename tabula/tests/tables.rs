use tabula::*;

/// Applies a single one-square step in `direction` to every bit of `bb`,
/// using only [`Bitboard`] shifts. This is deliberately independent of the
/// coordinate arithmetic the generators are built on.
fn shift(direction: Direction, bb: Bitboard) -> Bitboard {
    match direction {
        Direction::North => bb.north(),
        Direction::NorthEast => bb.north().east(),
        Direction::East => bb.east(),
        Direction::SouthEast => bb.south().east(),
        Direction::South => bb.south(),
        Direction::SouthWest => bb.south().west(),
        Direction::West => bb.west(),
        Direction::NorthWest => bb.north().west(),
    }
}

/// Flood-fills from `square` in `direction` until the board edge.
fn fill(square: Square, direction: Direction) -> Bitboard {
    let mut attacks = Bitboard::EMPTY_BOARD;
    let mut frontier = shift(direction, square.bitboard());

    while !frontier.is_empty() {
        attacks |= frontier;
        frontier = shift(direction, frontier);
    }

    attacks
}

#[test]
fn west_ray_closed_form_matches_generator_on_every_square() {
    let table = generate_ray_table(Direction::West);

    for square in Square::iter() {
        assert_eq!(
            west_ray(square),
            table[square],
            "west ray mismatch on {square}"
        );
    }
}

#[test]
fn no_table_attacks_its_own_origin() {
    let knight = knight_attack_table();
    let king = king_attack_table();

    for square in Square::iter() {
        assert!(!knight[square].get(square), "knight self-attack on {square}");
        assert!(!king[square].get(square), "king self-attack on {square}");
    }

    for direction in Direction::ALL {
        let rays = generate_ray_table(direction);
        for square in Square::iter() {
            assert!(
                !rays[square].get(square),
                "{direction} ray self-attack on {square}"
            );
        }
    }
}

#[test]
fn knight_population_counts() {
    let knight = knight_attack_table();

    for square in Square::iter() {
        let population = knight[square].population();
        assert!(population <= 8);

        // A knight two or more squares from every edge always has all 8 moves.
        let file = square.file().inner();
        let rank = square.rank().inner();
        if (2..=5).contains(&file) && (2..=5).contains(&rank) {
            assert_eq!(population, 8, "knight on {square}");
        }
    }

    for corner in Bitboard::CORNERS {
        assert_eq!(knight[corner].population(), 2, "knight on {corner}");
    }

    let d4 = Square::new(File::D, Rank::FOUR);
    assert_eq!(knight[d4].population(), 8);
}

#[test]
fn king_population_counts() {
    let king = king_attack_table();

    for square in Square::iter() {
        let population = king[square].population();
        assert!(population <= 8);

        if !Bitboard::EDGES.get(square) {
            assert_eq!(population, 8, "king on {square}");
        }
    }

    for corner in Bitboard::CORNERS {
        assert_eq!(king[corner].population(), 3, "king on {corner}");
    }
}

#[test]
fn ray_tables_match_independent_flood_fill() {
    for direction in Direction::ALL {
        let table = generate_ray_table(direction);
        for square in Square::iter() {
            assert_eq!(
                table[square],
                fill(square, direction),
                "{direction} ray mismatch on {square}"
            );
        }
    }
}

#[test]
fn ray_union_reproduces_open_board_queen_attacks() {
    let tables = Direction::ALL.map(generate_ray_table);

    for square in Square::iter() {
        let mut union = Bitboard::EMPTY_BOARD;
        for table in &tables {
            union |= table[square];
        }

        let mut queen = Bitboard::EMPTY_BOARD;
        for direction in Direction::ALL {
            queen |= fill(square, direction);
        }

        assert_eq!(union, queen, "queen attack mismatch on {square}");
    }
}

#[test]
fn known_attack_values() {
    let knight = knight_attack_table();
    let king = king_attack_table();

    // Spot values from the standard LERF attack tables.
    let a1 = Square::new(File::A, Rank::ONE);
    let d4 = Square::new(File::D, Rank::FOUR);
    let e1 = Square::new(File::E, Rank::ONE);
    let h8 = Square::new(File::H, Rank::EIGHT);

    assert_eq!(knight[a1], Bitboard::new(0x0000000000020400));
    assert_eq!(knight[d4], Bitboard::new(0x0000142200221400));
    assert_eq!(king[a1], Bitboard::new(0x0000000000000302));
    assert_eq!(king[e1], Bitboard::new(0x0000000000003828));

    let north = generate_ray_table(Direction::North);
    assert_eq!(north[a1], Bitboard::new(0x0101010101010100));

    let east = generate_ray_table(Direction::East);
    assert_eq!(east[a1], Bitboard::new(0x00000000000000fe));

    let south = generate_ray_table(Direction::South);
    assert_eq!(south[h8], Bitboard::new(0x0080808080808080));

    let northeast = generate_ray_table(Direction::NorthEast);
    assert_eq!(northeast[a1], Bitboard::new(0x8040201008040200));

    let southwest = generate_ray_table(Direction::SouthWest);
    assert_eq!(southwest[h8], Bitboard::new(0x0040201008040201));

    // c2's west ray covers a2 and b2.
    let c2 = Square::new(File::C, Rank::TWO);
    assert_eq!(west_ray(c2), Bitboard::new(0x0000000000000300));
    let attacked = west_ray(c2).iter().map(|sq| sq.index()).collect::<Vec<_>>();
    assert_eq!(attacked, [8, 9]);
}

#[test]
fn generation_is_reproducible() {
    assert_eq!(knight_attack_table(), knight_attack_table());
    assert_eq!(king_attack_table(), king_attack_table());

    for direction in Direction::ALL {
        assert_eq!(generate_ray_table(direction), generate_ray_table(direction));
    }
}
