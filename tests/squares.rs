use utm_mgrs::{Error, GridSquare, Hemisphere, UtmPoint, identify_square, square_origin};

fn square(zone: i32, band: char, column: char, row: char) -> GridSquare {
    GridSquare::create(zone, band, column, row).unwrap()
}

#[test]
fn equator_on_central_meridian_odd_zone() {
    let utm = UtmPoint::create(31, Hemisphere::North, 500_000.0, 0.0).unwrap();
    let sq = identify_square(&utm).unwrap();

    assert_eq!(sq, square(31, 'N', 'E', 'A'));
    assert_eq!(square_origin(&sq).unwrap(), (500_000.0, 0.0));
}

#[test]
fn even_zones_start_rows_at_f() {
    let utm = UtmPoint::create(32, Hemisphere::North, 500_000.0, 0.0).unwrap();
    let sq = identify_square(&utm).unwrap();

    assert_eq!(sq.row(), 'F');
    assert_eq!(sq.column(), 'N');
    assert_eq!(square_origin(&sq).unwrap(), (500_000.0, 0.0));
}

#[test]
fn column_sets_cycle_every_three_zones() {
    let first_column = |zone| {
        let utm = UtmPoint::create(zone, Hemisphere::North, 150_000.0, 10.0).unwrap();
        identify_square(&utm).unwrap().column()
    };
    let last_column = |zone| {
        let utm = UtmPoint::create(zone, Hemisphere::North, 850_000.0, 10.0).unwrap();
        identify_square(&utm).unwrap().column()
    };

    assert_eq!((first_column(1), last_column(1)), ('A', 'H'));
    assert_eq!((first_column(2), last_column(2)), ('J', 'R'));
    assert_eq!((first_column(3), last_column(3)), ('S', 'Z'));
    assert_eq!((first_column(4), last_column(4)), ('A', 'H'));
    assert_eq!((first_column(60), last_column(60)), ('S', 'Z'));
}

#[test]
fn southern_hemisphere_rows_wrap_below_the_equator() {
    // 100m south of the equator
    let utm = UtmPoint::create(33, Hemisphere::South, 500_000.0, 9_999_900.0).unwrap();
    let sq = identify_square(&utm).unwrap();

    assert_eq!(sq, square(33, 'M', 'W', 'V'));
    assert_eq!(square_origin(&sq).unwrap(), (500_000.0, 9_900_000.0));

    let utm = UtmPoint::create(34, Hemisphere::South, 500_000.0, 9_999_900.0).unwrap();
    assert_eq!(identify_square(&utm).unwrap().row(), 'E');
}

#[test]
fn eastings_outside_the_column_cycle_are_out_of_range() {
    let west = UtmPoint::create(1, Hemisphere::North, 50_000.0, 10.0).unwrap();
    assert!(matches!(identify_square(&west), Err(Error::OutOfRange(_))));

    let east = UtmPoint::create(3, Hemisphere::North, 950_000.0, 10.0).unwrap();
    assert!(matches!(identify_square(&east), Err(Error::OutOfRange(_))));

    let polar = UtmPoint::create(3, Hemisphere::North, 500_000.0, 9_500_000.0).unwrap();
    assert!(matches!(identify_square(&polar), Err(Error::OutOfRange(_))));
}

#[test]
fn row_north_of_a_cycle_boundary_moves_up_one_cycle() {
    // Band X starts in square 79, so row V of an even zone (cycle position 14)
    // is in the cycle after floor(79 / 20) = 3
    let (_, northing) = square_origin(&square(32, 'X', 'N', 'V')).unwrap();
    assert_eq!(northing, 9_400_000.0);

    // Band Q starts in square 17, row A of an odd zone is square 20
    let (_, northing) = square_origin(&square(31, 'Q', 'E', 'A')).unwrap();
    assert_eq!(northing, 2_000_000.0);
    let (_, northing) = square_origin(&square(32, 'Q', 'N', 'F')).unwrap();
    assert_eq!(northing, 2_000_000.0);

    // Row letters before the crossing stay in the first cycle
    let (_, northing) = square_origin(&square(31, 'Q', 'E', 'T')).unwrap();
    assert_eq!(northing, 1_700_000.0);
}

#[test]
fn rows_just_south_of_a_band_resolve_below_it() {
    // Band P starts in square 8
    let (_, northing) = square_origin(&square(31, 'P', 'E', 'H')).unwrap();
    assert_eq!(northing, 700_000.0);

    // Band N starts at the equator, row V lies in the previous cycle
    let (_, northing) = square_origin(&square(31, 'N', 'E', 'V')).unwrap();
    assert_eq!(northing, -100_000.0);

    // Band M starts in square -9, in the southern hemisphere
    let (_, northing) = square_origin(&square(31, 'M', 'E', 'L')).unwrap();
    assert_eq!(northing, 9_000_000.0);
    let (_, northing) = square_origin(&square(31, 'M', 'E', 'M')).unwrap();
    assert_eq!(northing, 9_100_000.0);
}

#[test]
fn columns_extrapolate_past_the_zone() {
    // West of zone 1: column Z is the previous repeat of the cycle
    assert_eq!(square_origin(&square(1, 'N', 'Z', 'A')).unwrap().0, 0.0);
    // West of zone 2: column H belongs to zone 1's set
    assert_eq!(square_origin(&square(2, 'N', 'H', 'F')).unwrap().0, 0.0);
    // Well west of zone 2
    assert_eq!(square_origin(&square(32, 'X', 'A', 'V')).unwrap().0, -700_000.0);
    // East of zone 3
    assert_eq!(square_origin(&square(3, 'N', 'A', 'A')).unwrap().0, 900_000.0);
}

#[test]
fn out_of_zone_easting_round_trips() {
    let utm = UtmPoint::create(2, Hemisphere::North, 50_000.0, 1_234_567.0).unwrap();
    let sq = identify_square(&utm).unwrap();

    assert_eq!(sq.column(), 'H');
    assert_eq!(square_origin(&sq).unwrap(), (0.0, 1_200_000.0));
}

#[test]
fn invalid_designations_are_rejected() {
    let invalid = |zone, band, column, row| {
        matches!(GridSquare::create(zone, band, column, row), Err(Error::InvalidSquare(_)))
    };

    assert!(invalid(61, 'N', 'E', 'A'));
    assert!(invalid(0, 'N', 'E', 'A'));
    assert!(invalid(-3, 'N', 'E', 'A'));

    // Lowercase is never normalized
    assert!(invalid(31, 'n', 'E', 'A'));
    assert!(invalid(31, 'N', 'e', 'A'));
    assert!(invalid(31, 'N', 'E', 'a'));

    assert!(invalid(31, 'N', 'I', 'A'));
    assert!(invalid(31, 'N', 'E', 'O'));
    assert!(invalid(31, 'N', '1', 'A'));

    // Polar bands
    assert!(invalid(31, 'A', 'E', 'A'));
    assert!(invalid(31, 'Y', 'E', 'A'));
}

#[test]
fn rows_past_v_wrap_onto_the_row_cycle() {
    for (wrapped, row) in [('W', 'A'), ('X', 'B'), ('Y', 'C'), ('Z', 'D')] {
        assert_eq!(
            square_origin(&square(31, 'N', 'E', wrapped)).unwrap(),
            square_origin(&square(31, 'N', 'E', row)).unwrap(),
        );
    }

    // Even zones shift the cycle but W still aliases A
    assert_eq!(
        square_origin(&square(32, 'T', 'N', 'W')).unwrap(),
        square_origin(&square(32, 'T', 'N', 'A')).unwrap(),
    );
}
