use broadside::{Coord, GameError};

#[test]
fn test_parse_corners() {
    assert_eq!(Coord::parse("A1").unwrap(), Coord::new(0, 0));
    assert_eq!(Coord::parse("J10").unwrap(), Coord::new(9, 9));
    assert_eq!(Coord::parse("B3").unwrap(), Coord::new(2, 1));
    assert_eq!(Coord::parse("A10").unwrap(), Coord::new(9, 0));
    assert_eq!(Coord::parse("J1").unwrap(), Coord::new(0, 9));
}

#[test]
fn test_parse_is_case_insensitive() {
    assert_eq!(Coord::parse("b3").unwrap(), Coord::parse("B3").unwrap());
    assert_eq!(Coord::parse("j10").unwrap(), Coord::new(9, 9));
}

#[test]
fn test_parse_rejects_bad_input() {
    for text in ["K1", "A11", "A0", "", "Z", "1A", "AA", "A", "J100", "!5"] {
        assert_eq!(
            Coord::parse(text).unwrap_err(),
            GameError::InvalidCoordinate,
            "expected {:?} to be rejected",
            text
        );
    }
}

#[test]
fn test_display_roundtrip() {
    for row in 0..10 {
        for col in 0..10 {
            let coord = Coord::new(row, col);
            assert_eq!(Coord::parse(&coord.to_string()).unwrap(), coord);
        }
    }
}
