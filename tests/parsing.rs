// tests/parsing.rs
use tabletop_robot::{parse_line, Command, Direction, Position, Table};

fn parse(line: &str) -> Option<Command> {
    parse_line(line, Table::default())
}

#[test]
fn parses_the_five_command_words() {
    assert_eq!(parse("MOVE"), Some(Command::Move));
    assert_eq!(parse("LEFT"), Some(Command::Left));
    assert_eq!(parse("RIGHT"), Some(Command::Right));
    assert_eq!(parse("REPORT"), Some(Command::Report));
    assert_eq!(
        parse("PLACE 1,2,EAST"),
        Some(Command::Place {
            table: Table::default(),
            position: Position::new(1, 2),
            direction: Direction::East,
        })
    );
}

#[test]
fn place_tolerates_whitespace_around_commas() {
    // Argument tokens are joined before the comma split.
    assert_eq!(
        parse("PLACE 1, 2, NORTH"),
        Some(Command::Place {
            table: Table::default(),
            position: Position::new(1, 2),
            direction: Direction::North,
        })
    );
}

#[test]
fn place_accepts_out_of_bounds_coordinates() {
    // Bounds are the state machine's concern, not the parser's.
    assert!(matches!(
        parse("PLACE 9,9,WEST"),
        Some(Command::Place { .. })
    ));
    assert!(matches!(
        parse("PLACE -1,0,WEST"),
        Some(Command::Place { .. })
    ));
}

#[test]
fn malformed_place_is_discarded() {
    for line in [
        "PLACE",
        "PLACE 0,0",
        "PLACE 0,0,NORTH,EXTRA",
        "PLACE one,two,NORTH",
        "PLACE 0,0,NORTHWEST",
        "PLACE 0,0,north",
        "PLACE 0.5,0,NORTH",
    ] {
        assert_eq!(parse(line), None, "{line:?} should not parse");
    }
}

#[test]
fn unknown_words_and_blank_lines_are_discarded() {
    assert_eq!(parse(""), None);
    assert_eq!(parse("   "), None);
    assert_eq!(parse("JUMP"), None);
    assert_eq!(parse("move"), None); // vocabulary is uppercase only
}

#[test]
fn tokens_after_an_argless_command_are_ignored() {
    assert_eq!(parse("MOVE now"), Some(Command::Move));
    assert_eq!(parse("  REPORT please  "), Some(Command::Report));
}
