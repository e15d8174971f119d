//! Line parser for the text command vocabulary.
//!
//! One raw text line maps to at most one [`Command`]. Malformed lines — an
//! unknown command word, a `PLACE` with the wrong field count, non-integer
//! coordinates, or an unknown direction name — parse to `None` and never
//! reach the controller.

use crate::controller::Command;
use crate::geometry::{Direction, Position, Table};
use tracing::debug;

/// Parses one line of command text against the run's table.
///
/// The vocabulary is `PLACE X,Y,DIRECTION`, `MOVE`, `LEFT`, `RIGHT`, `REPORT`.
/// Whitespace around `PLACE`'s commas is tolerated (`PLACE 1, 2, NORTH`
/// parses), since the argument tokens are joined before splitting on commas.
/// Tokens trailing an argument-less command word are ignored.
pub fn parse_line(line: &str, table: Table) -> Option<Command> {
    let mut tokens = line.split_whitespace();
    let command = match tokens.next()? {
        "PLACE" => parse_place(tokens, table),
        "MOVE" => Some(Command::Move),
        "LEFT" => Some(Command::Left),
        "RIGHT" => Some(Command::Right),
        "REPORT" => Some(Command::Report),
        _ => None,
    };
    if command.is_none() {
        debug!(line, "discarding unparseable line");
    }
    command
}

fn parse_place<'a>(tokens: impl Iterator<Item = &'a str>, table: Table) -> Option<Command> {
    let args: String = tokens.collect();
    let mut fields = args.split(',');

    let x = fields.next()?.parse().ok()?;
    let y = fields.next()?.parse().ok()?;
    let direction = Direction::from_name(fields.next()?)?;
    if fields.next().is_some() {
        return None;
    }

    Some(Command::Place {
        table,
        position: Position::new(x, y),
        direction,
    })
}
