//! Command dispatch: maps parsed commands onto robot state transitions.

use crate::geometry::{Direction, Position, Table};
use crate::robot::Robot;

/// A fully parsed instruction for the robot.
///
/// `Place` carries its arguments in the variant, so a command can never reach
/// dispatch with the wrong arity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Put the robot on the table at a position and facing.
    Place {
        table: Table,
        position: Position,
        direction: Direction,
    },
    /// Step one cell forward.
    Move,
    /// Quarter turn counter-clockwise.
    Left,
    /// Quarter turn clockwise.
    Right,
    /// Emit the current position and facing.
    Report,
}

/// Drives a [`Robot`] from a sequence of [`Command`]s.
///
/// Holds no state of its own beyond the robot it controls; each command maps
/// to exactly one state-machine operation.
#[derive(Clone, Debug, Default)]
pub struct Controller {
    robot: Robot,
}

impl Controller {
    pub fn new(robot: Robot) -> Self {
        Self { robot }
    }

    /// The robot being driven.
    pub fn robot(&self) -> &Robot {
        &self.robot
    }

    /// Dispatches one command to the matching robot operation.
    ///
    /// Returns the report line for [`Command::Report`] on a placed robot;
    /// every other command (and an unplaced report) yields `None`.
    pub fn execute(&mut self, command: Command) -> Option<String> {
        match command {
            Command::Place {
                table,
                position,
                direction,
            } => {
                self.robot.place(table, position, direction);
                None
            }
            Command::Move => {
                self.robot.move_forward();
                None
            }
            Command::Left => {
                self.robot.turn_left();
                None
            }
            Command::Right => {
                self.robot.turn_right();
                None
            }
            Command::Report => self.robot.report(),
        }
    }
}
