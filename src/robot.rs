//! Robot state machine: placement, rotation, movement, and boundary enforcement.

use crate::geometry::{translate, Direction, Position, Table};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Everything that only exists while the robot is on a table.
///
/// Bundling the three fields into one struct makes partial placement
/// unrepresentable: a robot is either fully placed or not placed at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// The table the robot stands on; every bounds check uses this.
    pub table: Table,

    /// Current cell on the table.
    pub position: Position,

    /// Current facing.
    pub direction: Direction,
}

/// A robot that can be placed on a table and moved around.
///
/// Starts off the table. Every command issued before a bounds-valid place is
/// absorbed without effect, and every transition that would leave the table is
/// discarded. Rejections are silent: no state change, no error, no output.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Robot {
    placement: Option<Placement>,
}

impl Robot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a place has succeeded yet.
    pub fn is_placed(&self) -> bool {
        self.placement.is_some()
    }

    /// Current placement, if any.
    pub fn placement(&self) -> Option<&Placement> {
        self.placement.as_ref()
    }

    /// Puts the robot on `table` at `position` facing `direction`.
    ///
    /// Succeeds only when `position` lies within `table`; the whole placement
    /// is overwritten in one step. An out-of-bounds place changes nothing,
    /// including any placement already in effect. May be issued at any time.
    pub fn place(&mut self, table: Table, position: Position, direction: Direction) {
        if table.contains(position) {
            self.placement = Some(Placement {
                table,
                position,
                direction,
            });
        } else {
            debug!(?position, ?table, "place rejected: out of bounds");
        }
    }

    /// Rotates 90° counter-clockwise. No-op while off the table.
    pub fn turn_left(&mut self) {
        if let Some(p) = &mut self.placement {
            p.direction = p.direction.left();
        }
    }

    /// Rotates 90° clockwise. No-op while off the table.
    pub fn turn_right(&mut self) {
        if let Some(p) = &mut self.placement {
            p.direction = p.direction.right();
        }
    }

    /// Advances one cell in the current facing.
    ///
    /// A step that would leave the table is discarded; position and facing
    /// stay as they were. No-op while off the table.
    pub fn move_forward(&mut self) {
        if let Some(p) = &mut self.placement {
            let candidate = translate(p.position, p.direction);
            if p.table.contains(candidate) {
                p.position = candidate;
            } else {
                debug!(?candidate, "move rejected: would leave the table");
            }
        }
    }

    /// The report line `Output: {x},{y},{DIRECTION}`, or `None` while off the
    /// table. A `None` report produces no output line at all.
    pub fn report(&self) -> Option<String> {
        self.placement.as_ref().map(|p| {
            format!(
                "Output: {},{},{}",
                p.position.x,
                p.position.y,
                p.direction.as_str()
            )
        })
    }
}
