//! # tabletop-robot
//!
//! A simulation of a single toy robot on a finite tabletop grid.
//!
//! The robot accepts a small fixed vocabulary of commands — `PLACE X,Y,DIRECTION`,
//! `MOVE`, `LEFT`, `RIGHT`, `REPORT` — and enforces one rule above all others:
//! it never falls off the table. Placements and moves that would leave the grid,
//! and any command issued before a valid placement, are absorbed silently.
//!
//! The [`robot`] module owns the state machine, [`controller`] dispatches typed
//! [`Command`]s onto it, and [`parser`] turns raw text lines into commands
//! (swallowing anything malformed). The companion binary wires these to files
//! or an interactive prompt.

pub mod controller;
pub mod geometry;
pub mod parser;
pub mod robot;

pub use controller::*;
pub use geometry::*;
pub use parser::*;
pub use robot::*;
