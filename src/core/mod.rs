//! Core Data Model
//!
//! Positions, problems, fixes and the offset/position mapping shared by
//! every rule. Nothing in here knows about LSP.

pub mod edit;
pub mod position;
pub mod problem;

pub use edit::{apply_fix, StringEditor};
pub use position::PositionIndex;
pub use problem::{EditBuilder, Fix, Position, Problem, Range};
