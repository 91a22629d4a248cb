//! Layout model - constraint derivation, offsets and frame resolution
//!
//! - `geometry`: `Size` and `Rect` primitives
//! - `constraints`: the constraint set derived from the slot registry, plus
//!   the Center offset rule that drives slide transitions
//! - `solver`: resolves a constraint set into frames for given bounds

pub mod constraints;
pub mod geometry;
pub mod solver;

pub use constraints::{center_offset, Attribute, Constraint, ConstraintSet, Item};
pub use geometry::{Rect, Size};
pub use solver::{resolve_frames, Frames};
