//! Pattern and placement board.
//!
//! Both are plain sequences indexed by slot. Layout on screen is a
//! presentation concern; `BoardGeometry` maps indices to grid cells.

pub mod pattern;
pub mod placement;

pub use pattern::Pattern;
pub use placement::PlacementBoard;
