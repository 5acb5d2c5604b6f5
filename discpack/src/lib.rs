//! Entities and I/O for one-dimensional offline bin packing.
//!
//! Items with a size are assigned to bins of a fixed capacity. This crate models the
//! problem ([`entities::BPInstance`], [`entities::BPProblem`], [`entities::BPSolution`]) and
//! converts it from and to serializable representations; heuristics driving the placements live
//! in separate crates.

/// Entities to model the one-dimensional Bin Packing Problem
pub mod entities;

/// Importing problem instances into and exporting solutions out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
