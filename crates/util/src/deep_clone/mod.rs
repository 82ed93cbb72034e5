//! Deep copying of arbitrary value graphs.
//!
//! [`clone`] walks a value graph and rebuilds it from fresh allocations,
//! consulting a per-call visited table so that reference cycles terminate
//! and shared sub-graphs stay shared in the output. Recursion cutoffs are
//! pluggable through [`ClonePolicy`].

mod clone;
mod policy;

pub use clone::{clone, clone_shallow, clone_with};
pub use policy::{ClonePolicy, Cutoff, Deep, Shallow, TagSet, TypeTag};
