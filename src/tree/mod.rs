//! The search graph: registry, nodes, and transitions.
//!
//! - [`State`] — Caller-supplied game state (moves, terminal test, leaf score)
//! - [`Depth`] — How far an expansion may descend
//! - [`Transition`] — Immutable labeled edge between two registered nodes
//! - [`Node`] — One registered state plus its cached per-player results
//! - [`Tree`] — Identifier-keyed registry and the propagation step

mod depth;
#[cfg(test)]
mod fixture;
mod node;
mod state;
mod transition;
#[allow(clippy::module_inception)]
mod tree;

pub use depth::*;
pub use node::*;
pub use state::*;
pub use transition::*;
pub use tree::*;
