//! Who plays, and who the engine plays for.
//!
//! - [`Role`] — `User` (human-controlled) or `Agent` (engine-controlled)
//! - [`Roster`] — player identifier → role, owned by the [`Tree`](crate::Tree)

mod role;
#[allow(clippy::module_inception)]
mod roster;

pub use role::*;
pub use roster::*;
