//! N-player subtraction Nim as a reference [`State`](crate::State).
//!
//! Players take turns removing 1 to [`NIM_MAX_TAKE`](crate::NIM_MAX_TAKE)
//! stones; whoever takes the last stone wins. Positions are identified by
//! (stones left, player to move), so lines of play that meet again share a
//! node. With two players the classical result holds: the mover loses
//! exactly when the pile is a multiple of four.
//!
//! - [`Take`] — Move: how many stones to remove
//! - [`Nim`] — Game state

mod game;
mod take;

pub use game::*;
pub use take::*;
