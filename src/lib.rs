//! Generalized N-player negamax value propagation.
//!
//! A caller models a turn-based game by implementing [`State`]. The
//! [`Tree`] registry owns every [`Node`] by identifier together with the
//! player [`Roster`], and propagates per-player values and best moves from
//! leaves up to their ancestors.
//!
//! # Module Structure
//!
//! - `roster` — Player roles and the roster shared by every node
//! - `tree` — Registry, nodes, transitions, and the propagation step
//! - `error` — Failure taxonomy for lookups and graph construction
//! - `nim` — N-player subtraction Nim reference implementation
//!
//! # Ordering
//!
//! [`Tree::update`] reads values already cached at a node's destinations.
//! Callers either update children before parents themselves, or hand a root
//! to [`Tree::propagate`], which schedules the reachable subgraph
//! children-first.

mod error;
mod nim;
mod roster;
mod tree;

pub use error::*;
pub use nim::*;
pub use roster::*;
pub use tree::*;

/// Node values, from the perspective of a single player.
pub type Utility = f32;
/// Monotone counter stamped on nodes each time they are updated.
pub type Epoch = u64;

// ============================================================================
// SEARCH PARAMETERS
// ============================================================================
/// Ply limit used by the benchmarks and the Nim examples.
pub const DEFAULT_DEPTH: usize = 8;
/// Stones on the table at the start of a default Nim game.
pub const NIM_STONES: u8 = 12;
/// Largest number of stones a Nim player may take in one move.
pub const NIM_MAX_TAKE: u8 = 3;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Environment variable holding the log level for [`log`].
pub const LOG_LEVEL_VAR: &str = "NEGAMAX_LOG";

/// Initialize terminal logging.
/// Level comes from `NEGAMAX_LOG` (e.g. "debug", "trace"), INFO otherwise.
#[cfg(feature = "logging")]
pub fn log() -> anyhow::Result<()> {
    let level = std::env::var(LOG_LEVEL_VAR)
        .ok()
        .map(|s| s.parse::<log::LevelFilter>())
        .transpose()
        .map_err(|e| anyhow::anyhow!("invalid {}: {}", LOG_LEVEL_VAR, e))?
        .unwrap_or(log::LevelFilter::Info);
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .map_err(|e| anyhow::anyhow!("initialize logger: {}", e))
}
