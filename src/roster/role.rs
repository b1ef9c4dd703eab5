/// Who controls a player slot.
///
/// Roles are configuration only. Propagation computes values and best moves
/// for whichever player a transition names as mover, regardless of role, so
/// that `Agent` nodes see accurate replies from `User` opponents.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Human-controlled; the engine does not act on its recommendations.
    User,
    /// Computer-controlled; the engine plays its best move.
    Agent,
}

impl Role {
    pub fn is_agent(&self) -> bool {
        matches!(self, Self::Agent)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Agent => write!(f, "agent"),
        }
    }
}
