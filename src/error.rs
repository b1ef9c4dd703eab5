/// Failures surfaced by the [`Tree`](crate::Tree) registry.
///
/// `K` is the node identifier type and `P` the player identifier type of the
/// [`State`](crate::State) being searched. None of these are recovered
/// internally; roster size changes are never errors (they resync nodes).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error<K, P>
where
    K: std::fmt::Debug,
    P: std::fmt::Debug,
{
    /// No node is registered under this identifier.
    #[error("node {0:?} not found")]
    Node(K),
    /// The node tracks no value for this player, or the value is unset.
    #[error("no value for player {player:?} at node {node:?}")]
    Value { node: K, player: P },
    /// No best move has been computed for this player at this node.
    #[error("no best move for player {player:?} at node {node:?}")]
    Move { node: K, player: P },
    /// A transition endpoint does not name a registered node.
    #[error("transition endpoint {0:?} is not a node")]
    Endpoint(K),
    /// Renaming onto an identifier already held by a different node.
    #[error("identifier {0:?} already belongs to another node")]
    Occupied(K),
    /// The subgraph reachable from a root contains a cycle through this node.
    #[error("cycle through node {0:?}, no children-first order exists")]
    Cycle(K),
}

/// Shorthand for results keyed by a [`State`](crate::State)'s identifier types.
pub type Result<T, S> = std::result::Result<
    T,
    Error<<S as crate::State>::Id, <S as crate::State>::Player>,
>;
