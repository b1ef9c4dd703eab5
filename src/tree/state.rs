use crate::*;
use std::fmt::Debug;
use std::hash::Hash;

/// A pending child: the action taken and the state it leads to.
///
/// Produced by [`State::branches`] and materialized by [`Tree::branch`]
/// as a [`Transition`] to a (possibly shared) destination [`Node`].
pub type Branch<S> = (<S as State>::Action, S);

/// A caller-defined game state.
///
/// The engine never inspects the game itself. It asks the state for its
/// identity, whose turn it is, whether play is over, what moves follow, and
/// how good it is for a given player when it ends up as a leaf.
///
/// # Required Methods
///
/// - `id()` — Identity of the node this state becomes; equal ids share a node
/// - `turn()` — The player who moves from this state
/// - `terminal()` — No legal continuation exists under the game rules
/// - `branches()` — Legal moves in discovery order (empty when terminal)
/// - `utility(player)` — Leaf score for `player`; higher is better
///
/// # Expansion
///
/// `expand` defaults to [`Tree::branch`]. Override it to control how a
/// node's transitions are discovered; an override must register
/// destinations with [`Tree::add`], connect them with [`Tree::connect`],
/// and finally call [`Node::mark_expanded`].
pub trait State: Sized {
    type Id: Clone + Eq + Hash + Debug;
    type Player: Clone + Eq + Hash + Debug;
    type Action: Clone + Debug;

    fn id(&self) -> Self::Id;
    fn turn(&self) -> Self::Player;
    fn terminal(&self) -> bool;
    fn branches(&self) -> Vec<Branch<Self>>;
    fn utility(&self, player: &Self::Player) -> Utility;

    fn expand(tree: &mut Tree<Self>, id: &Self::Id, depth: Depth) -> Result<(), Self> {
        tree.branch(id, depth)
    }
}
