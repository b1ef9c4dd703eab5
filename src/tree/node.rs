use crate::*;
use std::collections::HashMap;

/// One registered game state and its cached per-player results.
///
/// The value and best-move tables always hold exactly one entry per roster
/// player. An entry of `None` means "not computed", which is distinct from a
/// computed value of zero. Best moves are indices into this node's own
/// transitions, in discovery order.
///
/// Nodes never own other nodes. Destinations are reached by identifier
/// through the [`Tree`], which also performs every update.
pub struct Node<S: State> {
    id: S::Id,
    state: S,
    expanded: bool,
    values: HashMap<S::Player, Option<Utility>>,
    best: HashMap<S::Player, Option<usize>>,
    transitions: Vec<Transition<S>>,
    stamp: Option<Epoch>,
}

impl<S: State> Node<S> {
    /// Wraps a state, sized to the given roster.
    pub(crate) fn from(state: S, roster: &Roster<S::Player>) -> Self {
        let mut node = Self {
            id: state.id(),
            state,
            expanded: false,
            values: HashMap::new(),
            best: HashMap::new(),
            transitions: Vec::new(),
            stamp: None,
        };
        node.resync(roster);
        node
    }

    pub fn id(&self) -> &S::Id {
        &self.id
    }
    pub fn state(&self) -> &S {
        &self.state
    }
    pub fn expanded(&self) -> bool {
        self.expanded
    }
    pub fn terminal(&self) -> bool {
        self.state.terminal()
    }
    pub fn transitions(&self) -> &[Transition<S>] {
        &self.transitions
    }
    /// Epoch of the last update of this node, if any.
    pub fn stamp(&self) -> Option<Epoch> {
        self.stamp
    }
    /// Record that expansion has run. Custom [`State::expand`] overrides
    /// must call this once their transitions are in place.
    pub fn mark_expanded(&mut self) {
        self.expanded = true;
    }

    /// Snapshot of every tracked player's value.
    pub fn values(&self) -> &HashMap<S::Player, Option<Utility>> {
        &self.values
    }
    pub fn value(&self, player: &S::Player) -> Result<Utility, S> {
        self.values
            .get(player)
            .copied()
            .flatten()
            .ok_or_else(|| Error::Value {
                node: self.id.clone(),
                player: player.clone(),
            })
    }
    pub fn best_transition(&self, player: &S::Player) -> Result<&Transition<S>, S> {
        self.best
            .get(player)
            .copied()
            .flatten()
            .and_then(|index| self.transitions.get(index))
            .ok_or_else(|| Error::Move {
                node: self.id.clone(),
                player: player.clone(),
            })
    }
    /// Action of the best transition for `player`.
    pub fn best_move(&self, player: &S::Player) -> Result<&S::Action, S> {
        self.best_transition(player).map(|t| t.action())
    }

    /// Roster-change hook. If the roster size differs from the cached table
    /// size, every current player is reset to value zero and no best move.
    /// Same-size rosters leave the tables untouched.
    pub fn resync(&mut self, roster: &Roster<S::Player>) {
        if roster.len() != self.values.len() {
            self.values = roster.players().map(|p| (p.clone(), Some(0.))).collect();
            self.best = roster.players().map(|p| (p.clone(), None)).collect();
        }
    }

    /// Leaf scoring: ask the state for the utility of every tracked player.
    /// The table keeps its keys, so it never outgrows the roster it was
    /// last sized to.
    pub(crate) fn evaluate(&mut self, epoch: Epoch) {
        for (player, value) in self.values.iter_mut() {
            *value = Some(self.state.utility(player));
        }
        self.stamp = Some(epoch);
    }
    /// Install the tables computed by a propagation step.
    pub(crate) fn settle(
        &mut self,
        values: HashMap<S::Player, Option<Utility>>,
        best: HashMap<S::Player, Option<usize>>,
        epoch: Epoch,
    ) {
        self.values = values;
        self.best = best;
        self.stamp = Some(epoch);
    }
    /// Unset tables over the currently tracked players.
    pub(crate) fn cleared(
        &self,
    ) -> (
        HashMap<S::Player, Option<Utility>>,
        HashMap<S::Player, Option<usize>>,
    ) {
        (
            self.values.keys().map(|p| (p.clone(), None)).collect(),
            self.best.keys().map(|p| (p.clone(), None)).collect(),
        )
    }

    /// Take a new identifier. Outgoing transitions start here, so they
    /// follow; incoming ones are held by other nodes and do not.
    pub(crate) fn rename(&mut self, id: S::Id) {
        for transition in self.transitions.iter_mut() {
            transition.restart(id.clone());
        }
        self.id = id;
    }
    pub(crate) fn push(&mut self, transition: Transition<S>) {
        self.transitions.push(transition);
    }
    /// Remove one transition. Best moves pointing at it are cleared and
    /// later indices shift down with the list.
    pub(crate) fn remove(&mut self, index: usize) -> Option<Transition<S>> {
        if index >= self.transitions.len() {
            return None;
        }
        for best in self.best.values_mut() {
            *best = match *best {
                Some(i) if i == index => None,
                Some(i) if i > index => Some(i - 1),
                other => other,
            };
        }
        Some(self.transitions.remove(index))
    }
}

/// Nodes compare by identifier alone.
impl<S: State> PartialEq for Node<S> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl<S: State> Eq for Node<S> {}

impl<S: State> std::fmt::Debug for Node<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("expanded", &self.expanded)
            .field("values", &self.values)
            .field("transitions", &self.transitions.len())
            .finish()
    }
}
