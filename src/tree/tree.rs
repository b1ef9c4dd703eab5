use crate::*;
use petgraph::graph::DiGraph;
use petgraph::graph::NodeIndex;
use std::collections::HashMap;

/// Identifier-keyed registry of [`Node`]s plus the player [`Roster`].
///
/// Every node lives here under exactly one identifier, equal to its own
/// [`Node::id`]. Transitions name their destinations by identifier, so a
/// state reachable along several lines of play is stored and scored once.
///
/// # Ordering
///
/// [`Tree::update`] reads the values already cached at each destination and
/// never recurses. Updating a parent before its children silently yields
/// stale or unset results. Either sequence updates bottom-up by hand, or use
/// [`Tree::propagate`], which updates a root's reachable subgraph in
/// [`Tree::schedule`] order. Every update stamps the node with a fresh
/// [`Epoch`], and [`Tree::stale`] reports nodes whose children moved on.
pub struct Tree<S: State> {
    nodes: HashMap<S::Id, Node<S>>,
    roster: Roster<S::Player>,
    epoch: Epoch,
}

impl<S: State> Tree<S> {
    pub fn new(roster: Roster<S::Player>) -> Self {
        Self {
            nodes: HashMap::new(),
            roster,
            epoch: 0,
        }
    }

    pub fn players(&self) -> &Roster<S::Player> {
        &self.roster
    }
    pub fn is_player(&self, player: &S::Player) -> bool {
        self.roster.is_player(player)
    }
    pub fn player_count(&self) -> usize {
        self.roster.len()
    }
    /// Replace the roster and run every node's resync hook.
    pub fn set_players(&mut self, roster: Roster<S::Player>) {
        self.roster = roster;
        for node in self.nodes.values_mut() {
            node.resync(&self.roster);
        }
        log::debug!(
            "roster now has {} players, resynced {} nodes",
            self.roster.len(),
            self.nodes.len()
        );
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
    /// How many updates this tree has performed.
    pub fn epoch(&self) -> Epoch {
        self.epoch
    }
    /// All registered nodes, in no particular order.
    pub fn nodes(&self) -> Vec<&Node<S>> {
        self.nodes.values().collect()
    }

    /// Register a state under its identifier, returning any node it displaced.
    pub fn add(&mut self, state: S) -> Option<Node<S>> {
        let node = Node::from(state, &self.roster);
        self.nodes.insert(node.id().clone(), node)
    }
    pub fn get_node(&self, id: &S::Id) -> Result<&Node<S>, S> {
        self.nodes.get(id).ok_or_else(|| Error::Node(id.clone()))
    }
    pub fn get_node_mut(&mut self, id: &S::Id) -> Result<&mut Node<S>, S> {
        self.nodes.get_mut(id).ok_or_else(|| Error::Node(id.clone()))
    }
    pub fn remove_node(&mut self, id: &S::Id) -> Option<Node<S>> {
        self.nodes.remove(id)
    }

    /// Give a node a new identifier. Transitions elsewhere that still name
    /// `old` no longer resolve to it.
    pub fn rename(&mut self, old: &S::Id, new: S::Id) -> Result<(), S> {
        if &new != old && self.nodes.contains_key(&new) {
            return Err(Error::Occupied(new));
        }
        self.get_node_mut(old)?.rename(new);
        self.reassign(old);
        Ok(())
    }
    /// Re-key the node found at `old` under its current identifier.
    fn reassign(&mut self, old: &S::Id) {
        if let Some(node) = self.remove_node(old) {
            self.nodes.insert(node.id().clone(), node);
        }
    }

    /// Append a transition to `start`. Both endpoints must be registered,
    /// otherwise nothing is created.
    pub fn connect(
        &mut self,
        start: &S::Id,
        end: &S::Id,
        current: S::Player,
        next: S::Player,
        action: S::Action,
    ) -> Result<(), S> {
        if !self.nodes.contains_key(end) {
            return Err(Error::Endpoint(end.clone()));
        }
        let transition = Transition::new(start.clone(), end.clone(), current, next, action);
        self.nodes
            .get_mut(start)
            .ok_or_else(|| Error::Endpoint(start.clone()))?
            .push(transition);
        Ok(())
    }
    /// Remove the `index`-th outgoing transition of `start`, if it exists.
    pub fn disconnect(&mut self, start: &S::Id, index: usize) -> Result<Option<Transition<S>>, S> {
        Ok(self.get_node_mut(start)?.remove(index))
    }

    /// Run the state's expansion for one node.
    pub fn expand(&mut self, id: &S::Id, depth: Depth) -> Result<(), S> {
        self.get_node(id)?;
        S::expand(self, id, depth)?;
        if !self.get_node(id)?.expanded() {
            log::warn!("expansion of {:?} returned without marking it expanded", id);
        }
        Ok(())
    }
    /// Default expansion: generate successors from [`State::branches`],
    /// reuse nodes already registered under a successor's identifier, and
    /// descend until `depth` runs out. The starting node is always expanded,
    /// so `Bounded(0)` and `Bounded(1)` both stop at its direct successors.
    /// Nodes expanded earlier keep their transitions; the walk only passes
    /// through them.
    pub fn branch(&mut self, id: &S::Id, depth: Depth) -> Result<(), S> {
        let root = id.clone();
        let mut seen = HashMap::<S::Id, Depth>::new();
        let mut stack = vec![(id.clone(), depth)];
        while let Some((id, depth)) = stack.pop() {
            if depth.exhausted() && id != root {
                continue;
            }
            if seen.get(&id).is_some_and(|done| done.covers(&depth)) {
                continue;
            }
            seen.insert(id.clone(), depth);
            let node = self.get_node(&id)?;
            if node.expanded() {
                let ends = node.transitions().iter().map(|t| (t.end().clone(), depth.deeper()));
                stack.extend(ends);
                continue;
            }
            let turn = node.state().turn();
            let branches = node.state().branches();
            let width = branches.len();
            for (action, child) in branches {
                let next = child.turn();
                let end = child.id();
                if !self.nodes.contains_key(&end) {
                    self.add(child);
                }
                self.connect(&id, &end, turn.clone(), next, action)?;
                stack.push((end, depth.deeper()));
            }
            self.get_node_mut(&id)?.mark_expanded();
            log::debug!("expanded {:?} into {} transitions", id, width);
        }
        Ok(())
    }

    /// Score a node directly from its state, for every player it tracks.
    pub fn update_values(&mut self, id: &S::Id) -> Result<(), S> {
        self.get_node(id)?;
        let epoch = self.tick();
        self.nodes
            .get_mut(id)
            .ok_or_else(|| Error::Node(id.clone()))?
            .evaluate(epoch);
        Ok(())
    }
    /// One negamax propagation step.
    ///
    /// Leaves (unexpanded or terminal) are scored by [`Tree::update_values`].
    /// Otherwise every tracked player starts unset, and each transition in
    /// discovery order offers its mover the negated value its destination
    /// holds for the next mover. Strictly greater offers replace the
    /// incumbent, so the first maximum wins ties.
    pub fn update(&mut self, id: &S::Id) -> Result<(), S> {
        let node = self.get_node(id)?;
        if !node.expanded() || node.terminal() {
            return self.update_values(id);
        }
        let (mut values, mut best) = node.cleared();
        for (index, transition) in node.transitions().iter().enumerate() {
            let end = self
                .get_node(transition.end())?
                .value(transition.next())?;
            let offer = -end;
            let mover = transition.current();
            let incumbent = values.get_mut(mover).ok_or_else(|| Error::Value {
                node: id.clone(),
                player: mover.clone(),
            })?;
            if incumbent.is_none_or(|value| offer > value) {
                *incumbent = Some(offer);
                best.insert(mover.clone(), Some(index));
            }
        }
        let epoch = self.tick();
        log::trace!("updated {:?} at epoch {}: {:?}", id, epoch, values);
        self.get_node_mut(id)?.settle(values, best, epoch);
        Ok(())
    }

    /// Whether a node's cached results may not reflect its children: it was
    /// never updated, or it is internal and some destination was never
    /// updated or was updated after it.
    pub fn stale(&self, id: &S::Id) -> Result<bool, S> {
        let node = self.get_node(id)?;
        let Some(stamp) = node.stamp() else {
            return Ok(true);
        };
        if !node.expanded() || node.terminal() {
            return Ok(false);
        }
        for transition in node.transitions() {
            match self.get_node(transition.end())?.stamp() {
                Some(child) if child < stamp => continue,
                _ => return Ok(true),
            }
        }
        Ok(false)
    }

    /// Identifiers reachable from `root`, children before parents.
    /// Leaves contribute no edges. Fails if the reachable graph has a cycle.
    pub fn schedule(&self, root: &S::Id) -> Result<Vec<S::Id>, S> {
        let mut graph = DiGraph::<S::Id, ()>::new();
        let mut index = HashMap::<S::Id, NodeIndex>::new();
        self.get_node(root)?;
        index.insert(root.clone(), graph.add_node(root.clone()));
        let mut stack = vec![root.clone()];
        while let Some(id) = stack.pop() {
            let node = self.get_node(&id)?;
            if !node.expanded() || node.terminal() {
                continue;
            }
            let from = index[&id];
            for transition in node.transitions() {
                let end = transition.end();
                let to = match index.get(end) {
                    Some(to) => *to,
                    None => {
                        self.get_node(end)?;
                        let to = graph.add_node(end.clone());
                        index.insert(end.clone(), to);
                        stack.push(end.clone());
                        to
                    }
                };
                graph.add_edge(from, to, ());
            }
        }
        let order = petgraph::algo::toposort(&graph, None)
            .map_err(|cycle| Error::Cycle(graph[cycle.node_id()].clone()))?;
        Ok(order.into_iter().rev().map(|i| graph[i].clone()).collect())
    }
    /// Update everything reachable from `root`, children first.
    pub fn propagate(&mut self, root: &S::Id) -> Result<(), S> {
        let order = self.schedule(root)?;
        for id in order.iter() {
            self.update(id)?;
        }
        log::info!("propagated {} nodes up to {:?}", order.len(), root);
        Ok(())
    }
    /// Expand `root` to `depth`, then propagate.
    pub fn search(&mut self, root: &S::Id, depth: Depth) -> Result<(), S> {
        self.expand(root, depth)?;
        self.propagate(root)
    }

    fn tick(&mut self) -> Epoch {
        self.epoch += 1;
        self.epoch
    }
}

impl<S: State> Default for Tree<S> {
    fn default() -> Self {
        Self::new(Roster::default())
    }
}
