use crate::*;

/// A directed, labeled move between two registered nodes.
///
/// Owned by its start node. The end is held by identifier and resolved
/// through the [`Tree`] at read time, so a destination shared by several
/// parents is stored once. Built only by [`Tree::connect`], which checks
/// that both endpoints are registered. Fields are read-only afterwards,
/// except that `start` follows a rename of the owning node.
pub struct Transition<S: State> {
    start: S::Id,
    end: S::Id,
    current: S::Player,
    next: S::Player,
    action: S::Action,
}

impl<S: State> Transition<S> {
    pub(crate) fn new(
        start: S::Id,
        end: S::Id,
        current: S::Player,
        next: S::Player,
        action: S::Action,
    ) -> Self {
        Self {
            start,
            end,
            current,
            next,
            action,
        }
    }
    /// Point at a renamed start node.
    pub(crate) fn restart(&mut self, start: S::Id) {
        self.start = start;
    }
    pub fn start(&self) -> &S::Id {
        &self.start
    }
    pub fn end(&self) -> &S::Id {
        &self.end
    }
    /// The player who chooses this move at the start node.
    pub fn current(&self) -> &S::Player {
        &self.current
    }
    /// The player to move at the end node.
    pub fn next(&self) -> &S::Player {
        &self.next
    }
    pub fn action(&self) -> &S::Action {
        &self.action
    }
}

impl<S: State> Clone for Transition<S> {
    fn clone(&self) -> Self {
        Self {
            start: self.start.clone(),
            end: self.end.clone(),
            current: self.current.clone(),
            next: self.next.clone(),
            action: self.action.clone(),
        }
    }
}

impl<S: State> std::fmt::Debug for Transition<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:?} --{:?}/{:?}--> {:?} ({:?})",
            self.start, self.action, self.current, self.end, self.next
        )
    }
}
