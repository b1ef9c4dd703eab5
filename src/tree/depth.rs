/// Expansion budget, in plies.
///
/// `Unbounded` expands until every reachable node is expanded. A negative
/// integer converts to `Unbounded`, so callers may keep the `-1` convention.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub enum Depth {
    #[default]
    Unbounded,
    Bounded(usize),
}

impl Depth {
    /// No further plies may be generated.
    pub fn exhausted(&self) -> bool {
        matches!(self, Self::Bounded(0))
    }
    /// A walk with this budget reaches at least as deep as one with `other`.
    pub fn covers(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Unbounded, _) => true,
            (Self::Bounded(_), Self::Unbounded) => false,
            (Self::Bounded(a), Self::Bounded(b)) => a >= b,
        }
    }
    /// Budget left for the children of a node expanded with this budget.
    pub fn deeper(self) -> Self {
        match self {
            Self::Unbounded => Self::Unbounded,
            Self::Bounded(n) => Self::Bounded(n.saturating_sub(1)),
        }
    }
}

impl From<usize> for Depth {
    fn from(plies: usize) -> Self {
        Self::Bounded(plies)
    }
}

impl From<i64> for Depth {
    fn from(plies: i64) -> Self {
        usize::try_from(plies)
            .map(Self::Bounded)
            .unwrap_or(Self::Unbounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_is_unbounded() {
        assert_eq!(Depth::from(-1i64), Depth::Unbounded);
        assert_eq!(Depth::from(3i64), Depth::Bounded(3));
    }

    #[test]
    fn counts_down_to_exhaustion() {
        let depth = Depth::from(1usize);
        assert!(!depth.exhausted());
        assert!(depth.deeper().exhausted());
        assert!(depth.deeper().deeper().exhausted());
        assert!(!Depth::Unbounded.deeper().exhausted());
    }

    #[test]
    fn unbounded_covers_everything() {
        assert!(Depth::Unbounded.covers(&Depth::Bounded(100)));
        assert!(Depth::Bounded(3).covers(&Depth::Bounded(2)));
        assert!(!Depth::Bounded(2).covers(&Depth::Bounded(3)));
        assert!(!Depth::Bounded(9).covers(&Depth::Unbounded));
    }
}
