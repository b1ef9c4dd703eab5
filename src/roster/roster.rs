use super::*;
use std::collections::HashMap;
use std::hash::Hash;

/// Player identifier → [`Role`] mapping shared by every node in a tree.
///
/// Nodes only care about the roster's size: a resize resets their cached
/// values, while a same-size change (swapped roles, renamed players) is
/// invisible to them.
///
/// Deserializes from a plain map, e.g. `{"1": "user", "2": "agent"}`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
#[serde(bound(
    serialize = "P: serde::Serialize + Eq + Hash",
    deserialize = "P: serde::Deserialize<'de> + Eq + Hash"
))]
pub struct Roster<P>
where
    P: Eq + Hash,
{
    players: HashMap<P, Role>,
}

impl<P> Roster<P>
where
    P: Clone + Eq + Hash,
{
    /// Assign a role, returning the role it replaced.
    pub fn insert(&mut self, player: P, role: Role) -> Option<Role> {
        self.players.insert(player, role)
    }
    pub fn remove(&mut self, player: &P) -> Option<Role> {
        self.players.remove(player)
    }
    pub fn role(&self, player: &P) -> Option<Role> {
        self.players.get(player).copied()
    }
    pub fn is_player(&self, player: &P) -> bool {
        self.players.contains_key(player)
    }
    pub fn len(&self) -> usize {
        self.players.len()
    }
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
    /// All players, in no particular order.
    pub fn players(&self) -> impl Iterator<Item = &P> {
        self.players.keys()
    }
    /// Players the engine plays for.
    pub fn agents(&self) -> impl Iterator<Item = &P> {
        self.players
            .iter()
            .filter(|(_, role)| role.is_agent())
            .map(|(player, _)| player)
    }
}

impl<P> Default for Roster<P>
where
    P: Eq + Hash,
{
    fn default() -> Self {
        Self {
            players: HashMap::new(),
        }
    }
}

impl<P> FromIterator<(P, Role)> for Roster<P>
where
    P: Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = (P, Role)>>(iter: I) -> Self {
        Self {
            players: iter.into_iter().collect(),
        }
    }
}

impl<P, const N: usize> From<[(P, Role); N]> for Roster<P>
where
    P: Eq + Hash,
{
    fn from(players: [(P, Role); N]) -> Self {
        players.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_players() {
        let roster = Roster::from([(1, Role::User), (2, Role::Agent), (3, Role::User)]);
        assert_eq!(roster.len(), 3);
        assert!(roster.is_player(&2));
        assert!(!roster.is_player(&4));
        assert_eq!(roster.agents().collect::<Vec<_>>(), vec![&2]);
    }

    #[test]
    fn reassigning_role_keeps_size() {
        let mut roster = Roster::from([(1, Role::User), (2, Role::Agent)]);
        assert_eq!(roster.insert(1, Role::Agent), Some(Role::User));
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.role(&1), Some(Role::Agent));
    }

    #[test]
    fn loads_from_json() {
        let roster = serde_json::from_str::<Roster<String>>(r#"{"alice":"user","bot":"agent"}"#)
            .expect("valid roster");
        assert_eq!(roster.role(&"alice".to_string()), Some(Role::User));
        assert_eq!(roster.role(&"bot".to_string()), Some(Role::Agent));
        assert!(serde_json::from_str::<Roster<String>>(r#"{"x":"robot"}"#).is_err());
    }
}
