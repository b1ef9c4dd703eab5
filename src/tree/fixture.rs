use crate::*;

/// Scripted state for engine tests: fixed id, mover, terminal flag, and
/// leaf scores. It generates no moves; tests wire transitions by hand.
#[derive(Debug, Clone)]
pub struct Stub {
    id: u32,
    turn: u8,
    terminal: bool,
    scores: Vec<(u8, Utility)>,
}

impl Stub {
    pub fn inner(id: u32, turn: u8) -> Self {
        Self {
            id,
            turn,
            terminal: false,
            scores: vec![],
        }
    }
    pub fn leaf(id: u32, turn: u8, scores: &[(u8, Utility)]) -> Self {
        Self {
            id,
            turn,
            terminal: false,
            scores: scores.to_vec(),
        }
    }
    pub fn over(id: u32, turn: u8, scores: &[(u8, Utility)]) -> Self {
        Self {
            terminal: true,
            ..Self::leaf(id, turn, scores)
        }
    }
}

impl State for Stub {
    type Id = u32;
    type Player = u8;
    type Action = &'static str;
    fn id(&self) -> Self::Id {
        self.id
    }
    fn turn(&self) -> Self::Player {
        self.turn
    }
    fn terminal(&self) -> bool {
        self.terminal
    }
    fn branches(&self) -> Vec<Branch<Self>> {
        vec![]
    }
    fn utility(&self, player: &Self::Player) -> Utility {
        self.scores
            .iter()
            .find(|(p, _)| p == player)
            .map(|(_, u)| *u)
            .unwrap_or(0.)
    }
}

/// Players 1 (user) and 2 (agent).
pub fn duel() -> Roster<u8> {
    Roster::from([(1, Role::User), (2, Role::Agent)])
}
