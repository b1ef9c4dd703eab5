use super::*;
use crate::*;

/// A Nim position: stones left, the player to move, and how many seats
/// rotate through the game. Players are numbered `0..players`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Nim {
    stones: u8,
    turn: u8,
    players: u8,
}

impl Nim {
    /// # Panics
    ///
    /// If `players` is zero.
    pub fn new(stones: u8, players: u8) -> Self {
        assert!(players > 0, "Nim needs at least one player");
        Self {
            stones,
            turn: 0,
            players,
        }
    }
    pub fn stones(&self) -> u8 {
        self.stones
    }
    pub fn players(&self) -> u8 {
        self.players
    }
    /// Every seat, with the engine playing for all of them.
    pub fn roster(&self) -> Roster<u8> {
        (0..self.players).map(|p| (p, Role::Agent)).collect()
    }
    /// The position after `take`, with the turn passed on.
    pub fn apply(&self, take: Take) -> Self {
        Self {
            stones: self.stones.saturating_sub(take.stones()),
            turn: (self.turn + 1) % self.players,
            players: self.players,
        }
    }
    /// Whoever took the last stone, once the pile is empty.
    pub fn winner(&self) -> Option<u8> {
        match self.stones {
            0 => {
                let seats = u16::from(self.players);
                let last = (u16::from(self.turn) + seats - 1) % seats;
                u8::try_from(last).ok()
            }
            _ => None,
        }
    }
}

impl Default for Nim {
    fn default() -> Self {
        Self::new(NIM_STONES, 2)
    }
}

impl State for Nim {
    type Id = (u8, u8);
    type Player = u8;
    type Action = Take;
    fn id(&self) -> Self::Id {
        (self.stones, self.turn)
    }
    fn turn(&self) -> Self::Player {
        self.turn
    }
    fn terminal(&self) -> bool {
        self.stones == 0
    }
    fn branches(&self) -> Vec<Branch<Self>> {
        Take::all(self.stones)
            .map(|take| (take, self.apply(take)))
            .collect()
    }
    /// Exact at the end of the game, neutral at a depth cutoff.
    fn utility(&self, player: &Self::Player) -> Utility {
        match self.winner() {
            Some(winner) if winner == *player => 1.,
            Some(_) => -1.,
            None => 0.,
        }
    }
}
