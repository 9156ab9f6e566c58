use crate::error::{NfgError, Result};
use crate::game::PlayerId;

use log::debug;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PlayerState {
    Frozen,
    Thawed,
}

/// Splits the players into frozen and thawed ones.
///
/// Each player carries a tag, and the thawed players are additionally cached
/// in ascending order since that list is walked on every enumeration step.
/// The cache is only touched when a player changes state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    states: Box<[PlayerState]>,
    thawed: Vec<PlayerId>,
}

impl Partition {
    pub fn all_thawed(num_players: usize) -> Partition {
        Partition {
            states: vec![PlayerState::Thawed; num_players].into_boxed_slice(),
            thawed: (0..num_players).collect(),
        }
    }

    pub fn num_players(&self) -> usize {
        self.states.len()
    }

    pub fn state(&self, player: PlayerId) -> PlayerState {
        self.states[player]
    }

    pub fn is_frozen(&self, player: PlayerId) -> bool {
        self.states.get(player) == Some(&PlayerState::Frozen)
    }

    /// Thawed players in ascending order.
    pub fn thawed(&self) -> &[PlayerId] {
        &self.thawed
    }

    /// Frozen players in ascending order.
    pub fn frozen<'a>(&'a self) -> impl Iterator<Item = PlayerId> + 'a {
        self.states
            .iter()
            .enumerate()
            .filter(|(_, &state)| state == PlayerState::Frozen)
            .map(|(player, _)| player)
    }

    pub fn num_frozen(&self) -> usize {
        self.states.len() - self.thawed.len()
    }

    /// Freezes exactly `players` and thaws everybody else. The partition is
    /// left untouched if any of the players does not exist.
    pub fn freeze_exactly(&mut self, players: &[PlayerId]) -> Result<()> {
        for &player in players {
            self.check_player(player)?;
        }
        for state in self.states.iter_mut() {
            *state = PlayerState::Thawed;
        }
        for &player in players {
            self.states[player] = PlayerState::Frozen;
        }
        self.thawed = (0..self.states.len())
            .filter(|&player| self.states[player] == PlayerState::Thawed)
            .collect();
        debug!("Thawed players are now {:?}", self.thawed);
        Ok(())
    }

    /// Freezes a single player. Returns false if it already was frozen.
    pub fn freeze(&mut self, player: PlayerId) -> Result<bool> {
        self.check_player(player)?;
        match self.thawed.binary_search(&player) {
            Ok(position) => {
                self.thawed.remove(position);
                self.states[player] = PlayerState::Frozen;
                debug!("Froze player {}", player);
                Ok(true)
            }
            Err(_) => Ok(false),
        }
    }

    /// Thaws a single player. Returns false if it already was thawed.
    pub fn thaw(&mut self, player: PlayerId) -> Result<bool> {
        self.check_player(player)?;
        match self.thawed.binary_search(&player) {
            Ok(_) => Ok(false),
            Err(position) => {
                self.thawed.insert(position, player);
                self.states[player] = PlayerState::Thawed;
                debug!("Thawed player {}", player);
                Ok(true)
            }
        }
    }

    fn check_player(&self, player: PlayerId) -> Result<()> {
        match player < self.states.len() {
            true => Ok(()),
            false => Err(NfgError::PlayerOutOfRange {
                player,
                num_players: self.states.len(),
            }),
        }
    }
}
