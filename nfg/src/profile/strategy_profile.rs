use crate::error::{NfgError, Result};
use crate::game::{GameShape, NormalFormGame, PlayerId, Strategy, StrategyId};

use itertools::Itertools;
use std::fmt;
use std::sync::Arc;

/// One chosen strategy per player, i.e., a single contingency of the *full*
/// game. Any strategy of a player may be chosen; supports are the concern of
/// the enumerators that drive the profile.
///
/// The linear index of the contingency is cached and updated on every
/// assignment, so reading it is O(1).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StrategyProfile {
    shape: Arc<GameShape>,
    numbers: Box<[StrategyId]>,
    index: usize,
}

impl StrategyProfile {
    /// Creates a profile with every player at strategy 0.
    pub fn new(game: &NormalFormGame) -> StrategyProfile {
        Self::from_shape(game.shape().clone())
    }

    pub(crate) fn from_shape(shape: Arc<GameShape>) -> StrategyProfile {
        StrategyProfile {
            numbers: vec![0; shape.num_players()].into_boxed_slice(),
            index: 0,
            shape,
        }
    }

    /// Assigns `strategy` to `player`. The strategy must be one of that
    /// player's strategies.
    pub fn set(&mut self, player: PlayerId, strategy: &Strategy) -> Result<()> {
        self.shape.check_player(player)?;
        if strategy.player() != player {
            return Err(NfgError::InvalidAssignment {
                player,
                owner: strategy.player(),
                strategy: strategy.number(),
            });
        }
        self.set_number(player, strategy.number())
    }

    /// Assigns the strategy numbered `number` in the full strategy list of `player`.
    pub fn set_number(&mut self, player: PlayerId, number: StrategyId) -> Result<()> {
        self.shape.check_strategy(player, number)?;
        self.assign(player, number);
        Ok(())
    }

    /// Unchecked assignment for enumerators, which only ever hand in
    /// strategies taken from a support built for the same shape.
    pub(crate) fn assign(&mut self, player: PlayerId, number: StrategyId) {
        let offset = self.shape.offset(player);
        self.index = self.index - self.numbers[player] * offset + number * offset;
        self.numbers[player] = number;
    }

    /// Strategy number currently assigned to `player`. Panics if the player
    /// does not exist.
    pub fn get(&self, player: PlayerId) -> StrategyId {
        self.numbers[player]
    }

    /// Resolves the strategy of `player` to the game's strategy object.
    pub fn strategy<'g>(&self, game: &'g NormalFormGame, player: PlayerId) -> &'g Strategy {
        game.strategy(player, self.numbers[player])
    }

    /// Linear index of this contingency in the game's outcome table.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn numbers(&self) -> &[StrategyId] {
        &self.numbers
    }

    pub fn num_players(&self) -> usize {
        self.numbers.len()
    }

    pub fn shape(&self) -> &Arc<GameShape> {
        &self.shape
    }
}

impl fmt::Display for StrategyProfile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({})", self.numbers.iter().join(", "))
    }
}
