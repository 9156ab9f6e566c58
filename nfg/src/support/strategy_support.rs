use crate::error::{NfgError, Result};
use crate::game::{GameShape, NormalFormGame, PlayerId, StrategyId};

use itertools::Itertools;
use log::warn;
use std::fmt;
use std::sync::Arc;

/// A restriction of every player's strategies to a nonempty subset.
///
/// The strategies of each player are kept in ascending order of strategy
/// number, and the position of a strategy in that list is its *rank*. Ranks
/// are what enumerators advance; strategy numbers are what profiles store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategySupport {
    shape: Arc<GameShape>,
    strategies: Vec<Vec<StrategyId>>,
}

impl StrategySupport {
    /// The support containing every strategy of every player.
    pub fn full(game: &NormalFormGame) -> StrategySupport {
        let shape = game.shape().clone();
        let strategies = (0..shape.num_players())
            .map(|player| (0..shape.num_strategies(player)).collect())
            .collect();
        StrategySupport { shape, strategies }
    }

    /// Builds a support from one list of strategy numbers per player. Lists
    /// may be given in any order and may contain duplicates.
    pub fn from_strategies(
        game: &NormalFormGame,
        mut strategies: Vec<Vec<StrategyId>>,
    ) -> Result<StrategySupport> {
        let shape = game.shape().clone();
        if strategies.len() != shape.num_players() {
            return Err(NfgError::LengthMismatch {
                expected: shape.num_players(),
                found: strategies.len(),
            });
        }
        for (player, list) in strategies.iter_mut().enumerate() {
            if list.is_empty() {
                return Err(NfgError::EmptySupport { player });
            }
            for &strategy in list.iter() {
                shape.check_strategy(player, strategy)?;
            }
            list.sort_unstable();
            list.dedup();
        }
        Ok(StrategySupport { shape, strategies })
    }

    pub fn shape(&self) -> &Arc<GameShape> {
        &self.shape
    }

    pub fn num_players(&self) -> usize {
        self.strategies.len()
    }

    /// Number of supported strategies of `player`. Panics if the player does not exist.
    pub fn num_strategies(&self, player: PlayerId) -> usize {
        self.strategies[player].len()
    }

    pub fn strategies(&self, player: PlayerId) -> &[StrategyId] {
        &self.strategies[player]
    }

    /// Strategy number at `rank` within the support of `player`. Panics when
    /// out of range; see `checked_strategy_at` for the fallible version.
    pub fn strategy_at(&self, player: PlayerId, rank: usize) -> StrategyId {
        self.strategies[player][rank]
    }

    pub fn checked_strategy_at(&self, player: PlayerId, rank: usize) -> Result<StrategyId> {
        self.shape.check_player(player)?;
        self.strategies[player]
            .get(rank)
            .cloned()
            .ok_or(NfgError::RankOutOfRange {
                player,
                rank,
                supported: self.strategies[player].len(),
            })
    }

    /// Rank of strategy `strategy` of `player`, or `None` if unsupported.
    pub fn rank_of(&self, player: PlayerId, strategy: StrategyId) -> Option<usize> {
        self.strategies
            .get(player)
            .and_then(|list| list.binary_search(&strategy).ok())
    }

    pub fn contains(&self, player: PlayerId, strategy: StrategyId) -> bool {
        self.rank_of(player, strategy).is_some()
    }

    /// Adds a strategy. Returns false if it was already supported.
    pub fn add_strategy(&mut self, player: PlayerId, strategy: StrategyId) -> Result<bool> {
        self.shape.check_strategy(player, strategy)?;
        let list = &mut self.strategies[player];
        match list.binary_search(&strategy) {
            Ok(_) => Ok(false),
            Err(position) => {
                list.insert(position, strategy);
                Ok(true)
            }
        }
    }

    /// Removes a strategy. Returns false if it was not supported. Removing the
    /// last supported strategy of a player fails.
    pub fn remove_strategy(&mut self, player: PlayerId, strategy: StrategyId) -> Result<bool> {
        self.shape.check_strategy(player, strategy)?;
        let list = &mut self.strategies[player];
        match list.binary_search(&strategy) {
            Ok(_) if list.len() == 1 => Err(NfgError::EmptySupport { player }),
            Ok(position) => {
                list.remove(position);
                Ok(true)
            }
            Err(_) => Ok(false),
        }
    }

    /// Number of contingencies reachable within the support.
    pub fn num_contingencies(&self) -> usize {
        self.strategies.iter().map(|list| list.len()).product()
    }

    /// True if both supports belong to games of the same dimensions and every
    /// strategy supported here is also supported by `other`.
    pub fn is_subset_of(&self, other: &StrategySupport) -> bool {
        if self.shape != other.shape {
            warn!(
                "Comparing supports of games with dimensions {:?} and {:?}",
                self.shape.dimensions(),
                other.shape.dimensions()
            );
            return false;
        }
        self.strategies
            .iter()
            .zip(other.strategies.iter())
            .all(|(mine, theirs)| mine.iter().all(|s| theirs.binary_search(s).is_ok()))
    }
}

impl fmt::Display for StrategySupport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            self.strategies
                .iter()
                .map(|list| format!("{{ {} }}", list.iter().join(" ")))
                .join(" ")
        )
    }
}
