use crate::error::{NfgError, Result};
use crate::game::{NormalFormGame, Outcome, OutcomeId, PlayerId, Strategy, StrategyId};
use crate::iter::{dump_numbers, Odometer, Partition};
use crate::profile::StrategyProfile;
use crate::support::StrategySupport;

use log::trace;
use std::fmt;

/// Enumerates the contingencies of a support while some players are held
/// fixed.
///
/// Only thawed players are advanced, in ascending player order with the last
/// thawed player as the least significant digit. Frozen players keep whatever
/// strategy was last assigned to them (initially their first supported
/// strategy). Any change of the partition restarts the traversal at the first
/// contingency of the thawed players, without touching the frozen ones.
///
/// Indices and outcomes always refer to the whole profile, frozen and thawed
/// players combined, so they address the same outcome table whatever the
/// partition is.
#[derive(Debug, Clone)]
pub struct PartitionedEnumerator {
    support: StrategySupport,
    ranks: Box<[usize]>,
    profile: StrategyProfile,
    partition: Partition,
}

impl PartitionedEnumerator {
    /// Every player starts thawed at its first supported strategy.
    pub fn new(support: StrategySupport) -> PartitionedEnumerator {
        let num_players = support.num_players();
        let mut enumerator = PartitionedEnumerator {
            ranks: vec![0; num_players].into_boxed_slice(),
            profile: StrategyProfile::from_shape(support.shape().clone()),
            partition: Partition::all_thawed(num_players),
            support,
        };
        enumerator.first();
        enumerator
    }

    /// Same as `new` followed by `freeze(players)`.
    pub fn with_frozen(support: StrategySupport, players: &[PlayerId]) -> Result<PartitionedEnumerator> {
        let mut enumerator = Self::new(support);
        enumerator.freeze(players)?;
        Ok(enumerator)
    }

    /// Resets every thawed player to its first supported strategy.
    pub fn first(&mut self) {
        for &player in self.partition.thawed() {
            self.ranks[player] = 0;
            self.profile.assign(player, self.support.strategy_at(player, 0));
        }
    }

    /// Freezes exactly `players`, thaws the others and restarts the traversal.
    pub fn freeze(&mut self, players: &[PlayerId]) -> Result<()> {
        self.partition.freeze_exactly(players)?;
        self.first();
        Ok(())
    }

    /// Freezes one more player. The traversal restarts only if the player was
    /// thawed.
    pub fn freeze_player(&mut self, player: PlayerId) -> Result<()> {
        if self.partition.freeze(player)? {
            self.first();
        }
        Ok(())
    }

    /// Thaws one player. The traversal restarts only if the player was frozen.
    pub fn thaw(&mut self, player: PlayerId) -> Result<()> {
        if self.partition.thaw(player)? {
            self.first();
        }
        Ok(())
    }

    /// Assigns the strategy at `rank` within the support to a frozen player.
    /// Assignments to thawed players are ignored and reported as `Ok(false)`.
    pub fn set_frozen_rank(&mut self, player: PlayerId, rank: usize) -> Result<bool> {
        self.support.shape().check_player(player)?;
        if !self.partition.is_frozen(player) {
            trace!("Ignoring assignment of rank {} to thawed player {}", rank, player);
            return Ok(false);
        }
        let strategy = self.support.checked_strategy_at(player, rank)?;
        self.ranks[player] = rank;
        self.profile.assign(player, strategy);
        Ok(true)
    }

    /// Assigns `strategy` to its owner, which must be frozen for the
    /// assignment to take effect. Assignments to thawed players are ignored
    /// like in `set_frozen_rank`, otherwise the strategy has to be in the
    /// support.
    pub fn set_frozen_strategy(&mut self, strategy: &Strategy) -> Result<bool> {
        let (player, number) = (strategy.player(), strategy.number());
        self.support.shape().check_player(player)?;
        if !self.partition.is_frozen(player) {
            trace!("Ignoring assignment of strategy {} to thawed player {}", number, player);
            return Ok(false);
        }
        self.support.shape().check_strategy(player, number)?;
        let rank = self
            .support
            .rank_of(player, number)
            .ok_or(NfgError::NotInSupport {
                player,
                strategy: number,
            })?;
        self.set_frozen_rank(player, rank)
    }

    /// Moves to the next contingency of the thawed players. Returns false once
    /// they are exhausted, at which point every thawed player is back at its
    /// first supported strategy. Always false when nobody is thawed.
    pub fn next_contingency(&mut self) -> bool {
        let support = &self.support;
        let ranks = &mut self.ranks;
        let profile = &mut self.profile;
        self.partition.thawed().iter().rev().any(|&player| {
            let rank = ranks[player] + 1;
            if rank < support.num_strategies(player) {
                ranks[player] = rank;
                profile.assign(player, support.strategy_at(player, rank));
                true
            } else {
                ranks[player] = 0;
                profile.assign(player, support.strategy_at(player, 0));
                false
            }
        })
    }

    pub fn support(&self) -> &StrategySupport {
        &self.support
    }

    pub fn partition(&self) -> &Partition {
        &self.partition
    }

    pub fn is_frozen(&self, player: PlayerId) -> bool {
        self.partition.is_frozen(player)
    }

    pub fn thawed(&self) -> &[PlayerId] {
        self.partition.thawed()
    }

    pub fn frozen<'a>(&'a self) -> impl Iterator<Item = PlayerId> + 'a {
        self.partition.frozen()
    }

    pub fn ranks(&self) -> &[usize] {
        &self.ranks
    }

    pub fn profile(&self) -> &StrategyProfile {
        &self.profile
    }

    pub fn numbers(&self) -> &[StrategyId] {
        self.profile.numbers()
    }

    pub fn index(&self) -> usize {
        self.profile.index()
    }

    pub fn outcome<'g>(&self, game: &'g NormalFormGame) -> Option<&'g Outcome> {
        game.outcome_of(&self.profile)
    }

    pub fn set_outcome(&self, game: &mut NormalFormGame, outcome: Option<OutcomeId>) -> Result<()> {
        game.set_outcome(&self.profile, outcome)
    }

    /// Current strategy numbers of all players, as `{ 0 2 1 }`.
    pub fn dump(&self) -> String {
        self.to_string()
    }
}

impl Odometer for PartitionedEnumerator {
    fn first(&mut self) {
        PartitionedEnumerator::first(self)
    }

    fn next_contingency(&mut self) -> bool {
        PartitionedEnumerator::next_contingency(self)
    }

    fn profile(&self) -> &StrategyProfile {
        &self.profile
    }
}

impl fmt::Display for PartitionedEnumerator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        dump_numbers(f, self.profile.numbers())
    }
}
