use crate::error::{NfgError, Result};
use crate::game::{NormalFormGame, Outcome, OutcomeId, PlayerId, StrategyId};
use crate::iter::{dump_numbers, Odometer, PartitionedEnumerator};
use crate::profile::StrategyProfile;
use crate::support::StrategySupport;

use std::fmt;

/// Enumerates the contingencies reachable with the strategies of a support.
///
/// The enumerator keeps one rank per player and a live `StrategyProfile`
/// holding the corresponding strategy numbers. `advance` steps a single
/// digit, and `next_contingency` steps the whole odometer with the last
/// player as the least significant digit.
#[derive(Debug, Clone)]
pub struct SupportEnumerator {
    support: StrategySupport,
    ranks: Box<[usize]>,
    profile: StrategyProfile,
}

impl SupportEnumerator {
    /// Starts at the first supported strategy of every player.
    pub fn new(support: StrategySupport) -> SupportEnumerator {
        let mut enumerator = SupportEnumerator {
            ranks: vec![0; support.num_players()].into_boxed_slice(),
            profile: StrategyProfile::from_shape(support.shape().clone()),
            support,
        };
        enumerator.first();
        enumerator
    }

    /// Enumerates every contingency of `game`.
    pub fn full(game: &NormalFormGame) -> SupportEnumerator {
        Self::new(StrategySupport::full(game))
    }

    pub fn first(&mut self) {
        for player in 0..self.ranks.len() {
            self.ranks[player] = 0;
            self.profile.assign(player, self.support.strategy_at(player, 0));
        }
    }

    /// Moves `player` to its next supported strategy. If the player was at its
    /// last supported strategy it wraps around to the first one and false is
    /// returned; the caller then carries into another player.
    /// Panics if the player does not exist.
    pub fn advance(&mut self, player: PlayerId) -> bool {
        let rank = self.ranks[player] + 1;
        if rank < self.support.num_strategies(player) {
            self.ranks[player] = rank;
            self.profile.assign(player, self.support.strategy_at(player, rank));
            true
        } else {
            self.ranks[player] = 0;
            self.profile.assign(player, self.support.strategy_at(player, 0));
            false
        }
    }

    /// Moves to the next contingency. Returns false, with every player back at
    /// rank 0, once all contingencies of the support have been visited.
    pub fn next_contingency(&mut self) -> bool {
        (0..self.ranks.len())
            .rev()
            .any(|player| self.advance(player))
    }

    /// Jumps `player` to the strategy at `rank` within its support. Nothing is
    /// changed on failure.
    pub fn set_rank(&mut self, player: PlayerId, rank: usize) -> Result<()> {
        let strategy = self.support.checked_strategy_at(player, rank)?;
        self.ranks[player] = rank;
        self.profile.assign(player, strategy);
        Ok(())
    }

    /// Jumps every player at once. All ranks are validated before anything
    /// is changed.
    pub fn set_ranks(&mut self, ranks: &[usize]) -> Result<()> {
        if ranks.len() != self.ranks.len() {
            return Err(NfgError::LengthMismatch {
                expected: self.ranks.len(),
                found: ranks.len(),
            });
        }
        let strategies = ranks
            .iter()
            .enumerate()
            .map(|(player, &rank)| self.support.checked_strategy_at(player, rank))
            .collect::<Result<Vec<StrategyId>>>()?;
        for (player, strategy) in strategies.into_iter().enumerate() {
            self.ranks[player] = ranks[player];
            self.profile.assign(player, strategy);
        }
        Ok(())
    }

    pub fn support(&self) -> &StrategySupport {
        &self.support
    }

    pub fn ranks(&self) -> &[usize] {
        &self.ranks
    }

    pub fn profile(&self) -> &StrategyProfile {
        &self.profile
    }

    /// Strategy numbers (in the full game) of the current contingency.
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
}

impl Odometer for SupportEnumerator {
    fn first(&mut self) {
        SupportEnumerator::first(self)
    }

    fn next_contingency(&mut self) -> bool {
        SupportEnumerator::next_contingency(self)
    }

    fn profile(&self) -> &StrategyProfile {
        &self.profile
    }
}

/// Continues from the current position of a partitioned enumerator, with
/// every player free to move.
impl From<&PartitionedEnumerator> for SupportEnumerator {
    fn from(enumerator: &PartitionedEnumerator) -> SupportEnumerator {
        SupportEnumerator {
            support: enumerator.support().clone(),
            ranks: enumerator.ranks().to_vec().into_boxed_slice(),
            profile: enumerator.profile().clone(),
        }
    }
}

impl fmt::Display for SupportEnumerator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        dump_numbers(f, self.profile.numbers())
    }
}

#[cfg(test)]
mod tests {
    use super::SupportEnumerator;
    use crate::error::NfgError;
    use crate::game::test_fixtures::{PRISONERS_DILEMMA, THREE_BY_TWO, TWO_THREE_TWO};
    use crate::game::NormalFormGame;
    use crate::iter::Odometer;
    use crate::support::StrategySupport;
    use assert_approx_eq::assert_approx_eq;
    use std::collections::BTreeSet;

    #[test]
    fn starts_at_first_supported_contingency() {
        let support =
            StrategySupport::from_strategies(&TWO_THREE_TWO, vec![vec![1], vec![2, 0], vec![1]])
                .unwrap();
        let enumerator = SupportEnumerator::new(support);
        assert_eq!(enumerator.ranks(), &[0, 0, 0]);
        assert_eq!(enumerator.numbers(), &[1, 0, 1]);
        assert_eq!(enumerator.index(), TWO_THREE_TWO.shape().index_of(&[1, 0, 1]));
    }

    #[test]
    fn advance_wraps() {
        let mut enumerator = SupportEnumerator::full(&THREE_BY_TWO);
        assert!(enumerator.advance(0));
        assert!(enumerator.advance(0));
        assert_eq!(enumerator.numbers(), &[2, 0]);
        assert!(!enumerator.advance(0));
        assert_eq!(enumerator.numbers(), &[0, 0]);
        assert_eq!(enumerator.ranks(), &[0, 0]);
    }

    #[test]
    fn single_digit_sweep_is_a_bijection() {
        let support =
            StrategySupport::from_strategies(&TWO_THREE_TWO, vec![vec![0, 1], vec![0, 2], vec![1]])
                .unwrap();
        let expected = support.num_contingencies();
        let mut enumerator = SupportEnumerator::new(support);
        let start = enumerator.profile().clone();

        // Manual odometer sweep with player 0 as the least significant digit.
        let mut seen = BTreeSet::new();
        loop {
            assert!(seen.insert(enumerator.ranks().to_vec()));
            let mut player = 0;
            while player < 3 && !enumerator.advance(player) {
                player += 1;
            }
            if player == 3 {
                break;
            }
        }
        assert_eq!(seen.len(), expected);
        assert_eq!(seen.len(), 4);
        assert_eq!(enumerator.profile(), &start);
    }

    #[test]
    fn three_by_two_order() {
        let mut enumerator = SupportEnumerator::full(&THREE_BY_TWO);
        let visited = enumerator
            .contingencies()
            .map(|profile| (profile.numbers().to_vec(), profile.index()))
            .collect::<Vec<_>>();
        assert_eq!(
            visited,
            vec![
                (vec![0, 0], 0),
                (vec![0, 1], 3),
                (vec![1, 0], 1),
                (vec![1, 1], 4),
                (vec![2, 0], 2),
                (vec![2, 1], 5),
            ]
        );
        // Exhaustion leaves the enumerator at the first contingency.
        assert_eq!(enumerator.numbers(), &[0, 0]);
        assert!(enumerator.next_contingency());
    }

    #[test]
    fn restricted_support_keeps_full_radices() {
        // Player 0 only uses strategy 2, player 1 both strategies. The indices
        // must still be computed with 3 as the radix of player 0.
        let support =
            StrategySupport::from_strategies(&THREE_BY_TWO, vec![vec![2], vec![0, 1]]).unwrap();
        let mut enumerator = SupportEnumerator::new(support);
        let indices = enumerator
            .contingencies()
            .map(|profile| profile.index())
            .collect::<Vec<usize>>();
        assert_eq!(indices, vec![2, 5]);
    }

    #[test]
    fn set_rank_and_set_ranks() {
        let support =
            StrategySupport::from_strategies(&THREE_BY_TWO, vec![vec![0, 2], vec![0, 1]]).unwrap();
        let mut enumerator = SupportEnumerator::new(support);

        enumerator.set_rank(0, 1).unwrap();
        assert_eq!(enumerator.numbers(), &[2, 0]);
        assert_eq!(
            enumerator.set_rank(0, 2),
            Err(NfgError::RankOutOfRange {
                player: 0,
                rank: 2,
                supported: 2
            })
        );
        assert_eq!(
            enumerator.set_rank(2, 0),
            Err(NfgError::PlayerOutOfRange {
                player: 2,
                num_players: 2
            })
        );
        assert_eq!(enumerator.numbers(), &[2, 0]);

        enumerator.set_ranks(&[0, 1]).unwrap();
        assert_eq!(enumerator.numbers(), &[0, 1]);
        assert_eq!(enumerator.ranks(), &[0, 1]);
        assert!(enumerator.set_ranks(&[1, 2]).is_err());
        assert!(enumerator.set_ranks(&[1]).is_err());
        assert_eq!(enumerator.numbers(), &[0, 1]);
        assert_eq!(enumerator.index(), 3);
    }

    #[test]
    fn outcomes() {
        let mut game = NormalFormGame::new("2x2", &[2, 2]).unwrap();
        let mut enumerator = SupportEnumerator::full(&game);
        loop {
            let payoff = enumerator.index() as f64;
            let outcome = game.new_outcome("", vec![payoff, -payoff]).unwrap();
            enumerator.set_outcome(&mut game, Some(outcome)).unwrap();
            if !enumerator.next_contingency() {
                break;
            }
        }
        for index in 0..4 {
            assert_approx_eq!(game.payoff_at(index, 0), index as f64);
        }

        let mut enumerator = SupportEnumerator::full(&PRISONERS_DILEMMA);
        enumerator.set_ranks(&[1, 1]).unwrap();
        assert_approx_eq!(enumerator.outcome(&PRISONERS_DILEMMA).unwrap().payoff(0), 1.0);
    }

    #[test]
    fn dump() {
        let mut enumerator = SupportEnumerator::full(&TWO_THREE_TWO);
        enumerator.set_ranks(&[1, 2, 0]).unwrap();
        assert_eq!(enumerator.to_string(), "{ 1 2 0 }");
    }
}
