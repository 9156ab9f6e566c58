use log::{debug, info};
use nfg_lite::game::{NormalFormGame, PlayerId, StrategyId};
use nfg_lite::iter::{PartitionedEnumerator, SupportEnumerator};
use nfg_lite::{NfgError, StrategyProfile, StrategySupport};

const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Finds the pure strategy Nash equilibria of a game restricted to a support.
///
/// Every contingency of the support is visited once. For each of them, every
/// player gets a `PartitionedEnumerator` with all the other players frozen at
/// the contingency, which then sweeps over that player's unilateral deviations.
pub struct PureNashSolver<'a> {
    game: &'a NormalFormGame,
    support: StrategySupport,
    tolerance: f64,
}

impl<'a> PureNashSolver<'a> {
    /// Fails with `DimensionMismatch` if `support` was built for a game of
    /// other dimensions than `game`.
    pub fn new(
        game: &'a NormalFormGame,
        support: StrategySupport,
    ) -> Result<PureNashSolver<'a>, NfgError> {
        game.check_shape(support.shape())?;
        Ok(PureNashSolver {
            game,
            support,
            tolerance: DEFAULT_TOLERANCE,
        })
    }

    /// Deviations have to improve a payoff by more than `tolerance` to count.
    pub fn with_tolerance(mut self, tolerance: f64) -> PureNashSolver<'a> {
        self.tolerance = tolerance;
        self
    }

    /// Equilibria in the order the contingencies of the support are visited.
    pub fn solve(&self) -> Result<Vec<StrategyProfile>, NfgError> {
        let num_players = self.support.num_players();
        let mut deviations = (0..num_players)
            .map(|player| {
                let others = (0..num_players).filter(|&p| p != player).collect::<Vec<_>>();
                PartitionedEnumerator::with_frozen(self.support.clone(), &others)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut equilibria = Vec::new();
        let mut outer = SupportEnumerator::new(self.support.clone());
        let mut num_visited = 0;
        loop {
            num_visited += 1;
            let mut stable = true;
            for (player, deviation) in deviations.iter_mut().enumerate() {
                if !self.is_best_response(outer.profile(), outer.ranks(), player, deviation)? {
                    stable = false;
                    break;
                }
            }
            if stable {
                debug!("Found pure equilibrium {}", outer.profile());
                equilibria.push(outer.profile().clone());
            }
            if !outer.next_contingency() {
                break;
            }
        }
        info!(
            "Visited {} contingencies, found {} pure equilibria",
            num_visited,
            equilibria.len()
        );
        Ok(equilibria)
    }

    /// Strategies of `player` within the support that maximize its payoff
    /// while everybody else sticks to `profile`. The other players have to be
    /// playing supported strategies.
    pub fn best_responses(
        &self,
        profile: &StrategyProfile,
        player: PlayerId,
    ) -> Result<Vec<StrategyId>, NfgError> {
        let num_players = self.support.num_players();
        self.game.shape().check_player(player)?;
        self.game.check_shape(profile.shape())?;
        let others = (0..num_players).filter(|&p| p != player).collect::<Vec<_>>();
        let mut deviation = PartitionedEnumerator::with_frozen(self.support.clone(), &others)?;
        for &other in others.iter() {
            let strategy = profile.get(other);
            let rank = self
                .support
                .rank_of(other, strategy)
                .ok_or(NfgError::NotInSupport { player: other, strategy })?;
            deviation.set_frozen_rank(other, rank)?;
        }
        deviation.first();

        let mut best = Vec::new();
        let mut best_payoff = std::f64::NEG_INFINITY;
        loop {
            let payoff = self.game.payoff(deviation.profile(), player);
            if payoff > best_payoff + self.tolerance {
                best_payoff = payoff;
                best.clear();
            }
            if abs_diff_eq!(payoff, best_payoff, epsilon = self.tolerance) {
                best.push(deviation.profile().get(player));
            }
            if !deviation.next_contingency() {
                break;
            }
        }
        Ok(best)
    }

    // Sweeps over the deviations of `player` from the contingency at `ranks`.
    fn is_best_response(
        &self,
        profile: &StrategyProfile,
        ranks: &[usize],
        player: PlayerId,
        deviation: &mut PartitionedEnumerator,
    ) -> Result<bool, NfgError> {
        for (other, &rank) in ranks.iter().enumerate() {
            if other != player {
                deviation.set_frozen_rank(other, rank)?;
            }
        }
        deviation.first();

        let current = self.game.payoff(profile, player);
        loop {
            if self.game.payoff(deviation.profile(), player) > current + self.tolerance {
                return Ok(false);
            }
            if !deviation.next_contingency() {
                return Ok(true);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PureNashSolver;
    use crate::builder::NormalFormGameBuilder;
    use crate::strategic_form::test_fixtures::{Bimatrix, Coordination, PrisonersDilemma};
    use nfg_lite::game::NormalFormGame;
    use nfg_lite::{NfgError, StrategyProfile, StrategySupport};

    fn bimatrix(payoffs: Vec<Vec<(f64, f64)>>) -> NormalFormGame {
        let mut builder = NormalFormGameBuilder::new();
        let (game, _) = builder
            .make_game_and_annotations(&Bimatrix { payoffs }, false)
            .unwrap();
        game
    }

    fn numbers(equilibria: &[StrategyProfile]) -> Vec<Vec<usize>> {
        equilibria.iter().map(|p| p.numbers().to_vec()).collect()
    }

    #[test]
    fn prisoners_dilemma() {
        let _ = env_logger::try_init();
        let mut builder = NormalFormGameBuilder::new();
        let (game, _) = builder
            .make_game_and_annotations(&PrisonersDilemma, false)
            .unwrap();
        let solver = PureNashSolver::new(&game, StrategySupport::full(&game)).unwrap();
        assert_eq!(numbers(&solver.solve().unwrap()), vec![vec![1, 1]]);
    }

    #[test]
    fn matching_pennies() {
        let game = bimatrix(vec![
            vec![(1.0, -1.0), (-1.0, 1.0)],
            vec![(-1.0, 1.0), (1.0, -1.0)],
        ]);
        let solver = PureNashSolver::new(&game, StrategySupport::full(&game)).unwrap();
        assert!(solver.solve().unwrap().is_empty());
    }

    #[test]
    fn coordination() {
        let mut builder = NormalFormGameBuilder::new();
        let form = Coordination {
            num_players: 3,
            num_strategies: 2,
        };
        let (game, _) = builder.make_game_and_annotations(&form, false).unwrap();
        let solver = PureNashSolver::new(&game, StrategySupport::full(&game)).unwrap();
        assert_eq!(
            numbers(&solver.solve().unwrap()),
            vec![vec![0, 0, 0], vec![1, 1, 1]]
        );
    }

    #[test]
    fn restricted_support() {
        // Row 1 is dominant for the row player. Without it there is no
        // equilibrium unless the column player is held to column 0.
        let game = bimatrix(vec![
            vec![(1.0, 0.0), (0.0, 1.0)],
            vec![(2.0, 2.0), (3.0, 0.0)],
            vec![(0.0, 1.0), (1.0, 0.0)],
        ]);
        let full = PureNashSolver::new(&game, StrategySupport::full(&game)).unwrap();
        assert_eq!(numbers(&full.solve().unwrap()), vec![vec![1, 0]]);

        let support = StrategySupport::from_strategies(&game, vec![vec![0, 2], vec![0, 1]]).unwrap();
        let restricted = PureNashSolver::new(&game, support).unwrap();
        assert!(restricted.solve().unwrap().is_empty());

        let support = StrategySupport::from_strategies(&game, vec![vec![0, 2], vec![0]]).unwrap();
        let restricted = PureNashSolver::new(&game, support).unwrap();
        assert_eq!(numbers(&restricted.solve().unwrap()), vec![vec![0, 0]]);
    }

    #[test]
    fn best_responses() {
        let game = bimatrix(vec![
            vec![(1.0, 0.0), (0.0, 1.0)],
            vec![(1.0, 2.0), (3.0, 0.0)],
            vec![(0.5, 1.0), (3.0, 0.0)],
        ]);
        let solver = PureNashSolver::new(&game, StrategySupport::full(&game)).unwrap();
        let mut profile = StrategyProfile::new(&game);
        assert_eq!(solver.best_responses(&profile, 0).unwrap(), vec![0, 1]);
        profile.set_number(1, 1).unwrap();
        assert_eq!(solver.best_responses(&profile, 0).unwrap(), vec![1, 2]);
        profile.set_number(0, 1).unwrap();
        assert_eq!(solver.best_responses(&profile, 1).unwrap(), vec![0]);
        assert_eq!(
            solver.best_responses(&profile, 2),
            Err(NfgError::PlayerOutOfRange {
                player: 2,
                num_players: 2
            })
        );

        let other = bimatrix(vec![vec![(0.0, 0.0); 2]; 2]);
        assert_eq!(
            solver.best_responses(&StrategyProfile::new(&other), 0),
            Err(NfgError::DimensionMismatch {
                expected: vec![3, 2],
                found: vec![2, 2]
            })
        );

        let support = StrategySupport::from_strategies(&game, vec![vec![0], vec![0, 1]]).unwrap();
        let solver = PureNashSolver::new(&game, support).unwrap();
        assert_eq!(
            solver.best_responses(&profile, 1),
            Err(NfgError::NotInSupport {
                player: 0,
                strategy: 1
            })
        );
    }

    #[test]
    fn rejects_supports_of_other_games() {
        let mut builder = NormalFormGameBuilder::new();
        let (game, _) = builder
            .make_game_and_annotations(&PrisonersDilemma, false)
            .unwrap();
        let other = bimatrix(vec![vec![(0.0, 0.0); 3]; 2]);
        assert_eq!(
            PureNashSolver::new(&game, StrategySupport::full(&other)).err(),
            Some(NfgError::DimensionMismatch {
                expected: vec![2, 2],
                found: vec![2, 3]
            })
        );
    }

    #[test]
    fn tolerance() {
        let game = bimatrix(vec![vec![(1.0, 0.0)], vec![(1.0 + 1e-6, 0.0)]]);
        let strict = PureNashSolver::new(&game, StrategySupport::full(&game)).unwrap();
        assert_eq!(numbers(&strict.solve().unwrap()), vec![vec![1, 0]]);

        let loose = PureNashSolver::new(&game, StrategySupport::full(&game))
            .unwrap()
            .with_tolerance(1e-3);
        assert_eq!(
            numbers(&loose.solve().unwrap()),
            vec![vec![0, 0], vec![1, 0]]
        );
    }
}
