use crate::builder::{BuilderError, GameAnnotations};
use crate::strategic_form::StrategicForm;

use itertools::{sorted, Itertools};
use log::{debug, info};
use nfg_lite::game::NormalFormGame;
use nfg_lite::iter::SupportEnumerator;

/// Builder for a normal form game. It collects the strategies of every player
/// of a `StrategicForm`, numbers them, then sweeps over every contingency to
/// fill in the outcome table of a `NormalFormGame`.
pub struct NormalFormGameBuilder<T: StrategicForm> {
    title: String,

    // Sorted and deduplicated strategies, indexed by player then strategy number.
    strategies: Vec<Vec<T::Strategy>>,
}

impl<T> NormalFormGameBuilder<T>
where
    T: StrategicForm,
{
    pub fn new() -> NormalFormGameBuilder<T> {
        NormalFormGameBuilder {
            title: String::new(),
            strategies: Vec::new(),
        }
    }

    pub fn with_title(title: &str) -> NormalFormGameBuilder<T> {
        NormalFormGameBuilder {
            title: title.to_string(),
            strategies: Vec::new(),
        }
    }

    /// Creates a `NormalFormGame` from `form`. The strategies of each player
    /// are numbered in increasing order of `StrategicForm::Strategy`, with
    /// duplicates removed. Every contingency gets an outcome of its own,
    /// labelled after the strategies involved.
    pub fn make_game_and_annotations(
        &mut self,
        form: &T,
        include_annotations: bool,
    ) -> Result<(NormalFormGame, Option<GameAnnotations<T>>), BuilderError> {
        self.collect_strategies(form);
        let players = self
            .strategies
            .iter()
            .enumerate()
            .map(|(player, strategies)| {
                (
                    form.player_label(player),
                    strategies.iter().map(|s| format!("{:?}", s)).collect(),
                )
            })
            .collect();
        let mut game = NormalFormGame::with_labels(&self.title, players)?;
        info!(
            "Building game with dimensions {:?}, {} contingencies",
            game.shape().dimensions(),
            game.num_contingencies()
        );

        let mut enumerator = SupportEnumerator::full(&game);
        loop {
            let contingency = enumerator
                .numbers()
                .iter()
                .enumerate()
                .map(|(player, &number)| self.strategies[player][number].clone())
                .collect::<Vec<T::Strategy>>();
            let payoffs = form.payoffs(&contingency);
            if payoffs.len() != game.num_players() {
                return Err(BuilderError::PayoffLengthMismatch {
                    contingency: format!("{:?}", contingency),
                    expected: game.num_players(),
                    found: payoffs.len(),
                });
            }
            debug!("Contingency {:?} has payoffs {:?}", contingency, payoffs);

            let label = contingency.iter().map(|s| format!("{:?}", s)).join(",");
            let outcome = game.new_outcome(&label, payoffs.to_vec())?;
            enumerator.set_outcome(&mut game, Some(outcome))?;
            if !enumerator.next_contingency() {
                break;
            }
        }

        let annotations = match include_annotations {
            true => Some(GameAnnotations::new(self.strategies.clone())),
            false => None,
        };
        Ok((game, annotations))
    }

    fn collect_strategies(&mut self, form: &T) {
        self.strategies = (0..form.num_players())
            .map(|player| {
                sorted(form.strategies(player).iter().cloned())
                    .dedup()
                    .collect()
            })
            .collect();
        for (player, strategies) in self.strategies.iter().enumerate() {
            debug!("Player {} has strategies {:?}", player, strategies);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::NormalFormGameBuilder;
    use crate::builder::BuilderError;
    use crate::strategic_form::test_fixtures::{
        Bimatrix, Coordination, Move, PrisonersDilemma,
    };
    use crate::strategic_form::StrategicForm;
    use assert_approx_eq::assert_approx_eq;
    use nfg_lite::game::PlayerId;
    use nfg_lite::iter::{Odometer, SupportEnumerator};
    use nfg_lite::{NfgError, StrategyProfile};

    #[test]
    fn prisoners_dilemma() {
        let _ = env_logger::try_init();
        let mut builder = NormalFormGameBuilder::with_title("Prisoner's dilemma");
        let (game, annotations) = builder
            .make_game_and_annotations(&PrisonersDilemma, true)
            .unwrap();
        let annotations = annotations.unwrap();

        assert_eq!(game.title(), "Prisoner's dilemma");
        assert_eq!(game.shape().dimensions(), &[2, 2]);
        assert_eq!(game.player(1).label(), "Column");
        assert_eq!(game.strategy(0, 0).label(), "Cooperate");
        assert_eq!(game.strategy(0, 1).label(), "Defect");
        assert_eq!(game.num_outcomes(), 4);

        assert_eq!(annotations.strategy(1, 1), &Move::Defect);
        assert_eq!(annotations.number_of(0, &Move::Cooperate), Some(0));
        assert_eq!(annotations.number_of(2, &Move::Cooperate), None);

        let mut profile = StrategyProfile::new(&game);
        profile.set_number(0, 1).unwrap();
        assert_eq!(
            annotations.contingency(&profile),
            vec![Move::Defect, Move::Cooperate]
        );
        assert_approx_eq!(game.payoff(&profile, 0), 5.0);
        assert_approx_eq!(game.payoff(&profile, 1), 0.0);
        assert_eq!(game.outcome_of(&profile).unwrap().label(), "Defect,Cooperate");
    }

    #[test]
    fn every_contingency_gets_an_outcome() {
        let form = Coordination {
            num_players: 3,
            num_strategies: 3,
        };
        let mut builder = NormalFormGameBuilder::new();
        let (game, annotations) = builder.make_game_and_annotations(&form, false).unwrap();
        assert!(annotations.is_none());
        assert_eq!(game.num_outcomes(), 27);

        let mut enumerator = SupportEnumerator::full(&game);
        for profile in enumerator.contingencies() {
            let numbers = profile.numbers();
            let expected = if numbers.iter().all(|&n| n == numbers[0]) {
                1.0
            } else {
                0.0
            };
            for player in 0..3 {
                assert_approx_eq!(game.payoff(&profile, player), expected);
            }
        }
    }

    #[test]
    fn bimatrix() {
        let form = Bimatrix {
            payoffs: vec![vec![(1.0, -1.0), (2.0, -2.0)], vec![(3.0, -3.0), (4.0, -4.0)]],
        };
        let mut builder = NormalFormGameBuilder::new();
        let (game, _) = builder.make_game_and_annotations(&form, false).unwrap();
        // Player 0 is the least significant digit of the index.
        assert_approx_eq!(game.payoff_at(0, 0), 1.0);
        assert_approx_eq!(game.payoff_at(1, 0), 3.0);
        assert_approx_eq!(game.payoff_at(2, 0), 2.0);
        assert_approx_eq!(game.payoff_at(3, 1), -4.0);
        assert!(game.is_constant_sum());
    }

    struct Broken;

    impl StrategicForm for Broken {
        type Strategy = u8;

        fn num_players(&self) -> usize {
            2
        }

        fn strategies(&self, _player: PlayerId) -> Box<[u8]> {
            vec![0, 1].into_boxed_slice()
        }

        fn payoffs(&self, _contingency: &[u8]) -> Box<[f64]> {
            vec![0.0].into_boxed_slice()
        }
    }

    struct Silent;

    impl StrategicForm for Silent {
        type Strategy = u8;

        fn num_players(&self) -> usize {
            2
        }

        fn strategies(&self, player: PlayerId) -> Box<[u8]> {
            match player {
                0 => vec![0].into_boxed_slice(),
                _ => Vec::new().into_boxed_slice(),
            }
        }

        fn payoffs(&self, _contingency: &[u8]) -> Box<[f64]> {
            vec![0.0, 0.0].into_boxed_slice()
        }
    }

    #[test]
    fn invalid_forms() {
        let mut builder = NormalFormGameBuilder::new();
        assert_eq!(
            builder.make_game_and_annotations(&Broken, false).err(),
            Some(BuilderError::PayoffLengthMismatch {
                contingency: "[0, 0]".to_string(),
                expected: 2,
                found: 1,
            })
        );

        let mut builder = NormalFormGameBuilder::new();
        assert_eq!(
            builder.make_game_and_annotations(&Silent, false).err(),
            Some(BuilderError::Game(NfgError::EmptyStrategySet { player: 1 }))
        );
    }
}
