use crate::error::{NfgError, Result};
use crate::game::{GameShape, Outcome, OutcomeId, Player, PlayerId, Strategy, StrategyId};
use crate::profile::StrategyProfile;

use log::{debug, warn};
use std::sync::Arc;

/// A finite game in normal (strategic) form.
///
/// Outcomes live in a list and are attached to contingencies through a flat
/// table with one slot per contingency of the *full* game, addressed by the
/// linear index described in `GameShape`. Several contingencies may share one
/// outcome. A contingency without an outcome pays 0 to every player.
///
/// Enumerators and profiles never borrow the game. They carry a shared
/// `GameShape` instead, and the game is handed to them whenever an outcome has
/// to be read or written.
#[derive(Debug, Clone)]
pub struct NormalFormGame {
    title: String,
    players: Box<[Player]>,
    shape: Arc<GameShape>,
    outcomes: Vec<Outcome>,
    results: Vec<Option<OutcomeId>>,
}

impl NormalFormGame {
    /// Creates a game with default labels and an empty outcome table.
    pub fn new(title: &str, num_strategies: &[usize]) -> Result<NormalFormGame> {
        let labels = num_strategies
            .iter()
            .enumerate()
            .map(|(player, &count)| {
                (
                    format!("Player {}", player + 1),
                    (1..=count).map(|s| s.to_string()).collect(),
                )
            })
            .collect();
        Self::with_labels(title, labels)
    }

    /// Creates a game from a (player label, strategy labels) pair per player.
    pub fn with_labels(title: &str, players: Vec<(String, Vec<String>)>) -> Result<NormalFormGame> {
        let num_strategies = players
            .iter()
            .map(|(_, strategies)| strategies.len())
            .collect::<Vec<usize>>();
        let shape = GameShape::new(&num_strategies)?;

        let players = players
            .into_iter()
            .enumerate()
            .map(|(number, (label, strategies))| Player::new(number, label, strategies))
            .collect::<Vec<Player>>()
            .into_boxed_slice();

        debug!(
            "Created game {:?} with dimensions {:?} ({} contingencies)",
            title,
            shape.dimensions(),
            shape.num_contingencies()
        );

        Ok(NormalFormGame {
            title: title.to_string(),
            players,
            results: vec![None; shape.num_contingencies()],
            shape: Arc::new(shape),
            outcomes: vec![],
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Panics if the player does not exist. See `checked_player` for the
    /// fallible version.
    pub fn player(&self, player: PlayerId) -> &Player {
        &self.players[player]
    }

    pub fn num_strategies(&self, player: PlayerId) -> usize {
        self.shape.num_strategies(player)
    }

    /// Panics if the player or the strategy does not exist. See
    /// `checked_strategy` for the fallible version.
    pub fn strategy(&self, player: PlayerId, number: StrategyId) -> &Strategy {
        &self.players[player].strategies()[number]
    }

    pub fn checked_strategy(&self, player: PlayerId, number: StrategyId) -> Result<&Strategy> {
        self.shape.check_strategy(player, number)?;
        Ok(self.strategy(player, number))
    }

    pub fn checked_player(&self, player: PlayerId) -> Result<&Player> {
        self.shape.check_player(player)?;
        Ok(self.player(player))
    }

    pub fn shape(&self) -> &Arc<GameShape> {
        &self.shape
    }

    pub fn num_contingencies(&self) -> usize {
        self.shape.num_contingencies()
    }

    /// Appends a new outcome and returns its id. The outcome is not attached
    /// to any contingency yet.
    pub fn new_outcome(&mut self, label: &str, payoffs: Vec<f64>) -> Result<OutcomeId> {
        if payoffs.len() != self.num_players() {
            return Err(NfgError::PayoffLengthMismatch {
                expected: self.num_players(),
                found: payoffs.len(),
            });
        }
        self.outcomes
            .push(Outcome::new(label.to_string(), payoffs.into_boxed_slice()));
        Ok(self.outcomes.len() - 1)
    }

    pub fn num_outcomes(&self) -> usize {
        self.outcomes.len()
    }

    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    pub fn outcome(&self, outcome: OutcomeId) -> Option<&Outcome> {
        self.outcomes.get(outcome)
    }

    pub fn outcome_mut(&mut self, outcome: OutcomeId) -> Option<&mut Outcome> {
        self.outcomes.get_mut(outcome)
    }

    /// Id of the outcome attached to the contingency at `index`, if any.
    pub fn outcome_id_at(&self, index: usize) -> Option<OutcomeId> {
        self.results.get(index).cloned().flatten()
    }

    pub fn outcome_at(&self, index: usize) -> Option<&Outcome> {
        self.outcome_id_at(index)
            .and_then(|outcome| self.outcomes.get(outcome))
    }

    /// Attaches `outcome` to the contingency at `index`, or detaches
    /// whatever is there when `outcome` is `None`.
    pub fn set_outcome_at(&mut self, index: usize, outcome: Option<OutcomeId>) -> Result<()> {
        if index >= self.results.len() {
            return Err(NfgError::IndexOutOfRange {
                index,
                num_contingencies: self.results.len(),
            });
        }
        if let Some(outcome) = outcome {
            if outcome >= self.outcomes.len() {
                return Err(NfgError::UnknownOutcome { outcome });
            }
        }
        self.results[index] = outcome;
        Ok(())
    }

    /// Outcome attached to the contingency held by `profile`. Returns `None`
    /// as well when the profile was built for a game of different dimensions.
    pub fn outcome_of(&self, profile: &StrategyProfile) -> Option<&Outcome> {
        match self.check_shape(profile.shape()) {
            Ok(()) => self.outcome_at(profile.index()),
            Err(err) => {
                warn!("Reading outcome of a foreign profile: {}", err);
                None
            }
        }
    }

    pub fn set_outcome(
        &mut self,
        profile: &StrategyProfile,
        outcome: Option<OutcomeId>,
    ) -> Result<()> {
        self.check_shape(profile.shape())?;
        self.set_outcome_at(profile.index(), outcome)
    }

    /// Payoff of `player` at the contingency held by `profile`.
    pub fn payoff(&self, profile: &StrategyProfile, player: PlayerId) -> f64 {
        self.outcome_of(profile)
            .map(|outcome| outcome.payoff(player))
            .unwrap_or(0.0)
    }

    pub fn payoff_at(&self, index: usize, player: PlayerId) -> f64 {
        self.outcome_at(index)
            .map(|outcome| outcome.payoff(player))
            .unwrap_or(0.0)
    }

    /// Returns true if the payoffs of every contingency sum to the same value.
    pub fn is_constant_sum(&self) -> bool {
        let total = |index: usize| {
            (0..self.num_players())
                .map(|player| self.payoff_at(index, player))
                .sum::<f64>()
        };
        let reference = total(0);
        (1..self.num_contingencies())
            .all(|index| abs_diff_eq!(total(index), reference, epsilon = 1e-9))
    }

    /// Fails with `DimensionMismatch` unless `shape` has the dimensions of
    /// this game. Supports and profiles built for another game are checked
    /// with this before they are used to address the outcome table.
    pub fn check_shape(&self, shape: &Arc<GameShape>) -> Result<()> {
        if Arc::ptr_eq(shape, &self.shape) || **shape == *self.shape {
            Ok(())
        } else {
            Err(NfgError::DimensionMismatch {
                expected: self.shape.dimensions().to_vec(),
                found: shape.dimensions().to_vec(),
            })
        }
    }
}
