use crate::strategic_form::StrategicForm;

use nfg_lite::game::{PlayerId, StrategyId};
use nfg_lite::profile::StrategyProfile;
use std::collections::BTreeMap;

/// Maps the strategy numbers of a built game back to the strategies of the
/// `StrategicForm` it was built from, and vice versa.
#[derive(Debug, Clone)]
pub struct GameAnnotations<T: StrategicForm> {
    pub strategy_annotations: Vec<Vec<T::Strategy>>,
    strategy_numbers: Vec<BTreeMap<T::Strategy, StrategyId>>,
}

impl<T> GameAnnotations<T>
where
    T: StrategicForm,
{
    pub fn new(strategy_annotations: Vec<Vec<T::Strategy>>) -> GameAnnotations<T> {
        let strategy_numbers = strategy_annotations
            .iter()
            .map(|strategies| {
                strategies
                    .iter()
                    .enumerate()
                    .map(|(number, strategy)| (strategy.clone(), number))
                    .collect()
            })
            .collect();
        GameAnnotations {
            strategy_annotations,
            strategy_numbers,
        }
    }

    pub fn strategy(&self, player: PlayerId, number: StrategyId) -> &T::Strategy {
        &self.strategy_annotations[player][number]
    }

    pub fn number_of(&self, player: PlayerId, strategy: &T::Strategy) -> Option<StrategyId> {
        self.strategy_numbers
            .get(player)
            .and_then(|numbers| numbers.get(strategy))
            .cloned()
    }

    /// The strategies held by `profile`, one per player.
    pub fn contingency(&self, profile: &StrategyProfile) -> Vec<T::Strategy> {
        profile
            .numbers()
            .iter()
            .enumerate()
            .map(|(player, &number)| self.strategy(player, number).clone())
            .collect()
    }
}
