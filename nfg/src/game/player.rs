/// Players are numbered `0..num_players`.
pub type PlayerId = usize;

/// Position of a strategy within its player's *full* strategy list.
pub type StrategyId = usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strategy {
    player: PlayerId,
    number: StrategyId,
    label: String,
}

impl Strategy {
    pub fn new(player: PlayerId, number: StrategyId, label: String) -> Strategy {
        Strategy {
            player,
            number,
            label,
        }
    }

    /// The player owning this strategy.
    pub fn player(&self) -> PlayerId {
        self.player
    }

    pub fn number(&self) -> StrategyId {
        self.number
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    number: PlayerId,
    label: String,
    strategies: Box<[Strategy]>,
}

impl Player {
    /// Creates a player owning one strategy per label, numbered in the order given.
    pub fn new(number: PlayerId, label: String, strategy_labels: Vec<String>) -> Player {
        let strategies = strategy_labels
            .into_iter()
            .enumerate()
            .map(|(strategy, label)| Strategy::new(number, strategy, label))
            .collect::<Vec<Strategy>>()
            .into_boxed_slice();
        Player {
            number,
            label,
            strategies,
        }
    }

    pub fn number(&self) -> PlayerId {
        self.number
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn num_strategies(&self) -> usize {
        self.strategies.len()
    }

    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }

    pub fn strategy(&self, number: StrategyId) -> Option<&Strategy> {
        self.strategies.get(number)
    }
}
