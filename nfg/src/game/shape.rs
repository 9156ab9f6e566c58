use crate::error::{NfgError, Result};
use crate::game::{PlayerId, StrategyId};

/// The dimensions of a normal form game: the number of strategies of every
/// player, and the place value each player's strategy number carries in the
/// linear index of a contingency.
///
/// Player 0 is the least significant digit, i.e.,
///         index = sum_p number(p) * offset(p),
/// where offset(0) = 1 and offset(p + 1) = offset(p) * num_strategies(p).
/// The radices are always the *full* strategy counts, never the size of a
/// support, so that every enumerator addresses the same outcome table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameShape {
    num_strategies: Box<[usize]>,
    offsets: Box<[usize]>,
    num_contingencies: usize,
}

impl GameShape {
    pub fn new(num_strategies: &[usize]) -> Result<GameShape> {
        if num_strategies.is_empty() {
            return Err(NfgError::EmptyGame);
        }

        let mut offsets = Vec::with_capacity(num_strategies.len());
        let mut num_contingencies = 1usize;
        for (player, &count) in num_strategies.iter().enumerate() {
            if count == 0 {
                return Err(NfgError::EmptyStrategySet { player });
            }
            offsets.push(num_contingencies);
            num_contingencies = num_contingencies
                .checked_mul(count)
                .ok_or(NfgError::TooManyContingencies)?;
        }

        Ok(GameShape {
            num_strategies: num_strategies.to_vec().into_boxed_slice(),
            offsets: offsets.into_boxed_slice(),
            num_contingencies,
        })
    }

    pub fn num_players(&self) -> usize {
        self.num_strategies.len()
    }

    pub fn num_strategies(&self, player: PlayerId) -> usize {
        self.num_strategies[player]
    }

    pub fn dimensions(&self) -> &[usize] {
        &self.num_strategies
    }

    pub fn offset(&self, player: PlayerId) -> usize {
        self.offsets[player]
    }

    pub fn num_contingencies(&self) -> usize {
        self.num_contingencies
    }

    pub fn check_player(&self, player: PlayerId) -> Result<()> {
        match player < self.num_players() {
            true => Ok(()),
            false => Err(NfgError::PlayerOutOfRange {
                player,
                num_players: self.num_players(),
            }),
        }
    }

    pub fn check_strategy(&self, player: PlayerId, strategy: StrategyId) -> Result<()> {
        self.check_player(player)?;
        match strategy < self.num_strategies[player] {
            true => Ok(()),
            false => Err(NfgError::StrategyOutOfRange {
                player,
                strategy,
                num_strategies: self.num_strategies[player],
            }),
        }
    }

    /// Linear index of the contingency given by one strategy number per player.
    /// Panics if `numbers` does not hold exactly one entry per player. Numbers
    /// out of range are only caught in debug builds; see `checked_index_of`.
    pub fn index_of(&self, numbers: &[StrategyId]) -> usize {
        assert_eq!(numbers.len(), self.num_players());
        debug_assert!(
            numbers
                .iter()
                .zip(self.num_strategies.iter())
                .all(|(number, count)| number < count),
            "strategy numbers {:?} out of range for dimensions {:?}",
            numbers,
            self.num_strategies
        );
        numbers
            .iter()
            .zip(self.offsets.iter())
            .map(|(number, offset)| number * offset)
            .sum()
    }

    pub fn checked_index_of(&self, numbers: &[StrategyId]) -> Result<usize> {
        if numbers.len() != self.num_players() {
            return Err(NfgError::LengthMismatch {
                expected: self.num_players(),
                found: numbers.len(),
            });
        }
        for (player, &number) in numbers.iter().enumerate() {
            self.check_strategy(player, number)?;
        }
        Ok(self.index_of(numbers))
    }

    /// Inverse of `index_of`.
    pub fn numbers_of(&self, mut index: usize) -> Vec<StrategyId> {
        assert!(index < self.num_contingencies);
        self.num_strategies
            .iter()
            .map(|&count| {
                let number = index % count;
                index /= count;
                number
            })
            .collect()
    }
}
