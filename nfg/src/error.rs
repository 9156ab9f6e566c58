use crate::game::{OutcomeId, PlayerId, StrategyId};
use thiserror::Error;

/// Failures reported by games, supports, profiles and enumerators.
/// Running out of contingencies is *not* an error; enumerators signal
/// it by returning `false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NfgError {
    #[error("strategy {strategy} belongs to player {owner}, cannot assign it to player {player}")]
    InvalidAssignment {
        player: PlayerId,
        owner: PlayerId,
        strategy: StrategyId,
    },

    #[error("player {player} does not exist (game has {num_players} players)")]
    PlayerOutOfRange { player: PlayerId, num_players: usize },

    #[error("player {player} has no strategy {strategy} (has {num_strategies})")]
    StrategyOutOfRange {
        player: PlayerId,
        strategy: StrategyId,
        num_strategies: usize,
    },

    #[error("rank {rank} is outside the support of player {player} ({supported} strategies)")]
    RankOutOfRange {
        player: PlayerId,
        rank: usize,
        supported: usize,
    },

    #[error("expected {expected} entries, got {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("strategy {strategy} of player {player} is not in the support")]
    NotInSupport { player: PlayerId, strategy: StrategyId },

    #[error("support of player {player} would be empty")]
    EmptySupport { player: PlayerId },

    #[error("a game needs at least one player")]
    EmptyGame,

    #[error("player {player} has no strategies")]
    EmptyStrategySet { player: PlayerId },

    #[error("number of contingencies overflows usize")]
    TooManyContingencies,

    #[error("contingency index {index} is outside the outcome table ({num_contingencies} entries)")]
    IndexOutOfRange {
        index: usize,
        num_contingencies: usize,
    },

    #[error("outcome {outcome} does not exist")]
    UnknownOutcome { outcome: OutcomeId },

    #[error("outcome has {found} payoffs, game has {expected} players")]
    PayoffLengthMismatch { expected: usize, found: usize },

    #[error("profile dimensions {found:?} do not match game dimensions {expected:?}")]
    DimensionMismatch {
        expected: Vec<usize>,
        found: Vec<usize>,
    },
}

pub type Result<T> = std::result::Result<T, NfgError>;
