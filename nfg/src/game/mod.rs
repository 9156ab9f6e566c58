mod normal_form_game;
mod outcome;
mod player;
mod shape;

pub use self::normal_form_game::NormalFormGame;
pub use self::outcome::{Outcome, OutcomeId};
pub use self::player::{Player, PlayerId, Strategy, StrategyId};
pub use self::shape::GameShape;

#[cfg(test)]
pub use self::normal_form_game::test_fixtures;
