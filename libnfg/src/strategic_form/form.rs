use nfg_lite::game::PlayerId;
use std::fmt::Debug;

/// `StrategicForm` is the main trait that should be implemented by game generators.
/// The generator describes each player's strategies and the payoffs of every
/// contingency; `NormalFormGameBuilder` turns that description into a
/// `NormalFormGame`.
pub trait StrategicForm {
    // Strategies of a player. Strategies of *different* players may compare equal,
    // a strategy is only identified by the (player, strategy) pair.
    // Each player's strategies are numbered in increasing order of `Strategy`.
    type Strategy: Eq + Ord + Debug + Clone;

    fn num_players(&self) -> usize;
    fn strategies(&self, player: PlayerId) -> Box<[Self::Strategy]>;

    /// Payoffs of every player, given one strategy per player.
    fn payoffs(&self, contingency: &[Self::Strategy]) -> Box<[f64]>;

    fn player_label(&self, player: PlayerId) -> String {
        format!("Player {}", player + 1)
    }
}
