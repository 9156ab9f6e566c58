use crate::game::PlayerId;

/// Outcomes are addressed by their position in the game's outcome list.
pub type OutcomeId = usize;

/// A labelled payoff vector with one entry per player.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    label: String,
    payoffs: Box<[f64]>,
}

impl Outcome {
    pub fn new(label: String, payoffs: Box<[f64]>) -> Outcome {
        Outcome { label, payoffs }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn payoff(&self, player: PlayerId) -> f64 {
        self.payoffs[player]
    }

    pub fn payoffs(&self) -> &[f64] {
        &self.payoffs
    }

    pub fn set_payoff(&mut self, player: PlayerId, value: f64) {
        self.payoffs[player] = value;
    }
}
