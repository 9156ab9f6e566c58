// RPS for debugging purposes.

extern crate env_logger;
extern crate structopt;

use itertools::Itertools;
use libnfg::{BuilderError, NormalFormGameBuilder, PureNashSolver, StrategicForm};
use log::{debug, info};
use nfg_lite::game::PlayerId;
use nfg_lite::iter::{Odometer, SupportEnumerator};
use nfg_lite::StrategySupport;
use structopt::StructOpt;

#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq)]
pub enum Throw {
    Rock,
    Paper,
    Scissors,
}

impl Throw {
    fn beats(self, other: Throw) -> bool {
        match (self, other) {
            (Throw::Rock, Throw::Scissors) => true,
            (Throw::Paper, Throw::Rock) => true,
            (Throw::Scissors, Throw::Paper) => true,
            _ => false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RockPaperScissors {
    win: f64,
}

impl StrategicForm for RockPaperScissors {
    type Strategy = Throw;

    fn num_players(&self) -> usize {
        2
    }

    fn strategies(&self, _player: PlayerId) -> Box<[Throw]> {
        vec![Throw::Rock, Throw::Scissors, Throw::Paper].into_boxed_slice()
    }

    fn payoffs(&self, contingency: &[Throw]) -> Box<[f64]> {
        let payoff_pl1 = if contingency[0].beats(contingency[1]) {
            self.win
        } else if contingency[1].beats(contingency[0]) {
            -self.win
        } else {
            0.0
        };
        vec![payoff_pl1, -payoff_pl1].into_boxed_slice()
    }
}

#[derive(StructOpt, Debug)]
#[structopt(name = "rps")]
struct Opt {
    #[structopt(short = "w", long = "win", default_value = "1.0")]
    win: f64,
}

fn main() -> Result<(), BuilderError> {
    env_logger::init();

    let opt = Opt::from_args();
    let form = RockPaperScissors { win: opt.win };

    let mut builder = NormalFormGameBuilder::with_title("Rock paper scissors");
    let (game, annotations) = builder.make_game_and_annotations(&form, true)?;
    info!(
        "Built {} with {} outcomes, constant sum: {}",
        game.title(),
        game.num_outcomes(),
        game.is_constant_sum()
    );

    let mut enumerator = SupportEnumerator::full(&game);
    for profile in enumerator.contingencies() {
        debug!(
            "{} -> {:?}",
            profile,
            game.outcome_of(&profile).map(|outcome| outcome.payoffs())
        );
    }

    let solver = PureNashSolver::new(&game, StrategySupport::full(&game))?;
    let equilibria = solver.solve()?;
    println!("{} pure equilibria", equilibria.len());
    if let Some(annotations) = annotations {
        for profile in equilibria.iter() {
            println!(
                "{}",
                annotations
                    .contingency(profile)
                    .iter()
                    .map(|throw| format!("{:?}", throw))
                    .join(" ")
            );
        }
    }
    Ok(())
}
