// Synthetic normal form game with uniformly random payoffs.

extern crate env_logger;
extern crate structopt;

use libnfg::{NormalFormGameBuilder, PureNashSolver, StrategicForm};
use log::{debug, info};
use nfg_lite::game::{GameShape, PlayerId};
use nfg_lite::iter::{Odometer, SupportEnumerator};
use nfg_lite::StrategySupport;
use structopt::StructOpt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use std::error::Error;

#[derive(Debug, Clone, PartialOrd, PartialEq)]
pub struct Config {
    pub num_players: usize,
    pub num_strategies: usize,
    pub payoff_range: (f64, f64),
}

/// Payoff table indexed like the outcome table of the game being built,
/// i.e. by the contingency index with player 0 as the least significant digit.
#[derive(Debug, Clone)]
pub struct RandomForm {
    shape: GameShape,
    payoffs: Vec<Box<[f64]>>,
}

impl RandomForm {
    pub fn new(config: &Config, random_seed: u64) -> Result<RandomForm, Box<dyn Error>> {
        let (lo, hi) = config.payoff_range;
        if !(lo <= hi) {
            return Err(format!("Empty payoff range [{}, {}]", lo, hi).into());
        }
        let shape = GameShape::new(&vec![config.num_strategies; config.num_players])?;

        let mut rng: StdRng = SeedableRng::seed_from_u64(random_seed);
        let payoffs = (0..shape.num_contingencies())
            .map(|_| {
                (0..config.num_players)
                    .map(|_| match lo < hi {
                        true => rng.gen_range(lo, hi),
                        false => lo,
                    })
                    .collect()
            })
            .collect();
        Ok(RandomForm { shape, payoffs })
    }
}

impl StrategicForm for RandomForm {
    type Strategy = usize;

    fn num_players(&self) -> usize {
        self.shape.num_players()
    }

    fn strategies(&self, player: PlayerId) -> Box<[usize]> {
        (0..self.shape.num_strategies(player)).collect()
    }

    fn payoffs(&self, contingency: &[usize]) -> Box<[f64]> {
        self.payoffs[self.shape.index_of(contingency)].clone()
    }
}

#[derive(StructOpt, Debug)]
#[structopt(name = "synthetic")]
struct Opt {
    #[structopt(short = "n", long = "num_players", default_value = "2")]
    num_players: usize,

    #[structopt(short = "m", long = "num_strategies", default_value = "3")]
    num_strategies: usize,

    #[structopt(short = "r", long = "seed", default_value = "0")]
    random_seed: u64,

    #[structopt(long = "payoff_range_lo", default_value = "0.0")]
    payoff_range_lo: f64,

    #[structopt(long = "payoff_range_hi", default_value = "1.0")]
    payoff_range_hi: f64,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let opt = Opt::from_args();
    let config = Config {
        num_players: opt.num_players,
        num_strategies: opt.num_strategies,
        payoff_range: (opt.payoff_range_lo, opt.payoff_range_hi),
    };
    info!("Generating game with {:?}, seed {}", config, opt.random_seed);
    let form = RandomForm::new(&config, opt.random_seed)?;

    let mut builder = NormalFormGameBuilder::with_title("Synthetic");
    let (game, _) = builder.make_game_and_annotations(&form, false)?;

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
    for profile in equilibria.iter() {
        let payoffs = (0..game.num_players())
            .map(|player| game.payoff(profile, player))
            .collect::<Vec<f64>>();
        println!("{} {:?}", profile, payoffs);
    }
    Ok(())
}
