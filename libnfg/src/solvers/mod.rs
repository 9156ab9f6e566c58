mod pure_nash;

pub use self::pure_nash::PureNashSolver;
