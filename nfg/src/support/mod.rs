mod strategy_support;

pub use self::strategy_support::StrategySupport;
