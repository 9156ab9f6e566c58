mod strategy_profile;

pub use self::strategy_profile::StrategyProfile;
