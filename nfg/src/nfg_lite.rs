//! Enumeration of the contingencies of finite games in normal form.
//!
//! A `NormalFormGame` stores one outcome slot per contingency of the full
//! strategy space. A `StrategySupport` restricts the strategies each player
//! may use, and the enumerators in `iter` walk the contingencies of a support,
//! optionally keeping some players frozen. Every contingency they visit is
//! addressed by the same linear index into the game's outcome table.

#[macro_use]
extern crate approx;

pub mod error;
pub mod game;
pub mod iter;
pub mod profile;
pub mod support;

pub use self::error::{NfgError, Result};
pub use self::game::{NormalFormGame, PlayerId, StrategyId};
pub use self::iter::{Odometer, PartitionedEnumerator, SupportEnumerator};
pub use self::profile::StrategyProfile;
pub use self::support::StrategySupport;
