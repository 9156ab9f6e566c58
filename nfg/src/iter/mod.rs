//! Enumeration of the contingencies of a normal form game.
//!
//! Both enumerators are odometers: a fixed sequence of players acts as the
//! digits, the *last* player in the sequence is the least significant digit,
//! and each digit runs over the ranks of that player's support. Exhausting a
//! pass leaves every digit back at rank 0, so a new pass can start right away.

mod partition;
mod partitioned_enumerator;
mod support_enumerator;

pub use self::partition::{Partition, PlayerState};
pub use self::partitioned_enumerator::PartitionedEnumerator;
pub use self::support_enumerator::SupportEnumerator;

use crate::game::StrategyId;
use crate::profile::StrategyProfile;
use std::fmt;

/// Common stepping interface of the enumerators.
pub trait Odometer {
    /// Moves to the first contingency of a pass.
    fn first(&mut self);

    /// Moves to the next contingency, returning false once the pass is exhausted.
    fn next_contingency(&mut self) -> bool;

    fn profile(&self) -> &StrategyProfile;

    /// Restarts the enumerator and iterates over one full pass, yielding a
    /// copy of every visited profile.
    fn contingencies(&mut self) -> Contingencies<'_, Self>
    where
        Self: Sized,
    {
        Contingencies {
            enumerator: self,
            started: false,
            exhausted: false,
        }
    }
}

/// Iterator over one pass of an `Odometer`. See `Odometer::contingencies`.
pub struct Contingencies<'e, E: Odometer> {
    enumerator: &'e mut E,
    started: bool,
    exhausted: bool,
}

impl<'e, E: Odometer> Iterator for Contingencies<'e, E> {
    type Item = StrategyProfile;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        if !self.started {
            self.started = true;
            self.enumerator.first();
            return Some(self.enumerator.profile().clone());
        }
        match self.enumerator.next_contingency() {
            true => Some(self.enumerator.profile().clone()),
            false => {
                self.exhausted = true;
                None
            }
        }
    }
}

/// Writes strategy numbers as `{ 0 2 1 }`.
fn dump_numbers(f: &mut fmt::Formatter, numbers: &[StrategyId]) -> fmt::Result {
    write!(f, "{{ ")?;
    for number in numbers {
        write!(f, "{} ", number)?;
    }
    write!(f, "}}")
}
