// (LIB)rary for (N)ormal (F)orm (G)ames.
// Builds `NormalFormGame`s out of strategic form descriptions, and solves
// them for pure strategy equilibria.

#[macro_use]
extern crate approx;

pub mod builder;
pub mod solvers;
pub mod strategic_form;

pub use builder::{BuilderError, GameAnnotations, NormalFormGameBuilder};
pub use solvers::PureNashSolver;
pub use strategic_form::StrategicForm;
