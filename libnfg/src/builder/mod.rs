mod annotations;
mod builder;
mod error;

pub use self::annotations::GameAnnotations;
pub use self::builder::NormalFormGameBuilder;
pub use self::error::BuilderError;
