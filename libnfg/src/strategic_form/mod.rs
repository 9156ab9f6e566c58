/// Defines the components used to describe a game in strategic form.

mod form;

pub use form::StrategicForm;

#[cfg(test)]
pub use form::test_fixtures;
