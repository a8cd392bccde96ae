// Blog mutations raise lookup failures as GraphQL errors; test model
// mutations report every failure inside their payload instead.

pub mod helpers;

mod blog;
mod test_model;

pub use blog::BlogMutation;
pub use test_model::TestModelMutation;
