mod blog;
mod test_model;

pub use blog::BlogQuery;
pub use test_model::TestModelQuery;
