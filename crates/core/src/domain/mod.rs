pub mod inputs;
pub mod summary;
