pub mod articles;
pub mod members;
