pub mod answers;
pub mod profile;
