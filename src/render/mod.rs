pub mod summary;
pub mod tab;
