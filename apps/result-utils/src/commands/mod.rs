pub mod build;
pub mod merge;
