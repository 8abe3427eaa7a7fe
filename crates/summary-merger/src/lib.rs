pub mod merge;
pub mod delete;
pub mod relocate;
pub mod summaries;

pub use merge::*;
pub use delete::*;
pub use relocate::*;
pub use summaries::*;
