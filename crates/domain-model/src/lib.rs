pub mod keys;
pub mod result_info;
pub mod summary_json;

pub use keys::*;
pub use result_info::*;
pub use summary_json::*;
