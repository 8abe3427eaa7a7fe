pub mod scanner;
pub mod filters;

pub use scanner::build_from_path;
pub use filters::*;
pub use result_tools_domain::ResultInfo;
