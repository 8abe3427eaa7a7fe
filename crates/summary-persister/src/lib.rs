pub mod summary_file;
pub mod disk_space;
pub mod save;

pub use summary_file::*;
pub use disk_space::*;
pub use save::*;
