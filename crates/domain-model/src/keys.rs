//! 目录摘要 JSON 的键名。以 `/` 开头以便与合法文件名区分，短键名可减小摘要文件体积。

/// 原始大小
pub const ORIGINAL_SIZE_BYTES: &str = "/S";
/// 截断后的大小
pub const TRIMMED_SIZE_BYTES: &str = "/T";
/// 从客户端收集的大小
pub const COLLECTED_SIZE_BYTES: &str = "/C";
/// 子项列表
pub const DIRS: &str = "/D";

/// 摘要根目录名。所有摘要都以 `""` 为根，才能按键合并
pub const ROOT_DIR: &str = "";
