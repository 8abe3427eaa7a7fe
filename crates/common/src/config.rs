use std::collections::BTreeSet;

/// 保存摘要文件后至少保留的磁盘空间
pub const MIN_FREE_DISK_BYTES: u64 = 10 * 1024 * 1024;

/// Autotest 用来记录进程状态的文件，最终会从结果目录中删除，合并时可以忽略
pub const FILES_TO_IGNORE: &[&str] = &["control.autoserv.state"];

/// 摘要构建 / 合并配置
#[derive(Debug, Clone)]
pub struct SummaryConfig {
    /// 结果目录上限（KB），0 表示不限制
    pub max_size_kb: u64,
    pub min_free_disk_bytes: u64,
    pub files_to_ignore: BTreeSet<String>,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            max_size_kb: 0,
            min_free_disk_bytes: MIN_FREE_DISK_BYTES,
            files_to_ignore: FILES_TO_IGNORE.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl SummaryConfig {
    /// 上限（字节），未设置时为 None
    pub fn max_size_bytes(&self) -> Option<u64> {
        (self.max_size_kb > 0).then(|| self.max_size_kb.saturating_mul(1024))
    }

    pub fn is_ignored(&self, name: &str) -> bool {
        self.files_to_ignore.contains(name)
    }
}
