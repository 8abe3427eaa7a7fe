use humansize::{file_size_opts::BINARY, FileSize};

/// 将字节数格式化为易读字符串，如 `1.50 KiB`
pub fn get_size_string(size_bytes: u64) -> String {
    size_bytes
        .file_size(BINARY)
        .unwrap_or_else(|_| format!("{} B", size_bytes))
}
