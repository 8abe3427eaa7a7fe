use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// 摘要文件名：`dir_summary_<unix 秒>.json`
pub fn summary_file_name(timestamp_secs: u64) -> String {
    format!("dir_summary_{}.json", timestamp_secs)
}

/// 在 `dir` 下生成不与现有文件重名的摘要文件路径
///
/// 重名时依次尝试 `dir_summary_<ts>_1.json`、`dir_summary_<ts>_2.json`……
pub fn get_unique_dir_summary_file(dir: &Path) -> PathBuf {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    unique_summary_file_at(dir, now)
}

fn unique_summary_file_at(dir: &Path, timestamp_secs: u64) -> PathBuf {
    let candidate = dir.join(summary_file_name(timestamp_secs));
    if !candidate.exists() {
        return candidate;
    }
    (1u64..)
        .map(|count| dir.join(format!("dir_summary_{}_{}.json", timestamp_secs, count)))
        .find(|p| !p.exists())
        .unwrap_or(candidate)
}
