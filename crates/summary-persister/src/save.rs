use std::fs;
use std::path::{Path, PathBuf};

use result_tools_common::{get_size_string, ResultToolsError, SummaryConfig};
use result_tools_domain::ResultInfo;

use crate::{available_space, ensure_free_space, get_unique_dir_summary_file};

/// 将目录摘要保存到 `dir` 下的新摘要文件，返回文件路径
///
/// 写入前检查剩余空间，写入后至少保留 `config.min_free_disk_bytes`。
pub fn save_summary(
    dir: &Path,
    summary: &ResultInfo,
    config: &SummaryConfig,
) -> Result<PathBuf, ResultToolsError> {
    let summary_json = serde_json::to_string(summary)?;
    let summary_file = get_unique_dir_summary_file(dir);

    let available = available_space(dir)?;
    ensure_free_space(available, summary_json.len() as u64, config.min_free_disk_bytes)?;

    fs::write(&summary_file, &summary_json)?;
    log::info!(
        "Directory summary of {} is saved to file {} ({}).",
        dir.display(),
        summary_file.display(),
        get_size_string(summary_json.len() as u64)
    );
    Ok(summary_file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use result_tools_domain::load_summary_json_file;

    fn sample() -> ResultInfo {
        let mut root = ResultInfo::empty();
        let mut log = ResultInfo::new_file("big.log", 4096);
        log.set_trimmed_size(100);
        root.add_file(ResultInfo::new_file("control", 734));
        root.add_file(log);
        root.update_sizes();
        root
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config = SummaryConfig {
            min_free_disk_bytes: 0,
            ..SummaryConfig::default()
        };
        let path = save_summary(dir.path(), &sample(), &config).unwrap();
        assert!(path.starts_with(dir.path()));

        let loaded = load_summary_json_file(&path).unwrap();
        assert_eq!(loaded.original_size(), 4830);
        assert_eq!(loaded.trimmed_size(), 834);
        assert_eq!(loaded.get_file("big.log").unwrap().trimmed_size(), 100);
    }

    #[test]
    #[cfg(unix)]
    fn test_save_refuses_when_disk_nearly_full() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config = SummaryConfig {
            min_free_disk_bytes: u64::MAX,
            ..SummaryConfig::default()
        };
        let err = save_summary(dir.path(), &sample(), &config).unwrap_err();
        assert!(matches!(err, ResultToolsError::InsufficientDiskSpace { .. }));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_save_and_reload_deep_tree() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config = SummaryConfig {
            min_free_disk_bytes: 0,
            ..SummaryConfig::default()
        };

        // root -> d0 -> ... -> d44 -> f
        let mut node = ResultInfo::new_dir("d44");
        node.add_file(ResultInfo::new_file("f", 3));
        for i in (0..44).rev() {
            let mut parent = ResultInfo::new_dir(format!("d{}", i));
            parent.add_file(node);
            node = parent;
        }
        let mut root = ResultInfo::empty();
        root.add_file(node);
        root.update_sizes();

        let path = save_summary(dir.path(), &root, &config).unwrap();
        let loaded = load_summary_json_file(&path).unwrap();
        assert_eq!(loaded, root);
        assert_eq!(loaded.original_size(), 3);
    }
}
