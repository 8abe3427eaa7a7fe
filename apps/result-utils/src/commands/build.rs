//! 构建命令：扫描结果目录并将目录摘要保存到该目录下。

use std::path::{Path, PathBuf};

use result_tools_common::{get_size_string, SummaryConfig};
use result_tools_merger::preprocess_result_dir_path;
use result_tools_persister::save_summary;
use result_tools_scanner::build_from_path;

pub fn build_command(path: &Path, config: &SummaryConfig) -> anyhow::Result<PathBuf> {
    let path = preprocess_result_dir_path(path)?;
    let summary = build_from_path(&path)?;

    log::info!(
        "Built summary of {}: {} files, {}",
        path.display(),
        summary.total_file_count(),
        get_size_string(summary.original_size())
    );
    if let Some(max_bytes) = config.max_size_bytes() {
        if summary.trimmed_size() > max_bytes {
            log::warn!(
                "Result size {} exceeds the limit of {}",
                get_size_string(summary.trimmed_size()),
                get_size_string(max_bytes)
            );
        }
    }

    let summary_file = save_summary(&path, &summary, config)?;
    Ok(summary_file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use result_tools_domain::load_summary_json_file;

    #[test]
    fn test_build_command_writes_summary() {
        let dir = tempfile::tempdir().expect("create temp dir");
        std::fs::create_dir(dir.path().join("debug")).unwrap();
        std::fs::write(dir.path().join("debug").join("client.0.INFO"), "hello").unwrap();
        let config = SummaryConfig {
            min_free_disk_bytes: 0,
            max_size_kb: 1,
            ..SummaryConfig::default()
        };

        let file = build_command(dir.path(), &config).unwrap();
        let summary = load_summary_json_file(&file).unwrap();
        assert_eq!(summary.original_size(), 5);
        assert!(summary.get_file("debug").unwrap().get_file("client.0.INFO").is_some());
    }

    #[test]
    fn test_build_command_rejects_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let file = dir.path().join("f");
        std::fs::write(&file, "x").unwrap();
        assert!(build_command(&file, &SummaryConfig::default()).is_err());
    }
}
