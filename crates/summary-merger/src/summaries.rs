use std::path::{Path, PathBuf};

use rayon::prelude::*;
use result_tools_common::{get_size_string, ResultToolsError, SummaryConfig};
use result_tools_domain::{load_summary_json_file, ResultInfo};
use result_tools_scanner::{build_from_path, find_summary_files};

use crate::{delete_missing_entries, merge, relocate_summary};

/// 检查结果目录路径：必须存在且是目录
pub fn preprocess_result_dir_path(path: &Path) -> Result<PathBuf, ResultToolsError> {
    if !path.exists() {
        return Err(ResultToolsError::PathNotFound(path.display().to_string()));
    }
    if !path.is_dir() {
        return Err(ResultToolsError::NotADirectory(path.display().to_string()));
    }
    Ok(path.to_path_buf())
}

/// 读取并重定位全部摘要文件，保持输入顺序；读取失败的文件记录日志后跳过
fn load_summaries(result_dir: &Path, summary_files: &[PathBuf]) -> Vec<ResultInfo> {
    let loaded: Vec<_> = summary_files
        .par_iter()
        .map(|file| {
            load_summary_json_file(file).map(|s| relocate_summary(result_dir, file, s))
        })
        .collect();

    summary_files
        .iter()
        .zip(loaded)
        .filter_map(|(file, result)| match result {
            Ok(summary) => Some(summary),
            Err(e) => {
                log::warn!("Failed to load summary file {} Error: {}", file.display(), e);
                None
            }
        })
        .collect()
}

/// 合并结果目录中的全部目录摘要
///
/// 返回 `(client_collected_bytes, merged_summary)`：
/// - `client_collected_bytes`：从测试设备收集的结果总大小。文件可能被覆盖或删除，
///   因此可能大于目录中现有文件的总大小；没有任何摘要文件时为 0。
/// - `merged_summary`：按时间从旧到新合并后，再与当前目录（最终结果）合并的摘要。
pub fn merge_summaries(
    path: &Path,
    config: &SummaryConfig,
) -> Result<(u64, ResultInfo), ResultToolsError> {
    let path = preprocess_result_dir_path(path)?;

    let summary_files = find_summary_files(&path);
    log::debug!("Found {} summary files under {}", summary_files.len(), path.display());

    let mut summaries = load_summaries(&path, &summary_files).into_iter();
    let merged = match summaries.next() {
        Some(first) => Some(summaries.fold(first, |mut acc, summary| {
            merge(&mut acc, summary, false);
            acc
        })),
        None => None,
    };

    // 客户端摘要全部合并后，即可得到从测试设备传输的结果总大小
    let client_collected_bytes = merged.as_ref().map_or(0, |m| m.collected_size());

    let last_summary = build_from_path(&path)?;
    let merged = match merged {
        Some(mut merged) => {
            merge(&mut merged, last_summary.clone(), true);
            delete_missing_entries(&mut merged, &last_summary, config);
            merged
        }
        None => last_summary,
    };

    log::info!(
        "Merged {} summaries of {}: collected from client {}, trimmed size {}",
        summary_files.len(),
        path.display(),
        get_size_string(client_collected_bytes),
        get_size_string(merged.trimmed_size())
    );
    Ok((client_collected_bytes, merged))
}
