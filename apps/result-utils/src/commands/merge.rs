//! 合并命令：合并结果目录下的全部目录摘要，将合并结果以 JSON 写到输出。

use std::io::Write;
use std::path::Path;

use result_tools_common::{get_size_string, SummaryConfig};
use result_tools_merger::merge_summaries;

/// 返回从客户端收集的结果总大小
pub fn merge_command(
    path: &Path,
    config: &SummaryConfig,
    out: &mut impl Write,
) -> anyhow::Result<u64> {
    let (client_collected_bytes, merged) = merge_summaries(path, config)?;
    log::info!(
        "Client collected {}, result size after trimming {}",
        get_size_string(client_collected_bytes),
        get_size_string(merged.trimmed_size())
    );

    serde_json::to_writer(&mut *out, &merged)?;
    writeln!(out)?;
    Ok(client_collected_bytes)
}
