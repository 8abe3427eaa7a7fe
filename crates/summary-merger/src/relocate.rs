use std::path::Path;

use result_tools_domain::ResultInfo;

/// 将保存在结果目录子目录中的摘要挂到以结果目录为根的路径下
///
/// 例如 `result_dir/a/b/dir_summary_1.json` 中的摘要会变为 `"" -> a -> b -> ...`，
/// 这样才能和顶层摘要按键合并。摘要文件位于结果目录之外时原样返回。
pub fn relocate_summary(result_dir: &Path, summary_file: &Path, summary: ResultInfo) -> ResultInfo {
    let folders: Vec<String> = summary_file
        .parent()
        .and_then(|p| p.strip_prefix(result_dir).ok())
        .map(|rel| {
            rel.components()
                .map(|c| c.as_os_str().to_string_lossy().to_string())
                .collect()
        })
        .unwrap_or_default();

    let mut names = folders.into_iter().rev();
    let Some(deepest) = names.next() else {
        return summary;
    };

    let mut node = ResultInfo::new_dir(deepest);
    node.files_mut().extend(summary.into_files());
    for name in names {
        let mut parent = ResultInfo::new_dir(name);
        parent.add_file(node);
        node = parent;
    }

    let mut root = ResultInfo::empty();
    root.add_file(node);
    root.update_sizes();
    root
}
