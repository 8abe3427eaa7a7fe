use result_tools_common::SummaryConfig;
use result_tools_domain::ResultInfo;

/// 标记只存在于旧摘要中的文件和目录为已删除
///
/// 新摘要由最终结果目录构建时，其中缺失的文件都视为被删除，截断大小置 0；
/// 首次截断前记录收集大小，之后不再覆盖。`config` 中忽略的文件直接移除。
pub fn delete_missing_entries(
    old: &mut ResultInfo,
    new: &ResultInfo,
    config: &SummaryConfig,
) {
    let empty = ResultInfo::empty();

    old.files_mut().retain(|f| {
        let removed = !f.is_dir()
            && new.get_file(f.name()).is_none()
            && config.is_ignored(f.name());
        if removed {
            log::debug!("Dropping ignored file {} from summary", f.name());
        }
        !removed
    });

    for old_file in old.files_mut().iter_mut() {
        let counterpart = new.get_file(old_file.name());
        if old_file.is_dir() {
            // 目录不存在或已变成文件时，整个目录按删除处理
            let new_dir = counterpart.filter(|f| f.is_dir()).unwrap_or(&empty);
            delete_missing_entries(old_file, new_dir, config);
        } else if counterpart.is_none() {
            trim_deleted_file(old_file);
        }
    }

    old.update_own_sizes();
}

fn trim_deleted_file(file: &mut ResultInfo) {
    if !file.is_collected_size_recorded() {
        file.set_collected_size(file.trimmed_size());
    }
    file.set_trimmed_size(0);
}
