use result_tools_domain::ResultInfo;

/// 将较新的摘要合并进当前摘要
///
/// 新摘要中不存在于当前摘要的文件或目录视为新收集的结果，直接加入。
/// 文件在两次收集之间发生变化时，说明它被覆盖、rsync 会再次传输，
/// 因此收集大小会累加新的截断大小，可能大于截断大小。例如：
///
/// - 当前：`file1` 原始 1KB，截断 1KB，收集 1KB
/// - 新的：`file1` 原始 2KB，截断 1KB
/// - 合并后：原始 2KB，截断 1KB，收集 2KB
///
/// 例外：新的原始大小等于当前截断大小且新文件未截断，说明文件之前已被截断，
/// 再次收集的是截断后的文件，此时保留当前信息。
///
/// `is_final` 表示新摘要是由最终结果目录构建的。
pub fn merge(current: &mut ResultInfo, new: ResultInfo, is_final: bool) {
    for new_file in new.into_files() {
        let idx = current
            .files()
            .iter()
            .position(|f| f.name() == new_file.name());
        let Some(idx) = idx else {
            current.files_mut().push(new_file);
            continue;
        };

        let old_file = &mut current.files_mut()[idx];
        if new_file.is_dir() {
            if !old_file.is_dir() {
                // rsync 会用新目录覆盖旧文件
                old_file.convert_to_dir();
            }
            merge(old_file, new_file, is_final);
        } else if !old_file.is_dir() {
            merge_file(old_file, &new_file, is_final);
        }
        // 当前是目录而新的是文件：rsync 无法用文件覆盖目录，跳过
    }
    current.update_own_sizes();
}

fn merge_file(old_file: &mut ResultInfo, new_file: &ResultInfo, is_final: bool) {
    let new_size = new_file.original_size();
    let old_size = old_file.original_size();
    let new_trimmed_size = new_file.trimmed_size();
    let old_trimmed_size = old_file.trimmed_size();

    if new_size == old_size && new_trimmed_size == old_trimmed_size {
        return;
    }

    // 之前已截断，重新收集时没有变化
    if new_size == old_trimmed_size && new_size == new_trimmed_size {
        return;
    }

    // 服务器端的文件不知道原始大小，截断大小不变即视为未变化
    if is_final && new_trimmed_size == old_trimmed_size {
        return;
    }

    // TODO: 两次收集之间文件可能被覆盖多次，这里只计一次传输
    old_file.set_collected_size(old_file.collected_size() + new_trimmed_size);
    old_file.set_original_size(new_size);
    old_file.set_trimmed_size(new_trimmed_size);
}
