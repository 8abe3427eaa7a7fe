use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use result_tools_common::{get_size_string, ResultToolsError};
use result_tools_domain::ResultInfo;

use crate::filters::readable_entry;

struct Walker {
    top_dir: PathBuf,
    /// 已展开过的目录（规范化路径）
    visited: HashSet<PathBuf>,
}

impl Walker {
    fn scan_entry(&mut self, path: &Path, name: String) -> ResultInfo {
        let link_meta = match fs::symlink_metadata(path) {
            Ok(m) => m,
            Err(e) => {
                log::warn!("Failed to stat {}: {}", path.display(), e);
                return ResultInfo::new_file(name, 0);
            }
        };

        let is_link = link_meta.file_type().is_symlink();
        // 符号链接按目标类型判断是否为目录；悬空链接视为文件
        let is_dir = if is_link {
            fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
        } else {
            link_meta.is_dir()
        };
        if !is_dir {
            // 链接本身会被 rsync 原样复制，记录链接自身大小
            return ResultInfo::new_file(name, link_meta.len());
        }

        let mut info = ResultInfo::new_dir(name);
        let real_path = match fs::canonicalize(path) {
            Ok(p) => p,
            Err(e) => {
                log::warn!("Failed to resolve {}: {}", path.display(), e);
                return info;
            }
        };

        // 指向结果目录内部的目录链接不展开；已扫描过的目录也不再展开，避免链接成环
        if (is_link && real_path.starts_with(&self.top_dir)) || !self.visited.insert(real_path) {
            return info;
        }

        self.collect_children(path, &mut info);
        info
    }

    fn collect_children(&mut self, dir: &Path, info: &mut ResultInfo) {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                if e.kind() == std::io::ErrorKind::PermissionDenied {
                    log::warn!("Permission denied, skipping {}", dir.display());
                } else {
                    log::warn!("Failed to list {}: {}", dir.display(), e);
                }
                return;
            }
        };

        let mut entries: Vec<_> = entries.filter_map(|e| readable_entry(dir, e)).collect();
        entries.sort_by_key(|e| e.file_name());

        for entry in entries {
            let name = entry.file_name().to_string_lossy().to_string();
            let child = self.scan_entry(&entry.path(), name);
            info.files_mut().push(child);
        }
    }
}

/// 构建目录摘要
///
/// 根节点总是名为 `""` 的目录。若 `path` 是文件，则根目录下只包含该文件。
pub fn build_from_path(path: &Path) -> Result<ResultInfo, ResultToolsError> {
    if fs::symlink_metadata(path).is_err() {
        return Err(ResultToolsError::PathNotFound(path.display().to_string()));
    }

    let mut root = ResultInfo::empty();
    if !path.is_dir() {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let size = fs::symlink_metadata(path)?.len();
        root.add_file(ResultInfo::new_file(name, size));
        root.update_sizes();
        return Ok(root);
    }

    let top_dir = fs::canonicalize(path)?;
    let mut walker = Walker {
        visited: HashSet::from([top_dir.clone()]),
        top_dir,
    };
    walker.collect_children(path, &mut root);
    // 目录大小只在顶层统一计算一次
    root.update_sizes();

    log::debug!(
        "Built summary of {}: {} files, {}",
        path.display(),
        root.total_file_count(),
        get_size_string(root.original_size())
    );
    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;

    fn create_test_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("create temp dir");
        let sub = dir.path().join("subdir");
        fs::create_dir_all(&sub).unwrap();
        File::create(sub.join("a.txt")).unwrap().write_all(b"hello").unwrap();
        File::create(dir.path().join("b.txt")).unwrap().write_all(b"world!").unwrap();
        dir
    }

    #[test]
    fn test_build_invalid_path() {
        let err = build_from_path(Path::new("/nonexistent_xyz_12345_folder")).unwrap_err();
        assert!(matches!(err, ResultToolsError::PathNotFound(_)));
    }

    #[test]
    fn test_build_temp_dir() {
        let dir = create_test_dir();
        let root = build_from_path(dir.path()).unwrap();
        assert_eq!(root.name(), "");
        assert!(root.is_dir());
        assert_eq!(root.original_size(), 11);
        assert_eq!(root.get_file_names().collect::<Vec<_>>(), vec!["b.txt", "subdir"]);
        let sub = root.get_file("subdir").unwrap();
        assert!(sub.is_dir());
        assert_eq!(sub.get_file("a.txt").unwrap().original_size(), 5);
    }

    #[test]
    fn test_build_single_file() {
        let dir = create_test_dir();
        let root = build_from_path(&dir.path().join("b.txt")).unwrap();
        assert!(root.is_dir());
        assert_eq!(root.files().len(), 1);
        assert_eq!(root.get_file("b.txt").unwrap().original_size(), 6);
        assert_eq!(root.original_size(), 6);
    }

    #[test]
    fn test_empty_dir_is_kept() {
        let dir = tempfile::tempdir().expect("create temp dir");
        fs::create_dir(dir.path().join("empty")).unwrap();
        let root = build_from_path(dir.path()).unwrap();
        let empty = root.get_file("empty").unwrap();
        assert!(empty.is_dir());
        assert_eq!(empty.original_size(), 0);
    }

    #[test]
    #[cfg(unix)]
    fn test_symlink_inside_top_dir_not_followed() {
        let dir = create_test_dir();
        std::os::unix::fs::symlink(dir.path().join("subdir"), dir.path().join("link")).unwrap();
        let root = build_from_path(dir.path()).unwrap();
        let link = root.get_file("link").unwrap();
        assert!(link.is_dir());
        assert!(link.files().is_empty());
        assert_eq!(root.original_size(), 11);
    }

    #[test]
    #[cfg(unix)]
    fn test_symlink_outside_top_dir_scanned_once() {
        let outside = create_test_dir();
        let dir = tempfile::tempdir().expect("create temp dir");
        std::os::unix::fs::symlink(outside.path(), dir.path().join("l1")).unwrap();
        std::os::unix::fs::symlink(outside.path(), dir.path().join("l2")).unwrap();
        let root = build_from_path(dir.path()).unwrap();
        assert_eq!(root.get_file("l1").unwrap().original_size(), 11);
        assert!(root.get_file("l2").unwrap().files().is_empty());
        assert_eq!(root.original_size(), 11);
    }
}
