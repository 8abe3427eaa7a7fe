use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

pub const SUMMARY_FILE_PREFIX: &str = "dir_summary_";
pub const SUMMARY_FILE_SUFFIX: &str = ".json";

/// 文件名是否匹配 `dir_summary_*.json`
pub fn is_summary_file_name(name: &str) -> bool {
    name.len() >= SUMMARY_FILE_PREFIX.len() + SUMMARY_FILE_SUFFIX.len()
        && name.starts_with(SUMMARY_FILE_PREFIX)
        && name.ends_with(SUMMARY_FILE_SUFFIX)
}

/// 读取目录项失败时记录警告并跳过该项
pub(crate) fn readable_entry<T>(dir: &Path, entry: io::Result<T>) -> Option<T> {
    match entry {
        Ok(entry) => Some(entry),
        Err(e) => {
            log::warn!("Failed to read an entry of {}: {}", dir.display(), e);
            None
        }
    }
}

fn walk(dir: &Path, found: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("Failed to list {}: {}", dir.display(), e);
            return;
        }
    };
    for entry in entries.filter_map(|e| readable_entry(dir, e)) {
        let path = entry.path();
        // 不跟随目录链接
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        if is_dir {
            walk(&path, found);
        } else if is_summary_file_name(&entry.file_name().to_string_lossy()) {
            found.push(path);
        }
    }
}

/// 递归查找目录摘要文件，按修改时间从旧到新排序
pub fn find_summary_files(dir: &Path) -> Vec<PathBuf> {
    let mut found = Vec::new();
    walk(dir, &mut found);

    let mut with_time: Vec<(SystemTime, PathBuf)> = found
        .into_iter()
        .map(|p| {
            let modified = fs::metadata(&p)
                .and_then(|m| m.modified())
                .unwrap_or(SystemTime::UNIX_EPOCH);
            (modified, p)
        })
        .collect();
    with_time.sort();
    with_time.into_iter().map(|(_, p)| p).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_summary_file_name() {
        assert!(is_summary_file_name("dir_summary_1497000000.json"));
        assert!(is_summary_file_name("dir_summary_1497000000_1.json"));
        assert!(is_summary_file_name("dir_summary_.json"));
        assert!(!is_summary_file_name("dir_summary.json"));
        assert!(!is_summary_file_name("dir_summary_1.json.bak"));
        assert!(!is_summary_file_name("xdir_summary_1.json"));
    }

    #[test]
    fn test_unreadable_entry_skipped() {
        let dir = Path::new("/results");
        let failed: io::Result<u32> = Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        assert_eq!(readable_entry(dir, failed), None);
        assert_eq!(readable_entry(dir, Ok::<_, io::Error>(7)), Some(7));
    }

    #[test]
    fn test_find_summary_files_recursive() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let sub = dir.path().join("a").join("b");
        fs::create_dir_all(&sub).unwrap();
        fs::write(dir.path().join("dir_summary_1.json"), "{}").unwrap();
        fs::write(sub.join("dir_summary_2.json"), "{}").unwrap();
        fs::write(sub.join("other.json"), "{}").unwrap();

        let mut found = find_summary_files(dir.path());
        found.sort();
        assert_eq!(
            found,
            vec![dir.path().join("a/b/dir_summary_2.json"), dir.path().join("dir_summary_1.json")]
        );
    }
}
