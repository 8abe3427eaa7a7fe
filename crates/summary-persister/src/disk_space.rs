use std::path::Path;

use result_tools_common::ResultToolsError;

/// 非特权用户可用的剩余空间（字节）
#[cfg(unix)]
pub fn available_space(path: &Path) -> Result<u64, ResultToolsError> {
    let stat = nix::sys::statvfs::statvfs(path).map_err(std::io::Error::from)?;
    Ok((stat.fragment_size() as u64).saturating_mul(stat.blocks_available() as u64))
}

/// 非 unix 平台不查询剩余空间
#[cfg(not(unix))]
pub fn available_space(_path: &Path) -> Result<u64, ResultToolsError> {
    Ok(u64::MAX)
}

/// 写入 `summary_size` 字节后剩余空间须不少于 `min_free_bytes`
pub fn ensure_free_space(
    available: u64,
    summary_size: u64,
    min_free_bytes: u64,
) -> Result<(), ResultToolsError> {
    if available < summary_size.saturating_add(min_free_bytes) {
        return Err(ResultToolsError::InsufficientDiskSpace {
            available,
            summary_size,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_free_space() {
        assert!(ensure_free_space(100, 10, 90).is_ok());
        let err = ensure_free_space(100, 11, 90).unwrap_err();
        assert!(matches!(
            err,
            ResultToolsError::InsufficientDiskSpace {
                available: 100,
                summary_size: 11
            }
        ));
        // 剩余空间小于摘要本身
        assert!(ensure_free_space(5, 10, 0).is_err());
        assert!(ensure_free_space(10, 10, 0).is_ok());
    }

    #[test]
    #[cfg(unix)]
    fn test_available_space_of_temp_dir() {
        let dir = tempfile::tempdir().expect("create temp dir");
        assert!(available_space(dir.path()).is_ok());
    }
}
