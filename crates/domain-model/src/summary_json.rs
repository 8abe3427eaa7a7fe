//! 目录摘要的 JSON 格式：
//!
//! ```json
//! {"": {"/S": 6432, "/T": 734, "/C": 6432,
//!       "/D": [{"control": {"/S": 734}},
//!              {"debug": {"/S": 5698, "/T": 0, "/C": 5698,
//!                         "/D": [{"client.0.DEBUG": {"/S": 5698, "/T": 0, "/C": 5698}}]}}]}}
//! ```
//!
//! 每个节点是只有一个键的映射，键为名称，值为大小信息；目录额外带 `/D` 子项列表。

use std::fmt;
use std::path::Path;

use result_tools_common::ResultToolsError;
use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{ResultInfo, COLLECTED_SIZE_BYTES, DIRS, ORIGINAL_SIZE_BYTES, ROOT_DIR, TRIMMED_SIZE_BYTES};

impl Serialize for ResultInfo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.name(), &Details(self))?;
        map.end()
    }
}

struct Details<'a>(&'a ResultInfo);

impl Serialize for Details<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let info = self.0;
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry(ORIGINAL_SIZE_BYTES, &info.original_size())?;
        if info.is_trimmed() {
            map.serialize_entry(TRIMMED_SIZE_BYTES, &info.trimmed_size())?;
        }
        if info.is_collected_size_recorded() {
            map.serialize_entry(COLLECTED_SIZE_BYTES, &info.collected_size())?;
        }
        if info.is_dir() {
            map.serialize_entry(DIRS, info.files())?;
        }
        map.end()
    }
}

#[derive(Deserialize)]
struct RawDetails {
    #[serde(rename = "/S", default)]
    original_size: u64,
    #[serde(rename = "/T", default)]
    trimmed_size: Option<u64>,
    #[serde(rename = "/C", default)]
    collected_size: Option<u64>,
    #[serde(rename = "/D", default)]
    children: Option<Vec<ResultInfo>>,
}

struct ResultInfoVisitor;

impl<'de> Visitor<'de> for ResultInfoVisitor {
    type Value = ResultInfo;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map with exactly one entry of name to size details")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<ResultInfo, A::Error> {
        let (name, details): (String, RawDetails) = map
            .next_entry()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        if map.next_key::<IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(2, &self));
        }
        Ok(ResultInfo::from_parts(
            name,
            details.original_size,
            details.trimmed_size,
            details.collected_size,
            details.children,
        ))
    }
}

impl<'de> Deserialize<'de> for ResultInfo {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ResultInfoVisitor)
    }
}

/// 读取目录摘要文件
///
/// 根节点必须是名为 `""` 的目录；目录大小按子项重新计算。
pub fn load_summary_json_file(path: &Path) -> Result<ResultInfo, ResultToolsError> {
    let invalid = |reason: String| ResultToolsError::InvalidSummary {
        path: path.display().to_string(),
        reason,
    };

    let content = std::fs::read_to_string(path)?;
    // 每层目录占三层 JSON 嵌套，深目录会超过 serde_json 默认的 128 层限制
    let mut json = serde_json::Deserializer::from_str(&content);
    json.disable_recursion_limit();
    let mut summary = ResultInfo::deserialize(serde_stacker::Deserializer::new(&mut json))
        .map_err(|e| invalid(e.to_string()))?;
    json.end().map_err(|e| invalid(e.to_string()))?;

    if summary.name() != ROOT_DIR {
        return Err(invalid(format!(
            "root entry must be named {:?}, found {:?}",
            ROOT_DIR,
            summary.name()
        )));
    }
    if !summary.is_dir() {
        return Err(invalid("root entry is not a directory".to_string()));
    }

    summary.update_sizes();
    Ok(summary)
}
