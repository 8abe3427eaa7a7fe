use crate::ROOT_DIR;

/// 结果目录树中的一个文件或目录节点
///
/// 目录的大小始终等于其子项大小之和（原始、截断、收集三种大小分别求和）；
/// 文件节点没有子项。父节点不持有引用，子项变化后由调用方调用
/// [`ResultInfo::update_own_sizes`] 或 [`ResultInfo::update_sizes`] 向上重算。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultInfo {
    name: String,
    is_dir: bool,
    original_size: u64,
    /// None 表示未截断，即等于 original_size
    trimmed_size: Option<u64>,
    /// None 表示未记录，即等于截断大小
    collected_size: Option<u64>,
    children: Vec<ResultInfo>,
}

impl ResultInfo {
    pub fn new_file(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
            original_size: size,
            trimmed_size: None,
            collected_size: None,
            children: vec![],
        }
    }

    pub fn new_dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
            original_size: 0,
            trimmed_size: None,
            collected_size: None,
            children: vec![],
        }
    }

    /// 空的根目录，用于与「已被删除」的一侧比较
    pub fn empty() -> Self {
        Self::new_dir(ROOT_DIR)
    }

    /// 由反序列化得到的原始字段构造，目录大小按记录值保留
    pub(crate) fn from_parts(
        name: String,
        original_size: u64,
        trimmed_size: Option<u64>,
        collected_size: Option<u64>,
        children: Option<Vec<ResultInfo>>,
    ) -> Self {
        Self {
            name,
            is_dir: children.is_some(),
            original_size,
            trimmed_size,
            collected_size,
            children: children.unwrap_or_default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    pub fn original_size(&self) -> u64 {
        self.original_size
    }

    pub fn trimmed_size(&self) -> u64 {
        self.trimmed_size.unwrap_or(self.original_size)
    }

    pub fn collected_size(&self) -> u64 {
        self.collected_size.unwrap_or_else(|| self.trimmed_size())
    }

    pub fn is_collected_size_recorded(&self) -> bool {
        self.collected_size.is_some()
    }

    /// 截断大小是否与原始大小不同（序列化时才写出 `/T`）
    pub fn is_trimmed(&self) -> bool {
        self.trimmed_size() != self.original_size
    }

    pub fn set_original_size(&mut self, size: u64) {
        self.original_size = size;
    }

    pub fn set_trimmed_size(&mut self, size: u64) {
        self.trimmed_size = Some(size);
    }

    pub fn set_collected_size(&mut self, size: u64) {
        self.collected_size = Some(size);
    }

    /// 子项（文件节点为空）
    pub fn files(&self) -> &[ResultInfo] {
        &self.children
    }

    pub fn files_mut(&mut self) -> &mut Vec<ResultInfo> {
        &mut self.children
    }

    pub fn into_files(self) -> Vec<ResultInfo> {
        self.children
    }

    pub fn get_file_names(&self) -> impl Iterator<Item = &str> {
        self.children.iter().map(|c| c.name.as_str())
    }

    pub fn get_file(&self, name: &str) -> Option<&ResultInfo> {
        self.children.iter().find(|c| c.name == name)
    }

    pub fn get_file_mut(&mut self, name: &str) -> Option<&mut ResultInfo> {
        self.children.iter_mut().find(|c| c.name == name)
    }

    /// 追加子项；文件节点调用时会先转换为目录
    pub fn add_file(&mut self, info: ResultInfo) {
        if !self.is_dir {
            self.convert_to_dir();
        }
        self.children.push(info);
    }

    pub fn remove_file(&mut self, name: &str) -> Option<ResultInfo> {
        let idx = self.children.iter().position(|c| c.name == name)?;
        Some(self.children.remove(idx))
    }

    /// 将节点变为空目录，原有大小信息全部丢弃
    pub fn convert_to_dir(&mut self) {
        self.is_dir = true;
        self.children.clear();
        self.original_size = 0;
        self.trimmed_size = None;
        self.collected_size = None;
    }

    /// 仅根据直接子项重算本目录大小，子项自身的大小需已是最新
    pub fn update_own_sizes(&mut self) {
        if !self.is_dir {
            return;
        }
        let (original, trimmed, collected) =
            self.children.iter().fold((0u64, 0u64, 0u64), |(o, t, c), f| {
                (
                    o + f.original_size(),
                    t + f.trimmed_size(),
                    c + f.collected_size(),
                )
            });
        self.original_size = original;
        self.trimmed_size = (trimmed != original).then_some(trimmed);
        self.collected_size = (collected != trimmed).then_some(collected);
    }

    /// 自底向上重算整棵子树中所有目录的大小
    pub fn update_sizes(&mut self) {
        if !self.is_dir {
            return;
        }
        for child in &mut self.children {
            child.update_sizes();
        }
        self.update_own_sizes();
    }

    /// 子树中文件（叶子）数量
    pub fn total_file_count(&self) -> u64 {
        if self.is_dir {
            self.children.iter().map(|c| c.total_file_count()).sum()
        } else {
            1
        }
    }
}
