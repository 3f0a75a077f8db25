use std::collections::HashMap;

/// 原编码 → IB编码 映射
#[derive(Debug, Clone, Default)]
pub struct ReferenceMapping {
    entries: HashMap<String, String>,
    /// 写入映射的行数（含重复编码）
    rows_read: usize,
    /// 因列数不足而跳过的行数
    skipped_rows: usize,
}

impl ReferenceMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// 查找IB编码，未匹配时返回空串
    pub fn lookup(&self, key: &str) -> &str {
        self.entries.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub(crate) fn insert_row(&mut self, source: String, target: String) {
        self.rows_read += 1;
        if let Some(previous) = self.entries.insert(source, target) {
            tracing::debug!(previous = %previous, "汇总表编码重复，后者覆盖前者");
        }
    }

    pub(crate) fn skip_row(&mut self) {
        self.skipped_rows += 1;
    }

    /// 映射条目数（去重后）
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn rows_read(&self) -> usize {
        self.rows_read
    }

    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }
}

impl FromIterator<(String, String)> for ReferenceMapping {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut mapping = Self::new();
        for (source, target) in iter {
            mapping.insert_row(source, target);
        }
        mapping
    }
}
