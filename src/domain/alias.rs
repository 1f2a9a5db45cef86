// ==========================================
// 生产进度对账系统 - 名称别名辞书
// ==========================================
// 外部维护的 正式名称 -> 别名列表 映射, 按类别 (客户/产品) 分组
// 红线: 对账过程中只读; 条目顺序即平局裁决顺序, 序列化必须保序
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::types::NameCategory;

// ==========================================
// AliasEntry - 单个正式名称及其别名
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasEntry {
    pub canonical: String,    // 正式名称
    #[serde(default)]
    pub aliases: Vec<String>, // 已知别名 (顺序无关, 允许重复)
}

impl AliasEntry {
    pub fn new(canonical: &str, aliases: &[&str]) -> Self {
        Self {
            canonical: canonical.to_string(),
            aliases: aliases.iter().map(|s| s.to_string()).collect(),
        }
    }
}

// ==========================================
// AliasBook - 两类别的别名辞书
// ==========================================
// JSON 持久化为数组形式, 保持文档顺序 (见 DESIGN.md)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasBook {
    #[serde(default)]
    pub customers: Vec<AliasEntry>, // 客户名辞书
    #[serde(default)]
    pub products: Vec<AliasEntry>,  // 产品名辞书
}

impl AliasBook {
    /// 取指定类别的条目列表
    pub fn category(&self, category: NameCategory) -> &[AliasEntry] {
        match category {
            NameCategory::Customer => &self.customers,
            NameCategory::Product => &self.products,
        }
    }

    /// 取指定类别的可变条目列表 (编辑工具用)
    pub fn category_mut(&mut self, category: NameCategory) -> &mut Vec<AliasEntry> {
        match category {
            NameCategory::Customer => &mut self.customers,
            NameCategory::Product => &mut self.products,
        }
    }

    /// 两类别均为空
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty() && self.products.is_empty()
    }
}
