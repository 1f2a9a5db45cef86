// ==========================================
// 生产进度对账系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、别名辞书
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod alias;
pub mod record;
pub mod types;

// 重导出核心类型
pub use alias::{AliasBook, AliasEntry};
pub use record::{
    ActualRecord, ActualSession, MasterCatalogEntry, MergedRecord, PlanRecord, RecordKey,
};
pub use types::{NameCategory, ProgressStatus, TimelineCell};
