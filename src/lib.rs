// ==========================================
// 生产进度对账系统 - 核心库
// ==========================================
// 职责: 单日 计划/实绩 对账引擎 (名称归一化、识别解析、
//       合并、进度分类、时间线离散化) 及其数据访问与导入层
// 定位: 决策支持; 引擎无副作用, 对固定输入幂等
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 对账规则
pub mod engine;

// 导入层 - 落地文件解析
pub mod importer;

// 数据访问层 - 注入式数据提供者
pub mod repository;

// 配置层 - 文件位置
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{NameCategory, ProgressStatus, TimelineCell};

// 领域实体
pub use domain::{
    ActualRecord, ActualSession, AliasBook, AliasEntry, MasterCatalogEntry, MergedRecord,
    PlanRecord, RecordKey,
};

// 引擎
pub use engine::{
    IdentityResolver, PlanCleaner, ProgressClassifier, ReconciliationMerger,
    ReconciliationPipeline, TimelineBuilder, TimelineMatrix,
};

// 数据访问
pub use repository::{DataProvider, FileProvider, InMemoryProvider};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "生産進捗照合システム";
