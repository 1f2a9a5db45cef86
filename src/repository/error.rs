// ==========================================
// 生产进度对账系统 - 数据访问层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

use crate::importer::ImportError;

/// 数据访问层错误类型
#[derive(Error, Debug)]
pub enum DataAccessError {
    #[error("文件导入失败: {0}")]
    Import(#[from] ImportError),

    #[error("文件读写失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON 解析失败: {0}")]
    Json(#[from] serde_json::Error),

    #[error("数据源未配置: {0}")]
    NotConfigured(String),
}

/// Result 类型别名
pub type DataAccessResult<T> = Result<T, DataAccessError>;
