// ==========================================
// 生产进度对账系统 - 配置层
// ==========================================
// 职责: 落地文件位置与数据目录解析
// 环境变量: PROGRESS_DATA_DIR 覆盖数据目录
// ==========================================

use std::env;
use std::path::PathBuf;

use crate::repository::provider::FileProvider;

/// 数据目录环境变量
pub const DATA_DIR_ENV: &str = "PROGRESS_DATA_DIR";

/// 默认文件名
pub const CATALOG_FILE: &str = "product_master.xlsx";
pub const PLAN_FILE: &str = "production_plan.csv";
pub const RESULTS_FILE: &str = "production_records.xlsx";
pub const ALIAS_FILE: &str = "name_master.json";

/// 应用配置
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf, // 落地文件所在目录
}

impl AppConfig {
    /// 从环境解析配置
    ///
    /// 数据目录: PROGRESS_DATA_DIR > 系统数据目录/production-progress > ./data
    pub fn from_env() -> Self {
        let data_dir = env::var(DATA_DIR_ENV)
            .map(PathBuf::from)
            .ok()
            .or_else(|| dirs::data_dir().map(|d| d.join("production-progress")))
            .unwrap_or_else(|| PathBuf::from("data"));
        Self { data_dir }
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.data_dir.join(CATALOG_FILE)
    }

    pub fn plan_path(&self) -> PathBuf {
        self.data_dir.join(PLAN_FILE)
    }

    pub fn results_path(&self) -> PathBuf {
        self.data_dir.join(RESULTS_FILE)
    }

    pub fn alias_path(&self) -> PathBuf {
        self.data_dir.join(ALIAS_FILE)
    }

    /// 按配置组装文件数据提供者
    pub fn file_provider(&self) -> FileProvider {
        FileProvider {
            plan_path: Some(self.plan_path()),
            results_path: Some(self.results_path()),
            catalog_path: Some(self.catalog_path()),
            alias_path: Some(self.alias_path()),
        }
    }
}
