// ==========================================
// 生产进度对账系统 - 数据提供者
// ==========================================
// 职责: 对账一次运行所需四类输入的注入点
// 实现: InMemoryProvider (测试/嵌入) / FileProvider (本地落地文件)
// ==========================================

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::domain::alias::AliasBook;
use crate::domain::record::{ActualRecord, MasterCatalogEntry, PlanRecord};
use crate::importer;
use crate::repository::alias_store;
use crate::repository::error::{DataAccessError, DataAccessResult};

/// 对账输入的数据访问能力
///
/// 引擎对固定输入是纯函数; 缓存、网络、凭证等都留在实现侧。
pub trait DataProvider {
    /// 读取指定日期的生产计划 (原文名称)
    fn load_plan(&self, date: NaiveDate) -> DataAccessResult<Vec<PlanRecord>>;

    /// 读取指定日期的生产实绩
    fn load_actuals(&self, date: NaiveDate) -> DataAccessResult<Vec<ActualRecord>>;

    /// 读取产品主数据
    fn load_catalog(&self) -> DataAccessResult<Vec<MasterCatalogEntry>>;

    /// 读取别名辞书 (缺失 -> 空辞书)
    fn load_aliases(&self) -> DataAccessResult<AliasBook>;
}

// ==========================================
// InMemoryProvider - 内存数据提供者
// ==========================================
// 测试与嵌入场景用; 持有的即返回的
#[derive(Debug, Clone, Default)]
pub struct InMemoryProvider {
    pub plans: Vec<PlanRecord>,
    pub actuals: Vec<ActualRecord>,
    pub catalog: Vec<MasterCatalogEntry>,
    pub aliases: AliasBook,
}

impl DataProvider for InMemoryProvider {
    fn load_plan(&self, date: NaiveDate) -> DataAccessResult<Vec<PlanRecord>> {
        // 上游已按日期过滤; 这里再按计划日期收窄一次, 保证语义一致
        Ok(self
            .plans
            .iter()
            .filter(|p| p.plan_date().map(|d| d == date).unwrap_or(true))
            .cloned()
            .collect())
    }

    fn load_actuals(&self, date: NaiveDate) -> DataAccessResult<Vec<ActualRecord>> {
        Ok(self
            .actuals
            .iter()
            .filter(|a| a.date == date)
            .cloned()
            .collect())
    }

    fn load_catalog(&self) -> DataAccessResult<Vec<MasterCatalogEntry>> {
        Ok(self.catalog.clone())
    }

    fn load_aliases(&self) -> DataAccessResult<AliasBook> {
        Ok(self.aliases.clone())
    }
}

// ==========================================
// FileProvider - 本地文件数据提供者
// ==========================================
// 消费已导出的落地文件; 路径由配置层给出
#[derive(Debug, Clone)]
pub struct FileProvider {
    pub plan_path: Option<PathBuf>,    // 计划 CSV
    pub results_path: Option<PathBuf>, // 实绩工作簿
    pub catalog_path: Option<PathBuf>, // 产品主数据
    pub alias_path: Option<PathBuf>,   // 别名辞书 JSON
}

impl DataProvider for FileProvider {
    fn load_plan(&self, date: NaiveDate) -> DataAccessResult<Vec<PlanRecord>> {
        let path = self
            .plan_path
            .as_ref()
            .ok_or_else(|| DataAccessError::NotConfigured("plan".to_string()))?;
        Ok(importer::load_plan(path, date)?)
    }

    fn load_actuals(&self, date: NaiveDate) -> DataAccessResult<Vec<ActualRecord>> {
        let path = self
            .results_path
            .as_ref()
            .ok_or_else(|| DataAccessError::NotConfigured("results".to_string()))?;
        Ok(importer::load_results(path, date)?)
    }

    fn load_catalog(&self) -> DataAccessResult<Vec<MasterCatalogEntry>> {
        let path = self
            .catalog_path
            .as_ref()
            .ok_or_else(|| DataAccessError::NotConfigured("catalog".to_string()))?;
        Ok(importer::load_catalog(path)?)
    }

    fn load_aliases(&self) -> DataAccessResult<AliasBook> {
        match self.alias_path.as_ref() {
            Some(path) => alias_store::load_alias_book(path),
            // 未配置与缺失同义: 空辞书
            None => Ok(AliasBook::default()),
        }
    }
}
