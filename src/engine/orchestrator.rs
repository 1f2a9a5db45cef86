// ==========================================
// 生产进度对账系统 - 对账管线
// ==========================================
// 职责: 串联 清洗 -> 合并 -> 分类 -> 无效行剔除 的单次对账
// 红线: 无共享可变状态; 固定输入必产出固定输出 (幂等)
// ==========================================

use chrono::NaiveDateTime;
use tracing::{debug, info};

use crate::domain::alias::AliasBook;
use crate::domain::record::{ActualRecord, MasterCatalogEntry, MergedRecord, PlanRecord};
use crate::engine::classifier::ProgressClassifier;
use crate::engine::merger::ReconciliationMerger;
use crate::engine::plan_cleaner::PlanCleaner;

/// ReconciliationPipeline - 单日对账管线
pub struct ReconciliationPipeline {
    cleaner: PlanCleaner,
    merger: ReconciliationMerger,
    classifier: ProgressClassifier,
}

impl ReconciliationPipeline {
    pub fn new() -> Self {
        Self {
            cleaner: PlanCleaner::new(),
            merger: ReconciliationMerger::new(),
            classifier: ProgressClassifier::new(),
        }
    }

    /// 执行一次对账, 产出进度表行
    ///
    /// # 步骤
    /// 1. 计划名称清洗 (别名辞书 + 主数据识别)
    /// 2. 与聚合实绩外连接
    /// 3. 差异与进度状态判定 (now 注入)
    /// 4. 剔除无效行: 计划区间不完整且无实绩开始的行
    ///    (保留 = 计划开始/结束齐全, 或 无计划但有实绩开始)
    ///
    /// 输出顺序 = 合并顺序 (计划按输入序, 仅实绩键按首现序)。
    pub fn build_progress_table(
        &self,
        plans: &[PlanRecord],
        actuals: &[ActualRecord],
        catalog: &[MasterCatalogEntry],
        aliases: &AliasBook,
        now: NaiveDateTime,
    ) -> Vec<MergedRecord> {
        let cleaned = self.cleaner.clean(plans, catalog, aliases);
        let merged = self.merger.merge(&cleaned, actuals);
        let classified = self.classifier.classify(&merged, now);

        let before = classified.len();
        let retained: Vec<MergedRecord> = classified
            .into_iter()
            .filter(|row| {
                let planned_and_valid = row.has_full_planned_interval();
                let unplanned_but_valid = !row.has_plan() && row.has_actual_start();
                planned_and_valid || unplanned_but_valid
            })
            .collect();
        debug!(dropped = before - retained.len(), "invalid rows removed");

        info!(
            plan_rows = plans.len(),
            actual_rows = actuals.len(),
            result_rows = retained.len(),
            "progress table built"
        );
        retained
    }
}

impl Default for ReconciliationPipeline {
    fn default() -> Self {
        Self::new()
    }
}
