// ==========================================
// 生产进度对账系统 - 计划清洗器
// ==========================================
// 职责: 对每条计划行执行别名匹配与主数据识别, 把名称改写为正式名称
// 红线: 不改动输入记录, 输出为新副本; 未命中时保留原文名称
// ==========================================

use tracing::debug;

use crate::domain::alias::AliasBook;
use crate::domain::record::{MasterCatalogEntry, PlanRecord};
use crate::domain::types::NameCategory;
use crate::engine::alias_matcher::{find_best_match, AliasMatch};
use crate::engine::identity_resolver::IdentityResolver;

/// 单条计划行的清洗结果
///
/// 别名匹配结果在分层策略下仅作参考信息 (供报表与排查),
/// 不参与识别解析本身。
#[derive(Debug, Clone)]
pub struct CleanOutcome {
    pub record: PlanRecord,                  // 清洗后的计划行
    pub alias_customer: Option<AliasMatch>,  // 客户名的辞书匹配 (参考)
    pub alias_product: Option<AliasMatch>,   // 产品名的辞书匹配 (参考)
    pub resolved: bool,                      // 是否命中主数据
}

/// PlanCleaner - 计划清洗器
pub struct PlanCleaner {
    resolver: IdentityResolver,
}

impl PlanCleaner {
    pub fn new() -> Self {
        Self {
            resolver: IdentityResolver::new(),
        }
    }

    /// 清洗计划行, 返回改写后的副本
    pub fn clean(
        &self,
        plans: &[PlanRecord],
        catalog: &[MasterCatalogEntry],
        aliases: &AliasBook,
    ) -> Vec<PlanRecord> {
        self.clean_with_report(plans, catalog, aliases)
            .into_iter()
            .map(|outcome| outcome.record)
            .collect()
    }

    /// 清洗计划行, 并附带每行的匹配明细
    pub fn clean_with_report(
        &self,
        plans: &[PlanRecord],
        catalog: &[MasterCatalogEntry],
        aliases: &AliasBook,
    ) -> Vec<CleanOutcome> {
        plans
            .iter()
            .map(|plan| self.clean_one(plan, catalog, aliases))
            .collect()
    }

    fn clean_one(
        &self,
        plan: &PlanRecord,
        catalog: &[MasterCatalogEntry],
        aliases: &AliasBook,
    ) -> CleanOutcome {
        // 辞书匹配 (参考信息)
        let alias_customer =
            find_best_match(&plan.customer_name, aliases.category(NameCategory::Customer));
        let alias_product =
            find_best_match(&plan.product_name, aliases.category(NameCategory::Product));

        let mut record = plan.clone();

        // 主数据识别: 命中则以正式名称覆盖
        let resolved = match self.resolver.resolve(plan, catalog) {
            Some(entry) => {
                debug!(
                    raw_customer = %plan.customer_name,
                    raw_product = %plan.product_name,
                    customer = %entry.customer_name,
                    product = %entry.product_name,
                    "plan row cleaned"
                );
                record.customer_name = entry.customer_name.clone();
                record.product_name = entry.product_name.clone();
                true
            }
            None => {
                debug!(
                    customer = %plan.customer_name,
                    product = %plan.product_name,
                    "no master match, keeping raw names"
                );
                false
            }
        };

        CleanOutcome {
            record,
            alias_customer,
            alias_product,
            resolved,
        }
    }
}

impl Default for PlanCleaner {
    fn default() -> Self {
        Self::new()
    }
}
