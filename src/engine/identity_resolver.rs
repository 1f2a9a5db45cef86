// ==========================================
// 生产进度对账系统 - 识别解析器
// ==========================================
// 职责: 为每条计划行在产品主数据中找出唯一最佳身份
// 优先级: 客户全等+产品全等 -> 客户全等+产品子串 -> 客户子串+产品全等
//         -> 客户子串+产品子串 -> 无
// 红线: 绝不跨生产线匹配; 每层取首个命中, 命中即终止
// ==========================================

use tracing::debug;

use crate::domain::record::{MasterCatalogEntry, PlanRecord};
use crate::engine::normalizer::normalize;

/// 归一化后的名称比较结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NameMatch {
    Exact,     // 归一化后完全一致
    Substring, // 一方为另一方的子串 (双方非空)
    NoMatch,
}

fn compare_names(a: &str, b: &str) -> NameMatch {
    if a == b {
        return NameMatch::Exact;
    }
    if !a.is_empty() && !b.is_empty() && (a.contains(b) || b.contains(a)) {
        return NameMatch::Substring;
    }
    NameMatch::NoMatch
}

/// IdentityResolver - 分层识别解析器
///
/// 采用首个命中即胜的分层策略 (另一种 60/40 加权评分策略未实现,
/// 两者对歧义输入可能选出不同条目, 不得混用; 见 DESIGN.md)。
pub struct IdentityResolver;

impl IdentityResolver {
    pub fn new() -> Self {
        Self
    }

    /// 解析计划行的主数据身份
    ///
    /// # 返回
    /// - `Some(entry)`: 唯一最佳主数据行
    /// - `None`: 无候选或各层均未命中 (计划行保留原文名称)
    pub fn resolve<'a>(
        &self,
        plan: &PlanRecord,
        catalog: &'a [MasterCatalogEntry],
    ) -> Option<&'a MasterCatalogEntry> {
        // 1) 先按生产线收窄候选
        let candidates: Vec<&MasterCatalogEntry> = catalog
            .iter()
            .filter(|entry| entry.line == plan.line)
            .collect();
        if candidates.is_empty() {
            debug!(line = %plan.line, "no catalog candidates on line");
            return None;
        }

        let plan_customer = normalize(&plan.customer_name);
        let plan_product = normalize(&plan.product_name);

        // 各候选的 (客户, 产品) 比较结果只算一次
        let compared: Vec<(NameMatch, NameMatch, &MasterCatalogEntry)> = candidates
            .iter()
            .map(|entry| {
                (
                    compare_names(&plan_customer, &normalize(&entry.customer_name)),
                    compare_names(&plan_product, &normalize(&entry.product_name)),
                    *entry,
                )
            })
            .collect();

        // 2) 分层评估, 每层按候选顺序取首个命中
        let tiers: [(NameMatch, NameMatch); 4] = [
            (NameMatch::Exact, NameMatch::Exact),
            (NameMatch::Exact, NameMatch::Substring),
            (NameMatch::Substring, NameMatch::Exact),
            (NameMatch::Substring, NameMatch::Substring),
        ];

        for (tier_no, (want_customer, want_product)) in tiers.iter().enumerate() {
            if let Some((_, _, entry)) = compared
                .iter()
                .find(|(c, p, _)| c == want_customer && p == want_product)
            {
                debug!(
                    tier = tier_no + 1,
                    customer = %entry.customer_name,
                    product = %entry.product_name,
                    "resolver tier hit"
                );
                return Some(*entry);
            }
        }

        debug!(
            customer = %plan.customer_name,
            product = %plan.product_name,
            "no tier satisfied"
        );
        None
    }
}

impl Default for IdentityResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_names_empty_substring_excluded() {
        // 空串不参与子串判定, 但空==空视为全等
        assert_eq!(compare_names("", "abc"), NameMatch::NoMatch);
        assert_eq!(compare_names("", ""), NameMatch::Exact);
        assert_eq!(compare_names("abc", "abcdef"), NameMatch::Substring);
    }
}
