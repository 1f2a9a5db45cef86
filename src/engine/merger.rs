// ==========================================
// 生产进度对账系统 - 对账合并器
// ==========================================
// 职责: 按复合键聚合实绩, 再与清洗后的计划做外连接
// 复合键: (日期, 生产线, 客户名, 产品名); 计划侧日期由计划开始时刻导出
// 红线: 输出顺序确定 (计划行按输入序, 仅实绩键按首现序)
// ==========================================

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

use crate::domain::record::{ActualRecord, MergedRecord, PlanRecord, RecordKey};

/// 按键聚合后的实绩
#[derive(Debug, Clone, Default)]
struct ActualAggregate {
    start: Option<NaiveDateTime>,     // min(各记录最早开始)
    end: Option<NaiveDateTime>,       // max(各记录最晚结束)
    quantity: Option<f64>,            // 数量合计 (全为 None 时保持 None)
    duration_minutes: f64,            // 作业时长合计
    session_starts: Vec<NaiveDateTime>, // 区间开始时刻 (来源顺序拼接)
    session_ends: Vec<NaiveDateTime>,   // 区间结束时刻 (来源顺序拼接)
}

impl ActualAggregate {
    fn absorb(&mut self, record: &ActualRecord) {
        if let Some(first) = record.first_start() {
            self.start = Some(match self.start {
                Some(current) => current.min(first),
                None => first,
            });
        }
        if let Some(last) = record.last_end() {
            self.end = Some(match self.end {
                Some(current) => current.max(last),
                None => last,
            });
        }
        if let Some(quantity) = record.quantity {
            self.quantity = Some(self.quantity.unwrap_or(0.0) + quantity);
        }
        self.duration_minutes += record.total_duration_minutes();
        for session in &record.sessions {
            self.session_starts.push(session.start);
            self.session_ends.push(session.end);
        }
    }
}

/// ReconciliationMerger - 计划/实绩外连接
pub struct ReconciliationMerger;

impl ReconciliationMerger {
    pub fn new() -> Self {
        Self
    }

    /// 合并清洗后的计划与实绩
    ///
    /// # 行为
    /// - 实绩先按复合键聚合: 开始取最小, 结束取最大, 数量与时长求和,
    ///   区间列表按来源顺序拼接
    /// - 计划行按输入顺序输出; 命中聚合实绩则并入, 否则实绩侧为空
    /// - 未被任何计划命中的实绩键按首现顺序追加 (计划侧为空)
    /// - 任一侧为空时结果即另一侧 (缺失字段填空)
    pub fn merge(&self, plans: &[PlanRecord], actuals: &[ActualRecord]) -> Vec<MergedRecord> {
        let (mut aggregates, key_order) = aggregate_actuals(actuals);
        let mut matched_keys: Vec<RecordKey> = Vec::new();

        let mut merged = Vec::with_capacity(plans.len() + key_order.len());

        // 计划侧: 按输入顺序; 同键的多条计划行共享同一份聚合实绩
        for plan in plans {
            let key = plan.plan_date().map(|date| RecordKey {
                date,
                line: plan.line.clone(),
                customer_name: plan.customer_name.clone(),
                product_name: plan.product_name.clone(),
            });
            let aggregate = key.as_ref().and_then(|k| aggregates.get(k).cloned());
            if aggregate.is_some() {
                if let Some(ref k) = key {
                    matched_keys.push(k.clone());
                }
            }
            merged.push(build_plan_row(plan, key.map(|k| k.date), aggregate));
        }
        for key in &matched_keys {
            aggregates.remove(key);
        }

        // 仅实绩侧: 按键首现顺序
        for key in key_order {
            if let Some(aggregate) = aggregates.remove(&key) {
                merged.push(MergedRecord {
                    date: Some(key.date),
                    line: key.line,
                    customer_name: key.customer_name,
                    product_name: key.product_name,
                    planned_start: None,
                    planned_end: None,
                    planned_quantity: None,
                    actual_start: aggregate.start,
                    actual_end: aggregate.end,
                    actual_quantity: aggregate.quantity,
                    actual_duration_minutes: Some(aggregate.duration_minutes),
                    session_starts: aggregate.session_starts,
                    session_ends: aggregate.session_ends,
                    quantity_delta: None,
                    duration_delta_minutes: None,
                    status: None,
                });
            }
        }

        debug!(
            plan_rows = plans.len(),
            actual_rows = actuals.len(),
            merged_rows = merged.len(),
            "merge complete"
        );
        merged
    }
}

impl Default for ReconciliationMerger {
    fn default() -> Self {
        Self::new()
    }
}

/// 实绩按复合键聚合; 返回聚合表与键的首现顺序
fn aggregate_actuals(
    actuals: &[ActualRecord],
) -> (HashMap<RecordKey, ActualAggregate>, Vec<RecordKey>) {
    let mut aggregates: HashMap<RecordKey, ActualAggregate> = HashMap::new();
    let mut key_order: Vec<RecordKey> = Vec::new();

    for record in actuals {
        let key = RecordKey {
            date: record.date,
            line: record.line.clone(),
            customer_name: record.customer_name.clone(),
            product_name: record.product_name.clone(),
        };
        if !aggregates.contains_key(&key) {
            key_order.push(key.clone());
        }
        aggregates.entry(key).or_default().absorb(record);
    }

    (aggregates, key_order)
}

fn build_plan_row(
    plan: &PlanRecord,
    date: Option<NaiveDate>,
    aggregate: Option<ActualAggregate>,
) -> MergedRecord {
    let (actual_start, actual_end, actual_quantity, actual_duration, starts, ends) =
        match aggregate {
            Some(agg) => (
                agg.start,
                agg.end,
                agg.quantity,
                Some(agg.duration_minutes),
                agg.session_starts,
                agg.session_ends,
            ),
            None => (None, None, None, None, Vec::new(), Vec::new()),
        };

    MergedRecord {
        date,
        line: plan.line.clone(),
        customer_name: plan.customer_name.clone(),
        product_name: plan.product_name.clone(),
        planned_start: plan.planned_start,
        planned_end: plan.planned_end,
        planned_quantity: plan.planned_quantity,
        actual_start,
        actual_end,
        actual_quantity,
        actual_duration_minutes: actual_duration,
        session_starts: starts,
        session_ends: ends,
        quantity_delta: None,
        duration_delta_minutes: None,
        status: None,
    }
}
