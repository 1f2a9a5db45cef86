// ==========================================
// 生产进度对账系统 - 时间线离散化
// ==========================================
// 职责: 把计划区间与实绩作业区间投影到固定 15 分钟槽位网格
// 窗口: 对象日 08:30 ~ 17:00 (含末端边界), 进程级常量, 不随数据变化
// 红线: 槽位判定用半开区间相交; 先画计划, 实绩覆盖计划
// ==========================================

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::debug;

use crate::domain::record::MergedRecord;
use crate::domain::types::TimelineCell;

/// 显示窗口开始 (08:30)
pub const WINDOW_START: (u32, u32) = (8, 30);
/// 显示窗口结束 (17:00, 含此槽位)
pub const WINDOW_END: (u32, u32) = (17, 0);
/// 槽位宽度 (分钟)
pub const SLOT_MINUTES: i64 = 15;

/// 识别字段缺失时的占位名
const MISSING_KEY: &str = "N/A";

/// 时间线一行: 一个 (生产线, 客户, 产品) 组
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineRow {
    pub line: String,
    pub customer_name: String,
    pub product_name: String,
    pub cells: Vec<TimelineCell>, // 与 slot_labels 等长
}

/// 时间线矩阵
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineMatrix {
    pub slot_labels: Vec<String>, // "HH:MM" 槽位标签
    pub rows: Vec<TimelineRow>,   // 按 (生产线, 客户, 产品) 字典序
}

impl TimelineMatrix {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// TimelineBuilder - 槽位矩阵构建器
pub struct TimelineBuilder;

impl TimelineBuilder {
    pub fn new() -> Self {
        Self
    }

    /// 构建对象日的时间线矩阵
    ///
    /// # 行为
    /// - 仅保留「计划区间完整」或「至少一个实绩区间」的行
    /// - 以 (生产线, 客户, 产品) 分组, 缺失字段以 "N/A" 占位, 组按字典序
    /// - 每组两遍着色: 先计划, 后实绩 (实绩覆盖计划);
    ///   槽位开始 >= 该行计划结束时刻时记超时, 否则记计划内
    /// - 零长或逆序区间不着色
    /// - 无符合行时返回只有槽位列的空矩阵
    pub fn build(&self, records: &[MergedRecord], target_date: NaiveDate) -> TimelineMatrix {
        let slots = build_slots(target_date);
        let slot_labels: Vec<String> =
            slots.iter().map(|s| s.format("%H:%M").to_string()).collect();

        // 分组: BTreeMap 的键序即输出的字典序
        let mut groups: BTreeMap<(String, String, String), Vec<&MergedRecord>> = BTreeMap::new();
        for record in records {
            if !qualifies(record) {
                continue;
            }
            let key = (
                non_empty_or_sentinel(&record.line),
                non_empty_or_sentinel(&record.customer_name),
                non_empty_or_sentinel(&record.product_name),
            );
            groups.entry(key).or_default().push(record);
        }

        let mut rows = Vec::with_capacity(groups.len());
        for ((line, customer_name, product_name), members) in groups {
            let mut cells = vec![TimelineCell::Empty; slots.len()];

            // 第一遍: 计划区间
            for record in &members {
                if let (Some(start), Some(end)) = (record.planned_start, record.planned_end) {
                    mark_overlap(&mut cells, &slots, start, end, |_| TimelineCell::Planned);
                }
            }

            // 第二遍: 实绩区间 (覆盖计划)
            for record in &members {
                let planned_end = record.planned_end;
                for session in record.sessions() {
                    mark_overlap(&mut cells, &slots, session.start, session.end, |slot_start| {
                        match planned_end {
                            Some(end) if slot_start >= end => TimelineCell::ActualOverrun,
                            _ => TimelineCell::ActualWithinPlan,
                        }
                    });
                }
            }

            rows.push(TimelineRow {
                line,
                customer_name,
                product_name,
                cells,
            });
        }

        debug!(rows = rows.len(), slots = slot_labels.len(), "timeline built");
        TimelineMatrix { slot_labels, rows }
    }
}

impl Default for TimelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// 生成对象日的槽位开始时刻列表 (08:30, 08:45, ..., 17:00)
fn build_slots(target_date: NaiveDate) -> Vec<NaiveDateTime> {
    let start = target_date.and_time(
        NaiveTime::from_hms_opt(WINDOW_START.0, WINDOW_START.1, 0)
            .unwrap_or(NaiveTime::MIN),
    );
    let end = target_date.and_time(
        NaiveTime::from_hms_opt(WINDOW_END.0, WINDOW_END.1, 0).unwrap_or(NaiveTime::MIN),
    );

    let mut slots = Vec::new();
    let mut cursor = start;
    while cursor <= end {
        slots.push(cursor);
        cursor += Duration::minutes(SLOT_MINUTES);
    }
    slots
}

/// 行是否进入时间线: 计划区间完整, 或持有至少一个实绩区间
fn qualifies(record: &MergedRecord) -> bool {
    record.has_full_planned_interval() || !record.session_starts.is_empty()
}

fn non_empty_or_sentinel(value: &str) -> String {
    if value.is_empty() {
        MISSING_KEY.to_string()
    } else {
        value.to_string()
    }
}

/// 对与 [start, end) 相交的槽位着色
///
/// 相交判定: start < slot_end && end > slot_start (半开区间)。
/// 零长或逆序区间 (end <= start) 直接跳过。
fn mark_overlap(
    cells: &mut [TimelineCell],
    slots: &[NaiveDateTime],
    start: NaiveDateTime,
    end: NaiveDateTime,
    cell_of: impl Fn(NaiveDateTime) -> TimelineCell,
) {
    if end <= start {
        return;
    }
    for (i, slot_start) in slots.iter().enumerate() {
        let slot_end = *slot_start + Duration::minutes(SLOT_MINUTES);
        if start < slot_end && end > *slot_start {
            cells[i] = cell_of(*slot_start);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_grid_is_fixed_window() {
        let slots = build_slots(NaiveDate::from_ymd_opt(2026, 8, 7).unwrap());
        // 08:30..=17:00, 15 分钟一格: 35 格
        assert_eq!(slots.len(), 35);
        assert_eq!(slots[0].format("%H:%M").to_string(), "08:30");
        assert_eq!(slots[slots.len() - 1].format("%H:%M").to_string(), "17:00");
    }
}
