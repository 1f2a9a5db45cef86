// ==========================================
// 生产进度对账系统 - 进度分类器
// ==========================================
// 职责: 计算数量/时长差异, 并为每条合并行判定进度状态
// 红线: (record, now) 的纯全函数; now 注入, 不读系统时钟
// ==========================================

use chrono::NaiveDateTime;

use crate::domain::record::MergedRecord;
use crate::domain::types::ProgressStatus;

/// ProgressClassifier - 进度状态分类器
pub struct ProgressClassifier;

impl ProgressClassifier {
    pub fn new() -> Self {
        Self
    }

    /// 为全部合并行补齐差异与状态字段
    ///
    /// 返回新副本; 同一 (records, now) 必然产出同一结果。
    pub fn classify(&self, records: &[MergedRecord], now: NaiveDateTime) -> Vec<MergedRecord> {
        records
            .iter()
            .map(|record| self.classify_one(record, now))
            .collect()
    }

    fn classify_one(&self, record: &MergedRecord, now: NaiveDateTime) -> MergedRecord {
        let mut row = record.clone();

        // 数量差异: 缺失按 0 计
        row.quantity_delta =
            Some(row.actual_quantity.unwrap_or(0.0) - row.planned_quantity.unwrap_or(0.0));

        // 时长差异: 计划区间不完整时计划时长按 0 计
        let planned_duration = row.planned_duration_minutes().unwrap_or(0.0);
        row.duration_delta_minutes =
            Some(row.actual_duration_minutes.unwrap_or(0.0) - planned_duration);

        row.status = Some(status_of(&row, now));
        row
    }
}

impl Default for ProgressClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// 单行进度状态判定
///
/// 计划结束时刻缺失时视为「未超期」(对应缺失时刻不参与比较的语义)。
/// 终态 (completed / completed-late / unplanned) 不随 now 推移改变。
fn status_of(record: &MergedRecord, now: NaiveDateTime) -> ProgressStatus {
    let past_planned_end = record.planned_end.map(|end| now > end).unwrap_or(false);

    match (record.has_plan(), record.has_actual_start()) {
        // 有计划, 无实绩
        (true, false) => {
            if past_planned_end {
                ProgressStatus::DelayedNotStarted
            } else {
                ProgressStatus::NotStarted
            }
        }
        // 有计划, 有实绩
        (true, true) => match record.actual_end {
            None => {
                if past_planned_end {
                    ProgressStatus::DelayedInProgress
                } else {
                    ProgressStatus::InProgress
                }
            }
            Some(actual_end) => {
                let late = record
                    .planned_end
                    .map(|planned_end| actual_end > planned_end)
                    .unwrap_or(false);
                if late {
                    ProgressStatus::CompletedLate
                } else {
                    ProgressStatus::Completed
                }
            }
        },
        // 无计划, 有实绩
        (false, true) => ProgressStatus::Unplanned,
        // 无计划, 无实绩 (仅主数据痕迹)
        (false, false) => ProgressStatus::None,
    }
}
