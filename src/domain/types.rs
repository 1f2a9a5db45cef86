// ==========================================
// 生产进度对账系统 - 领域类型定义
// ==========================================
// 序列化格式: kebab-case (与展示层数据契约一致)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 进度状态 (Progress Status)
// ==========================================
// 由分类器根据 (计划, 实绩, now) 推导; 是 (record, now) 的纯函数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProgressStatus {
    NotStarted,        // 有计划, 无实绩, 未超期
    DelayedNotStarted, // 有计划, 无实绩, 已超计划结束时刻
    InProgress,        // 有计划, 实绩进行中, 未超期
    DelayedInProgress, // 有计划, 实绩进行中, 已超计划结束时刻
    Completed,         // 实绩结束 <= 计划结束
    CompletedLate,     // 实绩结束 > 计划结束
    Unplanned,         // 无计划, 有实绩
    None,              // 无计划, 无实绩 (仅主数据痕迹)
}

impl ProgressStatus {
    /// 判断是否为终态 (now 推移不再改变)
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ProgressStatus::Completed | ProgressStatus::CompletedLate | ProgressStatus::Unplanned
        )
    }
}

impl fmt::Display for ProgressStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProgressStatus::NotStarted => "not-started",
            ProgressStatus::DelayedNotStarted => "delayed-not-started",
            ProgressStatus::InProgress => "in-progress",
            ProgressStatus::DelayedInProgress => "delayed-in-progress",
            ProgressStatus::Completed => "completed",
            ProgressStatus::CompletedLate => "completed-late",
            ProgressStatus::Unplanned => "unplanned",
            ProgressStatus::None => "none",
        };
        write!(f, "{}", label)
    }
}

// ==========================================
// 时间线单元格 (Timeline Cell)
// ==========================================
// 空字符串序列化: 展示层以空单元格渲染
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimelineCell {
    #[default]
    #[serde(rename = "")]
    Empty,
    #[serde(rename = "planned")]
    Planned,
    #[serde(rename = "actual-within-plan")]
    ActualWithinPlan,
    #[serde(rename = "actual-overrun")]
    ActualOverrun,
}

impl fmt::Display for TimelineCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TimelineCell::Empty => "",
            TimelineCell::Planned => "planned",
            TimelineCell::ActualWithinPlan => "actual-within-plan",
            TimelineCell::ActualOverrun => "actual-overrun",
        };
        write!(f, "{}", label)
    }
}

// ==========================================
// 名称类别 (Name Category)
// ==========================================
// 别名辞书的两个类别: 客户名 / 产品名
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameCategory {
    Customer,
    Product,
}

impl fmt::Display for NameCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameCategory::Customer => write!(f, "customer"),
            NameCategory::Product => write!(f, "product"),
        }
    }
}
