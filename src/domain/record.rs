// ==========================================
// 生产进度对账系统 - 记录实体
// ==========================================
// 计划/实绩/主数据/合并行的结构定义
// 红线: 合并行只是一次对账的快照, 不回写任何数据源
// ==========================================

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::types::ProgressStatus;

// ==========================================
// MasterCatalogEntry - 产品主数据行
// ==========================================
// 外部主数据表的一行; 对引擎只读
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MasterCatalogEntry {
    pub line: String,          // 生产线 (担当設備)
    pub customer_name: String, // 客户正式名称
    pub product_name: String,  // 产品正式名称
}

impl MasterCatalogEntry {
    pub fn new(line: &str, customer_name: &str, product_name: &str) -> Self {
        Self {
            line: line.to_string(),
            customer_name: customer_name.to_string(),
            product_name: product_name.to_string(),
        }
    }
}

// ==========================================
// PlanRecord - 生产计划行
// ==========================================
// 名称字段为人工录入原文; 清洗阶段命中主数据后被正式名称覆盖
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRecord {
    pub line: String,                          // 生产线
    pub customer_name: String,                 // 客户名 (原文或清洗后)
    pub product_name: String,                  // 产品名 (原文或清洗后)
    pub planned_start: Option<NaiveDateTime>,  // 计划开始时刻
    pub planned_end: Option<NaiveDateTime>,    // 计划结束时刻
    pub planned_quantity: Option<f64>,         // 计划数量 (非数值 -> None)
}

impl PlanRecord {
    /// 计划日期: 由计划开始时刻导出 (合并键的日期部分)
    pub fn plan_date(&self) -> Option<NaiveDate> {
        self.planned_start.map(|dt| dt.date())
    }

    /// 计划区间是否完整 (开始与结束均有值)
    pub fn has_full_interval(&self) -> bool {
        self.planned_start.is_some() && self.planned_end.is_some()
    }
}

// ==========================================
// ActualSession - 实绩作业区间
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActualSession {
    pub start: NaiveDateTime, // 区间开始
    pub end: NaiveDateTime,   // 区间结束
}

impl ActualSession {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// 区间时长 (分钟); 逆序区间返回 0
    pub fn duration_minutes(&self) -> f64 {
        let seconds = (self.end - self.start).num_seconds();
        if seconds <= 0 {
            0.0
        } else {
            seconds as f64 / 60.0
        }
    }
}

// ==========================================
// ActualRecord - 生产实绩行
// ==========================================
// 名称字段由上游整理, 合并时按键精确相等, 不做模糊评分
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActualRecord {
    pub line: String,                  // 生产线
    pub customer_name: String,         // 客户名
    pub product_name: String,          // 产品名
    pub date: NaiveDate,               // 实绩日期
    pub quantity: Option<f64>,         // 实绩数量 (非数值 -> None)
    pub sessions: Vec<ActualSession>,  // 作业区间列表 (顺序保留)
}

impl ActualRecord {
    /// 最早的区间开始时刻
    pub fn first_start(&self) -> Option<NaiveDateTime> {
        self.sessions.iter().map(|s| s.start).min()
    }

    /// 最晚的区间结束时刻
    pub fn last_end(&self) -> Option<NaiveDateTime> {
        self.sessions.iter().map(|s| s.end).max()
    }

    /// 全区间时长合计 (分钟)
    pub fn total_duration_minutes(&self) -> f64 {
        self.sessions.iter().map(|s| s.duration_minutes()).sum()
    }
}

// ==========================================
// RecordKey - 合并用复合键
// ==========================================
// (日期, 生产线, 客户名, 产品名); 计划侧要求名称已清洗
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordKey {
    pub date: NaiveDate,
    pub line: String,
    pub customer_name: String,
    pub product_name: String,
}

// ==========================================
// MergedRecord - 对账合并行
// ==========================================
// 计划侧字段 / 实绩侧字段均可空, 但不会同时全空 (此类行被丢弃)
// 派生字段由分类器填充
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedRecord {
    // ===== 识别字段 =====
    pub date: Option<NaiveDate>,              // 合并键日期 (计划侧由开始时刻导出)
    pub line: String,                         // 生产线
    pub customer_name: String,                // 客户名
    pub product_name: String,                 // 产品名

    // ===== 计划侧 =====
    pub planned_start: Option<NaiveDateTime>, // 计划开始时刻
    pub planned_end: Option<NaiveDateTime>,   // 计划结束时刻
    pub planned_quantity: Option<f64>,        // 计划数量

    // ===== 实绩侧 (按键聚合后) =====
    pub actual_start: Option<NaiveDateTime>,  // 聚合后最早开始
    pub actual_end: Option<NaiveDateTime>,    // 聚合后最晚结束
    pub actual_quantity: Option<f64>,         // 数量合计
    pub actual_duration_minutes: Option<f64>, // 作业时长合计 (分钟)
    pub session_starts: Vec<NaiveDateTime>,   // 各区间开始时刻 (来源顺序)
    pub session_ends: Vec<NaiveDateTime>,     // 各区间结束时刻 (来源顺序)

    // ===== 派生字段 (分类器填充) =====
    pub quantity_delta: Option<f64>,          // 实绩数量 - 计划数量
    pub duration_delta_minutes: Option<f64>,  // 实绩时长 - 计划时长 (分钟)
    pub status: Option<ProgressStatus>,       // 进度状态
}

impl MergedRecord {
    /// 是否持有计划数据 (以计划开始时刻存在为准)
    pub fn has_plan(&self) -> bool {
        self.planned_start.is_some()
    }

    /// 是否持有实绩开始
    pub fn has_actual_start(&self) -> bool {
        self.actual_start.is_some()
    }

    /// 是否持有实绩结束
    pub fn has_actual_end(&self) -> bool {
        self.actual_end.is_some()
    }

    /// 计划区间是否完整 (开始与结束均有值)
    pub fn has_full_planned_interval(&self) -> bool {
        self.planned_start.is_some() && self.planned_end.is_some()
    }

    /// 计划时长 (分钟); 区间不完整时为 None
    pub fn planned_duration_minutes(&self) -> Option<f64> {
        match (self.planned_start, self.planned_end) {
            (Some(start), Some(end)) => Some((end - start).num_seconds() as f64 / 60.0),
            _ => None,
        }
    }

    /// 实绩作业区间视图 (start/end 列表按序配对)
    pub fn sessions(&self) -> impl Iterator<Item = ActualSession> + '_ {
        self.session_starts
            .iter()
            .zip(self.session_ends.iter())
            .map(|(s, e)| ActualSession::new(*s, *e))
    }
}
