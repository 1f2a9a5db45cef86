// ==========================================
// 生产进度对账系统 - 生产实绩导入
// ==========================================
// 来源: 实绩导出工作簿 (production records)
// 列: line / customer / product / actualQuantity / date / editSessions
// editSessions: JSON 数组 [{"startTime":"HH:MM","endTime":"HH:MM"}, ...]
// ==========================================

use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Deserialize;
use tracing::{debug, info};

use crate::domain::record::{ActualRecord, ActualSession};
use crate::importer::error::ImportResult;
use crate::importer::file_parser::{parse_table, pick};

const LINE_HEADERS: &[&str] = &["line", "担当設備", "ライン"];
const CUSTOMER_HEADERS: &[&str] = &["customer", "お客様名"];
const PRODUCT_HEADERS: &[&str] = &["product", "商品名"];
const QUANTITY_HEADERS: &[&str] = &["actualQuantity", "実生産数"];
const DATE_HEADERS: &[&str] = &["date", "日付"];
const SESSIONS_HEADERS: &[&str] = &["editSessions"];

/// editSessions 内的单个区间
#[derive(Debug, Deserialize)]
struct SessionSpec {
    #[serde(rename = "startTime")]
    start_time: Option<String>,
    #[serde(rename = "endTime")]
    end_time: Option<String>,
}

/// 读取指定日期的生产实绩
///
/// # 行为
/// - 仅保留 date == target_date 的行
/// - editSessions 解析失败或缺失 -> 空区间列表 (不报错)
/// - 区间时刻为 "HH:MM", 锚定到记录日期
/// - 数量非数值 -> None
pub fn load_results(path: &Path, target_date: NaiveDate) -> ImportResult<Vec<ActualRecord>> {
    let rows = parse_table(path)?;

    let mut records = Vec::new();
    for row in &rows {
        let date = pick(row, DATE_HEADERS).and_then(parse_date);
        if date != Some(target_date) {
            continue;
        }

        let sessions = pick(row, SESSIONS_HEADERS)
            .map(|raw| parse_sessions(raw, target_date))
            .unwrap_or_default();

        records.push(ActualRecord {
            line: pick(row, LINE_HEADERS).unwrap_or("").to_string(),
            customer_name: pick(row, CUSTOMER_HEADERS).unwrap_or("").to_string(),
            product_name: pick(row, PRODUCT_HEADERS).unwrap_or("").to_string(),
            date: target_date,
            quantity: pick(row, QUANTITY_HEADERS).and_then(parse_quantity),
            sessions,
        });
    }

    info!(rows = records.len(), date = %target_date, "results loaded");
    Ok(records)
}

/// 解析 editSessions JSON; 任何解析失败都退化为空列表
fn parse_sessions(raw: &str, date: NaiveDate) -> Vec<ActualSession> {
    let specs: Vec<SessionSpec> = match serde_json::from_str(raw) {
        Ok(specs) => specs,
        Err(err) => {
            debug!(%err, "unparsable editSessions, treating as empty");
            return Vec::new();
        }
    };

    let mut sessions = Vec::new();
    for spec in specs {
        let (Some(start_raw), Some(end_raw)) = (spec.start_time, spec.end_time) else {
            continue;
        };
        let (Some(start), Some(end)) = (
            combine_date_time(date, &start_raw),
            combine_date_time(date, &end_raw),
        ) else {
            continue;
        };
        sessions.push(ActualSession::new(start, end));
    }
    sessions
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    for format in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Some(date);
        }
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y/%m/%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt.date());
        }
    }
    None
}

fn combine_date_time(date: NaiveDate, time: &str) -> Option<NaiveDateTime> {
    for format in ["%H:%M", "%H:%M:%S"] {
        if let Ok(t) = NaiveTime::parse_from_str(time.trim(), format) {
            return Some(date.and_time(t));
        }
    }
    None
}

fn parse_quantity(value: &str) -> Option<f64> {
    let cleaned = value.trim().replace(',', "");
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok()
}
