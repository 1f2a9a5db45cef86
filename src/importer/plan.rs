// ==========================================
// 生产进度对账系统 - 生产计划导入
// ==========================================
// 来源: 计划表导出 CSV (抽取先シート)
// 列: 日付 / 開始時間 / 終了時間 / ライン / 顧客名（型替え）
//     / 商品名（型の名前）/ 予定数量
// ==========================================

use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tracing::info;

use crate::domain::record::PlanRecord;
use crate::importer::error::ImportResult;
use crate::importer::file_parser::{parse_table, pick};

const DATE_HEADERS: &[&str] = &["日付", "date"];
const START_HEADERS: &[&str] = &["開始時間", "start"];
const END_HEADERS: &[&str] = &["終了時間", "end"];
const LINE_HEADERS: &[&str] = &["ライン", "担当設備", "line"];
const CUSTOMER_HEADERS: &[&str] = &["顧客名（型替え）", "顧客名", "customer"];
const PRODUCT_HEADERS: &[&str] = &["商品名（型の名前）", "商品名", "product"];
const QUANTITY_HEADERS: &[&str] = &["予定数量", "予定数", "quantity"];

/// 读取指定日期的生产计划
///
/// # 行为
/// - 仅保留 日付 == target_date 的行
/// - 开始/结束时刻 = 日付 + 時間 (解析失败 -> None)
/// - 数量非数值 -> None (不报错)
/// - 无计划开始时刻的行剔除 (上游约定)
pub fn load_plan(path: &Path, target_date: NaiveDate) -> ImportResult<Vec<PlanRecord>> {
    let rows = parse_table(path)?;

    let mut plans = Vec::new();
    for row in &rows {
        let date = pick(row, DATE_HEADERS).and_then(parse_date);
        if date != Some(target_date) {
            continue;
        }

        let planned_start =
            pick(row, START_HEADERS).and_then(|t| combine_date_time(target_date, t));
        if planned_start.is_none() {
            continue;
        }
        let planned_end = pick(row, END_HEADERS).and_then(|t| combine_date_time(target_date, t));

        plans.push(PlanRecord {
            line: pick(row, LINE_HEADERS).unwrap_or("").to_string(),
            customer_name: pick(row, CUSTOMER_HEADERS).unwrap_or("").to_string(),
            product_name: pick(row, PRODUCT_HEADERS).unwrap_or("").to_string(),
            planned_start,
            planned_end,
            planned_quantity: pick(row, QUANTITY_HEADERS).and_then(parse_quantity),
        });
    }

    info!(rows = plans.len(), date = %target_date, "plan loaded");
    Ok(plans)
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    for format in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Some(date);
        }
    }
    // 带时刻的日期串 (例: 2026-08-07 00:00:00)
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
