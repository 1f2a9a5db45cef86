// ==========================================
// 生产进度对账系统 - CLI 主入口
// ==========================================
// 用法: production-progress [YYYY-MM-DD]
// 职责: 读取落地文件 -> 执行对账 -> 打印进度表与时间线
// 红线: 仅做壳层; 全部逻辑在库内
// ==========================================

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};

use production_progress::config::AppConfig;
use production_progress::engine::TimelineBuilder;
use production_progress::repository::DataProvider;
use production_progress::{logging, MergedRecord, ReconciliationPipeline};

fn main() -> Result<()> {
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} v{}", production_progress::APP_NAME, production_progress::VERSION);
    tracing::info!("==================================================");

    // 对象日: 第一引数 (YYYY-MM-DD), 缺省为今天
    let target_date = match std::env::args().nth(1) {
        Some(arg) => NaiveDate::parse_from_str(&arg, "%Y-%m-%d")
            .with_context(|| format!("日付の形式が不正です (YYYY-MM-DD): {}", arg))?,
        None => Local::now().date_naive(),
    };
    let now = Local::now().naive_local();

    let config = AppConfig::from_env();
    tracing::info!("数据目录: {}", config.data_dir.display());
    let provider = config.file_provider();

    let plans = provider.load_plan(target_date)?;
    let actuals = provider.load_actuals(target_date)?;
    let catalog = provider.load_catalog()?;
    let aliases = provider.load_aliases()?;

    let pipeline = ReconciliationPipeline::new();
    let rows = pipeline.build_progress_table(&plans, &actuals, &catalog, &aliases, now);

    if rows.is_empty() {
        println!("{} 对象数据不存在", target_date);
        return Ok(());
    }

    print_progress_table(&rows);

    let timeline = TimelineBuilder::new().build(&rows, target_date);
    if !timeline.is_empty() {
        println!();
        print_timeline(&timeline);
    }

    Ok(())
}

fn print_progress_table(rows: &[MergedRecord]) {
    println!(
        "{:<20} {:<6} {:<16} {:<16} {:>8} {:>8} {:>8} {:>7} {:>7} {:>8}",
        "status", "line", "customer", "product", "plan_qty", "act_qty", "qty_dlt", "start", "end", "min_dlt"
    );
    for row in rows {
        println!(
            "{:<20} {:<6} {:<16} {:<16} {:>8} {:>8} {:>8} {:>7} {:>7} {:>8}",
            row.status.map(|s| s.to_string()).unwrap_or_default(),
            row.line,
            row.customer_name,
            row.product_name,
            fmt_qty(row.planned_quantity),
            fmt_qty(row.actual_quantity),
            fmt_delta(row.quantity_delta),
            fmt_time(row.planned_start),
            fmt_time(row.planned_end),
            fmt_delta(row.duration_delta_minutes),
        );
    }
}

fn print_timeline(timeline: &production_progress::TimelineMatrix) {
    println!("timeline ({} slots)", timeline.slot_labels.len());
    for row in &timeline.rows {
        let cells: String = row
            .cells
            .iter()
            .map(|cell| match cell.to_string().as_str() {
                "planned" => '░',
                "actual-within-plan" => '█',
                "actual-overrun" => '▓',
                _ => '·',
            })
            .collect();
        println!("{:<6} {:<16} {:<16} {}", row.line, row.customer_name, row.product_name, cells);
    }
}

fn fmt_qty(value: Option<f64>) -> String {
    value.map(|v| format!("{:.0}", v)).unwrap_or_else(|| "-".to_string())
}

fn fmt_delta(value: Option<f64>) -> String {
    value.map(|v| format!("{:+.0}", v)).unwrap_or_else(|| "-".to_string())
}

fn fmt_time(value: Option<chrono::NaiveDateTime>) -> String {
    value
        .map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}
