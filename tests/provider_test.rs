// ==========================================
// 数据提供者 集成测试
// ==========================================
// InMemoryProvider / FileProvider 经由 DataProvider 接口驱动对账


use std::fs;

use production_progress::config::AppConfig;
use production_progress::repository::{DataProvider, FileProvider, InMemoryProvider};
use production_progress::{AliasBook, ProgressStatus, ReconciliationPipeline};
use tempfile::TempDir;
use test_helpers::{actual, dt, entry, plan, target_date};

#[test]
fn test_in_memory_provider_feeds_pipeline() {
    let provider = InMemoryProvider {
        plans: vec![plan(
            "L1",
            "ＡＢＣ商事",
            "Widget-X",
            Some(dt(9, 0)),
            Some(dt(10, 0)),
            Some(100.0),
        )],
        actuals: vec![actual(
            "L1",
            "ABC商事",
            "Widget-X",
            Some(95.0),
            &[(dt(9, 10), dt(10, 20))],
        )],
        catalog: vec![entry("L1", "ABC商事", "Widget-X")],
        aliases: AliasBook::default(),
    };

    let plans = provider.load_plan(target_date()).unwrap();
    let actuals = provider.load_actuals(target_date()).unwrap();
    let catalog = provider.load_catalog().unwrap();
    let aliases = provider.load_aliases().unwrap();

    let rows = ReconciliationPipeline::new()
        .build_progress_table(&plans, &actuals, &catalog, &aliases, dt(12, 0));
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].status, Some(ProgressStatus::CompletedLate));
}

#[test]
fn test_in_memory_provider_filters_by_date() {
    let other_day = target_date().succ_opt().unwrap();
    let mut off_date = actual("L1", "甲社", "製品A", Some(1.0), &[]);
    off_date.date = other_day;

    let provider = InMemoryProvider {
        actuals: vec![off_date, actual("L1", "乙社", "製品B", Some(2.0), &[])],
        ..InMemoryProvider::default()
    };

    let actuals = provider.load_actuals(target_date()).unwrap();
    assert_eq!(actuals.len(), 1);
    assert_eq!(actuals[0].customer_name, "乙社");
}

#[test]
fn test_file_provider_loads_from_config_paths() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("production_plan.csv"),
        "日付,開始時間,終了時間,ライン,顧客名（型替え）,商品名（型の名前）,予定数量\n\
         2026-08-07,09:00,10:00,L1,ABC商事,Widget-X,100\n",
    )
    .unwrap();

    let config = AppConfig {
        data_dir: dir.path().to_path_buf(),
    };
    let provider = config.file_provider();

    let plans = provider.load_plan(target_date()).unwrap();
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].line, "L1");

    // 别名辞书文件缺失: 空辞书, 不是错误
    let aliases = provider.load_aliases().unwrap();
    assert!(aliases.is_empty());
}

#[test]
fn test_file_provider_unconfigured_source_is_error() {
    let provider = FileProvider {
        plan_path: None,
        results_path: None,
        catalog_path: None,
        alias_path: None,
    };
    assert!(provider.load_plan(target_date()).is_err());
    assert!(provider.load_catalog().is_err());
    // 别名未配置等同缺失: 空辞书
    assert!(provider.load_aliases().unwrap().is_empty());
}
