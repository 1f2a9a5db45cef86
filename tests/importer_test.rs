// ==========================================
// 导入层 / 别名存取 集成测试
// ==========================================
// 使用 tempfile 生成落地文件


use std::fs;
use std::path::PathBuf;

use production_progress::importer::{
    export_alias_book, import_alias_book, load_catalog, load_plan, load_results, ImportError,
};
use production_progress::repository::{load_alias_book, save_alias_book};
use production_progress::{AliasBook, AliasEntry};
use tempfile::TempDir;
use test_helpers::{dt, target_date};

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write fixture");
    path
}

// ==========================================
// 计划 CSV
// ==========================================

#[test]
fn test_load_plan_filters_and_parses() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "plan.csv",
        "日付,開始時間,終了時間,ライン,顧客名（型替え）,商品名（型の名前）,予定数量\n\
         2026-08-07,09:00,10:00,L1,ＡＢＣ商事,Widget-X,100\n\
         2026-08-08,09:00,10:00,L1,別日の行,Widget-X,50\n\
         2026-08-07,,10:00,L1,開始なし,Widget-X,10\n\
         2026-08-07,13:00,14:00,L2,DEF工業,Gadget-Z,abc\n",
    );

    let plans = load_plan(&path, target_date()).unwrap();
    // 非对象日与缺开始时刻的行被剔除
    assert_eq!(plans.len(), 2);
    assert_eq!(plans[0].customer_name, "ＡＢＣ商事");
    assert_eq!(plans[0].planned_start, Some(dt(9, 0)));
    assert_eq!(plans[0].planned_end, Some(dt(10, 0)));
    assert_eq!(plans[0].planned_quantity, Some(100.0));
    // 数量非数值 -> None
    assert_eq!(plans[1].planned_quantity, None);
}

#[test]
fn test_load_plan_missing_file_is_error() {
    let result = load_plan(&PathBuf::from("/nonexistent/plan.csv"), target_date());
    assert!(matches!(result, Err(ImportError::FileNotFound(_))));
}

#[test]
fn test_unsupported_extension_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "plan.txt", "x");
    let result = load_plan(&path, target_date());
    assert!(matches!(result, Err(ImportError::UnsupportedFormat(_))));
}

// ==========================================
// 实绩 CSV (editSessions JSON)
// ==========================================

#[test]
fn test_load_results_parses_sessions() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "records.csv",
        "line,customer,product,actualQuantity,date,editSessions\n\
         L1,ABC商事,Widget-X,95,2026-08-07,\"[{\"\"startTime\"\":\"\"09:10\"\",\"\"endTime\"\":\"\"10:20\"\"}]\"\n\
         L2,DEF工業,Gadget-Z,10,2026-08-07,壊れたJSON\n\
         L1,別日,Widget-X,5,2026-08-06,\"[]\"\n",
    );

    let records = load_results(&path, target_date()).unwrap();
    assert_eq!(records.len(), 2);

    assert_eq!(records[0].sessions.len(), 1);
    assert_eq!(records[0].sessions[0].start, dt(9, 10));
    assert_eq!(records[0].sessions[0].end, dt(10, 20));
    assert_eq!(records[0].quantity, Some(95.0));

    // 解析失败的 editSessions 退化为空列表 (不报错)
    assert!(records[1].sessions.is_empty());
    assert_eq!(records[1].quantity, Some(10.0));
}

// ==========================================
// 产品主数据 CSV
// ==========================================

#[test]
fn test_load_catalog_maps_japanese_headers() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "master.csv",
        "ライン,お客様,商品名\n\
         L1,ABC商事,Widget-X\n\
         L2,DEF工業,Gadget-Z\n\
         ,,\n",
    );

    let catalog = load_catalog(&path).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog[0].line, "L1");
    assert_eq!(catalog[0].customer_name, "ABC商事");
    assert_eq!(catalog[1].product_name, "Gadget-Z");
}

// ==========================================
// 别名辞书 JSON 存取
// ==========================================

#[test]
fn test_alias_store_missing_file_is_empty_book() {
    let dir = TempDir::new().unwrap();
    let book = load_alias_book(&dir.path().join("absent.json")).unwrap();
    assert!(book.is_empty());
}

#[test]
fn test_alias_store_roundtrip_keeps_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("name_master.json");

    let book = AliasBook {
        customers: vec![
            AliasEntry::new("乙社", &["おつ", "OTSU"]),
            AliasEntry::new("甲社", &[]),
        ],
        products: vec![AliasEntry::new("Widget-X", &["WX"])],
    };
    save_alias_book(&book, &path).unwrap();

    let loaded = load_alias_book(&path).unwrap();
    assert_eq!(loaded, book);
    assert_eq!(loaded.customers[0].canonical, "乙社");
}

// ==========================================
// 别名辞书 CSV 往返
// ==========================================

#[test]
fn test_alias_csv_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("name_master_editor.csv");

    let book = AliasBook {
        customers: vec![
            AliasEntry::new("ABC商事", &["ＡＢＣ", "エービーシー"]),
            AliasEntry::new("別名なし社", &[]),
        ],
        products: vec![AliasEntry::new("Widget-X", &["WX"])],
    };

    export_alias_book(&book, &path).unwrap();
    let imported = import_alias_book(&path).unwrap();
    assert_eq!(imported, book);
}

#[test]
fn test_alias_csv_unknown_category_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "broken.csv",
        "category,canonical,alias\nmachine,X-1,\n",
    );
    let result = import_alias_book(&path);
    assert!(matches!(result, Err(ImportError::CsvParseError(_))));
}
