// ==========================================
// 生产进度对账系统 - 产品主数据导入
// ==========================================
// 来源: 产品主数据工作簿 (Excel) 或 CSV 导出
// 表头兼容: お客様/お客様名 -> 客户, ライン/担当設備 -> 生产线
// ==========================================

use std::path::Path;

use tracing::info;

use crate::domain::record::MasterCatalogEntry;
use crate::importer::error::ImportResult;
use crate::importer::file_parser::{parse_table, pick};

const LINE_HEADERS: &[&str] = &["ライン", "担当設備", "line"];
const CUSTOMER_HEADERS: &[&str] = &["お客様", "お客様名", "customer"];
const PRODUCT_HEADERS: &[&str] = &["商品名", "product"];

/// 读取产品主数据
///
/// 三个识别列任一全空的行跳过 (主数据残行不进入候选)。
pub fn load_catalog(path: &Path) -> ImportResult<Vec<MasterCatalogEntry>> {
    let rows = parse_table(path)?;

    let mut entries = Vec::with_capacity(rows.len());
    for row in &rows {
        let line = pick(row, LINE_HEADERS).unwrap_or("");
        let customer = pick(row, CUSTOMER_HEADERS).unwrap_or("");
        let product = pick(row, PRODUCT_HEADERS).unwrap_or("");
        if line.is_empty() && customer.is_empty() && product.is_empty() {
            continue;
        }
        entries.push(MasterCatalogEntry::new(line, customer, product));
    }

    info!(entries = entries.len(), path = %path.display(), "catalog loaded");
    Ok(entries)
}
