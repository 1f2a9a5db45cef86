// ==========================================
// 生产进度对账系统 - 别名辞书 CSV 往返
// ==========================================
// 职责: 把别名辞书导出为可人工编辑的 CSV, 编辑后再导入
// 列: category / canonical / alias (每别名一行; 无别名的正式名称占一行)
// 红线: 往返保持条目顺序 (顺序即匹配平局裁决顺序)
// ==========================================

use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use tracing::info;

use crate::domain::alias::{AliasBook, AliasEntry};
use crate::domain::types::NameCategory;
use crate::importer::error::{ImportError, ImportResult};

const HEADER: [&str; 3] = ["category", "canonical", "alias"];

/// 导出别名辞书为编辑用 CSV
pub fn export_alias_book(book: &AliasBook, path: &Path) -> ImportResult<()> {
    let file = File::create(path)?;
    let mut writer = WriterBuilder::new().from_writer(file);
    writer.write_record(HEADER)?;

    for (category, entries) in [
        (NameCategory::Customer, &book.customers),
        (NameCategory::Product, &book.products),
    ] {
        let category_label = category.to_string();
        for entry in entries {
            if entry.aliases.is_empty() {
                writer.write_record([category_label.as_str(), entry.canonical.as_str(), ""])?;
            } else {
                for alias in &entry.aliases {
                    writer.write_record([
                        category_label.as_str(),
                        entry.canonical.as_str(),
                        alias.as_str(),
                    ])?;
                }
            }
        }
    }
    writer.flush()?;

    info!(path = %path.display(), "alias book exported");
    Ok(())
}

/// 从编辑用 CSV 导入别名辞书
///
/// 行按文件顺序归组: 同一 (category, canonical) 的别名合并到同一条目,
/// 条目顺序 = 该正式名称首次出现的顺序。空 alias 单元不产生别名。
pub fn import_alias_book(path: &Path) -> ImportResult<AliasBook> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }

    let file = File::open(path)?;
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(file);

    let mut book = AliasBook::default();
    for result in reader.records() {
        let record = result?;
        let category = match record.get(0).map(str::trim) {
            Some("customer") => NameCategory::Customer,
            Some("product") => NameCategory::Product,
            Some(other) => {
                return Err(ImportError::CsvParseError(format!(
                    "未知类别: {}",
                    other
                )))
            }
            None => continue,
        };
        let canonical = record.get(1).map(str::trim).unwrap_or("");
        if canonical.is_empty() {
            continue;
        }
        let alias = record.get(2).map(str::trim).unwrap_or("");

        let entries = book.category_mut(category);
        let idx = match entries.iter().position(|e| e.canonical == canonical) {
            Some(idx) => idx,
            None => {
                entries.push(AliasEntry {
                    canonical: canonical.to_string(),
                    aliases: Vec::new(),
                });
                entries.len() - 1
            }
        };
        if !alias.is_empty() {
            entries[idx].aliases.push(alias.to_string());
        }
    }

    info!(
        customers = book.customers.len(),
        products = book.products.len(),
        "alias book imported"
    );
    Ok(book)
}
