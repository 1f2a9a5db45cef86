// ==========================================
// 生产进度对账系统 - 别名辞书存取
// ==========================================
// 持久化格式: JSON (数组形式, 保持条目顺序)
// 红线: 辞书文件不存在不是错误, 按空辞书处理
// ==========================================

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::domain::alias::AliasBook;
use crate::repository::error::DataAccessResult;

/// 读取别名辞书; 文件不存在时返回空辞书
pub fn load_alias_book(path: &Path) -> DataAccessResult<AliasBook> {
    if !path.exists() {
        debug!(path = %path.display(), "alias file absent, using empty book");
        return Ok(AliasBook::default());
    }
    let raw = fs::read_to_string(path)?;
    let book: AliasBook = serde_json::from_str(&raw)?;
    info!(
        customers = book.customers.len(),
        products = book.products.len(),
        "alias book loaded"
    );
    Ok(book)
}

/// 保存别名辞书 (整形 JSON, 条目顺序保持)
pub fn save_alias_book(book: &AliasBook, path: &Path) -> DataAccessResult<()> {
    let raw = serde_json::to_string_pretty(book)?;
    fs::write(path, raw)?;
    info!(path = %path.display(), "alias book saved");
    Ok(())
}
