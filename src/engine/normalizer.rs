// ==========================================
// 生产进度对账系统 - 名称归一化
// ==========================================
// 职责: 把人工录入的名称折叠成比较键 (全角→半角, 小写, 去记号)
// 红线: 输出仅用于比较, 不得用于展示
// ==========================================

use unicode_normalization::UnicodeNormalization;

/// 归一化时剔除的字符集合
///
/// 空白、连字符、逗号、句点、括号、方括号, 以及法人后缀「株式会社」的各字。
/// 全角变体先经 NFKC 折叠成半角, 因此无需单独列出。
const STRIP_CHARS: &[char] = &['-', ',', '.', '(', ')', '[', ']', '株', '式', '会', '社'];

/// 归一化名称
///
/// # 处理顺序
/// 1. NFKC 兼容折叠 (全角英数→半角, 兼容形→标准形)
/// 2. 统一小写
/// 3. 剔除空白与 STRIP_CHARS 中的字符
///
/// 纯函数, 幂等: `normalize(normalize(x)) == normalize(x)`
pub fn normalize(text: &str) -> String {
    text.nfkc()
        .collect::<String>()
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace() && !STRIP_CHARS.contains(c))
        .collect()
}
