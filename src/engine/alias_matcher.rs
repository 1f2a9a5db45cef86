// ==========================================
// 生产进度对账系统 - 别名匹配器
// ==========================================
// 职责: 把自由文本名称解析为辞书中的正式名称 + 置信度分数
// 红线: 分数域 [0,100]; 完全一致 >= 部分一致 > 无关
// ==========================================

use tracing::debug;

use crate::domain::alias::AliasEntry;
use crate::engine::normalizer::normalize;

/// 别名匹配结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasMatch {
    pub canonical: String, // 命中的正式名称
    pub score: u32,        // 置信度分数 [1,100]
}

/// 两个归一化字符串的一致度分数
///
/// - 任一为空: 0
/// - 完全一致: 100
/// - 一方为另一方的子串: 85 + floor(15 × (1 − |len差| / max(len)))
///   (长度越接近分数越高, 域为 [85,100])
/// - 其余: 0
///
/// 长度按字符数 (Unicode 标量值) 计。对称: score(a,b) == score(b,a)。
pub fn match_score(a: &str, b: &str) -> u32 {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    if a == b {
        return 100;
    }
    if a.contains(b) || b.contains(a) {
        let len_a = a.chars().count() as f64;
        let len_b = b.chars().count() as f64;
        let ratio = 1.0 - (len_a - len_b).abs() / len_a.max(len_b);
        return 85 + (15.0 * ratio).floor() as u32;
    }
    0
}

/// 在辞书单类别中查找最佳匹配
///
/// 将归一化后的 label 与每个正式名称本身及其全部别名逐一评分,
/// 取最高分; 同分保留先出现者 (条目顺序即裁决顺序)。
/// label 为空或辞书为空时返回 None。
pub fn find_best_match(label: &str, entries: &[AliasEntry]) -> Option<AliasMatch> {
    if label.is_empty() || entries.is_empty() {
        return None;
    }

    let normalized_label = normalize(label);

    let mut best: Option<AliasMatch> = None;
    let mut highest_score = 0;

    for entry in entries {
        // 与正式名称本身比较
        let score = match_score(&normalized_label, &normalize(&entry.canonical));
        if score > highest_score {
            highest_score = score;
            best = Some(AliasMatch {
                canonical: entry.canonical.clone(),
                score,
            });
        }

        // 与别名列表比较
        for alias in &entry.aliases {
            let score = match_score(&normalized_label, &normalize(alias));
            if score > highest_score {
                highest_score = score;
                best = Some(AliasMatch {
                    canonical: entry.canonical.clone(),
                    score,
                });
            }
        }
    }

    if let Some(ref m) = best {
        debug!(label, canonical = %m.canonical, score = m.score, "alias match");
    }
    best
}
