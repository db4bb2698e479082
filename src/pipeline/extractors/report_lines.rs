//! 调研报告的关键词行筛选
//!
//! 报告全程作为不透明文本传递，只有路演稿组装时用这两个启发式
//! 规则筛行。表格格式不符时结果为空，这是预期的静默退化。

/// 市场缺口页的行上限
const MARKET_GAP_LINE_CAP: usize = 10;

/// 竞品页的行上限
const COMPETITOR_LINE_CAP: usize = 5;

/// 筛出提及市场、缺口或需求的行，按出现顺序最多保留10行
pub fn market_gap_lines(report: &str) -> Vec<String> {
    report
        .lines()
        .filter(|line| {
            let lower = line.to_lowercase();
            lower.contains("market") || lower.contains("gap") || lower.contains("need")
        })
        .map(|line| line.trim().to_string())
        .take(MARKET_GAP_LINE_CAP)
        .collect()
}

/// 筛出疑似竞品表格行（含管道符且不是表格分隔行），按出现顺序最多保留5行
pub fn competitor_lines(report: &str) -> Vec<String> {
    report
        .lines()
        .filter(|line| line.contains('|') && !line.starts_with("|------"))
        .map(|line| line.trim().to_string())
        .take(COMPETITOR_LINE_CAP)
        .collect()
}
