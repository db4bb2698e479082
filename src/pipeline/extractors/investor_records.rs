//! 投资人记录解析
//!
//! 模型被要求把搜索结果重排成JSON列表，但实际回复常夹杂解释性文字
//! 或代码围栏。解析按两级策略进行：优先取围栏内的列表，退而求其次
//! 在全文中找第一个对象列表；两级都失败时返回显式的失败原因。

use std::sync::LazyLock;

use regex::Regex;

use crate::types::InvestorRecord;

/// 围栏代码块中的列表，围栏语言标注可选
static FENCED_LIST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```(?:json)?\s*(\[.*?\])\s*```").expect("fenced list regex is valid")
});

/// 全文中第一个对象列表
static BARE_LIST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)(\[\s*\{.*?\}\s*\])").expect("bare list regex is valid"));

/// 投资人列表的解析结果
///
/// 空结果是否可以接受由调用方决定，解析器只负责报告成败与原因。
#[derive(Debug, Clone, PartialEq)]
pub enum InvestorParse {
    Parsed(Vec<InvestorRecord>),
    Failed(String),
}

impl InvestorParse {
    /// 失败退化为空列表，投融资阶段的默认姿态
    pub fn unwrap_or_empty(self) -> Vec<InvestorRecord> {
        match self {
            InvestorParse::Parsed(records) => records,
            InvestorParse::Failed(_) => Vec::new(),
        }
    }
}

/// 从模型回复中解析投资人记录列表
pub fn parse_investor_records(text: &str) -> InvestorParse {
    let candidate = FENCED_LIST
        .captures(text)
        .or_else(|| BARE_LIST.captures(text))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str());

    let Some(list_text) = candidate else {
        return InvestorParse::Failed(String::from("回复中未找到投资人列表"));
    };

    match serde_json::from_str::<Vec<InvestorRecord>>(list_text) {
        Ok(records) => InvestorParse::Parsed(records),
        Err(e) => InvestorParse::Failed(format!("投资人列表反序列化失败: {}", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fenced_json_block() {
        let text = "Here you go:\n```json\n[{\"name\":\"A\",\"intro\":\"B\",\"Website-link\":\"C\"}]\n```";
        let InvestorParse::Parsed(records) = parse_investor_records(text) else {
            panic!("expected parsed records");
        };
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "A");
        assert_eq!(records[0].intro, "B");
        assert_eq!(records[0].website_link, "C");
    }

    #[test]
    fn test_fence_without_language_tag() {
        let text = "```\n[{\"name\": \"Jane\", \"intro\": \"Seed investor\", \"link\": \"https://x.vc\"}]\n```";
        let InvestorParse::Parsed(records) = parse_investor_records(text) else {
            panic!("expected parsed records");
        };
        assert_eq!(records[0].website_link, "https://x.vc");
    }

    #[test]
    fn test_bare_list_fallback() {
        let text = "Sure, the investors are: [ {\"name\": \"Acme Fund\", \"intro\": \"FinTech\", \"Website-link\": \"https://acme.vc\"} ] hope it helps";
        let InvestorParse::Parsed(records) = parse_investor_records(text) else {
            panic!("expected parsed records");
        };
        assert_eq!(records[0].name, "Acme Fund");
    }

    #[test]
    fn test_no_bracketed_list_fails_without_panicking() {
        let result = parse_investor_records("I could not find any investors, sorry.");
        assert!(matches!(result, InvestorParse::Failed(_)));
        assert!(result.unwrap_or_empty().is_empty());
    }

    #[test]
    fn test_malformed_list_reports_reason() {
        let text = "```json\n[{'name': 'single quotes are not json'}]\n```";
        let InvestorParse::Failed(reason) = parse_investor_records(text) else {
            panic!("expected failure");
        };
        assert!(reason.contains("反序列化失败"));
    }

    #[test]
    fn test_empty_list_is_parsed_not_failed() {
        let text = "```json\n[]\n```";
        // 正则要求列表内至少有一个对象才能走全文兜底，但围栏分支放行空列表
        assert_eq!(
            parse_investor_records(text),
            InvestorParse::Parsed(Vec::new())
        );
    }

    #[test]
    fn test_multiple_records_with_contact() {
        let text = r#"[
            {"name": "Jane Doe", "intro": "EdTech angel", "Website-link": "https://linkedin.com/in/janedoe", "Contact": "jane@fund.vc"},
            {"name": "Acme Ventures", "intro": "Seed fund", "link": "https://acme.vc"}
        ]"#;
        let InvestorParse::Parsed(records) = parse_investor_records(text) else {
            panic!("expected parsed records");
        };
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].contact.as_deref(), Some("jane@fund.vc"));
        assert!(records[1].contact.is_none());
    }
}
