//! 精炼创意的名称与结构化字段提取

use crate::types::RefinedIdea;

const NAME_MARKER: &str = "**Name**";
const DESCRIPTION_MARKER: &str = "**Description**";
const UNIQUE_ANGLE_MARKER: &str = "**Unique Angle**";

/// 提取形如`**Name**: xxx`的行尾文本，标记后没有冒号时返回空
fn field_value(line: &str, marker: &str) -> Option<String> {
    let trimmed = line.trim();
    if !trimmed.starts_with(marker) {
        return None;
    }
    let rest = trimmed[marker.len()..].trim_start();
    let value = rest.strip_prefix(':').unwrap_or(rest);
    Some(value.trim().to_string())
}

/// 从精炼创意的Markdown中提取全部创意名称
///
/// 逐行扫描`**Name**:`前缀，不校验数量；模型未按格式输出时结果为空，
/// 是否致命由调用方判断。
pub fn extract_idea_names(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| field_value(line, NAME_MARKER))
        .filter(|name| !name.is_empty())
        .collect()
}

/// 将精炼创意的Markdown解析为结构化记录
///
/// 以`**Name**:`行作为一条创意的起点，随后出现的描述与差异化切入点
/// 归入该条；字段缺失时保留空串。
pub fn parse_refined_ideas(text: &str) -> Vec<RefinedIdea> {
    let mut ideas: Vec<RefinedIdea> = Vec::new();

    for line in text.lines() {
        if let Some(name) = field_value(line, NAME_MARKER) {
            if !name.is_empty() {
                ideas.push(RefinedIdea {
                    name,
                    description: String::new(),
                    unique_angle: String::new(),
                });
            }
            continue;
        }

        let Some(current) = ideas.last_mut() else {
            continue;
        };
        if let Some(description) = field_value(line, DESCRIPTION_MARKER) {
            current.description = description;
        } else if let Some(unique_angle) = field_value(line, UNIQUE_ANGLE_MARKER) {
            current.unique_angle = unique_angle;
        }
    }

    ideas
}
