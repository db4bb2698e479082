//! 问题陈述提取

/// 从模型回复中提取编号为1到3的问题陈述
///
/// 仅接受整行形如`1. xxx`的单行条目，剥掉编号前缀后按出现顺序返回；
/// 换行折行或编号超出3的行被直接丢弃，不足3条时不做填充。
pub fn extract_problem_statements(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            ["1.", "2.", "3."]
                .iter()
                .find(|prefix| trimmed.starts_with(**prefix))
                .map(|prefix| trimmed[prefix.len()..].trim().to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_numbered_lines_in_order() {
        let text = "Here are the problems:\n1. X\n2. Y\n3. Z\nThanks!";
        assert_eq!(extract_problem_statements(text), vec!["X", "Y", "Z"]);
    }

    #[test]
    fn test_fewer_than_three_lines_no_padding() {
        let text = "1. Only one problem found";
        assert_eq!(
            extract_problem_statements(text),
            vec!["Only one problem found"]
        );
    }

    #[test]
    fn test_no_numbered_lines_yields_empty() {
        let text = "The market looks saturated.\n- bullet\n* another";
        assert!(extract_problem_statements(text).is_empty());
    }

    #[test]
    fn test_prefix_without_space_is_stripped() {
        assert_eq!(extract_problem_statements("1.X"), vec!["X"]);
    }

    #[test]
    fn test_indented_lines_are_accepted() {
        let text = "  1. Renters lack transparency\n\t2. Listings go stale";
        assert_eq!(
            extract_problem_statements(text),
            vec!["Renters lack transparency", "Listings go stale"]
        );
    }

    #[test]
    fn test_numbers_beyond_three_are_dropped() {
        let text = "1. A\n2. B\n3. C\n4. D";
        assert_eq!(extract_problem_statements(text), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_wrapped_continuation_lines_are_dropped() {
        let text = "1. A problem that\n   spills onto a second line\n2. B";
        assert_eq!(
            extract_problem_statements(text),
            vec!["A problem that", "B"]
        );
    }
}
