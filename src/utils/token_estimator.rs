/// Token估算器，用于估算文本的token数量
pub struct TokenEstimator {
    rules: TokenCalculationRules,
}

/// Token计算规则
#[derive(Debug, Clone)]
pub struct TokenCalculationRules {
    /// 英文字符的平均token比例（字符数/token数）
    pub english_char_per_token: f64,
    /// 中文字符的平均token比例
    pub chinese_char_per_token: f64,
    /// 基础token开销（系统prompt等）
    pub base_token_overhead: usize,
}

impl Default for TokenCalculationRules {
    fn default() -> Self {
        Self {
            // 基于GPT系列模型的经验值
            english_char_per_token: 4.0,
            chinese_char_per_token: 1.5,
            base_token_overhead: 50,
        }
    }
}

/// Token估算结果
#[derive(Debug, Clone)]
pub struct TokenEstimation {
    /// 估算的token数量
    pub estimated_tokens: usize,
    /// 文本字符数
    #[allow(dead_code)]
    pub character_count: usize,
    /// 中文字符数
    #[allow(dead_code)]
    pub chinese_char_count: usize,
    /// 英文字符数
    #[allow(dead_code)]
    pub english_char_count: usize,
}

impl Default for TokenEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenEstimator {
    pub fn new() -> Self {
        Self {
            rules: TokenCalculationRules::default(),
        }
    }

    /// 估算文本的token数量
    pub fn estimate_tokens(&self, text: &str) -> TokenEstimation {
        let character_count = text.chars().count();
        let chinese_char_count = self.count_chinese_chars(text);
        let english_char_count = self.count_english_chars(text);
        let other_char_count = character_count - chinese_char_count - english_char_count;

        let chinese_tokens =
            (chinese_char_count as f64 / self.rules.chinese_char_per_token).ceil() as usize;
        let english_tokens =
            (english_char_count as f64 / self.rules.english_char_per_token).ceil() as usize;
        // 其他字符按英文规则计算
        let other_tokens = if other_char_count > 0 {
            (other_char_count as f64 / self.rules.english_char_per_token).ceil() as usize
        } else {
            0
        };

        let estimated_tokens =
            chinese_tokens + english_tokens + other_tokens + self.rules.base_token_overhead;

        TokenEstimation {
            estimated_tokens,
            character_count,
            chinese_char_count,
            english_char_count,
        }
    }

    /// 计算中文字符数量
    fn count_chinese_chars(&self, text: &str) -> usize {
        text.chars().filter(|c| self.is_chinese_char(*c)).count()
    }

    /// 计算英文字符数量
    fn count_english_chars(&self, text: &str) -> usize {
        text.chars()
            .filter(|c| {
                c.is_ascii_alphabetic()
                    || c.is_ascii_whitespace()
                    || c.is_ascii_digit()
                    || c.is_ascii_punctuation()
            })
            .count()
    }

    /// 判断是否为中文字符
    fn is_chinese_char(&self, c: char) -> bool {
        matches!(c as u32,
            0x4E00..=0x9FFF |  // CJK统一汉字
            0x3400..=0x4DBF |  // CJK扩展A
            0x20000..=0x2A6DF | // CJK扩展B
            0x2A700..=0x2B73F | // CJK扩展C
            0x2B740..=0x2B81F | // CJK扩展D
            0x2B820..=0x2CEAF | // CJK扩展E
            0x2CEB0..=0x2EBEF | // CJK扩展F
            0x30000..=0x3134F   // CJK扩展G
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_text_estimation() {
        let estimator = TokenEstimator::new();
        let estimation = estimator.estimate_tokens("A four-word test sentence.");

        assert_eq!(estimation.chinese_char_count, 0);
        assert_eq!(estimation.character_count, 26);
        // 26个英文字符按4字符/token计算，加上基础开销
        assert_eq!(estimation.estimated_tokens, 7 + 50);
    }

    #[test]
    fn test_chinese_text_estimation() {
        let estimator = TokenEstimator::new();
        let estimation = estimator.estimate_tokens("创业点子");

        assert_eq!(estimation.chinese_char_count, 4);
        assert_eq!(estimation.english_char_count, 0);
        // 4个中文字符按1.5字符/token计算（向上取整）
        assert_eq!(estimation.estimated_tokens, 3 + 50);
    }

    #[test]
    fn test_empty_text_only_has_overhead() {
        let estimator = TokenEstimator::new();
        let estimation = estimator.estimate_tokens("");
        assert_eq!(estimation.estimated_tokens, 50);
    }
}
