//! LLM调用的通用数据类型

use serde::{Deserialize, Serialize};

/// Token使用量统计
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TokenUsage {
    /// 输入token数量
    pub input_tokens: usize,
    /// 输出token数量
    pub output_tokens: usize,
}

impl TokenUsage {
    pub fn new(input_tokens: usize, output_tokens: usize) -> Self {
        Self {
            input_tokens,
            output_tokens,
        }
    }

    /// 总token数量
    pub fn total_tokens(&self) -> usize {
        self.input_tokens + self.output_tokens
    }

    /// 根据模型名称估算调用成本（美元）
    ///
    /// 价格为每百万token的粗略经验值，仅用于缓存收益报告，不作为计费依据。
    pub fn estimate_cost(&self, model_name: &str) -> f64 {
        let (input_price, output_price) = Self::price_per_million(model_name);
        let input_cost = self.input_tokens as f64 / 1_000_000.0 * input_price;
        let output_cost = self.output_tokens as f64 / 1_000_000.0 * output_price;
        input_cost + output_cost
    }

    /// (输入价格, 输出价格)，单位：美元/百万token
    fn price_per_million(model_name: &str) -> (f64, f64) {
        let name = model_name.to_lowercase();
        if name.contains("gpt-4") || name.contains("claude") {
            (3.0, 15.0)
        } else if name.contains("gemini") {
            (1.25, 5.0)
        } else if name.contains("deepseek") {
            (0.27, 1.1)
        } else if name.contains("kimi") || name.contains("moonshot") {
            (0.6, 2.5)
        } else if name.contains("qwen") {
            (0.4, 1.2)
        } else {
            // 未知模型按中档价格估算
            (0.5, 1.5)
        }
    }
}
