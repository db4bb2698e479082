//! ReAct模式的配置与响应结构

use rig::completion::Message;

/// ReAct执行配置
#[derive(Debug, Clone)]
pub struct ReActConfig {
    /// 最大迭代次数（工具调用轮次上限）
    pub max_iterations: usize,

    /// 是否输出迭代过程日志
    pub verbose: bool,

    /// 达到最大迭代次数时是否返回部分结果（否则直接报错）
    pub return_partial_on_max_depth: bool,

    /// 达到最大迭代次数时是否启用总结推理fallover
    pub enable_summary_reasoning: bool,
}

impl Default for ReActConfig {
    fn default() -> Self {
        Self {
            max_iterations: 10,
            verbose: false,
            return_partial_on_max_depth: true,
            enable_summary_reasoning: true,
        }
    }
}

/// ReAct执行结果
#[derive(Debug, Clone)]
pub struct ReActResponse {
    /// 最终内容
    pub content: String,

    /// 是否因达到最大迭代次数而中断
    pub stopped_by_max_depth: bool,

    /// 实际使用的迭代次数上限
    pub iterations_used: usize,

    /// 工具调用记录（"tool_name(arguments)"形式）
    pub tool_calls_history: Vec<String>,

    /// 中断时保留的对话历史，供总结推理使用
    pub chat_history: Option<Vec<Message>>,
}

impl ReActResponse {
    /// 正常完成
    pub fn success(content: String, iterations_used: usize) -> Self {
        Self {
            content,
            stopped_by_max_depth: false,
            iterations_used,
            tool_calls_history: Vec::new(),
            chat_history: None,
        }
    }

    /// 因达到最大迭代次数中断，保留对话历史
    pub fn max_depth_reached_with_history(
        content: String,
        iterations_used: usize,
        tool_calls_history: Vec<String>,
        chat_history: Vec<Message>,
    ) -> Self {
        Self {
            content,
            stopped_by_max_depth: true,
            iterations_used,
            tool_calls_history,
            chat_history: Some(chat_history),
        }
    }

    /// 由总结推理生成的最终结果，保留原始的工具调用与对话记录
    pub fn from_summary_reasoning(
        content: String,
        iterations_used: usize,
        tool_calls_history: Vec<String>,
        chat_history: Vec<Message>,
    ) -> Self {
        Self {
            content,
            stopped_by_max_depth: true,
            iterations_used,
            tool_calls_history,
            chat_history: Some(chat_history),
        }
    }
}
