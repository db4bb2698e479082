//! 总结推理模块 - ReAct模式达到最大迭代次数时的fallover机制

use anyhow::Result;
use rig::completion::Message;

use super::providers::ProviderAgent;

/// 总结推理器
pub struct SummaryReasoner;

impl SummaryReasoner {
    /// 基于ReAct对话历史和工具调用记录进行总结推理
    pub async fn summarize_and_reason(
        agent_without_tools: &ProviderAgent,
        original_system_prompt: &str,
        original_user_prompt: &str,
        chat_history: &[Message],
        tool_calls_history: &[String],
    ) -> Result<String> {
        let summary_prompt = Self::build_summary_prompt(
            original_system_prompt,
            original_user_prompt,
            chat_history,
            tool_calls_history,
        );

        // 使用无工具的agent进行单轮推理
        let result = agent_without_tools.prompt(&summary_prompt).await?;

        Ok(result)
    }

    /// 构建总结推理的提示词
    fn build_summary_prompt(
        original_system_prompt: &str,
        original_user_prompt: &str,
        chat_history: &[Message],
        tool_calls_history: &[String],
    ) -> String {
        let mut prompt = String::new();

        prompt.push_str("# 原始任务背景\n");
        prompt.push_str(original_system_prompt);
        prompt.push_str("\n\n");

        prompt.push_str("# 原始用户问题\n");
        prompt.push_str(original_user_prompt);
        prompt.push_str("\n\n");

        if !tool_calls_history.is_empty() {
            prompt.push_str("# 已执行的工具调用记录\n");
            for (index, tool_call) in tool_calls_history.iter().enumerate() {
                prompt.push_str(&format!("{}. {}\n", index + 1, tool_call));
            }
            prompt.push('\n');
        }

        let conversation_details = Self::extract_detailed_conversation_info(chat_history);
        if !conversation_details.is_empty() {
            prompt.push_str("# 详细对话历史与工具结果\n");
            prompt.push_str(&conversation_details);
            prompt.push_str("\n\n");
        }

        prompt.push_str("# 总结推理任务\n");
        prompt.push_str("以上多轮推理过程因达到最大迭代次数而被截断。请你基于已有的上下文信息、网络搜索结果和对话历史，");
        prompt.push_str("对原始用户问题给出一个完整的、可直接交付的回答。\n\n");
        prompt.push_str("注意：\n");
        prompt.push_str("1. 只基于已获得的信息进行推理，不要虚构不存在的竞品、数据或人物\n");
        prompt.push_str("2. 如果已有信息不足以完整回答，请说明已知部分并指出缺口\n");
        prompt.push_str("3. 保持原始任务要求的输出格式不变\n");
        prompt.push_str("4. 充分利用已执行的搜索调用及其结果来形成答案\n");

        prompt
    }

    /// 提取详细的对话信息，包括工具调用与相应结果
    fn extract_detailed_conversation_info(chat_history: &[Message]) -> String {
        let mut details = String::new();

        for (index, message) in chat_history.iter().enumerate() {
            if index == 0 {
                // 第一条是原始user prompt，上面已经拼接过
                continue;
            }
            match message {
                Message::User { content } => {
                    details.push_str(&format!("## 用户输入 [轮次{}]\n", index + 1));
                    details.push_str(&format!("{:#?}\n\n", content));
                }
                Message::Assistant { content, .. } => {
                    details.push_str(&format!("## 助手响应 [轮次{}]\n", index + 1));

                    let mut has_content = false;

                    for item in content.iter() {
                        match item {
                            rig::completion::AssistantContent::Text(text) => {
                                if !text.text.is_empty() {
                                    details.push_str(&format!("**文本回复:** {}\n\n", text.text));
                                    has_content = true;
                                }
                            }
                            rig::completion::AssistantContent::ToolCall(tool_call) => {
                                details.push_str(&format!(
                                    "**工具调用:** `{}` \n参数: `{}`\n\n",
                                    tool_call.function.name, tool_call.function.arguments
                                ));
                                has_content = true;
                            }
                            rig::completion::AssistantContent::Reasoning(reasoning) => {
                                if !reasoning.reasoning.is_empty() {
                                    let reasoning_text = reasoning.reasoning.join("\n");
                                    details
                                        .push_str(&format!("**推理过程:** {}\n\n", reasoning_text));
                                    has_content = true;
                                }
                            }
                        }
                    }

                    if !has_content {
                        details.push_str("无具体内容\n\n");
                    }
                }
            }
        }

        details
    }
}
