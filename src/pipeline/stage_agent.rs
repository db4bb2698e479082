use anyhow::Result;
use async_trait::async_trait;

use crate::pipeline::agent_executor::{self, AgentExecuteParams};
use crate::pipeline::context::PipelineContext;
use crate::pipeline::memory::ArtifactStore;

/// LLM调用方式配置
#[derive(Debug, Clone, PartialEq)]
pub enum LLMCallMode {
    /// 单轮对话，返回泛化推理文本
    Prompt,
    /// 带预置工具（网络搜索、当前时间）的ReAct对话
    PromptWithTools,
}

/// Prompt模板配置
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// 系统提示词
    pub system_prompt: String,
    /// LLM调用方式
    pub llm_call_mode: LLMCallMode,
}

/// 极简阶段Agent trait
///
/// 每个生成阶段只需声明提示词模板与用户提示词的拼装方式，
/// 执行流程（语言指令追加、缓存、模型调用、工件落库）全部标准化。
#[async_trait]
pub trait StageAgent: Send + Sync {
    /// 阶段的执行输入
    type Input: Send + Sync;

    /// Agent类型标识，同时作为缓存作用域
    fn agent_type(&self) -> &'static str;

    /// 产出工件在会话存储中的键名
    fn artifact_key(&self) -> &'static str;

    /// Prompt模板配置
    fn prompt_template(&self) -> PromptTemplate;

    /// 由输入拼装用户提示词
    fn build_user_prompt(&self, input: &Self::Input) -> String;

    /// 默认实现的execute方法：构建prompt → 调用LLM → 存储工件
    async fn execute(&self, context: &PipelineContext, input: &Self::Input) -> Result<String> {
        let template = self.prompt_template();

        // 根据配置的目标语言添加语言指令
        let language_instruction = context.config.target_language.prompt_instruction();
        let system_prompt = format!("{}\n\n{}", template.system_prompt, language_instruction);
        let user_prompt = self.build_user_prompt(input);

        let params = AgentExecuteParams {
            prompt_sys: system_prompt,
            prompt_user: user_prompt,
            cache_scope: self.agent_type().to_string(),
            log_tag: self.agent_type().to_string(),
        };

        let content = match template.llm_call_mode {
            LLMCallMode::Prompt => agent_executor::prompt(context, params).await?,
            LLMCallMode::PromptWithTools => {
                agent_executor::prompt_with_tools(context, params).await?
            }
        };

        let output = content.trim().to_string();
        context.store_artifact(self.artifact_key(), &output).await?;
        Ok(output)
    }
}
