//! LLM客户端 - 提供统一的LLM服务接口

use anyhow::Result;
use std::future::Future;

use crate::{config::Config, llm::client::utils::evaluate_befitting_model};

mod agent_builder;
mod providers;
mod react;
mod react_executor;
mod summary_reasoner;
pub mod types;
pub mod utils;

pub use react::{ReActConfig, ReActResponse};

use agent_builder::AgentBuilder;
use providers::ProviderClient;
use react_executor::ReActExecutor;
use summary_reasoner::SummaryReasoner;

/// LLM客户端 - 提供统一的LLM服务接口
#[derive(Clone)]
pub struct LLMClient {
    config: Config,
    client: ProviderClient,
}

impl LLMClient {
    /// 创建新的LLM客户端
    pub fn new(config: Config) -> Result<Self> {
        let client = ProviderClient::new(&config.llm)?;
        Ok(Self { client, config })
    }

    /// 检查模型连接和功能是否正常
    pub async fn check_connection(&self) -> Result<()> {
        println!("🔄 正在检查模型连接...");
        // 使用一个简单的prompt来测试连接
        match self
            .prompt_without_react("System: You are a helpful assistant.", "Hello")
            .await
        {
            Ok(_) => {
                println!("✅ 模型连接正常");
                Ok(())
            }
            Err(e) => {
                eprintln!("❌ 模型连接失败: {}", e);
                Err(e)
            }
        }
    }

    /// 获取Agent构建器
    fn get_agent_builder(&self) -> AgentBuilder<'_> {
        AgentBuilder::new(&self.client, &self.config)
    }

    /// 通用重试逻辑，用于处理异步操作的重试机制
    async fn retry_with_backoff<T, F, Fut>(&self, operation: F) -> Result<T>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, anyhow::Error>>,
    {
        let llm_config = &self.config.llm;
        let max_retries = llm_config.retry_attempts;
        let retry_delay_ms = llm_config.retry_delay_ms;
        let mut retries = 0;

        loop {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(err) => {
                    retries += 1;
                    eprintln!(
                        "❌ 调用模型服务出错，重试中 (第 {} / {}次尝试): {}",
                        retries, max_retries, err
                    );
                    if retries >= max_retries {
                        return Err(err);
                    }
                    tokio::time::sleep(std::time::Duration::from_millis(retry_delay_ms)).await;
                }
            }
        }
    }

    /// 在用户提示词后追加上一轮的错误信息，供备选模型规避
    fn fixer_prompt(user_prompt: &str, err: &anyhow::Error) -> String {
        format!(
            "{}\n\n**注意事项**此前我调用大模型过程时存在错误，错误信息为“{}”，你注意你这一次要规避这个错误",
            user_prompt, err
        )
    }

    /// 智能对话方法（使用默认ReAct配置，过程日志跟随全局verbose开关）
    pub async fn prompt(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        let react_config = ReActConfig {
            verbose: self.config.verbose,
            ..ReActConfig::default()
        };
        let response = self
            .prompt_with_react(system_prompt, user_prompt, react_config)
            .await?;
        Ok(response.content)
    }

    /// 使用ReAct模式进行多轮对话
    ///
    /// 提示词规模决定优先使用的模型；高能效模型重试耗尽后自动切换高质量模型兜底。
    pub async fn prompt_with_react(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        react_config: ReActConfig,
    ) -> Result<ReActResponse> {
        let (befitting_model, fallover_model) =
            evaluate_befitting_model(&self.config.llm, system_prompt, user_prompt);

        match self
            .react_with_model(&befitting_model, system_prompt, user_prompt, &react_config)
            .await
        {
            Ok(response) => Ok(response),
            Err(e) => match fallover_model {
                Some(ref model) => {
                    eprintln!(
                        "❌ 调用模型服务出错，尝试 {} 次均失败，尝试使用备选模型{}...{}",
                        self.config.llm.retry_attempts, model, e
                    );
                    let user_prompt_with_fixer = Self::fixer_prompt(user_prompt, &e);
                    self.react_with_model(
                        model,
                        system_prompt,
                        &user_prompt_with_fixer,
                        &react_config,
                    )
                    .await
                }
                None => {
                    eprintln!(
                        "❌ 调用模型服务出错，尝试 {} 次均失败...{}",
                        self.config.llm.retry_attempts, e
                    );
                    Err(e)
                }
            },
        }
    }

    /// 在指定模型上执行一轮完整的ReAct流程（含总结推理fallover）
    async fn react_with_model(
        &self,
        model: &str,
        system_prompt: &str,
        user_prompt: &str,
        react_config: &ReActConfig,
    ) -> Result<ReActResponse> {
        let agent_builder = self.get_agent_builder();
        let agent = agent_builder.build_agent_with_tools(model, system_prompt);

        let response = self
            .retry_with_backoff(|| async {
                ReActExecutor::execute(&agent, user_prompt, react_config).await
            })
            .await?;

        // 如果达到最大迭代次数且启用了总结推理，则尝试fallover
        if response.stopped_by_max_depth
            && react_config.enable_summary_reasoning
            && response.chat_history.is_some()
        {
            if react_config.verbose {
                println!("🔄 启动ReAct Agent总结转直接推理模式...");
            }

            match self
                .try_summary_reasoning(model, system_prompt, user_prompt, &response)
                .await
            {
                Ok(summary_response) => {
                    if react_config.verbose {
                        println!("✅ 总结推理完成");
                    }
                    return Ok(summary_response);
                }
                Err(e) => {
                    if react_config.verbose {
                        println!("⚠️  总结推理失败，返回原始部分结果...{}", e);
                    }
                    // 总结推理失败时，返回原始的部分结果
                }
            }
        }

        Ok(response)
    }

    /// 尝试总结推理fallover
    async fn try_summary_reasoning(
        &self,
        model: &str,
        system_prompt: &str,
        user_prompt: &str,
        original_response: &ReActResponse,
    ) -> Result<ReActResponse> {
        let agent_builder = self.get_agent_builder();
        let agent_without_tools = agent_builder.build_agent_without_tools(model, system_prompt);

        let chat_history = original_response
            .chat_history
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("缺少对话历史"))?;

        let summary_result = self
            .retry_with_backoff(|| async {
                SummaryReasoner::summarize_and_reason(
                    &agent_without_tools,
                    system_prompt,
                    user_prompt,
                    chat_history,
                    &original_response.tool_calls_history,
                )
                .await
            })
            .await?;

        Ok(ReActResponse::from_summary_reasoning(
            summary_result,
            original_response.iterations_used,
            original_response.tool_calls_history.clone(),
            chat_history.clone(),
        ))
    }

    /// 简化的单轮对话方法（不使用工具），同样带模型选择与兜底
    pub async fn prompt_without_react(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String> {
        let (befitting_model, fallover_model) =
            evaluate_befitting_model(&self.config.llm, system_prompt, user_prompt);

        match self
            .prompt_plain_with_model(&befitting_model, system_prompt, user_prompt)
            .await
        {
            Ok(result) => Ok(result),
            Err(e) => match fallover_model {
                Some(ref model) => {
                    eprintln!(
                        "❌ 调用模型服务出错，尝试 {} 次均失败，尝试使用备选模型{}...{}",
                        self.config.llm.retry_attempts, model, e
                    );
                    let user_prompt_with_fixer = Self::fixer_prompt(user_prompt, &e);
                    self.prompt_plain_with_model(model, system_prompt, &user_prompt_with_fixer)
                        .await
                }
                None => {
                    eprintln!(
                        "❌ 调用模型服务出错，尝试 {} 次均失败...{}",
                        self.config.llm.retry_attempts, e
                    );
                    Err(e)
                }
            },
        }
    }

    /// 在指定模型上执行单轮无工具对话
    async fn prompt_plain_with_model(
        &self,
        model: &str,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String> {
        let agent_builder = self.get_agent_builder();
        let agent = agent_builder.build_agent_without_tools(model, system_prompt);

        self.retry_with_backoff(|| async { agent.prompt(user_prompt).await })
            .await
    }
}
