//! 缓存感知的LLM调用入口
//!
//! 所有阶段Agent统一经由这里发起模型调用：命中缓存则直接复用，
//! 否则调用LLM并将结果连同token估算写回缓存。

use anyhow::Result;

use crate::llm::client::ReActConfig;
use crate::llm::client::utils::{estimate_token_usage, evaluate_befitting_model};
use crate::pipeline::context::PipelineContext;

/// 单次Agent执行的参数
pub struct AgentExecuteParams {
    /// 系统提示词
    pub prompt_sys: String,
    /// 用户提示词
    pub prompt_user: String,
    /// 缓存作用域（对应缓存目录下的子目录）
    pub cache_scope: String,
    /// 日志标识
    pub log_tag: String,
}

/// 单轮无工具调用
pub async fn prompt(context: &PipelineContext, params: AgentExecuteParams) -> Result<String> {
    execute(context, params, false).await
}

/// 带预置工具的ReAct调用
pub async fn prompt_with_tools(
    context: &PipelineContext,
    params: AgentExecuteParams,
) -> Result<String> {
    execute(context, params, true).await
}

async fn execute(
    context: &PipelineContext,
    params: AgentExecuteParams,
    with_tools: bool,
) -> Result<String> {
    let cache_key = format!("{}\n{}", params.prompt_sys, params.prompt_user);

    // force_regenerate只绕过读取，生成结果仍会写回缓存
    if !context.config.force_regenerate {
        let cached: Option<String> = context
            .cache_manager
            .read()
            .await
            .get(&params.cache_scope, &cache_key)
            .await?;
        if let Some(content) = cached {
            if context.config.verbose {
                println!("   💾 {} 命中缓存，跳过模型调用", params.log_tag);
            }
            return Ok(content);
        }
    }

    let content = if with_tools {
        let react_config = ReActConfig {
            verbose: context.config.verbose,
            ..ReActConfig::default()
        };
        context
            .llm_client
            .prompt_with_react(&params.prompt_sys, &params.prompt_user, react_config)
            .await?
            .content
    } else {
        context
            .llm_client
            .prompt_without_react(&params.prompt_sys, &params.prompt_user)
            .await?
    };

    let (model_name, _) =
        evaluate_befitting_model(&context.config.llm, &params.prompt_sys, &params.prompt_user);
    let token_usage = estimate_token_usage(&cache_key, &content);
    context
        .cache_manager
        .read()
        .await
        .set_with_tokens(
            &params.cache_scope,
            &cache_key,
            content.clone(),
            token_usage,
            &model_name,
        )
        .await?;

    Ok(content)
}
