use anyhow::Result;
use async_trait::async_trait;

use crate::pipeline::context::PipelineContext;
use crate::pipeline::memory::{ArtifactStore, ScopedKeys};
use crate::pipeline::stage_agent::{LLMCallMode, PromptTemplate, StageAgent};
use crate::types::{ColdEmail, InvestorRecord};
use crate::utils::threads::do_parallel_with_limit;

/// 单封冷启动邮件的输入
pub struct ColdEmailInputs {
    pub idea: String,
    pub investor_name: String,
}

/// 冷启动邮件撰写员 - 为单个投资人起草一封外联邮件
///
/// 6行的篇幅上限只靠提示词约束，不做程序化裁剪。
#[derive(Default)]
pub struct ColdEmailWriter;

#[async_trait]
impl StageAgent for ColdEmailWriter {
    type Input = ColdEmailInputs;

    fn agent_type(&self) -> &'static str {
        "cold_email_writer"
    }

    fn artifact_key(&self) -> &'static str {
        ScopedKeys::COLD_EMAILS
    }

    fn prompt_template(&self) -> PromptTemplate {
        PromptTemplate {
            system_prompt: String::from("You are a startup founder writing to an investor."),
            llm_call_mode: LLMCallMode::Prompt,
        }
    }

    fn build_user_prompt(&self, inputs: &ColdEmailInputs) -> String {
        format!(
            r#"Startup Idea: {}
Investor Name: {}

Write a short and compelling cold email with:
- Warm intro line (not fake flattery)
- Clear pitch (1-2 lines)
- Call to action to connect or meet

Keep it under 6 lines.
"#,
            inputs.idea, inputs.investor_name
        )
    }

    /// 单封邮件不单独落库，批量结果由`write_for_investors`统一落库
    async fn execute(&self, context: &PipelineContext, input: &Self::Input) -> Result<String> {
        let template = self.prompt_template();
        let language_instruction = context.config.target_language.prompt_instruction();
        let system_prompt = format!("{}\n\n{}", template.system_prompt, language_instruction);

        let params = crate::pipeline::agent_executor::AgentExecuteParams {
            prompt_sys: system_prompt,
            prompt_user: self.build_user_prompt(input),
            cache_scope: self.agent_type().to_string(),
            log_tag: self.agent_type().to_string(),
        };

        let content = crate::pipeline::agent_executor::prompt(context, params).await?;
        Ok(content.trim().to_string())
    }
}

impl ColdEmailWriter {
    /// 为整组投资人并发起草邮件，结果顺序与投资人顺序一致
    ///
    /// 并发度由`llm.max_parallels`限定，任一封失败则整批失败。
    pub async fn write_for_investors(
        &self,
        context: &PipelineContext,
        idea: &str,
        investors: &[InvestorRecord],
    ) -> Result<Vec<ColdEmail>> {
        let futures: Vec<_> = investors
            .iter()
            .map(|investor| {
                let inputs = ColdEmailInputs {
                    idea: idea.to_string(),
                    investor_name: investor.name.clone(),
                };
                async move {
                    let email = self.execute(context, &inputs).await?;
                    Ok::<ColdEmail, anyhow::Error>(ColdEmail {
                        investor_name: inputs.investor_name,
                        email,
                    })
                }
            })
            .collect();

        let results =
            do_parallel_with_limit(futures, context.config.llm.max_parallels.max(1)).await;

        let emails = results.into_iter().collect::<Result<Vec<_>>>()?;
        context
            .store_artifact(ScopedKeys::COLD_EMAILS, &emails)
            .await?;
        Ok(emails)
    }
}
