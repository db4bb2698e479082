use crate::pipeline::memory::ScopedKeys;
use crate::pipeline::stage_agent::{LLMCallMode, PromptTemplate, StageAgent};

/// 行业提取员 - 用一个词归纳创意所属的行业领域
///
/// 提示词要求"一个词"，但结果按原样接受，不做校验。
#[derive(Default)]
pub struct DomainExtractor;

impl StageAgent for DomainExtractor {
    type Input = String;

    fn agent_type(&self) -> &'static str {
        "domain_extractor"
    }

    fn artifact_key(&self) -> &'static str {
        ScopedKeys::DOMAIN
    }

    fn prompt_template(&self) -> PromptTemplate {
        PromptTemplate {
            system_prompt: String::from("You are an investment analyst."),
            llm_call_mode: LLMCallMode::Prompt,
        }
    }

    fn build_user_prompt(&self, idea: &String) -> String {
        format!(
            "Given this startup idea: {}\nWhat is its main domain or industry in one word? E.g. EdTech, FinTech, HealthTech",
            idea
        )
    }
}
