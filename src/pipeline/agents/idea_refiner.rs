use crate::pipeline::memory::ScopedKeys;
use crate::pipeline::stage_agent::{LLMCallMode, PromptTemplate, StageAgent};

/// 创意精炼员 - 将用户的原始点子扩展为3个成熟的候选创意
///
/// 输出为固定Markdown格式，创意名称由解析层按`**Name**:`前缀提取。
#[derive(Default)]
pub struct IdeaRefiner;

impl StageAgent for IdeaRefiner {
    type Input = String;

    fn agent_type(&self) -> &'static str {
        "idea_refiner"
    }

    fn artifact_key(&self) -> &'static str {
        ScopedKeys::REFINED_IDEAS
    }

    fn prompt_template(&self) -> PromptTemplate {
        PromptTemplate {
            system_prompt: String::from("You are a startup idea generator."),
            llm_call_mode: LLMCallMode::Prompt,
        }
    }

    fn build_user_prompt(&self, rough_idea: &String) -> String {
        format!(
            r#"A user gave this rough startup idea: "{}"

Suggest 3 realistic, mature startup ideas with clear unique angles. Each idea should be 2-3 sentences max.

Format:
### Idea 1
**Name**: ...
**Description**: ...
**Unique Angle**: ...

### Idea 2
...
"#,
            rough_idea
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_prompt_embeds_rough_idea() {
        let agent = IdeaRefiner;
        let prompt = agent.build_user_prompt(&"an app for renters".to_string());
        assert!(prompt.contains("\"an app for renters\""));
        assert!(prompt.contains("**Name**: ..."));
    }

    #[test]
    fn test_agent_identity() {
        let agent = IdeaRefiner;
        assert_eq!(agent.agent_type(), "idea_refiner");
        assert_eq!(agent.artifact_key(), ScopedKeys::REFINED_IDEAS);
        assert_eq!(agent.prompt_template().llm_call_mode, LLMCallMode::Prompt);
    }
}
