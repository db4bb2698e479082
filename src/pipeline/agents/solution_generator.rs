use crate::pipeline::memory::ScopedKeys;
use crate::pipeline::stage_agent::{LLMCallMode, PromptTemplate, StageAgent};

/// 解决方案生成员 - 针对选定的问题陈述给出要点式方案，不做解析
#[derive(Default)]
pub struct SolutionGenerator;

impl StageAgent for SolutionGenerator {
    type Input = String;

    fn agent_type(&self) -> &'static str {
        "solution_generator"
    }

    fn artifact_key(&self) -> &'static str {
        ScopedKeys::SOLUTION
    }

    fn prompt_template(&self) -> PromptTemplate {
        PromptTemplate {
            system_prompt: String::from("You are a startup expert."),
            llm_call_mode: LLMCallMode::Prompt,
        }
    }

    fn build_user_prompt(&self, problem: &String) -> String {
        format!(
            r#"Based on the following problem statement, suggest a clear and innovative solution in 3-4 lines.

Problem:
{}

Respond in simple bullet points like:
- ...
- ...
"#,
            problem
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_prompt_embeds_problem() {
        let agent = SolutionGenerator;
        let prompt = agent.build_user_prompt(&"Renters lack transparency".to_string());
        assert!(prompt.contains("Renters lack transparency"));
        assert!(prompt.contains("bullet points"));
    }
}
