use crate::pipeline::memory::ScopedKeys;
use crate::pipeline::stage_agent::{LLMCallMode, PromptTemplate, StageAgent};

/// 问题陈述生成员 - 从调研报告中归纳至多3条可创业的问题陈述
///
/// 产出为编号列表原文，结构化提取交给`extract_problem_statements`。
#[derive(Default)]
pub struct ProblemGenerator;

impl StageAgent for ProblemGenerator {
    type Input = String;

    fn agent_type(&self) -> &'static str {
        "problem_generator"
    }

    fn artifact_key(&self) -> &'static str {
        ScopedKeys::PROBLEM_CANDIDATES
    }

    fn prompt_template(&self) -> PromptTemplate {
        PromptTemplate {
            system_prompt: String::from("You are a startup consultant."),
            llm_call_mode: LLMCallMode::Prompt,
        }
    }

    fn build_user_prompt(&self, report: &String) -> String {
        format!(
            r#"Based on the following market research report, generate 3 clear and concise problem statements that highlight real market pain points:

Market Research Report:
-------------------------
{}

Each problem should be:
- One to two sentences max
- Focused on gaps or challenges users face
- Actionable and startup-worthy

Format:
1. ...
2. ...
3. ...
"#,
            report
        )
    }
}
