use crate::pipeline::memory::ScopedKeys;
use crate::pipeline::stage_agent::{LLMCallMode, PromptTemplate, StageAgent};

/// MVP计划的输入集合
pub struct MvpInputs {
    pub startup_name: String,
    pub problem: String,
    pub solution: String,
    pub report: String,
}

/// MVP规划员 - 生成固定小节结构的MVP实施计划，结果原样返回
#[derive(Default)]
pub struct MvpPlanner;

impl StageAgent for MvpPlanner {
    type Input = MvpInputs;

    fn agent_type(&self) -> &'static str {
        "mvp_planner"
    }

    fn artifact_key(&self) -> &'static str {
        ScopedKeys::MVP_PLAN
    }

    fn prompt_template(&self) -> PromptTemplate {
        PromptTemplate {
            system_prompt: String::from("You are a technical cofounder."),
            llm_call_mode: LLMCallMode::Prompt,
        }
    }

    fn build_user_prompt(&self, inputs: &MvpInputs) -> String {
        format!(
            r#"Based on the following startup idea, generate a complete MVP plan.

Startup Name: {}
Problem: {}
Solution: {}
Report: {}

Return the plan in the following format in markdown:
### ✅ MVP Feature Plan
- List 4-5 key features in V1

### 🛠 Tech Stack
- Frontend:
- Backend:
- Database:
- ML/AI (if needed):
- APIs/3rd party services:

### 📆 Timeline (8-12 weeks)
| Week | Task |
|------|------|
| 1-2  | ...  |
| 3-4  | ...  |
...

### 👥 Team / Resources Needed
- Roles required with brief responsibility

### 🧱 Architecture Diagram (Text-based)
- Describe system components and how they interact
"#,
            inputs.startup_name, inputs.problem, inputs.solution, inputs.report
        )
    }
}
