use crate::pipeline::memory::ScopedKeys;
use crate::pipeline::stage_agent::{LLMCallMode, PromptTemplate, StageAgent};

/// 市场调研员 - 以带网络搜索的ReAct Agent产出结构化调研报告
///
/// 报告含固定的三个小节（竞品表格、市场需求、差异化缺口），产出后
/// 作为不透明文本流转，下游靠关键词筛行再加工。
#[derive(Default)]
pub struct MarketResearcher;

impl StageAgent for MarketResearcher {
    type Input = String;

    fn agent_type(&self) -> &'static str {
        "market_researcher"
    }

    fn artifact_key(&self) -> &'static str {
        ScopedKeys::RESEARCH_REPORT
    }

    fn prompt_template(&self) -> PromptTemplate {
        PromptTemplate {
            system_prompt: String::from(
                "You are a startup researcher. Use the web search tool to find competitors, market need, and trends for a startup idea before answering.",
            ),
            llm_call_mode: LLMCallMode::PromptWithTools,
        }
    }

    fn build_user_prompt(&self, idea: &String) -> String {
        format!(
            r#"Startup Idea: {}

Create a professional report in Markdown format including:

Project Summary according to the idea

### 🏢 Competitors

| Name | Description | Website |
|------|-------------|---------|
| ...  | ...         | ...     |

### 📈 Market Need

- Bullet points showing demand or trends
- Mention pain points in current solutions

### 💡 Unique Angle / Gap

- What is missing in the market?
- How can this idea fill the gap?

Keep it clean and structured.
"#,
            idea
        )
    }
}
