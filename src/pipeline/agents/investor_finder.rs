//! 投资人检索员
//!
//! 唯一不走标准StageAgent流程的阶段：先按行业词做一次定向网络搜索，
//! 再让模型把原始搜索结果重排成JSON列表，最后由解析层提取记录。

use anyhow::Result;

use crate::llm::tools::web_search::AgentToolWebSearch;
use crate::pipeline::agent_executor::{self, AgentExecuteParams};
use crate::pipeline::context::PipelineContext;
use crate::pipeline::extractors::{InvestorParse, parse_investor_records};
use crate::pipeline::memory::{ArtifactStore, ScopedKeys};
use crate::types::InvestorRecord;

#[derive(Default)]
pub struct InvestorFinder;

impl InvestorFinder {
    /// 由行业词构造检索式，同一行业词永远得到同一检索式
    pub fn build_search_query(domain: &str) -> String {
        format!(
            "{} investor site:linkedin.com/in OR site:crunchbase.com/person",
            domain
        )
    }

    fn reformat_prompt(raw_results: &str) -> String {
        format!(
            r#"Extract up to 5 investor names with short intros and links from the following search result:

{}

Format:
[
    {{
        "name": "...",
        "intro": "...",
        "Website-link": "...",
        "Contact": "..."
    }},
    ...
]

Return valid JSON. Omit the "Contact" key when no contact information is available.
"#,
            raw_results
        )
    }

    /// 检索并解析投资人记录
    ///
    /// 解析失败打日志并退化为空列表；搜索本身失败则作为阶段错误上抛。
    pub async fn find(
        &self,
        context: &PipelineContext,
        domain: &str,
    ) -> Result<Vec<InvestorRecord>> {
        let query = Self::build_search_query(domain);
        println!("   🔍 检索投资人: {}", query);

        let search_tool = AgentToolWebSearch::new(context.config.search.clone());
        let raw_results = search_tool.search_as_text(&query).await?;

        let params = AgentExecuteParams {
            prompt_sys: String::from(
                "You reformat raw web search results into structured JSON data.",
            ),
            prompt_user: Self::reformat_prompt(&raw_results),
            cache_scope: String::from("investor_finder"),
            log_tag: String::from("investor_finder"),
        };
        let reply = agent_executor::prompt(context, params).await?;

        let records = match parse_investor_records(&reply) {
            InvestorParse::Parsed(records) => records,
            InvestorParse::Failed(reason) => {
                eprintln!("   ⚠️ 投资人列表解析失败: {}", reason);
                Vec::new()
            }
        };

        context
            .store_artifact(ScopedKeys::INVESTORS, &records)
            .await?;
        Ok(records)
    }
}
