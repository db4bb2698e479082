//! 网络搜索工具（Serper风格的搜索API）

use anyhow::{Context, Result};
use rig::tool::Tool;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::SearchConfig;

/// 网络搜索工具
///
/// 既作为ReAct Agent的预置工具使用，也可直接调用（投融资阶段的定向检索）。
#[derive(Debug, Clone)]
pub struct AgentToolWebSearch {
    config: SearchConfig,
}

/// 搜索参数
#[derive(Debug, Deserialize)]
pub struct WebSearchArgs {
    pub query: String,
    pub num_results: Option<usize>,
}

/// 单条搜索结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub snippet: String,
}

/// 搜索结果集
#[derive(Debug, Serialize, Default)]
pub struct WebSearchResult {
    pub query: String,
    pub hits: Vec<SearchHit>,
    pub total_count: usize,
}

/// 搜索API请求体
#[derive(Debug, Serialize)]
struct SearchApiRequest {
    q: String,
    num: usize,
}

/// 搜索API响应体（只关心organic部分）
#[derive(Debug, Deserialize)]
struct SearchApiResponse {
    #[serde(default)]
    organic: Vec<SearchHit>,
}

/// 搜索工具错误，错误信息会作为工具输出回流到ReAct循环中
#[derive(Debug, thiserror::Error)]
#[error("web search failed: {0}")]
pub struct WebSearchToolError(pub String);

impl AgentToolWebSearch {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// 执行搜索，返回结构化结果
    pub async fn search(&self, query: &str, num_results: usize) -> Result<Vec<SearchHit>> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(self.config.timeout_seconds))
            .build()
            .context("Failed to build HTTP client")?;

        let url = format!("{}/search", self.config.api_base_url.trim_end_matches('/'));
        let request = SearchApiRequest {
            q: query.to_string(),
            num: num_results,
        };

        let response = client
            .post(&url)
            .header("X-API-KEY", &self.config.api_key)
            .json(&request)
            .send()
            .await
            .context("Failed to send search request")?;

        if !response.status().is_success() {
            anyhow::bail!("搜索API返回异常状态: {}", response.status());
        }

        let parsed: SearchApiResponse = response
            .json()
            .await
            .context("Failed to parse search response")?;

        Ok(parsed.organic)
    }

    /// 执行搜索并将结果拼接为文本块，便于直接作为LLM的参考材料
    pub async fn search_as_text(&self, query: &str) -> Result<String> {
        let hits = self.search(query, self.config.max_results).await?;
        Ok(Self::format_hits(&hits))
    }

    fn format_hits(hits: &[SearchHit]) -> String {
        if hits.is_empty() {
            return String::from("No search results found.");
        }

        let mut text = String::new();
        for (index, hit) in hits.iter().enumerate() {
            text.push_str(&format!("{}. {}\n", index + 1, hit.title));
            if !hit.snippet.is_empty() {
                text.push_str(&format!("   {}\n", hit.snippet));
            }
            if !hit.link.is_empty() {
                text.push_str(&format!("   {}\n", hit.link));
            }
        }
        text
    }
}

impl Tool for AgentToolWebSearch {
    const NAME: &'static str = "web_search";

    type Error = WebSearchToolError;
    type Args = WebSearchArgs;
    type Output = WebSearchResult;

    async fn definition(&self, _prompt: String) -> rig::completion::ToolDefinition {
        rig::completion::ToolDefinition {
            name: Self::NAME.to_string(),
            description: "通过网络搜索获取实时信息，用于调研竞品、市场需求趋势与投资人信息。"
                .to_string(),
            parameters: serde_json::json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "搜索关键词。支持site:限定符，例如'site:linkedin.com/in'"
                    },
                    "num_results": {
                        "type": "integer",
                        "description": "返回结果条数上限（默认取配置值）"
                    }
                },
                "required": ["query"]
            }),
        }
    }

    async fn call(&self, args: Self::Args) -> Result<Self::Output, Self::Error> {
        println!("   🔧 tool called...web_search@{:?}", args);

        #[cfg(debug_assertions)]
        tokio::time::sleep(Duration::from_secs(2)).await;

        let num_results = args.num_results.unwrap_or(self.config.max_results);
        let hits = self
            .search(&args.query, num_results)
            .await
            .map_err(|e| WebSearchToolError(e.to_string()))?;

        Ok(WebSearchResult {
            query: args.query,
            total_count: hits.len(),
            hits,
        })
    }
}
