//! Agent构建器 - 按需组装带工具或纯对话的Agent

use crate::config::Config;
use crate::llm::tools::web_search::AgentToolWebSearch;

use super::providers::{ProviderAgent, ProviderClient};

/// Agent构建器
pub struct AgentBuilder<'a> {
    client: &'a ProviderClient,
    config: &'a Config,
}

impl<'a> AgentBuilder<'a> {
    pub fn new(client: &'a ProviderClient, config: &'a Config) -> Self {
        Self { client, config }
    }

    /// 构建带预置工具的Agent
    ///
    /// disable_preset_tools开启时退化为纯对话Agent，调研阶段相应失去实时检索能力。
    pub fn build_agent_with_tools(&self, model: &str, system_prompt: &str) -> ProviderAgent {
        if self.config.llm.disable_preset_tools {
            return self.build_agent_without_tools(model, system_prompt);
        }

        let web_search = AgentToolWebSearch::new(self.config.search.clone());
        self.client
            .create_agent_with_tools(model, system_prompt, &self.config.llm, &web_search)
    }

    /// 构建无工具的Agent
    pub fn build_agent_without_tools(&self, model: &str, system_prompt: &str) -> ProviderAgent {
        self.client.create_agent(model, system_prompt, &self.config.llm)
    }
}
