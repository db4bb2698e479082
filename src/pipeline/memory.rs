use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::pipeline::context::PipelineContext;

pub struct MemoryScope;

impl MemoryScope {
    pub const PIPELINE: &'static str = "pipeline";
}

/// 流水线工件的键名清单，按阶段产出的先后排列
pub struct ScopedKeys;

impl ScopedKeys {
    pub const ROUGH_IDEA: &'static str = "rough_idea";
    pub const REFINED_IDEAS: &'static str = "refined_ideas";
    pub const IDEA_NAMES: &'static str = "idea_names";
    pub const SELECTED_IDEA: &'static str = "selected_idea";
    pub const RESEARCH_REPORT: &'static str = "research_report";
    pub const PROBLEM_CANDIDATES: &'static str = "problem_candidates";
    pub const PROBLEMS: &'static str = "problems";
    pub const SELECTED_PROBLEM: &'static str = "selected_problem";
    pub const SOLUTION: &'static str = "solution";
    pub const DECK_PATH: &'static str = "deck_path";
    pub const MVP_PLAN: &'static str = "mvp_plan";
    pub const DOMAIN: &'static str = "domain";
    pub const INVESTORS: &'static str = "investors";
    pub const COLD_EMAILS: &'static str = "cold_emails";
}

pub trait ArtifactStore {
    async fn store_artifact<T>(&self, key: &str, data: T) -> Result<()>
    where
        T: Serialize + Send + Sync;

    async fn get_artifact<T>(&self, key: &str) -> Option<T>
    where
        T: for<'a> Deserialize<'a> + Send + Sync;

    async fn has_artifact(&self, key: &str) -> bool;
}

impl ArtifactStore for PipelineContext {
    /// 存储阶段工件
    async fn store_artifact<T>(&self, key: &str, data: T) -> Result<()>
    where
        T: Serialize + Send + Sync,
    {
        self.store_to_memory(MemoryScope::PIPELINE, key, data).await
    }

    /// 获取阶段工件
    async fn get_artifact<T>(&self, key: &str) -> Option<T>
    where
        T: for<'a> Deserialize<'a> + Send + Sync,
    {
        self.get_from_memory(MemoryScope::PIPELINE, key).await
    }

    /// 检查阶段工件是否已产出
    async fn has_artifact(&self, key: &str) -> bool {
        self.has_memory_data(MemoryScope::PIPELINE, key).await
    }
}
