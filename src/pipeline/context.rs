use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::{cache::CacheManager, config::Config, llm::client::LLMClient, memory::Memory};

#[derive(Clone)]
pub struct PipelineContext {
    /// LLM调用器，用于与AI通信。
    pub llm_client: LLMClient,
    /// 配置
    pub config: Config,
    /// 缓存管理器
    pub cache_manager: Arc<RwLock<CacheManager>>,
    /// 会话工件存储
    pub memory: Arc<RwLock<Memory>>,
    /// 会话标识，fork出的子会话各自独立
    pub session_id: String,
}

impl PipelineContext {
    /// 创建新的流水线上下文
    pub fn new(config: Config) -> Result<Self> {
        let llm_client = LLMClient::new(config.clone())?;
        let cache_manager = Arc::new(RwLock::new(CacheManager::new(config.cache.clone())));
        let memory = Arc::new(RwLock::new(Memory::new()));

        Ok(Self {
            llm_client,
            config,
            cache_manager,
            memory,
            session_id: uuid::Uuid::new_v4().to_string(),
        })
    }

    /// 派生一个新会话：共享LLM客户端、配置与缓存，但工件存储相互隔离。
    /// HTTP API的每个请求用它来做无状态处理
    pub fn fork_session(&self) -> Self {
        Self {
            llm_client: self.llm_client.clone(),
            config: self.config.clone(),
            cache_manager: self.cache_manager.clone(),
            memory: Arc::new(RwLock::new(Memory::new())),
            session_id: uuid::Uuid::new_v4().to_string(),
        }
    }

    /// 存储数据到 Memory
    pub async fn store_to_memory<T>(&self, scope: &str, key: &str, data: T) -> Result<()>
    where
        T: Serialize + Send + Sync,
    {
        let mut memory = self.memory.write().await;
        memory.store(scope, key, data)
    }

    /// 从 Memory 获取数据
    pub async fn get_from_memory<T>(&self, scope: &str, key: &str) -> Option<T>
    where
        T: for<'a> Deserialize<'a> + Send + Sync,
    {
        let mut memory = self.memory.write().await;
        memory.get(scope, key)
    }

    /// 检查Memory中是否存在指定数据
    pub async fn has_memory_data(&self, scope: &str, key: &str) -> bool {
        let memory = self.memory.read().await;
        memory.has_data(scope, key)
    }

    /// 获取作用域内的所有数据键
    pub async fn list_memory_keys(&self, scope: &str) -> Vec<String> {
        let memory = self.memory.read().await;
        memory.list_keys(scope)
    }

    /// 获取Memory使用统计
    pub async fn get_memory_stats(&self) -> HashMap<String, usize> {
        let memory = self.memory.read().await;
        memory.get_usage_stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::memory::{ArtifactStore, ScopedKeys};

    fn test_context() -> PipelineContext {
        let config = Config {
            cache: crate::config::CacheConfig {
                enabled: false,
                ..Default::default()
            },
            ..Default::default()
        };
        PipelineContext::new(config).unwrap()
    }

    #[tokio::test]
    async fn test_artifact_roundtrip() {
        let context = test_context();
        context
            .store_artifact(ScopedKeys::SOLUTION, "bullet text".to_string())
            .await
            .unwrap();

        assert!(context.has_artifact(ScopedKeys::SOLUTION).await);
        let solution: Option<String> = context.get_artifact(ScopedKeys::SOLUTION).await;
        assert_eq!(solution, Some("bullet text".to_string()));
    }

    #[tokio::test]
    async fn test_fork_session_isolates_memory() {
        let context = test_context();
        context
            .store_artifact(ScopedKeys::SELECTED_IDEA, "NestFinder".to_string())
            .await
            .unwrap();

        let forked = context.fork_session();
        assert_ne!(forked.session_id, context.session_id);
        assert!(!forked.has_artifact(ScopedKeys::SELECTED_IDEA).await);
        assert!(context.has_artifact(ScopedKeys::SELECTED_IDEA).await);
    }
}
