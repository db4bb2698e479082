//! 创业点子流水线
//!
//! 创意精炼 → 市场调研 → 问题/方案 → 路演稿/MVP → 投融资顾问，
//! 线性推进，每个阶段的产物落入会话工件存储供下一阶段取用。

pub mod agent_executor;
pub mod agents;
pub mod context;
pub mod extractors;
pub mod memory;
pub mod orchestrator;
pub mod outlet;
pub mod session;
pub mod stage_agent;
pub mod workflow;
