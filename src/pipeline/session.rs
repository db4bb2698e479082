//! 向导面板的显式状态机
//!
//! 四个面板按"创意 → 路演稿 → MVP → 投融资"推进，每个面板声明自己
//! 依赖的前序工件，只有工件齐备时才解锁，取代松散的键存在性判断。

use anyhow::{Result, bail};

use crate::pipeline::context::PipelineContext;
use crate::pipeline::memory::{ArtifactStore, ScopedKeys};

/// 向导面板
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardPanel {
    /// 创意面板：精炼原始点子并完成市场调研
    IdeaCreation,
    /// 路演稿面板：问题/方案提炼与6页路演稿
    PitchDeck,
    /// MVP面板：生成MVP实施计划
    MvpBuilder,
    /// 投融资面板：行业提取、投资人检索与冷启动邮件
    FundingAdvisor,
}

impl WizardPanel {
    /// 按推进顺序排列的全部面板
    pub fn all() -> [WizardPanel; 4] {
        [
            WizardPanel::IdeaCreation,
            WizardPanel::PitchDeck,
            WizardPanel::MvpBuilder,
            WizardPanel::FundingAdvisor,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WizardPanel::IdeaCreation => "Idea Creation",
            WizardPanel::PitchDeck => "Pitch Deck",
            WizardPanel::MvpBuilder => "MVP Builder",
            WizardPanel::FundingAdvisor => "Funding Advisor",
        }
    }

    /// 进入该面板前必须已产出的工件
    pub fn required_artifacts(&self) -> &'static [&'static str] {
        match self {
            WizardPanel::IdeaCreation => &[],
            WizardPanel::PitchDeck => &[ScopedKeys::SELECTED_IDEA, ScopedKeys::RESEARCH_REPORT],
            WizardPanel::MvpBuilder => &[
                ScopedKeys::SELECTED_IDEA,
                ScopedKeys::RESEARCH_REPORT,
                ScopedKeys::SELECTED_PROBLEM,
                ScopedKeys::SOLUTION,
            ],
            WizardPanel::FundingAdvisor => &[ScopedKeys::SELECTED_IDEA],
        }
    }

    /// 检查面板是否已解锁
    pub async fn is_unlocked(&self, context: &PipelineContext) -> bool {
        for key in self.required_artifacts() {
            if !context.has_artifact(key).await {
                return false;
            }
        }
        true
    }

    /// 断言面板已解锁，未解锁时报告缺失的工件
    pub async fn assert_unlocked(&self, context: &PipelineContext) -> Result<()> {
        let mut missing = Vec::new();
        for key in self.required_artifacts() {
            if !context.has_artifact(key).await {
                missing.push(*key);
            }
        }

        if !missing.is_empty() {
            bail!(
                "面板 {} 尚未解锁，缺失工件: {}",
                self.display_name(),
                missing.join(", ")
            );
        }
        Ok(())
    }
}
