//! 路演稿组装与落盘

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::pipeline::context::PipelineContext;
use crate::pipeline::extractors::{competitor_lines, market_gap_lines};
use crate::types::{PitchDeck, Slide};

/// 组装固定6页的路演稿
///
/// 问题页与方案页使用生成文本原文；市场缺口页与竞品页由报告按
/// 关键词筛行填充，格式不符时留空页而非报错。
pub fn compose_pitch_deck(
    startup_name: &str,
    problem: &str,
    solution: &str,
    report: &str,
    unique_angle: Option<&str>,
) -> PitchDeck {
    let slides = vec![
        Slide::new(startup_name, ""),
        Slide::new("Problem Statement", problem),
        Slide::new("Solution", solution),
        Slide::new("Market Gap", market_gap_lines(report).join("\n")),
        Slide::new("Competitors", competitor_lines(report).join("\n")),
        Slide::new("Unique Angle", unique_angle.unwrap_or("")),
    ];

    PitchDeck {
        startup_name: startup_name.to_string(),
        slides,
    }
}

pub trait Outlet {
    async fn save(&self, context: &PipelineContext) -> Result<PathBuf>;
}

/// 将路演稿以Markdown幻灯片形式写入输出目录
pub struct DiskOutlet {
    deck: PitchDeck,
}

impl DiskOutlet {
    pub fn new(deck: PitchDeck) -> Self {
        Self { deck }
    }
}

impl Outlet for DiskOutlet {
    async fn save(&self, context: &PipelineContext) -> Result<PathBuf> {
        let output_dir = &context.config.output_path;
        if !output_dir.exists() {
            fs::create_dir_all(output_dir)?;
        }

        // 固定文件名，多个会话共用同一输出目录时后写的覆盖先写的
        let output_path = output_dir.join("pitch_deck.md");
        fs::write(&output_path, self.deck.render_markdown())?;

        println!("💾 已保存路演稿: {}", output_path.display());
        Ok(output_path)
    }
}
