use anyhow::{Result, bail};

use crate::pipeline::agents::{
    ColdEmailWriter, DomainExtractor, IdeaRefiner, InvestorFinder, MarketResearcher, MvpInputs,
    MvpPlanner, ProblemGenerator, SolutionGenerator,
};
use crate::pipeline::context::PipelineContext;
use crate::pipeline::extractors::{
    extract_idea_names, extract_problem_statements, parse_refined_ideas,
};
use crate::pipeline::memory::{ArtifactStore, ScopedKeys};
use crate::pipeline::outlet::{DiskOutlet, Outlet, compose_pitch_deck};
use crate::pipeline::session::WizardPanel;
use crate::pipeline::stage_agent::StageAgent;
use crate::pipeline::workflow::{TimingKeys, TimingScope};

/// 流水线编排器 - 按面板顺序驱动全部生成阶段
#[derive(Default)]
pub struct PipelineOrchestrator;

impl PipelineOrchestrator {
    /// 执行完整的创业点子流水线
    pub async fn execute_startup_pipeline(&self, context: &PipelineContext) -> Result<()> {
        println!("🚀 开始执行VentureKit创业点子流水线...");
        let mut timing = TimingScope::new();

        // ---- 面板一：创意精炼与市场调研 ----
        WizardPanel::IdeaCreation.assert_unlocked(context).await?;

        let Some(rough_idea) = context.config.rough_idea.clone() else {
            bail!("缺少原始创业点子，请使用 --idea 参数提供");
        };
        if rough_idea.trim().is_empty() {
            bail!("原始创业点子不能为空");
        }
        context
            .store_artifact(ScopedKeys::ROUGH_IDEA, &rough_idea)
            .await?;

        timing.start_phase(TimingKeys::REFINE);
        println!("🤖 精炼创意中...");
        let refiner = IdeaRefiner;
        let refined = refiner
            .execute(context, &rough_idea)
            .await
            .map_err(|e| e.context("创意精炼阶段失败"))?;

        let idea_names = extract_idea_names(&refined);
        if idea_names.is_empty() {
            // 解析器保持沉默，空结果在这里升级为显式错误
            bail!("模型回复中未找到任何创意名称，无法继续流水线");
        }
        context
            .store_artifact(ScopedKeys::IDEA_NAMES, &idea_names)
            .await?;

        let pick = context.config.pick_idea;
        if pick > idea_names.len() {
            bail!(
                "--pick-idea 为 {}，但本次只生成了 {} 个创意",
                pick,
                idea_names.len()
            );
        }
        let selected_idea = idea_names[pick - 1].clone();
        context
            .store_artifact(ScopedKeys::SELECTED_IDEA, &selected_idea)
            .await?;
        println!("✓ 创意精炼完成，选中: {}", selected_idea);
        timing.end_phase(TimingKeys::REFINE);

        timing.start_phase(TimingKeys::RESEARCH);
        println!("🤖 市场调研中（可能触发多次网络搜索）...");
        let researcher = MarketResearcher;
        let report = researcher
            .execute(context, &selected_idea)
            .await
            .map_err(|e| e.context("市场调研阶段失败"))?;
        println!("✓ 市场调研完成，报告 {} 字符", report.len());
        timing.end_phase(TimingKeys::RESEARCH);

        // ---- 面板二：问题/方案与路演稿 ----
        WizardPanel::PitchDeck.assert_unlocked(context).await?;

        timing.start_phase(TimingKeys::PROBLEM_SOLUTION);
        println!("🤖 提炼问题陈述中...");
        let problem_generator = ProblemGenerator;
        let problem_markdown = problem_generator
            .execute(context, &report)
            .await
            .map_err(|e| e.context("问题陈述阶段失败"))?;

        let problems = extract_problem_statements(&problem_markdown);
        if problems.is_empty() {
            bail!("模型回复中未找到编号的问题陈述，无法继续流水线");
        }
        context
            .store_artifact(ScopedKeys::PROBLEMS, &problems)
            .await?;

        let pick = context.config.pick_problem;
        if pick > problems.len() {
            bail!(
                "--pick-problem 为 {}，但本次只提炼了 {} 条问题陈述",
                pick,
                problems.len()
            );
        }
        let selected_problem = problems[pick - 1].clone();
        context
            .store_artifact(ScopedKeys::SELECTED_PROBLEM, &selected_problem)
            .await?;
        println!("✓ 选中问题: {}", selected_problem);

        println!("🤖 生成解决方案中...");
        let solution_generator = SolutionGenerator;
        let solution = solution_generator
            .execute(context, &selected_problem)
            .await
            .map_err(|e| e.context("解决方案阶段失败"))?;
        println!("✓ 解决方案生成完成");
        timing.end_phase(TimingKeys::PROBLEM_SOLUTION);

        let startup_name = context.config.get_startup_name(Some(selected_idea.as_str()));

        if !context.config.skip_deck {
            timing.start_phase(TimingKeys::DECK);
            let unique_angle = parse_refined_ideas(&refined)
                .into_iter()
                .find(|idea| idea.name == selected_idea)
                .map(|idea| idea.unique_angle);

            let deck = compose_pitch_deck(
                &startup_name,
                &selected_problem,
                &solution,
                &report,
                unique_angle.as_deref(),
            );
            let outlet = DiskOutlet::new(deck);
            let deck_path = outlet.save(context).await?;
            context
                .store_artifact(ScopedKeys::DECK_PATH, deck_path.display().to_string())
                .await?;
            timing.end_phase(TimingKeys::DECK);
        }

        // ---- 面板三：MVP计划 ----
        if !context.config.skip_mvp {
            WizardPanel::MvpBuilder.assert_unlocked(context).await?;

            timing.start_phase(TimingKeys::MVP);
            println!("🤖 生成MVP计划中...");
            let planner = MvpPlanner;
            let inputs = MvpInputs {
                startup_name: startup_name.clone(),
                problem: selected_problem.clone(),
                solution: solution.clone(),
                report: report.clone(),
            };
            planner
                .execute(context, &inputs)
                .await
                .map_err(|e| e.context("MVP计划阶段失败"))?;
            println!("✓ MVP计划生成完成");
            timing.end_phase(TimingKeys::MVP);
        }

        // ---- 面板四：投融资顾问 ----
        if !context.config.skip_funding {
            WizardPanel::FundingAdvisor.assert_unlocked(context).await?;

            timing.start_phase(TimingKeys::FUNDING);
            println!("🤖 提取行业领域中...");
            let domain_extractor = DomainExtractor;
            let domain = domain_extractor
                .execute(context, &selected_idea)
                .await
                .map_err(|e| e.context("行业提取阶段失败"))?;
            println!("✓ 行业领域: {}", domain);

            let finder = InvestorFinder;
            let investors = finder
                .find(context, &domain)
                .await
                .map_err(|e| e.context("投资人检索阶段失败"))?;
            println!("✓ 找到 {} 位投资人", investors.len());

            if !investors.is_empty() {
                println!(
                    "🤖 起草冷启动邮件中（最多 {} 路并发）...",
                    context.config.llm.max_parallels.max(1)
                );
                let writer = ColdEmailWriter;
                let emails = writer
                    .write_for_investors(context, &selected_idea, &investors)
                    .await
                    .map_err(|e| e.context("冷启动邮件阶段失败"))?;
                println!("✓ 完成 {} 封外联邮件", emails.len());
            }
            timing.end_phase(TimingKeys::FUNDING);
        }

        self.print_summary(context, &timing).await;
        Ok(())
    }

    /// 打印工件摘要、缓存收益与耗时报告
    async fn print_summary(&self, context: &PipelineContext, timing: &TimingScope) {
        println!("\n📋 流水线产出:");
        for key in context
            .list_memory_keys(crate::pipeline::memory::MemoryScope::PIPELINE)
            .await
        {
            println!("   - {}", key);
        }

        println!("\n🧭 面板进度:");
        for panel in WizardPanel::all() {
            let mark = if panel.is_unlocked(context).await {
                "✓"
            } else {
                "✗"
            };
            println!("   {} {}", mark, panel.display_name());
        }

        let cache_report = context
            .cache_manager
            .read()
            .await
            .generate_performance_report();
        println!("\n💰 缓存收益:");
        println!(
            "   命中率 {:.1}% ({} 命中 / {} 未命中 / {} 写入)",
            cache_report.hit_rate * 100.0,
            cache_report.cache_hits,
            cache_report.cache_misses,
            cache_report.cache_writes
        );
        println!(
            "   估算节省: {:.1}秒推理时间 / ${:.4}成本 / {}输入+{}输出tokens",
            cache_report.inference_time_saved,
            cache_report.cost_saved,
            cache_report.input_tokens_saved,
            cache_report.output_tokens_saved
        );

        println!("⌛ 耗时统计:");
        println!("{}", timing.generate_timing_report());
    }
}
