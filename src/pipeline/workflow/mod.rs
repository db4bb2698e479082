use crate::config::Config;
use crate::pipeline::context::PipelineContext;
use crate::pipeline::orchestrator::PipelineOrchestrator;

use anyhow::Result;
use std::collections::HashMap;
use std::time::Duration;

/// 时间跟踪作用域
pub struct TimingScope {
    start_time: Option<std::time::Instant>,
    phase_start_times: HashMap<String, std::time::Instant>,
    phase_durations: HashMap<String, Duration>,
}

impl Default for TimingScope {
    fn default() -> Self {
        Self::new()
    }
}

impl TimingScope {
    pub fn new() -> Self {
        Self {
            start_time: Some(std::time::Instant::now()),
            phase_start_times: HashMap::new(),
            phase_durations: HashMap::new(),
        }
    }

    /// 开始一个新的阶段计时
    pub fn start_phase(&mut self, phase_name: &str) {
        self.phase_start_times
            .insert(phase_name.to_string(), std::time::Instant::now());
    }

    /// 结束一个阶段的计时
    pub fn end_phase(&mut self, phase_name: &str) -> Option<Duration> {
        if let Some(start_time) = self.phase_start_times.remove(phase_name) {
            let duration = start_time.elapsed();
            self.phase_durations
                .insert(phase_name.to_string(), duration);
            Some(duration)
        } else {
            None
        }
    }

    /// 获取总执行时间
    pub fn get_total_duration(&self) -> Option<Duration> {
        self.start_time.map(|start| start.elapsed())
    }

    /// 获取所有阶段的执行时间
    pub fn get_phase_durations(&self) -> &HashMap<String, Duration> {
        &self.phase_durations
    }

    /// 获取格式化的执行时间报告
    pub fn generate_timing_report(&self) -> String {
        let mut report = String::new();

        if let Some(total_duration) = self.get_total_duration() {
            report.push_str(&format!(
                "总执行时间: {:.2}秒\n",
                total_duration.as_secs_f64()
            ));
        }

        if !self.phase_durations.is_empty() {
            report.push_str("\n各阶段执行时间:\n");
            for (phase, duration) in &self.phase_durations {
                report.push_str(&format!("- {}: {:.3}秒\n", phase, duration.as_secs_f64()));
            }
        }

        report
    }
}

/// 流水线阶段的计时键
pub struct TimingKeys;

impl TimingKeys {
    pub const REFINE: &'static str = "refine";
    pub const RESEARCH: &'static str = "research";
    pub const PROBLEM_SOLUTION: &'static str = "problem_solution";
    pub const DECK: &'static str = "deck";
    pub const MVP: &'static str = "mvp";
    pub const FUNDING: &'static str = "funding";

    /// 获取所有阶段的键列表
    pub fn get_all_phase_keys() -> Vec<&'static str> {
        vec![
            Self::REFINE,
            Self::RESEARCH,
            Self::PROBLEM_SOLUTION,
            Self::DECK,
            Self::MVP,
            Self::FUNDING,
        ]
    }
}

/// 启动入口：校验配置，按配置选择HTTP API服务或一次性流水线
pub async fn launch(config: &Config) -> Result<()> {
    config.validate_for_launch()?;

    let context = PipelineContext::new(config.clone())?;

    // 启动时检查模型连接
    context.llm_client.check_connection().await?;

    if config.serve {
        return crate::server::serve(context).await;
    }

    let orchestrator = PipelineOrchestrator;
    orchestrator.execute_startup_pipeline(&context).await
}

// Include tests
#[cfg(test)]
mod tests;
