use crate::config::{Config, LLMProvider};
use crate::i18n::TargetLanguage;
use clap::Parser;
use std::path::PathBuf;

/// VentureKit-RS - 由Rust与AI驱动的创业点子流水线引擎
#[derive(Parser, Debug)]
#[command(name = "VentureKit (venturekit-rs)")]
#[command(
    about = "AI-powered startup toolkit engine. It refines a rough idea into candidates, researches the market with an agentic web search, extracts problems and solutions, assembles a pitch deck and MVP plan, and drafts investor cold-outreach emails."
)]
#[command(author = "Sopaco")]
#[command(version)]
pub struct Args {
    /// 原始创业点子（流水线模式的输入）
    #[arg(short, long)]
    pub idea: Option<String>,

    /// 产物输出路径（默认 ./presentations）
    #[arg(short, long)]
    pub output_path: Option<PathBuf>,

    /// 配置文件路径
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 创业公司名称
    #[arg(short, long)]
    pub name: Option<String>,

    /// 以HTTP API方式启动
    #[arg(long)]
    pub serve: bool,

    /// HTTP API监听地址
    #[arg(long)]
    pub host: Option<String>,

    /// HTTP API监听端口
    #[arg(long)]
    pub port: Option<u16>,

    /// 精炼创意的选择序号（从1开始）
    #[arg(long)]
    pub pick_idea: Option<usize>,

    /// 问题陈述的选择序号（从1开始）
    #[arg(long)]
    pub pick_problem: Option<usize>,

    /// 是否跳过路演稿生成
    #[arg(long)]
    pub skip_deck: bool,

    /// 是否跳过MVP计划生成
    #[arg(long)]
    pub skip_mvp: bool,

    /// 是否跳过投融资顾问阶段
    #[arg(long)]
    pub skip_funding: bool,

    /// 是否启用详细日志
    #[arg(short, long)]
    pub verbose: bool,

    /// 高能效模型，优先用于常规生成任务
    #[arg(long)]
    pub model_efficient: Option<String>,

    /// 高质量模型，用于复杂推理任务，以及作为efficient失效情况下的兜底
    #[arg(long)]
    pub model_powerful: Option<String>,

    /// LLM API基地址
    #[arg(long)]
    pub llm_api_base_url: Option<String>,

    /// LLM API KEY
    #[arg(long)]
    pub llm_api_key: Option<String>,

    /// 最大tokens数
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// 温度参数
    #[arg(long)]
    pub temperature: Option<f64>,

    /// 生成投资人外联邮件时的最大并发数
    #[arg(long)]
    pub max_parallels: Option<usize>,

    /// LLM Provider (openai, mistral, openrouter, anthropic, deepseek)
    #[arg(long)]
    pub llm_provider: Option<String>,

    /// 搜索API KEY
    #[arg(long)]
    pub search_api_key: Option<String>,

    /// 搜索API基地址
    #[arg(long)]
    pub search_api_base_url: Option<String>,

    /// 单次搜索返回的结果条数上限
    #[arg(long)]
    pub search_max_results: Option<usize>,

    /// 生成内容的目标语言 (zh, en, ja, ko, de, fr, ru)
    #[arg(long)]
    pub target_language: Option<String>,

    /// 禁用预置的Agent工具（网络搜索、当前时间）
    #[arg(long, default_value = "false", action = clap::ArgAction::SetTrue)]
    pub disable_preset_tools: bool,

    /// 是否禁用缓存
    #[arg(long)]
    pub no_cache: bool,

    /// 强制重新生成（绕过缓存读取）
    #[arg(long)]
    pub force_regenerate: bool,
}

impl Args {
    /// 将CLI参数转换为配置
    ///
    /// 配置分层：默认值 ← 配置文件（可选） ← CLI参数，后者覆盖前者
    pub fn into_config(self) -> Config {
        let mut config = if let Some(config_path) = &self.config {
            // 如果显式指定了配置文件路径，从该路径加载
            Config::from_file(config_path).unwrap_or_else(|_| {
                eprintln!("⚠️ 警告: 无法读取配置文件 {:?}，使用默认配置", config_path);
                Config::default()
            })
        } else {
            // 如果没有显式指定配置文件，尝试从默认位置加载
            let default_config_path = std::env::current_dir()
                .unwrap_or_else(|_| std::path::PathBuf::from("."))
                .join("venturekit.toml");

            if default_config_path.exists() {
                Config::from_file(&default_config_path).unwrap_or_else(|_| {
                    eprintln!(
                        "⚠️ 警告: 无法读取默认配置文件 {:?}，使用默认配置",
                        default_config_path
                    );
                    Config::default()
                })
            } else {
                // 默认配置文件不存在，使用默认值
                Config::default()
            }
        };

        // 覆盖配置文件中的设置（仅对显式传入的参数生效）
        if let Some(idea) = self.idea {
            config.rough_idea = Some(idea);
        }
        if let Some(output_path) = self.output_path {
            config.output_path = output_path;
        }

        // 公司名称处理：CLI参数优先级最高，否则沿用选中创意的名称或默认名
        if let Some(name) = self.name {
            config.startup_name = Some(name);
        }

        // HTTP API配置
        if self.serve {
            config.serve = true;
        }
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }

        // 阶段选择配置
        if let Some(pick_idea) = self.pick_idea {
            config.pick_idea = pick_idea.max(1);
        }
        if let Some(pick_problem) = self.pick_problem {
            config.pick_problem = pick_problem.max(1);
        }

        // 覆盖LLM配置
        if let Some(provider_str) = self.llm_provider {
            if let Ok(provider) = provider_str.parse::<LLMProvider>() {
                config.llm.provider = provider;
            } else {
                eprintln!(
                    "⚠️ 警告: 未知的provider: {}，使用默认provider",
                    provider_str
                );
            }
        }
        if let Some(llm_api_base_url) = self.llm_api_base_url {
            config.llm.api_base_url = llm_api_base_url;
        }
        if let Some(llm_api_key) = self.llm_api_key {
            config.llm.api_key = llm_api_key;
        }
        if let Some(model_efficient) = self.model_efficient {
            config.llm.model_efficient = model_efficient;
            // 未单独指定powerful模型时，与efficient保持一致
            if self.model_powerful.is_none() {
                config.llm.model_powerful = config.llm.model_efficient.clone();
            }
        }
        if let Some(model_powerful) = self.model_powerful {
            config.llm.model_powerful = model_powerful;
        }
        if let Some(max_tokens) = self.max_tokens {
            config.llm.max_tokens = max_tokens;
        }
        if let Some(temperature) = self.temperature {
            config.llm.temperature = temperature;
        }
        if let Some(max_parallels) = self.max_parallels {
            config.llm.max_parallels = max_parallels;
        }
        if self.disable_preset_tools {
            config.llm.disable_preset_tools = true;
        }

        // 覆盖搜索配置
        if let Some(search_api_key) = self.search_api_key {
            config.search.api_key = search_api_key;
        }
        if let Some(search_api_base_url) = self.search_api_base_url {
            config.search.api_base_url = search_api_base_url;
        }
        if let Some(search_max_results) = self.search_max_results {
            config.search.max_results = search_max_results;
        }

        // 目标语言配置
        if let Some(target_language_str) = self.target_language {
            if let Ok(target_language) = target_language_str.parse::<TargetLanguage>() {
                config.target_language = target_language;
            } else {
                eprintln!(
                    "⚠️ 警告: 未知的目标语言: {}，使用默认语言 (English)",
                    target_language_str
                );
            }
        }

        // 缓存配置
        if self.no_cache {
            config.cache.enabled = false;
        }

        // 其他配置（布尔开关只能由CLI打开，不会覆盖配置文件中已打开的值）
        if self.force_regenerate {
            config.force_regenerate = true;
        }
        if self.skip_deck {
            config.skip_deck = true;
        }
        if self.skip_mvp {
            config.skip_mvp = true;
        }
        if self.skip_funding {
            config.skip_funding = true;
        }
        if self.verbose {
            config.verbose = true;
        }

        config
    }
}

// Include tests
#[cfg(test)]
mod tests;
