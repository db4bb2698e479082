use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use crate::i18n::TargetLanguage;

/// LLM Provider类型
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub enum LLMProvider {
    #[serde(rename = "openai")]
    #[default]
    OpenAI,
    #[serde(rename = "moonshot")]
    Moonshot,
    #[serde(rename = "deepseek")]
    DeepSeek,
    #[serde(rename = "mistral")]
    Mistral,
    #[serde(rename = "openrouter")]
    OpenRouter,
    #[serde(rename = "anthropic")]
    Anthropic,
    #[serde(rename = "gemini")]
    Gemini,
    #[serde(rename = "ollama")]
    Ollama,
}

impl std::fmt::Display for LLMProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LLMProvider::OpenAI => write!(f, "openai"),
            LLMProvider::Moonshot => write!(f, "moonshot"),
            LLMProvider::DeepSeek => write!(f, "deepseek"),
            LLMProvider::Mistral => write!(f, "mistral"),
            LLMProvider::OpenRouter => write!(f, "openrouter"),
            LLMProvider::Anthropic => write!(f, "anthropic"),
            LLMProvider::Gemini => write!(f, "gemini"),
            LLMProvider::Ollama => write!(f, "ollama"),
        }
    }
}

impl std::str::FromStr for LLMProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(LLMProvider::OpenAI),
            "moonshot" => Ok(LLMProvider::Moonshot),
            "deepseek" => Ok(LLMProvider::DeepSeek),
            "mistral" => Ok(LLMProvider::Mistral),
            "openrouter" => Ok(LLMProvider::OpenRouter),
            "anthropic" => Ok(LLMProvider::Anthropic),
            "gemini" => Ok(LLMProvider::Gemini),
            "ollama" => Ok(LLMProvider::Ollama),
            _ => Err(format!("Unknown provider: {}", s)),
        }
    }
}

/// 应用程序配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct Config {
    /// 创业公司名称，未设置时使用选中创意的名称或默认名
    pub startup_name: Option<String>,

    /// 用户输入的原始创意（流水线模式的入口数据）
    pub rough_idea: Option<String>,

    /// 产物输出路径（路演稿文件会写入此目录）
    pub output_path: PathBuf,

    /// 内部工作目录路径 (.venturekit)
    pub internal_path: PathBuf,

    /// 生成内容的目标语言
    pub target_language: TargetLanguage,

    /// 精炼创意的选择序号（从1开始）
    pub pick_idea: usize,

    /// 问题陈述的选择序号（从1开始）
    pub pick_problem: usize,

    /// LLM模型配置
    pub llm: LLMConfig,

    /// 网络搜索配置
    pub search: SearchConfig,

    /// 缓存配置
    pub cache: CacheConfig,

    /// HTTP API服务配置
    pub server: ServerConfig,

    /// 以HTTP API方式启动，而非运行流水线
    pub serve: bool,

    /// 跳过路演稿生成
    pub skip_deck: bool,

    /// 跳过MVP计划生成
    pub skip_mvp: bool,

    /// 跳过投融资顾问阶段
    pub skip_funding: bool,

    /// 强制重新生成（绕过缓存读取）
    pub force_regenerate: bool,

    /// 是否启用详细日志
    pub verbose: bool,
}

/// LLM模型配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct LLMConfig {
    /// LLM Provider类型
    pub provider: LLMProvider,

    /// LLM API KEY
    pub api_key: String,

    /// LLM API基地址
    pub api_base_url: String,

    /// 高能效模型，优先用于常规生成任务
    pub model_efficient: String,

    /// 高质量模型，用于复杂推理任务，以及作为efficient失效情况下的兜底
    pub model_powerful: String,

    /// 最大tokens
    pub max_tokens: u32,

    /// 温度
    pub temperature: f64,

    /// 重试次数
    pub retry_attempts: u32,

    /// 重试间隔（毫秒）
    pub retry_delay_ms: u64,

    /// 超时时间（秒）
    pub timeout_seconds: u64,

    pub disable_preset_tools: bool,

    pub max_parallels: usize,
}

/// 网络搜索配置（Serper风格的搜索API）
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct SearchConfig {
    /// 搜索API KEY
    pub api_key: String,

    /// 搜索API基地址
    pub api_base_url: String,

    /// 单次搜索返回的结果条数上限
    pub max_results: usize,

    /// 搜索请求超时时间（秒）
    pub timeout_seconds: u64,
}

/// 缓存配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct CacheConfig {
    /// 是否启用缓存
    pub enabled: bool,

    /// 缓存目录
    pub cache_dir: PathBuf,

    /// 缓存过期时间（小时）
    pub expire_hours: u64,
}

/// HTTP API服务配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    /// 监听地址
    pub host: String,

    /// 监听端口
    pub port: u16,
}

impl Config {
    /// 从文件加载配置
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let mut file =
            File::open(path).context(format!("Failed to open config file: {:?}", path))?;
        let mut content = String::new();
        file.read_to_string(&mut content)
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// 获取创业公司名称，优先使用配置值，其次是调用方提供的候选名，最后回退到默认名
    pub fn get_startup_name(&self, fallback: Option<&str>) -> String {
        if let Some(ref name) = self.startup_name
            && !name.trim().is_empty()
        {
            return name.clone();
        }

        match fallback {
            Some(name) if !name.trim().is_empty() => name.to_string(),
            _ => String::from("My Startup"),
        }
    }

    /// 启动前校验：密钥缺失时立即失败，而不是在某次远端调用时才暴露
    pub fn validate_for_launch(&self) -> Result<()> {
        if self.llm.provider != LLMProvider::Ollama && self.llm.api_key.trim().is_empty() {
            bail!(
                "缺少LLM API密钥，请设置环境变量 VENTUREKIT_LLM_API_KEY 或使用 --llm-api-key 参数"
            );
        }

        // 预置工具被禁用时不会发起网络搜索，允许缺省搜索密钥
        if !self.llm.disable_preset_tools && self.search.api_key.trim().is_empty() {
            bail!(
                "缺少搜索API密钥，请设置环境变量 VENTUREKIT_SEARCH_API_KEY 或使用 --search-api-key 参数"
            );
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            startup_name: None,
            rough_idea: None,
            output_path: PathBuf::from("./presentations"),
            internal_path: PathBuf::from("./.venturekit"),
            target_language: TargetLanguage::default(),
            pick_idea: 1,
            pick_problem: 1,
            llm: LLMConfig::default(),
            search: SearchConfig::default(),
            cache: CacheConfig::default(),
            server: ServerConfig::default(),
            serve: false,
            skip_deck: false,
            skip_mvp: false,
            skip_funding: false,
            force_regenerate: false,
            verbose: false,
        }
    }
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            provider: LLMProvider::default(),
            api_key: std::env::var("VENTUREKIT_LLM_API_KEY").unwrap_or_default(),
            api_base_url: String::from("https://api-inference.modelscope.cn/v1"),
            model_efficient: String::from("Qwen/Qwen3-Next-80B-A3B-Instruct"),
            model_powerful: String::from("Qwen/Qwen3-235B-A22B-Instruct-2507"),
            max_tokens: 131072,
            temperature: 0.1,
            retry_attempts: 5,
            retry_delay_ms: 5000,
            timeout_seconds: 300,
            disable_preset_tools: false,
            max_parallels: 3,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_key: std::env::var("VENTUREKIT_SEARCH_API_KEY").unwrap_or_default(),
            api_base_url: String::from("https://google.serper.dev"),
            max_results: 5,
            timeout_seconds: 30,
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            cache_dir: PathBuf::from(".venturekit/cache"),
            expire_hours: 8760,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("127.0.0.1"),
            port: 5000,
        }
    }
}

// Include tests
#[cfg(test)]
mod tests;
