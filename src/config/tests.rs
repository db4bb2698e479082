#[cfg(test)]
mod tests {
    use crate::config::{
        CacheConfig, Config, LLMConfig, LLMProvider, SearchConfig, ServerConfig,
    };
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();

        assert!(config.startup_name.is_none());
        assert!(config.rough_idea.is_none());
        assert_eq!(config.output_path, PathBuf::from("./presentations"));
        assert_eq!(config.internal_path, PathBuf::from("./.venturekit"));
        assert_eq!(config.pick_idea, 1);
        assert_eq!(config.pick_problem, 1);
        assert!(!config.serve);
        assert!(!config.skip_deck);
        assert!(!config.skip_mvp);
        assert!(!config.skip_funding);
        assert!(!config.force_regenerate);
        assert!(!config.verbose);
    }

    #[test]
    fn test_llm_provider_default() {
        let provider = LLMProvider::default();
        assert_eq!(provider, LLMProvider::OpenAI);
    }

    #[test]
    fn test_llm_provider_from_str() {
        assert_eq!(
            "openai".parse::<LLMProvider>().unwrap(),
            LLMProvider::OpenAI
        );
        assert_eq!(
            "moonshot".parse::<LLMProvider>().unwrap(),
            LLMProvider::Moonshot
        );
        assert_eq!(
            "deepseek".parse::<LLMProvider>().unwrap(),
            LLMProvider::DeepSeek
        );
        assert_eq!(
            "mistral".parse::<LLMProvider>().unwrap(),
            LLMProvider::Mistral
        );
        assert_eq!(
            "openrouter".parse::<LLMProvider>().unwrap(),
            LLMProvider::OpenRouter
        );
        assert_eq!(
            "anthropic".parse::<LLMProvider>().unwrap(),
            LLMProvider::Anthropic
        );
        assert_eq!(
            "gemini".parse::<LLMProvider>().unwrap(),
            LLMProvider::Gemini
        );
        assert_eq!(
            "ollama".parse::<LLMProvider>().unwrap(),
            LLMProvider::Ollama
        );

        assert!("invalid".parse::<LLMProvider>().is_err());
    }

    #[test]
    fn test_llm_provider_display() {
        assert_eq!(LLMProvider::OpenAI.to_string(), "openai");
        assert_eq!(LLMProvider::Moonshot.to_string(), "moonshot");
        assert_eq!(LLMProvider::DeepSeek.to_string(), "deepseek");
        assert_eq!(LLMProvider::Mistral.to_string(), "mistral");
        assert_eq!(LLMProvider::OpenRouter.to_string(), "openrouter");
        assert_eq!(LLMProvider::Anthropic.to_string(), "anthropic");
        assert_eq!(LLMProvider::Gemini.to_string(), "gemini");
        assert_eq!(LLMProvider::Ollama.to_string(), "ollama");
    }

    #[test]
    fn test_llm_config_default() {
        let config = LLMConfig::default();

        assert_eq!(config.provider, LLMProvider::OpenAI);
        // api_key may be empty if env var is not set
        assert!(!config.api_base_url.is_empty());
        assert!(!config.model_efficient.is_empty());
        assert!(!config.model_powerful.is_empty());
        assert_eq!(config.max_tokens, 131072);
        assert_eq!(config.temperature, 0.1);
        assert_eq!(config.retry_attempts, 5);
        assert_eq!(config.retry_delay_ms, 5000);
        assert_eq!(config.timeout_seconds, 300);
        assert!(!config.disable_preset_tools);
        assert_eq!(config.max_parallels, 3);
    }

    #[test]
    fn test_search_config_default() {
        let config = SearchConfig::default();

        // api_key may be empty if env var is not set
        assert_eq!(config.api_base_url, "https://google.serper.dev");
        assert_eq!(config.max_results, 5);
        assert_eq!(config.timeout_seconds, 30);
    }

    #[test]
    fn test_cache_config_default() {
        let config = CacheConfig::default();

        assert!(config.enabled);
        assert_eq!(config.cache_dir, PathBuf::from(".venturekit/cache"));
        assert_eq!(config.expire_hours, 8760); // 1 year
    }

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 5000);
    }

    #[test]
    fn test_get_startup_name_with_configured_name() {
        let mut config = Config::default();
        config.startup_name = Some("Acme Robotics".to_string());

        // 配置值优先于调用方候选名
        assert_eq!(config.get_startup_name(None), "Acme Robotics");
        assert_eq!(config.get_startup_name(Some("PlantPal")), "Acme Robotics");
    }

    #[test]
    fn test_get_startup_name_empty_configured_name() {
        let mut config = Config::default();
        config.startup_name = Some("   ".to_string());

        assert_eq!(config.get_startup_name(None), "My Startup");
    }

    #[test]
    fn test_get_startup_name_caller_fallback() {
        let config = Config::default();

        assert_eq!(config.get_startup_name(Some("PlantPal")), "PlantPal");
        assert_eq!(config.get_startup_name(Some("   ")), "My Startup");
        assert_eq!(config.get_startup_name(None), "My Startup");
    }

    #[test]
    fn test_config_from_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("venturekit.toml");

        let config_content = r#"startup_name = "NestFinder"
pick_idea = 2

[llm]
provider = "deepseek"
api_key = "test-llm-key"

[search]
api_key = "test-search-key"
max_results = 3

[server]
port = 8080
"#;

        std::fs::write(&config_path, config_content).unwrap();

        let config = Config::from_file(&config_path).unwrap();

        assert_eq!(config.startup_name, Some("NestFinder".to_string()));
        assert_eq!(config.pick_idea, 2);
        // 未出现的字段应落回默认值
        assert_eq!(config.pick_problem, 1);
        assert_eq!(config.output_path, PathBuf::from("./presentations"));
        assert_eq!(config.llm.provider, LLMProvider::DeepSeek);
        assert_eq!(config.llm.api_key, "test-llm-key");
        assert_eq!(config.llm.retry_attempts, 5);
        assert_eq!(config.search.api_key, "test-search-key");
        assert_eq!(config.search.max_results, 3);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn test_config_from_missing_file() {
        let path = PathBuf::from("/nonexistent/venturekit.toml");
        assert!(Config::from_file(&path).is_err());
    }

    #[test]
    fn test_validate_for_launch_missing_llm_key() {
        let mut config = Config::default();
        config.llm.api_key = String::new();
        config.search.api_key = "search-key".to_string();

        assert!(config.validate_for_launch().is_err());
    }

    #[test]
    fn test_validate_for_launch_missing_search_key() {
        let mut config = Config::default();
        config.llm.api_key = "llm-key".to_string();
        config.search.api_key = String::new();

        assert!(config.validate_for_launch().is_err());
    }

    #[test]
    fn test_validate_for_launch_search_key_optional_without_tools() {
        let mut config = Config::default();
        config.llm.api_key = "llm-key".to_string();
        config.search.api_key = String::new();
        config.llm.disable_preset_tools = true;

        assert!(config.validate_for_launch().is_ok());
    }

    #[test]
    fn test_validate_for_launch_ollama_needs_no_llm_key() {
        let mut config = Config::default();
        config.llm.provider = LLMProvider::Ollama;
        config.llm.api_key = String::new();
        config.search.api_key = "search-key".to_string();

        assert!(config.validate_for_launch().is_ok());
    }

    #[test]
    fn test_config_fields() {
        let mut config = Config::default();

        config.startup_name = Some("Test".to_string());
        config.rough_idea = Some("an app for plant care".to_string());
        config.pick_idea = 3;
        config.pick_problem = 2;
        config.serve = true;
        config.skip_deck = true;
        config.skip_mvp = true;
        config.skip_funding = true;
        config.force_regenerate = true;
        config.verbose = true;

        assert_eq!(config.startup_name, Some("Test".to_string()));
        assert_eq!(
            config.rough_idea,
            Some("an app for plant care".to_string())
        );
        assert_eq!(config.pick_idea, 3);
        assert_eq!(config.pick_problem, 2);
        assert!(config.serve);
        assert!(config.skip_deck);
        assert!(config.skip_mvp);
        assert!(config.skip_funding);
        assert!(config.force_regenerate);
        assert!(config.verbose);
    }
}
