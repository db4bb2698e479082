#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use clap::Parser;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_args_default_values() {
        let args = Args::try_parse_from(&["venturekit-rs"]).unwrap();

        assert!(args.idea.is_none());
        assert!(args.output_path.is_none());
        assert!(!args.serve);
        assert!(args.pick_idea.is_none());
        assert!(args.pick_problem.is_none());
        assert!(!args.skip_deck);
        assert!(!args.skip_mvp);
        assert!(!args.skip_funding);
        assert!(!args.verbose);
        assert!(!args.force_regenerate);
        assert!(!args.no_cache);
    }

    #[test]
    fn test_args_short_options() {
        let args = Args::try_parse_from(&[
            "venturekit-rs",
            "-i", "an app that waters my plants",
            "-o", "/test/output",
            "-n", "PlantPal",
            "-v"
        ]).unwrap();

        assert_eq!(
            args.idea,
            Some("an app that waters my plants".to_string())
        );
        assert_eq!(args.output_path, Some(PathBuf::from("/test/output")));
        assert_eq!(args.name, Some("PlantPal".to_string()));
        assert!(args.verbose);
    }

    #[test]
    fn test_args_long_options() {
        let args = Args::try_parse_from(&[
            "venturekit-rs",
            "--idea", "remote tutoring",
            "--output-path", "/test/output",
            "--pick-idea", "2",
            "--pick-problem", "3",
            "--skip-deck",
            "--skip-mvp",
            "--skip-funding",
            "--force-regenerate",
            "--verbose"
        ]).unwrap();

        assert_eq!(args.idea, Some("remote tutoring".to_string()));
        assert_eq!(args.output_path, Some(PathBuf::from("/test/output")));
        assert_eq!(args.pick_idea, Some(2));
        assert_eq!(args.pick_problem, Some(3));
        assert!(args.skip_deck);
        assert!(args.skip_mvp);
        assert!(args.skip_funding);
        assert!(args.force_regenerate);
        assert!(args.verbose);
    }

    #[test]
    fn test_args_llm_options() {
        let args = Args::try_parse_from(&[
            "venturekit-rs",
            "--llm-provider", "openai",
            "--llm-api-key", "test-key",
            "--llm-api-base-url", "https://api.openai.com",
            "--model-efficient", "gpt-3.5-turbo",
            "--model-powerful", "gpt-4",
            "--max-tokens", "2048",
            "--temperature", "0.7",
            "--max-parallels", "5"
        ]).unwrap();

        assert_eq!(args.llm_provider, Some("openai".to_string()));
        assert_eq!(args.llm_api_key, Some("test-key".to_string()));
        assert_eq!(args.llm_api_base_url, Some("https://api.openai.com".to_string()));
        assert_eq!(args.model_efficient, Some("gpt-3.5-turbo".to_string()));
        assert_eq!(args.model_powerful, Some("gpt-4".to_string()));
        assert_eq!(args.max_tokens, Some(2048));
        assert_eq!(args.temperature, Some(0.7));
        assert_eq!(args.max_parallels, Some(5));
    }

    #[test]
    fn test_args_search_options() {
        let args = Args::try_parse_from(&[
            "venturekit-rs",
            "--search-api-key", "serper-key",
            "--search-api-base-url", "https://search.example.com",
            "--search-max-results", "8"
        ]).unwrap();

        assert_eq!(args.search_api_key, Some("serper-key".to_string()));
        assert_eq!(
            args.search_api_base_url,
            Some("https://search.example.com".to_string())
        );
        assert_eq!(args.search_max_results, Some(8));
    }

    #[test]
    fn test_args_serve_options() {
        let args = Args::try_parse_from(&[
            "venturekit-rs",
            "--serve",
            "--host", "0.0.0.0",
            "--port", "8080"
        ]).unwrap();

        assert!(args.serve);
        assert_eq!(args.host, Some("0.0.0.0".to_string()));
        assert_eq!(args.port, Some(8080));
    }

    #[test]
    fn test_args_target_language() {
        let args = Args::try_parse_from(&[
            "venturekit-rs",
            "--target-language", "zh"
        ]).unwrap();

        assert_eq!(args.target_language, Some("zh".to_string()));
    }

    #[test]
    fn test_into_config_basic() {
        let args = Args::try_parse_from(&[
            "venturekit-rs",
            "-i", "a tool that summarizes contracts",
            "-o", "/test/output"
        ]).unwrap();

        let config = args.into_config();

        assert_eq!(
            config.rough_idea,
            Some("a tool that summarizes contracts".to_string())
        );
        assert_eq!(config.output_path, PathBuf::from("/test/output"));
        assert_eq!(config.pick_idea, 1);
        assert_eq!(config.pick_problem, 1);
        assert!(!config.serve);
        assert!(!config.force_regenerate);
        assert!(!config.verbose);
    }

    #[test]
    fn test_into_config_with_overrides() {
        let args = Args::try_parse_from(&[
            "venturekit-rs",
            "-i", "a tool that summarizes contracts",
            "-n", "BriefBot",
            "--pick-idea", "2",
            "--skip-funding",
            "--force-regenerate",
            "--verbose",
            "--llm-provider", "openai",
            "--model-efficient", "gpt-3.5-turbo"
        ]).unwrap();

        let config = args.into_config();

        assert_eq!(config.startup_name, Some("BriefBot".to_string()));
        assert_eq!(config.pick_idea, 2);
        assert!(config.skip_funding);
        assert!(config.force_regenerate);
        assert!(config.verbose);
        assert_eq!(config.llm.provider, crate::config::LLMProvider::OpenAI);
        assert_eq!(config.llm.model_efficient, "gpt-3.5-turbo");
    }

    #[test]
    fn test_into_config_powerful_falls_back_to_efficient() {
        let args = Args::try_parse_from(&[
            "venturekit-rs",
            "--model-efficient", "gpt-3.5-turbo"
        ]).unwrap();

        let config = args.into_config();
        assert_eq!(config.llm.model_powerful, "gpt-3.5-turbo");
    }

    #[test]
    fn test_into_config_pick_floor_is_one() {
        let args = Args::try_parse_from(&[
            "venturekit-rs",
            "--pick-idea", "0",
            "--pick-problem", "0"
        ]).unwrap();

        let config = args.into_config();
        assert_eq!(config.pick_idea, 1);
        assert_eq!(config.pick_problem, 1);
    }

    #[test]
    fn test_into_config_no_cache() {
        let args = Args::try_parse_from(&[
            "venturekit-rs",
            "--no-cache"
        ]).unwrap();

        let config = args.into_config();
        assert!(!config.cache.enabled);
    }

    #[test]
    fn test_into_config_disable_preset_tools() {
        let args = Args::try_parse_from(&[
            "venturekit-rs",
            "--disable-preset-tools"
        ]).unwrap();

        let config = args.into_config();
        assert!(config.llm.disable_preset_tools);
    }

    #[test]
    fn test_into_config_server_overrides() {
        let args = Args::try_parse_from(&[
            "venturekit-rs",
            "--serve",
            "--host", "0.0.0.0",
            "--port", "9001"
        ]).unwrap();

        let config = args.into_config();
        assert!(config.serve);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9001);
    }

    #[test]
    fn test_complex_args_combination() {
        let args = Args::try_parse_from(&[
            "venturekit-rs",
            "-i", "community tool sharing",
            "-o", "/complex/output",
            "-c", "/config.toml",
            "-n", "ToolPool",
            "--pick-idea", "3",
            "--skip-deck",
            "--force-regenerate",
            "-v",
            "--model-efficient", "gpt-3.5-turbo",
            "--model-powerful", "gpt-4",
            "--max-tokens", "4096",
            "--temperature", "0.5",
            "--target-language", "ja",
            "--disable-preset-tools",
            "--no-cache"
        ]).unwrap();

        assert_eq!(args.config, Some(PathBuf::from("/config.toml")));
        assert_eq!(args.name, Some("ToolPool".to_string()));
        assert_eq!(args.pick_idea, Some(3));
        assert!(args.skip_deck);
        assert!(args.force_regenerate);
        assert!(args.verbose);
        assert_eq!(args.model_efficient, Some("gpt-3.5-turbo".to_string()));
        assert_eq!(args.model_powerful, Some("gpt-4".to_string()));
        assert_eq!(args.max_tokens, Some(4096));
        assert_eq!(args.temperature, Some(0.5));
        assert_eq!(args.target_language, Some("ja".to_string()));
        assert!(args.disable_preset_tools);
        assert!(args.no_cache);
    }

    #[test]
    fn test_into_config_merges_file_and_flags() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("venturekit.toml");

        let config_content = r#"startup_name = "NestFinder"
pick_idea = 2
skip_funding = true
output_path = "./from-file"

[llm]
provider = "deepseek"
api_key = "file-llm-key"
model_efficient = "deepseek-chat"
model_powerful = "deepseek-reasoner"
"#;
        std::fs::write(&config_path, config_content).unwrap();

        let args = Args::try_parse_from(&[
            "venturekit-rs",
            "--config", config_path.to_str().unwrap(),
            "--idea", "an app for renters",
            "--serve"
        ]).unwrap();

        let config = args.into_config();

        // CLI参数在配置文件之上生效
        assert_eq!(config.rough_idea, Some("an app for renters".to_string()));
        assert!(config.serve);
        // 未被CLI覆盖的配置文件值保留
        assert_eq!(config.startup_name, Some("NestFinder".to_string()));
        assert_eq!(config.pick_idea, 2);
        assert!(config.skip_funding);
        assert_eq!(config.output_path, PathBuf::from("./from-file"));
        assert_eq!(config.llm.api_key, "file-llm-key");
        assert_eq!(config.llm.model_efficient, "deepseek-chat");
        assert_eq!(config.llm.model_powerful, "deepseek-reasoner");
    }

    #[test]
    fn test_into_config_flags_override_file_values() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("venturekit.toml");

        let config_content = r#"rough_idea = "an idea from the file"
pick_idea = 2
output_path = "./from-file"

[llm]
model_efficient = "deepseek-chat"
"#;
        std::fs::write(&config_path, config_content).unwrap();

        let args = Args::try_parse_from(&[
            "venturekit-rs",
            "--config", config_path.to_str().unwrap(),
            "--idea", "an idea from the command line",
            "--pick-idea", "3",
            "--output-path", "/cli/output",
            "--model-efficient", "gpt-4o-mini"
        ]).unwrap();

        let config = args.into_config();

        assert_eq!(
            config.rough_idea,
            Some("an idea from the command line".to_string())
        );
        assert_eq!(config.pick_idea, 3);
        assert_eq!(config.output_path, PathBuf::from("/cli/output"));
        assert_eq!(config.llm.model_efficient, "gpt-4o-mini");
    }

    #[test]
    fn test_into_config_unreadable_file_falls_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("venturekit.toml");
        std::fs::write(&config_path, "this is not [valid toml").unwrap();

        let args = Args::try_parse_from(&[
            "venturekit-rs",
            "--config", config_path.to_str().unwrap(),
            "--idea", "a marketplace for surplus produce"
        ]).unwrap();

        let config = args.into_config();

        assert_eq!(
            config.rough_idea,
            Some("a marketplace for surplus produce".to_string())
        );
        assert_eq!(config.pick_idea, 1);
        assert_eq!(config.output_path, PathBuf::from("./presentations"));
    }
}
