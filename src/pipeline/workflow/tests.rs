use super::*;
use crate::config::{CacheConfig, Config};
use std::path::PathBuf;
use tempfile::TempDir;

fn create_test_context() -> (PipelineContext, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let config = Config {
        rough_idea: Some("an app for renters".to_string()),
        output_path: temp_dir.path().join("presentations"),
        internal_path: temp_dir.path().join(".venturekit"),
        cache: CacheConfig {
            enabled: false,
            cache_dir: temp_dir.path().join("cache"),
            ..Default::default()
        },
        ..Default::default()
    };

    let context = PipelineContext::new(config).unwrap();
    (context, temp_dir)
}

#[test]
fn test_pipeline_context_creation() {
    let (context, temp_dir) = create_test_context();

    assert_eq!(
        context.config.output_path,
        temp_dir.path().join("presentations")
    );
    assert_eq!(
        context.config.rough_idea.as_deref(),
        Some("an app for renters")
    );
    assert!(!context.session_id.is_empty());
}

#[test]
fn test_pipeline_context_default_knobs() {
    let (context, _temp_dir) = create_test_context();

    assert_eq!(context.config.pick_idea, 1);
    assert_eq!(context.config.pick_problem, 1);
    assert!(!context.config.serve);
    assert!(!context.config.skip_deck);
    assert!(!context.config.verbose);
    assert_eq!(context.config.llm.max_tokens, 131072);
    assert_eq!(context.config.llm.temperature, 0.1);
}

#[test]
fn test_context_creation_with_nonexistent_output_path() {
    let config = Config {
        output_path: PathBuf::from("/nonexistent/presentations"),
        ..Default::default()
    };

    // 目录在落盘时才创建，上下文创建不受路径有效性影响
    assert!(PipelineContext::new(config).is_ok());
}

#[test]
fn test_timing_scope_phase_tracking() {
    let mut timing = TimingScope::new();
    timing.start_phase(TimingKeys::REFINE);
    let duration = timing.end_phase(TimingKeys::REFINE);

    assert!(duration.is_some());
    assert!(timing.get_phase_durations().contains_key(TimingKeys::REFINE));
}

#[test]
fn test_timing_scope_end_without_start() {
    let mut timing = TimingScope::new();
    assert!(timing.end_phase(TimingKeys::RESEARCH).is_none());
}

#[test]
fn test_timing_report_lists_phases() {
    let mut timing = TimingScope::new();
    timing.start_phase(TimingKeys::FUNDING);
    timing.end_phase(TimingKeys::FUNDING);

    let report = timing.generate_timing_report();
    assert!(report.contains("总执行时间"));
    assert!(report.contains(TimingKeys::FUNDING));
}

#[test]
fn test_all_phase_keys_are_distinct() {
    let keys = TimingKeys::get_all_phase_keys();
    let mut deduped = keys.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(keys.len(), deduped.len());
}

#[tokio::test]
async fn test_launch_rejects_missing_llm_key() {
    let config = Config {
        llm: crate::config::LLMConfig {
            api_key: String::new(),
            ..Default::default()
        },
        ..Default::default()
    };

    // VENTUREKIT_LLM_API_KEY设置时Default会带上密钥，这里强制清空
    let result = launch(&config).await;
    assert!(result.is_err());
}
