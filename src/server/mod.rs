//! HTTP API
//!
//! 每个路由对应流水线的一个阶段，请求间无共享状态：处理器先
//! fork_session再执行，LLM客户端与缓存在会话间共享。缺失必填字段
//! 返回400，下游模型/搜索失败统一映射为500。

use anyhow::Result;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::pipeline::agents::{
    ColdEmailInputs, ColdEmailWriter, DomainExtractor, IdeaRefiner, InvestorFinder,
    MarketResearcher, MvpInputs, MvpPlanner, ProblemGenerator, SolutionGenerator,
};
use crate::pipeline::context::PipelineContext;
use crate::pipeline::extractors::{extract_idea_names, extract_problem_statements};
use crate::pipeline::stage_agent::StageAgent;

/// 服务端共享状态
pub struct AppState {
    context: PipelineContext,
}

type ApiResult = Result<Json<Value>, (StatusCode, Json<Value>)>;

fn bad_request(message: &str) -> (StatusCode, Json<Value>) {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message })))
}

fn internal_error(err: anyhow::Error) -> (StatusCode, Json<Value>) {
    eprintln!("❌ 请求处理失败: {:#}", err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": err.to_string() })),
    )
}

/// 取必填字段，缺失或空白时生成400响应
fn required_field<'a>(
    value: &'a Option<String>,
    message: &str,
) -> Result<&'a str, (StatusCode, Json<Value>)> {
    match value.as_deref() {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(bad_request(message)),
    }
}

#[derive(Deserialize)]
struct IdeaRequest {
    idea: Option<String>,
}

#[derive(Deserialize)]
struct ReportRequest {
    report: Option<String>,
}

#[derive(Deserialize)]
struct ProblemRequest {
    problem: Option<String>,
}

#[derive(Deserialize)]
struct MvpRequest {
    startup_name: Option<String>,
    problem: Option<String>,
    solution: Option<String>,
    report: Option<String>,
}

#[derive(Deserialize)]
struct ColdEmailRequest {
    idea: Option<String>,
    investor_name: Option<String>,
}

/// 构建路由表
pub fn build_router(context: PipelineContext) -> Router {
    let state = Arc::new(AppState { context });

    Router::new()
        .route("/health", get(health))
        .route("/generate-ideas", post(generate_ideas))
        .route("/research", post(research))
        .route("/problem-statements", post(problem_statements))
        .route("/generate-solution", post(generate_solution))
        .route("/mvp", post(mvp))
        .route("/investors", post(investors))
        .route("/cold-email", post(cold_email))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// 启动HTTP API服务
pub async fn serve(context: PipelineContext) -> Result<()> {
    let addr = format!(
        "{}:{}",
        context.config.server.host, context.config.server.port
    );
    let app = build_router(context);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    println!("🚀 HTTP API服务已启动: http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

async fn health(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "provider": state.context.config.llm.provider.to_string(),
        "model_efficient": state.context.config.llm.model_efficient,
        "model_powerful": state.context.config.llm.model_powerful,
    }))
}

async fn generate_ideas(
    State(state): State<Arc<AppState>>,
    Json(req): Json<IdeaRequest>,
) -> ApiResult {
    let idea = required_field(&req.idea, "Missing idea")?.to_string();

    let context = state.context.fork_session();
    let refined = IdeaRefiner
        .execute(&context, &idea)
        .await
        .map_err(internal_error)?;
    let idea_names = extract_idea_names(&refined);

    Ok(Json(json!({ "refined": refined, "idea_names": idea_names })))
}

async fn research(State(state): State<Arc<AppState>>, Json(req): Json<IdeaRequest>) -> ApiResult {
    let idea = required_field(&req.idea, "Missing idea")?.to_string();

    let context = state.context.fork_session();
    let report = MarketResearcher
        .execute(&context, &idea)
        .await
        .map_err(internal_error)?;

    Ok(Json(json!({ "report": report })))
}

async fn problem_statements(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ReportRequest>,
) -> ApiResult {
    let report = required_field(&req.report, "Missing report")?.to_string();

    let context = state.context.fork_session();
    let markdown = ProblemGenerator
        .execute(&context, &report)
        .await
        .map_err(internal_error)?;
    let problems = extract_problem_statements(&markdown);

    Ok(Json(json!({ "problems": problems })))
}

async fn generate_solution(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ProblemRequest>,
) -> ApiResult {
    let problem = required_field(&req.problem, "Missing problem")?.to_string();

    let context = state.context.fork_session();
    let solution = SolutionGenerator
        .execute(&context, &problem)
        .await
        .map_err(internal_error)?;

    Ok(Json(json!({ "solution": solution })))
}

async fn mvp(State(state): State<Arc<AppState>>, Json(req): Json<MvpRequest>) -> ApiResult {
    let problem = required_field(&req.problem, "Missing fields")?.to_string();
    let solution = required_field(&req.solution, "Missing fields")?.to_string();
    let report = required_field(&req.report, "Missing fields")?.to_string();
    let context = state.context.fork_session();
    // 请求体里的名称优先，缺省时回落到服务配置的名称或默认名
    let startup_name = context
        .config
        .get_startup_name(req.startup_name.as_deref());
    let inputs = MvpInputs {
        startup_name,
        problem,
        solution,
        report,
    };
    let mvp_plan = MvpPlanner
        .execute(&context, &inputs)
        .await
        .map_err(internal_error)?;

    Ok(Json(json!({ "mvp_plan": mvp_plan })))
}

async fn investors(State(state): State<Arc<AppState>>, Json(req): Json<IdeaRequest>) -> ApiResult {
    let idea = required_field(&req.idea, "Missing idea")?.to_string();

    let context = state.context.fork_session();
    let domain = DomainExtractor
        .execute(&context, &idea)
        .await
        .map_err(internal_error)?;
    let records = InvestorFinder
        .find(&context, &domain)
        .await
        .map_err(internal_error)?;

    Ok(Json(json!({ "domain": domain, "investors": records })))
}

async fn cold_email(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ColdEmailRequest>,
) -> ApiResult {
    let idea = required_field(&req.idea, "Missing data")?.to_string();
    let investor_name = required_field(&req.investor_name, "Missing data")?.to_string();

    let context = state.context.fork_session();
    let inputs = ColdEmailInputs {
        idea,
        investor_name,
    };
    let email = ColdEmailWriter
        .execute(&context, &inputs)
        .await
        .map_err(internal_error)?;

    Ok(Json(json!({ "email": email })))
}
