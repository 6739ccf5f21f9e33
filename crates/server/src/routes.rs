use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{Html, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use protocol::{AnalysisRequest, AnalysisResult};
use scorer::{lexical_diversity, RiskScorer};
use std::path::PathBuf;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) scorer: Arc<RiskScorer>,
    pub(crate) index_file: Arc<PathBuf>,
}

pub(crate) fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(landing))
        .route("/health", get(health))
        .route("/analyze", post(analyze))
        .with_state(state)
        .layer(middleware::from_fn(log_http_request))
}

async fn health() -> &'static str {
    "ok"
}

async fn landing(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    match tokio::fs::read_to_string(state.index_file.as_path()).await {
        Ok(body) => Ok(Html(body)),
        Err(err) => {
            tracing::warn!(
                event = "landing.read_failed",
                path = %state.index_file.display(),
                error = %err,
                "landing page unavailable"
            );
            Err(StatusCode::NOT_FOUND)
        }
    }
}

async fn analyze(
    State(state): State<AppState>,
    Json(payload): Json<AnalysisRequest>,
) -> Json<AnalysisResult> {
    let id = Uuid::new_v4();
    let result = state.scorer.analyze(&payload);
    tracing::info!(
        event = "analysis.completed",
        id = %id,
        source_type = payload.source_type.as_str(),
        content_len = payload.content.len(),
        lexical_diversity = lexical_diversity(&payload.content),
        risk_score = result.risk_score,
        verdict = ?result.verdict,
        signal_count = result.signal_count(),
    );
    Json(result)
}

async fn log_http_request(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let host = req
        .headers()
        .get("host")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-")
        .to_string();
    let response = next.run(req).await;
    let status = response.status();
    tracing::info!(
        method = %method,
        uri = %uri,
        host = %host,
        status = %status,
        "http request"
    );
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use protocol::{SourceType, Verdict, RECOMMEND_CAUTION};
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_dir(prefix: &str) -> PathBuf {
        let mut dir = std::env::temp_dir();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        dir.push(format!("{prefix}-{nanos}"));
        fs::create_dir_all(&dir).expect("create temp dir");
        dir
    }

    fn test_state(index_file: PathBuf) -> AppState {
        AppState {
            scorer: Arc::new(RiskScorer::builtin().expect("builtin scorer")),
            index_file: Arc::new(index_file),
        }
    }

    #[tokio::test]
    async fn analyze_returns_scored_result() {
        let state = test_state(PathBuf::from("unused.html"));
        let request = AnalysisRequest {
            content: "Your bank needs you to verify your login".to_string(),
            source_type: SourceType::Email,
        };
        let Json(result) = analyze(State(state), Json(request)).await;
        assert_eq!(result.risk_score, 25);
        assert_eq!(result.verdict, Verdict::Suspicious);
        assert_eq!(result.recommendation, RECOMMEND_CAUTION);

        let value = serde_json::to_value(&result).expect("serialize");
        assert_eq!(value["verdict"], "SUSPICIOUS");
        assert_eq!(
            value["analysis"]["phishing_signals"],
            serde_json::json!(["Urgency detected: 'verify'", "Financial request: 'bank'"])
        );
    }

    #[tokio::test]
    async fn analyze_accepts_empty_content() {
        let state = test_state(PathBuf::from("unused.html"));
        let request: AnalysisRequest =
            serde_json::from_str(r#"{"content":"","source_type":"chat"}"#).expect("request");
        let Json(result) = analyze(State(state), Json(request)).await;
        assert_eq!(result.risk_score, 0);
        assert_eq!(result.verdict, Verdict::Safe);
    }

    #[tokio::test]
    async fn landing_serves_index_file() {
        let dir = temp_dir("phishguard-landing");
        let path = dir.join("index.html");
        fs::write(&path, "<h1>scan</h1>").expect("write index");
        let Html(body) = landing(State(test_state(path))).await.expect("landing");
        assert_eq!(body, "<h1>scan</h1>");
        let _ = fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn landing_missing_file_is_not_found() {
        let dir = temp_dir("phishguard-landing-missing");
        match landing(State(test_state(dir.join("index.html")))).await {
            Err(status) => assert_eq!(status, StatusCode::NOT_FOUND),
            Ok(_) => panic!("expected missing landing page"),
        }
        let _ = fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn health_reports_ok() {
        assert_eq!(health().await, "ok");
    }
}
