use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bnos_core::domain::inputs::BusinessInputs;
use bnos_core::domain::summary::{
    Alert, Asset, Campaign, CustomerIntelligence, DashboardSummary, Department, Employee,
    FinancialMetrics, ForecastScenario, GlobalRoi, MarketData, OperationalMetrics, Product,
    Recommendation, TimeSeriesPoint,
};
use bnos_core::llm::openai::OpenAiChatClient;
use bnos_core::llm::{ChatClient, ChatInput, ChatTurn};
use bnos_core::storage::{DashboardStore, MemoryStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = bnos_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer())
        .init();

    // The chat proxy degrades to a 400 when no API key is configured, same
    // as the rest of the dashboard staying up without the assistant.
    let chat: Option<Arc<OpenAiChatClient>> = match OpenAiChatClient::from_settings(&settings) {
        Ok(client) => Some(Arc::new(client)),
        Err(e) => {
            tracing::warn!(error = %e, "assistant disabled; OPENAI_API_KEY not configured");
            None
        }
    };

    let state = AppState {
        store: Arc::new(MemoryStore::default()),
        chat,
    };

    let app = Router::new()
        .route("/healthz", get(healthz))
        .route("/api/dashboard", get(get_dashboard))
        .route("/api/global-roi", get(get_global_roi))
        .route("/api/financial-metrics", get(get_financial_metrics))
        .route("/api/market-data", get(get_market_data))
        .route("/api/operational-metrics", get(get_operational_metrics))
        .route("/api/customer-intelligence", get(get_customer_intelligence))
        .route("/api/recommendations", get(get_recommendations))
        .route("/api/alerts", get(get_alerts))
        .route("/api/alerts/:id/dismiss", post(dismiss_alert))
        .route("/api/revenue-history", get(get_revenue_history))
        .route("/api/roi-history", get(get_roi_history))
        .route("/api/departments", get(get_departments))
        .route("/api/products", get(get_products))
        .route("/api/campaigns", get(get_campaigns))
        .route("/api/employees", get(get_employees))
        .route("/api/assets", get(get_assets))
        .route("/api/forecasts", get(get_forecasts))
        .route("/api/inputs", get(get_inputs).put(put_inputs))
        .route("/api/ai/chat", post(ai_chat))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3000);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));

    tracing::info!(%addr, "api listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn healthz() -> &'static str {
    "ok"
}

#[derive(Clone)]
struct AppState {
    store: Arc<MemoryStore>,
    chat: Option<Arc<OpenAiChatClient>>,
}

fn internal_error(e: anyhow::Error) -> StatusCode {
    sentry_anyhow::capture_anyhow(&e);
    tracing::error!(error = %e, "request failed");
    StatusCode::INTERNAL_SERVER_ERROR
}

async fn get_dashboard(
    State(state): State<AppState>,
) -> Result<Json<DashboardSummary>, StatusCode> {
    state.store.summary().map(Json).map_err(internal_error)
}

async fn get_global_roi(State(state): State<AppState>) -> Result<Json<GlobalRoi>, StatusCode> {
    state
        .store
        .summary()
        .map(|s| Json(s.global_roi))
        .map_err(internal_error)
}

async fn get_financial_metrics(
    State(state): State<AppState>,
) -> Result<Json<FinancialMetrics>, StatusCode> {
    state
        .store
        .summary()
        .map(|s| Json(s.financial_metrics))
        .map_err(internal_error)
}

async fn get_market_data(State(state): State<AppState>) -> Result<Json<MarketData>, StatusCode> {
    state
        .store
        .summary()
        .map(|s| Json(s.market_data))
        .map_err(internal_error)
}

async fn get_operational_metrics(
    State(state): State<AppState>,
) -> Result<Json<OperationalMetrics>, StatusCode> {
    state
        .store
        .summary()
        .map(|s| Json(s.operational_metrics))
        .map_err(internal_error)
}

async fn get_customer_intelligence(
    State(state): State<AppState>,
) -> Result<Json<CustomerIntelligence>, StatusCode> {
    state
        .store
        .summary()
        .map(|s| Json(s.customer_intelligence))
        .map_err(internal_error)
}

async fn get_recommendations(
    State(state): State<AppState>,
) -> Result<Json<Vec<Recommendation>>, StatusCode> {
    state
        .store
        .summary()
        .map(|s| Json(s.recommendations))
        .map_err(internal_error)
}

async fn get_alerts(State(state): State<AppState>) -> Result<Json<Vec<Alert>>, StatusCode> {
    state
        .store
        .summary()
        .map(|s| Json(s.alerts))
        .map_err(internal_error)
}

#[derive(Debug, Serialize)]
struct DismissReply {
    success: bool,
}

async fn dismiss_alert(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<DismissReply> {
    state.store.dismiss_alert(&id);
    Json(DismissReply { success: true })
}

async fn get_revenue_history(
    State(state): State<AppState>,
) -> Result<Json<Vec<TimeSeriesPoint>>, StatusCode> {
    state
        .store
        .summary()
        .map(|s| Json(s.revenue_history))
        .map_err(internal_error)
}

async fn get_roi_history(
    State(state): State<AppState>,
) -> Result<Json<Vec<TimeSeriesPoint>>, StatusCode> {
    state
        .store
        .summary()
        .map(|s| Json(s.roi_history))
        .map_err(internal_error)
}

async fn get_departments(State(state): State<AppState>) -> Json<Vec<Department>> {
    Json(state.store.departments())
}

async fn get_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.store.products())
}

async fn get_campaigns(State(state): State<AppState>) -> Json<Vec<Campaign>> {
    Json(state.store.campaigns())
}

async fn get_employees(State(state): State<AppState>) -> Json<Vec<Employee>> {
    Json(state.store.employees())
}

async fn get_assets(State(state): State<AppState>) -> Json<Vec<Asset>> {
    Json(state.store.assets())
}

async fn get_forecasts(State(state): State<AppState>) -> Json<Vec<ForecastScenario>> {
    Json(state.store.forecasts())
}

async fn get_inputs(State(state): State<AppState>) -> Json<BusinessInputs> {
    Json(state.store.load_inputs())
}

async fn put_inputs(
    State(state): State<AppState>,
    Json(inputs): Json<BusinessInputs>,
) -> Result<Json<DashboardSummary>, (StatusCode, Json<ErrorReply>)> {
    state.store.save_inputs(inputs).map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorReply {
                error: format!("{e:#}"),
            }),
        )
    })?;

    state.store.summary().map(Json).map_err(|e| {
        (
            internal_error(e),
            Json(ErrorReply {
                error: "Failed to compute dashboard".to_string(),
            }),
        )
    })
}

#[derive(Debug, Serialize)]
struct ErrorReply {
    error: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChatBody {
    message: String,
    #[serde(default)]
    context: Option<DashboardSummary>,
    #[serde(default)]
    conversation_history: Vec<ChatTurn>,
}

#[derive(Debug, Serialize)]
struct ChatReply {
    response: String,
}

async fn ai_chat(
    State(state): State<AppState>,
    Json(body): Json<ChatBody>,
) -> Result<Json<ChatReply>, (StatusCode, Json<ErrorReply>)> {
    let Some(chat) = &state.chat else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorReply {
                error: "AI service not configured. Please set OPENAI_API_KEY environment variable."
                    .to_string(),
            }),
        ));
    };

    let input = ChatInput {
        message: body.message,
        context: body.context,
        history: body.conversation_history,
    };

    match chat.chat(input).await {
        Ok(response) => Ok(Json(ChatReply { response })),
        Err(e) => {
            sentry_anyhow::capture_anyhow(&e);
            tracing::error!(error = %e, "chat proxy failed");
            Err((
                StatusCode::BAD_GATEWAY,
                Json(ErrorReply {
                    error: "Failed to get AI response".to_string(),
                }),
            ))
        }
    }
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

fn init_sentry(settings: &bnos_core::config::Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}
