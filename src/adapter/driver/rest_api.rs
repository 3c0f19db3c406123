use axum::{
    body::Body,
    extract::{rejection::JsonRejection, Path, State},
    http::{Request, StatusCode},
    response::Json,
    routing::{get, patch},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::adapter::driver::request_dto::{CreateSpeciesRequest, QuantityRequest};
use crate::adapter::driver::response_dto::SpeciesResponse;
use crate::application::service::{SpeciesApplicationService, SpeciesQueryService};
use crate::application::ApplicationError;
use crate::domain::error::DomainError;
use crate::domain::model::SpeciesId;
use crate::domain::port::SpeciesRepository;

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

type ApiResult<T> = Result<T, (StatusCode, Json<ApiError>)>;

fn api_error(status: StatusCode, code: &str, error: impl Into<String>) -> (StatusCode, Json<ApiError>) {
    (
        status,
        Json(ApiError {
            error: error.into(),
            code: code.to_string(),
        }),
    )
}

// アプリケーションサービスを含む状態
#[derive(Clone)]
pub struct AppState {
    pub species_service: Arc<SpeciesApplicationService>,
    pub species_query_service: Arc<SpeciesQueryService>,
}

impl AppState {
    /// 同じリポジトリを共有する更新系・参照系サービスを組み立てる
    pub fn new(species_repository: Arc<dyn SpeciesRepository>) -> Self {
        Self {
            species_service: Arc::new(SpeciesApplicationService::new(species_repository.clone())),
            species_query_service: Arc::new(SpeciesQueryService::new(species_repository)),
        }
    }
}

// REST APIルーターを作成
// GET（種名）とDELETE（ID）は同じパスを共有するため、パラメータ名を揃えている
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/v1/species", get(list_species).post(create_species))
        .route("/api/v1/species/id/:id", get(get_species_by_id))
        .route(
            "/api/v1/species/:key",
            get(get_species_by_name).delete(delete_species),
        )
        .route("/api/v1/species/:key/increment", patch(increment_quantity))
        .route("/api/v1/species/:key/decrement", patch(decrement_quantity))
}

/// ルーターに状態とミドルウェアを適用したアプリケーションを作成
/// 各リクエストはメソッド・URI・相関IDを持つスパン内で処理される
pub fn app(state: AppState) -> Router {
    let trace_layer = TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
        tracing::info_span!(
            "http_request",
            method = %request.method(),
            uri = %request.uri(),
            correlation_id = %Uuid::new_v4(),
        )
    });

    create_router().with_state(state).layer(
        ServiceBuilder::new()
            .layer(trace_layer)
            .layer(CorsLayer::permissive()),
    )
}

// ヘルスチェックエンドポイント
async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "zoo-species-inventory",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

// 種登録エンドポイント
async fn create_species(
    State(state): State<AppState>,
    payload: Result<Json<CreateSpeciesRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<SpeciesResponse>)> {
    let Json(request) = payload.map_err(map_json_rejection)?;
    let species = request.into_species().map_err(map_domain_error)?;

    match state.species_service.create_species(species).await {
        Ok(saved) => Ok((StatusCode::CREATED, Json(SpeciesResponse::from_species(&saved)))),
        Err(err) => Err(map_application_error(err)),
    }
}

// 種一覧取得エンドポイント
async fn list_species(State(state): State<AppState>) -> ApiResult<Json<Vec<SpeciesResponse>>> {
    match state.species_query_service.list_species().await {
        Ok(species) => Ok(Json(species.iter().map(SpeciesResponse::from_species).collect())),
        Err(err) => Err(map_application_error(err)),
    }
}

// 種名による取得エンドポイント
async fn get_species_by_name(
    State(state): State<AppState>,
    Path(species_name): Path<String>,
) -> ApiResult<Json<SpeciesResponse>> {
    match state.species_query_service.get_species_by_name(&species_name).await {
        Ok(species) => Ok(Json(SpeciesResponse::from_species(&species))),
        Err(err) => Err(map_application_error(err)),
    }
}

// 種IDによる取得エンドポイント
async fn get_species_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<SpeciesResponse>> {
    let id = parse_species_id(&id)?;

    match state.species_query_service.get_species_by_id(id).await {
        Ok(species) => Ok(Json(SpeciesResponse::from_species(&species))),
        Err(err) => Err(map_application_error(err)),
    }
}

// 種削除エンドポイント
async fn delete_species(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_species_id(&id)?;

    match state.species_service.delete_species(id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(err) => Err(map_application_error(err)),
    }
}

// 頭数増加エンドポイント
async fn increment_quantity(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<QuantityRequest>, JsonRejection>,
) -> ApiResult<Json<SpeciesResponse>> {
    let id = parse_species_id(&id)?;
    let Json(request) = payload.map_err(map_json_rejection)?;
    let amount = request.into_amount().map_err(map_domain_error)?;

    match state.species_service.increment_quantity(id, amount).await {
        Ok(species) => Ok(Json(SpeciesResponse::from_species(&species))),
        Err(err) => Err(map_application_error(err)),
    }
}

// 頭数減少エンドポイント
async fn decrement_quantity(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<QuantityRequest>, JsonRejection>,
) -> ApiResult<Json<SpeciesResponse>> {
    let id = parse_species_id(&id)?;
    let Json(request) = payload.map_err(map_json_rejection)?;
    let amount = request.into_amount().map_err(map_domain_error)?;

    match state.species_service.decrement_quantity(id, amount).await {
        Ok(species) => Ok(Json(SpeciesResponse::from_species(&species))),
        Err(err) => Err(map_application_error(err)),
    }
}

fn parse_species_id(raw: &str) -> ApiResult<SpeciesId> {
    SpeciesId::from_string(raw)
        .map_err(|_| api_error(StatusCode::BAD_REQUEST, "INVALID_ID", format!("Invalid species id: {}", raw)))
}

fn map_json_rejection(rejection: JsonRejection) -> (StatusCode, Json<ApiError>) {
    tracing::warn!(error = %rejection.body_text(), "request body rejected");
    api_error(StatusCode::BAD_REQUEST, "INVALID_REQUEST_BODY", rejection.body_text())
}

// アプリケーションエラーを適切なHTTPステータスコードとエラーコードにマッピング
fn map_application_error(err: ApplicationError) -> (StatusCode, Json<ApiError>) {
    match err {
        ApplicationError::AlreadyExists(_) => {
            api_error(StatusCode::CONFLICT, "SPECIES_ALREADY_EXISTS", err.to_string())
        }
        ApplicationError::NotFound(_) => {
            api_error(StatusCode::NOT_FOUND, "SPECIES_NOT_FOUND", err.to_string())
        }
        ApplicationError::DomainError(domain_err) => map_domain_error(domain_err),
        ApplicationError::RepositoryError(repo_err) => {
            tracing::error!(error = %repo_err, "repository failure");
            api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "REPOSITORY_ERROR",
                repo_err.to_string(),
            )
        }
    }
}

// ドメインエラーを適切なHTTPステータスコードとエラーコードにマッピング
fn map_domain_error(domain_err: DomainError) -> (StatusCode, Json<ApiError>) {
    let code = match &domain_err {
        DomainError::LimitExceeded { .. } => "LIMIT_EXCEEDED",
        DomainError::AlreadyZero => "ALREADY_ZERO",
        DomainError::InvalidSpeciesName(_) => "INVALID_SPECIES_NAME",
        DomainError::InvalidQuantity(_) => "INVALID_QUANTITY",
        DomainError::InvalidValue(_) => "INVALID_REQUEST_BODY",
    };
    api_error(StatusCode::BAD_REQUEST, code, domain_err.to_string())
}
