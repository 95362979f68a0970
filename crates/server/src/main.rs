use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, StatusCode, Uri},
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use catalog::Catalog;
use server_api::{
    browse_courses, enroll, enrollment_view, institute_dashboard, login_institute, login_student,
    payment_success, portal_index, register_institute, register_student, student_auth,
    ApiContext,
};
use shared::{
    domain::CourseId,
    error::{ApiError, ErrorCode},
    protocol::{
        routes, BrowseResponse, CourseQuery, CredentialsRequest, DashboardQuery, DashboardView,
        EnrollRequest, EnrollmentReceipt, EnrollmentView, FlowAccepted, InstituteRegisterRequest,
        PaymentSuccessQuery, PaymentSuccessView, PortalIndex, StudentAuthRequest,
        StudentRegisterRequest,
    },
};
use tower_http::limit::RequestBodyLimitLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod app_state;
mod config;

use app_state::AppState;
use config::load_settings;

type HttpError = (StatusCode, Json<ApiError>);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = load_settings();
    let catalog = Catalog::sample().context("sample catalog failed validation")?;
    info!(
        courses = catalog.len(),
        categories = catalog.categories().len(),
        institutes = catalog.institutes().len(),
        "catalog loaded"
    );

    let state = AppState {
        api: ApiContext::new(catalog, settings.pacing()),
        max_body_bytes: settings.max_body_bytes,
    };
    let app = build_router(Arc::new(state));

    let addr: SocketAddr = settings
        .server_bind
        .parse()
        .with_context(|| format!("invalid bind address '{}'", settings.server_bind))?;
    info!(%addr, "server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    let body_limit = RequestBodyLimitLayer::new(state.max_body_bytes);
    Router::new()
        .route(routes::HOME, get(home))
        .route(routes::HEALTHZ, get(healthz))
        .route(routes::INSTITUTE_REGISTER, post(http_register_institute))
        .route(routes::INSTITUTE_LOGIN, post(http_login_institute))
        .route(routes::INSTITUTE_DASHBOARD, get(http_institute_dashboard))
        .route(routes::STUDENT_AUTH, post(http_student_auth))
        .route(routes::STUDENT_LOGIN, post(http_login_student))
        .route(routes::STUDENT_REGISTER, post(http_register_student))
        .route(routes::COURSES, get(http_browse_courses))
        .route(
            routes::ENROLL,
            get(http_enrollment_view).post(http_enroll),
        )
        .route(routes::PAYMENT_SUCCESS, get(http_payment_success))
        .fallback(not_found)
        .layer(body_limit)
        .layer(middleware::map_response_with_state(
            state.clone(),
            oversized_body_as_api_error,
        ))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn home() -> Json<PortalIndex> {
    Json(portal_index())
}

async fn not_found(uri: Uri) -> HttpError {
    reject(ApiError::not_found(format!("no route for {}", uri.path())))
}

async fn http_register_institute(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<InstituteRegisterRequest>, JsonRejection>,
) -> Result<Json<FlowAccepted>, HttpError> {
    let req = json_body(payload)?;
    let accepted = register_institute(&state.api, req).await.map_err(reject)?;
    Ok(Json(accepted))
}

async fn http_login_institute(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<Json<FlowAccepted>, HttpError> {
    let req = json_body(payload)?;
    let accepted = login_institute(&state.api, req).await.map_err(reject)?;
    Ok(Json(accepted))
}

async fn http_institute_dashboard(
    State(state): State<Arc<AppState>>,
    query: Result<Query<DashboardQuery>, QueryRejection>,
) -> Result<Json<DashboardView>, HttpError> {
    let q = query_params(query)?;
    Ok(Json(institute_dashboard(&state.api, &q)))
}

async fn http_student_auth(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<StudentAuthRequest>, JsonRejection>,
) -> Result<Json<FlowAccepted>, HttpError> {
    let req = json_body(payload)?;
    let accepted = student_auth(&state.api, req).await.map_err(reject)?;
    Ok(Json(accepted))
}

async fn http_login_student(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<Json<FlowAccepted>, HttpError> {
    let req = json_body(payload)?;
    let accepted = login_student(&state.api, req).await.map_err(reject)?;
    Ok(Json(accepted))
}

async fn http_register_student(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<StudentRegisterRequest>, JsonRejection>,
) -> Result<Json<FlowAccepted>, HttpError> {
    let req = json_body(payload)?;
    let accepted = register_student(&state.api, req).await.map_err(reject)?;
    Ok(Json(accepted))
}

async fn http_browse_courses(
    State(state): State<Arc<AppState>>,
    query: Result<Query<CourseQuery>, QueryRejection>,
) -> Result<Json<BrowseResponse>, HttpError> {
    let q = query_params(query)?;
    let response = browse_courses(&state.api, &q).map_err(reject)?;
    Ok(Json(response))
}

async fn http_enrollment_view(
    State(state): State<Arc<AppState>>,
    Path(course_id): Path<String>,
) -> Result<Json<EnrollmentView>, HttpError> {
    let view = enrollment_view(&state.api, &CourseId(course_id)).map_err(reject)?;
    Ok(Json(view))
}

async fn http_enroll(
    State(state): State<Arc<AppState>>,
    Path(course_id): Path<String>,
    payload: Result<Json<EnrollRequest>, JsonRejection>,
) -> Result<Json<EnrollmentReceipt>, HttpError> {
    let req = json_body(payload)?;
    let receipt = enroll(&state.api, &CourseId(course_id), req)
        .await
        .map_err(reject)?;
    Ok(Json(receipt))
}

async fn http_payment_success(
    query: Result<Query<PaymentSuccessQuery>, QueryRejection>,
) -> Result<Json<PaymentSuccessView>, HttpError> {
    let q = query_params(query)?;
    Ok(Json(payment_success(&q)))
}

fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, HttpError> {
    payload.map(|Json(body)| body).map_err(|rejection| {
        // a body without content-length only trips the limit while being read
        let code = if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ErrorCode::PayloadTooLarge
        } else {
            ErrorCode::Validation
        };
        reject(ApiError::new(code, rejection.body_text()))
    })
}

fn query_params<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, HttpError> {
    query
        .map(|Query(params)| params)
        .map_err(|rejection| reject(ApiError::validation(rejection.body_text())))
}

/// `RequestBodyLimitLayer` answers a declared oversize body with plain text.
async fn oversized_body_as_api_error(
    State(state): State<Arc<AppState>>,
    response: Response,
) -> Response {
    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .is_some_and(|value| value.as_bytes().starts_with(b"application/json"));
    if response.status() != StatusCode::PAYLOAD_TOO_LARGE || is_json {
        return response;
    }
    reject(ApiError::payload_too_large(state.max_body_bytes)).into_response()
}

fn reject(err: ApiError) -> HttpError {
    let status = match err.code {
        ErrorCode::Validation => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
    };
    warn!(code = ?err.code, message = %err.message, "request rejected");
    (status, Json(err))
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
