//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use swap_types::{AppError, ConvertError, ConvertRequest, ConvertResponse, PriceSource, token_prices};

use crate::ConversionService;

/// Application state shared across handlers.
pub struct AppState<S: PriceSource> {
    pub service: ConversionService<S>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl From<ConvertError> for ApiError {
    fn from(err: ConvertError) -> Self {
        ApiError(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::InvalidTokenPrice { currency } => {
                tracing::info!(%currency, "No usable price for currency");
                (StatusCode::UNPROCESSABLE_ENTITY, self.0.to_string())
            }
            AppError::Upstream(msg) => {
                tracing::error!(error = %msg, "Price source failure");
                (StatusCode::BAD_GATEWAY, msg.clone())
            }
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = serde_json::json!({
            "error": message,
            "code": status.as_u16()
        });

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// List the current deduplicated prices, sorted by currency.
#[tracing::instrument(skip(state))]
pub async fn list_prices<S: PriceSource>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<impl IntoResponse, ApiError> {
    let table = state.service.prices().await?;
    Ok(Json(token_prices(&table)))
}

/// Convert an amount between two currencies.
///
/// Bodies that fail to deserialize are reported as 400 in the usual error
/// shape, so 422 stays reserved for `InvalidTokenPrice`.
#[tracing::instrument(skip(state, payload))]
pub async fn convert<S: PriceSource>(
    State(state): State<Arc<AppState<S>>>,
    payload: Result<Json<ConvertRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    tracing::debug!(
        from = %req.input_currency,
        to = %req.output_currency,
        amount = req.input_amount,
        "Converting"
    );
    let request = req.validate().map_err(AppError::from)?;
    let result = state.service.convert(&request).await?;
    Ok(Json(ConvertResponse::new(request, result)))
}
