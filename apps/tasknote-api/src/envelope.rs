//! Response envelope shared by every route.
//!
//! Success: `{ "status": "success", "code": 200, "data": ... }`.
//! Failure: `{ "status": "error", "code": 404, "message": "..." }`.

use axum::{
	Json,
	extract::rejection::JsonRejection,
	http::StatusCode,
	response::{IntoResponse, Response},
};
use serde::Serialize;

use tasknote_service::Error as ServiceError;

#[derive(Debug, Serialize)]
struct SuccessBody<T> {
	status: &'static str,
	code: u16,
	data: T,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	status: &'static str,
	code: u16,
	message: String,
}

#[derive(Debug)]
pub struct ApiSuccess<T> {
	status: StatusCode,
	data: T,
}
impl<T> ApiSuccess<T> {
	pub fn ok(data: T) -> Self {
		Self { status: StatusCode::OK, data }
	}

	pub fn created(data: T) -> Self {
		Self { status: StatusCode::CREATED, data }
	}
}
impl<T> IntoResponse for ApiSuccess<T>
where
	T: Serialize,
{
	fn into_response(self) -> Response {
		let body = SuccessBody { status: "success", code: self.status.as_u16(), data: self.data };

		(self.status, Json(body)).into_response()
	}
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	message: String,
}
impl ApiError {
	pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
		Self { status, message: message.into() }
	}

	pub fn bad_request(message: impl Into<String>) -> Self {
		Self::new(StatusCode::BAD_REQUEST, message)
	}

	/// Maps a service failure: not-found becomes 404, anything else 400 with `context`.
	pub fn from_service(err: ServiceError, context: &str) -> Self {
		match err {
			ServiceError::NotFound { message } => {
				tracing::debug!(%message, "Item not found.");

				Self::new(StatusCode::NOT_FOUND, "Item not found.")
			},
			err @ ServiceError::Persistence { .. } => {
				tracing::warn!(error = %err, "{context}");

				Self::bad_request(context)
			},
		}
	}
}
impl From<tasknote_domain::Error> for ApiError {
	fn from(err: tasknote_domain::Error) -> Self {
		tracing::debug!(error = %err, "Payload rejected.");

		Self::bad_request(err.to_string())
	}
}
impl From<JsonRejection> for ApiError {
	fn from(err: JsonRejection) -> Self {
		tracing::debug!(error = %err, "Malformed request body.");

		Self::bad_request(format!("Invalid payload: {}", err.body_text()))
	}
}
impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body = ErrorBody { status: "error", code: self.status.as_u16(), message: self.message };

		(self.status, Json(body)).into_response()
	}
}
