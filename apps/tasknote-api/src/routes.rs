use axum::{
	Json, Router,
	extract::{Path, State, rejection::JsonRejection},
	http::StatusCode,
	routing::{delete, get, post, put},
};

use crate::{
	envelope::{ApiError, ApiSuccess},
	state::AppState,
};
use tasknote_domain::{Note, NotePayload, Task, TaskPayload};

type ApiResult<T> = Result<ApiSuccess<T>, ApiError>;

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/task/all/{user_uid}", get(all_tasks))
		.route("/task/completed/{user_uid}", get(completed_tasks))
		.route("/task/priority/{user_uid}", get(priority_tasks))
		.route("/task/create/{user_uid}", post(create_task))
		.route("/task/update/{item_uid}", put(update_task))
		.route("/task/delete/{item_uid}", delete(delete_task))
		.route("/note/all/{user_uid}", get(all_notes))
		.route("/note/create/{user_uid}", post(create_note))
		.route("/note/update/{item_uid}", put(update_note))
		.route("/note/delete/{item_uid}", delete(delete_note))
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn all_tasks(
	State(state): State<AppState>,
	Path(user_uid): Path<String>,
) -> ApiResult<Vec<Task>> {
	let user_uid = require_user_uid(&user_uid)?;
	let tasks = state
		.service
		.list_tasks(user_uid)
		.await
		.map_err(|err| ApiError::from_service(err, "Could not fetch tasks."))?;

	Ok(ApiSuccess::ok(tasks))
}

async fn completed_tasks(
	State(state): State<AppState>,
	Path(user_uid): Path<String>,
) -> ApiResult<Vec<Task>> {
	let user_uid = require_user_uid(&user_uid)?;
	let tasks = state
		.service
		.list_completed_tasks(user_uid)
		.await
		.map_err(|err| ApiError::from_service(err, "Could not fetch tasks."))?;

	Ok(ApiSuccess::ok(tasks))
}

async fn priority_tasks(
	State(state): State<AppState>,
	Path(user_uid): Path<String>,
) -> ApiResult<Vec<Task>> {
	let user_uid = require_user_uid(&user_uid)?;
	let tasks = state
		.service
		.list_priority_tasks(user_uid)
		.await
		.map_err(|err| ApiError::from_service(err, "Could not fetch tasks."))?;

	Ok(ApiSuccess::ok(tasks))
}

async fn create_task(
	State(state): State<AppState>,
	Path(user_uid): Path<String>,
	payload: Result<Json<TaskPayload>, JsonRejection>,
) -> ApiResult<Task> {
	let user_uid = require_user_uid(&user_uid)?;
	let Json(payload) = payload?;
	let new = payload.validate_for_create()?;
	let task = state
		.service
		.create_task(user_uid, new)
		.await
		.map_err(|err| ApiError::from_service(err, "Could not create task."))?;

	Ok(ApiSuccess::created(task))
}

async fn update_task(
	State(state): State<AppState>,
	Path(item_uid): Path<String>,
	payload: Result<Json<TaskPayload>, JsonRejection>,
) -> ApiResult<Task> {
	let item_uid = require_item_uid(&item_uid)?;
	let Json(payload) = payload?;
	let patch = payload.validate_for_update()?;
	let task = state
		.service
		.update_task(item_uid, &patch)
		.await
		.map_err(|err| ApiError::from_service(err, "Could not update task."))?;

	Ok(ApiSuccess::ok(task))
}

async fn delete_task(
	State(state): State<AppState>,
	Path(item_uid): Path<String>,
) -> ApiResult<&'static str> {
	let item_uid = require_item_uid(&item_uid)?;

	state
		.service
		.delete_task(item_uid)
		.await
		.map_err(|err| ApiError::from_service(err, "Item could not be deleted."))?;

	Ok(ApiSuccess::ok("Task deleted successfully"))
}

async fn all_notes(
	State(state): State<AppState>,
	Path(user_uid): Path<String>,
) -> ApiResult<Vec<Note>> {
	let user_uid = require_user_uid(&user_uid)?;
	let notes = state
		.service
		.list_notes(user_uid)
		.await
		.map_err(|err| ApiError::from_service(err, "Could not fetch notes."))?;

	Ok(ApiSuccess::ok(notes))
}

async fn create_note(
	State(state): State<AppState>,
	Path(user_uid): Path<String>,
	payload: Result<Json<NotePayload>, JsonRejection>,
) -> ApiResult<Note> {
	let user_uid = require_user_uid(&user_uid)?;
	let Json(payload) = payload?;
	let new = payload.validate_for_create()?;
	let note = state
		.service
		.create_note(user_uid, new)
		.await
		.map_err(|err| ApiError::from_service(err, "Could not create note."))?;

	Ok(ApiSuccess::created(note))
}

async fn update_note(
	State(state): State<AppState>,
	Path(item_uid): Path<String>,
	payload: Result<Json<NotePayload>, JsonRejection>,
) -> ApiResult<Note> {
	let item_uid = require_item_uid(&item_uid)?;
	let Json(payload) = payload?;
	let patch = payload.validate_for_update()?;
	let note = state
		.service
		.update_note(item_uid, &patch)
		.await
		.map_err(|err| ApiError::from_service(err, "Could not update note."))?;

	Ok(ApiSuccess::ok(note))
}

async fn delete_note(
	State(state): State<AppState>,
	Path(item_uid): Path<String>,
) -> ApiResult<&'static str> {
	let item_uid = require_item_uid(&item_uid)?;

	state
		.service
		.delete_note(item_uid)
		.await
		.map_err(|err| ApiError::from_service(err, "Item could not be deleted."))?;

	Ok(ApiSuccess::ok("Note deleted successfully"))
}

fn require_user_uid(value: &str) -> Result<&str, ApiError> {
	require_id(value, "User uid is required.")
}

fn require_item_uid(value: &str) -> Result<&str, ApiError> {
	require_id(value, "Item uid is required.")
}

/// Rejects blank ids and passes everything else through unchanged.
fn require_id<'a>(value: &'a str, message: &str) -> Result<&'a str, ApiError> {
	if value.trim().is_empty() {
		return Err(ApiError::bad_request(message));
	}

	Ok(value)
}
