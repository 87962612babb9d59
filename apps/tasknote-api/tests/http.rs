use axum::{
	Router,
	body::{self, Body},
	http::{Request, StatusCode},
};
use std::sync::Arc;

use serde_json::Value;
use tower::util::ServiceExt;

use tasknote_api::{routes, state::AppState};
use tasknote_config::{Config, Postgres, Security, Service, Storage, StorageBackend};
use tasknote_domain::{Document, Flag};
use tasknote_service::{BoxFuture, Stores, TasknoteService};
use tasknote_storage::Store;
use tasknote_testkit::TestDatabase;

/// Fails every call as an unreachable database would.
struct UnavailableStore;
impl UnavailableStore {
	fn failure<'a, T>() -> BoxFuture<'a, tasknote_storage::Result<T>>
	where
		T: Send + 'a,
	{
		Box::pin(async {
			Err(tasknote_storage::Error::InvalidArgument("connection refused".to_string()))
		})
	}
}
impl<D> Store<D> for UnavailableStore
where
	D: Document,
{
	fn save<'a>(&'a self, _doc: &'a D) -> BoxFuture<'a, tasknote_storage::Result<D>> {
		Self::failure()
	}

	fn find_by_uid<'a>(
		&'a self,
		_uid: &'a str,
	) -> BoxFuture<'a, tasknote_storage::Result<Option<D>>> {
		Self::failure()
	}

	fn find_by_owner<'a>(
		&'a self,
		_user_uid: &'a str,
	) -> BoxFuture<'a, tasknote_storage::Result<Vec<D>>> {
		Self::failure()
	}

	fn find_by_owner_and_flag<'a>(
		&'a self,
		_user_uid: &'a str,
		_flag: Flag,
		_value: bool,
	) -> BoxFuture<'a, tasknote_storage::Result<Vec<D>>> {
		Self::failure()
	}

	fn delete<'a>(&'a self, _doc: &'a D) -> BoxFuture<'a, tasknote_storage::Result<()>> {
		Self::failure()
	}
}

fn test_config(backend: StorageBackend, postgres: Option<Postgres>) -> Config {
	Config {
		service: Service { http_bind: "127.0.0.1:0".to_string(), log_level: "info".to_string() },
		storage: Storage { backend, postgres },
		security: Security { bind_localhost_only: true },
	}
}

async fn memory_app() -> Router {
	let state = AppState::new(test_config(StorageBackend::Memory, None))
		.await
		.expect("Failed to initialize app state.");

	routes::router(state)
}

async fn call(
	app: &Router,
	method: &str,
	uri: &str,
	payload: Option<Value>,
) -> (StatusCode, Value) {
	let mut builder = Request::builder().method(method).uri(uri);
	let body = match payload {
		Some(payload) => {
			builder = builder.header("content-type", "application/json");

			Body::from(payload.to_string())
		},
		None => Body::empty(),
	};
	let response = app
		.clone()
		.oneshot(builder.body(body).expect("Failed to build request."))
		.await
		.expect("Failed to call router.");
	let status = response.status();
	let bytes = body::to_bytes(response.into_body(), usize::MAX)
		.await
		.expect("Failed to read response body.");
	let json = if bytes.is_empty() {
		Value::Null
	} else {
		serde_json::from_slice(&bytes).expect("Failed to parse response.")
	};

	(status, json)
}

fn task_payload(completed: bool) -> Value {
	serde_json::json!({
		"title": "T",
		"description": "D",
		"priority": true,
		"completed": completed
	})
}

#[tokio::test]
async fn health_ok() {
	let app = memory_app().await;
	let (status, _) = call(&app, "GET", "/health", None).await;

	assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn task_lifecycle_over_http() {
	let app = memory_app().await;
	let (status, json) = call(&app, "POST", "/task/create/alice", Some(task_payload(false))).await;

	assert_eq!(status, StatusCode::CREATED);
	assert_eq!(json["status"], "success");
	assert_eq!(json["code"], 201);

	let task = &json["data"];

	assert!(task.get("id").is_none());
	assert_eq!(task["type"], "task");
	assert_eq!(task["userUid"], "alice");
	assert_eq!(task["completed"], false);
	assert!(task["completedAt"].is_null());
	assert_eq!(task["createdAt"], task["updatedAt"]);

	let uid = task["uid"].as_str().expect("Task uid must be a string.").to_string();
	let (status, json) = call(
		&app,
		"PUT",
		&format!("/task/update/{uid}"),
		Some(serde_json::json!({ "completed": true })),
	)
	.await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(json["code"], 200);
	assert_eq!(json["data"]["completed"], true);
	assert_eq!(json["data"]["title"], "T");

	let completed_at = json["data"]["completedAt"].clone();

	assert!(completed_at.is_i64());

	let (_, json) = call(
		&app,
		"PUT",
		&format!("/task/update/{uid}"),
		Some(serde_json::json!({ "completed": true })),
	)
	.await;

	assert_eq!(json["data"]["completedAt"], completed_at);

	let (status, json) = call(&app, "GET", "/task/completed/alice", None).await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(json["data"].as_array().map(Vec::len), Some(1));

	let (_, json) = call(
		&app,
		"PUT",
		&format!("/task/update/{uid}"),
		Some(serde_json::json!({ "completed": false })),
	)
	.await;

	assert!(json["data"]["completedAt"].is_null());

	let (_, json) = call(&app, "GET", "/task/completed/alice", None).await;

	assert_eq!(json["data"].as_array().map(Vec::len), Some(0));

	let (_, json) = call(&app, "GET", "/task/priority/alice", None).await;

	assert_eq!(json["data"].as_array().map(Vec::len), Some(1));

	let (status, json) = call(&app, "DELETE", &format!("/task/delete/{uid}"), None).await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(json["data"], "Task deleted successfully");

	let (_, json) = call(&app, "GET", "/task/all/alice", None).await;

	assert_eq!(json["data"], serde_json::json!([]));
}

#[tokio::test]
async fn missing_items_are_not_found() {
	let app = memory_app().await;
	let (status, json) = call(&app, "DELETE", "/task/delete/missing-uid", None).await;

	assert_eq!(status, StatusCode::NOT_FOUND);
	assert_eq!(json["status"], "error");
	assert_eq!(json["code"], 404);
	assert!(json["message"].is_string());

	let (status, _) = call(
		&app,
		"PUT",
		"/task/update/missing-uid",
		Some(serde_json::json!({ "title": "x" })),
	)
	.await;

	assert_eq!(status, StatusCode::NOT_FOUND);

	let (status, _) = call(&app, "DELETE", "/note/delete/missing-uid", None).await;

	assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_payloads_are_bad_requests() {
	let app = memory_app().await;
	let (status, json) = call(
		&app,
		"POST",
		"/task/create/alice",
		Some(serde_json::json!({ "title": "T", "description": "D" })),
	)
	.await;

	assert_eq!(status, StatusCode::BAD_REQUEST);
	assert_eq!(json["status"], "error");
	assert_eq!(json["code"], 400);

	let blank_title = serde_json::json!({ "title": " ", "text": "" });
	let (status, _) = call(&app, "POST", "/note/create/alice", Some(blank_title)).await;

	assert_eq!(status, StatusCode::BAD_REQUEST);

	let (status, _) = call(&app, "PUT", "/note/update/some-uid", Some(serde_json::json!({}))).await;

	assert_eq!(status, StatusCode::BAD_REQUEST);

	let (status, _) = call(&app, "POST", "/task/create/alice", None).await;

	assert_eq!(status, StatusCode::BAD_REQUEST);

	let (status, json) = call(&app, "GET", "/task/all/%20", None).await;

	assert_eq!(status, StatusCode::BAD_REQUEST);
	assert_eq!(json["message"], "User uid is required.");
}

#[tokio::test]
async fn padded_ids_are_kept_verbatim() {
	let app = memory_app().await;
	let (status, json) =
		call(&app, "POST", "/task/create/%20alice", Some(task_payload(false))).await;

	assert_eq!(status, StatusCode::CREATED);
	assert_eq!(json["data"]["userUid"], " alice");

	let (_, json) = call(&app, "GET", "/task/all/alice", None).await;

	assert_eq!(json["data"], serde_json::json!([]));

	let (_, json) = call(&app, "GET", "/task/all/%20alice", None).await;

	assert_eq!(json["data"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn storage_failures_are_bad_requests() {
	let stores = Stores::new(Arc::new(UnavailableStore), Arc::new(UnavailableStore));
	let app = routes::router(AppState::from_service(TasknoteService::new(stores)));
	let (status, json) = call(&app, "GET", "/task/all/alice", None).await;

	assert_eq!(status, StatusCode::BAD_REQUEST);
	assert_eq!(json["status"], "error");
	assert_eq!(json["code"], 400);
	assert_eq!(json["message"], "Could not fetch tasks.");

	let (status, json) = call(&app, "POST", "/task/create/alice", Some(task_payload(false))).await;

	assert_eq!(status, StatusCode::BAD_REQUEST);
	assert_eq!(json["message"], "Could not create task.");

	let (status, json) = call(&app, "DELETE", "/note/delete/some-uid", None).await;

	assert_eq!(status, StatusCode::BAD_REQUEST);
	assert_eq!(json["message"], "Item could not be deleted.");
}

#[tokio::test]
async fn note_lifecycle_over_http() {
	let app = memory_app().await;
	let (status, json) = call(
		&app,
		"POST",
		"/note/create/alice",
		Some(serde_json::json!({ "title": "Groceries", "text": "milk" })),
	)
	.await;

	assert_eq!(status, StatusCode::CREATED);
	assert_eq!(json["data"]["type"], "note");

	let uid = json["data"]["uid"].as_str().expect("Note uid must be a string.").to_string();
	let (status, json) = call(
		&app,
		"PUT",
		&format!("/note/update/{uid}"),
		Some(serde_json::json!({ "text": "eggs" })),
	)
	.await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(json["data"]["title"], "Groceries");
	assert_eq!(json["data"]["text"], "eggs");

	let (_, json) = call(&app, "GET", "/note/all/alice", None).await;

	assert_eq!(json["data"].as_array().map(Vec::len), Some(1));

	let (_, json) = call(&app, "GET", "/note/all/bob", None).await;

	assert_eq!(json["data"], serde_json::json!([]));

	let (status, json) = call(&app, "DELETE", &format!("/note/delete/{uid}"), None).await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(json["data"], "Note deleted successfully");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set TASKNOTE_PG_DSN to run."]
async fn task_round_trip_against_postgres() {
	let Some(test_db) = TestDatabase::from_env().await.expect("Failed to create test database.")
	else {
		eprintln!("Skipping HTTP tests; set TASKNOTE_PG_DSN to run this test.");

		return;
	};
	let state = AppState::new(test_config(StorageBackend::Postgres, Some(test_db.postgres(1))))
		.await
		.expect("Failed to initialize app state.");
	let app = routes::router(state);
	let (status, json) = call(&app, "POST", "/task/create/alice", Some(task_payload(true))).await;

	assert_eq!(status, StatusCode::CREATED);
	assert_eq!(json["data"]["completedAt"], json["data"]["createdAt"]);

	let (_, json) = call(&app, "GET", "/task/completed/alice", None).await;

	assert_eq!(json["data"].as_array().map(Vec::len), Some(1));

	drop(app);
	test_db.drop_database().await.expect("Failed to drop test database.");
}
