use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use flowman::{router, AppState, TaskRegistry};

fn test_router() -> axum::Router {
    let registry = Arc::new(TaskRegistry::with_builtins());
    router(Arc::new(AppState::new(registry)))
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_request(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let app = test_router();
    let response = ServiceExt::<Request<Body>>::oneshot(app, request)
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 1_000_000)
        .await
        .unwrap();
    let value: Value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

fn execute_body(flow: Value) -> Value {
    json!({ "flow": flow })
}

#[tokio::test]
async fn test_list_tasks_returns_builtins() {
    let (status, body) = send(get_request("/flows/tasks")).await;
    assert_eq!(status, StatusCode::OK);

    let mut names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["name"].as_str().unwrap())
        .collect();
    names.sort();
    assert_eq!(names, vec!["task1", "task2", "task3"]);
}

#[tokio::test]
async fn test_execute_flow_returns_created_report() {
    let flow = json!({
        "id": "flow-42",
        "name": "demo",
        "start_task": "task1",
        "tasks": [
            {"name": "task1", "description": "first"},
            {"name": "task2", "description": "second"}
        ],
        "conditions": [
            {
                "name": "c1",
                "description": "",
                "source_task": "task1",
                "outcome": "success",
                "target_task_success": "task2",
                "target_task_failure": "end"
            }
        ]
    });

    let (status, body) = send(post_request("/flows/execute", execute_body(flow))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], "flow-42");
    assert_eq!(body["name"], "demo");
    assert_eq!(
        body["report"],
        json!(["task1 executed successfully.", "task2 is the last task."])
    );
}

#[tokio::test]
async fn test_unknown_start_task_is_bad_request() {
    let flow = json!({
        "id": "flow-1",
        "name": "broken",
        "start_task": "nope",
        "tasks": [{"name": "task1"}],
        "conditions": []
    });

    let (status, body) = send(post_request("/flows/execute", execute_body(flow))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("nope"));
    assert!(message.contains("does not exist"));
}

#[tokio::test]
async fn test_cycle_is_internal_error() {
    let flow = json!({
        "id": "flow-1",
        "name": "looping",
        "start_task": "task1",
        "tasks": [{"name": "task1"}],
        "conditions": [
            {
                "source_task": "task1",
                "outcome": "success",
                "target_task_success": "task1",
                "target_task_failure": "task1"
            }
        ]
    });

    let (status, body) = send(post_request("/flows/execute", execute_body(flow))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["message"].as_str().unwrap().contains("cycle detected"));
}
