use std::time::Duration;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, Response, StatusCode};
use calc_mcp::server::{McpHttpServerConfig, NOT_FOUND_BODY, router};
use futures::StreamExt;
use serde_json::{Value, json};
use tower::ServiceExt;

const SESSION_HEADER: &str = "mcp-session-id";

async fn send(method: Method, path: &str) -> (StatusCode, String) {
    let app = router(&McpHttpServerConfig::default());
    let request = Request::builder()
        .method(method)
        .uri(path)
        .body(Body::empty())
        .expect("request should build");
    let response = app.oneshot(request).await.expect("router is infallible");
    let status = response.status();
    if status != StatusCode::NOT_FOUND {
        return (status, String::new());
    }
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    (status, String::from_utf8_lossy(&body).into_owned())
}

#[tokio::test]
async fn transport_paths_are_dispatched() {
    for path in ["/sse", "/sse/message", "/mcp"] {
        for method in [Method::GET, Method::POST] {
            let (status, _) = send(method.clone(), path).await;
            assert_ne!(status, StatusCode::NOT_FOUND, "{method} {path}");
        }
    }
}

#[tokio::test]
async fn unknown_paths_are_not_found() {
    for path in ["/", "/health", "/sse/other", "/mcp/extra", "/message"] {
        let (status, body) = send(Method::GET, path).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{path}");
        assert_eq!(body, NOT_FOUND_BODY, "{path}");
    }
}

#[tokio::test]
async fn not_found_ignores_method() {
    let (status, body) = send(Method::POST, "/health").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, NOT_FOUND_BODY);
}

async fn post_json(
    app: &Router,
    path: &str,
    session_id: Option<&str>,
    message: &Value,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(path)
        .header("content-type", "application/json")
        .header("accept", "application/json, text/event-stream");
    if let Some(session_id) = session_id {
        builder = builder.header(SESSION_HEADER, session_id);
    }
    let request = builder
        .body(Body::from(message.to_string()))
        .expect("request should build");
    app.clone().oneshot(request).await.expect("router is infallible")
}

/// Reads an event stream until `needle` shows up; keep-alive may hold it open.
async fn read_until(response: Response<Body>, needle: &str) -> String {
    let mut stream = response.into_body().into_data_stream();
    let mut collected = String::new();
    let read = async {
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.expect("body chunk should be readable");
            collected.push_str(&String::from_utf8_lossy(&chunk));
            if collected.contains(needle) {
                break;
            }
        }
    };
    tokio::time::timeout(Duration::from_secs(5), read)
        .await
        .expect("response should arrive in time");
    collected
}

fn call_tool(id: u64, name: &str, arguments: &Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": "tools/call",
        "params": { "name": name, "arguments": arguments }
    })
}

fn initialize(id: u64) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": "initialize",
        "params": {
            "protocolVersion": "2025-03-26",
            "capabilities": {},
            "clientInfo": { "name": "dispatch-tests", "version": "0.0.0" }
        }
    })
}

#[tokio::test]
async fn unary_path_answers_tool_calls_without_a_session() {
    let app = router(&McpHttpServerConfig::default());
    let message = call_tool(
        1,
        "currency_convert_and_analyze",
        &json!({ "amount": 10, "from": "eur" }),
    );

    let response = post_json(&app, "/mcp", None, &message).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_until(response, "10 EUR = 10.80 USD").await;
    assert!(body.contains("10 EUR = 10.80 USD"), "{body}");
}

#[tokio::test]
async fn unary_path_answers_initialize() {
    let app = router(&McpHttpServerConfig::default());

    let response = post_json(&app, "/mcp", None, &initialize(1)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_until(response, "Authless Calculator").await;
    assert!(body.contains("Authless Calculator"), "{body}");
}

#[tokio::test]
async fn unary_path_rejects_unknown_operation() {
    let app = router(&McpHttpServerConfig::default());
    let message = call_tool(
        7,
        "calculate",
        &json!({ "operation": "mod", "a": 1, "b": 2 }),
    );

    let response = post_json(&app, "/mcp", None, &message).await;
    let body = read_until(response, "-32602").await;
    assert!(body.contains("-32602"), "{body}");
}

#[tokio::test]
async fn streaming_paths_share_sessions() {
    let app = router(&McpHttpServerConfig::default());

    let response = post_json(&app, "/sse", None, &initialize(1)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let session_id = response
        .headers()
        .get(SESSION_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .expect("initialize should open a session");
    let body = read_until(response, "Authless Calculator").await;
    assert!(body.contains("Authless Calculator"), "{body}");

    let initialized = json!({ "jsonrpc": "2.0", "method": "notifications/initialized" });
    let response = post_json(&app, "/sse/message", Some(&session_id), &initialized).await;
    assert_eq!(response.status(), StatusCode::ACCEPTED);

    let message = call_tool(
        2,
        "calculate",
        &json!({ "operation": "divide", "a": 5, "b": 0 }),
    );
    let response = post_json(&app, "/sse/message", Some(&session_id), &message).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_until(response, "Error: Cannot divide by zero").await;
    assert!(body.contains("Error: Cannot divide by zero"), "{body}");
}
