use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use permatrix_application::RoleGateway;
use permatrix_core::AppError;
use permatrix_domain::{Role, RoleStatus};
use serde_json::json;
use tokio::sync::Mutex;

use super::HttpRoleGateway;

#[derive(Clone, Default)]
struct Recorded {
    calls: Arc<Mutex<Vec<String>>>,
}

fn role(role_id: &str) -> Role {
    Role {
        role_name: "Procurement Manager".to_owned(),
        role_id: role_id.to_owned(),
        description: String::new(),
        object: Vec::new(),
        status: RoleStatus::Active,
        created_by: "Current User".to_owned(),
        created_on: "2024-05-01T08:30:00.000Z".to_owned(),
        modified_by: "Current User".to_owned(),
        modified_on: "2024-05-01T08:30:00.000Z".to_owned(),
    }
}

async fn list_roles() -> Json<serde_json::Value> {
    Json(json!([{
        "role_name": "Procurement Manager",
        "role_id": "PROC_MGR_001",
        "description": "Manages procurement team",
        "object": [{"object_name": "Purchase Order", "activity": []}],
        "status": "Active",
        "created_by": "John Smith",
        "created_on": "2023-03-01",
        "modified_by": "Jane Doe",
        "modified_on": "2023-05-15"
    }]))
}

async fn create_role(State(recorded): State<Recorded>, Json(role): Json<Role>) -> StatusCode {
    recorded
        .calls
        .lock()
        .await
        .push(format!("create:{}", role.role_id));
    if role.role_id == "TAKEN" {
        StatusCode::CONFLICT
    } else {
        StatusCode::CREATED
    }
}

async fn update_role(State(recorded): State<Recorded>, Json(role): Json<Role>) -> StatusCode {
    recorded
        .calls
        .lock()
        .await
        .push(format!("update:{}", role.role_id));
    StatusCode::INTERNAL_SERVER_ERROR
}

async fn delete_role(
    State(recorded): State<Recorded>,
    Query(params): Query<HashMap<String, String>>,
) -> StatusCode {
    let role_id = params.get("role_id").cloned().unwrap_or_default();
    recorded.calls.lock().await.push(format!("delete:{role_id}"));
    StatusCode::NO_CONTENT
}

async fn spawn_role_api(recorded: Recorded) -> String {
    let router = Router::new()
        .route("/Role/get_all_roles", get(list_roles))
        .route("/Role/create_role", post(create_role))
        .route("/Role/update_role", put(update_role))
        .route("/Role/delete_role", delete(delete_role))
        .with_state(recorded);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await;
    assert!(listener.is_ok());
    let listener = listener.unwrap_or_else(|_| unreachable!());
    let address = listener.local_addr();
    assert!(address.is_ok());
    let address = address.unwrap_or_else(|_| unreachable!());

    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });

    format!("http://{address}/Role")
}

fn gateway(base_url: &str) -> HttpRoleGateway {
    let gateway = HttpRoleGateway::new(reqwest::Client::new(), base_url);
    assert!(gateway.is_ok());
    gateway.unwrap_or_else(|_| unreachable!())
}

#[tokio::test]
async fn lists_roles_from_remote_payload() {
    let base_url = spawn_role_api(Recorded::default()).await;
    let roles = gateway(&base_url).list_roles().await;

    assert!(roles.is_ok());
    let roles = roles.unwrap_or_default();
    assert_eq!(roles.len(), 1);
    assert_eq!(roles[0].role_id, "PROC_MGR_001");
    assert_eq!(roles[0].object[0].id, "");
}

#[tokio::test]
async fn maps_remote_statuses_to_errors() {
    let recorded = Recorded::default();
    let base_url = spawn_role_api(recorded.clone()).await;
    let gateway = gateway(&base_url);

    assert!(gateway.create_role(&role("NEW_001")).await.is_ok());
    assert!(matches!(
        gateway.create_role(&role("TAKEN")).await,
        Err(AppError::Conflict(_))
    ));
    assert!(matches!(
        gateway.update_role("NEW_001", &role("NEW_001")).await,
        Err(AppError::Upstream(_))
    ));

    let calls = recorded.calls.lock().await.clone();
    assert_eq!(calls, vec!["create:NEW_001", "create:TAKEN", "update:NEW_001"]);
}

#[tokio::test]
async fn delete_sends_role_id_as_query() {
    let recorded = Recorded::default();
    let base_url = spawn_role_api(recorded.clone()).await;

    assert!(gateway(&base_url).delete_role("PROC MGR&1").await.is_ok());
    assert_eq!(
        recorded.calls.lock().await.clone(),
        vec!["delete:PROC MGR&1"]
    );
}

#[tokio::test]
async fn unreachable_service_is_upstream_error() {
    let gateway = gateway("http://127.0.0.1:9/Role");
    assert!(matches!(
        gateway.list_roles().await,
        Err(AppError::Upstream(_))
    ));
}

#[test]
fn rejects_invalid_base_url() {
    assert!(matches!(
        HttpRoleGateway::new(reqwest::Client::new(), "not a url"),
        Err(AppError::Validation(_))
    ));
}
