use axum::Json;
use axum::extract::{Extension, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::dto::{
    CreateRoleRequest, RoleListQuery, RoleSelectionActionRequest, UpdateRoleRequest,
};
use crate::error::ApiResult;
use crate::handlers::test_support::{admin, seeded_state};

use super::{
    create_role_handler, delete_role_handler, dispatch_role_selection_handler,
    filter_options_handler, list_roles_handler, refresh_roles_handler, role_selection_handler,
    save_role_selection_handler, update_role_handler,
};

fn status_of<T>(result: ApiResult<T>) -> StatusCode {
    match result {
        Ok(_) => StatusCode::OK,
        Err(error) => error.into_response().status(),
    }
}

fn role_ids(roles: &[crate::dto::RoleDto]) -> Vec<&str> {
    roles.iter().map(|role| role.role_id.as_str()).collect()
}

fn create_request(role_id: &str) -> CreateRoleRequest {
    CreateRoleRequest {
        role_name: "Accounts Payable Clerk".to_owned(),
        role_id: role_id.to_owned(),
        description: "Processes supplier invoices".to_owned(),
        status: "Active".to_owned(),
        object_ids: vec!["2".to_owned()],
    }
}

#[tokio::test]
async fn list_roles_applies_status_and_object_filters() {
    let state = seeded_state().await;

    let active = list_roles_handler(
        State(state.clone()),
        Query(RoleListQuery {
            status: Some("Active".to_owned()),
            ..RoleListQuery::default()
        }),
    )
    .await;
    assert!(active.is_ok());
    let Json(active) = active.unwrap_or_else(|_| unreachable!());
    assert_eq!(role_ids(&active), vec!["PROC_MGR_001", "MAT_PLAN_001"]);

    let by_object = list_roles_handler(
        State(state),
        Query(RoleListQuery {
            objects: Some("Purchase Order".to_owned()),
            ..RoleListQuery::default()
        }),
    )
    .await;
    let Json(by_object) = by_object.unwrap_or_else(|_| unreachable!());
    assert_eq!(role_ids(&by_object), vec!["PROC_CON_001"]);
}

#[tokio::test]
async fn list_roles_rejects_unknown_status() {
    let state = seeded_state().await;

    let result = list_roles_handler(
        State(state),
        Query(RoleListQuery {
            status: Some("Archived".to_owned()),
            ..RoleListQuery::default()
        }),
    )
    .await;
    assert_eq!(status_of(result), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn filter_options_narrow_to_the_single_object() {
    let state = seeded_state().await;

    let Json(options) = filter_options_handler(
        State(state),
        Query(RoleListQuery {
            objects: Some("Purchase Order".to_owned()),
            ..RoleListQuery::default()
        }),
    )
    .await;

    assert_eq!(options.objects.len(), 6);
    assert_eq!(options.activities, vec!["Create Order".to_owned()]);
}

#[tokio::test]
async fn create_role_copies_objects_and_records_actor() {
    let state = seeded_state().await;

    let result = create_role_handler(
        State(state.clone()),
        Extension(admin()),
        Json(create_request("AP_CLERK_001")),
    )
    .await;
    assert!(result.is_ok());
    let (status, Json(role)) = result.unwrap_or_else(|_| unreachable!());

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(role.created_by, "Ada Admin");
    assert_eq!(role.object.len(), 1);
    assert!(role.object[0].activity.iter().all(|activity| !activity.status));

    let duplicate = create_role_handler(
        State(state.clone()),
        Extension(admin()),
        Json(create_request("AP_CLERK_001")),
    )
    .await;
    assert_eq!(status_of(duplicate), StatusCode::CONFLICT);

    let refreshed = refresh_roles_handler(State(state)).await;
    let Json(roles) = refreshed.unwrap_or_else(|_| unreachable!());
    assert!(role_ids(&roles).contains(&"AP_CLERK_001"));
}

#[tokio::test]
async fn create_role_rejects_unknown_status_and_objects() {
    let state = seeded_state().await;

    let mut bad_status = create_request("AP_CLERK_002");
    bad_status.status = "Archived".to_owned();
    let result =
        create_role_handler(State(state.clone()), Extension(admin()), Json(bad_status)).await;
    assert_eq!(status_of(result), StatusCode::BAD_REQUEST);

    let mut bad_object = create_request("AP_CLERK_003");
    bad_object.object_ids = vec!["missing".to_owned()];
    let result = create_role_handler(State(state), Extension(admin()), Json(bad_object)).await;
    assert_eq!(status_of(result), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_role_can_rename_the_id() {
    let state = seeded_state().await;

    let result = update_role_handler(
        State(state.clone()),
        Extension(admin()),
        Path("PROC_MGR_001".to_owned()),
        Json(UpdateRoleRequest {
            role_name: "Procurement Lead".to_owned(),
            role_id: "PROC_LEAD_001".to_owned(),
            description: "Leads the procurement team".to_owned(),
            status: "Inactive".to_owned(),
        }),
    )
    .await;
    assert!(result.is_ok());
    let Json(role) = result.unwrap_or_else(|_| unreachable!());
    assert_eq!(role.role_id, "PROC_LEAD_001");
    assert_eq!(role.status, "Inactive");
    assert_eq!(role.modified_by, "Ada Admin");

    let old = delete_role_handler(State(state), Path("PROC_MGR_001".to_owned())).await;
    assert_eq!(status_of(old), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_role_returns_no_content() {
    let state = seeded_state().await;

    let result = delete_role_handler(State(state.clone()), Path("MAT_PLAN_001".to_owned())).await;
    assert!(matches!(result, Ok(StatusCode::NO_CONTENT)));

    let remaining = list_roles_handler(State(state), Query(RoleListQuery::default())).await;
    let Json(remaining) = remaining.unwrap_or_else(|_| unreachable!());
    assert!(!role_ids(&remaining).contains(&"MAT_PLAN_001"));
}

#[tokio::test]
async fn selection_round_trip_saves_toggled_activity() {
    let state = seeded_state().await;

    for action in [
        RoleSelectionActionRequest::SelectRole {
            role_id: Some("PROC_CON_001".to_owned()),
        },
        RoleSelectionActionRequest::ToggleActivity {
            activity_name: "Edit Requisition".to_owned(),
        },
    ] {
        let result = dispatch_role_selection_handler(State(state.clone()), Json(action)).await;
        assert!(result.is_ok());
    }

    let Json(selection) = role_selection_handler(State(state.clone())).await;
    assert_eq!(
        selection.active_activities.get("Edit Requisition"),
        Some(&false)
    );
    assert_eq!(
        selection.selected_actions.get("Edit Requisition").map(Vec::len),
        Some(0)
    );

    let saved = save_role_selection_handler(State(state), Extension(admin())).await;
    assert!(saved.is_ok());
    let Json(role) = saved.unwrap_or_else(|_| unreachable!());
    let edit = role
        .object
        .iter()
        .flat_map(|object| object.activity.iter())
        .find(|activity| activity.activity_name == "Edit Requisition");
    assert!(edit.is_some_and(|activity| {
        !activity.status && activity.data_field_actions.iter().all(|action| !action.status)
    }));
    assert_eq!(role.modified_by, "Ada Admin");
}

#[tokio::test]
async fn saving_without_a_selected_role_is_bad_request() {
    let state = seeded_state().await;

    let result = save_role_selection_handler(State(state), Extension(admin())).await;
    assert_eq!(status_of(result), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn status_filter_action_rejects_unknown_values() {
    let state = seeded_state().await;

    let result = dispatch_role_selection_handler(
        State(state),
        Json(RoleSelectionActionRequest::SetStatusFilter {
            status: "Retired".to_owned(),
        }),
    )
    .await;
    assert_eq!(status_of(result), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn several_objects_ignore_leftover_activity_filter() {
    let state = seeded_state().await;

    let result = list_roles_handler(
        State(state),
        Query(RoleListQuery {
            objects: Some("Purchase Requisition,Purchase Order".to_owned()),
            activities: Some("Nonexistent Activity".to_owned()),
            ..RoleListQuery::default()
        }),
    )
    .await;
    assert!(result.is_ok());
    let Json(roles) = result.unwrap_or_else(|_| unreachable!());
    assert_eq!(role_ids(&roles), vec!["PROC_CON_001"]);
}

#[tokio::test]
async fn stored_filters_apply_to_plain_list_requests() {
    let state = seeded_state().await;

    let result = dispatch_role_selection_handler(
        State(state.clone()),
        Json(RoleSelectionActionRequest::ToggleFilter {
            category: "objects".to_owned(),
            item: "Inventory Management".to_owned(),
        }),
    )
    .await;
    assert!(result.is_ok());
    let Json(sidebar) = result.unwrap_or_else(|_| unreachable!());
    assert_eq!(sidebar.filters.objects, vec!["Inventory Management".to_owned()]);

    let result = list_roles_handler(State(state.clone()), Query(RoleListQuery::default())).await;
    let Json(filtered) = result.unwrap_or_else(|_| unreachable!());
    assert_eq!(role_ids(&filtered), vec!["MAT_PLAN_001"]);

    let result = dispatch_role_selection_handler(
        State(state.clone()),
        Json(RoleSelectionActionRequest::ClearFilter {
            category: "objects".to_owned(),
        }),
    )
    .await;
    assert!(result.is_ok());

    let result = list_roles_handler(State(state.clone()), Query(RoleListQuery::default())).await;
    let Json(everything) = result.unwrap_or_else(|_| unreachable!());
    assert_eq!(everything.len(), 3);

    let result = dispatch_role_selection_handler(
        State(state),
        Json(RoleSelectionActionRequest::ClearFilter {
            category: "sites".to_owned(),
        }),
    )
    .await;
    assert_eq!(status_of(result), StatusCode::BAD_REQUEST);
}
