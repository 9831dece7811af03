use std::sync::Arc;

use permatrix_core::AppError;
use permatrix_domain::{Permissions, Role, RoleStatus, StatusFilter, User};

use crate::console_store::ConsoleStore;
use crate::role_catalog::RoleDetails;

use super::{UserAdminService, UserListQuery};

fn user(index: usize, active: bool) -> User {
    User {
        first_name: format!("Employee{index}"),
        last_name: "Brown".to_owned(),
        email: format!("employee{index}@company.com"),
        employee_id: format!("EMP{index:03}"),
        start_date: "2020-11-03".to_owned(),
        department: if index % 2 == 0 { "Finance" } else { "Procurement" }.to_owned(),
        site: "Chicago".to_owned(),
        company: "Finovate".to_owned(),
        supervisor: "Tom Harris".to_owned(),
        category: vec!["Full-time".to_owned()],
        requisition_limit: "20000".to_owned(),
        profile_picture: None,
        role: Vec::new(),
        substitute_user: None,
        substitute_start_date: None,
        substitute_end_date: None,
        permissions: Permissions::default(),
        active,
    }
}

fn auditor() -> Role {
    Role {
        role_name: "Auditor".to_owned(),
        role_id: "AUDIT_001".to_owned(),
        description: String::new(),
        object: Vec::new(),
        status: RoleStatus::Active,
        created_by: "John Smith".to_owned(),
        created_on: "2023-03-01".to_owned(),
        modified_by: "John Smith".to_owned(),
        modified_on: "2023-03-01".to_owned(),
    }
}

fn setup() -> (Arc<ConsoleStore>, UserAdminService) {
    let users = (1..=8).map(|index| user(index, index != 3)).collect();
    let store = Arc::new(ConsoleStore::new(Vec::new(), vec![auditor()], users));
    let service = UserAdminService::new(store.clone(), 6);
    (store, service)
}

#[tokio::test]
async fn list_users_paginates_after_filtering() {
    let (_, service) = setup();

    let first = service.list_users(&UserListQuery::default()).await;
    assert_eq!(first.items.len(), 6);
    assert_eq!(first.total_items, 8);
    assert_eq!(first.total_pages, 2);

    let second = service
        .list_users(&UserListQuery {
            page: 2,
            ..UserListQuery::default()
        })
        .await;
    assert_eq!(second.items.len(), 2);

    let active_finance = service
        .list_users(&UserListQuery {
            search: "finance".to_owned(),
            status: Some(StatusFilter::Active),
            page: 1,
        })
        .await;
    assert_eq!(active_finance.total_items, 4);
    assert_eq!(active_finance.total_pages, 1);
}

#[tokio::test]
async fn explicit_status_sticks_for_later_requests() {
    let (store, service) = setup();

    let active = service
        .list_users(&UserListQuery {
            status: Some(StatusFilter::Active),
            ..UserListQuery::default()
        })
        .await;
    assert_eq!(store.users().read().await.status_filter(), StatusFilter::Active);

    let follow_up = service.list_users(&UserListQuery::default()).await;
    assert_eq!(follow_up.total_items, active.total_items);

    let everyone = service
        .list_users(&UserListQuery {
            status: Some(StatusFilter::All),
            ..UserListQuery::default()
        })
        .await;
    assert_eq!(everyone.total_items, 8);
}

#[tokio::test]
async fn update_user_keeps_employee_id_fixed() {
    let (_, service) = setup();
    let result = service.update_user("EMP001", user(2, true)).await;
    assert!(matches!(result, Err(AppError::Validation(_))));

    let mut changed = user(1, false);
    changed.site = "Denver".to_owned();
    assert!(service.update_user("EMP001", changed).await.is_ok());
    let stored = service.get_user("EMP001").await;
    assert_eq!(stored.map(|user| user.site).ok(), Some("Denver".to_owned()));
}

#[tokio::test]
async fn create_and_delete_user() {
    let (_, service) = setup();
    assert!(service.create_user(user(9, true)).await.is_ok());
    assert!(matches!(
        service.create_user(user(9, true)).await,
        Err(AppError::Conflict(_))
    ));

    assert!(service.delete_user("EMP009").await.is_ok());
    assert!(matches!(
        service.get_user("EMP009").await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn profile_picture_is_stored() {
    let (_, service) = setup();
    let updated = service
        .update_profile_picture("EMP002", "data:image/png;base64,AAAA".to_owned())
        .await;
    assert!(updated.is_ok());
    assert_eq!(
        updated
            .unwrap_or_else(|_| unreachable!())
            .profile_picture
            .as_deref(),
        Some("data:image/png;base64,AAAA")
    );
}

#[tokio::test]
async fn assigned_roles_are_snapshots() {
    let (store, service) = setup();
    let assigned = service
        .assign_roles("EMP001", &["AUDIT_001".to_owned()])
        .await;
    assert!(assigned.is_ok());

    {
        let mut roles = store.roles().write().await;
        let renamed = roles.prepare_details_update(
            "AUDIT_001",
            RoleDetails {
                role_name: "Senior Auditor".to_owned(),
                role_id: "AUDIT_001".to_owned(),
                description: String::new(),
                status: RoleStatus::Active,
            },
            "Jane Doe",
            chrono::Utc::now(),
        );
        assert!(renamed.is_ok());
        let renamed = renamed.unwrap_or_else(|_| unreachable!());
        assert!(roles.replace_role("AUDIT_001", renamed).is_ok());
    }

    let stored = service.get_user("EMP001").await;
    assert_eq!(
        stored.ok().map(|user| user.role[0].role_name.clone()),
        Some("Auditor".to_owned())
    );

    let unknown = service
        .assign_roles("EMP001", &["MISSING".to_owned()])
        .await;
    assert!(matches!(unknown, Err(AppError::NotFound(_))));
}
