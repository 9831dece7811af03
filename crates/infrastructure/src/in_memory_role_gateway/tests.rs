use permatrix_application::RoleGateway;
use permatrix_core::AppError;
use permatrix_domain::{Role, RoleStatus};

use super::InMemoryRoleGateway;

fn role(role_id: &str) -> Role {
    Role {
        role_name: format!("Role {role_id}"),
        role_id: role_id.to_owned(),
        description: String::new(),
        object: Vec::new(),
        status: RoleStatus::Active,
        created_by: String::new(),
        created_on: String::new(),
        modified_by: String::new(),
        modified_on: String::new(),
    }
}

#[tokio::test]
async fn create_rejects_duplicate_ids() {
    let gateway = InMemoryRoleGateway::new(vec![role("R1")]);

    assert!(gateway.create_role(&role("R2")).await.is_ok());
    assert!(matches!(
        gateway.create_role(&role("R1")).await,
        Err(AppError::Conflict(_))
    ));
    assert_eq!(gateway.list_roles().await.unwrap_or_default().len(), 2);
}

#[tokio::test]
async fn update_can_rename_but_not_collide() {
    let gateway = InMemoryRoleGateway::new(vec![role("R1"), role("R2")]);

    assert!(gateway.update_role("R1", &role("R3")).await.is_ok());
    assert!(matches!(
        gateway.update_role("R3", &role("R2")).await,
        Err(AppError::Conflict(_))
    ));
    assert!(matches!(
        gateway.update_role("R9", &role("R9")).await,
        Err(AppError::NotFound(_))
    ));

    let ids: Vec<String> = gateway
        .list_roles()
        .await
        .unwrap_or_default()
        .into_iter()
        .map(|role| role.role_id)
        .collect();
    assert_eq!(ids, vec!["R3", "R2"]);
}

#[tokio::test]
async fn delete_reports_missing_role() {
    let gateway = InMemoryRoleGateway::new(vec![role("R1")]);

    assert!(gateway.delete_role("R1").await.is_ok());
    assert!(matches!(
        gateway.delete_role("R1").await,
        Err(AppError::NotFound(_))
    ));
}
