use permatrix_core::AppError;
use permatrix_domain::{Permissions, StatusFilter, User};

use super::{UserCatalog, UserCatalogAction};

fn user(employee_id: &str, first_name: &str, department: &str, active: bool) -> User {
    User {
        first_name: first_name.to_owned(),
        last_name: "Brown".to_owned(),
        email: format!("{}@company.com", first_name.to_lowercase()),
        employee_id: employee_id.to_owned(),
        start_date: "2020-11-03".to_owned(),
        department: department.to_owned(),
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

fn catalog() -> UserCatalog {
    UserCatalog::new(vec![
        user("EMP004", "Emma", "Finance", true),
        user("EMP005", "Liam", "Procurement", false),
        user("EMP006", "Olivia", "Finance", true),
    ])
}

#[test]
fn adding_duplicate_employee_id_conflicts() {
    let mut catalog = catalog();
    let result = catalog.reduce(UserCatalogAction::AddUser {
        user: user("EMP004", "Noah", "IT", true),
    });
    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(catalog.users().len(), 3);
}

#[test]
fn adding_user_without_valid_email_fails() {
    let mut catalog = catalog();
    let mut invalid = user("EMP010", "Noah", "IT", true);
    invalid.email = "noah".to_owned();

    let result = catalog.reduce(UserCatalogAction::AddUser { user: invalid });
    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[test]
fn update_and_picture_target_employee_id() {
    let mut catalog = catalog();
    let mut changed = user("EMP005", "Liam", "Logistics", true);
    changed.supervisor = "Ava Lee".to_owned();

    assert!(
        catalog
            .reduce(UserCatalogAction::UpdateUser { user: changed })
            .is_ok()
    );
    assert!(
        catalog
            .reduce(UserCatalogAction::UpdateProfilePicture {
                employee_id: "EMP005".to_owned(),
                profile_picture: "data:image/png;base64,AAAA".to_owned(),
            })
            .is_ok()
    );

    let stored = catalog.find("EMP005");
    assert_eq!(stored.map(|user| user.department.as_str()), Some("Logistics"));
    assert_eq!(
        stored.and_then(|user| user.profile_picture.as_deref()),
        Some("data:image/png;base64,AAAA")
    );

    let missing = catalog.reduce(UserCatalogAction::UpdateProfilePicture {
        employee_id: "EMP999".to_owned(),
        profile_picture: String::new(),
    });
    assert!(matches!(missing, Err(AppError::NotFound(_))));
}

#[test]
fn deleting_selected_user_clears_selection() {
    let mut catalog = catalog();
    assert!(
        catalog
            .reduce(UserCatalogAction::SelectUser {
                employee_id: Some("EMP006".to_owned()),
            })
            .is_ok()
    );
    assert!(catalog.selected_user().is_some());

    assert!(
        catalog
            .reduce(UserCatalogAction::DeleteUser {
                employee_id: "EMP006".to_owned(),
            })
            .is_ok()
    );
    assert!(catalog.selected_user().is_none());
    assert!(catalog.find("EMP006").is_none());
}

#[test]
fn search_applies_status_then_columns() {
    let catalog = catalog();

    let finance: Vec<String> = catalog
        .search("FINANCE", StatusFilter::All)
        .into_iter()
        .map(|user| user.employee_id)
        .collect();
    assert_eq!(finance, vec!["EMP004", "EMP006"]);

    let inactive = catalog.search("", StatusFilter::Inactive);
    assert_eq!(inactive.len(), 1);
    assert_eq!(inactive[0].employee_id, "EMP005");

    assert_eq!(catalog.search("olivia@", StatusFilter::Active).len(), 1);
    assert!(catalog.search(" olivia", StatusFilter::All).is_empty());
    assert!(catalog.search("olivia", StatusFilter::Inactive).is_empty());
}

#[test]
fn status_filter_is_remembered() {
    let mut catalog = catalog();
    assert!(
        catalog
            .reduce(UserCatalogAction::SetStatusFilter {
                status: StatusFilter::Active,
            })
            .is_ok()
    );
    assert_eq!(catalog.status_filter(), StatusFilter::Active);
}
