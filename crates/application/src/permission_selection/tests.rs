use permatrix_core::AppError;
use permatrix_domain::{Activity, DataFieldAction, Role, RoleObject, RoleStatus};
use proptest::prelude::*;

use super::PermissionSelection;

fn action(label: &str, status: bool) -> DataFieldAction {
    DataFieldAction {
        label: label.to_owned(),
        status,
        description: String::new(),
    }
}

fn role() -> Role {
    Role {
        role_name: "Procurement Manager".to_owned(),
        role_id: "PROC_MGR_001".to_owned(),
        description: String::new(),
        object: vec![
            RoleObject {
                id: "1".to_owned(),
                object_name: "Purchase Requisition".to_owned(),
                activity: vec![Activity {
                    activity_name: "Create Requisition".to_owned(),
                    status: true,
                    data_field_actions: vec![
                        action("Edit Amount", true),
                        action("Attach Files", false),
                        action("Submit", true),
                    ],
                }],
            },
            RoleObject {
                id: "2".to_owned(),
                object_name: "Purchase Order".to_owned(),
                activity: vec![Activity {
                    activity_name: "Approve Order".to_owned(),
                    status: false,
                    data_field_actions: vec![action("Approve", false), action("Reject", true)],
                }],
            },
        ],
        status: RoleStatus::Active,
        created_by: "John Smith".to_owned(),
        created_on: "2023-03-01".to_owned(),
        modified_by: "John Smith".to_owned(),
        modified_on: "2023-03-01".to_owned(),
    }
}

#[test]
fn from_role_mirrors_stored_status() {
    let selection = PermissionSelection::from_role(&role());

    assert!(selection.is_activity_active("Create Requisition"));
    assert!(!selection.is_activity_active("Approve Order"));
    assert_eq!(
        selection.selected_labels("Create Requisition"),
        ["Edit Amount".to_owned(), "Submit".to_owned()]
    );
    assert_eq!(selection.selected_labels("Approve Order"), ["Reject".to_owned()]);
}

#[test]
fn toggling_activity_off_then_on_restores_stored_labels() {
    let role = role();
    let mut selection = PermissionSelection::from_role(&role);
    selection.toggle_action("Create Requisition", "Attach Files");

    assert!(selection.toggle_activity(&role, "Create Requisition").is_ok());
    assert!(!selection.is_activity_active("Create Requisition"));
    assert!(selection.selected_labels("Create Requisition").is_empty());

    assert!(selection.toggle_activity(&role, "Create Requisition").is_ok());
    assert!(selection.is_activity_active("Create Requisition"));
    assert_eq!(
        selection.selected_labels("Create Requisition"),
        ["Edit Amount".to_owned(), "Submit".to_owned()]
    );
}

#[test]
fn toggling_unknown_activity_is_not_found() {
    let role = role();
    let mut selection = PermissionSelection::from_role(&role);

    let result = selection.toggle_activity(&role, "Delete Everything");
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[test]
fn toggle_action_appends_and_removes() {
    let mut selection = PermissionSelection::default();
    selection.toggle_action("Approve Order", "Reject");
    selection.toggle_action("Approve Order", "Approve");
    assert_eq!(
        selection.selected_labels("Approve Order"),
        ["Reject".to_owned(), "Approve".to_owned()]
    );

    selection.toggle_action("Approve Order", "Reject");
    assert_eq!(selection.selected_labels("Approve Order"), ["Approve".to_owned()]);
}

#[test]
fn reset_all_and_enable_all_cover_every_activity() {
    let role = role();
    let mut selection = PermissionSelection::from_role(&role);

    selection.reset_all();
    assert!(!selection.is_activity_active("Create Requisition"));
    assert!(selection.selected_labels("Create Requisition").is_empty());
    assert!(selection.selected_labels("Approve Order").is_empty());

    selection.enable_all(&role);
    assert!(selection.is_activity_active("Approve Order"));
    assert_eq!(
        selection.selected_labels("Create Requisition"),
        [
            "Edit Amount".to_owned(),
            "Attach Files".to_owned(),
            "Submit".to_owned()
        ]
    );
}

#[test]
fn object_scoped_reset_leaves_other_objects_alone() {
    let role = role();
    let mut selection = PermissionSelection::from_role(&role);

    assert!(selection.enable_object(&role, "2").is_ok());
    assert!(selection.reset_object(&role, "1").is_ok());

    assert!(!selection.is_activity_active("Create Requisition"));
    assert!(selection.is_activity_active("Approve Order"));
    assert!(selection.is_action_selected("Approve Order", "Approve"));
    assert!(matches!(
        selection.reset_object(&role, "9"),
        Err(AppError::NotFound(_))
    ));
}

#[test]
fn apply_to_writes_flags_and_membership() {
    let role = role();
    let mut selection = PermissionSelection::from_role(&role);
    assert!(selection.toggle_activity(&role, "Approve Order").is_ok());
    selection.toggle_action("Approve Order", "Approve");
    selection.toggle_action("Create Requisition", "Submit");

    let updated = selection.apply_to(&role);
    let approve = updated.find_activity("Approve Order");
    assert!(approve.is_some());
    let approve = approve.unwrap_or_else(|| unreachable!());
    assert!(approve.status);
    assert_eq!(approve.find_action("Approve").map(|a| a.status), Some(true));
    assert_eq!(approve.find_action("Reject").map(|a| a.status), Some(true));

    let create = updated.find_activity("Create Requisition");
    assert_eq!(
        create
            .and_then(|activity| activity.find_action("Submit"))
            .map(|a| a.status),
        Some(false)
    );
}

#[test]
fn apply_to_disables_activities_without_a_flag() {
    let role = role();
    let updated = PermissionSelection::default().apply_to(&role);

    assert!(updated.activities().all(|activity| !activity.status));
    assert!(
        updated
            .activities()
            .flat_map(|activity| activity.data_field_actions.iter())
            .all(|action| !action.status)
    );
}

proptest! {
    #[test]
    fn toggle_off_on_restores_granted_labels(
        toggles in proptest::collection::vec(0_usize..3, 0..12),
        flags in proptest::collection::vec(any::<bool>(), 3),
    ) {
        let labels = ["Edit Amount", "Attach Files", "Submit"];
        let mut role = role();
        role.object[0].activity[0].data_field_actions = labels
            .iter()
            .zip(flags.iter())
            .map(|(label, status)| action(label, *status))
            .collect();

        let mut selection = PermissionSelection::from_role(&role);
        for index in &toggles {
            selection.toggle_action("Create Requisition", labels[*index]);
        }
        if !selection.is_activity_active("Create Requisition") {
            prop_assert!(selection.toggle_activity(&role, "Create Requisition").is_ok());
        }

        prop_assert!(selection.toggle_activity(&role, "Create Requisition").is_ok());
        prop_assert!(selection.selected_labels("Create Requisition").is_empty());

        prop_assert!(selection.toggle_activity(&role, "Create Requisition").is_ok());
        let expected: Vec<String> = labels
            .iter()
            .zip(flags.iter())
            .filter(|(_, status)| **status)
            .map(|(label, _)| (*label).to_owned())
            .collect();
        prop_assert_eq!(selection.selected_labels("Create Requisition"), expected.as_slice());
    }
}
