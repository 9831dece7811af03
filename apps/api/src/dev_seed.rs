use permatrix_core::{AppError, AppResult};
use permatrix_domain::{Role, RoleObject, RoleStatus, User};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

/// Objects, roles and users loaded when `SEED_DEMO_DATA` is on.
#[derive(Debug, Clone, Default)]
pub struct DemoData {
    pub objects: Vec<RoleObject>,
    pub roles: Vec<Role>,
    pub users: Vec<User>,
}

impl DemoData {
    pub fn load() -> AppResult<Self> {
        let objects: Vec<RoleObject> = from_json("objects", demo_objects())?;

        let roles = vec![
            demo_role(
                &objects,
                RoleSeed {
                    role_name: "Procurement Controller",
                    role_id: "PROC_CON_001",
                    description: "Manages procurement activities",
                    object_ids: &["1", "2"],
                    status: RoleStatus::Inactive,
                    created: ("John Doe", "2023-04-15"),
                    modified: ("Jane Smith", "2023-06-01"),
                },
            )?,
            demo_role(
                &objects,
                RoleSeed {
                    role_name: "Procurement Manager",
                    role_id: "PROC_MGR_001",
                    description: "Manages procurement team",
                    object_ids: &["3", "4"],
                    status: RoleStatus::Active,
                    created: ("John Smith", "2023-03-01"),
                    modified: ("Jane Doe", "2023-05-15"),
                },
            )?,
            demo_role(
                &objects,
                RoleSeed {
                    role_name: "Material Planner",
                    role_id: "MAT_PLAN_001",
                    description: "Plans and manages material inventory",
                    object_ids: &["5", "6"],
                    status: RoleStatus::Active,
                    created: ("Jane Johnson", "2023-02-01"),
                    modified: ("John Brown", "2023-04-30"),
                },
            )?,
        ];

        let mut users: Vec<User> = from_json("users", demo_users())?;
        for (user, role) in users.iter_mut().zip(roles.iter()) {
            user.role = vec![role.clone()];
        }

        Ok(Self {
            objects,
            roles,
            users,
        })
    }
}

struct RoleSeed<'a> {
    role_name: &'a str,
    role_id: &'a str,
    description: &'a str,
    object_ids: &'a [&'a str],
    status: RoleStatus,
    created: (&'a str, &'a str),
    modified: (&'a str, &'a str),
}

fn demo_role(objects: &[RoleObject], seed: RoleSeed<'_>) -> AppResult<Role> {
    let object = seed
        .object_ids
        .iter()
        .map(|object_id| {
            objects
                .iter()
                .find(|object| object.id == *object_id)
                .cloned()
                .ok_or_else(|| {
                    AppError::Internal(format!("demo object '{object_id}' is missing"))
                })
        })
        .collect::<AppResult<Vec<_>>>()?;

    Ok(Role {
        role_name: seed.role_name.to_owned(),
        role_id: seed.role_id.to_owned(),
        description: seed.description.to_owned(),
        object,
        status: seed.status,
        created_by: seed.created.0.to_owned(),
        created_on: seed.created.1.to_owned(),
        modified_by: seed.modified.0.to_owned(),
        modified_on: seed.modified.1.to_owned(),
    })
}

fn from_json<T: DeserializeOwned>(label: &str, value: Value) -> AppResult<T> {
    serde_json::from_value(value)
        .map_err(|error| AppError::Internal(format!("invalid demo {label}: {error}")))
}

fn action(label: &str, description: &str) -> Value {
    json!({ "label": label, "status": true, "description": description })
}

fn demo_objects() -> Value {
    json!([
        {
            "id": "1",
            "object_name": "Purchase Requisition",
            "activity": [
                {
                    "activity_name": "Create Requisition",
                    "status": true,
                    "data_field_actions": [
                        action("Add SKU", "Create a new purchase requisition"),
                        action("Add / Modify Cost Center", "Edit an existing purchase requisition"),
                        action("Add/Modify GL", "Mark a purchase requisition for deletion"),
                        action("Add / Modify supplier", "Approve a purchase requisition"),
                        action("Add / Modify Special Instructions", "Track the status of a purchase requisition"),
                        action("Add / Modify Supplier Instructions", "Track the status of a purchase requisition"),
                    ]
                },
                {
                    "activity_name": "Edit Requisition",
                    "status": true,
                    "data_field_actions": [
                        action("Add a new line item", "Create a new purchase requisition"),
                        action("Edit SKU", "Edit an existing purchase requisition"),
                        action("Mark for Deletion line item", "Track the status of a purchase requisition"),
                    ]
                }
            ]
        },
        {
            "id": "2",
            "object_name": "Purchase Order",
            "activity": [
                {
                    "activity_name": "Create Order",
                    "status": true,
                    "data_field_actions": [
                        action("Create Order", "Create a new purchase order"),
                        action("Edit Order", "Edit an existing purchase order"),
                        action("Approve", "Approve a purchase order"),
                        action("Monitor Order", "Monitor the status of a purchase order"),
                    ]
                }
            ]
        },
        {
            "id": "3",
            "object_name": "Supplier Management",
            "activity": [
                {
                    "activity_name": "Discover Suppliers",
                    "status": true,
                    "data_field_actions": [
                        action("Discover Suppliers", "Discover new suppliers"),
                        action("Monitor Supplier Performance", "Monitor the performance of suppliers"),
                        action("Approve Suppliers", "Approve new suppliers"),
                    ]
                }
            ]
        },
        {
            "id": "4",
            "object_name": "Contract Negotiation",
            "activity": [
                {
                    "activity_name": "Negotiate Terms",
                    "status": true,
                    "data_field_actions": [
                        action("Negotiate Terms", "Negotiate contract terms with suppliers"),
                        action("Review Contracts", "Review contracts for compliance and standards"),
                        action("Approve Contract", "Approve finalized contract terms"),
                    ]
                }
            ]
        },
        {
            "id": "5",
            "object_name": "Inventory Management",
            "activity": [
                {
                    "activity_name": "Monitor Stock Levels",
                    "status": true,
                    "data_field_actions": [
                        action("Monitor Stock Levels", "Monitor the levels of material inventory"),
                        action("Replenish Inventory", "Replenish material inventory"),
                        action("Adjust Inventory", "Adjust the material inventory"),
                    ]
                }
            ]
        },
        {
            "id": "6",
            "object_name": "Demand Forecasting",
            "activity": [
                {
                    "activity_name": "Analyze Demand",
                    "status": true,
                    "data_field_actions": [
                        action("Analyze Demand", "Analyze product demand for inventory planning"),
                        action("Adjust Forecasts", "Adjust forecasts based on demand trends"),
                        action("Plan Inventory", "Plan inventory levels based on forecasted demand"),
                    ]
                }
            ]
        }
    ])
}

fn demo_permissions() -> Value {
    let other = json!({
        "name": "Monitor Order",
        "status": true,
        "department": ["Finance"],
        "site": ["Chicago"],
        "company": ["Finovate"]
    });

    json!({
        "own": [
            {
                "name": "Create Requisition",
                "status": true,
                "department": ["Finance"],
                "site": ["Chicago"],
                "company": ["Finovate"],
                "category": ["Full-time", "Remote"]
            }
        ],
        "other": [other]
    })
}

fn demo_users() -> Value {
    json!([
        {
            "first_name": "Emma",
            "last_name": "Brown",
            "email": "emma.brown@company.com",
            "employee_id": "EMP004",
            "start_date": "2020-11-03",
            "department": "Finance",
            "site": "Chicago",
            "company": "Finovate",
            "supervisor": "Tom Harris",
            "category": ["Full-time", "Remote"],
            "requisition_limit": "20000",
            "substitute_user": "Jessica Turner",
            "substitute_start_date": "2024-09-01",
            "substitute_end_date": "2024-10-15",
            "permissions": demo_permissions(),
            "active": true
        },
        {
            "first_name": "Liam",
            "last_name": "Smith",
            "email": "liam.smith@company.com",
            "employee_id": "EMP005",
            "start_date": "2019-07-21",
            "department": "Operations",
            "site": "New York",
            "company": "TechCorp",
            "supervisor": "Rachel Adams",
            "category": ["Part-time"],
            "requisition_limit": "15000",
            "permissions": demo_permissions(),
            "active": true
        },
        {
            "first_name": "Sophia",
            "last_name": "Taylor",
            "email": "sophia.taylor@company.com",
            "employee_id": "EMP006",
            "start_date": "2022-05-10",
            "department": "Human Resources",
            "site": "San Francisco",
            "company": "GlobalSolutions",
            "supervisor": "Michael Clark",
            "category": ["Full-time"],
            "requisition_limit": "30000",
            "permissions": demo_permissions(),
            "active": true
        }
    ])
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::DemoData;

    #[test]
    fn demo_data_is_consistent() {
        let data = DemoData::load();
        assert!(data.is_ok());
        let data = data.unwrap_or_default();

        assert_eq!(data.objects.len(), 6);
        assert!(data.objects.iter().all(|object| object.validate().is_ok()));
        assert!(data.roles.iter().all(|role| role.validate().is_ok()));
        assert!(data.users.iter().all(|user| user.validate().is_ok()));

        let role_ids: HashSet<_> = data.roles.iter().map(|role| role.role_id.as_str()).collect();
        assert_eq!(role_ids.len(), data.roles.len());
        assert!(data.users.iter().all(|user| user.role.len() == 1));
    }
}
