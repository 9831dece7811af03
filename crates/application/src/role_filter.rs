use std::str::FromStr;

use permatrix_core::AppError;
use permatrix_domain::{Activity, Role, RoleObject, StatusFilter};
use serde::{Deserialize, Serialize};

/// Filter dimension of the role drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterCategory {
    /// Object names.
    Objects,
    /// Activity names.
    Activities,
    /// Data field action labels.
    DataFieldActions,
}

impl FilterCategory {
    /// Returns the wire value for this category.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Objects => "objects",
            Self::Activities => "activities",
            Self::DataFieldActions => "data_field_actions",
        }
    }
}

impl FromStr for FilterCategory {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "objects" => Ok(Self::Objects),
            "activities" => Ok(Self::Activities),
            "data_field_actions" => Ok(Self::DataFieldActions),
            _ => Err(AppError::Validation(format!(
                "unknown filter category '{value}'"
            ))),
        }
    }
}

/// Nested membership filters applied to the role list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleFilterSet {
    /// Selected object names.
    #[serde(default)]
    pub objects: Vec<String>,
    /// Selected activity names.
    #[serde(default)]
    pub activities: Vec<String>,
    /// Selected action labels.
    #[serde(default)]
    pub data_field_actions: Vec<String>,
}

impl RoleFilterSet {
    /// Returns whether no category has a selection.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty() && self.activities.is_empty() && self.data_field_actions.is_empty()
    }

    /// Adds or removes an item, then drops selections that no longer cascade.
    pub fn toggle(&mut self, category: FilterCategory, item: &str) {
        let values = self.values_mut(category);
        if let Some(position) = values.iter().position(|value| value == item) {
            values.remove(position);
        } else {
            values.push(item.to_owned());
        }

        match category {
            FilterCategory::Objects if self.objects.len() != 1 => {
                self.activities.clear();
                self.data_field_actions.clear();
            }
            FilterCategory::Activities if self.activities.len() != 1 => {
                self.data_field_actions.clear();
            }
            _ => {}
        }
    }

    /// Drops the dependent selections that selecting several objects or
    /// several activities collapses.
    #[must_use]
    pub fn cascaded(mut self) -> Self {
        if self.objects.len() > 1 {
            self.activities.clear();
            self.data_field_actions.clear();
        }
        if self.activities.len() > 1 {
            self.data_field_actions.clear();
        }
        self
    }

    /// Clears a category together with the categories depending on it.
    pub fn clear(&mut self, category: FilterCategory) {
        match category {
            FilterCategory::Objects => {
                self.objects.clear();
                self.activities.clear();
                self.data_field_actions.clear();
            }
            FilterCategory::Activities => {
                self.activities.clear();
                self.data_field_actions.clear();
            }
            FilterCategory::DataFieldActions => self.data_field_actions.clear(),
        }
    }

    fn values_mut(&mut self, category: FilterCategory) -> &mut Vec<String> {
        match category {
            FilterCategory::Objects => &mut self.objects,
            FilterCategory::Activities => &mut self.activities,
            FilterCategory::DataFieldActions => &mut self.data_field_actions,
        }
    }

    fn admits_object(&self, object: &RoleObject) -> bool {
        self.objects.is_empty() || self.objects.contains(&object.object_name)
    }

    fn admits_activity(&self, activity: &Activity) -> bool {
        self.activities.is_empty() || self.activities.contains(&activity.activity_name)
    }
}

/// Values offered by the filter drawer for the current selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Every object name across all roles.
    pub objects: Vec<String>,
    /// Activity names selectable under the current object selection.
    pub activities: Vec<String>,
    /// Action labels selectable under the current activity selection.
    pub data_field_actions: Vec<String>,
}

impl FilterOptions {
    /// Collects unique names in first-seen order, ignoring status.
    #[must_use]
    pub fn from_roles(roles: &[Role]) -> Self {
        let mut options = Self::default();
        for object in roles.iter().flat_map(|role| role.object.iter()) {
            push_unique(&mut options.objects, &object.object_name);
            for activity in &object.activity {
                push_unique(&mut options.activities, &activity.activity_name);
                for label in activity.action_labels() {
                    push_unique(&mut options.data_field_actions, label);
                }
            }
        }
        options
    }

    /// Narrows the activity and action lists to what the filters allow next.
    #[must_use]
    pub fn for_filters(roles: &[Role], filters: &RoleFilterSet) -> Self {
        let unique = Self::from_roles(roles);
        Self {
            activities: available_activities(roles, filters, &unique),
            data_field_actions: available_data_field_actions(roles, filters, &unique),
            objects: unique.objects,
        }
    }
}

fn push_unique(values: &mut Vec<String>, candidate: &str) {
    if !values.iter().any(|value| value == candidate) {
        values.push(candidate.to_owned());
    }
}

fn objects_named<'a>(roles: &'a [Role], object_name: &'a str) -> impl Iterator<Item = &'a RoleObject> {
    roles
        .iter()
        .flat_map(|role| role.object.iter())
        .filter(move |object| object.object_name == object_name)
}

fn available_activities(roles: &[Role], filters: &RoleFilterSet, unique: &FilterOptions) -> Vec<String> {
    match filters.objects.as_slice() {
        [] => unique.activities.clone(),
        [object_name] => {
            let mut activities = Vec::new();
            for activity in objects_named(roles, object_name).flat_map(|object| object.activity.iter()) {
                push_unique(&mut activities, &activity.activity_name);
            }
            activities
        }
        _ => Vec::new(),
    }
}

fn available_data_field_actions(
    roles: &[Role],
    filters: &RoleFilterSet,
    unique: &FilterOptions,
) -> Vec<String> {
    match (filters.objects.as_slice(), filters.activities.as_slice()) {
        (_, []) => unique.data_field_actions.clone(),
        ([object_name], [activity_name]) => {
            let mut labels = Vec::new();
            for activity in objects_named(roles, object_name)
                .flat_map(|object| object.activity.iter())
                .filter(|activity| &activity.activity_name == activity_name)
            {
                for label in activity.action_labels() {
                    push_unique(&mut labels, label);
                }
            }
            labels
        }
        _ => Vec::new(),
    }
}

/// Returns whether a role satisfies every non-empty filter category.
///
/// Activity and action matches only count on enabled activities inside
/// objects the object filter admits. An action match needs one activity
/// granting every selected label.
#[must_use]
pub fn role_matches_filters(role: &Role, filters: &RoleFilterSet) -> bool {
    if !filters.objects.is_empty()
        && !role
            .object
            .iter()
            .any(|object| filters.objects.contains(&object.object_name))
    {
        return false;
    }

    let admitted_objects = || role.object.iter().filter(|object| filters.admits_object(object));

    if !filters.activities.is_empty()
        && !admitted_objects().any(|object| {
            object.activity.iter().any(|activity| {
                activity.status && filters.activities.contains(&activity.activity_name)
            })
        })
    {
        return false;
    }

    if !filters.data_field_actions.is_empty()
        && !admitted_objects().any(|object| {
            object
                .activity
                .iter()
                .filter(|activity| activity.status && filters.admits_activity(activity))
                .any(|activity| {
                    filters.data_field_actions.iter().all(|label| {
                        activity
                            .find_action(label)
                            .is_some_and(|action| action.status)
                    })
                })
        })
    {
        return false;
    }

    true
}

/// Combined query behind the role sidebar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleQuery {
    /// Case-insensitive substring of the role name.
    #[serde(default)]
    pub search: String,
    /// Status restriction.
    #[serde(default)]
    pub status: StatusFilter,
    /// Nested membership filters.
    #[serde(default)]
    pub filters: RoleFilterSet,
}

impl RoleQuery {
    /// Returns whether the role passes search, status and filters.
    #[must_use]
    pub fn matches(&self, role: &Role) -> bool {
        role.role_name
            .to_lowercase()
            .contains(&self.search.to_lowercase())
            && self.status.admits_role(role.status)
            && (self.filters.is_empty() || role_matches_filters(role, &self.filters))
    }

    /// Keeps the roles passing the query, in catalog order.
    #[must_use]
    pub fn filter_roles(&self, roles: &[Role]) -> Vec<Role> {
        roles
            .iter()
            .filter(|role| self.matches(role))
            .cloned()
            .collect()
    }
}
