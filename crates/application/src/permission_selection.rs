use std::collections::BTreeMap;

use permatrix_core::{AppError, AppResult};
use permatrix_domain::{Activity, Role, RoleObject};
use serde::{Deserialize, Serialize};

/// Unsaved activity and action toggles for the selected role.
///
/// Activities are keyed by name across the whole role, so two objects
/// declaring the same activity name share one toggle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionSelection {
    active_activities: BTreeMap<String, bool>,
    selected_actions: BTreeMap<String, Vec<String>>,
}

impl PermissionSelection {
    /// Derives the selection from the stored status flags of a role.
    #[must_use]
    pub fn from_role(role: &Role) -> Self {
        let mut selection = Self::default();
        for activity in role.activities() {
            selection
                .active_activities
                .insert(activity.activity_name.clone(), activity.status);
            selection.selected_actions.insert(
                activity.activity_name.clone(),
                activity.enabled_action_labels().map(str::to_owned).collect(),
            );
        }
        selection
    }

    /// Returns whether the named activity is switched on.
    #[must_use]
    pub fn is_activity_active(&self, activity_name: &str) -> bool {
        self.active_activities
            .get(activity_name)
            .copied()
            .unwrap_or(false)
    }

    /// Returns the selected labels of an activity in selection order.
    #[must_use]
    pub fn selected_labels(&self, activity_name: &str) -> &[String] {
        self.selected_actions
            .get(activity_name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns whether a label is selected under an activity.
    #[must_use]
    pub fn is_action_selected(&self, activity_name: &str, label: &str) -> bool {
        self.selected_labels(activity_name)
            .iter()
            .any(|selected| selected == label)
    }

    /// Every activity flag known to the selection.
    #[must_use]
    pub fn active_activities(&self) -> &BTreeMap<String, bool> {
        &self.active_activities
    }

    /// Every activity's selected labels.
    #[must_use]
    pub fn selected_actions(&self) -> &BTreeMap<String, Vec<String>> {
        &self.selected_actions
    }

    /// Flips an activity.
    ///
    /// Switching off clears its labels. Switching on restores the labels
    /// stored as granted on the role, not the labels selected before.
    pub fn toggle_activity(&mut self, role: &Role, activity_name: &str) -> AppResult<()> {
        let activity = role.find_activity(activity_name).ok_or_else(|| {
            AppError::NotFound(format!(
                "activity '{activity_name}' does not exist on role '{}'",
                role.role_id
            ))
        })?;

        let now_active = !self.is_activity_active(activity_name);
        self.active_activities
            .insert(activity_name.to_owned(), now_active);

        let labels = if now_active {
            activity.enabled_action_labels().map(str::to_owned).collect()
        } else {
            Vec::new()
        };
        self.selected_actions.insert(activity_name.to_owned(), labels);
        Ok(())
    }

    /// Adds the label when absent, removes it when present.
    pub fn toggle_action(&mut self, activity_name: &str, label: &str) {
        let labels = self
            .selected_actions
            .entry(activity_name.to_owned())
            .or_default();

        if let Some(position) = labels.iter().position(|selected| selected == label) {
            labels.remove(position);
        } else {
            labels.push(label.to_owned());
        }
    }

    /// Switches every known activity off and clears every label.
    pub fn reset_all(&mut self) {
        self.active_activities
            .values_mut()
            .for_each(|active| *active = false);
        self.selected_actions.values_mut().for_each(Vec::clear);
    }

    /// Switches on every activity of the role with all of its labels.
    pub fn enable_all(&mut self, role: &Role) {
        for activity in role.activities() {
            self.enable_activity(activity);
        }
    }

    /// Switches off every activity of one object of the role.
    pub fn reset_object(&mut self, role: &Role, object_id: &str) -> AppResult<()> {
        let object = object_of(role, object_id)?;
        for activity in &object.activity {
            self.active_activities
                .insert(activity.activity_name.clone(), false);
            self.selected_actions
                .insert(activity.activity_name.clone(), Vec::new());
        }
        Ok(())
    }

    /// Switches on every activity of one object of the role with all labels.
    pub fn enable_object(&mut self, role: &Role, object_id: &str) -> AppResult<()> {
        let object = object_of(role, object_id)?;
        for activity in &object.activity {
            self.enable_activity(activity);
        }
        Ok(())
    }

    /// Writes the selection back into a copy of the role.
    ///
    /// Activities without a flag end up disabled; action status becomes
    /// label membership.
    #[must_use]
    pub fn apply_to(&self, role: &Role) -> Role {
        let mut updated = role.clone();
        for activity in updated
            .object
            .iter_mut()
            .flat_map(|object| object.activity.iter_mut())
        {
            activity.status = self.is_activity_active(&activity.activity_name);
            let labels = self.selected_labels(&activity.activity_name);
            for action in &mut activity.data_field_actions {
                action.status = labels.iter().any(|label| label == &action.label);
            }
        }
        updated
    }

    fn enable_activity(&mut self, activity: &Activity) {
        self.active_activities
            .insert(activity.activity_name.clone(), true);
        self.selected_actions.insert(
            activity.activity_name.clone(),
            activity.action_labels().map(str::to_owned).collect(),
        );
    }
}

fn object_of<'a>(role: &'a Role, object_id: &str) -> AppResult<&'a RoleObject> {
    role.find_object(object_id).ok_or_else(|| {
        AppError::NotFound(format!(
            "object '{object_id}' is not part of role '{}'",
            role.role_id
        ))
    })
}

#[cfg(test)]
mod tests;
