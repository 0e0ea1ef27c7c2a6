use serde::{Deserialize, Serialize};

use crate::types::Role;

/// Partial update of a user record. Unset fields are left untouched by the
/// service and omitted from the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserUpdateParams {
    /// New email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// New password.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// New role.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,

    /// New broker assignment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broker_id: Option<i64>,

    /// Activate or deactivate the account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl UserUpdateParams {
    /// Creates an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a new email address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets a new password.
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Sets a new role.
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    /// Sets a new broker assignment.
    pub fn with_broker_id(mut self, broker_id: i64) -> Self {
        self.broker_id = Some(broker_id);
        self
    }

    /// Activates or deactivates the account.
    pub fn with_is_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, to_value};

    #[test]
    fn empty_update_serializes_to_empty_object() {
        assert_eq!(to_value(UserUpdateParams::new()).unwrap(), json!({}));
    }

    #[test]
    fn update_only_carries_set_fields() {
        let params = UserUpdateParams::new().with_is_active(false);
        assert_eq!(to_value(&params).unwrap(), json!({ "is_active": false }));
    }
}
