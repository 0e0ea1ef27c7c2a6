use serde::{Deserialize, Serialize};

use crate::types::Role;

/// Parameters for a broker creating a user on their team.
///
/// The service forces agents created this way to belong to the creating
/// broker regardless of `broker_id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserCreateParams {
    /// Email address, which becomes the login name.
    pub email: String,

    /// Password; the service enforces its own minimum length.
    pub password: String,

    /// The role for the new user.
    pub role: Role,

    /// The broker the user belongs to. Omitted from the wire when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broker_id: Option<i64>,
}

impl UserCreateParams {
    /// Creates parameters for a new user with the given role.
    pub fn new(email: impl Into<String>, password: impl Into<String>, role: Role) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            role,
            broker_id: None,
        }
    }

    /// Sets the broker the user belongs to.
    pub fn with_broker_id(mut self, broker_id: i64) -> Self {
        self.broker_id = Some(broker_id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, to_value};

    #[test]
    fn create_params_serialization() {
        let params = UserCreateParams::new("new@coastalvision.example", "hunter2hunter2", Role::Agent)
            .with_broker_id(3);
        assert_eq!(
            to_value(&params).unwrap(),
            json!({
                "email": "new@coastalvision.example",
                "password": "hunter2hunter2",
                "role": "agent",
                "broker_id": 3
            })
        );
    }
}
