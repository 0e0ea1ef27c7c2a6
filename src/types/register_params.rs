use serde::{Deserialize, Serialize};

use crate::types::Role;

/// Parameters for self-service registration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegisterParams {
    /// Email address, which becomes the login name.
    pub email: String,

    /// Password; the service enforces its own minimum length.
    pub password: String,

    /// The role to register as.
    pub role: Role,

    /// The broker an agent belongs to. Omitted from the wire when absent;
    /// ignored by the service for brokers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broker_id: Option<i64>,
}

impl RegisterParams {
    /// Registration for a new broker.
    pub fn broker(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            role: Role::Broker,
            broker_id: None,
        }
    }

    /// Registration for a new agent, optionally attached to a broker.
    pub fn agent(
        email: impl Into<String>,
        password: impl Into<String>,
        broker_id: Option<i64>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            role: Role::Agent,
            broker_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, to_value};

    #[test]
    fn broker_registration_omits_broker_id() {
        let params = RegisterParams::broker("owner@coastalvision.example", "hunter2hunter2");
        assert_eq!(
            to_value(&params).unwrap(),
            json!({
                "email": "owner@coastalvision.example",
                "password": "hunter2hunter2",
                "role": "broker"
            })
        );
    }

    #[test]
    fn agent_registration_carries_broker_id() {
        let params = RegisterParams::agent("rachel@coastalvision.example", "hunter2hunter2", Some(3));
        assert_eq!(
            to_value(&params).unwrap(),
            json!({
                "email": "rachel@coastalvision.example",
                "password": "hunter2hunter2",
                "role": "agent",
                "broker_id": 3
            })
        );
    }
}
