use serde::{Deserialize, Serialize};

/// Role of a portal user.
///
/// Brokers manage a team; agents belong to a broker via `broker_id`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A broker, who owns listings and manages agents.
    Broker,

    /// An agent, who belongs to a broker.
    Agent,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Broker => write!(f, "broker"),
            Role::Agent => write!(f, "agent"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "broker" => Ok(Role::Broker),
            "agent" => Ok(Role::Agent),
            _ => Err(format!("Invalid role: {}. Valid options: broker, agent", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, to_value};

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(to_value(Role::Broker).unwrap(), json!("broker"));
        assert_eq!(to_value(Role::Agent).unwrap(), json!("agent"));
    }

    #[test]
    fn role_from_str() {
        assert_eq!("broker".parse::<Role>().unwrap(), Role::Broker);
        assert_eq!("Agent".parse::<Role>().unwrap(), Role::Agent);
        assert!("admin".parse::<Role>().is_err());
    }
}
