use serde::{Deserialize, Serialize};

use crate::types::Role;

/// A portal user record as returned by the listing service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Unique identifier.
    pub id: i64,

    /// The user's email address, also their login name.
    pub email: String,

    /// Whether this is a broker or an agent.
    pub role: Role,

    /// The broker this user belongs to, if an agent.
    pub broker_id: Option<i64>,

    /// Deactivated users keep their records but cannot log in.
    pub is_active: bool,
}
