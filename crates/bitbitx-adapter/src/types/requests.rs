/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Service identifier for account registration
pub const SERVICE_REGISTER: &str = "dna_register";

/// Service identifier for account login
pub const SERVICE_LOGIN: &str = "dna_personLogin";

/// A remote command: service identifier plus string parameters.
///
/// Serialized with serde, never by string interpolation, so parameter
/// values containing quotes or other JSON metacharacters stay intact.
/// Parameters are ordered, which makes the sealed envelope deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    #[serde(rename = "serviceId")]
    pub service_id: String,
    pub params: BTreeMap<String, String>,
}

impl Command {
    /// Create a command with no parameters
    pub fn new(service_id: impl Into<String>) -> Self {
        Self {
            service_id: service_id.into(),
            params: BTreeMap::new(),
        }
    }

    /// Add a parameter
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}

/// Registration request fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub mobile: String,
    pub email: String,
    pub name: String,
    pub password: String,
    pub pay_password: String,
}
