use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// University - the single record type kept in the world state
///
/// Stored under its `cnpj` as a compact JSON object:
/// `{"cnpj":"1001","universityName":"Acme U"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct University {
    /// World state key; never changes once created
    pub cnpj: String,

    /// Display name of the university
    pub university_name: String,
}

impl University {
    pub fn new(cnpj: impl Into<String>, university_name: impl Into<String>) -> Self {
        Self {
            cnpj: cnpj.into(),
            university_name: university_name.into(),
        }
    }

    /// Serialize into the bytes written to the world state
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if encoding fails.
    pub fn to_state_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Decode a world state value
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if the bytes are not a University JSON object.
    pub fn from_state_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
