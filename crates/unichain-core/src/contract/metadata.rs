//! Contract metadata served through the reserved `GetMetadata` function
//!
//! Built from the dispatch table so the advertised transactions can never
//! drift from what `invoke` accepts.

use serde::Serialize;
use std::collections::BTreeMap;

use super::UniversityContract;
use crate::dispatch::{ReturnType, TransactionKind, TRANSACTIONS};

const UNIVERSITY_SCHEMA: &str = "University";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContractMetadata {
    pub info: ContractInfo,
    pub contract: ContractDescription,
    pub components: Components,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContractInfo {
    pub title: String,
    pub description: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContractDescription {
    pub name: String,
    pub transactions: Vec<TransactionMetadata>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionMetadata {
    pub name: String,
    pub tag: Vec<TransactionKind>,
    pub parameters: Vec<ParameterMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub returns: Option<Schema>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterMetadata {
    pub name: String,
    pub schema: Schema,
}

/// Either a primitive JSON schema type or a reference to a component
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schema {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl Schema {
    fn primitive(type_name: &str) -> Self {
        Self {
            type_name: Some(type_name.to_string()),
            reference: None,
        }
    }

    fn component(name: &str) -> Self {
        Self {
            type_name: None,
            reference: Some(format!("#/components/schemas/{}", name)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Components {
    pub schemas: BTreeMap<String, ObjectSchema>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectSchema {
    #[serde(rename = "$id")]
    pub id: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub required: Vec<String>,
    pub properties: BTreeMap<String, Schema>,
}

impl ContractMetadata {
    /// Describe the University contract
    pub fn describe() -> Self {
        let transactions = TRANSACTIONS
            .iter()
            .map(|descriptor| TransactionMetadata {
                name: descriptor.name.to_string(),
                tag: vec![descriptor.kind],
                parameters: descriptor
                    .parameters
                    .iter()
                    .map(|name| ParameterMetadata {
                        name: name.to_string(),
                        schema: Schema::primitive("string"),
                    })
                    .collect(),
                returns: descriptor.returns.map(|returns| match returns {
                    ReturnType::Boolean => Schema::primitive("boolean"),
                    ReturnType::University => Schema::component(UNIVERSITY_SCHEMA),
                }),
            })
            .collect();

        let mut properties = BTreeMap::new();
        properties.insert("cnpj".to_string(), Schema::primitive("string"));
        properties.insert("universityName".to_string(), Schema::primitive("string"));

        let mut schemas = BTreeMap::new();
        schemas.insert(
            UNIVERSITY_SCHEMA.to_string(),
            ObjectSchema {
                id: UNIVERSITY_SCHEMA.to_string(),
                type_name: "object".to_string(),
                required: vec!["cnpj".to_string(), "universityName".to_string()],
                properties,
            },
        );

        Self {
            info: ContractInfo {
                title: UniversityContract::NAME.to_string(),
                description: "My Smart Contract".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            contract: ContractDescription {
                name: UniversityContract::NAME.to_string(),
                transactions,
            },
            components: Components { schemas },
        }
    }

    /// Look up one advertised transaction
    pub fn transaction(&self, name: &str) -> Option<&TransactionMetadata> {
        self.contract.transactions.iter().find(|t| t.name == name)
    }
}
