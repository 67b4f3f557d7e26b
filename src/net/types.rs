//! Wire schema for the roster REST API.
//!
//! Field names follow the server's camelCase JSON convention.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A kindergarten group row; also embedded in [`Child`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: i64,
    pub name: String,
    pub child_count: i64,
}

/// Payload for creating or renaming a group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroup {
    pub name: String,
}

/// A child record with its assigned group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Child {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub patronymic: String,
    pub birthday_date: String,
    pub group: Group,
}

/// Payload for creating or updating a child record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateChild {
    pub first_name: String,
    pub last_name: String,
    pub patronymic: String,
    pub birthday_date: String,
    pub group_id: i64,
}

/// Credential-exchange request body.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Credential-exchange success envelope; `data` carries the
/// `"Bearer <token>"` credential string.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: String,
}
