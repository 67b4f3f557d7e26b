//! Typed endpoint wrappers over the authorizing client.
//!
//! One function per endpoint; every call shares the client's authorization
//! and failure normalization. Nothing here touches the session store
//! directly — the login page commits the parsed credential itself.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::client::{ApiClient, ApiResult};
use super::types::{Child, CreateChild, CreateGroup, Group, LoginRequest, LoginResponse};

const LOGIN_ENDPOINT: &str = "/auth/login";
const GROUPS_ENDPOINT: &str = "/groups";
const CHILDREN_ENDPOINT: &str = "/children";

fn group_endpoint(id: i64) -> String {
    format!("{GROUPS_ENDPOINT}/{id}")
}

fn child_endpoint(id: i64) -> String {
    format!("{CHILDREN_ENDPOINT}/{id}")
}

/// Extract the token from a `"<scheme> <token>"` credential string.
///
/// A missing `Bearer` scheme, missing separator, or empty remainder yields
/// `None` — a failed parse is an unauthenticated outcome, not an error.
pub fn parse_bearer_credential(raw: &str) -> Option<String> {
    let (scheme, token) = raw.split_once(' ')?;
    if scheme != "Bearer" || token.is_empty() {
        return None;
    }
    Some(token.to_owned())
}

/// Exchange credentials for a bearer token via `POST /auth/login`.
///
/// Returns `Ok(None)` when the response parses but carries no usable
/// credential string.
///
/// # Errors
///
/// Rejected credentials and transport faults surface as an [`ApiResult`]
/// error carrying a normalized message.
pub async fn login(client: &ApiClient, email: &str, password: &str) -> ApiResult<Option<String>> {
    let payload = LoginRequest {
        email: email.to_owned(),
        password: password.to_owned(),
    };
    let resp: LoginResponse = client.post_json(LOGIN_ENDPOINT, &payload).await?;
    Ok(parse_bearer_credential(&resp.data))
}

/// Fetch all groups via `GET /groups`.
pub async fn fetch_groups(client: &ApiClient) -> ApiResult<Vec<Group>> {
    client.get_json(GROUPS_ENDPOINT).await
}

/// Fetch one group via `GET /groups/{id}`.
pub async fn fetch_group(client: &ApiClient, id: i64) -> ApiResult<Group> {
    client.get_json(&group_endpoint(id)).await
}

/// Create a group via `POST /groups`.
pub async fn create_group(client: &ApiClient, data: &CreateGroup) -> ApiResult<Group> {
    client.post_json(GROUPS_ENDPOINT, data).await
}

/// Rename a group via `PUT /groups/{id}`.
pub async fn update_group(client: &ApiClient, id: i64, data: &CreateGroup) -> ApiResult<Group> {
    client.put_json(&group_endpoint(id), data).await
}

/// Delete a group via `DELETE /groups/{id}`.
pub async fn delete_group(client: &ApiClient, id: i64) -> ApiResult<()> {
    client.delete(&group_endpoint(id)).await
}

/// Fetch all children via `GET /children`.
pub async fn fetch_children(client: &ApiClient) -> ApiResult<Vec<Child>> {
    client.get_json(CHILDREN_ENDPOINT).await
}

/// Fetch one child via `GET /children/{id}`.
pub async fn fetch_child(client: &ApiClient, id: i64) -> ApiResult<Child> {
    client.get_json(&child_endpoint(id)).await
}

/// Create a child record via `POST /children`.
pub async fn create_child(client: &ApiClient, data: &CreateChild) -> ApiResult<Child> {
    client.post_json(CHILDREN_ENDPOINT, data).await
}

/// Update a child record via `PUT /children/{id}`.
pub async fn update_child(client: &ApiClient, id: i64, data: &CreateChild) -> ApiResult<Child> {
    client.put_json(&child_endpoint(id), data).await
}

/// Delete a child record via `DELETE /children/{id}`.
pub async fn delete_child(client: &ApiClient, id: i64) -> ApiResult<()> {
    client.delete(&child_endpoint(id)).await
}
