use serde::{Deserialize, Serialize};

/// Request to login to the Omada controller.
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    /// The username to authenticate with.
    pub username: String,

    /// The password to authenticate with.
    pub password: String,
}

/// Result payload of a successful login.
#[derive(Debug, Deserialize)]
pub struct LoginResult {
    /// Session token, carried on every subsequent request.
    #[serde(default)]
    pub token: String,
}

/// Result payload of the `loginStatus` endpoint.
#[derive(Debug, Deserialize)]
pub struct LoginStatus {
    /// Whether the current session is logged in.
    #[serde(default)]
    pub login: bool,
}
