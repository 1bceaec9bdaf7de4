use serde::{Deserialize, Serialize};

use super::User;

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/register`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Response of both login and registration.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}
