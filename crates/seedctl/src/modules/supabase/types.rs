use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize)]
pub(crate) struct CreateAuthUserRequest {
    pub email: String,
    pub password: String,
    pub email_confirm: bool,
    pub user_metadata: UserMetadata,
}

#[derive(Serialize)]
pub(crate) struct UserMetadata {
    pub full_name: String,
}

#[derive(Deserialize)]
pub(crate) struct AuthUserResponse {
    pub id: Uuid,
}

#[derive(Deserialize)]
pub(crate) struct Tenant {
    pub id: Uuid,
    pub name: String,
}

#[derive(Serialize)]
pub(crate) struct NewProfile {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub full_name: String,
    pub role_id: i64,
    pub is_active: bool,
    pub locale: String,
    pub timezone: String,
}
