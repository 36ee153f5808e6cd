mod http;
pub(crate) mod types;

pub(crate) use http::{create_auth_user, fetch_first_tenant, insert_profile};
pub(crate) use types::{
    AuthUserResponse, CreateAuthUserRequest, NewProfile, Tenant, UserMetadata,
};

pub(crate) struct ServiceContext<'a> {
    pub client: &'a reqwest::Client,
    pub url: &'a str,
    pub service_role_key: &'a str,
}
