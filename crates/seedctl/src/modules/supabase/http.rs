use reqwest::Method;
use tracing::debug;

use crate::modules::supabase::{
    AuthUserResponse, CreateAuthUserRequest, NewProfile, ServiceContext, Tenant,
};

/// Create an authentication identity through the GoTrue admin endpoint.
pub(crate) async fn create_auth_user(
    ctx: &ServiceContext<'_>,
    payload: &CreateAuthUserRequest,
) -> anyhow::Result<AuthUserResponse> {
    let url = format!("{}/auth/v1/admin/users", ctx.url.trim_end_matches('/'));
    let response = send_request(ctx, Method::POST, &url, Some(serde_json::to_value(payload)?)).await?;
    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        anyhow::bail!("Auth user create failed: {status} {body}");
    }
    Ok(response.json::<AuthUserResponse>().await?)
}

/// First tenant row wins; the caller treats `None` as a fatal precondition.
pub(crate) async fn fetch_first_tenant(
    ctx: &ServiceContext<'_>,
) -> anyhow::Result<Option<Tenant>> {
    let url = format!(
        "{}/rest/v1/tenants?select=id,name&limit=1",
        ctx.url.trim_end_matches('/')
    );
    let response = send_request(ctx, Method::GET, &url, None).await?;
    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        anyhow::bail!("Tenant lookup failed: {status} {body}");
    }
    let tenants = response.json::<Vec<Tenant>>().await?;
    Ok(tenants.into_iter().next())
}

pub(crate) async fn insert_profile(
    ctx: &ServiceContext<'_>,
    payload: &NewProfile,
) -> anyhow::Result<()> {
    let url = format!("{}/rest/v1/profiles", ctx.url.trim_end_matches('/'));
    let response = send_request(ctx, Method::POST, &url, Some(serde_json::to_value(payload)?)).await?;
    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        anyhow::bail!("Profile insert failed: {status} {body}");
    }
    Ok(())
}

async fn send_request(
    ctx: &ServiceContext<'_>,
    method: Method,
    url: &str,
    payload: Option<serde_json::Value>,
) -> anyhow::Result<reqwest::Response> {
    let method_clone = method.clone();
    let builder = ctx
        .client
        .request(method, url)
        .header("apikey", ctx.service_role_key)
        .bearer_auth(ctx.service_role_key);
    let builder = if let Some(payload) = payload {
        builder.json(&payload)
    } else {
        builder
    };
    debug!(method = %method_clone, url = %url, "http request");
    let start = std::time::Instant::now();
    let response = builder.send().await?;
    debug!(
        method = %method_clone,
        url = %url,
        status = %response.status(),
        elapsed_ms = start.elapsed().as_millis(),
        "http response"
    );
    Ok(response)
}
