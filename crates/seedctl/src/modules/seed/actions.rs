use tracing::info;

use crate::modules::seed::descriptors::{SeedUser, TEST_USERS};
use crate::modules::supabase::{
    create_auth_user, fetch_first_tenant, insert_profile, CreateAuthUserRequest, NewProfile,
    ServiceContext, Tenant, UserMetadata,
};

pub(crate) enum SeedOutcome {
    Created,
    AlreadyExists,
    Failed(String),
}

/// Look up the tenant to stamp profiles with, then provision every
/// descriptor in order. A failing descriptor never stops the loop.
pub(crate) async fn run_seed(ctx: &ServiceContext<'_>) -> anyhow::Result<()> {
    let Some(tenant) = fetch_first_tenant(ctx).await? else {
        anyhow::bail!("no tenants found; create a tenant before seeding test users");
    };
    println!("Using tenant: {} ({})", tenant.name, short_id(&tenant));
    println!();

    for user in TEST_USERS.iter() {
        match provision_user(ctx, &tenant, user).await {
            SeedOutcome::Created => {
                println!("{} ({}) ... created", user.role_name, user.email);
            }
            SeedOutcome::AlreadyExists => {
                println!("{} ({}) ... already exists", user.role_name, user.email);
            }
            SeedOutcome::Failed(message) => {
                println!("{} ({}) ... failed: {}", user.role_name, user.email, message);
            }
        }
    }
    Ok(())
}

pub(crate) async fn provision_user(
    ctx: &ServiceContext<'_>,
    tenant: &Tenant,
    user: &SeedUser,
) -> SeedOutcome {
    match try_provision(ctx, tenant, user).await {
        Ok(()) => SeedOutcome::Created,
        Err(err) => {
            let message = err.to_string();
            if is_already_exists(&message) {
                info!(email = user.email, "account already provisioned");
                SeedOutcome::AlreadyExists
            } else {
                SeedOutcome::Failed(message)
            }
        }
    }
}

async fn try_provision(
    ctx: &ServiceContext<'_>,
    tenant: &Tenant,
    user: &SeedUser,
) -> anyhow::Result<()> {
    let identity = create_auth_user(
        ctx,
        &CreateAuthUserRequest {
            email: user.email.to_string(),
            password: user.password.to_string(),
            email_confirm: true,
            user_metadata: UserMetadata {
                full_name: user.full_name.to_string(),
            },
        },
    )
    .await?;

    insert_profile(
        ctx,
        &NewProfile {
            id: identity.id,
            tenant_id: tenant.id,
            full_name: user.full_name.to_string(),
            role_id: user.role_id,
            is_active: true,
            locale: "tr".to_string(),
            timezone: "Asia/Dubai".to_string(),
        },
    )
    .await
}

// Duplicate detection is a substring match on the remote error text. GoTrue
// says "User already registered" on signup and "has already been registered"
// on the admin endpoint; PostgREST says "duplicate key". All count as benign.
pub(crate) fn is_already_exists(message: &str) -> bool {
    let message = message.to_lowercase();
    message.contains("already registered")
        || message.contains("already been registered")
        || message.contains("duplicate")
}

fn short_id(tenant: &Tenant) -> String {
    let id = tenant.id.to_string();
    format!("{}...", &id[..8])
}
