//! Externally configured admin authorization.

/// Decides which signed-in identity sees the admin dashboard.
///
/// The privileged identity is named by the `ADMIN_PROVIDER_ID`
/// environment variable — the Google-issued subject id, not the internal
/// row id, so it stays valid across database rebuilds. Rotating the admin
/// is a redeploy-free configuration change. With the variable unset,
/// nobody is admin.
#[derive(Debug, Clone)]
pub struct AdminPolicy {
    admin_provider_id: Option<String>,
}

impl AdminPolicy {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            admin_provider_id: std::env::var("ADMIN_PROVIDER_ID")
                .ok()
                .filter(|id| !id.trim().is_empty()),
        }
    }

    pub fn is_admin(&self, provider_id: &str) -> bool {
        self.admin_provider_id.as_deref() == Some(provider_id)
    }
}
