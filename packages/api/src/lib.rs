//! # API crate — shared fullstack server functions
//!
//! Defines every Dioxus server function the web front-end calls, along
//! with the supporting modules they depend on.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | — | Google OAuth sign-in, session keys, and the externally configured admin policy |
//! | [`db`] | — | PostgreSQL connection pool (lazy `OnceCell` singleton) and migrations |
//! | [`feed`] | `server` | Insert sequence behind the admin dashboard's live long-poll |
//! | [`models`] | — | Database models (`User`) and their client-safe projections (`UserInfo`) |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` in this file is a Dioxus server function,
//! annotated with `#[get(...)]` or `#[post(...)]` and compiled twice:
//! once with full server logic (behind `#[cfg(feature = "server")]`) and
//! once as a thin client stub that simply forwards the call over HTTP.
//!
//! - **Authentication**: `get_current_user`, `get_login_url`
//! - **Profile**: `get_profile`, `save_profile`
//! - **Responses**: `submit_response`, `list_responses`, `poll_responses`

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use store::{Answers, ResponseDoc};

pub mod auth;
pub mod db;
#[cfg(feature = "server")]
pub mod feed;
pub mod models;

pub use models::UserInfo;
pub use store::Profile;

/// One long-poll result: the sequence observed server-side plus the full
/// current response set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResponseBatch {
    pub seq: u64,
    pub responses: Vec<ResponseDoc>,
}

/// The signed-in user from the session, or None.
#[cfg(feature = "server")]
#[get("/api/auth/me", session: tower_sessions::Session)]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    let Some(user) = session_user(&session).await? else {
        return Ok(None);
    };
    let policy = auth::AdminPolicy::from_env();
    Ok(Some(user.to_info(&policy)))
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/me")]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    Ok(None)
}

/// The Google OAuth authorization URL to redirect the browser to.
#[cfg(feature = "server")]
#[get("/api/auth/login")]
pub async fn get_login_url() -> Result<String, ServerFnError> {
    let oauth = auth::GoogleOAuth::new().map_err(|e| ServerFnError::new(e.to_string()))?;
    let (url, _, _) = oauth
        .generate_auth_url()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    Ok(url)
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/login")]
pub async fn get_login_url() -> Result<String, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// The signed-in user's profile document, if one was ever saved.
#[cfg(feature = "server")]
#[get("/api/profile", session: tower_sessions::Session)]
pub async fn get_profile() -> Result<Option<Profile>, ServerFnError> {
    use crate::db::get_pool;

    let Some(user) = session_user(&session).await? else {
        return Ok(None);
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let row: Option<(String, String)> =
        sqlx::query_as("SELECT email, area FROM profiles WHERE user_id = $1")
            .bind(user.id)
            .fetch_optional(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(row.map(|(email, area)| Profile {
        user_id: user.id.to_string(),
        email,
        // An unknown stored tag routes the user back to area selection.
        area: store::Area::from_tag(&area),
    }))
}

#[cfg(not(feature = "server"))]
#[get("/api/profile")]
pub async fn get_profile() -> Result<Option<Profile>, ServerFnError> {
    Ok(None)
}

/// Overwrite the signed-in user's profile with the chosen area.
#[cfg(feature = "server")]
#[post("/api/profile", session: tower_sessions::Session)]
pub async fn save_profile(area: String) -> Result<Profile, ServerFnError> {
    use crate::db::get_pool;

    let user = session_user(&session)
        .await?
        .ok_or_else(|| ServerFnError::new("Not authenticated"))?;

    if area.trim().is_empty() {
        return Err(ServerFnError::new(
            store::ValidationError::EmptyArea.to_string(),
        ));
    }
    let area = store::Area::from_tag(&area).ok_or_else(|| {
        ServerFnError::new(store::UnknownAreaError { tag: area.clone() }.to_string())
    })?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    // Full overwrite, not a merge.
    sqlx::query(
        r#"
        INSERT INTO profiles (user_id, email, area)
        VALUES ($1, $2, $3)
        ON CONFLICT (user_id) DO UPDATE SET
            email = EXCLUDED.email,
            area = EXCLUDED.area,
            updated_at = NOW()
        "#,
    )
    .bind(user.id)
    .bind(&user.email)
    .bind(area.tag())
    .execute(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(Profile {
        user_id: user.id.to_string(),
        email: user.email,
        area: Some(area),
    })
}

#[cfg(not(feature = "server"))]
#[post("/api/profile")]
pub async fn save_profile(area: String) -> Result<Profile, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Append one response to the collection.
#[cfg(feature = "server")]
#[post("/api/responses", session: tower_sessions::Session)]
pub async fn submit_response(area: String, answers: Answers) -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    let user = session_user(&session)
        .await?
        .ok_or_else(|| ServerFnError::new("Not authenticated"))?;

    let questions = store::questions_for_tag(&area)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    // The answer keys must be exactly the catalog labels for this area.
    if !store::forms::answers_match_questions(questions, &answers) {
        return Err(ServerFnError::new(
            "respostas não correspondem ao formulário da área",
        ));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let answers_json =
        serde_json::to_value(&answers).map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query(
        r#"
        INSERT INTO responses (user_id, email, area, answers)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(user.id)
    .bind(&user.email)
    .bind(&area)
    .bind(&answers_json)
    .execute(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    feed::notify_inserted();
    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/responses")]
pub async fn submit_response(area: String, answers: Answers) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// The full current response set. Admin only.
#[cfg(feature = "server")]
#[get("/api/admin/responses", session: tower_sessions::Session)]
pub async fn list_responses() -> Result<Vec<ResponseDoc>, ServerFnError> {
    require_admin(&session).await?;
    load_responses().await
}

#[cfg(not(feature = "server"))]
#[get("/api/admin/responses")]
pub async fn list_responses() -> Result<Vec<ResponseDoc>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Long-poll for the response collection. Admin only.
///
/// Parks until the insert sequence passes `since` (bounded), then returns
/// the full current set with the sequence to pass back on the next call.
/// Pass a `since` in the future (e.g. `u64::MAX`) to get the current set
/// immediately.
#[cfg(feature = "server")]
#[get("/api/admin/responses/poll", session: tower_sessions::Session)]
pub async fn poll_responses(since: u64) -> Result<ResponseBatch, ServerFnError> {
    require_admin(&session).await?;

    // A `since` ahead of the sequence means the caller has seen nothing
    // yet; answer immediately with the current set.
    let current = feed::current_seq();
    let seq = if since > current {
        current
    } else {
        feed::wait_past(since, std::time::Duration::from_secs(25)).await
    };
    let responses = load_responses().await?;
    Ok(ResponseBatch { seq, responses })
}

#[cfg(not(feature = "server"))]
#[get("/api/admin/responses/poll")]
pub async fn poll_responses(since: u64) -> Result<ResponseBatch, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Helper: load the user row named by the session, if any.
#[cfg(feature = "server")]
async fn session_user(
    session: &tower_sessions::Session,
) -> Result<Option<models::User>, ServerFnError> {
    use crate::db::get_pool;

    let user_id: Option<String> = session
        .get(auth::SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user_id) = user_id else {
        return Ok(None);
    };

    let user_uuid = uuid::Uuid::parse_str(&user_id)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<models::User> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(user_uuid)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user)
}

/// Helper: reject callers whose identity is not the configured admin.
#[cfg(feature = "server")]
async fn require_admin(session: &tower_sessions::Session) -> Result<(), ServerFnError> {
    let user = session_user(session)
        .await?
        .ok_or_else(|| ServerFnError::new("Not authenticated"))?;

    let policy = auth::AdminPolicy::from_env();
    if !policy.is_admin(&user.provider_id) {
        return Err(ServerFnError::new("Not authorized"));
    }
    Ok(())
}

/// Helper: read the whole response collection in submission order.
#[cfg(feature = "server")]
async fn load_responses() -> Result<Vec<ResponseDoc>, ServerFnError> {
    use crate::db::get_pool;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let rows: Vec<(
        uuid::Uuid,
        String,
        String,
        serde_json::Value,
        chrono::DateTime<chrono::Utc>,
    )> = sqlx::query_as(
        "SELECT user_id, email, area, answers, submitted_at FROM responses ORDER BY submitted_at",
    )
    .fetch_all(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    let mut responses = Vec::with_capacity(rows.len());
    for (user_id, email, area_tag, answers, submitted_at) in rows {
        let Some(area) = store::Area::from_tag(&area_tag) else {
            // A row written under a tag the catalog no longer knows.
            tracing::warn!("skipping response with unknown area tag {area_tag}");
            continue;
        };
        let answers: Answers = serde_json::from_value(answers)
            .map_err(|e| ServerFnError::new(e.to_string()))?;
        responses.push(ResponseDoc {
            user_id: user_id.to_string(),
            email,
            area,
            answers,
            submitted_at: submitted_at.timestamp(),
        });
    }
    Ok(responses)
}
