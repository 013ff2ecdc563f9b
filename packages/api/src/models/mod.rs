//! Database models and their client-safe projections.

mod user;

#[cfg(feature = "server")]
pub use user::User;
pub use user::UserInfo;
