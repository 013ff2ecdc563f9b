//! Authentication: Google OAuth sign-in, sessions, and the admin policy.

#[cfg(feature = "server")]
mod config;
#[cfg(feature = "server")]
mod error;
#[cfg(feature = "server")]
mod google;
#[cfg(feature = "server")]
mod policy;
#[cfg(feature = "server")]
mod session;

#[cfg(feature = "server")]
pub use config::OAuthConfig;
#[cfg(feature = "server")]
pub use error::AuthError;
#[cfg(feature = "server")]
pub use google::GoogleOAuth;
#[cfg(feature = "server")]
pub use policy::AdminPolicy;
#[cfg(feature = "server")]
pub use session::SESSION_USER_ID_KEY;
